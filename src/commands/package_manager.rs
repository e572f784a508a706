use std::fmt;

use crate::error::ScaffoldError;

/// Runtime dependencies installed into every generated project.
pub const RUNTIME_DEPENDENCIES: &[&str] = &["express", "cors", "dotenv"];

/// Package managers the scaffolder knows how to drive.
///
/// Every per-manager difference lives here: the init and install argv
/// shapes, the dependency lists, the scripts written into package.json,
/// and whether `npx tsc --init` runs at all. The pipeline itself stays
/// manager-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// All supported managers, in prompt order.
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    pub fn parse(name: &str) -> Result<Self, ScaffoldError> {
        match name {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            other => Err(ScaffoldError::UnknownPackageManager(other.to_string())),
        }
    }

    /// The executable name, as typed into the terminal.
    pub fn name(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// The project-init command for this manager.
    ///
    /// pnpm projects are initialized with `npm init -y`: pnpm's own `init`
    /// takes no `-y` flag, and the manifest npm writes is identical.
    pub fn init_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm | PackageManager::Pnpm => ("npm", &["init", "-y"]),
            PackageManager::Yarn => ("yarn", &["init", "-y"]),
            PackageManager::Bun => ("bun", &["init", "-y"]),
        }
    }

    /// Build the install argv for `packages`, as dev dependencies when `dev`.
    ///
    /// npm installs with `install`, the rest with `add`. The dev flag is
    /// `-D` everywhere except bun, which spells it `-d`.
    pub fn install_command(
        self,
        packages: &[&'static str],
        dev: bool,
    ) -> (&'static str, Vec<&'static str>) {
        let (program, verb, dev_flag) = match self {
            PackageManager::Npm => ("npm", "install", "-D"),
            PackageManager::Yarn => ("yarn", "add", "-D"),
            PackageManager::Pnpm => ("pnpm", "add", "-D"),
            PackageManager::Bun => ("bun", "add", "-d"),
        };
        let mut args = vec![verb];
        if dev {
            args.push(dev_flag);
        }
        args.extend_from_slice(packages);
        (program, args)
    }

    /// Development dependencies for this manager's toolchain.
    ///
    /// bun runs TypeScript natively, so it only needs the type stubs.
    pub fn dev_dependencies(self) -> &'static [&'static str] {
        match self {
            PackageManager::Bun => &["@types/express", "@types/cors"],
            _ => &[
                "@types/express",
                "@types/node",
                "@types/cors",
                "tsx",
                "nodemon",
                "typescript",
            ],
        }
    }

    /// Script entries merged into the generated package.json.
    pub fn scripts(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PackageManager::Bun => &[
                ("dev", "bun --watch src/index.ts"),
                ("start", "bun dist/index.js"),
                ("build", "bun build src/index.ts --outdir=dist --target=bun"),
            ],
            _ => &[("start", "tsc && node dist/index.js"), ("dev", "nodemon")],
        }
    }

    /// Whether tsconfig.json is generated via `npx tsc --init`.
    ///
    /// `bun init` already writes one.
    pub fn uses_tsc_init(self) -> bool {
        !matches!(self, PackageManager::Bun)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
