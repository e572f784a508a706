use create_express_ts::commands::package_manager::{PackageManager, RUNTIME_DEPENDENCIES};

// ── parse ───────────────────────────────────────────────────────────

#[test]
fn parse_known_managers() {
    assert_eq!(PackageManager::parse("npm").unwrap(), PackageManager::Npm);
    assert_eq!(PackageManager::parse("yarn").unwrap(), PackageManager::Yarn);
    assert_eq!(PackageManager::parse("pnpm").unwrap(), PackageManager::Pnpm);
    assert_eq!(PackageManager::parse("bun").unwrap(), PackageManager::Bun);
}

#[test]
fn parse_unknown_manager_errors() {
    let err = PackageManager::parse("cargo").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cargo"));
    assert!(message.contains("npm, yarn, pnpm, bun"));
}

#[test]
fn all_lists_every_manager_in_prompt_order() {
    let names: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.name()).collect();
    assert_eq!(names, vec!["npm", "yarn", "pnpm", "bun"]);
}

#[test]
fn display_matches_executable_name() {
    assert_eq!(PackageManager::Npm.to_string(), "npm");
    assert_eq!(PackageManager::Bun.to_string(), "bun");
}

// ── init commands ───────────────────────────────────────────────────

#[test]
fn npm_init() {
    assert_eq!(
        PackageManager::Npm.init_command(),
        ("npm", &["init", "-y"][..])
    );
}

#[test]
fn yarn_init() {
    assert_eq!(
        PackageManager::Yarn.init_command(),
        ("yarn", &["init", "-y"][..])
    );
}

#[test]
fn pnpm_init_falls_back_to_npm() {
    assert_eq!(
        PackageManager::Pnpm.init_command(),
        ("npm", &["init", "-y"][..])
    );
}

#[test]
fn bun_init() {
    assert_eq!(
        PackageManager::Bun.init_command(),
        ("bun", &["init", "-y"][..])
    );
}

// ── install commands ────────────────────────────────────────────────

#[test]
fn npm_installs_runtime_dependencies() {
    let (program, args) = PackageManager::Npm.install_command(RUNTIME_DEPENDENCIES, false);
    assert_eq!(program, "npm");
    assert_eq!(args, vec!["install", "express", "cors", "dotenv"]);
}

#[test]
fn npm_dev_flag_is_capital_d() {
    let (_, args) = PackageManager::Npm.install_command(&["typescript"], true);
    assert_eq!(args, vec!["install", "-D", "typescript"]);
}

#[test]
fn yarn_adds_packages() {
    let (program, args) = PackageManager::Yarn.install_command(&["express"], false);
    assert_eq!(program, "yarn");
    assert_eq!(args, vec!["add", "express"]);
}

#[test]
fn pnpm_adds_dev_packages() {
    let (program, args) = PackageManager::Pnpm.install_command(&["typescript"], true);
    assert_eq!(program, "pnpm");
    assert_eq!(args, vec!["add", "-D", "typescript"]);
}

#[test]
fn bun_dev_flag_is_lowercase_d() {
    let (program, args) = PackageManager::Bun.install_command(&["@types/express"], true);
    assert_eq!(program, "bun");
    assert_eq!(args, vec!["add", "-d", "@types/express"]);
}

// ── dependency lists ────────────────────────────────────────────────

#[test]
fn runtime_dependencies_are_shared() {
    assert_eq!(RUNTIME_DEPENDENCIES, &["express", "cors", "dotenv"][..]);
}

#[test]
fn node_dev_dependencies_include_the_typescript_toolchain() {
    let deps = PackageManager::Npm.dev_dependencies();
    assert!(deps.contains(&"typescript"));
    assert!(deps.contains(&"nodemon"));
    assert!(deps.contains(&"tsx"));
    assert!(deps.contains(&"@types/node"));
    assert_eq!(deps, PackageManager::Yarn.dev_dependencies());
    assert_eq!(deps, PackageManager::Pnpm.dev_dependencies());
}

#[test]
fn bun_dev_dependencies_are_type_stubs_only() {
    assert_eq!(
        PackageManager::Bun.dev_dependencies().to_vec(),
        vec!["@types/express", "@types/cors"]
    );
}

// ── scripts ─────────────────────────────────────────────────────────

#[test]
fn node_scripts_compile_then_run() {
    assert_eq!(
        PackageManager::Npm.scripts().to_vec(),
        vec![("start", "tsc && node dist/index.js"), ("dev", "nodemon")]
    );
}

#[test]
fn yarn_and_pnpm_share_node_scripts() {
    assert_eq!(PackageManager::Yarn.scripts(), PackageManager::Npm.scripts());
    assert_eq!(PackageManager::Pnpm.scripts(), PackageManager::Npm.scripts());
}

#[test]
fn bun_scripts_include_a_build_step() {
    let scripts = PackageManager::Bun.scripts();
    assert!(scripts.contains(&("dev", "bun --watch src/index.ts")));
    assert!(scripts.contains(&("start", "bun dist/index.js")));
    assert!(scripts.contains(&("build", "bun build src/index.ts --outdir=dist --target=bun")));
}

// ── TypeScript setup ────────────────────────────────────────────────

#[test]
fn only_bun_skips_tsc_init() {
    assert!(PackageManager::Npm.uses_tsc_init());
    assert!(PackageManager::Yarn.uses_tsc_init());
    assert!(PackageManager::Pnpm.uses_tsc_init());
    assert!(!PackageManager::Bun.uses_tsc_init());
}
