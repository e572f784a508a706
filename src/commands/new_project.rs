use std::fs;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use dialoguer::{Input, Select};

use super::manifest;
use super::package_manager::{PackageManager, RUNTIME_DEPENDENCIES};
use super::progress;
use super::templates;
use crate::error::ScaffoldError;

/// Folder name offered as the prompt default and used when no name is
/// given in non-interactive mode.
const DEFAULT_FOLDER_NAME: &str = "backend";

/// Raw `new` flags, before resolution into a [`ScaffoldRequest`].
pub struct CliNewOpts {
    pub package_manager: Option<String>,
    pub skip_git: bool,
    pub no_interactive: bool,
}

/// Resolved scaffold inputs. Immutable once built; everything downstream
/// reads from this and the derived project root.
pub struct ScaffoldRequest {
    pub folder_name: String,
    pub package_manager: PackageManager,
    pub init_git: bool,
}

pub fn run(name: Option<&str>, opts: CliNewOpts) -> Result<(), ScaffoldError> {
    let started = Instant::now();

    println!();
    println!(
        "{}",
        "📦 Welcome to Express + TypeScript Project Generator!".bold()
    );
    println!();

    let request = resolve_request(name, &opts)?;

    let project_name = templates::normalize_project_name(&request.folder_name);
    if project_name.is_empty() {
        return Err(ScaffoldError::InvalidProjectName(request.folder_name));
    }

    let project_root = std::env::current_dir()?.join(&project_name);
    if project_root.exists() {
        return Err(ScaffoldError::DirectoryExists(project_root));
    }
    fs::create_dir_all(&project_root).map_err(|source| ScaffoldError::DirectoryCreate {
        path: project_root.clone(),
        source,
    })?;

    println!(
        "{} Creating Express + TypeScript project in: {}",
        "->".blue(),
        project_name.green()
    );
    println!();

    scaffold(&project_root, request.package_manager)?;

    if request.init_git {
        init_repository(&project_root)?;
    }

    summary(
        &project_name,
        request.package_manager,
        started.elapsed().as_secs_f64(),
    );

    Ok(())
}

/// Turn CLI inputs into a [`ScaffoldRequest`], prompting for whatever is
/// missing.
///
/// `--no-interactive` and `--package-manager` both suppress the prompts;
/// a positional name alone does not, it just answers the first question.
fn resolve_request(
    name: Option<&str>,
    opts: &CliNewOpts,
) -> Result<ScaffoldRequest, ScaffoldError> {
    if opts.no_interactive || opts.package_manager.is_some() {
        let package_manager = match &opts.package_manager {
            Some(raw) => PackageManager::parse(raw)?,
            None => PackageManager::Npm,
        };
        return Ok(ScaffoldRequest {
            folder_name: name.unwrap_or(DEFAULT_FOLDER_NAME).to_string(),
            package_manager,
            init_git: !opts.skip_git,
        });
    }

    let folder_name = match name {
        Some(name) => name.to_string(),
        None => Input::new()
            .with_prompt("Enter folder name")
            .default(DEFAULT_FOLDER_NAME.to_string())
            .interact_text()?,
    };

    let items: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.name()).collect();
    let selection = Select::new()
        .with_prompt("Choose a package manager")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(ScaffoldRequest {
        folder_name,
        package_manager: PackageManager::ALL[selection],
        init_git: !opts.skip_git,
    })
}

/// The manager-driven part of the pipeline: init, installs, TypeScript
/// setup, template files, manifest scripts. Steps run in order and the
/// first failure aborts the rest.
fn scaffold(project_root: &Path, manager: PackageManager) -> Result<(), ScaffoldError> {
    let (program, args) = manager.init_command();
    progress::run_step("Initializing project", program, args, project_root)?;

    let (program, args) = manager.install_command(RUNTIME_DEPENDENCIES, false);
    progress::run_step("Installing dependencies", program, &args, project_root)?;

    let (program, args) = manager.install_command(manager.dev_dependencies(), true);
    progress::run_step("Installing dev dependencies", program, &args, project_root)?;

    if manager.uses_tsc_init() {
        progress::run_step("Setting up TypeScript", "npx", &["tsc", "--init"], project_root)?;
    }

    progress::step("Setting up project files", || {
        write_project_files(project_root, manager)?;
        manifest::add_scripts(project_root, manager.scripts())
    })
}

fn write_project_files(project_root: &Path, manager: PackageManager) -> Result<(), ScaffoldError> {
    fs::create_dir_all(project_root.join("src"))?;

    // `bun init` drops an entry point at the project root; move it under
    // src/ before the template overwrites it.
    if manager == PackageManager::Bun {
        let stray = project_root.join("index.ts");
        if stray.exists() {
            fs::rename(stray, project_root.join("src/index.ts"))?;
        }
    }

    for (relative, content) in templates::project::files(manager) {
        fs::write(project_root.join(relative), content)?;
    }

    Ok(())
}

fn init_repository(project_root: &Path) -> Result<(), ScaffoldError> {
    progress::run_step("Initializing Git repository", "git", &["init"], project_root)?;
    progress::run_step("Adding files to Git", "git", &["add", "."], project_root)?;
    progress::run_step(
        "Creating initial commit",
        "git",
        &["commit", "-m", "Initial commit"],
        project_root,
    )
}

fn summary(project_name: &str, manager: PackageManager, elapsed_secs: f64) {
    println!();
    println!("{}", "👉 Next steps:".bold());
    println!("  cd {project_name}");
    println!(
        "  {}   {}",
        format!("{manager} run dev").cyan(),
        "# Start in development mode".dimmed()
    );
    if manager == PackageManager::Bun {
        println!(
            "  {}   {}",
            format!("{manager} run build").cyan(),
            "# Build the project".dimmed()
        );
        println!(
            "  {}   {}",
            format!("{manager} run start").cyan(),
            "# Run the built project".dimmed()
        );
    } else {
        println!(
            "  {}   {}",
            format!("{manager} start").cyan(),
            "# Build and run the project".dimmed()
        );
    }
    println!();
    println!(
        "{} Project '{}' created in {elapsed_secs:.1}s",
        "✓".green(),
        project_name.green()
    );
    println!();
}
