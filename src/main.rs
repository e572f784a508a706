mod commands;
mod error;

use clap::{Parser, Subcommand};
use commands::new_project::CliNewOpts;
use commands::{doctor, new_project};

#[derive(Parser)]
#[command(
    name = "create-express-ts",
    version,
    about = "Scaffold an Express + TypeScript backend project"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Express + TypeScript project
    New {
        /// Project folder name (prompted for when omitted)
        name: Option<String>,
        /// Package manager to use: npm, yarn, pnpm or bun (suppresses prompts)
        #[arg(long)]
        package_manager: Option<String>,
        /// Do not initialize a git repository
        #[arg(long)]
        skip_git: bool,
        /// Never prompt; use defaults for anything not given as a flag
        #[arg(long)]
        no_interactive: bool,
    },
    /// Check that the external tools the scaffolder needs are installed
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::New {
            name,
            package_manager,
            skip_git,
            no_interactive,
        }) => new_project::run(
            name.as_deref(),
            CliNewOpts {
                package_manager,
                skip_git,
                no_interactive,
            },
        ),
        Some(Commands::Doctor) => doctor::run(),
        // Bare invocation is the fully interactive scaffold.
        None => new_project::run(
            None,
            CliNewOpts {
                package_manager: None,
                skip_git: false,
                no_interactive: false,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
