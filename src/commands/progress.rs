use std::path::Path;
use std::process::Command;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::ScaffoldError;

/// Run `f` under a spinner labelled `message`.
///
/// The spinner is cleared on every exit path and replaced by a final
/// `✓ message` or `✗ message` line, so a failing step never leaves a
/// half-drawn animation behind.
pub fn step<T, F>(message: &str, f: F) -> Result<T, ScaffoldError>
where
    F: FnOnce() -> Result<T, ScaffoldError>,
{
    let spinner = spinner(message);
    let result = f();
    spinner.finish_and_clear();
    match &result {
        Ok(_) => println!("{} {message}", "✓".green()),
        Err(_) => println!("{} {message}", "✗".red()),
    }
    result
}

/// Run an external command to completion as a spinner step.
pub fn run_step(
    message: &str,
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> Result<(), ScaffoldError> {
    step(message, || run_command(program, args, cwd))
}

/// Run an external command in `cwd`, capturing its output.
///
/// A spawn failure (executable not installed) becomes `CommandLaunch`; a
/// non-zero exit becomes `CommandFailed` carrying the captured stderr.
pub fn run_command(program: &str, args: &[&str], cwd: &Path) -> Result<(), ScaffoldError> {
    let rendered = render_command(program, args);
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| ScaffoldError::CommandLaunch {
            command: rendered.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ScaffoldError::CommandFailed {
            command: rendered,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    Ok(())
}

fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{msg} {spinner:.green}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
