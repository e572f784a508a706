use std::process::Command;

use colored::Colorize;

use crate::error::ScaffoldError;

enum CheckResult {
    Ok(String),
    Warning(String),
    Error(String),
}

/// Check the external tools a scaffold run shells out to.
///
/// Probes node, the four supported package managers, npx and git with
/// `--version`. A missing tool is a warning, since only the selected
/// manager has to exist; having no package manager at all is an error.
/// The report itself is the result, so this always returns `Ok`.
pub fn run() -> Result<(), ScaffoldError> {
    println!("{}", "Checking scaffolding prerequisites".bold());
    println!();

    let mut issues = 0;
    let mut managers_found = 0;

    check(
        "Node.js",
        || match probe("node") {
            Some(version) => CheckResult::Ok(version),
            None => CheckResult::Warning(
                "not installed; generated npm/yarn/pnpm projects need it".to_string(),
            ),
        },
        &mut issues,
    );

    for manager in ["npm", "yarn", "pnpm", "bun"] {
        let version = probe(manager);
        if version.is_some() {
            managers_found += 1;
        }
        check(
            manager,
            || match version {
                Some(version) => CheckResult::Ok(version),
                None => CheckResult::Warning("not installed".to_string()),
            },
            &mut issues,
        );
    }

    check(
        "Package manager",
        || {
            if managers_found > 0 {
                CheckResult::Ok(format!("{managers_found} of 4 available"))
            } else {
                CheckResult::Error("no supported package manager installed".to_string())
            }
        },
        &mut issues,
    );

    check(
        "npx",
        || match probe("npx") {
            Some(version) => CheckResult::Ok(version),
            None => CheckResult::Warning(
                "not installed; TypeScript setup (`npx tsc --init`) will fail".to_string(),
            ),
        },
        &mut issues,
    );

    check(
        "git",
        || match probe("git") {
            Some(version) => CheckResult::Ok(version),
            None => CheckResult::Warning(
                "not installed; repository initialization will fail".to_string(),
            ),
        },
        &mut issues,
    );

    println!();
    if issues == 0 {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!("{}", format!("{issues} issue(s) found").yellow().bold());
    }

    Ok(())
}

fn check<F>(name: &str, f: F, issues: &mut usize)
where
    F: FnOnce() -> CheckResult,
{
    match f() {
        CheckResult::Ok(msg) => {
            println!("  {} {} — {}", "✓".green(), name, msg.dimmed());
        }
        CheckResult::Warning(msg) => {
            println!("  {} {} — {}", "!".yellow(), name, msg.yellow());
            *issues += 1;
        }
        CheckResult::Error(msg) => {
            println!("  {} {} — {}", "x".red(), name, msg.red());
            *issues += 1;
        }
    }
}

/// First line of `program --version`, if the tool runs at all.
fn probe(program: &str) -> Option<String> {
    match Command::new(program).arg("--version").output() {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|line| line.trim().to_string()),
        _ => None,
    }
}
