//! Command implementations for the `create-express-ts` CLI.
//!
//! The two top-level commands live in [`new_project`] and [`doctor`]; the
//! remaining modules are the shared machinery the scaffold pipeline is
//! built from.

/// Environment diagnostics — `create-express-ts doctor`.
///
/// Probes node, npm, yarn, pnpm, bun, npx and git with `--version` and
/// reports which tools a scaffold run can rely on.
pub mod doctor;

/// package.json script merging.
///
/// Reads the manifest the init step produced, merges the generated script
/// entries into it without dropping anything, and writes it back.
pub mod manifest;

/// Project scaffolding — `create-express-ts new` and the bare
/// interactive invocation.
///
/// Resolves prompts and flags into a scaffold request, then drives the
/// pipeline: directory creation, init, installs, TypeScript setup,
/// template files, manifest scripts, git.
pub mod new_project;

/// The supported package managers and their command tables.
///
/// Init and install argv shapes, dependency lists, and the script set
/// each manager variant gets.
pub mod package_manager;

/// Spinner-wrapped steps and subprocess execution.
pub mod progress;

/// Project name normalization and the generated file templates.
pub mod templates;
