//! # create-express-ts
//!
//! Command-line generator for Express + TypeScript backend projects.
//!
//! This crate provides the `create-express-ts` binary:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `create-express-ts` | Interactive scaffold: prompts for folder name and package manager |
//! | `create-express-ts new [NAME]` | Scaffold with flags, optionally without prompts |
//! | `create-express-ts doctor` | Check that node, the package managers and git are installed |
//!
//! ## Architecture
//!
//! The CLI is organized into command modules under [`commands`]:
//!
//! - [`commands::new_project`] — prompt resolution and the scaffold pipeline
//! - [`commands::doctor`] — external tool diagnostics
//! - [`commands::package_manager`] — per-manager command tables
//! - [`commands::manifest`] — package.json script merging
//! - [`commands::progress`] — spinner steps and subprocess execution
//! - [`commands::templates`] — name normalization and project file templates
//!
//! Failures are the [`error::ScaffoldError`] taxonomy. The pipeline stops
//! at the first failing step and leaves the partial project directory on
//! disk for inspection.

pub mod commands;
pub mod error;
