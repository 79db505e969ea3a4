//! pydev library exports.
//!
//! Exposes internal components for integration testing; the CLI entry
//! point lives in `main.rs`.

pub mod clean;
pub mod commands;
pub mod config;
pub mod preflight;
pub mod process;
pub mod registry;
