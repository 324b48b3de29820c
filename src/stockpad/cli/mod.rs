//! # CLI Layer
//!
//! This module is **one possible UI shell** for stockpad. It is the only place
//! that parses arguments, prompts, prints, or decides exit codes.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context setup, dispatch, per-command handlers
//! - `render.rs`: terminal output for records, messages, and config

mod commands;
mod render;
mod setup;

pub use commands::run;
