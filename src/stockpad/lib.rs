//! # Stockpad Architecture
//!
//! Stockpad is a **UI-agnostic inventory library** with a command-line client.
//! The record store, validation and persistence know nothing about terminals;
//! the CLI is one possible shell on top of them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the RecordStore                                     │
//! │  - Normalizes inputs (index strings → DisplayIndex)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves display indexes to record ids                   │
//! │  - Returns CmdResult with records and messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: validation, mutation, save-after-mutate     │
//! │  - StorageBackend: FsBackend (JSON file), MemBackend (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Each record gets a [`model::RecordId`] when it is created. Users see 1-based
//! row numbers ([`index::DisplayIndex`]); those are translated to ids before any
//! mutation, so a search result or a multi-row delete never hits the wrong row.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Record store and storage backends
//! - [`model`]: `Record`, `RecordId`, `RecordDraft`
//! - [`validation`]: Textual field validation
//! - [`index`]: Display indexes and range parsing
//! - [`config`]: `stockpad.json` settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validation;
