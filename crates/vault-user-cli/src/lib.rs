//! # vault-user-cli — User Identifier Command-Line Interface
//!
//! Shell access to the `vault-user` conversions.
//!
//! ## Subcommands
//!
//! - `handle <ID>` — core user ID to Heroku handle
//! - `uuid <ID>` — core user ID to v5 UUID
//! - `id <HANDLE>` — Heroku handle to core user ID
//! - `handle-uuid <HANDLE>` — Heroku handle to v5 UUID
//! - `resolve <VALUE>` — ID or handle to all three forms
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from conversion logic.
//! - Handlers delegate to `vault-user`; results go to stdout, logs to stderr.

pub mod convert;
pub mod output;
