//! # Conversion Subcommands
//!
//! One handler per conversion. Each handler parses its argument, delegates
//! to `vault-user`, and returns the rendered result for `main` to print.

use anyhow::Context;
use clap::Args;
use vault_user::{
    decode_handle, decode_uuid_from_handle, encode_handle, encode_uuid, CoreUserId, IdentityError,
    UserIdentity,
};

use crate::output::{render_identity, Conversion, OutputFormat};

/// Arguments for subcommands that take a core user ID.
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Core user ID, e.g. `1234`.
    pub id: String,
}

/// Arguments for subcommands that take a Heroku handle.
#[derive(Args, Debug)]
pub struct HandleArgs {
    /// Heroku user handle, e.g. `user1234@heroku.com`.
    pub handle: String,
}

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Core user ID or Heroku user handle.
    pub value: String,
}

/// Core user ID to Heroku handle.
pub fn run_handle(args: &IdArgs, format: OutputFormat) -> anyhow::Result<String> {
    let id = parse_id(&args.id)?;
    tracing::debug!(%id, "encoding handle");
    Conversion::new(&args.id, "handle", encode_handle(id))?.render(format)
}

/// Core user ID to v5 UUID.
pub fn run_uuid(args: &IdArgs, format: OutputFormat) -> anyhow::Result<String> {
    let id = parse_id(&args.id)?;
    tracing::debug!(%id, "encoding uuid");
    Conversion::new(&args.id, "uuid", encode_uuid(id))?.render(format)
}

/// Heroku handle to core user ID.
pub fn run_id(args: &HandleArgs, format: OutputFormat) -> anyhow::Result<String> {
    tracing::debug!(handle = %args.handle, "decoding handle");
    let id = decode_handle(&args.handle)
        .map_err(log_rejection)
        .context("cannot decode Heroku user handle")?;
    Conversion::new(&args.handle, "id", id)?.render(format)
}

/// Heroku handle to v5 UUID.
pub fn run_handle_uuid(args: &HandleArgs, format: OutputFormat) -> anyhow::Result<String> {
    tracing::debug!(handle = %args.handle, "decoding handle to uuid");
    let uuid = decode_uuid_from_handle(&args.handle)
        .map_err(log_rejection)
        .context("cannot decode Heroku user handle")?;
    Conversion::new(&args.handle, "uuid", uuid)?.render(format)
}

/// Core user ID or handle to all three forms.
pub fn run_resolve(args: &ResolveArgs, format: OutputFormat) -> anyhow::Result<String> {
    tracing::debug!(value = %args.value, "resolving identity");
    let identity: UserIdentity = args
        .value
        .parse()
        .map_err(log_rejection)
        .context("cannot resolve user identifier")?;
    render_identity(&identity, format)
}

fn parse_id(input: &str) -> anyhow::Result<CoreUserId> {
    input
        .parse()
        .map_err(log_rejection)
        .context("cannot parse core user ID")
}

fn log_rejection(err: IdentityError) -> IdentityError {
    tracing::warn!(input = err.input(), error = %err, "rejected user identifier");
    err
}
