//! # vault-user CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use vault_user_cli::convert::{self, HandleArgs, IdArgs, ResolveArgs};
use vault_user_cli::output::OutputFormat;

/// Vault user identifier conversions.
///
/// Converts between core user IDs, Heroku user handles
/// (`user<id>@heroku.com`), and deterministic v5 UUIDs.
#[derive(Parser, Debug)]
#[command(name = "vault-user", version, about)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Core user ID to Heroku handle.
    Handle(IdArgs),
    /// Core user ID to v5 UUID.
    Uuid(IdArgs),
    /// Heroku handle to core user ID.
    Id(HandleArgs),
    /// Heroku handle to v5 UUID.
    HandleUuid(HandleArgs),
    /// Core user ID or Heroku handle to every form.
    Resolve(ResolveArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Handle(args) => convert::run_handle(args, cli.format),
        Commands::Uuid(args) => convert::run_uuid(args, cli.format),
        Commands::Id(args) => convert::run_id(args, cli.format),
        Commands::HandleUuid(args) => convert::run_handle_uuid(args, cli.format),
        Commands::Resolve(args) => convert::run_resolve(args, cli.format),
    }
}
