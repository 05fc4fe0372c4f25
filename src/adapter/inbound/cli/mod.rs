//! Command-line adapter.
//!
//! Parses arguments with `clap`, resolves configuration, opens the SQLite
//! store and hands each subcommand to its handler.

pub mod command;
pub mod config;
pub mod demo;
pub mod diagnostic;
pub mod output;
pub mod parcel;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use self::command::{Cli, Commands};
use self::diagnostic::ConfigDiagnostic;
use self::output::OutputConfig;
use crate::error::Error;
use crate::infrastructure::bootstrap::build_parcel_store;

/// Errors surfaced to the user by the binary.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Config file that failed to parse, with source context.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(ConfigDiagnostic),

    /// Any other failure.
    #[error(transparent)]
    App(#[from] Error),
}

/// Run one CLI invocation.
///
/// # Errors
/// Returns the first configuration, persistence or domain error hit.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = config::resolve(&cli)?;
    config.init_logging(cli.verbose, cli.quiet);
    debug!(command = ?cli.command, "Dispatching command");

    let store = build_parcel_store(&config)?;

    match &cli.command {
        Commands::Register(args) => parcel::register(&store, args).await?,
        Commands::Show(args) => parcel::show(&store, args).await?,
        Commands::List(args) => parcel::list(&store, args).await?,
        Commands::SetStatus(args) => parcel::set_status(&store, args).await?,
        Commands::SetAddress(args) => parcel::set_address(&store, args).await?,
        Commands::Delete(args) => parcel::delete(&store, args).await?,
        Commands::Demo(args) => demo::execute(&store, args).await?,
    }
    Ok(())
}
