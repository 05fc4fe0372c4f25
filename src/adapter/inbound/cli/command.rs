//! Command-line interface definitions.
//!
//! Defines the CLI structure for the parcel tracker using `clap`. Each
//! subcommand maps onto one parcel store operation, plus `demo`, which walks
//! through a parcel's whole lifecycle.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ClientId, ParcelNumber, ParcelStatus};

/// Track parcels through their delivery lifecycle
#[derive(Parser, Debug)]
#[command(name = "parcel-tracker")]
#[command(version)]
pub struct Cli {
    /// Configuration file [default: ./parcel-tracker.toml when present]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database URL, overriding the config file and PARCEL_DATABASE_URL
    #[arg(long, global = true, value_name = "URL")]
    pub database: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new parcel for a client
    Register(RegisterArgs),

    /// Show one parcel
    Show(ParcelArg),

    /// List all parcels of a client
    List(ListArgs),

    /// Overwrite the status of a parcel
    SetStatus(SetStatusArgs),

    /// Change the address of a registered parcel
    SetAddress(SetAddressArgs),

    /// Delete a registered parcel
    Delete(ParcelArg),

    /// Walk one parcel through registration, address change, dispatch and
    /// an attempted deletion
    Demo(DemoArgs),
}

/// Arguments for `register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Owning client
    #[arg(long)]
    pub client: ClientId,

    /// Delivery address
    #[arg(long)]
    pub address: String,
}

/// A single parcel number.
#[derive(Args, Debug)]
pub struct ParcelArg {
    /// Parcel number
    pub number: ParcelNumber,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Owning client
    #[arg(long)]
    pub client: ClientId,
}

/// Arguments for `set-status`.
#[derive(Args, Debug)]
pub struct SetStatusArgs {
    /// Parcel number
    pub number: ParcelNumber,

    /// New status [registered, sent, delivered]
    pub status: ParcelStatus,
}

/// Arguments for `set-address`.
#[derive(Args, Debug)]
pub struct SetAddressArgs {
    /// Parcel number
    pub number: ParcelNumber,

    /// New delivery address
    pub address: String,
}

/// Arguments for `demo`.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Client to register the demo parcel for
    #[arg(long, default_value = "123")]
    pub client: ClientId,
}
