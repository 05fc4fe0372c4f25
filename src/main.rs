use std::process::ExitCode;

use clap::Parser;
use parcel_tracker::adapter::inbound::cli::command::Cli;
use parcel_tracker::adapter::inbound::cli::{output, run};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                output::error(&e.to_string());
            } else {
                eprintln!("{:?}", miette::Report::new(e));
            }
            ExitCode::FAILURE
        }
    }
}
