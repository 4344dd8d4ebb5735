use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slq::cli::{Cli, Command};
use slq::departures::DepartureQuery;
use slq::render::{render_departures, render_stops};
use slq::sl::{SlClient, SlConfig};
use slq::stations::search_stops;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Search { query } => {
            let client = create_client()?;
            let stops = search_stops(&client, &query).context("failed to search for stops")?;
            print!("{}", render_stops(&stops));
        }
        Command::Departures {
            station,
            line,
            transport_type,
            count,
            destination,
        } => {
            // Validate filters before any network activity
            let mut query = DepartureQuery::new(&station);
            if let Some(line) = line {
                query = query.with_line(line);
            }
            if let Some(transport) = &transport_type {
                query = query.with_transport(transport)?;
            }
            if let Some(destination) = &destination {
                query = query.with_destination(destination);
            }

            let client = create_client()?;
            let board = query.run(&client).context("failed to get departures")?;
            let now = Local::now().naive_local();
            print!(
                "{}",
                render_departures(&station, &query.filters, &board, usize::from(count), now)
            );
        }
    }
    Ok(())
}

fn create_client() -> anyhow::Result<SlClient> {
    SlClient::new(&SlConfig::from_env()).context("failed to create SL client")
}
