//! Command-line interface.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Largest number of departures a single query may show.
pub const MAX_COUNT: u16 = 100;

#[derive(Debug, Parser)]
#[command(name = "slq", version)]
#[command(about = "Query Storstockholms Lokaltrafik (SL)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find station names and IDs (tab-delimited: <name>\t<id>)
    Search {
        /// Search query for station names
        query: String,
    },
    /// Show upcoming departures for a station
    Departures {
        /// Station name or site ID
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        station: String,
        /// Filter by line number (e.g. "14", or "28" to include variants like "28s")
        #[arg(short, long)]
        line: Option<String>,
        /// Filter by transport type: metro, bus, train, tram
        #[arg(short = 't', long)]
        transport_type: Option<String>,
        /// Number of departures to show
        #[arg(short, long, default_value_t = 10,
              value_parser = clap::value_parser!(u16).range(1..=MAX_COUNT as i64))]
        count: u16,
        /// Filter by destination name or ID
        #[arg(short, long)]
        destination: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_search() {
        let cli = Cli::try_parse_from(["slq", "search", "central"]).unwrap();
        assert!(matches!(cli.command, Command::Search { ref query } if query == "central"));
    }

    #[test]
    fn search_accepts_empty_query() {
        let cli = Cli::try_parse_from(["slq", "search", ""]).unwrap();
        assert!(matches!(cli.command, Command::Search { ref query } if query.is_empty()));
    }

    #[test]
    fn parse_departures_with_filters() {
        let cli = Cli::try_parse_from([
            "slq",
            "departures",
            "T-Centralen",
            "--line",
            "14",
            "-t",
            "metro",
            "-c",
            "5",
            "-d",
            "Mörby",
        ])
        .unwrap();

        let Command::Departures {
            station,
            line,
            transport_type,
            count,
            destination,
        } = cli.command
        else {
            panic!("expected departures command");
        };
        assert_eq!(station, "T-Centralen");
        assert_eq!(line.as_deref(), Some("14"));
        assert_eq!(transport_type.as_deref(), Some("metro"));
        assert_eq!(count, 5);
        assert_eq!(destination.as_deref(), Some("Mörby"));
    }

    #[test]
    fn count_defaults_to_ten() {
        let cli = Cli::try_parse_from(["slq", "departures", "9001"]).unwrap();
        assert!(matches!(cli.command, Command::Departures { count: 10, .. }));
    }

    #[test]
    fn count_must_be_in_range() {
        assert!(Cli::try_parse_from(["slq", "departures", "9001", "-c", "0"]).is_err());
        assert!(Cli::try_parse_from(["slq", "departures", "9001", "-c", "101"]).is_err());
        assert!(Cli::try_parse_from(["slq", "departures", "9001", "-c", "many"]).is_err());
        assert!(Cli::try_parse_from(["slq", "departures", "9001", "-c", "100"]).is_ok());
    }

    #[test]
    fn station_must_not_be_empty() {
        assert!(Cli::try_parse_from(["slq", "departures", ""]).is_err());
    }

    #[test]
    fn transport_type_is_not_validated_here() {
        let cli = Cli::try_parse_from(["slq", "departures", "9001", "-t", "ferry"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Departures { transport_type: Some(ref t), .. } if t == "ferry"
        ));
    }
}
