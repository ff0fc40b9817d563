use crate::search::{run_classify, run_search, ClassifyArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rental_inventory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rental Inventory",
    about = "Serve or query region-aware synthetic car rental inventory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate offers for a pickup location and rental window
    Search(SearchArgs),
    /// Show how location codes are classified into markets
    Classify(ClassifyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Classify(args) => run_classify(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_command_parses_dates() {
        let cli = Cli::try_parse_from([
            "rental-inventory-api",
            "search",
            "--pickup",
            "GRU",
            "--pickup-date",
            "2025-01-15",
            "--dropoff-date",
            "2025-01-20",
            "--json",
        ])
        .expect("arguments parse");

        let Some(Command::Search(args)) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.pickup, "GRU");
        assert!(args.dropoff.is_none());
        assert!(args.json);
        assert_eq!(args.pickup_date.to_string(), "2025-01-15");
    }

    #[test]
    fn search_command_rejects_bad_dates() {
        let result = Cli::try_parse_from([
            "rental-inventory-api",
            "search",
            "--pickup",
            "GRU",
            "--pickup-date",
            "01/15/2025",
            "--dropoff-date",
            "2025-01-20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rental-inventory-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
