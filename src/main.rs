use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use invcast::cli::etf::EtfArgs;
use invcast::cli::quote::QuoteArgs;
use invcast::cli::stock::StockArgs;
use invcast::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for invcast::AppCommand {
    fn from(cmd: Commands) -> invcast::AppCommand {
        match cmd {
            Commands::Stock(args) => invcast::AppCommand::Stock(args),
            Commands::Etf(args) => invcast::AppCommand::Etf(args),
            Commands::Quote(args) => invcast::AppCommand::Quote(args),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Project returns for a stock position with a price target
    Stock(StockArgs),
    /// Project returns for an ETF position tracking a benchmark
    Etf(EtfArgs),
    /// Look up current prices for ticker symbols
    Quote(QuoteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => invcast::cli::setup::setup(),
        Some(cmd) => invcast::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
