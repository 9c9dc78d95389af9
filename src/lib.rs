pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::debug;

use crate::cli::{etf::EtfArgs, quote::QuoteArgs, stock::StockArgs};
use crate::core::PriceResolver;
use crate::core::config::AppConfig;
use crate::providers::fmp::FmpProvider;

pub enum AppCommand {
    Stock(StockArgs),
    Etf(EtfArgs),
    Quote(QuoteArgs),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load_or_default()?,
    };
    debug!("Loaded config: {config:#?}");

    let live_provider = FmpProvider::new(config.quote_base_url(), config.quote_api_key());
    let resolver = PriceResolver::new(&live_provider);

    match command {
        AppCommand::Stock(args) => cli::stock::run(args, &resolver, &config.currency).await,
        AppCommand::Etf(args) => cli::etf::run(args, &resolver, &config.currency).await,
        AppCommand::Quote(args) => cli::quote::run(args, &resolver, &config.currency).await,
    }
}
