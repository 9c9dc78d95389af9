use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use futures::future::join_all;
use tracing::info;

use super::ui;
use crate::core::{PriceResolver, QuoteError, ResolvedPrice};

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Ticker symbols to look up (e.g. AAPL MSFT XEQT.TO)
    #[arg(required = true)]
    pub symbols: Vec<String>,
}

pub async fn run(args: QuoteArgs, resolver: &PriceResolver<'_>, currency: &str) -> Result<()> {
    info!("Looking up quotes for {} symbol(s)...", args.symbols.len());

    let pb = ui::new_progress_bar(args.symbols.len() as u64, true);
    pb.set_message("Fetching quotes...");

    let quote_futures = args.symbols.iter().map(|symbol| {
        let pb_clone = pb.clone();
        async move {
            let result = resolver.resolve(symbol).await;
            pb_clone.inc(1);
            (symbol.clone(), result)
        }
    });

    let results: Vec<(String, Result<ResolvedPrice, QuoteError>)> =
        join_all(quote_futures).await;
    pb.finish_and_clear();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
        ui::header_cell(&format!("Price ({currency})")),
        ui::header_cell("Source"),
    ]);

    let mut failures = Vec::new();
    for (requested, result) in &results {
        match result {
            Ok(resolved) => {
                table.add_row(vec![
                    Cell::new(&resolved.symbol),
                    Cell::new(resolved.name.as_deref().unwrap_or("N/A")),
                    ui::amount_cell(resolved.price),
                    Cell::new(resolved.provenance.to_string()),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    Cell::new(requested),
                    ui::na_cell(true),
                    ui::na_cell(true),
                    ui::na_cell(true),
                ]);
                failures.push(format!("{requested}: {e}"));
            }
        }
    }

    println!("{table}");

    for failure in &failures {
        eprintln!("{}", ui::style_text(failure, ui::StyleType::Error));
    }

    Ok(())
}
