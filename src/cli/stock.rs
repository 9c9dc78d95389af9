use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use tracing::info;

use super::ui;
use crate::core::PriceResolver;
use crate::core::equity::{self, EquityInputs, EquityProjection, Valuation};

#[derive(Debug, Clone, Default, Args)]
pub struct StockArgs {
    /// Ticker symbol to resolve the current price for (e.g. AAPL, XEQT.TO)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Amount to invest
    #[arg(short, long)]
    pub investment: Option<String>,

    /// Current price per share; replaced by the resolved price when
    /// --ticker is given
    #[arg(long)]
    pub current_price: Option<String>,

    /// Price target per share
    #[arg(long)]
    pub target_price: Option<String>,

    /// Dividend paid per share
    #[arg(short, long)]
    pub dividend: Option<String>,

    /// Dividend cadence: monthly, quarterly or annual
    #[arg(short, long, default_value = "quarterly")]
    pub frequency: String,

    /// Price-to-earnings ratio of the stock
    #[arg(long)]
    pub pe_ratio: Option<String>,

    /// Average price-to-earnings ratio of the industry
    #[arg(long)]
    pub industry_pe: Option<String>,

    /// Holding period in years
    #[arg(short, long)]
    pub years: Option<String>,
}

impl From<&StockArgs> for EquityInputs {
    fn from(args: &StockArgs) -> Self {
        EquityInputs {
            investment: args.investment.clone().unwrap_or_default(),
            current_price: args.current_price.clone().unwrap_or_default(),
            target_price: args.target_price.clone().unwrap_or_default(),
            dividend: args.dividend.clone().unwrap_or_default(),
            frequency: args.frequency.clone(),
            pe_ratio: args.pe_ratio.clone().unwrap_or_default(),
            industry_pe: args.industry_pe.clone().unwrap_or_default(),
            years: args.years.clone().unwrap_or_default(),
        }
    }
}

pub async fn run(args: StockArgs, resolver: &PriceResolver<'_>, currency: &str) -> Result<()> {
    info!("Projecting stock returns...");

    let mut inputs = EquityInputs::from(&args);
    if let Some(ticker) = args.ticker.as_deref() {
        let resolved = resolver.resolve(ticker).await?;
        println!("{}", ui::resolved_price_line(&resolved, currency));
        inputs.current_price = resolved.price.to_string();
    }

    let projection = equity::evaluate(&inputs);
    println!("{}", projection.display_as_table(currency));

    Ok(())
}

impl EquityProjection {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Metric"),
            ui::header_cell(&format!("Value ({currency})")),
        ]);

        table.add_row(vec![
            Cell::new("Shares Purchased"),
            ui::amount_cell(self.shares),
        ]);
        table.add_row(vec![
            Cell::new("Capital Gains"),
            ui::money_cell(self.capital_gains),
        ]);
        table.add_row(vec![
            Cell::new("Total Dividends"),
            ui::money_cell(self.total_dividends),
        ]);
        table.add_row(vec![
            Cell::new("Total Return"),
            ui::money_cell(self.total_return),
        ]);
        table.add_row(vec![
            Cell::new("Annualized Return"),
            match self.annualized_return {
                Some(rate) => ui::change_cell(rate),
                None => ui::na_cell(false),
            },
        ]);
        table.add_row(vec![
            Cell::new("Valuation (P/E)"),
            valuation_cell(self.valuation),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Stock Projection", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\nTotal Value ({}): {}",
            ui::style_text(currency, ui::StyleType::TotalLabel),
            ui::style_text(&format!("{:.2}", self.total_value), ui::StyleType::TotalValue)
        ));

        output
    }
}

fn valuation_cell(valuation: Valuation) -> Cell {
    match valuation {
        Valuation::Undervalued => Cell::new("Undervalued").fg(comfy_table::Color::Green),
        Valuation::Overvalued => Cell::new("Overvalued").fg(comfy_table::Color::Red),
        Valuation::NotApplicable => ui::na_cell(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_become_blank_inputs() {
        let inputs = EquityInputs::from(&StockArgs {
            frequency: "quarterly".to_string(),
            ..StockArgs::default()
        });

        assert_eq!(inputs.investment, "");
        assert_eq!(inputs.current_price, "");
        assert_eq!(inputs.frequency, "quarterly");
    }

    #[test]
    fn test_table_carries_the_projection_figures() {
        let args = StockArgs {
            investment: Some("10000".to_string()),
            current_price: Some("150".to_string()),
            target_price: Some("180".to_string()),
            dividend: Some("0.75".to_string()),
            frequency: "quarterly".to_string(),
            years: Some("3".to_string()),
            ..StockArgs::default()
        };
        let projection = equity::evaluate(&EquityInputs::from(&args));
        let rendered = projection.display_as_table("USD");

        assert!(rendered.contains("66.67"));
        assert!(rendered.contains("2600.00"));
        assert!(rendered.contains("12600.00"));
        assert!(rendered.contains("8.01%"));
    }
}
