use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use tracing::info;

use super::ui;
use crate::core::PriceResolver;
use crate::core::fund::{self, FundInputs, FundProjection};

#[derive(Debug, Clone, Default, Args)]
pub struct EtfArgs {
    /// Ticker symbol to resolve the current price for (e.g. VTI, XEQT.TO)
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Amount to invest
    #[arg(short, long)]
    pub investment: Option<String>,

    /// Current price per unit; replaced by the resolved price when
    /// --ticker is given
    #[arg(long)]
    pub current_price: Option<String>,

    /// Management expense ratio, in percent per year
    #[arg(short, long)]
    pub mer: Option<String>,

    /// Dividend paid per unit
    #[arg(short, long)]
    pub dividend: Option<String>,

    /// Dividend cadence: monthly, quarterly or annual
    #[arg(short, long, default_value = "quarterly")]
    pub frequency: String,

    /// Expected annual benchmark return, in percent
    #[arg(short, long)]
    pub benchmark_return: Option<String>,

    /// Holding period in years
    #[arg(short, long)]
    pub years: Option<String>,
}

impl From<&EtfArgs> for FundInputs {
    fn from(args: &EtfArgs) -> Self {
        FundInputs {
            investment: args.investment.clone().unwrap_or_default(),
            current_price: args.current_price.clone().unwrap_or_default(),
            mer: args.mer.clone().unwrap_or_default(),
            dividend: args.dividend.clone().unwrap_or_default(),
            frequency: args.frequency.clone(),
            benchmark_return: args.benchmark_return.clone().unwrap_or_default(),
            years: args.years.clone().unwrap_or_default(),
        }
    }
}

pub async fn run(args: EtfArgs, resolver: &PriceResolver<'_>, currency: &str) -> Result<()> {
    info!("Projecting ETF returns...");

    let mut inputs = FundInputs::from(&args);
    if let Some(ticker) = args.ticker.as_deref() {
        let resolved = resolver.resolve(ticker).await?;
        println!("{}", ui::resolved_price_line(&resolved, currency));
        inputs.current_price = resolved.price.to_string();
    }

    let projection = fund::evaluate(&inputs);
    println!("{}", projection.display_as_table(currency));

    Ok(())
}

impl FundProjection {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Metric"),
            ui::header_cell(&format!("Value ({currency})")),
        ]);

        table.add_row(vec![
            Cell::new("Units Purchased"),
            ui::amount_cell(self.shares),
        ]);
        table.add_row(vec![
            Cell::new("Projected Capital Gains"),
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
            Cell::new("Net Annual Return"),
            ui::change_cell(self.net_annual_return),
        ]);
        table.add_row(vec![
            Cell::new("Total MER Cost"),
            // Fees are a cost, always rendered in red.
            Cell::new(format!("{:.2}", self.total_fee_cost))
                .fg(comfy_table::Color::Red)
                .set_alignment(comfy_table::CellAlignment::Right),
        ]);

        let mut output = format!(
            "{}\n\n",
            ui::style_text("ETF Projection", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\nProjected Value ({}): {}",
            ui::style_text(currency, ui::StyleType::TotalLabel),
            ui::style_text(
                &format!("{:.2}", self.projected_value),
                ui::StyleType::TotalValue
            )
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_become_blank_inputs() {
        let inputs = FundInputs::from(&EtfArgs {
            frequency: "quarterly".to_string(),
            ..EtfArgs::default()
        });

        assert_eq!(inputs.investment, "");
        assert_eq!(inputs.mer, "");
        assert_eq!(inputs.frequency, "quarterly");
    }

    #[test]
    fn test_table_carries_the_projection_figures() {
        let args = EtfArgs {
            investment: Some("10000".to_string()),
            current_price: Some("85".to_string()),
            mer: Some("0.65".to_string()),
            benchmark_return: Some("8.5".to_string()),
            frequency: "quarterly".to_string(),
            years: Some("5".to_string()),
            ..EtfArgs::default()
        };
        let projection = fund::evaluate(&FundInputs::from(&args));
        let rendered = projection.display_as_table("USD");

        assert!(rendered.contains("117.65"));
        assert!(rendered.contains("7.85%"));
        assert!(rendered.contains("325.00"));
    }
}
