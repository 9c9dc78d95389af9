//! Return projection for a direct equity position with a price target.

use std::fmt::Display;

use crate::core::valuation::{DividendFrequency, amount_or_zero, round2, years_or_one};

/// Raw form-state inputs for an equity projection. Every numeric field is a
/// string exactly as the user typed it; coercion happens inside [`evaluate`].
#[derive(Debug, Clone, Default)]
pub struct EquityInputs {
    pub investment: String,
    pub current_price: String,
    pub target_price: String,
    pub dividend: String,
    pub frequency: String,
    pub pe_ratio: String,
    pub industry_pe: String,
    pub years: String,
}

/// P/E verdict against the industry average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valuation {
    Undervalued,
    Overvalued,
    NotApplicable,
}

impl Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Valuation::Undervalued => "Undervalued",
                Valuation::Overvalued => "Overvalued",
                Valuation::NotApplicable => "N/A",
            }
        )
    }
}

/// Projected outcome of an equity position. All monetary and percentage
/// figures are rounded to two decimals for display.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityProjection {
    pub shares: f64,
    pub capital_gains: f64,
    pub total_dividends: f64,
    pub total_return: f64,
    pub total_value: f64,
    /// `None` when the figure is undefined (nothing invested, or a negative
    /// projected value that fractional compounding cannot express).
    pub annualized_return: Option<f64>,
    pub valuation: Valuation,
}

/// Projects the outcome of holding an equity position until the target
/// price is reached. Pure arithmetic: malformed input is absorbed by the
/// defaulting rules and the function never fails.
pub fn evaluate(inputs: &EquityInputs) -> EquityProjection {
    let investment = amount_or_zero(&inputs.investment);
    let current_price = amount_or_zero(&inputs.current_price);
    let target_price = amount_or_zero(&inputs.target_price);
    let dividend = amount_or_zero(&inputs.dividend);
    let years = years_or_one(&inputs.years);
    let frequency = DividendFrequency::from_input(&inputs.frequency);

    let shares = if current_price > 0.0 {
        investment / current_price
    } else {
        0.0
    };

    let annual_dividend = dividend * frequency.payouts_per_year();
    let total_dividends = shares * annual_dividend * years;
    let capital_gains = shares * (target_price - current_price);
    let total_return = capital_gains + total_dividends;
    let total_value = investment + total_return;

    let pe_ratio = amount_or_zero(&inputs.pe_ratio);
    let industry_pe = amount_or_zero(&inputs.industry_pe);
    let valuation = if pe_ratio != 0.0 && industry_pe != 0.0 {
        if pe_ratio < industry_pe {
            Valuation::Undervalued
        } else {
            Valuation::Overvalued
        }
    } else {
        Valuation::NotApplicable
    };

    EquityProjection {
        shares: round2(shares),
        capital_gains: round2(capital_gains),
        total_dividends: round2(total_dividends),
        total_return: round2(total_return),
        total_value: round2(total_value),
        annualized_return: annualized_return(investment, total_value, years).map(round2),
        valuation,
    }
}

/// Compound annual growth implied by the projected total value:
/// `((total_value / investment)^(1/years) - 1) * 100`.
///
/// Undefined when nothing is invested or when the value ratio is negative;
/// reported as `None` instead of a non-finite number.
fn annualized_return(investment: f64, total_value: f64, years: f64) -> Option<f64> {
    if investment <= 0.0 {
        return None;
    }
    let ratio = total_value / investment;
    if ratio < 0.0 {
        return None;
    }
    Some((ratio.powf(1.0 / years) - 1.0) * 100.0)
}
