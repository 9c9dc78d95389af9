//! Return projection for a fund position tracking a benchmark, net of the
//! management expense ratio.

use crate::core::valuation::{DividendFrequency, amount_or_zero, round2, years_or_one};

/// Raw form-state inputs for a fund projection. Numeric fields are strings
/// exactly as the user typed them; coercion happens inside [`evaluate`].
#[derive(Debug, Clone, Default)]
pub struct FundInputs {
    pub investment: String,
    pub current_price: String,
    /// Management expense ratio, in percent per year.
    pub mer: String,
    pub dividend: String,
    pub frequency: String,
    /// Expected annual return of the tracked benchmark, in percent.
    pub benchmark_return: String,
    pub years: String,
}

/// Projected outcome of a fund position. All figures are rounded to two
/// decimals for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FundProjection {
    pub shares: f64,
    pub capital_gains: f64,
    pub total_dividends: f64,
    pub total_return: f64,
    pub projected_value: f64,
    /// Benchmark return net of fees, in percent per year.
    pub net_annual_return: f64,
    /// Cumulative fee drag over the holding period, reported as a cost.
    /// Already embedded in the net return rate, never subtracted twice.
    pub total_fee_cost: f64,
}

/// Projects the outcome of holding a fund position, compounding the
/// benchmark return net of fee drag. Pure arithmetic, never fails.
pub fn evaluate(inputs: &FundInputs) -> FundProjection {
    let investment = amount_or_zero(&inputs.investment);
    let current_price = amount_or_zero(&inputs.current_price);
    let mer = amount_or_zero(&inputs.mer);
    let dividend = amount_or_zero(&inputs.dividend);
    let benchmark_return = amount_or_zero(&inputs.benchmark_return);
    let years = years_or_one(&inputs.years);
    let frequency = DividendFrequency::from_input(&inputs.frequency);

    let shares = if current_price > 0.0 {
        investment / current_price
    } else {
        0.0
    };

    let annual_dividend = dividend * frequency.payouts_per_year();
    let total_dividends = shares * annual_dividend * years;

    let net_return_rate = (benchmark_return - mer) / 100.0;
    // A net loss beyond -100% a year wipes out the position; a negative
    // growth base under a fractional exponent has no real value.
    let growth = 1.0 + net_return_rate;
    let projected_value = if growth >= 0.0 {
        investment * growth.powf(years)
    } else {
        0.0
    };

    let capital_gains = projected_value - investment;
    let total_return = capital_gains + total_dividends;
    let total_fee_cost = (investment * mer / 100.0) * years;

    FundProjection {
        shares: round2(shares),
        capital_gains: round2(capital_gains),
        total_dividends: round2(total_dividends),
        total_return: round2(total_return),
        projected_value: round2(projected_value),
        net_annual_return: round2(net_return_rate * 100.0),
        total_fee_cost: round2(total_fee_cost),
    }
}
