//! Shared coercion and rounding rules for the valuation functions.
//!
//! Inputs arrive as raw form-state strings; the rules here are the single
//! place where they become numbers. Monetary and percentage fields fall back
//! to zero, the time horizon falls back to one year, and non-finite values
//! never leave this module.

use std::fmt::Display;

/// Parses a monetary or percentage field. Blank, malformed, or non-finite
/// input counts as zero.
pub fn amount_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses a time horizon in years. Blank, malformed, zero, or negative input
/// falls back to a single year so the compounding math stays defined.
pub fn years_or_one(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 1.0,
    }
}

/// Rounds to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Cadence at which per-share dividends are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividendFrequency {
    Monthly,
    Quarterly,
    Annual,
}

impl DividendFrequency {
    /// Lenient parse for raw form input. Anything unrecognized pays out
    /// annually.
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "monthly" => DividendFrequency::Monthly,
            "quarterly" => DividendFrequency::Quarterly,
            _ => DividendFrequency::Annual,
        }
    }

    pub fn payouts_per_year(&self) -> f64 {
        match self {
            DividendFrequency::Monthly => 12.0,
            DividendFrequency::Quarterly => 4.0,
            DividendFrequency::Annual => 1.0,
        }
    }
}

impl Display for DividendFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DividendFrequency::Monthly => "monthly",
                DividendFrequency::Quarterly => "quarterly",
                DividendFrequency::Annual => "annual",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero("10000"), 10000.0);
        assert_eq!(amount_or_zero("  150.65 "), 150.65);
        assert_eq!(amount_or_zero("-50"), -50.0);
        assert_eq!(amount_or_zero(""), 0.0);
        assert_eq!(amount_or_zero("   "), 0.0);
        assert_eq!(amount_or_zero("abc"), 0.0);
        assert_eq!(amount_or_zero("12,5"), 0.0);
        // A literal "NaN" parses as f64::NAN; it must not propagate.
        assert_eq!(amount_or_zero("NaN"), 0.0);
        assert_eq!(amount_or_zero("inf"), 0.0);
    }

    #[test]
    fn test_years_or_one() {
        assert_eq!(years_or_one("3"), 3.0);
        assert_eq!(years_or_one("0.5"), 0.5);
        assert_eq!(years_or_one(""), 1.0);
        assert_eq!(years_or_one("0"), 1.0);
        assert_eq!(years_or_one("-2"), 1.0);
        assert_eq!(years_or_one("ten"), 1.0);
        assert_eq!(years_or_one("inf"), 1.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.66666666), 66.67);
        assert_eq!(round2(2000.0000000000002), 2000.0);
        assert_eq!(round2(-0.005), -0.01);
    }

    #[test]
    fn test_frequency_multiplier_table() {
        assert_eq!(DividendFrequency::Monthly.payouts_per_year(), 12.0);
        assert_eq!(DividendFrequency::Quarterly.payouts_per_year(), 4.0);
        assert_eq!(DividendFrequency::Annual.payouts_per_year(), 1.0);
    }

    #[test]
    fn test_frequency_lenient_parse() {
        assert_eq!(
            DividendFrequency::from_input("monthly"),
            DividendFrequency::Monthly
        );
        assert_eq!(
            DividendFrequency::from_input(" Quarterly "),
            DividendFrequency::Quarterly
        );
        assert_eq!(
            DividendFrequency::from_input("annual"),
            DividendFrequency::Annual
        );
        // Unrecognized cadence is treated as a single annual payout.
        assert_eq!(
            DividendFrequency::from_input("weekly"),
            DividendFrequency::Annual
        );
        assert_eq!(DividendFrequency::from_input(""), DividendFrequency::Annual);
    }
}
