//! Quote resolution contract and core types.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Display;
use thiserror::Error;

/// Symbols surfaced as a hint when a lookup fails.
pub const EXAMPLE_SYMBOLS: [&str; 4] = ["AAPL", "MSFT", "VTI", "XEQT.TO"];

/// Where a resolved price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Fetched from the live quote endpoint.
    Live,
    /// Served from the bundled demo table, no network involved.
    Offline,
}

impl Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Provenance::Live => "live",
                Provenance::Offline => "offline",
            }
        )
    }
}

/// A successfully resolved price for a ticker symbol.
#[derive(Debug, Clone)]
pub struct ResolvedPrice {
    /// The normalized (uppercase) symbol the price belongs to.
    pub symbol: String,
    /// Current price, fixed to two decimals.
    pub price: f64,
    /// Display name when the source provides one.
    pub name: Option<String>,
    pub provenance: Provenance,
}

/// Failure modes of a price lookup. Terminal per attempt: the caller decides
/// whether to re-trigger, nothing is retried here.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Rejected before any network activity.
    #[error("ticker symbol is empty")]
    EmptyTicker,
    /// The live endpoint could not produce a usable price.
    #[error(
        "could not resolve a price for {ticker}: {reason}. Known-good symbols include {}",
        EXAMPLE_SYMBOLS.join(", ")
    )]
    Resolution { ticker: String, reason: String },
}

/// A quote fetched from a live market-data endpoint.
#[derive(Debug, Clone)]
pub struct LiveQuote {
    pub price: f64,
    pub name: Option<String>,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<LiveQuote>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_display() {
        assert_eq!(Provenance::Live.to_string(), "live");
        assert_eq!(Provenance::Offline.to_string(), "offline");
    }

    #[test]
    fn test_resolution_error_lists_example_symbols() {
        let err = QuoteError::Resolution {
            ticker: "ZZZZ".to_string(),
            reason: "no quote data".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("ZZZZ"));
        assert!(message.contains("no quote data"));
        assert!(message.contains("AAPL"));
        assert!(message.contains("XEQT.TO"));
    }
}
