//! Ticker-to-price resolution with an offline fallback for symbols the live
//! endpoint cannot serve.

use tracing::debug;

use crate::core::quote::{Provenance, QuoteError, QuoteProvider, ResolvedPrice};
use crate::core::valuation::round2;
use crate::providers::offline;

/// Resolves a user-entered ticker to a current price.
///
/// Toronto-suffixed tickers are first checked against the bundled offline
/// table; everything else (including table misses) goes to the live
/// provider. One attempt per call, no retry.
pub struct PriceResolver<'a> {
    live: &'a dyn QuoteProvider,
}

impl<'a> PriceResolver<'a> {
    pub fn new(live: &'a dyn QuoteProvider) -> Self {
        PriceResolver { live }
    }

    pub async fn resolve(&self, ticker: &str) -> Result<ResolvedPrice, QuoteError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(QuoteError::EmptyTicker);
        }

        let symbol = ticker.to_uppercase();

        if symbol.ends_with(offline::TSX_SUFFIX)
            && let Some(listing) = offline::lookup(&symbol)
        {
            debug!("Serving {} from the bundled offline table", symbol);
            return Ok(ResolvedPrice {
                symbol,
                price: listing.price,
                name: Some(listing.name.to_string()),
                provenance: Provenance::Offline,
            });
        }

        match self.live.fetch_quote(&symbol).await {
            Ok(quote) => Ok(ResolvedPrice {
                symbol,
                price: round2(quote.price),
                name: quote.name,
                provenance: Provenance::Live,
            }),
            Err(e) => Err(QuoteError::Resolution {
                ticker: symbol,
                reason: e.to_string(),
            }),
        }
    }
}
