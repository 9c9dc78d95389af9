//! Static price table for TSX listings the live endpoint's free tier cannot
//! serve. Prices are indicative demo values, not market data.

/// User-facing suffix for Toronto Stock Exchange listings.
pub const TSX_SUFFIX: &str = ".TO";

/// A bundled demo listing: symbol, display name, last indicative price.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
}

const LISTINGS: &[Listing] = &[
    Listing {
        symbol: "XEQT.TO",
        name: "iShares Core Equity ETF Portfolio",
        price: 35.12,
    },
    Listing {
        symbol: "VEQT.TO",
        name: "Vanguard All-Equity ETF Portfolio",
        price: 46.80,
    },
    Listing {
        symbol: "VFV.TO",
        name: "Vanguard S&P 500 Index ETF",
        price: 151.37,
    },
    Listing {
        symbol: "XIC.TO",
        name: "iShares Core S&P/TSX Capped Composite Index ETF",
        price: 42.58,
    },
    Listing {
        symbol: "ZSP.TO",
        name: "BMO S&P 500 Index ETF",
        price: 94.23,
    },
];

/// Looks up a normalized (uppercase) symbol in the bundled table.
pub fn lookup(symbol: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|listing| listing.symbol == symbol)
}
