//! Live quote client for the Financial Modeling Prep style quote endpoint.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::quote::{LiveQuote, QuoteProvider};
use crate::providers::offline::TSX_SUFFIX;

/// Exchange qualifier the endpoint expects for Toronto listings.
const TSX_QUALIFIER: &str = ".TRT";

pub struct FmpProvider {
    base_url: String,
    api_key: String,
}

impl FmpProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        FmpProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Rewrites the user-facing `.TO` suffix into the endpoint's Toronto
    /// exchange qualifier. Other symbols pass through unchanged.
    fn provider_symbol(symbol: &str) -> String {
        match symbol.strip_suffix(TSX_SUFFIX) {
            Some(base) => format!("{base}{TSX_QUALIFIER}"),
            None => symbol.to_string(),
        }
    }
}

/// The endpoint reports prices as JSON numbers or numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    fn as_f64(&self) -> Option<f64> {
        match self {
            PriceField::Number(v) => Some(*v).filter(|v| v.is_finite()),
            PriceField::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuoteItem {
    name: Option<String>,
    price: Option<PriceField>,
}

#[async_trait]
impl QuoteProvider for FmpProvider {
    #[instrument(name = "FmpQuoteFetch", skip(self), fields(symbol = %symbol))]
    async fn fetch_quote(&self, symbol: &str) -> Result<LiveQuote> {
        let provider_symbol = Self::provider_symbol(symbol);
        let url = format!(
            "{}/api/v3/quote/{}?apikey={}",
            self.base_url, provider_symbol, self.api_key
        );
        debug!("Requesting quote data for {}", provider_symbol);

        let client = reqwest::Client::builder()
            .user_agent("invcast/1.0")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {}", e, symbol))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            ));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(anyhow!("Received empty response for symbol: {}", symbol));
        }

        let payload: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse quote response for {}: {}", symbol, e))?;

        // The endpoint signals auth/limit failures inside an object payload.
        if let Some(message) = payload.get("Error Message").and_then(|m| m.as_str()) {
            return Err(anyhow!("Quote endpoint error for {}: {}", symbol, message));
        }

        let quotes: Vec<QuoteItem> = serde_json::from_value(payload)
            .map_err(|e| anyhow!("Failed to parse quote response for {}: {}", symbol, e))?;

        let item = quotes
            .first()
            .ok_or_else(|| anyhow!("No quote data found for symbol: {}", symbol))?;

        let price = item
            .price
            .as_ref()
            .and_then(PriceField::as_f64)
            .ok_or_else(|| anyhow!("No usable price in quote for symbol: {}", symbol))?;

        debug!("Successfully fetched quote for {}: {}", symbol, price);

        Ok(LiveQuote {
            price,
            name: item.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(symbol: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/api/v3/quote/{symbol}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .and(query_param("apikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_quote_fetch() {
        let mock_response = r#"[
            {"symbol": "AAPL", "name": "Apple Inc.", "price": 150.65}
        ]"#;
        let mock_server = create_mock_server("AAPL", mock_response).await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let quote = provider.fetch_quote("AAPL").await.unwrap();
        assert_eq!(quote.price, 150.65);
        assert_eq!(quote.name, Some("Apple Inc.".to_string()));
    }

    #[tokio::test]
    async fn test_price_as_numeric_string() {
        let mock_response = r#"[{"symbol": "MSFT", "price": "411.22"}]"#;
        let mock_server = create_mock_server("MSFT", mock_response).await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let quote = provider.fetch_quote("MSFT").await.unwrap();
        assert_eq!(quote.price, 411.22);
        assert_eq!(quote.name, None);
    }

    #[tokio::test]
    async fn test_toronto_suffix_is_rewritten_for_the_endpoint() {
        // The user-facing SHOP.TO must hit the endpoint as SHOP.TRT.
        let mock_response = r#"[{"symbol": "SHOP.TRT", "price": 91.45}]"#;
        let mock_server = create_mock_server("SHOP.TRT", mock_response).await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let quote = provider.fetch_quote("SHOP.TO").await.unwrap();
        assert_eq!(quote.price, 91.45);
    }

    #[tokio::test]
    async fn test_error_message_payload() {
        let mock_response = r#"{"Error Message": "Invalid API KEY."}"#;
        let mock_server = create_mock_server("AAPL", mock_response).await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let result = provider.fetch_quote("AAPL").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Quote endpoint error for AAPL: Invalid API KEY."
        );
    }

    #[tokio::test]
    async fn test_empty_quote_array() {
        let mock_server = create_mock_server("ZZZZ", "[]").await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let result = provider.fetch_quote("ZZZZ").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No quote data found for symbol: ZZZZ"
        );
    }

    #[tokio::test]
    async fn test_quote_without_a_usable_price() {
        let mock_response = r#"[{"symbol": "ZZZZ", "name": "Zombie Corp", "price": null}]"#;
        let mock_server = create_mock_server("ZZZZ", mock_response).await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let result = provider.fetch_quote("ZZZZ").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No usable price in quote for symbol: ZZZZ"
        );
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let mock_server = create_mock_server("AAPL", "<html>gateway timeout</html>").await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let result = provider.fetch_quote("AAPL").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse quote response for AAPL")
        );
    }

    #[tokio::test]
    async fn test_http_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/quote/AAPL"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = FmpProvider::new(&mock_server.uri(), "demo");
        let result = provider.fetch_quote("AAPL").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for symbol: AAPL"
        );
    }
}
