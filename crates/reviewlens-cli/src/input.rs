//! Request loading and normalization

use std::path::Path;

use reviewlens_core::{AnalysisRequest, AsinParser, Result};
use tracing::debug;

/// Read an `AnalysisRequest` from a JSON file
pub fn load_request(path: impl AsRef<Path>) -> Result<AnalysisRequest> {
    let content = std::fs::read_to_string(path)?;
    let request: AnalysisRequest = serde_json::from_str(&content)?;
    Ok(request)
}

/// Fill in derivable product identity: a missing ASIN is extracted from
/// the product URL when one is present.
pub fn normalize(request: &mut AnalysisRequest, parser: &AsinParser) {
    if request.product.asin.is_empty() {
        if let Some(url) = &request.product.source_url {
            if let Some(asin) = parser.extract(url) {
                debug!(asin = %asin, "derived ASIN from product URL");
                request.product.asin = asin;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const REQUEST_JSON: &str = r#"{
        "product": {
            "productName": "Acme Widget",
            "sourceUrl": "https://www.amazon.com/dp/B08N5WRWNW"
        },
        "reviews": [
            {"id": "r1", "text": "Works well enough", "rating": 4}
        ],
        "priceQuotes": [
            {"marketplaceName": "Amazon US", "price": 19.99, "isAmazon": true}
        ]
    }"#;

    #[test]
    fn test_load_and_normalize() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(REQUEST_JSON.as_bytes()).unwrap();

        let mut request = load_request(file.path()).unwrap();
        assert_eq!(request.reviews.len(), 1);
        assert_eq!(request.price_quotes.len(), 1);
        assert!(request.product.asin.is_empty());

        let parser = AsinParser::new().unwrap();
        normalize(&mut request, &parser);
        assert_eq!(request.product.asin, "B08N5WRWNW");
    }

    #[test]
    fn test_explicit_asin_is_kept() {
        let mut request: AnalysisRequest = serde_json::from_str(
            r#"{
                "product": {"asin": "B000000001", "productName": "Acme Widget",
                            "sourceUrl": "https://www.amazon.com/dp/B08N5WRWNW"},
                "reviews": []
            }"#,
        )
        .unwrap();

        let parser = AsinParser::new().unwrap();
        normalize(&mut request, &parser);
        assert_eq!(request.product.asin, "B000000001");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_request("/nonexistent/request.json").unwrap_err();
        assert!(matches!(err, reviewlens_core::Error::Io(_)));
    }
}
