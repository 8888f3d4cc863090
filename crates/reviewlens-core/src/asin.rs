//! ASIN extraction from Amazon product URLs

use regex::Regex;

use crate::error::Result;

/// Extracts the 10-character ASIN that keys an analysis batch from the
/// common Amazon product URL forms (`/dp/<ASIN>` and `/gp/product/<ASIN>`).
pub struct AsinParser {
    dp_regex: Regex,
    gp_regex: Regex,
}

impl AsinParser {
    /// Create a new parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            dp_regex: Regex::new(r"(?i)/dp/([A-Z0-9]{10})").map_err(|e| {
                crate::Error::config(format!("failed to compile dp URL regex: {e}"))
            })?,
            gp_regex: Regex::new(r"(?i)/gp/product/([A-Z0-9]{10})").map_err(|e| {
                crate::Error::config(format!("failed to compile gp URL regex: {e}"))
            })?,
        })
    }

    /// Extract the ASIN from a product URL, upper-cased. Returns `None`
    /// for URLs that carry no recognizable product id.
    pub fn extract(&self, url: &str) -> Option<String> {
        self.dp_regex
            .captures(url)
            .or_else(|| self.gp_regex.captures(url))
            .map(|caps| caps[1].to_ascii_uppercase())
    }
}
