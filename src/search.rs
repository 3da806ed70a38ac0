//! Search API.
//!
//! Endpoint: `GET /api/fuzzysearch/1/app_autocomplete?q=<query>`
//!
//! Response JSON:
//! ```json
//! {
//!   "results": [
//!     { "type": "b", "id": 123, "name": "...", "url": "...", "img_id": 456, ... },
//!     { "type": "a", "id": 789, "name": "...", "band_id": 123, "art_id": 101112, ... },
//!     { "type": "t", "id": 131415, "name": "...", "album_id": 789, ... }
//!   ]
//! }
//! ```
//!
//! `type` is a single-letter code (`b` band, `a` album, `t` track); the
//! `url` field of album and track entries is double-concatenated upstream.

use crate::client::{BASE_URL, BandcampClient};
use crate::error::{BandcampError, Result};
use crate::parse::parse_search_result_item;
use crate::types::SearchResult;

impl BandcampClient {
    /// Search artists, albums, and tracks via the autocomplete endpoint.
    ///
    /// Entries with unrecognized type codes are dropped, not errors.
    ///
    /// # Errors
    ///
    /// - [`BandcampError::BadQuery`] — empty query, rejected before any
    ///   request is made
    /// - [`BandcampError::Http`] — network failure
    /// - [`BandcampError::Api`] — upstream error payload
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(BandcampError::BadQuery);
        }
        let url = format!("{BASE_URL}/fuzzysearch/1/app_autocomplete");
        let resp = self.get(&url, &[("q", query.to_owned())])?;
        Ok(resp["results"]
            .as_array()
            .map(|arr| arr.iter().filter_map(parse_search_result_item).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected_before_request() {
        let client = BandcampClient::new().unwrap();
        assert!(matches!(client.search(""), Err(BandcampError::BadQuery)));
        assert!(matches!(client.search("   "), Err(BandcampError::BadQuery)));
    }
}
