//! Fan collection API (requires an identity token).
//!
//! # Endpoints
//!
//! ## `get_collection_summary` — `GET /api/fan/2/collection_summary`
//!
//! Response: `{ "fan_id": 999, "collection_count": 5, ... }`
//!
//! ## `get_collection_items` — `POST /api/fancollection/1/<listing>`
//!
//! `<listing>` is `collection_items`, `wishlist_items`, or
//! `following_bands` depending on [`CollectionType`].
//!
//! Request body: `{ "fan_id": 999, "count": 20, "older_than_token": "..." }`
//!
//! Response:
//! ```json
//! {
//!   "items": [ { "item_type": "album", "item_id": 789, ... } ],
//!   "has_more": true,
//!   "last_token": "1609459200:123:a::"
//! }
//! ```
//!
//! `last_token` is an opaque cursor; pass it back as `older_than_token`
//! to fetch the next page.

use crate::client::{BASE_URL, BandcampClient};
use crate::error::Result;
use crate::parse::parse_collection_item;
use crate::types::{CollectionSummary, CollectionType};
use serde_json::{Value, json};

impl BandcampClient {
    /// Get the authenticated fan's collection summary.
    ///
    /// Returns a [`CollectionSummary`] with the fan ID and empty items;
    /// use [`get_collection_items`](Self::get_collection_items) to page
    /// through the actual collection.
    ///
    /// # Errors
    ///
    /// - [`BandcampError::AuthRequired`](crate::BandcampError::AuthRequired)
    ///   — no identity token configured, rejected before any request
    pub fn get_collection_summary(&self) -> Result<CollectionSummary> {
        self.require_identity()?;
        let url = format!("{BASE_URL}/fan/2/collection_summary");
        let resp = self.get(&url, &[])?;
        Ok(CollectionSummary {
            fan_id: resp["fan_id"].as_i64().unwrap_or(0),
            items: Vec::new(),
            has_more: false,
            last_token: None,
        })
    }

    /// Page through the fan's collection, wishlist, or followed bands.
    ///
    /// Two dependent round trips: the summary endpoint supplies the
    /// `fan_id`, then the paginated listing is fetched. Pass the previous
    /// page's `last_token` as `older_than_token` to continue.
    pub fn get_collection_items(
        &self,
        collection_type: CollectionType,
        count: u32,
        older_than_token: Option<&str>,
    ) -> Result<CollectionSummary> {
        self.require_identity()?;
        let summary = self.get_collection_summary()?;
        let url = format!("{BASE_URL}/fancollection/1/{}", collection_type.endpoint());
        let mut body = json!({ "fan_id": summary.fan_id, "count": count });
        if let Some(token) = older_than_token {
            body["older_than_token"] = Value::from(token);
        }
        let resp = self.post(&url, &body)?;
        Ok(CollectionSummary {
            fan_id: summary.fan_id,
            items: resp["items"]
                .as_array()
                .map(|arr| arr.iter().map(parse_collection_item).collect())
                .unwrap_or_default(),
            has_more: resp["has_more"].as_bool().unwrap_or(false),
            last_token: resp["last_token"].as_str().map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BandcampError;

    #[test]
    fn test_collection_requires_identity_before_request() {
        let client = BandcampClient::new().unwrap();
        assert!(matches!(
            client.get_collection_summary(),
            Err(BandcampError::AuthRequired)
        ));
        assert!(matches!(
            client.get_collection_items(CollectionType::Collection, 5, None),
            Err(BandcampError::AuthRequired)
        ));
        assert!(matches!(
            client.get_collection_items(CollectionType::Wishlist, 5, Some("token123")),
            Err(BandcampError::AuthRequired)
        ));
    }
}
