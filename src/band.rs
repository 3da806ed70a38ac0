//! Band (artist) detail API.
//!
//! Endpoint: `POST /api/mobile/24/band_details`
//!
//! Request body: `{ "band_id": 123 }` — this endpoint is body-based, not
//! query-based.
//!
//! Response JSON:
//! ```json
//! {
//!   "id": 123,
//!   "name": "...",
//!   "bandcamp_url": "https://...",
//!   "location_text": "...",
//!   "bio_image_id": 456,
//!   "bio": "...",
//!   "tags": [{ "name": "electronic" }, ...],
//!   "discography": [ ...loosely-structured release entries... ]
//! }
//! ```

use crate::client::{BASE_URL, BandcampClient};
use crate::error::Result;
use crate::parse::parse_artist;
use crate::types::Artist;
use serde_json::{Value, json};

impl BandcampClient {
    /// Get detailed artist information.
    pub fn get_artist(&self, artist_id: i64) -> Result<Artist> {
        let resp = self.band_details(artist_id)?;
        Ok(parse_artist(&resp))
    }

    /// Get an artist's discography as raw JSON entries.
    ///
    /// Discography entries vary too widely upstream to model safely, so
    /// they are returned unnormalized. Empty when the payload has none.
    pub fn get_artist_discography(&self, artist_id: i64) -> Result<Vec<Value>> {
        let resp = self.band_details(artist_id)?;
        Ok(resp["discography"].as_array().cloned().unwrap_or_default())
    }

    fn band_details(&self, band_id: i64) -> Result<Value> {
        let url = format!("{BASE_URL}/mobile/24/band_details");
        self.post(&url, &json!({ "band_id": band_id }))
    }
}
