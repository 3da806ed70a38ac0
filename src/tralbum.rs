//! Album and track detail API.
//!
//! Endpoint: `GET /api/mobile/24/tralbum_details`
//!
//! Query parameters:
//! - `band_id` — artist ID
//! - `tralbum_id` — album or track ID
//! - `tralbum_type` — `"a"` for albums, `"t"` for tracks
//!
//! The same endpoint serves both kinds; the payload shape differs. A
//! multi-track response nests artist info under `band` with the display
//! name in `tralbum_artist`, while a single-track response additionally
//! nests the track detail one level down in `tracks[0]`. Both shapes are
//! normalized in [`parse`](crate::parse).

use crate::client::{BASE_URL, BandcampClient};
use crate::error::Result;
use crate::parse::{parse_album, parse_track};
use crate::types::{Album, Track};
use serde_json::Value;

impl BandcampClient {
    /// Get full album details including the track list.
    ///
    /// Every returned track shares the album's artist and holds a
    /// back-reference to the album.
    ///
    /// # Errors
    ///
    /// - [`BandcampError::NotFound`](crate::BandcampError::NotFound) —
    ///   no such album
    /// - [`BandcampError::Http`](crate::BandcampError::Http) — network failure
    pub fn get_album(&self, artist_id: i64, album_id: i64) -> Result<Album> {
        let resp = self.tralbum_details(artist_id, album_id, "a")?;
        Ok(parse_album(&resp))
    }

    /// Get details of a standalone track (no album context).
    pub fn get_track(&self, artist_id: i64, track_id: i64) -> Result<Track> {
        let resp = self.tralbum_details(artist_id, track_id, "t")?;
        Ok(parse_track(&resp))
    }

    fn tralbum_details(
        &self,
        band_id: i64,
        tralbum_id: i64,
        tralbum_type: &str,
    ) -> Result<Value> {
        let url = format!("{BASE_URL}/mobile/24/tralbum_details");
        self.get(
            &url,
            &[
                ("band_id", band_id.to_string()),
                ("tralbum_id", tralbum_id.to_string()),
                ("tralbum_type", tralbum_type.to_owned()),
            ],
        )
    }
}
