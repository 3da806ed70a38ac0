//! Data types for Bandcamp API responses.
//!
//! Every value here is produced by the normalization functions in
//! [`parse`](crate::parse) from a single raw JSON payload; the upstream
//! payloads are inconsistent across endpoints and never escape the parser.
//! Field names follow Rust conventions (`snake_case`) rather than the
//! original API naming (`band_id`, `tralbum_artist`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Bandcamp artist or label page.
///
/// Returned by [`BandcampClient::get_artist`](crate::BandcampClient::get_artist)
/// and embedded in [`Album`] / [`Track`].
///
/// Equality compares `id` and `name` only, so the artist embedded in an
/// album and the copies shared with its tracks compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    /// Bandcamp band ID.
    pub id: i64,
    /// Display name (`tralbum_artist` takes precedence over `band.name`).
    pub name: String,
    /// Artist page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form location string, e.g. `"Portland, Oregon"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Bio image URL, synthesized from `bio_image_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether this page is a label rather than a single artist.
    #[serde(default)]
    pub is_label: bool,
    /// Artist biography text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Tag names in upstream order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Primary genre name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Artist {
    /// Create an artist with only identity fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: None,
            location: None,
            image_url: None,
            is_label: false,
            bio: None,
            tags: None,
            genre: None,
        }
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

/// Release kind discriminator.
///
/// The upstream API represents a standalone single differently depending
/// on call site; this enum gives downstream consumers one uniform
/// discriminator. Serialized as `"album"` / `"album-single"` / `"track"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TralbumKind {
    Album,
    AlbumSingle,
    Track,
}

impl TralbumKind {
    /// The wire string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::AlbumSingle => "album-single",
            Self::Track => "track",
        }
    }
}

/// Price of a purchasable release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// ISO currency code, e.g. `"USD"`.
    pub currency: String,
    /// Amount in that currency.
    pub amount: f64,
}

/// An album release.
///
/// Returned by [`BandcampClient::get_album`](crate::BandcampClient::get_album).
/// Owns its [`Track`]s; every track shares the album's [`Artist`] and holds
/// an [`AlbumRef`] back to the album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Bandcamp tralbum ID.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Releasing artist.
    pub artist: Artist,
    /// Album page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Full-size album art URL (JPG), synthesized from `art_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_url: Option<String>,
    /// Release date as unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<i64>,
    /// Price, when the upstream payload carries both `price` and `currency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    /// True when the upstream price is exactly zero.
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub is_preorder: bool,
    #[serde(default)]
    pub is_purchasable: bool,
    #[serde(default)]
    pub is_set_price: bool,
    /// Album description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Credits text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
    /// Tag names in upstream order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Number of downloadable tracks (`num_downloadable_tracks` upstream).
    #[serde(default)]
    pub total_tracks: u32,
    /// Track list in upstream order; `None` when the payload had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
    /// Release kind, `"album-single"` for singles sold as albums.
    #[serde(rename = "type")]
    pub kind: TralbumKind,
}

impl Album {
    /// Create an album with only identity fields set.
    pub fn new(id: i64, title: impl Into<String>, artist: Artist) -> Self {
        Self {
            id,
            title: title.into(),
            artist,
            url: None,
            art_url: None,
            release_date: None,
            price: None,
            is_free: false,
            is_preorder: false,
            is_purchasable: false,
            is_set_price: false,
            about: None,
            credits: None,
            tags: None,
            total_tracks: 0,
            tracks: None,
            kind: TralbumKind::Album,
        }
    }
}

/// Non-owning back-reference from a [`Track`] to its containing [`Album`].
///
/// Holds only the album's identity so the track list and its parent stay a
/// plain value tree rather than a reference cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    /// Bandcamp tralbum ID of the album.
    pub id: i64,
    /// Album title.
    pub title: String,
}

impl From<&Album> for AlbumRef {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id,
            title: album.title.clone(),
        }
    }
}

/// A single track.
///
/// Returned by [`BandcampClient::get_track`](crate::BandcampClient::get_track)
/// (with `album: None`) and inside [`Album::tracks`] (with the album
/// back-reference set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Bandcamp track ID.
    pub id: i64,
    /// Track title.
    pub title: String,
    /// Performing artist, shared with the containing album when present.
    pub artist: Artist,
    /// Back-reference to the containing album; `None` for standalone fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<AlbumRef>,
    /// Track page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Duration in seconds, fractional upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Streaming URLs keyed by format name, e.g. `"mp3-128"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming_url: Option<HashMap<String, String>>,
    /// 1-based position within the album, 0 when unknown.
    #[serde(default)]
    pub track_number: u32,
    /// Lyrics text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    /// Track description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Credits text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
    /// Always [`TralbumKind::Track`] for tracks.
    #[serde(rename = "type")]
    pub kind: TralbumKind,
}

impl Track {
    /// Create a track with only identity fields set.
    pub fn new(id: i64, title: impl Into<String>, artist: Artist) -> Self {
        Self {
            id,
            title: title.into(),
            artist,
            album: None,
            url: None,
            duration: None,
            streaming_url: None,
            track_number: 0,
            lyrics: None,
            about: None,
            credits: None,
            kind: TralbumKind::Track,
        }
    }
}

/// One entry from the autocomplete search endpoint.
///
/// Upstream discriminates with single-letter type codes (`"b"` band,
/// `"a"` album, `"t"` track); unrecognized codes are dropped during
/// parsing rather than surfaced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Artist(ArtistResult),
    Album(AlbumResult),
    Track(TrackResult),
}

impl SearchResult {
    /// The normalized discriminator: `"artist"`, `"album"`, or `"track"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Artist(_) => "artist",
            Self::Album(_) => "album",
            Self::Track(_) => "track",
        }
    }

    /// Display name of the matched entity, whatever its kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Artist(r) => &r.name,
            Self::Album(r) => &r.name,
            Self::Track(r) => &r.name,
        }
    }
}

/// An artist (band) search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistResult {
    pub id: i64,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_label: bool,
    /// `tag_names` upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Synthesized from `img_id` with the artist PNG template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// `genre_name` upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

/// An album search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumResult {
    pub id: i64,
    pub name: String,
    /// Album page URL, recovered from the doubled upstream `url` field.
    pub url: String,
    /// `band_id` upstream.
    pub artist_id: i64,
    /// `band_name` upstream.
    pub artist_name: String,
    /// First half of the doubled upstream `url` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_url: Option<String>,
    /// Synthesized from `art_id` with the search-thumbnail PNG template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A track search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResult {
    pub id: i64,
    pub name: String,
    /// Track page URL, recovered from the doubled upstream `url` field.
    pub url: String,
    /// `band_id` upstream.
    pub artist_id: i64,
    /// `band_name` upstream.
    pub artist_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_id: Option<i64>,
    /// First half of the doubled upstream `url` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_url: Option<String>,
    /// Synthesized from `art_id` with the search-thumbnail PNG template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Price attached to a [`CollectionItem`].
///
/// The summary-adjacent endpoints send a bare number while the paginated
/// item endpoints send `{ "currency": ..., "amount": ... }`; both shapes
/// are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemPrice {
    Detailed(Price),
    Amount(f64),
}

/// One item from a fan's collection, wishlist, or followed bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    /// `"album"`, `"track"`, or `"band"` (followed bands).
    pub item_type: String,
    pub item_id: i64,
    pub band_id: i64,
    /// Upstream tralbum type code, e.g. `"a"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tralbum_type: Option<String>,
    pub band_name: String,
    pub item_title: String,
    pub item_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_streamable_tracks: Option<u32>,
    #[serde(default)]
    pub is_purchasable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<ItemPrice>,
}

/// A fan's collection page.
///
/// Returned with empty `items` by
/// [`BandcampClient::get_collection_summary`](crate::BandcampClient::get_collection_summary)
/// and populated by
/// [`BandcampClient::get_collection_items`](crate::BandcampClient::get_collection_items).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Bandcamp fan ID of the authenticated user.
    pub fan_id: i64,
    /// Items in upstream order.
    pub items: Vec<CollectionItem>,
    /// Whether another page exists.
    #[serde(default)]
    pub has_more: bool,
    /// Opaque cursor to pass as `older_than_token` for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_token: Option<String>,
}

/// Which fan-collection listing to page through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionType {
    /// Purchased items.
    Collection,
    /// Wishlisted items.
    Wishlist,
    /// Followed bands.
    Following,
}

impl CollectionType {
    /// Endpoint path segment under `/fancollection/1/`.
    pub(crate) fn endpoint(self) -> &'static str {
        match self {
            Self::Collection => "collection_items",
            Self::Wishlist => "wishlist_items",
            Self::Following => "following_bands",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_equality_by_id_and_name() {
        let mut a = Artist::new(123, "Test Artist");
        let b = Artist::new(123, "Test Artist");
        a.location = Some("Test City".into());
        assert_eq!(a, b);
        assert_ne!(a, Artist::new(123, "Other"));
        assert_ne!(a, Artist::new(124, "Test Artist"));
    }

    #[test]
    fn test_album_defaults() {
        let album = Album::new(789, "Test Album", Artist::new(123, "Test Artist"));
        assert!(!album.is_free);
        assert!(!album.is_preorder);
        assert!(!album.is_purchasable);
        assert!(!album.is_set_price);
        assert_eq!(album.total_tracks, 0);
        assert!(album.tracks.is_none());
        assert_eq!(album.kind, TralbumKind::Album);
    }

    #[test]
    fn test_track_defaults() {
        let track = Track::new(131_415, "Test Track", Artist::new(123, "Test Artist"));
        assert!(track.album.is_none());
        assert!(track.duration.is_none());
        assert_eq!(track.track_number, 0);
        assert_eq!(track.kind, TralbumKind::Track);
    }

    #[test]
    fn test_tralbum_kind_strings() {
        assert_eq!(TralbumKind::Album.as_str(), "album");
        assert_eq!(TralbumKind::AlbumSingle.as_str(), "album-single");
        assert_eq!(TralbumKind::Track.as_str(), "track");
    }
}
