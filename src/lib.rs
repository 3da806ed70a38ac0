//! Bandcamp API client library.
//!
//! Client for Bandcamp's undocumented mobile/web API: search, album and
//! track details, artist pages, and the authenticated fan collection.
//! The interesting part is response normalization ([`parse`]): the
//! upstream endpoints return inconsistent JSON shapes (single-letter type
//! codes, doubled URLs, per-entity image templates, differently nested
//! artist info) which are reconciled into one typed model ([`types`]).
//!
//! # Authentication
//!
//! Public endpoints need no credentials. The fan-collection endpoints
//! require an `identity` cookie obtained from a logged-in browser session
//! on `bandcamp.com`, passed as the identity token:
//!
//! ```no_run
//! use bandcamp_api::BandcampClient;
//!
//! let client = BandcampClient::with_identity("YOUR_IDENTITY_COOKIE").unwrap();
//! let summary = client.get_collection_summary().unwrap();
//! println!("fan id: {}", summary.fan_id);
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                        | Endpoint                              | Description            |
//! |-----------------------------------------------|---------------------------------------|------------------------|
//! | [`BandcampClient::search`]                    | `GET /fuzzysearch/1/app_autocomplete` | Autocomplete search    |
//! | [`BandcampClient::get_album`]                 | `GET /mobile/24/tralbum_details`      | Album with tracks      |
//! | [`BandcampClient::get_track`]                 | `GET /mobile/24/tralbum_details`      | Standalone track       |
//! | [`BandcampClient::get_artist`]                | `POST /mobile/24/band_details`        | Artist page            |
//! | [`BandcampClient::get_artist_discography`]    | `POST /mobile/24/band_details`        | Raw discography list   |
//! | [`BandcampClient::get_collection_summary`]    | `GET /fan/2/collection_summary`       | Fan ID lookup          |
//! | [`BandcampClient::get_collection_items`]      | `POST /fancollection/1/...`           | Collection / wishlist  |
//!
//! # Errors
//!
//! Bandcamp signals errors inside the JSON body (`"error": true`), not
//! via HTTP status. See [`BandcampError`] for the mapping.

mod band;
pub mod client;
mod collection;
pub mod error;
pub mod parse;
mod search;
mod tralbum;
pub mod types;

pub use client::{BandcampClient, BandcampClientBuilder};
pub use error::{BandcampError, Result};
pub use types::{
    Album, AlbumRef, AlbumResult, Artist, ArtistResult, CollectionItem, CollectionSummary,
    CollectionType, ItemPrice, Price, SearchResult, Track, TrackResult, TralbumKind,
};
