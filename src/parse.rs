//! Response normalization.
//!
//! Bandcamp's internal endpoints return several inconsistent JSON shapes:
//! search results use single-letter type codes and double-concatenated
//! URLs, tralbum payloads nest artist info differently for single-track
//! and multi-track responses, and image URLs have to be synthesized from
//! numeric asset IDs with per-entity templates. Everything here is a pure
//! function from a raw [`serde_json::Value`] to the typed model in
//! [`types`](crate::types); missing or malformed optional fields become
//! `None`, never an error.

use crate::types::{
    Album, AlbumRef, AlbumResult, Artist, ArtistResult, CollectionItem, ItemPrice, Price,
    SearchResult, Track, TrackResult, TralbumKind,
};
use serde_json::Value;
use std::collections::HashMap;

const IMG_BASE: &str = "https://f4.bcbits.com/img";

/// Which CDN image template to apply to an asset ID.
///
/// Artist bio images are PNG with a zero-padded prefix; full album art is
/// JPG; search-result thumbnails use the album prefix but stay PNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtKind {
    Artist,
    Album,
    SearchThumb,
}

/// Synthesize a CDN image URL from a numeric asset ID.
pub fn build_art_url(art_id: Option<i64>, kind: ArtKind) -> Option<String> {
    let id = art_id?;
    Some(match kind {
        ArtKind::Artist => format!("{IMG_BASE}/000{id}_0.png"),
        ArtKind::Album => format!("{IMG_BASE}/a{id}_0.jpg"),
        ArtKind::SearchThumb => format!("{IMG_BASE}/a{id}_0.png"),
    })
}

/// Split a double-concatenated search-result URL.
///
/// Album and track search results arrive as `"<artist-url><item-url>"`
/// where the item URL starts with the artist URL, e.g.
/// `https://a.bandcamp.comhttps://a.bandcamp.com/album/x`. The split point
/// is the second occurrence of the `scheme://` prefix. When the pattern is
/// absent both halves are the input unchanged; this never fails.
pub fn split_doubled_url(raw: &str) -> (String, String) {
    if let Some(scheme_end) = raw.find("://") {
        let prefix = &raw[..scheme_end + 3];
        if let Some(rel) = raw[scheme_end + 3..].find(prefix) {
            let split = scheme_end + 3 + rel;
            return (raw[..split].to_owned(), raw[split..].to_owned());
        }
    }
    (raw.to_owned(), raw.to_owned())
}

/// Parse one entry of the autocomplete `results` array.
///
/// Dispatches on the single-letter `type` code: `"b"` band, `"a"` album,
/// `"t"` track. Unrecognized codes yield `None` and are dropped by the
/// caller rather than treated as errors.
pub fn parse_search_result_item(v: &Value) -> Option<SearchResult> {
    let id = v["id"].as_i64().unwrap_or(0);
    let name = v["name"].as_str().unwrap_or("").to_owned();
    match v["type"].as_str()? {
        "b" => Some(SearchResult::Artist(ArtistResult {
            id,
            name,
            url: v["url"].as_str().unwrap_or("").to_owned(),
            location: str_field(v, "location"),
            is_label: v["is_label"].as_bool().unwrap_or(false),
            tags: v["tag_names"].as_array().map(|arr| {
                arr.iter()
                    .filter_map(|t| t.as_str().map(String::from))
                    .collect()
            }),
            image_url: build_art_url(
                v["img_id"].as_i64().or_else(|| v["art_id"].as_i64()),
                ArtKind::Artist,
            ),
            genre: str_field(v, "genre_name"),
        })),
        "a" => {
            let (artist_url, url) = split_doubled_url(v["url"].as_str().unwrap_or(""));
            Some(SearchResult::Album(AlbumResult {
                id,
                name,
                url,
                artist_id: v["band_id"].as_i64().unwrap_or(0),
                artist_name: v["band_name"].as_str().unwrap_or("").to_owned(),
                artist_url: Some(artist_url),
                image_url: build_art_url(v["art_id"].as_i64(), ArtKind::SearchThumb),
            }))
        }
        "t" => {
            let (artist_url, url) = split_doubled_url(v["url"].as_str().unwrap_or(""));
            Some(SearchResult::Track(TrackResult {
                id,
                name,
                url,
                artist_id: v["band_id"].as_i64().unwrap_or(0),
                artist_name: v["band_name"].as_str().unwrap_or("").to_owned(),
                album_name: str_field(v, "album_name"),
                album_id: v["album_id"].as_i64(),
                artist_url: Some(artist_url),
                image_url: build_art_url(v["art_id"].as_i64(), ArtKind::SearchThumb),
            }))
        }
        _ => None,
    }
}

/// Parse a band-details payload into an [`Artist`].
pub fn parse_artist(v: &Value) -> Artist {
    Artist {
        id: v["id"].as_i64().unwrap_or(0),
        name: v["name"].as_str().unwrap_or("").to_owned(),
        url: str_field(v, "bandcamp_url"),
        location: str_field(v, "location_text"),
        image_url: build_art_url(v["bio_image_id"].as_i64(), ArtKind::Artist),
        is_label: v["band"]["is_label"].as_bool().unwrap_or(false),
        bio: str_field(v, "bio"),
        tags: tag_names(v),
        genre: str_field(v, "genre_name"),
    }
}

/// Parse a multi-track tralbum-details payload into an [`Album`].
///
/// Every entry of `tracks` shares the album's [`Artist`] and holds an
/// [`AlbumRef`] back to the album, in upstream order.
pub fn parse_album(v: &Value) -> Album {
    let mut album = Album {
        id: v["id"].as_i64().unwrap_or(0),
        title: v["title"].as_str().unwrap_or("").to_owned(),
        artist: parse_artist_from_album(v),
        url: str_field(v, "bandcamp_url"),
        art_url: build_art_url(v["art_id"].as_i64(), ArtKind::Album),
        release_date: v["release_date"].as_i64(),
        price: parse_price_info(v),
        is_free: v["price"].as_f64() == Some(0.0),
        is_preorder: v["is_preorder"].as_bool().unwrap_or(false),
        is_purchasable: v["is_purchasable"].as_bool().unwrap_or(false),
        is_set_price: v["is_set_price"].as_bool().unwrap_or(false),
        about: str_field(v, "about"),
        credits: str_field(v, "credits"),
        tags: tag_names(v),
        total_tracks: int_field(v, "num_downloadable_tracks"),
        tracks: None,
        kind: determine_album_type(v, false),
    };
    let tracks = v["tracks"].as_array().map(|arr| {
        arr.iter()
            .map(|t| parse_track_from_album(t, &album))
            .collect()
    });
    album.tracks = tracks;
    album
}

/// Parse a single-track tralbum-details payload into a standalone [`Track`].
///
/// The API nests the track detail one level down in `tracks[0]` even for
/// a standalone fetch; there is no album context, so `album` is `None`.
pub fn parse_track(v: &Value) -> Track {
    let detail = &v["tracks"][0];
    Track {
        id: v["id"].as_i64().unwrap_or(0),
        title: v["title"].as_str().unwrap_or("").to_owned(),
        artist: parse_artist_from_album(v),
        album: None,
        url: str_field(v, "bandcamp_url"),
        duration: detail["duration"].as_f64(),
        streaming_url: streaming_urls(detail),
        track_number: int_field(detail, "track_num"),
        lyrics: detail["lyrics"].as_str().map(String::from),
        about: str_field(v, "about"),
        credits: str_field(v, "credits"),
        kind: determine_album_type(v, true),
    }
}

/// Extract the [`Artist`] embedded in a tralbum-details payload.
///
/// `tralbum_artist` is the authoritative display name and may differ from
/// `band.name`; the numeric identity comes from `band.band_id`.
pub(crate) fn parse_artist_from_album(v: &Value) -> Artist {
    let band = &v["band"];
    let name = v["tralbum_artist"]
        .as_str()
        .or_else(|| band["name"].as_str())
        .unwrap_or("");
    let mut artist = Artist::new(band["band_id"].as_i64().unwrap_or(0), name);
    artist.location = band["location"].as_str().map(String::from);
    artist
}

/// Parse one entry of an album's `tracks` array.
pub(crate) fn parse_track_from_album(v: &Value, album: &Album) -> Track {
    Track {
        id: v["track_id"].as_i64().unwrap_or(0),
        title: v["title"].as_str().unwrap_or("").to_owned(),
        artist: album.artist.clone(),
        album: Some(AlbumRef::from(album)),
        url: None,
        duration: v["duration"].as_f64(),
        streaming_url: streaming_urls(v),
        track_number: int_field(v, "track_num"),
        lyrics: v["lyrics"].as_str().map(String::from),
        about: None,
        credits: None,
        kind: TralbumKind::Track,
    }
}

/// Parse one entry of a fan-collection `items` array.
///
/// `price` is accepted in both upstream shapes: a bare number or a
/// `{ currency, amount }` object.
pub fn parse_collection_item(v: &Value) -> CollectionItem {
    CollectionItem {
        item_type: v["item_type"].as_str().unwrap_or("").to_owned(),
        item_id: v["item_id"].as_i64().unwrap_or(0),
        band_id: v["band_id"].as_i64().unwrap_or(0),
        tralbum_type: str_field(v, "tralbum_type"),
        band_name: v["band_name"].as_str().unwrap_or("").to_owned(),
        item_title: v["item_title"].as_str().unwrap_or("").to_owned(),
        item_url: v["item_url"].as_str().unwrap_or("").to_owned(),
        art_id: v["art_id"].as_i64(),
        num_streamable_tracks: v["num_streamable_tracks"]
            .as_u64()
            .and_then(|n| u32::try_from(n).ok()),
        is_purchasable: v["is_purchasable"].as_bool().unwrap_or(false),
        price: parse_item_price(&v["price"]),
    }
}

/// Classify a tralbum payload.
///
/// A payload fetched as a single track is always [`TralbumKind::Track`];
/// an album-shaped payload whose `item_type` is `"track"` is a single
/// sold as an album (`"album-single"`); everything else is an album.
pub(crate) fn determine_album_type(v: &Value, is_single_track: bool) -> TralbumKind {
    if is_single_track {
        TralbumKind::Track
    } else if v["item_type"].as_str() == Some("track") {
        TralbumKind::AlbumSingle
    } else {
        TralbumKind::Album
    }
}

/// Build a [`Price`] when both `currency` and `price` are present.
pub(crate) fn parse_price_info(v: &Value) -> Option<Price> {
    Some(Price {
        currency: v["currency"].as_str()?.to_owned(),
        amount: v["price"].as_f64()?,
    })
}

fn parse_item_price(v: &Value) -> Option<ItemPrice> {
    if let Some(amount) = v.as_f64() {
        return Some(ItemPrice::Amount(amount));
    }
    let obj = v.as_object()?;
    Some(ItemPrice::Detailed(Price {
        currency: obj.get("currency")?.as_str()?.to_owned(),
        amount: obj.get("amount")?.as_f64()?,
    }))
}

fn str_field(v: &Value, key: &str) -> Option<String> {
    v[key].as_str().map(String::from)
}

fn int_field(v: &Value, key: &str) -> u32 {
    v[key].as_u64().and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

/// Flatten a `tags` array of `{ "name": ... }` objects into plain names.
fn tag_names(v: &Value) -> Option<Vec<String>> {
    v["tags"].as_array().map(|arr| {
        arr.iter()
            .filter_map(|t| t["name"].as_str().map(String::from))
            .collect()
    })
}

fn streaming_urls(v: &Value) -> Option<HashMap<String, String>> {
    v["streaming_url"].as_object().map(|m| {
        m.iter()
            .filter_map(|(fmt, u)| u.as_str().map(|u| (fmt.clone(), u.to_owned())))
            .collect()
    })
}
