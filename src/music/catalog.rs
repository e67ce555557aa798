//! Read-only recommendation table keyed by mood/genre pairings.

use crate::mood::kind::Mood;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key returned for unknown lookups.
pub const DEFAULT_GENRE: &str = "ambient,chill";

const COVER: &str = "/placeholder.svg?height=80&width=80";

/// One recommended track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Length in seconds.
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    /// Cover image URL.
    #[serde(rename = "cover")]
    pub cover_url: String,
}

impl Track {
    fn new(id: &str, title: &str, artist: &str, duration_secs: u32) -> Self {
        Self {
            id: id.to_owned(),
            title: title.to_owned(),
            artist: artist.to_owned(),
            duration_secs,
            cover_url: COVER.to_owned(),
        }
    }
}

/// Genre key → track list lookup.
///
/// Callers hold a catalog and pass it where recommendations are needed; there is no global table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCatalog {
    entries: BTreeMap<String, Vec<Track>>,
}

impl TrackCatalog {
    /// Build a catalog from explicit entries. It must contain [`DEFAULT_GENRE`] for fallback
    /// lookups to return anything.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<Track>)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The five built-in pairings.
    pub fn builtin() -> Self {
        Self::from_entries([
            (
                "pop,happy",
                vec![
                    Track::new("h1", "Happy Vibes", "Mood Lifters", 187),
                    Track::new("h2", "Sunshine Day", "The Bright Side", 203),
                    Track::new("h3", "Good Times", "Positive Energy", 176),
                ],
            ),
            (
                "sad,acoustic",
                vec![
                    Track::new("s1", "Rainy Days", "Melancholy Mood", 224),
                    Track::new("s2", "Missing You", "The Lonely Hearts", 198),
                    Track::new("s3", "Blue Skies Fading", "Downcast", 215),
                ],
            ),
            (
                "rock,metal",
                vec![
                    Track::new("a1", "Rage Against", "The Furious", 167),
                    Track::new("a2", "Breaking Point", "Intensity", 183),
                    Track::new("a3", "Unleashed", "Raw Energy", 192),
                ],
            ),
            (
                DEFAULT_GENRE,
                vec![
                    Track::new("n1", "Calm Waters", "Serenity Now", 210),
                    Track::new("n2", "Balanced Mind", "Equilibrium", 195),
                    Track::new("n3", "Middle Ground", "The Moderates", 188),
                ],
            ),
            (
                "dance,electronic",
                vec![
                    Track::new("su1", "Unexpected Turn", "The Astonished", 173),
                    Track::new("su2", "Wow Factor", "Amazement", 189),
                    Track::new("su3", "Jaw Dropper", "Shock & Awe", 201),
                ],
            ),
        ])
    }

    /// Tracks for `genre`, or the [`DEFAULT_GENRE`] list for unknown keys.
    pub fn tracks(&self, genre: &str) -> &[Track] {
        self.entries
            .get(genre.trim())
            .or_else(|| self.entries.get(DEFAULT_GENRE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tracks recommended for `mood`.
    pub fn for_mood(&self, mood: Mood) -> &[Track] {
        self.tracks(mood.genre_key())
    }

    /// Known genre keys, sorted.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/music/catalog.rs"]
mod tests;
