use crate::foundation::error::{ToonError, ToonResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Emotional bucket keying particle presets and music recommendations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Warm, fast particles; upbeat tracks.
    Happy,
    /// Slow blue drops.
    Sad,
    /// Dense red triangles.
    Angry,
    /// Gray squares. Fallback for anything unrecognized.
    #[default]
    Neutral,
    /// Purple stars.
    Surprised,
}

impl Mood {
    /// Every mood, in declaration order.
    pub const ALL: &'static [Mood] = &[
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Neutral,
        Mood::Surprised,
    ];

    /// Lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
            Mood::Surprised => "surprised",
        }
    }

    /// Parse a mood name, falling back to [`Mood::Neutral`] for anything unknown.
    pub fn from_name(name: &str) -> Mood {
        name.parse().unwrap_or_default()
    }

    /// Map a face-expression label to a mood.
    ///
    /// `fearful` reads as sad and `disgusted` as angry; unknown labels are neutral.
    pub fn from_expression(expression: &str) -> Mood {
        match expression.trim().to_ascii_lowercase().as_str() {
            "happy" => Mood::Happy,
            "sad" | "fearful" => Mood::Sad,
            "angry" | "disgusted" => Mood::Angry,
            "surprised" => Mood::Surprised,
            _ => Mood::Neutral,
        }
    }

    /// Recommendation-table key for this mood.
    pub fn genre_key(self) -> &'static str {
        match self {
            Mood::Happy => "pop,happy",
            Mood::Sad => "sad,acoustic",
            Mood::Angry => "rock,metal",
            Mood::Neutral => "ambient,chill",
            Mood::Surprised => "dance,electronic",
        }
    }
}

impl FromStr for Mood {
    type Err = ToonError;

    fn from_str(s: &str) -> ToonResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "neutral" => Ok(Mood::Neutral),
            "surprised" => Ok(Mood::Surprised),
            other => Err(ToonError::validation(format!("unknown mood \"{other}\""))),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood of the highest-scoring expression.
///
/// Ties keep the earlier entry, and a score must beat `0.0` to displace the neutral start.
pub fn dominant_mood<I, S>(scores: I) -> Mood
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut best: Option<S> = None;
    let mut best_score = 0.0;
    for (expression, score) in scores {
        if score > best_score {
            best_score = score;
            best = Some(expression);
        }
    }
    best.map_or(Mood::Neutral, |e| Mood::from_expression(e.as_ref()))
}

#[cfg(test)]
#[path = "../../tests/unit/mood/kind.rs"]
mod tests;
