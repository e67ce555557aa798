use crate::foundation::color::Rgb8;
use crate::foundation::error::{ToonError, ToonResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Upper bound of [`AvatarOptions::blush_intensity`].
pub const MAX_BLUSH: u8 = 100;

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lower-case wire name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ToonError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(ToonError::validation(format!(
                        concat!("unknown ", $what, " \"{}\""),
                        other
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum! {
    /// Hair silhouette.
    HairStyle, "hair style" {
        /// Ring plus a top cap.
        Short => "short",
        /// Cap plus shoulder-length sides behind the head.
        Medium => "medium",
        /// Wide flowing sides behind the head, no cap.
        Long => "long",
        /// Cap plus a single bunch tied on the right.
        Ponytail => "ponytail",
        /// Cap plus two side bunches with ties.
        Twintails => "twintails",
    }
}

closed_enum! {
    /// Eye shape.
    EyeStyle, "eye style" {
        /// Tall oval sclera, round iris.
        Round => "round",
        /// Tilted oval sclera.
        Almond => "almond",
        /// Flat sclera with elliptical iris, no highlight.
        Narrow => "narrow",
        /// Large oval sclera and iris.
        Wide => "wide",
    }
}

closed_enum! {
    /// Mouth expression.
    MouthStyle, "mouth style" {
        /// Downward-bulging arc.
        Smile => "smile",
        /// Flat segment.
        Neutral => "neutral",
        /// Curve rising to the right.
        Smirk => "smirk",
    }
}

closed_enum! {
    /// Overlay drawn last, above every facial feature.
    Accessory, "accessory" {
        /// No overlay.
        None => "none",
        /// Two lenses, a bridge and temple arms.
        Glasses => "glasses",
        /// Patch over the left eye with a strap.
        Eyepatch => "eyepatch",
        /// Face mask over mouth and cheeks.
        Mask => "mask",
        /// Headband with ear cups.
        Headphones => "headphones",
    }
}

/// Clamp a caller-supplied blush value into `[0, 100]`.
///
/// The renderer trusts [`AvatarOptions::blush_intensity`]; callers run their inputs through this
/// first.
pub fn clamp_blush(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_BLUSH)) as u8
}

/// Immutable set of choices driving one avatar render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarOptions {
    /// Hair silhouette.
    #[serde(alias = "hairStyle")]
    pub hair_style: HairStyle,
    /// Hair fill color.
    #[serde(alias = "hairColor")]
    pub hair_color: Rgb8,
    /// Eye shape.
    #[serde(alias = "eyeStyle")]
    pub eye_style: EyeStyle,
    /// Iris color.
    #[serde(alias = "eyeColor")]
    pub eye_color: Rgb8,
    /// Mouth expression.
    #[serde(alias = "mouthStyle")]
    pub mouth_style: MouthStyle,
    /// Head fill color.
    #[serde(alias = "skinTone")]
    pub skin_tone: Rgb8,
    /// Overlay accessory.
    pub accessory: Accessory,
    /// Blush opacity in percent, `[0, 100]`.
    #[serde(alias = "blushIntensity", deserialize_with = "deserialize_blush")]
    pub blush_intensity: u8,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            hair_style: HairStyle::Medium,
            hair_color: Rgb8::new(0x4B, 0x36, 0x21),
            eye_style: EyeStyle::Round,
            eye_color: Rgb8::new(0, 0, 0),
            mouth_style: MouthStyle::Smile,
            skin_tone: Rgb8::new(0xFF, 0xDB, 0xAC),
            accessory: Accessory::None,
            blush_intensity: 0,
        }
    }
}

impl AvatarOptions {
    /// Parse options from a JSON reader. Missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ToonResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ToonError::validation(format!("parse avatar options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ToonResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ToonError::validation(format!("open avatar options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> ToonResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ToonError::serde(e.to_string()))
    }

    /// Same options with the blush clamped from an arbitrary caller value.
    pub fn with_blush(self, value: i64) -> Self {
        Self {
            blush_intensity: clamp_blush(value),
            ..self
        }
    }
}

fn deserialize_blush<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    if !v.is_finite() {
        return Err(serde::de::Error::custom("blush_intensity must be finite"));
    }
    Ok(clamp_blush(v.round() as i64))
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/options.rs"]
mod tests;
