use crate::foundation::core::Rgba8;
use crate::foundation::error::{ToonError, ToonResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 8-bit RGB color.
///
/// The renderer never interprets these values; they are handed to the surface verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque paint for this color.
    pub fn to_rgba(self) -> Rgba8 {
        Rgba8::opaque(self.r, self.g, self.b)
    }

    /// Parse `#RGB`, `#RRGGBB` (leading `#` optional) or the names `black`/`white`.
    pub fn parse(s: &str) -> ToonResult<Self> {
        parse_color(s).map_err(ToonError::validation)
    }
}

impl FromStr for Rgb8 {
    type Err = ToonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            RgbObj { r: u8, g: u8, b: u8 },
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => parse_color(&s).map_err(serde::de::Error::custom),
            Repr::RgbObj { r, g, b } => Ok(Self::new(r, g, b)),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

fn parse_color(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "black" => return Ok(Rgb8::new(0, 0, 0)),
        "white" => return Ok(Rgb8::new(255, 255, 255)),
        _ => {}
    }
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return Err(format!("invalid color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match hex.len() {
        3 => {
            let nib = |i: usize| hex_byte(&hex[i..i + 1]).map(|v| v * 17);
            Ok(Rgb8::new(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Ok(Rgb8::new(
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
        )),
        _ => Err(format!(
            "color must be #RGB, #RRGGBB, black or white (got \"{s}\")"
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
