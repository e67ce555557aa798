use crate::avatar::options::{
    Accessory, AvatarOptions, EyeStyle, HairStyle, MAX_BLUSH, MouthStyle,
};
use crate::foundation::color::Rgb8;
use crate::foundation::math::Rng64;

/// Hair swatches offered by the editor.
pub const HAIR_COLORS: &[Rgb8] = &[
    Rgb8::new(0x00, 0x00, 0x00),
    Rgb8::new(0x4B, 0x36, 0x21),
    Rgb8::new(0xD4, 0xB4, 0x99),
    Rgb8::new(0xFB, 0xCE, 0xB1),
    Rgb8::new(0xFF, 0xD7, 0x00),
    Rgb8::new(0x8A, 0x2B, 0xE2),
    Rgb8::new(0xFF, 0x69, 0xB4),
    Rgb8::new(0x00, 0xBF, 0xFF),
];

/// Iris swatches offered by the editor.
pub const EYE_COLORS: &[Rgb8] = &[
    Rgb8::new(0x00, 0x00, 0x00),
    Rgb8::new(0x65, 0x43, 0x21),
    Rgb8::new(0x00, 0x00, 0xFF),
    Rgb8::new(0x00, 0xFF, 0x00),
    Rgb8::new(0x80, 0x00, 0x80),
    Rgb8::new(0xFF, 0x00, 0x00),
];

/// Skin swatches offered by the editor.
pub const SKIN_TONES: &[Rgb8] = &[
    Rgb8::new(0xFF, 0xDB, 0xAC),
    Rgb8::new(0xF1, 0xC2, 0x7D),
    Rgb8::new(0xE0, 0xAC, 0x69),
    Rgb8::new(0xC6, 0x86, 0x42),
    Rgb8::new(0x8D, 0x55, 0x24),
];

/// Draw every field uniformly from its closed set.
///
/// Blush is drawn from `0..100`, so a fully saturated blush only comes from explicit edits.
pub fn randomize(rng: &mut Rng64) -> AvatarOptions {
    let fallback = AvatarOptions::default();
    AvatarOptions {
        hair_style: pick_or(rng, HairStyle::ALL, fallback.hair_style),
        hair_color: pick_or(rng, HAIR_COLORS, fallback.hair_color),
        eye_style: pick_or(rng, EyeStyle::ALL, fallback.eye_style),
        eye_color: pick_or(rng, EYE_COLORS, fallback.eye_color),
        mouth_style: pick_or(rng, MouthStyle::ALL, fallback.mouth_style),
        skin_tone: pick_or(rng, SKIN_TONES, fallback.skin_tone),
        accessory: pick_or(rng, Accessory::ALL, fallback.accessory),
        blush_intensity: rng.next_below(usize::from(MAX_BLUSH)) as u8,
    }
}

fn pick_or<T: Copy>(rng: &mut Rng64, items: &[T], fallback: T) -> T {
    rng.pick(items).copied().unwrap_or(fallback)
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/randomize.rs"]
mod tests;
