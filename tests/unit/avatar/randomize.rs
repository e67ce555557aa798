use super::*;
use std::collections::HashSet;

#[test]
fn thousand_draws_stay_in_the_closed_sets() {
    let mut rng = Rng64::new(2024);
    for _ in 0..1000 {
        let o = randomize(&mut rng);
        assert!(HairStyle::ALL.contains(&o.hair_style));
        assert!(HAIR_COLORS.contains(&o.hair_color));
        assert!(EyeStyle::ALL.contains(&o.eye_style));
        assert!(EYE_COLORS.contains(&o.eye_color));
        assert!(MouthStyle::ALL.contains(&o.mouth_style));
        assert!(SKIN_TONES.contains(&o.skin_tone));
        assert!(Accessory::ALL.contains(&o.accessory));
        assert!(o.blush_intensity <= MAX_BLUSH);
    }
}

#[test]
fn draws_cover_every_hair_style_and_accessory() {
    let mut rng = Rng64::new(7);
    let mut hair = HashSet::new();
    let mut acc = HashSet::new();
    for _ in 0..500 {
        let o = randomize(&mut rng);
        hair.insert(o.hair_style);
        acc.insert(o.accessory);
    }
    assert_eq!(hair.len(), HairStyle::ALL.len());
    assert_eq!(acc.len(), Accessory::ALL.len());
}

#[test]
fn same_seed_same_avatar() {
    let a = randomize(&mut Rng64::new(55));
    let b = randomize(&mut Rng64::new(55));
    assert_eq!(a, b);
}
