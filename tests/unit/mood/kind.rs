use super::*;

#[test]
fn expressions_collapse_into_five_moods() {
    let cases = [
        ("happy", Mood::Happy),
        ("sad", Mood::Sad),
        ("fearful", Mood::Sad),
        ("angry", Mood::Angry),
        ("disgusted", Mood::Angry),
        ("surprised", Mood::Surprised),
        ("neutral", Mood::Neutral),
        ("confused", Mood::Neutral),
        ("", Mood::Neutral),
        (" Happy ", Mood::Happy),
    ];
    for (expr, want) in cases {
        assert_eq!(Mood::from_expression(expr), want, "{expr:?}");
    }
}

#[test]
fn dominant_mood_picks_the_strict_maximum() {
    let scores = [
        ("neutral", 0.1),
        ("fearful", 0.7),
        ("happy", 0.2),
        ("angry", 0.7),
    ];
    assert_eq!(dominant_mood(scores), Mood::Sad);
}

#[test]
fn dominant_mood_of_nothing_is_neutral() {
    assert_eq!(dominant_mood(Vec::<(String, f64)>::new()), Mood::Neutral);
    assert_eq!(dominant_mood([("happy", 0.0)]), Mood::Neutral);
    assert_eq!(dominant_mood([("happy", -1.0)]), Mood::Neutral);
}

#[test]
fn dominant_mood_accepts_owned_labels() {
    let scores = vec![("surprised".to_owned(), 0.9), ("sad".to_owned(), 0.05)];
    assert_eq!(dominant_mood(scores), Mood::Surprised);
}

#[test]
fn unknown_names_fall_back_to_neutral() {
    assert_eq!(Mood::from_name("ecstatic"), Mood::Neutral);
    assert_eq!(Mood::from_name("ANGRY"), Mood::Angry);
    let err = "ecstatic".parse::<Mood>().unwrap_err();
    assert!(err.to_string().contains("unknown mood"));
}

#[test]
fn every_mood_has_a_distinct_genre_key() {
    let keys: std::collections::HashSet<_> = Mood::ALL.iter().map(|m| m.genre_key()).collect();
    assert_eq!(keys.len(), Mood::ALL.len());
    assert_eq!(Mood::Neutral.genre_key(), "ambient,chill");
}

#[test]
fn names_round_trip_through_display() {
    for m in Mood::ALL {
        assert_eq!(m.to_string().parse::<Mood>().unwrap(), *m);
    }
    assert_eq!(serde_json::to_string(&Mood::Surprised).unwrap(), "\"surprised\"");
}
