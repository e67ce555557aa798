use super::*;
use crate::mood::kind::Mood;
use crate::music::catalog::TrackCatalog;

fn player() -> Player {
    Player::new(TrackCatalog::builtin().for_mood(Mood::Happy).to_vec())
}

fn short(id: &str, secs: u32) -> Track {
    Track {
        id: id.to_owned(),
        title: id.to_owned(),
        artist: "test".to_owned(),
        duration_secs: secs,
        cover_url: String::new(),
    }
}

#[test]
fn starts_paused_on_the_first_track() {
    let p = player();
    assert!(!p.is_playing());
    assert_eq!(p.current().map(|t| t.id.as_str()), Some("h1"));
    assert_eq!(p.progress_secs(), 0);
}

#[test]
fn ticks_only_count_while_playing() {
    let mut p = player();
    assert_eq!(p.tick(), Tick::Idle);
    assert!(p.toggle_play());
    assert_eq!(p.tick(), Tick::Advanced);
    assert_eq!(p.tick(), Tick::Advanced);
    assert_eq!(p.progress_secs(), 2);
    assert!(!p.toggle_play());
    assert_eq!(p.tick(), Tick::Idle);
    assert_eq!(p.progress_secs(), 2);
}

#[test]
fn next_and_previous_wrap_and_rewind() {
    let mut p = player();
    p.toggle_play();
    p.tick();
    p.previous();
    assert_eq!(p.index(), 2);
    assert_eq!(p.progress_secs(), 0);
    p.tick();
    p.next();
    assert_eq!(p.index(), 0);
    assert_eq!(p.progress_secs(), 0);
    p.next();
    assert_eq!(p.index(), 1);
}

#[test]
fn finished_track_hands_over_on_the_following_tick() {
    let mut p = Player::new(vec![short("a", 2), short("b", 5)]);
    p.toggle_play();
    assert_eq!(p.tick(), Tick::Advanced);
    assert_eq!(p.tick(), Tick::Advanced);
    assert_eq!(p.progress_secs(), 2);
    assert_eq!(p.progress_fraction(), 1.0);
    assert_eq!(p.tick(), Tick::NextTrack);
    assert_eq!(p.current().unwrap().id, "b");
    assert_eq!(p.progress_secs(), 0);
    assert!(p.is_playing());
}

#[test]
fn last_track_wraps_to_the_first() {
    let mut p = Player::new(vec![short("a", 1), short("b", 0)]);
    p.next();
    p.toggle_play();
    assert_eq!(p.tick(), Tick::NextTrack);
    assert_eq!(p.index(), 0);
}

#[test]
fn set_tracks_rewinds_but_keeps_playing() {
    let mut p = player();
    p.toggle_play();
    p.next();
    p.tick();
    p.set_tracks(TrackCatalog::builtin().for_mood(Mood::Sad).to_vec());
    assert_eq!(p.index(), 0);
    assert_eq!(p.progress_secs(), 0);
    assert!(p.is_playing());
    assert_eq!(p.current().unwrap().id, "s1");
}

#[test]
fn empty_player_is_inert() {
    let mut p = Player::default();
    p.toggle_play();
    p.next();
    p.previous();
    assert_eq!(p.tick(), Tick::Idle);
    assert!(p.current().is_none());
    assert_eq!(p.progress_fraction(), 0.0);
}

#[test]
fn progress_fraction_is_relative_to_duration() {
    let mut p = Player::new(vec![short("a", 4)]);
    p.toggle_play();
    p.tick();
    assert_eq!(p.progress_fraction(), 0.25);
}

#[test]
fn format_time_pads_seconds() {
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(7), "0:07");
    assert_eq!(format_time(187), "3:07");
    assert_eq!(format_time(600), "10:00");
}
