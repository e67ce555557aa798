use crate::music::catalog::Track;

/// Transport state over a track list. Time only moves through [`Player::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    tracks: Vec<Track>,
    index: usize,
    progress_secs: u32,
    playing: bool,
}

/// What a [`Player::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Paused or nothing loaded.
    Idle,
    /// Progress moved one second.
    Advanced,
    /// The current track had finished; the next one started from zero.
    NextTrack,
}

impl Player {
    /// Paused player at the first of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }

    /// Replace the list and rewind to its first track. Play state is kept.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.index = 0;
        self.progress_secs = 0;
    }

    /// Loaded tracks.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track under the play head, if any.
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    /// Position of the current track in the list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Seconds played of the current track.
    pub fn progress_secs(&self) -> u32 {
        self.progress_secs
    }

    /// Whether ticks advance time.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip between playing and paused; returns the new state.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Skip forward, wrapping to the first track.
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.tracks.len();
        self.progress_secs = 0;
    }

    /// Skip back, wrapping to the last track.
    pub fn previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or(self.tracks.len() - 1);
        self.progress_secs = 0;
    }

    /// Advance one second of playback.
    ///
    /// A track that has reached its duration hands over to the next one on the following tick,
    /// so the final second is shown before the switch.
    pub fn tick(&mut self) -> Tick {
        let Some(duration) = self.current().map(|t| t.duration_secs) else {
            return Tick::Idle;
        };
        if !self.playing {
            return Tick::Idle;
        }
        if self.progress_secs >= duration {
            self.next();
            return Tick::NextTrack;
        }
        self.progress_secs += 1;
        Tick::Advanced
    }

    /// Played fraction of the current track in `[0, 1]`; zero without a track.
    pub fn progress_fraction(&self) -> f64 {
        match self.current() {
            Some(t) if t.duration_secs > 0 => {
                (f64::from(self.progress_secs) / f64::from(t.duration_secs)).min(1.0)
            }
            _ => 0.0,
        }
    }
}

/// Format seconds as `m:ss`.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
#[path = "../../tests/unit/music/player.rs"]
mod tests;
