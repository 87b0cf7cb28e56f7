use crate::model::track::{Track, parse_duration};

/// Outcome of one clock tick, reported so the session can tear the ticker
/// down when the track runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The clock was paused; nothing changed. A tick that was already
    /// queued when playback stopped lands here.
    Idle,
    /// Position advanced by one second.
    Advanced,
    /// The track ran out: position rewound to 0 and playback stopped, so
    /// the track can be replayed without an explicit seek.
    Ended,
}

/// Read-only copy of the playback state, handed to rendering surfaces on
/// every draw. Surfaces issue intents back through [`PlayerCommand`]
/// instead of mutating anything here.
///
/// [`PlayerCommand`]: crate::player::command::PlayerCommand
#[derive(Debug, Clone)]
pub struct PlaybackSnapshot {
    pub track: Track,
    pub position_secs: u32,
    pub total_secs: u32,
    pub is_playing: bool,
}

impl PlaybackSnapshot {
    /// Played fraction in `0.0..=1.0`, for progress gauges.
    pub fn progress_ratio(&self) -> f64 {
        if self.total_secs == 0 {
            0.0
        } else {
            f64::from(self.position_secs) / f64::from(self.total_secs)
        }
    }
}

/// The playback position state machine. Owns `position` and `is_playing`
/// exclusively; the surrounding session drives it from a single event loop,
/// so there is no locking here.
///
/// Invariant: `position <= total_secs` after every operation.
#[derive(Debug)]
pub struct PlaybackClock {
    track: Track,
    total_secs: u32,
    position: u32,
    is_playing: bool,
}

impl PlaybackClock {
    /// Starts stopped at position 0 on the given track.
    pub fn new(track: Track) -> Self {
        let total_secs = parse_duration(&track.duration);
        Self {
            track,
            total_secs,
            position: 0,
            is_playing: false,
        }
    }

    /// Replaces the current track and resets to stopped-at-zero. Loading
    /// never implies playback. The duration string is parsed here, once,
    /// not on every tick.
    pub fn load_track(&mut self, track: Track) {
        self.total_secs = parse_duration(&track.duration);
        self.track = track;
        self.position = 0;
        self.is_playing = false;
    }

    /// Advances the position by one second while playing. Reaching the end
    /// of the track stops playback and rewinds to 0 in the same step.
    pub fn tick(&mut self) -> Tick {
        if !self.is_playing {
            return Tick::Idle;
        }

        let next = self.position + 1;
        if next >= self.total_secs {
            self.position = 0;
            self.is_playing = false;
            Tick::Ended
        } else {
            self.position = next;
            Tick::Advanced
        }
    }

    /// Moves the position immediately, silently clamped to the track
    /// length. Does not touch `is_playing`.
    pub fn seek(&mut self, target_secs: u32) {
        self.position = target_secs.min(self.total_secs);
    }

    /// Flips play/pause and returns the new playing flag. Toggling into
    /// playback with the position already at the end is not special-cased;
    /// the next tick performs the ordinary end-of-track reset.
    pub fn toggle_play(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn position_secs(&self) -> u32 {
        self.position
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            track: self.track.clone(),
            position_secs: self.position,
            total_secs: self.total_secs,
            is_playing: self.is_playing,
        }
    }
}
