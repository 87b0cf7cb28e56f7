use crate::model::{catalog::PlayRequest, track::Track};

/// Intents accepted from the rendering surfaces. Everything that can change
/// playback state funnels through here and is applied synchronously on the
/// app event loop.
#[derive(Debug, Clone)]
pub enum PlayerCommand {
    /// Resolve against the catalog and start playing from 0.
    Play(PlayRequest),
    /// Replace the current track without starting playback.
    LoadTrack(Track),
    TogglePlay,
    /// Absolute seek in seconds.
    Seek(u32),
    /// Relative seek from the keymap; clamped at both ends.
    SeekBy(i32),
    /// Proportional seek from a progress-bar click, in `0.0..=1.0`.
    SeekFraction(f64),
}
