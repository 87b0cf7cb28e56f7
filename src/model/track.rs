/// One timed lyric cue. Offsets are authored in whole seconds and are
/// non-decreasing within a track's cue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    pub time_secs: u32,
    pub text: String,
}

impl LyricLine {
    pub fn new(time_secs: u32, text: impl Into<String>) -> Self {
        Self {
            time_secs,
            text: text.into(),
        }
    }
}

/// Metadata of a playable item. Duration is authored as a `MM:SS` display
/// string; [`parse_duration`] derives total seconds from it once per track
/// load. There is no audio asset behind a track, only metadata and cues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub cover: String,
    pub duration: String,
    pub is_vip: bool,
    pub is_hi_res: bool,
    pub has_video: bool,
    pub lyrics: Vec<LyricLine>,
}

impl Track {
    /// Total length in seconds, derived from the authored duration string.
    pub fn total_secs(&self) -> u32 {
        parse_duration(&self.duration)
    }
}

/// Parses a `MM:SS` duration string (leading zeros optional) into total
/// seconds. Unparseable input yields 0 and a warning; the playback clock
/// then ends the track on its next tick.
pub fn parse_duration(raw: &str) -> u32 {
    let mut parts = raw.splitn(2, ':');
    let minutes = parts.next().and_then(|m| m.trim().parse::<u32>().ok());
    let seconds = parts.next().and_then(|s| s.trim().parse::<u32>().ok());

    match (minutes, seconds) {
        (Some(minutes), Some(seconds)) => minutes * 60 + seconds,
        _ => {
            tracing::warn!(raw, "unparseable track duration, treating as zero");
            0
        }
    }
}

/// Index of the lyric line active at `position_secs`: the greatest index
/// whose cue time is at or before the position, or 0 before the first cue.
/// Pure query over (cues, position); callers recompute it on every position
/// change rather than caching it.
pub fn active_lyric_index(lyrics: &[LyricLine], position_secs: u32) -> usize {
    lyrics
        .iter()
        .rposition(|line| line.time_secs <= position_secs)
        .unwrap_or(0)
}
