use crate::{ai::Recommendation, model::track::Track};

/// App-level events carried over the flume channel and drained once per
/// loop iteration. Background tasks (the playback ticker, AI fetches) only
/// ever communicate through these; they never mutate state directly.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    /// One second of playback elapsed; the session applies it on the loop.
    ClockTick,
    TrackStarted(Track),
    TrackEnded,
    RecommendationsFetched(Vec<Recommendation>),
    AiFailed(String),
}
