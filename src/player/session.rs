use std::time::Duration;

use flume::Sender;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, warn};

use crate::{
    event::events::Event,
    model::{catalog, track::Track},
    player::{
        clock::{PlaybackClock, PlaybackSnapshot, Tick},
        command::PlayerCommand,
    },
};

/// Owns the [`PlaybackClock`] and the one ticker registration that drives
/// it. The ticker task never touches the clock: it only pushes
/// [`Event::ClockTick`] into the app channel, so every mutation happens on
/// the app event loop and user input applied there is always observed by
/// the next tick.
///
/// Ticker lifecycle: started exactly on the paused-to-playing transition,
/// torn down on pause, on track replacement, and on drop. Re-starting
/// always aborts the previous handle first, so there is never more than one
/// live interval per session.
pub struct PlayerSession {
    clock: PlaybackClock,
    ticker: Option<JoinHandle<()>>,
    event_tx: Sender<Event>,
}

impl PlayerSession {
    pub fn new(event_tx: Sender<Event>) -> Self {
        Self {
            clock: PlaybackClock::new(catalog::default_track()),
            ticker: None,
            event_tx,
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.clock.snapshot()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Play(request) => match catalog::resolve(&request) {
                Some(track) => self.play(track),
                None => warn!(?request, "dropping play request for unknown track"),
            },
            PlayerCommand::LoadTrack(track) => self.load(track),
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::Seek(secs) => self.clock.seek(secs),
            PlayerCommand::SeekBy(delta) => self.seek_by(delta),
            PlayerCommand::SeekFraction(fraction) => self.seek_fraction(fraction),
        }
    }

    /// Applies one queued tick from the ticker task. A tick raced by a
    /// pause is a no-op by the clock's own guard.
    pub fn handle_tick(&mut self) {
        match self.clock.tick() {
            Tick::Ended => {
                self.stop_ticker();
                let _ = self.event_tx.send(Event::TrackEnded);
            }
            Tick::Advanced | Tick::Idle => {}
        }
    }

    fn play(&mut self, track: Track) {
        self.load(track);
        self.toggle_play();
        let _ = self
            .event_tx
            .send(Event::TrackStarted(self.clock.track().clone()));
    }

    fn load(&mut self, track: Track) {
        debug!(track = %track.title, "loading track");
        self.stop_ticker();
        self.clock.load_track(track);
    }

    fn toggle_play(&mut self) {
        if self.clock.toggle_play() {
            self.start_ticker();
        } else {
            self.stop_ticker();
        }
    }

    fn seek_by(&mut self, delta: i32) {
        let target = if delta.is_negative() {
            self.clock.position_secs().saturating_sub(delta.unsigned_abs())
        } else {
            self.clock.position_secs().saturating_add(delta.unsigned_abs())
        };
        self.clock.seek(target);
    }

    /// Progress-bar click path: the clicked fraction of the bar maps to
    /// `floor(fraction * total)` seconds.
    fn seek_fraction(&mut self, fraction: f64) {
        let target = (fraction.clamp(0.0, 1.0) * f64::from(self.clock.total_secs())) as u32;
        self.clock.seek(target);
    }

    fn start_ticker(&mut self) {
        self.stop_ticker();
        let event_tx = self.event_tx.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately;
            // swallow it so position advances one second after play, not
            // on it.
            interval.tick().await;
            loop {
                interval.tick().await;
                if event_tx.send_async(Event::ClockTick).await.is_err() {
                    break;
                }
            }
        }));
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
