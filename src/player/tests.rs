use std::time::Duration;

use super::clock::{PlaybackClock, Tick};
use super::command::PlayerCommand;
use super::session::PlayerSession;
use crate::event::events::Event;
use crate::model::catalog::PlayRequest;
use crate::model::track::{LyricLine, Track};

fn short_track(duration: &str) -> Track {
    Track {
        id: "t1".into(),
        title: "Fixture".into(),
        artist: "Nobody".into(),
        album: "Fixtures".into(),
        cover: String::new(),
        duration: duration.into(),
        is_vip: false,
        is_hi_res: false,
        has_video: false,
        lyrics: vec![LyricLine::new(0, "first"), LyricLine::new(2, "second")],
    }
}

#[test]
fn tick_is_a_noop_while_paused() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    assert_eq!(clock.tick(), Tick::Idle);
    assert_eq!(clock.position_secs(), 0);
    assert!(!clock.is_playing());
}

#[test]
fn tick_advances_one_second_while_playing() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.toggle_play();
    assert_eq!(clock.tick(), Tick::Advanced);
    assert_eq!(clock.position_secs(), 1);
    assert!(clock.is_playing());
}

#[test]
fn end_of_track_stops_and_rewinds() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.toggle_play();
    clock.seek(4);

    assert_eq!(clock.tick(), Tick::Ended);
    assert_eq!(clock.position_secs(), 0);
    assert!(!clock.is_playing());
}

#[test]
fn toggling_at_track_end_is_not_special_cased() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.seek(5);
    clock.toggle_play();

    // The next tick performs the ordinary end-of-track reset.
    assert_eq!(clock.tick(), Tick::Ended);
    assert_eq!(clock.position_secs(), 0);
    assert!(!clock.is_playing());
}

#[test]
fn unparseable_duration_ends_on_first_tick() {
    let mut clock = PlaybackClock::new(short_track("not a duration"));
    assert_eq!(clock.total_secs(), 0);

    clock.toggle_play();
    assert_eq!(clock.tick(), Tick::Ended);
    assert!(!clock.is_playing());
}

#[test]
fn seek_clamps_to_track_length_and_keeps_play_state() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.seek(500);
    assert_eq!(clock.position_secs(), 5);
    assert!(!clock.is_playing());

    clock.toggle_play();
    clock.seek(3);
    assert_eq!(clock.position_secs(), 3);
    assert!(clock.is_playing());
}

#[test]
fn seeking_to_current_position_changes_nothing() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.toggle_play();
    clock.seek(2);

    let before = clock.snapshot();
    clock.seek(2);
    let after = clock.snapshot();

    assert_eq!(before.position_secs, after.position_secs);
    assert_eq!(before.is_playing, after.is_playing);
}

#[test]
fn load_track_resets_regardless_of_prior_state() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    clock.toggle_play();
    clock.seek(4);

    clock.load_track(short_track("04:03"));
    assert_eq!(clock.position_secs(), 0);
    assert!(!clock.is_playing());
    assert_eq!(clock.total_secs(), 243);
}

#[test]
fn position_stays_in_bounds_under_arbitrary_sequences() {
    let mut clock = PlaybackClock::new(short_track("00:05"));
    let check = |clock: &PlaybackClock| {
        assert!(clock.position_secs() <= clock.total_secs());
    };

    clock.toggle_play();
    check(&clock);
    for _ in 0..20 {
        clock.tick();
        check(&clock);
    }
    clock.seek(u32::MAX);
    check(&clock);
    clock.toggle_play();
    check(&clock);
    clock.load_track(short_track("xx"));
    check(&clock);
    clock.seek(10);
    check(&clock);
}

#[tokio::test]
async fn play_command_resolves_catalog_track_and_starts_ticker() {
    let (tx, rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);

    session.handle_command(PlayerCommand::Play(PlayRequest::Id("14".into())));

    let snapshot = session.snapshot();
    assert_eq!(snapshot.track.id, "14");
    assert_eq!(snapshot.position_secs, 0);
    assert!(snapshot.is_playing);
    assert!(session.is_ticking());

    match rx.try_recv() {
        Ok(Event::TrackStarted(track)) => assert_eq!(track.id, "14"),
        other => panic!("expected TrackStarted, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_play_request_is_dropped() {
    let (tx, _rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);
    let before = session.snapshot();

    session.handle_command(PlayerCommand::Play(PlayRequest::Id("missing".into())));

    let after = session.snapshot();
    assert_eq!(after.track.id, before.track.id);
    assert!(!after.is_playing);
    assert!(!session.is_ticking());
}

#[tokio::test]
async fn pause_and_load_tear_the_ticker_down() {
    let (tx, _rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);

    session.handle_command(PlayerCommand::TogglePlay);
    assert!(session.is_ticking());

    session.handle_command(PlayerCommand::TogglePlay);
    assert!(!session.is_ticking());

    session.handle_command(PlayerCommand::TogglePlay);
    session.handle_command(PlayerCommand::LoadTrack(short_track("00:05")));
    assert!(!session.is_ticking());
    assert!(!session.snapshot().is_playing);
}

#[tokio::test(start_paused = true)]
async fn repeated_toggles_leave_exactly_one_ticker() {
    let (tx, rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);

    session.handle_command(PlayerCommand::TogglePlay);
    session.handle_command(PlayerCommand::TogglePlay);
    session.handle_command(PlayerCommand::TogglePlay);

    // Three and a half simulated seconds: a leaked duplicate interval
    // would double the tick count.
    tokio::time::sleep(Duration::from_millis(3500)).await;

    let ticks = rx
        .try_iter()
        .filter(|event| matches!(event, Event::ClockTick))
        .count();
    assert_eq!(ticks, 3);
}

#[tokio::test]
async fn end_of_track_emits_event_and_stops_ticking() {
    let (tx, rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);

    session.handle_command(PlayerCommand::LoadTrack(short_track("00:05")));
    session.handle_command(PlayerCommand::TogglePlay);
    session.handle_command(PlayerCommand::Seek(4));

    session.handle_tick();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.position_secs, 0);
    assert!(!snapshot.is_playing);
    assert!(!session.is_ticking());
    assert!(rx.try_iter().any(|event| matches!(event, Event::TrackEnded)));
}

#[tokio::test]
async fn relative_seek_clamps_at_both_ends() {
    let (tx, _rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);
    session.handle_command(PlayerCommand::LoadTrack(short_track("00:05")));

    session.handle_command(PlayerCommand::SeekBy(-30));
    assert_eq!(session.snapshot().position_secs, 0);

    session.handle_command(PlayerCommand::SeekBy(30));
    assert_eq!(session.snapshot().position_secs, 5);
}

#[tokio::test]
async fn fractional_seek_floors_to_whole_seconds() {
    let (tx, _rx) = flume::unbounded();
    let mut session = PlayerSession::new(tx);

    // Default track is 04:03 = 243 seconds; half of it floors to 121.
    session.handle_command(PlayerCommand::SeekFraction(0.5));
    assert_eq!(session.snapshot().position_secs, 121);

    session.handle_command(PlayerCommand::SeekFraction(2.0));
    assert_eq!(session.snapshot().position_secs, 243);

    session.handle_command(PlayerCommand::SeekFraction(-1.0));
    assert_eq!(session.snapshot().position_secs, 0);
}
