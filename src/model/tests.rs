use super::catalog::{self, PlayRequest};
use super::track::{LyricLine, active_lyric_index, parse_duration};

fn cues(times: &[u32]) -> Vec<LyricLine> {
    times
        .iter()
        .map(|t| LyricLine::new(*t, format!("line at {t}")))
        .collect()
}

#[test]
fn duration_parses_padded_form() {
    assert_eq!(parse_duration("04:03"), 243);
}

#[test]
fn duration_parses_without_leading_zeros() {
    assert_eq!(parse_duration("4:3"), 243);
}

#[test]
fn duration_of_junk_is_zero_not_a_panic() {
    assert_eq!(parse_duration(""), 0);
    assert_eq!(parse_duration("abc"), 0);
    assert_eq!(parse_duration("4"), 0);
    assert_eq!(parse_duration("4:xx"), 0);
    assert_eq!(parse_duration("1:2:3"), 0);
    assert_eq!(parse_duration("-1:30"), 0);
}

#[test]
fn lyric_cursor_picks_greatest_cue_at_or_before_position() {
    let lyrics = cues(&[0, 2, 4, 8]);
    assert_eq!(active_lyric_index(&lyrics, 5), 2);
    assert_eq!(active_lyric_index(&lyrics, 8), 3);
    assert_eq!(active_lyric_index(&lyrics, 100), 3);
}

#[test]
fn lyric_cursor_defaults_to_first_line() {
    let lyrics = cues(&[0, 2, 4, 8]);
    assert_eq!(active_lyric_index(&lyrics, 0), 0);

    // Before the first cue there is nothing to match; the first line is
    // still reported as active.
    let late_start = cues(&[3, 6]);
    assert_eq!(active_lyric_index(&late_start, 1), 0);
    assert_eq!(active_lyric_index(&[], 10), 0);
}

#[test]
fn resolve_known_id_returns_catalog_track() {
    let track = catalog::resolve(&PlayRequest::Id("16".into())).expect("catalog track");
    assert_eq!(track.title, "小半");
    assert_eq!(track.total_secs(), 4 * 60 + 57);
    assert!(!track.lyrics.is_empty());
}

#[test]
fn resolve_unknown_id_is_none() {
    assert!(catalog::resolve(&PlayRequest::Id("nope".into())).is_none());
}

#[test]
fn resolve_external_synthesizes_consistent_track() {
    let track = catalog::resolve(&PlayRequest::External {
        title: "Night Drive".into(),
        artist: "Neon City".into(),
    })
    .expect("external track");

    assert_eq!(track.artist, "Neon City");
    // A fabricated duration with no cue sheet: the two can never disagree.
    assert!(track.total_secs() > 0);
    assert!(track.lyrics.is_empty());
}

#[test]
fn default_track_duration_matches_fixture() {
    assert_eq!(catalog::default_track().total_secs(), 243);
}
