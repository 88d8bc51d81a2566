//! Tests for scalar formatting helpers
//!
//! Truncation is checked with proptest since it must hold for any text.

use proptest::prelude::*;
use trello::output::{ELLIPSIS, NONE, format_bool, format_date, format_labels, format_time, truncate};

proptest! {
    /// Truncated text never exceeds the limit
    #[test]
    fn truncate_respects_limit(s in "\\PC{0,80}", max in 0usize..40) {
        prop_assert!(truncate(&s, max).chars().count() <= max);
    }

    /// Text within the limit is returned unchanged
    #[test]
    fn short_text_is_untouched(s in "\\PC{0,20}") {
        let max = s.chars().count();
        prop_assert_eq!(truncate(&s, max), s.clone());
        prop_assert_eq!(truncate(&s, max + 5), s);
    }

    /// Cut text keeps a prefix of the input and ends with the marker
    #[test]
    fn cut_text_is_prefix_plus_ellipsis(s in "[a-zé日]{5,40}", max in 1usize..5) {
        let cut = truncate(&s, max);
        prop_assert!(cut.ends_with(ELLIPSIS));
        prop_assert_eq!(cut.chars().count(), max);
        let prefix: String = cut.chars().take(max - 1).collect();
        prop_assert!(s.starts_with(&prefix));
    }
}

#[test]
fn time_from_api_millis_form() {
    assert_eq!(format_time(Some("2024-03-05T14:07:09.123Z")), "2024-03-05 14:07");
}

#[test]
fn time_from_rfc3339_with_offset_is_shown_in_utc() {
    assert_eq!(format_time(Some("2024-03-05T14:07:09+02:00")), "2024-03-05 12:07");
}

#[test]
fn missing_time_shows_placeholder() {
    assert_eq!(format_time(None), NONE);
    assert_eq!(format_time(Some("")), NONE);
}

#[test]
fn unparseable_time_is_shown_truncated() {
    assert_eq!(format_time(Some("tomorrow")), "tomorrow");
    assert_eq!(format_time(Some("sometime in the next fortnight")), "sometime in the…");
}

#[test]
fn date_keeps_the_day() {
    assert_eq!(format_date(Some("2024-12-31T23:59:00.000Z")), "2024-12-31");
    assert_eq!(format_date(None), NONE);
}

#[test]
fn bool_and_labels() {
    assert_eq!(format_bool(true), "yes");
    assert_eq!(format_bool(false), "no");
    assert_eq!(format_labels::<&str>(&[]), NONE);
    assert_eq!(format_labels(&["bug", "urgent"]), "bug, urgent");
}
