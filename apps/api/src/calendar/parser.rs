//! Splits the model's free-text calendar into day sections on `**Day N: Title**` markers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::calendar::models::DayPost;

pub const DAYS_IN_CALENDAR: usize = 7;

static DAY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*Day\s+(\d+)\s*:([^*]*)\*\*").expect("day marker regex is valid")
});

/// Returns at most seven days ordered by day number.
///
/// Each body runs from the end of its marker to the start of the next one.
/// A repeated day number replaces the earlier section. Text without markers yields nothing.
pub fn split_days(content: &str) -> Vec<DayPost> {
    let markers: Vec<_> = DAY_MARKER.captures_iter(content).collect();
    let mut days: BTreeMap<u32, DayPost> = BTreeMap::new();

    for (i, caps) in markers.iter().enumerate() {
        let marker_end = caps.get(0).map_or(0, |m| m.end());
        let Some(day) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };
        let title = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();

        let end = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());
        let body = content[marker_end..end].trim().to_string();

        days.insert(day, DayPost { day, title, body });
    }

    days.into_values().take(DAYS_IN_CALENDAR).collect()
}
