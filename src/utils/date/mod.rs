// Date utility functions
// Shared day-boundary helpers and the output-boundary time humanizer

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::services::schedule::ScheduleLocale;

pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

pub fn is_next_day(candidate: NaiveDateTime, reference: NaiveDateTime) -> bool {
    candidate.date() == reference.date() + Duration::days(1)
}

/// Short human label for how far away an occurrence is, in the locale's
/// weekday vocabulary: "Dans 12min", "Aujourd'hui 15:00", "Demain 10:30",
/// "Samedi 18:00". Anything already past reads "Maintenant" — the
/// projector normally filters those out before they reach display.
pub fn humanize_relative_time(
    occurs_at: NaiveDateTime,
    now: NaiveDateTime,
    locale: &ScheduleLocale,
) -> String {
    let minutes_away = (occurs_at - now).num_minutes();
    let clock = occurs_at.format("%H:%M");

    if minutes_away <= 0 {
        "Maintenant".to_string()
    } else if minutes_away < 60 {
        format!("Dans {minutes_away}min")
    } else if is_same_day(occurs_at, now) {
        format!("Aujourd'hui {clock}")
    } else if is_next_day(occurs_at, now) {
        format!("Demain {clock}")
    } else {
        format!("{} {clock}", locale.weekday_name(occurs_at.weekday()))
    }
}
