// Projection service
// Expands recurrence rules into dated occurrences within a bounded horizon

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::error::AgendaError;
use crate::models::occurrence::Occurrence;
use crate::models::venue::Venue;
use crate::services::schedule::{parse_schedule, ScheduleLocale};

/// Project every venue's schedule into concrete occurrences within
/// `horizon_days` days of `now`.
///
/// For each venue, each parsed rule, and each day offset in
/// `0..horizon_days`, an occurrence is emitted when that calendar date's
/// weekday matches the rule's weekday. An offset-0 instance whose start
/// time is at or before `now`'s time-of-day is skipped: something that
/// has already started today is not upcoming. The same weekday one week
/// out is always included (horizon permitting).
///
/// `now` is an explicit argument — this function never reads the system
/// clock, so identical inputs always give identical output. Venues with
/// unparseable schedules contribute zero occurrences without affecting
/// their siblings.
///
/// # Errors
/// Returns [`AgendaError::NegativeHorizon`] for a negative
/// `horizon_days`; that is a caller bug, unlike malformed venue data.
pub fn project(
    venues: &[Venue],
    now: NaiveDateTime,
    horizon_days: i64,
    locale: &ScheduleLocale,
) -> Result<Vec<Occurrence>, AgendaError> {
    if horizon_days < 0 {
        return Err(AgendaError::NegativeHorizon(horizon_days));
    }

    let mut occurrences = Vec::new();

    for venue in venues {
        let rules = parse_schedule(&venue.raw_schedule, locale);

        for rule in &rules {
            for offset in 0..horizon_days {
                let date = now.date() + Duration::days(offset);
                if date.weekday() != rule.weekday {
                    continue;
                }
                // Already started today means not upcoming.
                if offset == 0 && rule.start <= now.time() {
                    continue;
                }
                occurrences.push(Occurrence::from_rule(venue, rule, date));
            }
        }
    }

    Ok(occurrences)
}
