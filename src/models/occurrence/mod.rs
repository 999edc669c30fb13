// Occurrence module
// One concrete future instance of a recurrence rule, dated to a calendar day

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::recurrence::RecurrenceRule;
use super::venue::{GeoPoint, Venue};

/// One concrete upcoming instance of a venue's recurrence rule.
///
/// Occurrences are ephemeral: they are rebuilt from scratch on every query
/// and discarded once the response is handed to the presentation layer.
/// `distance_km` is filled in only when the caller supplied a reference
/// point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub venue_id: String,
    pub venue_name: String,
    pub venue_city: String,
    pub denomination: String,
    pub celebration_type: String,
    pub occurs_at: NaiveDateTime,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub position: GeoPoint,
    pub distance_km: Option<f64>,
}

impl Occurrence {
    /// Materialize a rule on a specific calendar date for a venue.
    pub fn from_rule(venue: &Venue, rule: &RecurrenceRule, date: NaiveDate) -> Self {
        Self {
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            venue_city: venue.city.clone(),
            denomination: venue.denomination.clone(),
            celebration_type: rule.celebration_type.clone(),
            occurs_at: date.and_time(rule.start),
            start: rule.start,
            end: rule.end,
            position: venue.position,
            distance_km: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.occurs_at.date()
    }
}
