// Recurrence module
// One parsed weekly-recurring schedule clause

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One weekly-recurring clause of a venue schedule: a celebration type,
/// a weekday, and a start/end time range.
///
/// Rules are derived deterministically from the venue's raw schedule string;
/// a venue with several clauses yields one rule per clause. Both times are
/// valid 24h times by construction (the parser drops malformed clauses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub celebration_type: String,
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl RecurrenceRule {
    pub fn new(
        celebration_type: impl Into<String>,
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            celebration_type: celebration_type.into(),
            weekday,
            start,
            end,
        }
    }

    /// Whether this rule fires on the given weekday.
    pub fn occurs_on(&self, weekday: Weekday) -> bool {
        self.weekday == weekday
    }

    /// Nominal duration of one occurrence. Clauses with an end at or before
    /// the start (tolerated by the parser) report a zero duration.
    pub fn duration(&self) -> chrono::Duration {
        (self.end - self.start).max(chrono::Duration::zero())
    }
}
