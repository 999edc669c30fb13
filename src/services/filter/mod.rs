// Temporal filter service
// Restricts projected occurrences to a caller-selected date range

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::occurrence::Occurrence;

/// Date-range selector offered by the directory's filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelector {
    /// Only occurrences on the reference date itself.
    Today,
    /// Any Saturday or Sunday within the projected horizon. Deliberately
    /// loose: it does not narrow to "this specific weekend".
    Weekend,
    /// Any date through the Sunday that ends the reference date's week.
    Week,
    /// Only occurrences on the given date.
    Custom(NaiveDate),
}

impl DateSelector {
    /// Map loose UI filter state to a selector.
    ///
    /// Partial or nonsensical state (unknown kind, `custom` without a
    /// date) yields `None`, which the pipeline treats as "no date filter"
    /// rather than an error — the filter bar can be mid-edit.
    pub fn from_query(kind: &str, date: Option<NaiveDate>) -> Option<Self> {
        match kind {
            "today" => Some(Self::Today),
            "weekend" => Some(Self::Weekend),
            "week" => Some(Self::Week),
            "custom" => date.map(Self::Custom),
            _ => None,
        }
    }

    /// Whether an occurrence date passes this selector.
    pub fn matches(&self, date: NaiveDate, reference_date: NaiveDate) -> bool {
        match self {
            Self::Today => date == reference_date,
            Self::Weekend => matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            Self::Week => date <= end_of_week(reference_date),
            Self::Custom(selected) => date == *selected,
        }
    }
}

/// Keep only occurrences whose date passes the selector. Order is
/// preserved; this filter never reorders.
pub fn restrict_to_date_range(
    occurrences: Vec<Occurrence>,
    selector: DateSelector,
    reference_date: NaiveDate,
) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|occ| selector.matches(occ.date(), reference_date))
        .collect()
}

/// The Sunday ending `date`'s week (the date itself when already Sunday).
fn end_of_week(date: NaiveDate) -> NaiveDate {
    let days_until_sunday = 6 - date.weekday().num_days_from_monday() as i64;
    date + Duration::days(days_until_sunday)
}
