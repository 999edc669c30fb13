// Aggregation and ranking pipeline
// Public entry point: project, filter, rank, and truncate upcoming occurrences

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::error::AgendaError;
use crate::models::occurrence::Occurrence;
use crate::models::venue::{GeoPoint, Venue};
use crate::services::filter::{restrict_to_date_range, DateSelector};
use crate::services::geo::{with_distance, within_radius};
use crate::services::projection::project;
use crate::services::schedule::ScheduleLocale;

/// Distances within the same 0.5 km band rank as equal, so float noise
/// between near-identical venues cannot jitter the ordering.
const DISTANCE_BAND_KM: f64 = 0.5;

/// Query options for [`AgendaService::get_upcoming`].
///
/// Every field is optional except the horizon and result limit, which
/// default to one week and five results — the defaults the directory's
/// "upcoming celebrations" panel uses.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub type_filter: Option<Vec<String>>,
    pub date_selector: Option<DateSelector>,
    pub reference_point: Option<GeoPoint>,
    pub radius_km: Option<f64>,
    pub horizon_days: Option<i64>,
    pub limit: Option<usize>,
}

impl QueryOptions {
    pub const DEFAULT_HORIZON_DAYS: i64 = 7;
    pub const DEFAULT_LIMIT: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only occurrences whose celebration type is one of `types`.
    pub fn type_filter(mut self, types: Vec<String>) -> Self {
        self.type_filter = Some(types);
        self
    }

    /// Restrict to a date range.
    pub fn date_selector(mut self, selector: DateSelector) -> Self {
        self.date_selector = Some(selector);
        self
    }

    /// Rank by distance from this point.
    pub fn reference_point(mut self, point: GeoPoint) -> Self {
        self.reference_point = Some(point);
        self
    }

    /// Drop occurrences farther than this many kilometres from the
    /// reference point. Has no effect without a reference point.
    pub fn radius_km(mut self, radius: f64) -> Self {
        self.radius_km = Some(radius);
        self
    }

    /// Project this many days ahead instead of the default week.
    pub fn horizon_days(mut self, days: i64) -> Self {
        self.horizon_days = Some(days);
        self
    }

    /// Return at most this many occurrences instead of the default five.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The engine's public face: holds the schedule vocabulary and runs the
/// full project → filter → rank → truncate pipeline.
pub struct AgendaService {
    locale: ScheduleLocale,
}

impl AgendaService {
    /// Service with the default (French) vocabulary.
    pub fn new() -> Self {
        Self::with_locale(ScheduleLocale::default())
    }

    pub fn with_locale(locale: ScheduleLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &ScheduleLocale {
        &self.locale
    }

    /// Upcoming occurrences across all venues, filtered and ranked.
    ///
    /// Steps, in order: project over the horizon, apply the type filter,
    /// apply the date selector, annotate distances and apply the radius
    /// filter when a reference point is given, sort, truncate.
    ///
    /// Sort order: with a reference point, ascending distance band
    /// (ties within 0.5 km break on time), then `occurs_at`, then venue
    /// name; without one, `occurs_at` then venue name.
    ///
    /// Malformed venue data never fails the query — at worst a venue
    /// contributes nothing. The only error is a negative horizon.
    pub fn get_upcoming(
        &self,
        venues: &[Venue],
        now: NaiveDateTime,
        options: &QueryOptions,
    ) -> Result<Vec<Occurrence>, AgendaError> {
        let horizon = options
            .horizon_days
            .unwrap_or(QueryOptions::DEFAULT_HORIZON_DAYS);
        let limit = options.limit.unwrap_or(QueryOptions::DEFAULT_LIMIT);

        let mut occurrences = project(venues, now, horizon, &self.locale)?;

        if let Some(ref types) = options.type_filter {
            occurrences.retain(|occ| types.iter().any(|t| t == &occ.celebration_type));
        }

        if let Some(selector) = options.date_selector {
            occurrences = restrict_to_date_range(occurrences, selector, now.date());
        }

        if let Some(reference) = options.reference_point {
            occurrences = with_distance(occurrences, reference);
            if let Some(radius) = options.radius_km {
                occurrences = within_radius(occurrences, reference, radius);
            }
            occurrences.sort_by(compare_by_distance_band);
        } else {
            occurrences.sort_by(compare_chronological);
        }

        occurrences.truncate(limit);

        log::debug!(
            "get_upcoming: {} venue(s), horizon {} day(s) -> {} occurrence(s)",
            venues.len(),
            horizon,
            occurrences.len()
        );

        Ok(occurrences)
    }
}

impl Default for AgendaService {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_chronological(a: &Occurrence, b: &Occurrence) -> Ordering {
    a.occurs_at
        .cmp(&b.occurs_at)
        .then_with(|| a.venue_name.cmp(&b.venue_name))
}

fn compare_by_distance_band(a: &Occurrence, b: &Occurrence) -> Ordering {
    distance_band(a)
        .cmp(&distance_band(b))
        .then_with(|| compare_chronological(a, b))
}

fn distance_band(occ: &Occurrence) -> i64 {
    match occ.distance_km {
        Some(km) => (km / DISTANCE_BAND_KM).floor() as i64,
        // Unannotated occurrences sink to the end.
        None => i64::MAX,
    }
}
