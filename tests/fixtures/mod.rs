// Test fixtures - reusable test data
// Pinned dates and sample venues shared across the integration suites

use agenda_cultuel::models::venue::{GeoPoint, Venue};
use chrono::{NaiveDate, NaiveDateTime};

/// Pinned dates for deterministic projection tests
pub mod dates {
    use super::*;

    /// Sunday June 8, 2025 at 09:00
    pub fn sunday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    /// Sunday June 8, 2025 at 11:00 — after the morning celebrations start
    pub fn sunday_late_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 8)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    }

    /// Wednesday June 11, 2025 at 08:00
    pub fn wednesday_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 11)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }
}

/// Sample coordinates around Paris
pub mod points {
    use super::*;

    pub fn notre_dame() -> GeoPoint {
        GeoPoint::new(48.8530, 2.3499)
    }

    pub fn saint_sulpice() -> GeoPoint {
        GeoPoint::new(48.8511, 2.3348)
    }

    /// Roughly 17 km from Notre-Dame
    pub fn versailles() -> GeoPoint {
        GeoPoint::new(48.8049, 2.1204)
    }
}

pub fn venue(id: &str, name: &str, position: GeoPoint, schedule: &str) -> Venue {
    Venue::builder()
        .id(id)
        .name(name)
        .city("Paris")
        .denomination("Catholique")
        .position(position)
        .raw_schedule(schedule)
        .build()
        .unwrap()
}

/// The standard three-venue set: two Paris churches plus one in Versailles.
pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(
            "st-sulpice",
            "Saint-Sulpice",
            points::saint_sulpice(),
            "Célébration - Dimanche 10:30-11:30; Confession - Samedi 17:00-18:00",
        ),
        venue(
            "notre-dame",
            "Notre-Dame",
            points::notre_dame(),
            "Messe - Dimanche 08:00-09:00; Vêpres - Dimanche 17:45-18:30",
        ),
        venue(
            "versailles",
            "Saint-Louis de Versailles",
            points::versailles(),
            "Messe - Dimanche 10:00-11:00",
        ),
    ]
}
