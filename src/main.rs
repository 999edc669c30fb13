// Agenda Cultuel demo binary
// Loads a venue file and prints upcoming celebrations

use anyhow::{Context, Result};
use chrono::Local;

use agenda_cultuel::models::venue::{GeoPoint, Venue};
use agenda_cultuel::services::pipeline::{AgendaService, QueryOptions};
use agenda_cultuel::utils::date::humanize_relative_time;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/venues.json".to_string());

    // Optional reference point: lat lon as two extra arguments
    let reference = match (args.next(), args.next()) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(
            lat.parse().context("invalid reference latitude")?,
            lon.parse().context("invalid reference longitude")?,
        )),
        _ => None,
    };

    log::info!("Loading venues from {path}");
    let file = std::fs::File::open(&path).with_context(|| format!("cannot open {path}"))?;
    let venues: Vec<Venue> =
        serde_json::from_reader(file).with_context(|| format!("cannot parse {path}"))?;

    let service = AgendaService::new();
    let mut options = QueryOptions::new().limit(10);
    if let Some(point) = reference {
        options = options.reference_point(point);
    }

    let now = Local::now().naive_local();
    let upcoming = service.get_upcoming(&venues, now, &options)?;

    if upcoming.is_empty() {
        println!("Aucune célébration à venir.");
        return Ok(());
    }

    for occ in &upcoming {
        let when = humanize_relative_time(occ.occurs_at, now, service.locale());
        match occ.distance_km {
            Some(km) => println!(
                "{when:<18} {} — {} ({}) à {:.1} km",
                occ.celebration_type, occ.venue_name, occ.venue_city, km
            ),
            None => println!(
                "{when:<18} {} — {} ({})",
                occ.celebration_type, occ.venue_name, occ.venue_city
            ),
        }
    }

    Ok(())
}
