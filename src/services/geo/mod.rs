// Spatial ranking service
// Great-circle distance annotation and radius filtering

use crate::models::occurrence::Occurrence;
use crate::models::venue::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres (haversine).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Annotate each occurrence with its distance from the reference point.
pub fn with_distance(mut occurrences: Vec<Occurrence>, reference: GeoPoint) -> Vec<Occurrence> {
    for occ in &mut occurrences {
        occ.distance_km = Some(haversine_km(reference, occ.position));
    }
    occurrences
}

/// Drop occurrences farther than `radius_km` from the reference point.
/// Occurrences not yet annotated are measured on the fly.
pub fn within_radius(
    occurrences: Vec<Occurrence>,
    reference: GeoPoint,
    radius_km: f64,
) -> Vec<Occurrence> {
    occurrences
        .into_iter()
        .filter(|occ| {
            occ.distance_km
                .unwrap_or_else(|| haversine_km(reference, occ.position))
                <= radius_km
        })
        .collect()
}
