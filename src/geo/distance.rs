//! Great-circle distance on a spherical Earth

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::geo::Coordinates;

/// Calculate the distance between two points in kilometers (Haversine formula)
///
/// # Arguments
/// * `from` - First point
/// * `to` - Second point
///
/// # Returns
/// Unrounded distance in kilometers
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding error can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance rounded to the nearest whole kilometer
pub fn distance_km(from: Coordinates, to: Coordinates) -> u32 {
    haversine_km(from, to).round() as u32
}
