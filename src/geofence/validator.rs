use derive_more::{Display, Error};

use crate::geofence::distance::haversine_meters;
use crate::model::location::{AssignedLocation, Coordinate};
use crate::model::verdict::{GeofenceVerdict, LocationCheck, NearestLocation};

#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum GeofenceError {
    #[display(
        fmt = "invalid coordinate ({}, {}): latitude must be within [-90, 90] and longitude within [-180, 180]",
        latitude,
        longitude
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Validate a reported GPS fix against the employee's assigned locations.
///
/// Pure computation: distance to every location, nearest summary, and the
/// approval decision. Reported sensor accuracy never gates the radius check;
/// the caller gets it back as display metadata only.
///
/// An empty `assigned` slice is not an error. It yields a verdict with an
/// empty `per_location` list and `requires_approval = false` — the
/// "no locations configured" state the caller must message on its own.
pub fn validate(
    current: &Coordinate,
    assigned: &[AssignedLocation],
) -> Result<GeofenceVerdict, GeofenceError> {
    let lat_ok = (-90.0..=90.0).contains(&current.latitude);
    let lon_ok = (-180.0..=180.0).contains(&current.longitude);
    if !lat_ok || !lon_ok {
        return Err(GeofenceError::InvalidCoordinate {
            latitude: current.latitude,
            longitude: current.longitude,
        });
    }

    let per_location: Vec<LocationCheck> = assigned
        .iter()
        .map(|location| {
            let distance_meters = haversine_meters(
                current.latitude,
                current.longitude,
                location.latitude,
                location.longitude,
            );
            LocationCheck {
                location_id: location.id,
                name: location.name.clone(),
                distance_meters,
                is_within_radius: distance_meters <= location.radius_meters,
            }
        })
        .collect();

    // Minimum distance, first-encountered entry wins ties.
    let nearest_location = per_location
        .iter()
        .fold(None::<&LocationCheck>, |best, check| match best {
            Some(current_best) if current_best.distance_meters <= check.distance_meters => best,
            _ => Some(check),
        })
        .map(|check| NearestLocation {
            location_id: check.location_id,
            name: check.name.clone(),
            distance_meters: check.distance_meters,
        });

    let is_within_any_geofence = per_location.iter().any(|check| check.is_within_radius);
    let requires_approval = !is_within_any_geofence && !per_location.is_empty();

    Ok(GeofenceVerdict {
        is_within_any_geofence,
        nearest_location,
        requires_approval,
        per_location,
    })
}
