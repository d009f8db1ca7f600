use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distance check against a single assigned location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationCheck {
    #[schema(example = 1)]
    pub location_id: u64,

    #[schema(example = "HQ")]
    pub name: String,

    #[schema(example = 42.7)]
    pub distance_meters: f64,

    #[schema(example = true)]
    pub is_within_radius: bool,
}

/// Summary of the closest assigned location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearestLocation {
    #[schema(example = 1)]
    pub location_id: u64,

    #[schema(example = "HQ")]
    pub name: String,

    #[schema(example = 42.7)]
    pub distance_meters: f64,
}

/// Outcome of validating one check-in attempt against the employee's
/// assigned locations. Computed fresh per attempt; only the caller persists
/// anything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeofenceVerdict {
    #[schema(example = true)]
    pub is_within_any_geofence: bool,

    pub nearest_location: Option<NearestLocation>,

    #[schema(example = false)]
    pub requires_approval: bool,

    /// One entry per assigned location, in the order they were supplied.
    pub per_location: Vec<LocationCheck>,
}

impl GeofenceVerdict {
    /// Zero assigned locations is a distinct state, not an approval case:
    /// the caller must tell the employee to get locations assigned, not
    /// route the check-in to a manager.
    pub fn no_locations_configured(&self) -> bool {
        self.per_location.is_empty()
    }
}
