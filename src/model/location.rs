use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// A GPS fix reported by the employee's device at check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    #[schema(example = 12.9716)]
    pub latitude: f64,

    #[schema(example = 77.5946)]
    pub longitude: f64,

    /// Sensor accuracy in meters, when the device reports one.
    #[schema(example = 8.0, nullable = true)]
    pub accuracy_meters: Option<f64>,
}

/// Confidence tier derived from the reported sensor accuracy.
/// Display metadata only; never part of the radius check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccuracyConfidence {
    High,
    Medium,
    Low,
}

impl Coordinate {
    /// Accuracy tier for the UI: high <= 10 m, medium <= 50 m, low above that.
    pub fn accuracy_confidence(&self) -> Option<AccuracyConfidence> {
        self.accuracy_meters.map(|meters| {
            if meters <= 10.0 {
                AccuracyConfidence::High
            } else if meters <= 50.0 {
                AccuracyConfidence::Medium
            } else {
                AccuracyConfidence::Low
            }
        })
    }
}

/// A place an employee is permitted to check in from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "HQ",
        "latitude": 12.9716,
        "longitude": 77.5946,
        "radius_meters": 100.0,
        "is_office_location": true
    })
)]
pub struct AssignedLocation {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "HQ")]
    pub name: String,

    #[schema(example = 12.9716)]
    pub latitude: f64,

    #[schema(example = 77.5946)]
    pub longitude: f64,

    #[schema(example = 100.0)]
    pub radius_meters: f64,

    #[schema(example = true)]
    pub is_office_location: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(accuracy: Option<f64>) -> Coordinate {
        Coordinate {
            latitude: 12.9716,
            longitude: 77.5946,
            accuracy_meters: accuracy,
        }
    }

    #[test]
    fn accuracy_tiers_follow_thresholds() {
        assert_eq!(
            coordinate(Some(5.0)).accuracy_confidence(),
            Some(AccuracyConfidence::High)
        );
        assert_eq!(
            coordinate(Some(10.0)).accuracy_confidence(),
            Some(AccuracyConfidence::High),
            "10 m is still high confidence"
        );
        assert_eq!(
            coordinate(Some(35.0)).accuracy_confidence(),
            Some(AccuracyConfidence::Medium)
        );
        assert_eq!(
            coordinate(Some(120.0)).accuracy_confidence(),
            Some(AccuracyConfidence::Low)
        );
    }

    #[test]
    fn accuracy_tier_absent_when_device_reports_none() {
        assert_eq!(coordinate(None).accuracy_confidence(), None);
    }
}
