use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::geofence;
use crate::model::location::{AccuracyConfidence, AssignedLocation, Coordinate};
use crate::model::verdict::GeofenceVerdict;

#[derive(Deserialize, ToSchema)]
pub struct ValidateCheckInRequest {
    pub coordinate: Coordinate,

    /// Locations the employee is permitted to check in from. May be empty.
    #[serde(default)]
    pub assigned_locations: Vec<AssignedLocation>,
}

#[derive(Serialize, ToSchema)]
pub struct ValidateCheckInResponse {
    pub verdict: GeofenceVerdict,

    /// Display tier for the reported sensor accuracy. Metadata only; it
    /// never influenced the verdict.
    #[schema(example = "high", nullable = true)]
    pub accuracy_confidence: Option<AccuracyConfidence>,

    #[schema(example = false)]
    pub no_locations_configured: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable = true)]
    pub message: Option<String>,
}

/// Validate a check-in attempt against the employee's assigned locations
#[utoipa::path(
    post,
    path = "/api/v1/geofence/validate",
    request_body = ValidateCheckInRequest,
    responses(
        (status = 200, description = "Verdict computed", body = ValidateCheckInResponse),
        (status = 400, description = "Coordinate out of range", body = Object, example = json!({
            "message": "invalid coordinate (95.0, 77.5946): latitude must be within [-90, 90] and longitude within [-180, 180]"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Geofence"
)]
pub async fn validate_check_in(
    payload: web::Json<ValidateCheckInRequest>,
) -> actix_web::Result<impl Responder> {
    let request = payload.into_inner();

    let verdict = match geofence::validate(&request.coordinate, &request.assigned_locations) {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::info!(error = %e, "Rejected check-in coordinate");
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })));
        }
    };

    let no_locations_configured = verdict.no_locations_configured();
    tracing::info!(
        locations = request.assigned_locations.len(),
        within = verdict.is_within_any_geofence,
        requires_approval = verdict.requires_approval,
        "Geofence validation completed"
    );

    let message = no_locations_configured.then(|| {
        "No work locations assigned. Contact HR to assign work locations.".to_string()
    });

    Ok(HttpResponse::Ok().json(ValidateCheckInResponse {
        accuracy_confidence: request.coordinate.accuracy_confidence(),
        verdict,
        no_locations_configured,
        message,
    }))
}
