use crate::api::geofence::{ValidateCheckInRequest, ValidateCheckInResponse};
use crate::api::reconciliation::{
    AutoResolveResponse, DiscrepancyRow, ProposedResolution, ReconciliationReportResponse,
    ReconciliationRequest, ReconciliationSummary,
};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, BreakPeriod};
use crate::model::discrepancy::{DiscrepancyType, Severity};
use crate::model::location::{AccuracyConfidence, AssignedLocation, Coordinate};
use crate::model::timesheet::{TimesheetEntry, TimesheetStatus};
use crate::model::verdict::{GeofenceVerdict, LocationCheck, NearestLocation};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Validation Service API",
        version = "1.0.0",
        description = r#"
## Geofenced Attendance Validation

Stateless computation service behind an HR platform. The surrounding
application authenticates callers, loads the employee's records, and
persists outcomes; this service only computes.

### Key Features
- **Geofence Validation**
  - Haversine distance from a reported GPS fix to every assigned location
  - Auto-approve within range, flag for manager approval out of range
  - Accuracy confidence tiers surfaced as display metadata
- **Attendance/Timesheet Reconciliation**
  - Missing-counterpart and hour/break mismatch detection per date
  - Severity-ranked discrepancy report
  - Draft timesheet proposals for the mechanically resolvable findings

### Response Format
- JSON-based RESTful responses
- Input problems come back as 400 with a `message` field

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::geofence::validate_check_in,
        crate::api::reconciliation::reconciliation_report,
        crate::api::reconciliation::auto_resolve_preview,
    ),
    components(
        schemas(
            Coordinate,
            AccuracyConfidence,
            AssignedLocation,
            GeofenceVerdict,
            LocationCheck,
            NearestLocation,
            ValidateCheckInRequest,
            ValidateCheckInResponse,
            AttendanceRecord,
            AttendanceStatus,
            BreakPeriod,
            TimesheetEntry,
            TimesheetStatus,
            DiscrepancyType,
            Severity,
            DiscrepancyRow,
            ReconciliationRequest,
            ReconciliationReportResponse,
            ReconciliationSummary,
            ProposedResolution,
            AutoResolveResponse
        )
    ),
    tags(
        (name = "Geofence", description = "Check-in location validation APIs"),
        (name = "Reconciliation", description = "Attendance/timesheet reconciliation APIs"),
    )
)]
pub struct ApiDoc;
