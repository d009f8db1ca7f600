use std::collections::HashMap;

use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::AttendanceRecord;
use crate::model::discrepancy::{Discrepancy, DiscrepancyType, Severity};
use crate::model::timesheet::TimesheetEntry;
use crate::reconcile::{self, resolve};

#[derive(Deserialize, ToSchema)]
pub struct ReconciliationRequest {
    /// Attendance records for one employee over the reporting range.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,

    /// Timesheet entries for the same employee and range.
    #[serde(default)]
    pub timesheet: Vec<TimesheetEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct DiscrepancyRow {
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(rename = "type")]
    #[schema(example = "MISSING_TIMESHEET")]
    pub kind: DiscrepancyType,

    #[schema(example = "HIGH")]
    pub severity: Severity,

    #[schema(example = "Attendance marked PRESENT with 8.00 h worked but no timesheet entry exists")]
    pub description: String,

    #[schema(example = 8.0, nullable = true)]
    pub attendance_hours: Option<f64>,

    #[schema(nullable = true)]
    pub timesheet_hours: Option<f64>,

    #[schema(example = "Create timesheet entry from attendance data")]
    pub suggested_action: String,

    /// Whether a timesheet entry derived from attendance data would settle
    /// this finding without human judgment.
    #[schema(example = true)]
    pub auto_resolvable: bool,
}

impl From<Discrepancy> for DiscrepancyRow {
    fn from(found: Discrepancy) -> Self {
        let auto_resolvable = found.kind.is_auto_resolvable();
        Self {
            date: found.date,
            kind: found.kind,
            severity: found.severity,
            description: found.description,
            attendance_hours: found.attendance_hours,
            timesheet_hours: found.timesheet_hours,
            suggested_action: found.suggested_action,
            auto_resolvable,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ReconciliationSummary {
    #[schema(example = 1)]
    pub high: usize,
    #[schema(example = 1)]
    pub medium: usize,
    #[schema(example = 0)]
    pub low: usize,
    #[schema(example = 1)]
    pub auto_resolvable: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ReconciliationReportResponse {
    pub data: Vec<DiscrepancyRow>,
    #[schema(example = 2)]
    pub total: usize,
    pub summary: ReconciliationSummary,
}

/// A timesheet entry proposed from attendance data for a resolvable finding.
#[derive(Serialize, ToSchema)]
pub struct ProposedResolution {
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[serde(rename = "type")]
    #[schema(example = "MISSING_TIMESHEET")]
    pub kind: DiscrepancyType,

    /// Absent when the attendance record has no check-in/check-out times to
    /// derive an entry from; such days stay with the human queue.
    pub proposed_entry: Option<TimesheetEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct AutoResolveResponse {
    pub data: Vec<ProposedResolution>,
    #[schema(example = 1)]
    pub total: usize,
}

/// Reconcile attendance against timesheet entries for a date range
#[utoipa::path(
    post,
    path = "/api/v1/reconciliation/report",
    request_body = ReconciliationRequest,
    responses(
        (status = 200, description = "Discrepancy report, severity descending", body = ReconciliationReportResponse),
        (status = 400, description = "Malformed input records", body = Object, example = json!({
            "message": "invalid record for 2024-01-10: duplicate attendance record for this date"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reconciliation"
)]
pub async fn reconciliation_report(
    payload: web::Json<ReconciliationRequest>,
) -> actix_web::Result<impl Responder> {
    let request = payload.into_inner();

    let discrepancies = match reconcile::reconcile(&request.attendance, &request.timesheet) {
        Ok(found) => found,
        Err(e) => {
            tracing::info!(error = %e, "Rejected reconciliation input");
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })));
        }
    };

    let summary = ReconciliationSummary {
        high: count_by_severity(&discrepancies, Severity::High),
        medium: count_by_severity(&discrepancies, Severity::Medium),
        low: count_by_severity(&discrepancies, Severity::Low),
        auto_resolvable: discrepancies
            .iter()
            .filter(|d| d.kind.is_auto_resolvable())
            .count(),
    };

    tracing::info!(
        attendance = request.attendance.len(),
        timesheet = request.timesheet.len(),
        total = discrepancies.len(),
        high = summary.high,
        "Reconciliation report computed"
    );

    let data: Vec<DiscrepancyRow> = discrepancies.into_iter().map(DiscrepancyRow::from).collect();
    Ok(HttpResponse::Ok().json(ReconciliationReportResponse {
        total: data.len(),
        data,
        summary,
    }))
}

/// Propose timesheet entries for the mechanically resolvable findings
#[utoipa::path(
    post,
    path = "/api/v1/reconciliation/auto-resolve",
    request_body = ReconciliationRequest,
    responses(
        (status = 200, description = "Draft entries derived from attendance data; nothing is persisted here", body = AutoResolveResponse),
        (status = 400, description = "Malformed input records", body = Object, example = json!({
            "message": "invalid record for 2024-01-10: attendance total_hours -1 is not a valid hour count"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reconciliation"
)]
pub async fn auto_resolve_preview(
    payload: web::Json<ReconciliationRequest>,
) -> actix_web::Result<impl Responder> {
    let request = payload.into_inner();

    let discrepancies = match reconcile::reconcile(&request.attendance, &request.timesheet) {
        Ok(found) => found,
        Err(e) => {
            tracing::info!(error = %e, "Rejected auto-resolve input");
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "message": e.to_string()
            })));
        }
    };

    // Duplicates were already rejected above, so the map lookup is unambiguous.
    let attendance_by_date: HashMap<NaiveDate, &AttendanceRecord> = request
        .attendance
        .iter()
        .map(|record| (record.date, record))
        .collect();

    let data: Vec<ProposedResolution> = discrepancies
        .into_iter()
        .filter(|found| found.kind.is_auto_resolvable())
        .map(|found| {
            let proposed_entry = attendance_by_date
                .get(&found.date)
                .and_then(|record| resolve::propose_timesheet_entry(record));
            ProposedResolution {
                date: found.date,
                kind: found.kind,
                proposed_entry,
            }
        })
        .collect();

    tracing::info!(total = data.len(), "Auto-resolve proposals computed");

    Ok(HttpResponse::Ok().json(AutoResolveResponse {
        total: data.len(),
        data,
    }))
}

fn count_by_severity(discrepancies: &[Discrepancy], severity: Severity) -> usize {
    discrepancies
        .iter()
        .filter(|d| d.severity == severity)
        .count()
}
