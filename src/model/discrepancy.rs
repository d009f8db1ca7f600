use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// Severity of a detected discrepancy. Ordering follows declaration order,
/// so `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscrepancyType {
    MissingTimesheet,
    MissingAttendance,
    TimeMismatch,
    BreakMismatch,
}

impl DiscrepancyType {
    /// Whether a discrepancy of this type can be resolved mechanically by
    /// creating or adjusting a timesheet entry from attendance data.
    /// The other two need a human to decide what actually happened.
    pub fn is_auto_resolvable(&self) -> bool {
        matches!(
            self,
            DiscrepancyType::MissingTimesheet | DiscrepancyType::TimeMismatch
        )
    }
}

/// A detected inconsistency between attendance and timesheet data for one
/// employee-day. Recomputed on every reconciliation run, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Discrepancy {
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

    #[schema(example = 5.5, nullable = true)]
    pub timesheet_hours: Option<f64>,

    #[schema(example = "Create timesheet entry from attendance data")]
    pub suggested_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn only_timesheet_side_fixes_are_auto_resolvable() {
        assert!(DiscrepancyType::MissingTimesheet.is_auto_resolvable());
        assert!(DiscrepancyType::TimeMismatch.is_auto_resolvable());
        assert!(!DiscrepancyType::MissingAttendance.is_auto_resolvable());
        assert!(!DiscrepancyType::BreakMismatch.is_auto_resolvable());
    }
}
