use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TimesheetStatus {
    Draft,
    Submitted,
    Approved,
}

/// One employee-day of manually authored working time.
/// Authored independently of the attendance tracker; its lifecycle is its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-01-10",
        "start_time": "09:00:00",
        "end_time": "17:30:00",
        "break_duration_minutes": 30.0,
        "total_hours": 8.0,
        "status": "SUBMITTED"
    })
)]
pub struct TimesheetEntry {
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "09:00:00", value_type = String)]
    pub start_time: NaiveTime,

    #[schema(example = "17:30:00", value_type = String)]
    pub end_time: NaiveTime,

    #[schema(example = 30.0)]
    pub break_duration_minutes: f64,

    #[schema(example = 8.0)]
    pub total_hours: f64,

    #[schema(example = "SUBMITTED")]
    pub status: TimesheetStatus,
}

impl TimesheetEntry {
    /// Declared break time in hours.
    pub fn break_hours(&self) -> f64 {
        self.break_duration_minutes / 60.0
    }
}
