use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    EarlyDeparture,
    Overtime,
}

/// A break taken during the working day, as captured by the attendance tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BreakPeriod {
    #[schema(example = "12:00:00", value_type = String)]
    pub start: NaiveTime,

    #[schema(example = "12:45:00", value_type = String)]
    pub end: NaiveTime,

    #[schema(example = 45.0)]
    pub duration_minutes: f64,
}

/// One employee-day of check-in/check-out derived attendance.
/// Created on check-in, updated on check-out and break events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-01-10",
        "check_in_time": "09:00:00",
        "check_out_time": "17:30:00",
        "total_hours": 8.0,
        "status": "PRESENT",
        "breaks": [
            { "start": "12:00:00", "end": "12:30:00", "duration_minutes": 30.0 }
        ]
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "09:00:00", value_type = String, nullable = true)]
    pub check_in_time: Option<NaiveTime>,

    #[schema(example = "17:30:00", value_type = String, nullable = true)]
    pub check_out_time: Option<NaiveTime>,

    #[schema(example = 8.0)]
    pub total_hours: f64,

    #[schema(example = "PRESENT")]
    pub status: AttendanceStatus,

    #[serde(default)]
    pub breaks: Vec<BreakPeriod>,
}

impl AttendanceRecord {
    /// Total recorded break time in hours.
    pub fn break_hours(&self) -> f64 {
        self.break_minutes() / 60.0
    }

    /// Total recorded break time in minutes.
    pub fn break_minutes(&self) -> f64 {
        self.breaks.iter().map(|b| b.duration_minutes).sum()
    }
}
