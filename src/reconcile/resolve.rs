use crate::model::attendance::AttendanceRecord;
use crate::model::timesheet::{TimesheetEntry, TimesheetStatus};

/// Build the DRAFT timesheet entry that would resolve a missing-timesheet or
/// time-mismatch finding for this day, straight from the attendance data.
///
/// Returns `None` when the attendance record has no check-in or check-out
/// time yet — there is nothing mechanical to derive start/end from, so the
/// day stays with the human queue. Persisting the proposed entry is the
/// caller's job.
pub fn propose_timesheet_entry(record: &AttendanceRecord) -> Option<TimesheetEntry> {
    let start_time = record.check_in_time?;
    let end_time = record.check_out_time?;

    Some(TimesheetEntry {
        date: record.date,
        start_time,
        end_time,
        break_duration_minutes: record.break_minutes(),
        total_hours: record.total_hours,
        status: TimesheetStatus::Draft,
    })
}
