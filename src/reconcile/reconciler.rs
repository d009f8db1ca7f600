use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_more::{Display, Error};

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::discrepancy::{Discrepancy, DiscrepancyType, Severity};
use crate::model::timesheet::TimesheetEntry;

/// Hour gap between attendance and timesheet totals that counts as a mismatch.
const HOURS_TOLERANCE: f64 = 0.5;
/// Hour gap above which a time mismatch escalates to high severity.
const HOURS_SEVERE: f64 = 2.0;
/// Tolerated break gap, in hours.
const BREAK_TOLERANCE_HOURS: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ReconcileError {
    #[display(fmt = "invalid record for {}: {}", date, reason)]
    InvalidRecord { date: NaiveDate, reason: String },
}

/// Compare attendance-derived hours against submitted timesheet hours for
/// one employee over one date range and classify every inconsistency.
///
/// Pure and advisory: inputs are never mutated, nothing is persisted, and
/// re-running on unchanged inputs yields the identical sequence. The result
/// is sorted by severity descending; entries of equal severity keep the
/// per-date emission order (dates ascending, rules in declaration order).
pub fn reconcile(
    attendance: &[AttendanceRecord],
    timesheet: &[TimesheetEntry],
) -> Result<Vec<Discrepancy>, ReconcileError> {
    let attendance_by_date = index_attendance(attendance)?;
    let timesheet_by_date = index_timesheet(timesheet)?;

    let dates: BTreeSet<NaiveDate> = attendance_by_date
        .keys()
        .chain(timesheet_by_date.keys())
        .copied()
        .collect();

    let mut discrepancies = Vec::new();
    for date in dates {
        match (attendance_by_date.get(&date), timesheet_by_date.get(&date)) {
            (Some(record), None) => {
                if record.status == AttendanceStatus::Present {
                    discrepancies.push(missing_timesheet(date, record));
                }
            }
            (None, Some(entry)) => {
                discrepancies.push(missing_attendance(date, entry));
            }
            (Some(record), Some(entry)) => {
                if let Some(found) = check_time_mismatch(date, record, entry) {
                    discrepancies.push(found);
                }
                if let Some(found) = check_break_mismatch(date, record, entry) {
                    discrepancies.push(found);
                }
            }
            (None, None) => {}
        }
    }

    // Stable, so same-severity entries keep their emission order.
    discrepancies.sort_by(|a, b| b.severity.cmp(&a.severity));
    Ok(discrepancies)
}

fn index_attendance(
    records: &[AttendanceRecord],
) -> Result<BTreeMap<NaiveDate, &AttendanceRecord>, ReconcileError> {
    let mut by_date = BTreeMap::new();
    for record in records {
        if !is_valid_hours(record.total_hours) {
            return Err(ReconcileError::InvalidRecord {
                date: record.date,
                reason: format!("attendance total_hours {} is not a valid hour count", record.total_hours),
            });
        }
        for taken in &record.breaks {
            if !is_valid_hours(taken.duration_minutes) {
                return Err(ReconcileError::InvalidRecord {
                    date: record.date,
                    reason: format!("break duration {} is not a valid minute count", taken.duration_minutes),
                });
            }
        }
        if by_date.insert(record.date, record).is_some() {
            return Err(ReconcileError::InvalidRecord {
                date: record.date,
                reason: "duplicate attendance record for this date".to_string(),
            });
        }
    }
    Ok(by_date)
}

fn index_timesheet(
    entries: &[TimesheetEntry],
) -> Result<BTreeMap<NaiveDate, &TimesheetEntry>, ReconcileError> {
    let mut by_date = BTreeMap::new();
    for entry in entries {
        if !is_valid_hours(entry.total_hours) {
            return Err(ReconcileError::InvalidRecord {
                date: entry.date,
                reason: format!("timesheet total_hours {} is not a valid hour count", entry.total_hours),
            });
        }
        if !is_valid_hours(entry.break_duration_minutes) {
            return Err(ReconcileError::InvalidRecord {
                date: entry.date,
                reason: format!(
                    "timesheet break_duration_minutes {} is not a valid minute count",
                    entry.break_duration_minutes
                ),
            });
        }
        if by_date.insert(entry.date, entry).is_some() {
            return Err(ReconcileError::InvalidRecord {
                date: entry.date,
                reason: "duplicate timesheet entry for this date".to_string(),
            });
        }
    }
    Ok(by_date)
}

fn is_valid_hours(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn missing_timesheet(date: NaiveDate, record: &AttendanceRecord) -> Discrepancy {
    Discrepancy {
        date,
        kind: DiscrepancyType::MissingTimesheet,
        severity: Severity::High,
        description: format!(
            "Attendance marked {} with {:.2} h worked but no timesheet entry exists",
            record.status, record.total_hours
        ),
        attendance_hours: Some(record.total_hours),
        timesheet_hours: None,
        suggested_action: "Create timesheet entry from attendance data".to_string(),
    }
}

fn missing_attendance(date: NaiveDate, entry: &TimesheetEntry) -> Discrepancy {
    Discrepancy {
        date,
        kind: DiscrepancyType::MissingAttendance,
        severity: Severity::Medium,
        description: format!(
            "Timesheet claims {:.2} h but no attendance was recorded",
            entry.total_hours
        ),
        attendance_hours: None,
        timesheet_hours: Some(entry.total_hours),
        suggested_action: "Verify attendance or update timesheet".to_string(),
    }
}

fn check_time_mismatch(
    date: NaiveDate,
    record: &AttendanceRecord,
    entry: &TimesheetEntry,
) -> Option<Discrepancy> {
    let hours_diff = (record.total_hours - entry.total_hours).abs();
    if hours_diff <= HOURS_TOLERANCE {
        return None;
    }

    let severity = if hours_diff > HOURS_SEVERE {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(Discrepancy {
        date,
        kind: DiscrepancyType::TimeMismatch,
        severity,
        description: format!(
            "Worked hours differ by {:.2} h (attendance {:.2} h, timesheet {:.2} h)",
            hours_diff, record.total_hours, entry.total_hours
        ),
        attendance_hours: Some(record.total_hours),
        timesheet_hours: Some(entry.total_hours),
        suggested_action: "Adjust timesheet entry to match attendance data".to_string(),
    })
}

fn check_break_mismatch(
    date: NaiveDate,
    record: &AttendanceRecord,
    entry: &TimesheetEntry,
) -> Option<Discrepancy> {
    let attendance_break_hours = record.break_hours();
    let timesheet_break_hours = entry.break_hours();
    let break_diff = (attendance_break_hours - timesheet_break_hours).abs();
    if break_diff <= BREAK_TOLERANCE_HOURS {
        return None;
    }

    let minutes = (break_diff * 60.0).round() as i64;
    Some(Discrepancy {
        date,
        kind: DiscrepancyType::BreakMismatch,
        severity: Severity::Low,
        description: format!(
            "Recorded breaks differ by {} minutes between attendance and timesheet",
            minutes
        ),
        attendance_hours: Some(attendance_break_hours),
        timesheet_hours: Some(timesheet_break_hours),
        suggested_action: "Review recorded breaks for this date".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::BreakPeriod;
    use crate::model::timesheet::TimesheetStatus;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn attendance(day: &str, total_hours: f64, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            date: date(day),
            check_in_time: Some(time("09:00:00")),
            check_out_time: Some(time("17:30:00")),
            total_hours,
            status,
            breaks: Vec::new(),
        }
    }

    fn attendance_with_break(
        day: &str,
        total_hours: f64,
        break_minutes: f64,
    ) -> AttendanceRecord {
        let mut record = attendance(day, total_hours, AttendanceStatus::Present);
        record.breaks.push(BreakPeriod {
            start: time("12:00:00"),
            end: time("13:00:00"),
            duration_minutes: break_minutes,
        });
        record
    }

    fn timesheet(day: &str, total_hours: f64, break_minutes: f64) -> TimesheetEntry {
        TimesheetEntry {
            date: date(day),
            start_time: time("09:00:00"),
            end_time: time("17:30:00"),
            break_duration_minutes: break_minutes,
            total_hours,
            status: TimesheetStatus::Submitted,
        }
    }

    #[test]
    fn present_day_without_timesheet_is_a_high_finding() {
        let found = reconcile(
            &[attendance("2024-01-10", 8.0, AttendanceStatus::Present)],
            &[],
        )
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiscrepancyType::MissingTimesheet);
        assert_eq!(found[0].severity, Severity::High);
        assert_eq!(found[0].attendance_hours, Some(8.0));
        assert_eq!(found[0].timesheet_hours, None);
        assert_eq!(
            found[0].suggested_action,
            "Create timesheet entry from attendance data"
        );
    }

    #[test]
    fn absent_day_without_timesheet_is_not_flagged() {
        let found = reconcile(
            &[attendance("2024-01-10", 0.0, AttendanceStatus::Absent)],
            &[],
        )
        .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn timesheet_without_attendance_is_a_medium_finding() {
        let found = reconcile(&[], &[timesheet("2024-01-10", 8.0, 0.0)]).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiscrepancyType::MissingAttendance);
        assert_eq!(found[0].severity, Severity::Medium);
        assert_eq!(found[0].attendance_hours, None);
        assert_eq!(found[0].timesheet_hours, Some(8.0));
        assert_eq!(
            found[0].suggested_action,
            "Verify attendance or update timesheet"
        );
    }

    #[test]
    fn large_hour_gap_is_a_high_time_mismatch() {
        let found = reconcile(
            &[attendance("2024-01-10", 8.0, AttendanceStatus::Present)],
            &[timesheet("2024-01-10", 5.5, 0.0)],
        )
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiscrepancyType::TimeMismatch);
        assert_eq!(found[0].severity, Severity::High);
        assert!(
            found[0].description.contains("2.50"),
            "description should carry the rounded difference: {}",
            found[0].description
        );
    }

    #[test]
    fn moderate_hour_gap_is_a_medium_time_mismatch() {
        let found = reconcile(
            &[attendance("2024-01-10", 8.0, AttendanceStatus::Present)],
            &[timesheet("2024-01-10", 7.0, 0.0)],
        )
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiscrepancyType::TimeMismatch);
        assert_eq!(found[0].severity, Severity::Medium);
    }

    #[test]
    fn hour_gap_within_tolerance_is_ignored() {
        let found = reconcile(
            &[attendance("2024-01-10", 8.0, AttendanceStatus::Present)],
            &[timesheet("2024-01-10", 7.8, 0.0)],
        )
        .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn break_gap_over_tolerance_is_a_low_finding() {
        let found = reconcile(
            &[attendance_with_break("2024-01-10", 8.0, 60.0)],
            &[timesheet("2024-01-10", 8.0, 0.0)],
        )
        .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, DiscrepancyType::BreakMismatch);
        assert_eq!(found[0].severity, Severity::Low);
        assert!(
            found[0].description.contains("60 minutes"),
            "description should state the gap in minutes: {}",
            found[0].description
        );
        assert_eq!(found[0].attendance_hours, Some(1.0));
        assert_eq!(found[0].timesheet_hours, Some(0.0));
    }

    #[test]
    fn break_gap_of_exactly_fifteen_minutes_is_tolerated() {
        let found = reconcile(
            &[attendance_with_break("2024-01-10", 8.0, 45.0)],
            &[timesheet("2024-01-10", 8.0, 30.0)],
        )
        .unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn one_date_can_carry_both_time_and_break_findings() {
        let found = reconcile(
            &[attendance_with_break("2024-01-10", 8.0, 60.0)],
            &[timesheet("2024-01-10", 5.0, 0.0)],
        )
        .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, DiscrepancyType::TimeMismatch);
        assert_eq!(found[1].kind, DiscrepancyType::BreakMismatch);
    }

    #[test]
    fn result_is_sorted_by_severity_descending() {
        let found = reconcile(
            &[
                attendance_with_break("2024-01-08", 8.0, 60.0),
                attendance("2024-01-09", 8.0, AttendanceStatus::Present),
            ],
            &[
                timesheet("2024-01-08", 8.0, 0.0),
                timesheet("2024-01-10", 8.0, 0.0),
            ],
        )
        .unwrap();

        let severities: Vec<Severity> = found.iter().map(|d| d.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::High, Severity::Medium, Severity::Low]
        );
        assert_eq!(found[0].kind, DiscrepancyType::MissingTimesheet);
        assert_eq!(found[1].kind, DiscrepancyType::MissingAttendance);
        assert_eq!(found[2].kind, DiscrepancyType::BreakMismatch);
    }

    #[test]
    fn equal_severity_keeps_date_order() {
        let found = reconcile(
            &[
                attendance("2024-01-09", 8.0, AttendanceStatus::Present),
                attendance("2024-01-08", 8.0, AttendanceStatus::Present),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].date, date("2024-01-08"));
        assert_eq!(found[1].date, date("2024-01-09"));
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let attendance_rows = vec![
            attendance_with_break("2024-01-08", 8.0, 60.0),
            attendance("2024-01-09", 8.0, AttendanceStatus::Present),
        ];
        let timesheet_rows = vec![timesheet("2024-01-08", 5.0, 0.0)];

        let first = reconcile(&attendance_rows, &timesheet_rows).unwrap();
        let second = reconcile(&attendance_rows, &timesheet_rows).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_attendance_dates_are_rejected() {
        let result = reconcile(
            &[
                attendance("2024-01-10", 8.0, AttendanceStatus::Present),
                attendance("2024-01-10", 7.0, AttendanceStatus::Present),
            ],
            &[],
        );

        assert!(matches!(
            result,
            Err(ReconcileError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn duplicate_timesheet_dates_are_rejected() {
        let result = reconcile(
            &[],
            &[
                timesheet("2024-01-10", 8.0, 0.0),
                timesheet("2024-01-10", 8.0, 0.0),
            ],
        );

        assert!(matches!(
            result,
            Err(ReconcileError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn negative_and_non_finite_hours_are_rejected() {
        let negative = reconcile(
            &[attendance("2024-01-10", -1.0, AttendanceStatus::Present)],
            &[],
        );
        assert!(matches!(negative, Err(ReconcileError::InvalidRecord { .. })));

        let non_finite = reconcile(&[], &[timesheet("2024-01-10", f64::NAN, 0.0)]);
        assert!(matches!(
            non_finite,
            Err(ReconcileError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn empty_inputs_yield_no_findings() {
        assert!(reconcile(&[], &[]).unwrap().is_empty());
    }
}
