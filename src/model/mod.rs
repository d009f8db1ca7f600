pub mod attendance;
pub mod discrepancy;
pub mod location;
pub mod timesheet;
pub mod verdict;
