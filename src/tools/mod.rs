//! Vitatrack tools module
//!
//! Report entry points for outer surfaces.

pub mod report;
pub mod snapshot;

pub use report::{daily_report, generate_report, weekly_report, DailyReport, Report, WeeklyReport};
pub use snapshot::{IntakeSnapshot, ReportError, ReportResult};
