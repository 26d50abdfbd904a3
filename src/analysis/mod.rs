//! Intake analysis
//!
//! Daily aggregation, coverage classification, weekly trends and health tips.

pub mod advice;
pub mod daily;
pub mod status;
pub mod trend;

pub use advice::{
    excessive_nutrients, generate_health_tips, missing_nutrients,
    missing_nutrients_including_untracked, HealthTip, TipType,
};
pub use daily::{get_daily_summary, DailyIntakeSummary, NutrientSource};
pub use status::{percentage_of, NutrientComparison, NutrientStatus, INSUFFICIENT_BELOW_PERCENT};
pub use trend::{
    get_weekly_trend, DataPoint, TrendDirection, WeeklyTrend, TREND_THRESHOLD, TREND_WINDOW_DAYS,
};
