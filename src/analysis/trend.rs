//! Weekly trend analysis
//!
//! A rolling seven-day window of daily summaries with averages, chart series
//! and a simple direction heuristic comparing the first and last day.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::daily::DailyIntakeSummary;
use super::status::NutrientComparison;
use crate::models::{IntakeRecord, NutrientType, UserProfile};

/// Number of days in a weekly window
pub const TREND_WINDOW_DAYS: i64 = 7;

/// Relative change between first and last day needed to call a trend
pub const TREND_THRESHOLD: f64 = 0.10;

/// Direction of a nutrient's intake over the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Classify the change from `first` to `last`
    pub fn between(first: f64, last: f64) -> Self {
        if first <= 0.0 {
            return if last > 0.0 {
                TrendDirection::Increasing
            } else {
                TrendDirection::Stable
            };
        }

        let change = (last - first) / first;
        if change > TREND_THRESHOLD {
            TrendDirection::Increasing
        } else if change < -TREND_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

/// One chartable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Daily summaries for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_summaries: Vec<DailyIntakeSummary>,
}

impl WeeklyTrend {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        daily_summaries: Vec<DailyIntakeSummary>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            daily_summaries,
        }
    }

    /// Seven summaries ending on `ending_on`; days without records stay in
    /// the window as empty summaries and older records are ignored
    pub fn ending_on(ending_on: NaiveDate, records: &[IntakeRecord]) -> Self {
        let start_date = ending_on - Duration::days(TREND_WINDOW_DAYS - 1);
        let daily_summaries = (0..TREND_WINDOW_DAYS)
            .map(|offset| {
                DailyIntakeSummary::for_date(start_date + Duration::days(offset), records)
            })
            .collect();

        Self {
            start_date,
            end_date: ending_on,
            daily_summaries,
        }
    }

    pub fn day_count(&self) -> usize {
        self.daily_summaries.len()
    }

    /// Mean daily total; days without intake count as zero
    pub fn average_intake(&self, nutrient: NutrientType) -> f64 {
        if self.daily_summaries.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .daily_summaries
            .iter()
            .map(|s| s.total_amount(nutrient))
            .sum();
        total / self.daily_summaries.len() as f64
    }

    /// One point per day, sorted by date
    pub fn data_points(&self, nutrient: NutrientType) -> Vec<DataPoint> {
        let mut points: Vec<DataPoint> = self
            .daily_summaries
            .iter()
            .map(|s| DataPoint {
                date: s.date,
                value: s.total_amount(nutrient),
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }

    pub fn trend(&self, nutrient: NutrientType) -> TrendDirection {
        let points = self.data_points(nutrient);
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() >= 2 => {
                TrendDirection::between(first.value, last.value)
            }
            _ => TrendDirection::Stable,
        }
    }

    /// Days in the window with a non-zero total of the nutrient
    pub fn days_with_intake(&self, nutrient: NutrientType) -> usize {
        self.daily_summaries
            .iter()
            .filter(|s| s.total_amount(nutrient) > 0.0)
            .count()
    }

    pub fn summary_for(&self, date: NaiveDate) -> Option<&DailyIntakeSummary> {
        self.daily_summaries.iter().find(|s| s.date == date)
    }

    /// Classify the weekly average like a single day's total
    pub fn average_comparison(
        &self,
        nutrient: NutrientType,
        user: &UserProfile,
    ) -> NutrientComparison {
        NutrientComparison::compute(nutrient, self.average_intake(nutrient), user)
    }
}

/// Seven-day trend ending on the given date
pub fn get_weekly_trend(ending_on: NaiveDate, records: &[IntakeRecord]) -> WeeklyTrend {
    WeeklyTrend::ending_on(ending_on, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NutrientStatus;
    use crate::testing::{at, day, male, record};

    fn vitamin_c_day(d: u32, amount: f64) -> DailyIntakeSummary {
        let records = vec![record("C", at(2026, 3, d, 8), 1, &[(NutrientType::VitaminC, amount)])];
        DailyIntakeSummary::for_date(day(2026, 3, d), &records)
    }

    fn trend_of(amounts: &[f64]) -> WeeklyTrend {
        let summaries: Vec<_> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| vitamin_c_day(i as u32 + 1, *a))
            .collect();
        let end = day(2026, 3, amounts.len() as u32);
        WeeklyTrend::new(day(2026, 3, 1), end, summaries)
    }

    fn history(days: u32) -> Vec<IntakeRecord> {
        (1..=days)
            .map(|d| record("C", at(2026, 3, d, 8), 1, &[(NutrientType::VitaminC, 100.0)]))
            .collect()
    }

    #[test]
    fn test_window_always_has_seven_days() {
        for days in [3, 7, 12] {
            let trend = get_weekly_trend(day(2026, 3, days), &history(days));
            assert_eq!(trend.day_count(), 7);
            assert_eq!(trend.end_date, day(2026, 3, days));
            assert_eq!(trend.start_date, trend.end_date - Duration::days(6));
        }
    }

    #[test]
    fn test_window_excludes_older_records() {
        let trend = get_weekly_trend(day(2026, 3, 12), &history(12));
        let records: usize = trend.daily_summaries.iter().map(|s| s.record_count()).sum();
        assert_eq!(records, 7);
        assert!((trend.average_intake(NutrientType::VitaminC) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_days_count_in_average() {
        // Three days of data inside a seven-day window
        let trend = get_weekly_trend(day(2026, 3, 7), &history(3));
        assert_eq!(trend.days_with_intake(NutrientType::VitaminC), 3);
        assert!((trend.average_intake(NutrientType::VitaminC) - 300.0 / 7.0).abs() < 1e-9);
        assert!(trend.summary_for(day(2026, 3, 6)).unwrap().is_empty());
    }

    #[test]
    fn test_average_intake_simple_mean() {
        let trend = trend_of(&[100.0, 200.0, 300.0]);
        assert!((trend.average_intake(NutrientType::VitaminC) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_data_points_sorted_by_date() {
        let summaries = vec![
            vitamin_c_day(3, 30.0),
            vitamin_c_day(1, 10.0),
            vitamin_c_day(2, 20.0),
        ];
        let trend = WeeklyTrend::new(day(2026, 3, 1), day(2026, 3, 3), summaries);

        let points = trend.data_points(NutrientType::VitaminC);
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(2026, 3, 1), day(2026, 3, 2), day(2026, 3, 3)]);
        assert_eq!(points[0].value, 10.0);
        assert_eq!(trend.trend(NutrientType::VitaminC), TrendDirection::Increasing);
    }

    #[test]
    fn test_trend_examples() {
        let c = NutrientType::VitaminC;
        assert_eq!(trend_of(&[50.0, 100.0, 150.0]).trend(c), TrendDirection::Increasing);
        assert_eq!(trend_of(&[150.0, 100.0, 50.0]).trend(c), TrendDirection::Decreasing);
        assert_eq!(trend_of(&[100.0, 105.0, 100.0]).trend(c), TrendDirection::Stable);
    }

    #[test]
    fn test_trend_with_too_few_days_is_stable() {
        assert_eq!(trend_of(&[100.0]).trend(NutrientType::VitaminC), TrendDirection::Stable);
        let empty = WeeklyTrend::new(day(2026, 3, 1), day(2026, 3, 7), Vec::new());
        assert_eq!(empty.trend(NutrientType::VitaminC), TrendDirection::Stable);
        assert_eq!(empty.average_intake(NutrientType::VitaminC), 0.0);
    }

    #[test]
    fn test_trend_from_zero() {
        assert_eq!(TrendDirection::between(0.0, 10.0), TrendDirection::Increasing);
        assert_eq!(TrendDirection::between(0.0, 0.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::between(100.0, 0.0), TrendDirection::Decreasing);
    }

    #[test]
    fn test_trend_threshold_boundaries() {
        assert_eq!(TrendDirection::between(100.0, 109.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::between(100.0, 111.0), TrendDirection::Increasing);
        assert_eq!(TrendDirection::between(100.0, 91.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::between(100.0, 89.0), TrendDirection::Decreasing);
    }

    #[test]
    fn test_average_comparison() {
        let trend = trend_of(&[100.0, 110.0, 120.0]);
        let comparison = trend.average_comparison(NutrientType::VitaminC, &male());
        assert!((comparison.current_amount - 110.0).abs() < 1e-9);
        assert_eq!(comparison.status, NutrientStatus::Normal);
    }
}
