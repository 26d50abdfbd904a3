//! Daily intake aggregation
//!
//! Folds the intake records of one calendar day into per-nutrient totals.
//! Summaries are recomputed from records on every call and never cached.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{IntakeRecord, NutrientType, Supplement, TimeOfDay};

/// How much of a nutrient one supplement contributed on a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSource {
    pub supplement_name: String,
    pub amount: f64,
}

/// All intake records of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntakeSummary {
    pub date: NaiveDate,
    pub records: Vec<IntakeRecord>,
}

impl DailyIntakeSummary {
    /// Wrap records that are already known to belong to `date`
    pub fn new(date: NaiveDate, records: Vec<IntakeRecord>) -> Self {
        Self { date, records }
    }

    /// Build the summary for `date` from an unfiltered record history
    pub fn for_date(date: NaiveDate, records: &[IntakeRecord]) -> Self {
        let records: Vec<IntakeRecord> =
            records.iter().filter(|r| r.is_on(date)).cloned().collect();
        tracing::debug!("Daily summary for {}: {} records", date, records.len());
        Self { date, records }
    }

    /// Preview of a day on which every active supplement is taken as planned
    pub fn planned(date: NaiveDate, supplements: &[Supplement]) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        let records = supplements
            .iter()
            .filter(|s| s.is_active && s.servings_per_day > 0)
            .map(|s| IntakeRecord {
                supplement_name_snapshot: s.name.clone(),
                date: midnight,
                time_of_day: TimeOfDay::Morning,
                servings_taken: s.servings_per_day.unsigned_abs(),
                nutrients: s.nutrients.clone(),
                notes: None,
                created_at: midnight.and_utc(),
            })
            .collect();
        Self { date, records }
    }

    /// Totals per nutrient; nutrients never taken are absent, not zero
    pub fn total_nutrients(&self) -> HashMap<NutrientType, f64> {
        let mut totals: HashMap<NutrientType, f64> = HashMap::new();
        for record in &self.records {
            let servings = f64::from(record.servings_taken);
            for nutrient in &record.nutrients {
                *totals.entry(nutrient.nutrient_type).or_insert(0.0) += nutrient.amount * servings;
            }
        }
        totals
    }

    /// Total of one nutrient, 0 when nothing was taken
    pub fn total_amount(&self, nutrient: NutrientType) -> f64 {
        self.records.iter().map(|r| r.amount_of(nutrient)).sum()
    }

    /// Contribution of each supplement to a nutrient, largest first
    pub fn nutrient_sources(&self, nutrient: NutrientType) -> Vec<NutrientSource> {
        let mut by_name: BTreeMap<&str, f64> = BTreeMap::new();
        for record in &self.records {
            let amount = record.amount_of(nutrient);
            if amount > 0.0 {
                *by_name.entry(record.supplement_name_snapshot.as_str()).or_insert(0.0) += amount;
            }
        }

        let mut sources: Vec<NutrientSource> = by_name
            .into_iter()
            .map(|(name, amount)| NutrientSource {
                supplement_name: name.to_string(),
                amount,
            })
            .collect();
        sources.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        sources
    }

    /// Nutrients that appear in at least one record
    pub fn covered_nutrients(&self) -> BTreeSet<NutrientType> {
        self.records
            .iter()
            .flat_map(|r| r.nutrients.iter().map(|n| n.nutrient_type))
            .collect()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records grouped by time of day, in morning-to-night order
    pub fn records_by_time_of_day(&self) -> BTreeMap<TimeOfDay, Vec<&IntakeRecord>> {
        let mut grouped: BTreeMap<TimeOfDay, Vec<&IntakeRecord>> = BTreeMap::new();
        for record in &self.records {
            grouped.entry(record.time_of_day).or_default().push(record);
        }
        grouped
    }
}

/// Summary of one day out of a full record history
pub fn get_daily_summary(date: NaiveDate, records: &[IntakeRecord]) -> DailyIntakeSummary {
    DailyIntakeSummary::for_date(date, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, day, record};

    fn sample_records() -> Vec<IntakeRecord> {
        let multi = [(NutrientType::VitaminC, 80.0), (NutrientType::Zinc, 5.0)];
        vec![
            record("Multi", at(2026, 3, 1, 8), 1, &multi),
            record("Vitamin C", at(2026, 3, 1, 13), 2, &[(NutrientType::VitaminC, 100.0)]),
            record("Multi", at(2026, 3, 1, 20), 1, &multi),
            record("Vitamin C", at(2026, 3, 2, 8), 1, &[(NutrientType::VitaminC, 100.0)]),
        ]
    }

    #[test]
    fn test_for_date_filters_by_calendar_day() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        assert_eq!(summary.record_count(), 3);

        let next = get_daily_summary(day(2026, 3, 2), &sample_records());
        assert_eq!(next.record_count(), 1);

        let empty = get_daily_summary(day(2026, 3, 5), &sample_records());
        assert!(empty.is_empty());
        assert!(empty.total_nutrients().is_empty());
    }

    #[test]
    fn test_total_nutrients_multiplies_servings() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        let totals = summary.total_nutrients();

        // 80 + 100*2 + 80
        assert!((totals[&NutrientType::VitaminC] - 360.0).abs() < 1e-9);
        assert!((totals[&NutrientType::Zinc] - 10.0).abs() < 1e-9);
        assert!(!totals.contains_key(&NutrientType::Iron));
    }

    #[test]
    fn test_total_amount_matches_total_nutrients() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        let totals = summary.total_nutrients();
        for nutrient in NutrientType::ALL {
            let expected = totals.get(&nutrient).copied().unwrap_or(0.0);
            assert!((summary.total_amount(nutrient) - expected).abs() < 1e-9);
        }
        assert_eq!(summary.total_amount(NutrientType::Iron), 0.0);
    }

    #[test]
    fn test_nutrient_sources_grouped_by_name() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        let sources = summary.nutrient_sources(NutrientType::VitaminC);

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].supplement_name, "Vitamin C");
        assert!((sources[0].amount - 200.0).abs() < 1e-9);
        assert_eq!(sources[1].supplement_name, "Multi");
        assert!((sources[1].amount - 160.0).abs() < 1e-9);

        let zinc = summary.nutrient_sources(NutrientType::Zinc);
        assert_eq!(zinc.len(), 1);
        assert!(summary.nutrient_sources(NutrientType::Iron).is_empty());
    }

    #[test]
    fn test_covered_nutrients_deduplicated() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        let covered: Vec<_> = summary.covered_nutrients().into_iter().collect();
        assert_eq!(covered, vec![NutrientType::VitaminC, NutrientType::Zinc]);
    }

    #[test]
    fn test_records_by_time_of_day() {
        let summary = DailyIntakeSummary::for_date(day(2026, 3, 1), &sample_records());
        let grouped = summary.records_by_time_of_day();
        assert_eq!(grouped[&TimeOfDay::Morning].len(), 3);
    }

    #[test]
    fn test_planned_uses_active_supplements_only() {
        let active = Supplement::new("Magnesium", "1 capsule", 2)
            .with_nutrient(NutrientType::Magnesium, 150.0);
        let mut inactive =
            Supplement::new("Iron", "1 tablet", 1).with_nutrient(NutrientType::Iron, 14.0);
        inactive.is_active = false;

        let plan = DailyIntakeSummary::planned(day(2026, 3, 1), &[active, inactive]);
        assert_eq!(plan.record_count(), 1);
        assert!((plan.total_amount(NutrientType::Magnesium) - 300.0).abs() < 1e-9);
        assert_eq!(plan.total_amount(NutrientType::Iron), 0.0);
    }
}
