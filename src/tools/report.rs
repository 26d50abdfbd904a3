//! Report generation tools
//!
//! Assemble daily and weekly reports from an intake snapshot. These are the
//! entry points an outer surface calls; all analysis happens in the core.

use chrono::NaiveDate;
use serde::Serialize;

use super::snapshot::IntakeSnapshot;
use crate::analysis::{
    excessive_nutrients, generate_health_tips, get_daily_summary, get_weekly_trend,
    missing_nutrients, missing_nutrients_including_untracked, DailyIntakeSummary, DataPoint,
    HealthTip, NutrientComparison, NutrientSource, NutrientStatus, TrendDirection, WeeklyTrend,
};
use crate::build_info::BuildInfo;
use crate::config::ReportConfig;
use crate::models::{NutrientType, Recommendation, SpecialNeeds, UserProfile, UserType};
use crate::reference::{get_all_recommendations, has_special_recommendation};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NutrientSources {
    pub nutrient_type: NutrientType,
    pub sources: Vec<NutrientSource>,
}

#[derive(Debug, Serialize)]
pub struct SupplementIssues {
    pub name: String,
    pub problems: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub user_type: UserType,
    pub special_needs: SpecialNeeds,
    pub record_count: usize,
    pub recommendations: Vec<Recommendation>,
    /// Nutrients with a dedicated pregnancy/breastfeeding value for this user
    pub special_recommendations: Vec<NutrientType>,
    pub comparisons: Vec<NutrientComparison>,
    pub planned_comparisons: Vec<NutrientComparison>,
    pub sources: Vec<NutrientSources>,
    pub tips: Vec<HealthTip>,
    pub missing_nutrients: Vec<NutrientType>,
    pub excessive_nutrients: Vec<NutrientType>,
    pub supplement_issues: Vec<SupplementIssues>,
}

#[derive(Debug, Serialize)]
pub struct WeeklyNutrientTrend {
    pub nutrient_type: NutrientType,
    pub average_intake: f64,
    pub days_with_intake: usize,
    pub direction: TrendDirection,
    pub average_status: NutrientStatus,
    pub data_points: Vec<DataPoint>,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub day_count: usize,
    pub nutrients: Vec<WeeklyNutrientTrend>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub build: BuildInfo,
    pub profile_name: String,
    pub daily: DailyReport,
    pub weekly: WeeklyReport,
}

// ============================================================================
// Report Builders
// ============================================================================

/// Build the report for one day of a snapshot
pub fn daily_report(
    snapshot: &IntakeSnapshot,
    date: NaiveDate,
    include_untracked: bool,
) -> DailyReport {
    let user = snapshot.profile.as_of(date);
    let summary = get_daily_summary(date, &snapshot.records);
    let planned = DailyIntakeSummary::planned(date, &snapshot.supplements);

    let special_needs = user.effective_special_needs();
    let special_recommendations = NutrientType::ALL
        .iter()
        .copied()
        .filter(|n| has_special_recommendation(*n, special_needs))
        .collect();

    let sources = summary
        .covered_nutrients()
        .into_iter()
        .map(|n| NutrientSources {
            nutrient_type: n,
            sources: summary.nutrient_sources(n),
        })
        .collect();

    let missing = if include_untracked {
        missing_nutrients_including_untracked(&summary, &user)
    } else {
        missing_nutrients(&summary, &user)
    };

    let supplement_issues = snapshot
        .supplements
        .iter()
        .filter_map(|s| {
            let problems = s.validate();
            if problems.is_empty() {
                None
            } else {
                Some(SupplementIssues {
                    name: s.name.clone(),
                    problems: problems.iter().map(|e| e.to_string()).collect(),
                })
            }
        })
        .collect();

    DailyReport {
        date,
        user_type: user.user_type,
        special_needs,
        record_count: summary.record_count(),
        recommendations: get_all_recommendations(&user),
        special_recommendations,
        comparisons: summary.comparisons(&user),
        planned_comparisons: planned.comparisons(&user),
        sources,
        tips: generate_health_tips(&summary, &user),
        missing_nutrients: missing.into_iter().collect(),
        excessive_nutrients: excessive_nutrients(&summary, &user).into_iter().collect(),
        supplement_issues,
    }
}

fn nutrient_trend(
    trend: &WeeklyTrend,
    nutrient: NutrientType,
    user: &UserProfile,
) -> WeeklyNutrientTrend {
    WeeklyNutrientTrend {
        nutrient_type: nutrient,
        average_intake: trend.average_intake(nutrient),
        days_with_intake: trend.days_with_intake(nutrient),
        direction: trend.trend(nutrient),
        average_status: trend.average_comparison(nutrient, user).status,
        data_points: trend.data_points(nutrient),
    }
}

/// Build the seven-day report ending on `end_date`
///
/// Only nutrients taken at least once in the window are listed.
pub fn weekly_report(snapshot: &IntakeSnapshot, end_date: NaiveDate) -> WeeklyReport {
    let user = snapshot.profile.as_of(end_date);
    let trend = get_weekly_trend(end_date, &snapshot.records);

    let nutrients = NutrientType::ALL
        .iter()
        .filter(|n| trend.days_with_intake(**n) > 0)
        .map(|n| nutrient_trend(&trend, *n, &user))
        .collect();

    WeeklyReport {
        start_date: trend.start_date,
        end_date: trend.end_date,
        day_count: trend.day_count(),
        nutrients,
    }
}

/// Build the combined report described by the configuration
pub fn generate_report(snapshot: &IntakeSnapshot, config: &ReportConfig) -> Report {
    let date = config.report_date_or_today();
    tracing::info!("Generating report for {} on {}", snapshot.profile.name, date);

    Report {
        build: BuildInfo::current(),
        profile_name: snapshot.profile.name.clone(),
        daily: daily_report(snapshot, date, config.include_untracked),
        weekly: weekly_report(snapshot, date),
    }
}
