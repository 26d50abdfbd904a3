//! Health tips
//!
//! Turns per-nutrient status into warnings (above the upper limit) and
//! suggestions (below 80 % coverage).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::daily::DailyIntakeSummary;
use super::status::{NutrientComparison, NutrientStatus};
use crate::models::{NutrientType, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipType {
    Warning,
    Suggestion,
    Info,
}

/// A generated advisory message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTip {
    #[serde(rename = "type")]
    pub tip_type: TipType,
    pub nutrient: Option<NutrientType>,
    pub message: String,
}

fn format_amount(amount: f64) -> String {
    if amount >= 10.0 || amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

fn tip_for(comparison: &NutrientComparison) -> Option<HealthTip> {
    let nutrient = comparison.nutrient_type;
    let unit = nutrient.unit();

    match comparison.status {
        NutrientStatus::Excessive => {
            let limit = comparison.upper_limit.unwrap_or(comparison.recommended_amount);
            Some(HealthTip {
                tip_type: TipType::Warning,
                nutrient: Some(nutrient),
                message: format!(
                    "{} intake of {} {} is above the upper limit of {} {}. \
                     Consider reducing your dose.",
                    nutrient.display_name(),
                    format_amount(comparison.current_amount),
                    unit,
                    format_amount(limit),
                    unit
                ),
            })
        }
        NutrientStatus::Insufficient => Some(HealthTip {
            tip_type: TipType::Suggestion,
            nutrient: Some(nutrient),
            message: format!(
                "{} covers only {:.0}% of the recommended {} {}. \
                 A supplement or diet change could close the gap.",
                nutrient.display_name(),
                comparison.percentage,
                format_amount(comparison.recommended_amount),
                unit
            ),
        }),
        NutrientStatus::None | NutrientStatus::Normal => None,
    }
}

/// Tips for every nutrient that is excessive or insufficient, in catalog order
pub fn generate_health_tips(summary: &DailyIntakeSummary, user: &UserProfile) -> Vec<HealthTip> {
    let tips: Vec<HealthTip> = summary
        .comparisons(user)
        .iter()
        .filter_map(tip_for)
        .collect();

    tracing::debug!("Generated {} health tips for {}", tips.len(), summary.date);
    tips
}

fn nutrients_with_status(
    summary: &DailyIntakeSummary,
    user: &UserProfile,
    wanted: &[NutrientStatus],
) -> BTreeSet<NutrientType> {
    NutrientType::ALL
        .iter()
        .copied()
        .filter(|n| wanted.contains(&summary.status(*n, user)))
        .collect()
}

/// Nutrients below 80 % of their recommendation
pub fn missing_nutrients(
    summary: &DailyIntakeSummary,
    user: &UserProfile,
) -> BTreeSet<NutrientType> {
    nutrients_with_status(summary, user, &[NutrientStatus::Insufficient])
}

/// Insufficient nutrients plus those not taken at all
pub fn missing_nutrients_including_untracked(
    summary: &DailyIntakeSummary,
    user: &UserProfile,
) -> BTreeSet<NutrientType> {
    nutrients_with_status(summary, user, &[NutrientStatus::Insufficient, NutrientStatus::None])
}

/// Nutrients above their upper limit
pub fn excessive_nutrients(
    summary: &DailyIntakeSummary,
    user: &UserProfile,
) -> BTreeSet<NutrientType> {
    nutrients_with_status(summary, user, &[NutrientStatus::Excessive])
}
