//! Coverage classification
//!
//! Maps a nutrient total and its recommendation to a percentage and status.

use serde::{Deserialize, Serialize};

use super::daily::DailyIntakeSummary;
use crate::models::{NutrientType, Recommendation, UserProfile};
use crate::reference::get_recommendation;

/// Coverage below this percentage of the recommendation is insufficient
pub const INSUFFICIENT_BELOW_PERCENT: f64 = 80.0;

/// Coverage status of a nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    /// Nothing taken
    None,
    Insufficient,
    Normal,
    Excessive,
}

impl NutrientStatus {
    /// Classify an amount against an optional recommendation
    ///
    /// Exactly 80 % is normal, and an amount equal to the upper limit is
    /// normal; only amounts strictly above the limit are excessive.
    pub fn classify(amount: f64, recommendation: Option<&Recommendation>) -> Self {
        if amount <= 0.0 {
            return NutrientStatus::None;
        }

        let Some(rec) = recommendation else {
            return NutrientStatus::Insufficient;
        };

        // Compared as products so 80 % of whole-number recommendations stays exact
        if amount * 100.0 < INSUFFICIENT_BELOW_PERCENT * rec.recommended_amount {
            NutrientStatus::Insufficient
        } else if rec.exceeds_upper_limit(amount) {
            NutrientStatus::Excessive
        } else {
            NutrientStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::None => "none",
            NutrientStatus::Insufficient => "insufficient",
            NutrientStatus::Normal => "normal",
            NutrientStatus::Excessive => "excessive",
        }
    }
}

/// Percentage of the recommended amount; 0 without intake or recommendation
pub fn percentage_of(amount: f64, recommendation: Option<&Recommendation>) -> f64 {
    match recommendation {
        Some(rec) if amount > 0.0 && rec.recommended_amount > 0.0 => {
            amount / rec.recommended_amount * 100.0
        }
        _ => 0.0,
    }
}

/// Reporting projection of one nutrient against its recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientComparison {
    pub nutrient_type: NutrientType,
    pub current_amount: f64,
    pub recommended_amount: f64,
    pub upper_limit: Option<f64>,
    pub percentage: f64,
    pub status: NutrientStatus,
}

impl NutrientComparison {
    /// Compare an amount with the user's recommendation for the nutrient
    pub fn compute(nutrient: NutrientType, amount: f64, user: &UserProfile) -> Self {
        let recommendation = get_recommendation(nutrient, user);
        let rec = recommendation.as_ref();

        Self {
            nutrient_type: nutrient,
            current_amount: amount,
            recommended_amount: rec.map_or(0.0, |r| r.recommended_amount),
            upper_limit: rec.and_then(|r| r.upper_limit),
            percentage: percentage_of(amount, rec),
            status: NutrientStatus::classify(amount, rec),
        }
    }
}

impl DailyIntakeSummary {
    /// Share of the recommendation covered on this day, in percent (may exceed 100)
    pub fn completion_percentage(&self, nutrient: NutrientType, user: &UserProfile) -> f64 {
        let recommendation = get_recommendation(nutrient, user);
        percentage_of(self.total_amount(nutrient), recommendation.as_ref())
    }

    pub fn status(&self, nutrient: NutrientType, user: &UserProfile) -> NutrientStatus {
        let recommendation = get_recommendation(nutrient, user);
        NutrientStatus::classify(self.total_amount(nutrient), recommendation.as_ref())
    }

    pub fn comparison(&self, nutrient: NutrientType, user: &UserProfile) -> NutrientComparison {
        NutrientComparison::compute(nutrient, self.total_amount(nutrient), user)
    }

    /// Comparisons for all nutrients in catalog order
    pub fn comparisons(&self, user: &UserProfile) -> Vec<NutrientComparison> {
        NutrientType::ALL
            .iter()
            .map(|n| self.comparison(*n, user))
            .collect()
    }
}
