//! Recommendation model

use serde::{Deserialize, Serialize};

use super::{NutrientType, UserType};

/// Recommended daily amount of a nutrient for a user type
///
/// `upper_limit`, when present, is never below `recommended_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub nutrient_type: NutrientType,
    pub user_type: UserType,
    pub recommended_amount: f64,
    pub upper_limit: Option<f64>,
}

impl Recommendation {
    /// Whether an amount is above the upper limit (equal is not excessive)
    pub fn exceeds_upper_limit(&self, amount: f64) -> bool {
        self.upper_limit.map_or(false, |limit| amount > limit)
    }
}
