//! Supplement model
//!
//! A supplement definition with its per-serving nutrient profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Nutrient, NutrientType};

/// Validation failures for supplement definitions and intake logging
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Supplement name must not be empty")]
    EmptyName,

    #[error("Serving size must not be empty")]
    EmptyServingSize,

    #[error("Servings per day must be greater than zero (got {0})")]
    InvalidServingsPerDay(i32),

    #[error("Servings taken must be greater than zero (got {0})")]
    InvalidServingsTaken(u32),
}

/// A supplement as defined by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    pub name: String,
    pub brand: Option<String>,
    /// Free text such as "1 capsule" or "2 tablets"
    pub serving_size: String,
    pub servings_per_day: i32,
    pub nutrients: Vec<Nutrient>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub notes: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Supplement {
    pub fn new(
        name: impl Into<String>,
        serving_size: impl Into<String>,
        servings_per_day: i32,
    ) -> Self {
        Self {
            name: name.into(),
            brand: None,
            serving_size: serving_size.into(),
            servings_per_day,
            nutrients: Vec::new(),
            is_active: true,
            notes: None,
        }
    }

    /// Add a nutrient to the per-serving profile
    pub fn with_nutrient(mut self, nutrient_type: NutrientType, amount: f64) -> Self {
        self.nutrients.push(Nutrient::new(nutrient_type, amount));
        self
    }

    /// Check every rule and report all violations at once
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if self.serving_size.trim().is_empty() {
            errors.push(ValidationError::EmptyServingSize);
        }
        if self.servings_per_day <= 0 {
            errors.push(ValidationError::InvalidServingsPerDay(self.servings_per_day));
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Per-serving amount of a nutrient; 0 if the supplement does not contain it
    pub fn amount_per_serving(&self, nutrient_type: NutrientType) -> f64 {
        self.nutrients
            .iter()
            .filter(|n| n.nutrient_type == nutrient_type)
            .map(|n| n.amount)
            .sum()
    }

    /// Amount of a nutrient when taken as planned (per serving × servings per day)
    pub fn daily_amount(&self, nutrient_type: NutrientType) -> f64 {
        self.amount_per_serving(nutrient_type) * f64::from(self.servings_per_day.max(0))
    }
}
