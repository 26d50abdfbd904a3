//! Intake record model
//!
//! One logged intake event. The supplement's name and nutrients are copied at
//! logging time, so later edits to or deletion of the supplement never change
//! historical totals.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Nutrient, NutrientType, Supplement, ValidationError};

/// When during the day an intake happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Noon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Noon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Noon => "noon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

/// A logged intake with a snapshot of the supplement's nutrient profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub supplement_name_snapshot: String,
    /// Local wall-clock time of the intake
    pub date: NaiveDateTime,
    pub time_of_day: TimeOfDay,
    pub servings_taken: u32,
    pub nutrients: Vec<Nutrient>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl IntakeRecord {
    /// Log an intake of a supplement, snapshotting its current nutrients
    pub fn log(
        supplement: &Supplement,
        servings_taken: u32,
        time_of_day: TimeOfDay,
        date: NaiveDateTime,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if servings_taken == 0 {
            return Err(ValidationError::InvalidServingsTaken(servings_taken));
        }

        Ok(Self {
            supplement_name_snapshot: supplement.name.clone(),
            date,
            time_of_day,
            servings_taken,
            nutrients: supplement.nutrients.clone(),
            notes: None,
            created_at,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Calendar day of the intake
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }

    /// Amount of a nutrient contributed by this record (per serving × servings taken)
    pub fn amount_of(&self, nutrient_type: NutrientType) -> f64 {
        self.nutrients
            .iter()
            .filter(|n| n.nutrient_type == nutrient_type)
            .map(|n| n.amount * f64::from(self.servings_taken))
            .sum()
    }

    pub fn contains(&self, nutrient_type: NutrientType) -> bool {
        self.nutrients.iter().any(|n| n.nutrient_type == nutrient_type)
    }
}
