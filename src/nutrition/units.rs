//! Unit types and conversion constants
//!
//! Supplement labels state nutrient amounts in mass units (g, mg, μg) or, for a
//! few fat-soluble vitamins, in International Units.

use serde::{Deserialize, Serialize};

/// Canonical unit a nutrient's amounts and reference values are stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientUnit {
    #[serde(rename = "mg")]
    Milligram,
    #[serde(rename = "μg")]
    Microgram,
}

impl NutrientUnit {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            NutrientUnit::Milligram => "mg",
            NutrientUnit::Microgram => "μg",
        }
    }

    /// Grams per one of this unit
    pub fn grams(&self) -> f64 {
        match self {
            NutrientUnit::Milligram => G_PER_MG,
            NutrientUnit::Microgram => G_PER_UG,
        }
    }
}

impl std::fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Category of a label unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Mass units (g, mg, μg)
    Mass,
    /// International Units, nutrient specific
    InternationalUnit,
    /// Anything else (capsule, scoop, ...)
    Unknown,
}

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per microgram
pub const G_PER_UG: f64 = 0.000_001;

// ============================================================================
// International Unit Conversion Constants
// ============================================================================

/// Micrograms of vitamin D (cholecalciferol) per IU
pub const UG_VITAMIN_D_PER_IU: f64 = 0.025;
/// Micrograms of vitamin A (retinol) per IU
pub const UG_VITAMIN_A_PER_IU: f64 = 0.3;
/// Milligrams of vitamin E (natural α-tocopherol) per IU
pub const MG_VITAMIN_E_PER_IU: f64 = 0.67;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Get the conversion factor to grams for a mass unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "μg" | "µg" | "mcg" | "ug" | "microgram" | "micrograms" => Some(G_PER_UG),
        _ => None,
    }
}

/// True for the spellings of International Units
pub fn is_international_unit(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "iu" | "i.u." | "ie" | "i.e." | "international unit" | "international units"
    )
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    if grams_per_unit(unit).is_some() {
        return UnitCategory::Mass;
    }
    if is_international_unit(unit) {
        return UnitCategory::InternationalUnit;
    }
    UnitCategory::Unknown
}
