//! Nutrient catalog
//!
//! The fixed set of trackable vitamins and minerals, plus the per-serving
//! amount record used by supplements and intake snapshots.

use serde::{Deserialize, Serialize};

use crate::nutrition::{convert_label_amount, NutrientUnit};

/// Broad grouping used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientCategory {
    Vitamin,
    Mineral,
}

/// One of the 23 trackable nutrients
///
/// Declaration order is catalog order; every "for all nutrients" operation
/// iterates [`NutrientType::ALL`] and reports in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientType {
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB6,
    VitaminB9,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Biotin,
    PantothenicAcid,
    Calcium,
    Magnesium,
    Iron,
    Zinc,
    Selenium,
    Iodine,
    Copper,
    Manganese,
    Chromium,
    Molybdenum,
}

impl NutrientType {
    /// Number of nutrients in the catalog
    pub const COUNT: usize = 23;

    /// All nutrients in catalog order
    pub const ALL: [NutrientType; Self::COUNT] = [
        NutrientType::VitaminA,
        NutrientType::VitaminB1,
        NutrientType::VitaminB2,
        NutrientType::VitaminB3,
        NutrientType::VitaminB6,
        NutrientType::VitaminB9,
        NutrientType::VitaminB12,
        NutrientType::VitaminC,
        NutrientType::VitaminD,
        NutrientType::VitaminE,
        NutrientType::VitaminK,
        NutrientType::Biotin,
        NutrientType::PantothenicAcid,
        NutrientType::Calcium,
        NutrientType::Magnesium,
        NutrientType::Iron,
        NutrientType::Zinc,
        NutrientType::Selenium,
        NutrientType::Iodine,
        NutrientType::Copper,
        NutrientType::Manganese,
        NutrientType::Chromium,
        NutrientType::Molybdenum,
    ];

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            NutrientType::VitaminA => "Vitamin A",
            NutrientType::VitaminB1 => "Vitamin B1 (Thiamin)",
            NutrientType::VitaminB2 => "Vitamin B2 (Riboflavin)",
            NutrientType::VitaminB3 => "Vitamin B3 (Niacin)",
            NutrientType::VitaminB6 => "Vitamin B6",
            NutrientType::VitaminB9 => "Folate",
            NutrientType::VitaminB12 => "Vitamin B12",
            NutrientType::VitaminC => "Vitamin C",
            NutrientType::VitaminD => "Vitamin D",
            NutrientType::VitaminE => "Vitamin E",
            NutrientType::VitaminK => "Vitamin K",
            NutrientType::Biotin => "Biotin",
            NutrientType::PantothenicAcid => "Pantothenic Acid",
            NutrientType::Calcium => "Calcium",
            NutrientType::Magnesium => "Magnesium",
            NutrientType::Iron => "Iron",
            NutrientType::Zinc => "Zinc",
            NutrientType::Selenium => "Selenium",
            NutrientType::Iodine => "Iodine",
            NutrientType::Copper => "Copper",
            NutrientType::Manganese => "Manganese",
            NutrientType::Chromium => "Chromium",
            NutrientType::Molybdenum => "Molybdenum",
        }
    }

    /// Unit that amounts and reference values for this nutrient are stored in
    pub fn unit(&self) -> NutrientUnit {
        match self {
            NutrientType::VitaminA
            | NutrientType::VitaminB9
            | NutrientType::VitaminB12
            | NutrientType::VitaminD
            | NutrientType::VitaminK
            | NutrientType::Biotin
            | NutrientType::Selenium
            | NutrientType::Iodine
            | NutrientType::Chromium
            | NutrientType::Molybdenum => NutrientUnit::Microgram,
            _ => NutrientUnit::Milligram,
        }
    }

    pub fn category(&self) -> NutrientCategory {
        match self {
            NutrientType::Calcium
            | NutrientType::Magnesium
            | NutrientType::Iron
            | NutrientType::Zinc
            | NutrientType::Selenium
            | NutrientType::Iodine
            | NutrientType::Copper
            | NutrientType::Manganese
            | NutrientType::Chromium
            | NutrientType::Molybdenum => NutrientCategory::Mineral,
            _ => NutrientCategory::Vitamin,
        }
    }
}

/// Amount of one nutrient contained in a single serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(rename = "type")]
    pub nutrient_type: NutrientType,
    /// Amount in the nutrient's canonical unit
    pub amount: f64,
}

impl Nutrient {
    pub fn new(nutrient_type: NutrientType, amount: f64) -> Self {
        Self {
            nutrient_type,
            amount: amount.max(0.0),
        }
    }

    /// Build from a label amount such as "1000 IU" vitamin D or "0.2 mg" folate
    ///
    /// Returns None if the unit cannot be converted to the nutrient's canonical unit.
    pub fn from_label(nutrient_type: NutrientType, amount: f64, unit: &str) -> Option<Self> {
        convert_label_amount(nutrient_type, amount, unit).map(|a| Self::new(nutrient_type, a))
    }
}
