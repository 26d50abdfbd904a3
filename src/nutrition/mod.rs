//! Nutrient unit module
//!
//! Handles label units and conversion to canonical nutrient units.

pub mod converter;
pub mod units;

pub use converter::{convert_label, convert_label_amount, parse_label_amount};
pub use units::{
    categorize_unit, grams_per_unit, is_international_unit, NutrientUnit, UnitCategory,
};
