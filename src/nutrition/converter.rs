//! Label amount conversion
//!
//! Converts amounts as printed on a supplement label into the canonical unit
//! of the nutrient they describe.

use super::units::{
    categorize_unit, grams_per_unit, UnitCategory, MG_VITAMIN_E_PER_IU, UG_VITAMIN_A_PER_IU,
    UG_VITAMIN_D_PER_IU,
};
use crate::models::NutrientType;

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// A lone separator followed by exactly three digits groups thousands ("1,000", "1.000")
fn is_thousands_group(head: &str, tail: &str) -> bool {
    tail.len() == 3
        && all_digits(tail)
        && all_digits(head)
        && head.len() <= 3
        && !head.starts_with('0')
}

/// Normalize a label number to the form `f64::from_str` accepts
///
/// Both decimal conventions appear on labels: "1,000.5" and "1.000,5". When
/// both separators occur the last one is the decimal mark. Returns None when
/// the grouping is inconsistent.
fn normalize_number(raw: &str) -> Option<String> {
    let is_separator = |c: char| c == '.' || c == ',';
    let Some((last_pos, last_sep)) = raw.char_indices().filter(|(_, c)| is_separator(*c)).last()
    else {
        return Some(raw.to_string());
    };

    let other_sep = if last_sep == '.' { ',' } else { '.' };
    let separator_count = raw.chars().filter(|c| is_separator(*c)).count();
    let head = &raw[..last_pos];
    let tail = &raw[last_pos + 1..];

    let has_fraction = raw.contains(other_sep)
        || (separator_count == 1 && !is_thousands_group(head, tail));

    let (int_part, fraction, grouping) = if has_fraction {
        (head, Some(tail), other_sep)
    } else {
        (raw, None, last_sep)
    };

    let integer: String = if int_part.contains(grouping) {
        let mut groups = int_part.split(grouping);
        let lead = groups.next().unwrap_or_default();
        let grouped = all_digits(lead)
            && lead.len() <= 3
            && groups.all(|g| g.len() == 3 && all_digits(g));
        if !grouped {
            return None;
        }
        int_part.chars().filter(|c| *c != grouping).collect()
    } else if all_digits(int_part) {
        int_part.to_string()
    } else if int_part.is_empty() && fraction.is_some() {
        "0".to_string()
    } else {
        return None;
    };

    match fraction {
        Some(f) if all_digits(f) => Some(format!("{}.{}", integer, f)),
        Some(_) => None,
        None => Some(integer),
    }
}

/// Split a label string like "500 mg", "12,5μg" or "1.000 IE" into amount and unit
pub fn parse_label_amount(label: &str) -> Option<(f64, String)> {
    let trimmed = label.trim();

    let split_at = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == ','))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let raw = &trimmed[..split_at];
    let unit = trimmed[split_at..].trim().to_string();

    if raw.is_empty() || unit.is_empty() {
        return None;
    }

    let Some(number) = normalize_number(raw) else {
        tracing::warn!("Ambiguous amount '{}' in label '{}'; ignored", raw, trimmed);
        return None;
    };
    let amount = number.parse::<f64>().ok()?;

    Some((amount, unit))
}

/// Amount of the nutrient's canonical unit represented by one IU, if defined
fn canonical_per_iu(nutrient: NutrientType) -> Option<f64> {
    match nutrient {
        NutrientType::VitaminD => Some(UG_VITAMIN_D_PER_IU),
        NutrientType::VitaminA => Some(UG_VITAMIN_A_PER_IU),
        NutrientType::VitaminE => Some(MG_VITAMIN_E_PER_IU),
        _ => None,
    }
}

/// Convert a label amount to the nutrient's canonical unit
///
/// Returns None (and logs a warning) when the unit is not a mass unit and has
/// no IU definition for this nutrient.
pub fn convert_label_amount(nutrient: NutrientType, amount: f64, unit: &str) -> Option<f64> {
    let canonical = nutrient.unit();

    match categorize_unit(unit) {
        UnitCategory::Mass => {
            let grams = grams_per_unit(unit)?;
            Some(amount * grams / canonical.grams())
        }
        UnitCategory::InternationalUnit => match canonical_per_iu(nutrient) {
            Some(factor) => Some(amount * factor),
            None => {
                tracing::warn!(
                    "No IU definition for {}; cannot convert {} {}",
                    nutrient.display_name(),
                    amount,
                    unit
                );
                None
            }
        },
        UnitCategory::Unknown => {
            tracing::warn!(
                "Unknown label unit '{}' for {}; amount {} ignored",
                unit,
                nutrient.display_name(),
                amount
            );
            None
        }
    }
}

/// Parse and convert a full label string such as "1000 IU"
pub fn convert_label(nutrient: NutrientType, label: &str) -> Option<f64> {
    let (amount, unit) = parse_label_amount(label)?;
    convert_label_amount(nutrient, amount, &unit)
}
