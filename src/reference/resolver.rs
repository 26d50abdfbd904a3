//! Recommendation resolution
//!
//! Picks the reference value that applies to a concrete user. Children resolve
//! by age bracket; women use a pregnancy or breastfeeding override when the
//! table has one for the nutrient, otherwise the plain female value.

use super::table::{PopulationKey, ReferenceTable, ReferenceValue};
use crate::models::{NutrientType, Recommendation, SpecialNeeds, UserProfile, UserType};

/// Population key and value that apply to a user for one nutrient
fn resolve(
    table: &ReferenceTable,
    nutrient: NutrientType,
    user: &UserProfile,
) -> Option<ReferenceValue> {
    match user.user_type {
        UserType::Child { age } => {
            let Some(group) = user.user_type.child_age_group() else {
                tracing::debug!("No child age bracket for age {}", age);
                return None;
            };
            table.lookup(nutrient, PopulationKey::Child(group))
        }
        UserType::Male => table.lookup(nutrient, PopulationKey::Male),
        UserType::Female => PopulationKey::for_special_needs(user.effective_special_needs())
            .and_then(|key| table.lookup(nutrient, key))
            .or_else(|| table.lookup(nutrient, PopulationKey::Female)),
    }
}

/// Recommendation for one nutrient, or None if nothing applies
pub fn get_recommendation(nutrient: NutrientType, user: &UserProfile) -> Option<Recommendation> {
    let value = resolve(ReferenceTable::global(), nutrient, user);

    if value.is_none() && !user.user_type.is_child() {
        tracing::warn!(
            "Reference table has no value for {:?} / {:?}",
            nutrient,
            user.user_type
        );
    }

    value.map(|v| Recommendation {
        nutrient_type: nutrient,
        user_type: user.user_type,
        recommended_amount: v.recommended,
        upper_limit: v.upper_limit,
    })
}

/// Recommendations for every nutrient in catalog order
///
/// Nutrients that resolve to nothing (a child outside the supported age range)
/// are left out.
pub fn get_all_recommendations(user: &UserProfile) -> Vec<Recommendation> {
    NutrientType::ALL
        .iter()
        .filter_map(|n| get_recommendation(*n, user))
        .collect()
}

/// Whether the table carries a dedicated value for this special-needs state
pub fn has_special_recommendation(nutrient: NutrientType, special_needs: SpecialNeeds) -> bool {
    PopulationKey::for_special_needs(special_needs)
        .map_or(false, |key| ReferenceTable::global().contains(nutrient, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChildAgeGroup;
    use crate::testing::{breastfeeding, child, female, male, pregnant};

    fn recommended(nutrient: NutrientType, user: &UserProfile) -> f64 {
        get_recommendation(nutrient, user).unwrap().recommended_amount
    }

    #[test]
    fn test_folate_precedence() {
        assert_eq!(recommended(NutrientType::VitaminB9, &pregnant()), 550.0);
        assert_eq!(recommended(NutrientType::VitaminB9, &breastfeeding()), 450.0);
        assert_eq!(recommended(NutrientType::VitaminB9, &female()), 300.0);
    }

    #[test]
    fn test_missing_override_falls_back_to_female() {
        // No pregnancy-specific vitamin D value
        assert_eq!(
            get_recommendation(NutrientType::VitaminD, &pregnant()),
            get_recommendation(NutrientType::VitaminD, &female())
        );
    }

    #[test]
    fn test_explicit_none_uses_base_entry() {
        let user = female().with_special_needs(SpecialNeeds::None);
        assert_eq!(recommended(NutrientType::VitaminB9, &user), 300.0);
    }

    #[test]
    fn test_special_needs_ignored_for_men() {
        let mut user = male();
        user.special_needs = Some(SpecialNeeds::Pregnant);
        assert_eq!(recommended(NutrientType::VitaminB9, &user), 300.0);
        assert_eq!(recommended(NutrientType::VitaminC, &user), 110.0);
    }

    #[test]
    fn test_child_brackets() {
        let table = ReferenceTable::global();
        for age in 1..=18u8 {
            let group = ChildAgeGroup::from_age(age).unwrap();
            let expected = table
                .lookup(NutrientType::VitaminC, PopulationKey::Child(group))
                .unwrap()
                .recommended;
            assert_eq!(recommended(NutrientType::VitaminC, &child(age)), expected);
        }
        assert_eq!(recommended(NutrientType::Calcium, &child(2)), 600.0);
        assert_eq!(recommended(NutrientType::Calcium, &child(16)), 1200.0);
    }

    #[test]
    fn test_child_outside_brackets_is_absent() {
        assert!(get_recommendation(NutrientType::VitaminC, &child(0)).is_none());
        assert!(get_recommendation(NutrientType::VitaminC, &child(19)).is_none());
        assert!(get_all_recommendations(&child(0)).is_empty());
    }

    #[test]
    fn test_all_recommendations_cover_catalog() {
        let users = [male(), female(), pregnant(), breastfeeding(), child(1), child(8), child(17)];
        for user in &users {
            let all = get_all_recommendations(user);
            assert_eq!(all.len(), 23);
            for (rec, nutrient) in all.iter().zip(NutrientType::ALL) {
                assert_eq!(rec.nutrient_type, nutrient);
                assert!(rec.recommended_amount > 0.0);
                assert_eq!(rec.user_type, user.user_type);
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let user = pregnant();
        for nutrient in NutrientType::ALL {
            assert_eq!(
                get_recommendation(nutrient, &user),
                get_recommendation(nutrient, &user)
            );
        }
    }

    #[test]
    fn test_has_special_recommendation() {
        assert!(has_special_recommendation(NutrientType::VitaminB9, SpecialNeeds::Pregnant));
        assert!(has_special_recommendation(NutrientType::VitaminB9, SpecialNeeds::Breastfeeding));
        assert!(!has_special_recommendation(NutrientType::VitaminD, SpecialNeeds::Pregnant));
        assert!(has_special_recommendation(NutrientType::Biotin, SpecialNeeds::Breastfeeding));
        assert!(!has_special_recommendation(NutrientType::Biotin, SpecialNeeds::Pregnant));
        assert!(!has_special_recommendation(NutrientType::VitaminB9, SpecialNeeds::None));
    }

    #[test]
    fn test_upper_limit_carried_through() {
        let rec = get_recommendation(NutrientType::Zinc, &male()).unwrap();
        assert_eq!(rec.upper_limit, Some(25.0));
        assert!(get_recommendation(NutrientType::VitaminC, &male()).unwrap().upper_limit.is_none());
    }
}
