//! User profile model
//!
//! Who the recommendations are resolved for: sex or child age, and any
//! pregnancy/breastfeeding state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Child age brackets used by the reference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildAgeGroup {
    Age1To3,
    Age4To6,
    Age7To9,
    Age10To12,
    Age13To14,
    Age15To18,
}

impl ChildAgeGroup {
    pub const ALL: [ChildAgeGroup; 6] = [
        ChildAgeGroup::Age1To3,
        ChildAgeGroup::Age4To6,
        ChildAgeGroup::Age7To9,
        ChildAgeGroup::Age10To12,
        ChildAgeGroup::Age13To14,
        ChildAgeGroup::Age15To18,
    ];

    /// Bracket for an age in years; None outside 1..=18
    pub fn from_age(age: u8) -> Option<Self> {
        match age {
            1..=3 => Some(ChildAgeGroup::Age1To3),
            4..=6 => Some(ChildAgeGroup::Age4To6),
            7..=9 => Some(ChildAgeGroup::Age7To9),
            10..=12 => Some(ChildAgeGroup::Age10To12),
            13..=14 => Some(ChildAgeGroup::Age13To14),
            15..=18 => Some(ChildAgeGroup::Age15To18),
            _ => None,
        }
    }

    /// Position within [`ChildAgeGroup::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChildAgeGroup::Age1To3 => "1-3 years",
            ChildAgeGroup::Age4To6 => "4-6 years",
            ChildAgeGroup::Age7To9 => "7-9 years",
            ChildAgeGroup::Age10To12 => "10-12 years",
            ChildAgeGroup::Age13To14 => "13-14 years",
            ChildAgeGroup::Age15To18 => "15-18 years",
        }
    }
}

/// Population a user belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UserType {
    Male,
    Female,
    Child { age: u8 },
}

impl UserType {
    /// Child bracket, if this is a child with a supported age
    pub fn child_age_group(&self) -> Option<ChildAgeGroup> {
        match self {
            UserType::Child { age } => ChildAgeGroup::from_age(*age),
            _ => None,
        }
    }

    pub fn is_child(&self) -> bool {
        matches!(self, UserType::Child { .. })
    }
}

/// Physiological state that shifts recommendations for adult women
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpecialNeeds {
    #[default]
    None,
    Pregnant,
    Breastfeeding,
}

/// A resolved user profile as handed over by the persistence layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub special_needs: Option<SpecialNeeds>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, user_type: UserType) -> Self {
        Self {
            name: name.into(),
            user_type,
            special_needs: None,
            birth_date: None,
        }
    }

    pub fn with_special_needs(mut self, special_needs: SpecialNeeds) -> Self {
        self.special_needs = Some(special_needs);
        self
    }

    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Special needs that actually apply; only women can be pregnant or breastfeeding
    pub fn effective_special_needs(&self) -> SpecialNeeds {
        match self.user_type {
            UserType::Female => self.special_needs.unwrap_or_default(),
            _ => SpecialNeeds::None,
        }
    }

    /// Completed years of age on the given date, if a birth date is known
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let birth = self.birth_date?;
        if date < birth {
            return None;
        }
        let mut years = date.year() - birth.year();
        if (date.month(), date.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    /// User type as of the given date
    ///
    /// A child's age is recomputed from the birth date so the bracket moves on
    /// birthdays; adults are returned unchanged.
    pub fn user_type_on(&self, date: NaiveDate) -> UserType {
        match (self.user_type, self.age_on(date)) {
            (UserType::Child { .. }, Some(age)) => UserType::Child {
                age: u8::try_from(age).unwrap_or(u8::MAX),
            },
            (user_type, _) => user_type,
        }
    }

    /// Copy of this profile with the user type refreshed for the given date
    pub fn as_of(&self, date: NaiveDate) -> Self {
        Self {
            user_type: self.user_type_on(date),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_age_brackets() {
        assert_eq!(ChildAgeGroup::from_age(1), Some(ChildAgeGroup::Age1To3));
        assert_eq!(ChildAgeGroup::from_age(3), Some(ChildAgeGroup::Age1To3));
        assert_eq!(ChildAgeGroup::from_age(4), Some(ChildAgeGroup::Age4To6));
        assert_eq!(ChildAgeGroup::from_age(9), Some(ChildAgeGroup::Age7To9));
        assert_eq!(ChildAgeGroup::from_age(12), Some(ChildAgeGroup::Age10To12));
        assert_eq!(ChildAgeGroup::from_age(14), Some(ChildAgeGroup::Age13To14));
        assert_eq!(ChildAgeGroup::from_age(18), Some(ChildAgeGroup::Age15To18));
    }

    #[test]
    fn test_child_age_out_of_range() {
        assert_eq!(ChildAgeGroup::from_age(0), None);
        assert_eq!(ChildAgeGroup::from_age(19), None);
        assert_eq!(UserType::Child { age: 0 }.child_age_group(), None);
        assert_eq!(UserType::Male.child_age_group(), None);
    }

    #[test]
    fn test_bracket_index_matches_all() {
        for (i, group) in ChildAgeGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn test_special_needs_only_for_women() {
        let woman = UserProfile::new("Anna", UserType::Female)
            .with_special_needs(SpecialNeeds::Pregnant);
        assert_eq!(woman.effective_special_needs(), SpecialNeeds::Pregnant);

        let mut man = woman.clone();
        man.user_type = UserType::Male;
        assert_eq!(man.effective_special_needs(), SpecialNeeds::None);

        let unset = UserProfile::new("Eva", UserType::Female);
        assert_eq!(unset.effective_special_needs(), SpecialNeeds::None);
    }

    #[test]
    fn test_age_on_birthday_boundary() {
        let birth = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap();
        let child = UserProfile::new("Max", UserType::Child { age: 9 }).with_birth_date(birth);

        let before = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(child.age_on(before), Some(9));
        assert_eq!(child.age_on(on), Some(10));
        assert_eq!(child.user_type_on(on), UserType::Child { age: 10 });
        assert_eq!(
            child.as_of(on).user_type.child_age_group(),
            Some(ChildAgeGroup::Age10To12)
        );
    }

    #[test]
    fn test_adult_type_unchanged_by_birth_date() {
        let birth = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let adult = UserProfile::new("Tom", UserType::Male).with_birth_date(birth);
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(adult.user_type_on(today), UserType::Male);
    }

    #[test]
    fn test_user_type_serde() {
        let json = serde_json::to_string(&UserType::Child { age: 7 }).unwrap();
        assert_eq!(json, r#"{"type":"child","age":7}"#);
        let parsed: UserType = serde_json::from_str(r#"{"type":"female"}"#).unwrap();
        assert_eq!(parsed, UserType::Female);
    }
}
