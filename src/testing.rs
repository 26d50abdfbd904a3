//! Shared test fixtures

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::models::{
    IntakeRecord, NutrientType, SpecialNeeds, Supplement, TimeOfDay, UserProfile, UserType,
};

pub fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

pub fn at(year: i32, month: u32, d: u32, hour: u32) -> NaiveDateTime {
    day(year, month, d).and_hms_opt(hour, 0, 0).unwrap()
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

pub fn male() -> UserProfile {
    UserProfile::new("Tom", UserType::Male)
}

pub fn female() -> UserProfile {
    UserProfile::new("Anna", UserType::Female)
}

pub fn pregnant() -> UserProfile {
    female().with_special_needs(SpecialNeeds::Pregnant)
}

pub fn breastfeeding() -> UserProfile {
    female().with_special_needs(SpecialNeeds::Breastfeeding)
}

pub fn child(age: u8) -> UserProfile {
    UserProfile::new("Max", UserType::Child { age })
}

/// Intake record of a one-off supplement with the given per-serving nutrients
pub fn record(
    name: &str,
    date: NaiveDateTime,
    servings: u32,
    nutrients: &[(NutrientType, f64)],
) -> IntakeRecord {
    let supplement = nutrients
        .iter()
        .fold(Supplement::new(name, "1 tablet", 1), |s, (n, amount)| {
            s.with_nutrient(*n, *amount)
        });
    IntakeRecord::log(&supplement, servings, TimeOfDay::Morning, date, now()).unwrap()
}
