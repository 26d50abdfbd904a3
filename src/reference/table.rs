//! DGE reference values
//!
//! Recommended daily amounts and tolerable upper limits for every nutrient and
//! population group. Built once on first access and read-only afterwards.
//!
//! Amounts are in the nutrient's canonical unit (see [`NutrientType::unit`]).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::{ChildAgeGroup, NutrientType, SpecialNeeds};

/// Recommended amount with an optional upper limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceValue {
    pub recommended: f64,
    pub upper_limit: Option<f64>,
}

/// Population group a reference value applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PopulationKey {
    Male,
    Female,
    Child(ChildAgeGroup),
    FemalePregnant,
    FemaleBreastfeeding,
}

impl PopulationKey {
    /// Override key for a special-needs state, if it has one
    pub fn for_special_needs(special_needs: SpecialNeeds) -> Option<Self> {
        match special_needs {
            SpecialNeeds::Pregnant => Some(PopulationKey::FemalePregnant),
            SpecialNeeds::Breastfeeding => Some(PopulationKey::FemaleBreastfeeding),
            SpecialNeeds::None => None,
        }
    }
}

const fn v(recommended: f64) -> ReferenceValue {
    ReferenceValue {
        recommended,
        upper_limit: None,
    }
}

const fn vu(recommended: f64, upper_limit: f64) -> ReferenceValue {
    ReferenceValue {
        recommended,
        upper_limit: Some(upper_limit),
    }
}

/// One nutrient's values across all population groups
struct ReferenceRow {
    nutrient: NutrientType,
    male: ReferenceValue,
    female: ReferenceValue,
    /// Indexed by [`ChildAgeGroup::index`]
    children: [ReferenceValue; 6],
    pregnant: Option<ReferenceValue>,
    breastfeeding: Option<ReferenceValue>,
}

// Children columns: 1-3, 4-6, 7-9, 10-12, 13-14, 15-18 years
const ROWS: [ReferenceRow; NutrientType::COUNT] = [
    ReferenceRow {
        nutrient: NutrientType::VitaminA,
        male: vu(850.0, 3000.0),
        female: vu(700.0, 3000.0),
        children: [
            vu(300.0, 800.0),
            vu(350.0, 1100.0),
            vu(450.0, 1500.0),
            vu(600.0, 2000.0),
            vu(800.0, 2600.0),
            vu(950.0, 2800.0),
        ],
        pregnant: Some(vu(800.0, 3000.0)),
        breastfeeding: Some(vu(1300.0, 3000.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB1,
        male: v(1.2),
        female: v(1.0),
        children: [v(0.6), v(0.7), v(0.9), v(1.0), v(1.2), v(1.3)],
        pregnant: Some(v(1.2)),
        breastfeeding: Some(v(1.3)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB2,
        male: v(1.4),
        female: v(1.1),
        children: [v(0.7), v(0.8), v(1.0), v(1.1), v(1.3), v(1.4)],
        pregnant: Some(v(1.3)),
        breastfeeding: Some(v(1.4)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB3,
        male: vu(15.0, 35.0),
        female: vu(12.0, 35.0),
        children: [
            vu(8.0, 10.0),
            vu(9.0, 15.0),
            vu(11.0, 20.0),
            vu(13.0, 20.0),
            vu(15.0, 30.0),
            vu(16.0, 30.0),
        ],
        pregnant: Some(vu(14.0, 35.0)),
        breastfeeding: Some(vu(16.0, 35.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB6,
        male: vu(1.6, 25.0),
        female: vu(1.4, 25.0),
        children: [
            vu(0.4, 5.0),
            vu(0.5, 7.0),
            vu(0.7, 10.0),
            vu(1.0, 15.0),
            vu(1.4, 20.0),
            vu(1.6, 20.0),
        ],
        pregnant: Some(vu(1.5, 25.0)),
        breastfeeding: Some(vu(1.6, 25.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB9,
        male: vu(300.0, 1000.0),
        female: vu(300.0, 1000.0),
        children: [
            vu(120.0, 200.0),
            vu(140.0, 300.0),
            vu(180.0, 400.0),
            vu(240.0, 600.0),
            vu(300.0, 800.0),
            vu(300.0, 800.0),
        ],
        pregnant: Some(vu(550.0, 1000.0)),
        breastfeeding: Some(vu(450.0, 1000.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminB12,
        male: v(4.0),
        female: v(4.0),
        children: [v(1.5), v(2.0), v(2.5), v(3.5), v(4.0), v(4.0)],
        pregnant: Some(v(4.5)),
        breastfeeding: Some(v(5.5)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminC,
        male: v(110.0),
        female: v(95.0),
        children: [v(20.0), v(30.0), v(45.0), v(65.0), v(85.0), v(105.0)],
        pregnant: Some(v(105.0)),
        breastfeeding: Some(v(125.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminD,
        male: vu(20.0, 100.0),
        female: vu(20.0, 100.0),
        children: [
            vu(20.0, 50.0),
            vu(20.0, 50.0),
            vu(20.0, 50.0),
            vu(20.0, 100.0),
            vu(20.0, 100.0),
            vu(20.0, 100.0),
        ],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminE,
        male: vu(14.0, 300.0),
        female: vu(12.0, 300.0),
        children: [
            vu(6.0, 100.0),
            vu(8.0, 120.0),
            vu(9.0, 160.0),
            vu(11.0, 220.0),
            vu(13.0, 260.0),
            vu(14.0, 260.0),
        ],
        pregnant: Some(vu(13.0, 300.0)),
        breastfeeding: Some(vu(17.0, 300.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::VitaminK,
        male: v(80.0),
        female: v(65.0),
        children: [v(15.0), v(20.0), v(30.0), v(40.0), v(50.0), v(70.0)],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::Biotin,
        male: v(40.0),
        female: v(40.0),
        children: [v(10.0), v(15.0), v(20.0), v(25.0), v(35.0), v(40.0)],
        pregnant: None,
        breastfeeding: Some(v(45.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::PantothenicAcid,
        male: v(5.0),
        female: v(5.0),
        children: [v(4.0), v(4.0), v(5.0), v(5.0), v(6.0), v(6.0)],
        pregnant: None,
        breastfeeding: Some(v(7.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Calcium,
        male: vu(1000.0, 2500.0),
        female: vu(1000.0, 2500.0),
        children: [
            vu(600.0, 2500.0),
            vu(750.0, 2500.0),
            vu(900.0, 2500.0),
            vu(1100.0, 3000.0),
            vu(1200.0, 3000.0),
            vu(1200.0, 3000.0),
        ],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::Magnesium,
        male: v(350.0),
        female: v(300.0),
        children: [v(170.0), v(190.0), v(230.0), v(310.0), v(310.0), v(350.0)],
        pregnant: Some(v(310.0)),
        breastfeeding: Some(v(390.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Iron,
        male: vu(11.0, 45.0),
        female: vu(15.0, 45.0),
        children: [
            vu(8.0, 40.0),
            vu(8.0, 40.0),
            vu(10.0, 40.0),
            vu(12.0, 40.0),
            vu(12.0, 45.0),
            vu(12.0, 45.0),
        ],
        pregnant: Some(vu(27.0, 45.0)),
        breastfeeding: Some(vu(20.0, 45.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Zinc,
        male: vu(14.0, 25.0),
        female: vu(8.0, 25.0),
        children: [
            vu(3.0, 7.0),
            vu(4.0, 10.0),
            vu(6.0, 13.0),
            vu(8.0, 18.0),
            vu(11.0, 22.0),
            vu(12.0, 22.0),
        ],
        pregnant: Some(vu(10.0, 25.0)),
        breastfeeding: Some(vu(11.0, 25.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Selenium,
        male: vu(70.0, 300.0),
        female: vu(60.0, 300.0),
        children: [
            vu(15.0, 60.0),
            vu(20.0, 90.0),
            vu(30.0, 130.0),
            vu(45.0, 200.0),
            vu(60.0, 250.0),
            vu(70.0, 250.0),
        ],
        pregnant: None,
        breastfeeding: Some(vu(75.0, 300.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Iodine,
        male: vu(200.0, 600.0),
        female: vu(150.0, 600.0),
        children: [
            vu(100.0, 200.0),
            vu(120.0, 250.0),
            vu(140.0, 300.0),
            vu(180.0, 450.0),
            vu(200.0, 450.0),
            vu(200.0, 500.0),
        ],
        pregnant: Some(vu(220.0, 600.0)),
        breastfeeding: Some(vu(230.0, 600.0)),
    },
    ReferenceRow {
        nutrient: NutrientType::Copper,
        male: vu(1.5, 5.0),
        female: vu(1.25, 5.0),
        children: [
            vu(0.7, 1.0),
            vu(0.8, 2.0),
            vu(1.0, 3.0),
            vu(1.2, 4.0),
            vu(1.3, 4.0),
            vu(1.4, 4.0),
        ],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::Manganese,
        male: v(3.5),
        female: v(3.5),
        children: [v(1.5), v(2.0), v(2.5), v(3.0), v(4.0), v(4.0)],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::Chromium,
        male: v(30.0),
        female: v(30.0),
        children: [v(20.0), v(20.0), v(25.0), v(30.0), v(30.0), v(30.0)],
        pregnant: None,
        breastfeeding: None,
    },
    ReferenceRow {
        nutrient: NutrientType::Molybdenum,
        male: vu(80.0, 600.0),
        female: vu(65.0, 600.0),
        children: [
            vu(25.0, 100.0),
            vu(30.0, 200.0),
            vu(40.0, 250.0),
            vu(50.0, 400.0),
            vu(60.0, 450.0),
            vu(70.0, 500.0),
        ],
        pregnant: None,
        breastfeeding: None,
    },
];

static REFERENCE_TABLE: Lazy<ReferenceTable> = Lazy::new(ReferenceTable::build);

/// Immutable lookup table keyed by nutrient and population group
#[derive(Debug)]
pub struct ReferenceTable {
    entries: HashMap<(NutrientType, PopulationKey), ReferenceValue>,
}

impl ReferenceTable {
    /// The process-wide table, built on first use
    pub fn global() -> &'static ReferenceTable {
        &REFERENCE_TABLE
    }

    fn build() -> Self {
        let mut entries = HashMap::with_capacity(ROWS.len() * 10);

        for row in ROWS.iter() {
            entries.insert((row.nutrient, PopulationKey::Male), row.male);
            entries.insert((row.nutrient, PopulationKey::Female), row.female);
            for group in ChildAgeGroup::ALL {
                let key = (row.nutrient, PopulationKey::Child(group));
                entries.insert(key, row.children[group.index()]);
            }
            if let Some(value) = row.pregnant {
                entries.insert((row.nutrient, PopulationKey::FemalePregnant), value);
            }
            if let Some(value) = row.breastfeeding {
                entries.insert((row.nutrient, PopulationKey::FemaleBreastfeeding), value);
            }
        }

        tracing::debug!("Reference table built with {} entries", entries.len());
        Self { entries }
    }

    /// Look up a value; None means the table has no entry for this pair
    pub fn lookup(&self, nutrient: NutrientType, key: PopulationKey) -> Option<ReferenceValue> {
        self.entries.get(&(nutrient, key)).copied()
    }

    pub fn contains(&self, nutrient: NutrientType, key: PopulationKey) -> bool {
        self.entries.contains_key(&(nutrient, key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
