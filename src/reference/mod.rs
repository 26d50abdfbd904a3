//! Reference values module
//!
//! The DGE reference table and per-user recommendation resolution.

pub mod resolver;
pub mod table;

pub use resolver::{get_all_recommendations, get_recommendation, has_special_recommendation};
pub use table::{PopulationKey, ReferenceTable, ReferenceValue};
