//! Data models
//!
//! Plain value records exchanged with the persistence and UI layers.

mod intake;
mod nutrient;
mod recommendation;
mod supplement;
mod user;

pub use intake::{IntakeRecord, TimeOfDay};
pub use nutrient::{Nutrient, NutrientCategory, NutrientType};
pub use recommendation::Recommendation;
pub use supplement::{Supplement, ValidationError};
pub use user::{ChildAgeGroup, SpecialNeeds, UserProfile, UserType};
