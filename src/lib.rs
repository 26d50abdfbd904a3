//! Vitatrack Library
//!
//! Nutrient recommendations and supplement intake analysis: DGE reference
//! values, daily coverage, weekly trends and health tips.

pub mod analysis;
pub mod build_info;
pub mod config;
pub mod models;
pub mod nutrition;
pub mod reference;
pub mod tools;

#[cfg(test)]
mod testing;
