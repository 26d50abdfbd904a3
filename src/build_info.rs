//! Build information module
//!
//! Compile-time build metadata, embedded in every generated report.

use serde::Serialize;

const BUILD_NUMBER_RAW: Option<&str> = option_env!("VITATRACK_BUILD_NUMBER");

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("VITATRACK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Cargo profile the binary was built with
pub const BUILD_PROFILE: &str = match option_env!("VITATRACK_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Source of the recommendation values in the reference table
pub const REFERENCE_SOURCE: &str = "DGE reference values for nutrient intake";

/// Build counter; 0 when built without the build script
pub fn build_number() -> u64 {
    parse_build_number(BUILD_NUMBER_RAW)
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub profile: &'static str,
    pub reference_source: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: build_number(),
            build_timestamp: BUILD_TIMESTAMP,
            profile: BUILD_PROFILE,
            reference_source: REFERENCE_SOURCE,
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (build {}, {}, {})",
            self.name, self.version, self.build_number, self.profile, self.build_timestamp
        )
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Vitatrack Nutrient Report");
    eprintln!("  {}", info);
    eprintln!("  Reference: {}", info.reference_source);
    eprintln!("===============================================");
}
