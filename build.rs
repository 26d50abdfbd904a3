//! Build script for Vitatrack
//!
//! Embeds a build counter, the build timestamp and the cargo profile.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    // The counter lives in OUT_DIR so builds never write into the source tree
    let counter_path = env::var("OUT_DIR")
        .map(|dir| PathBuf::from(dir).join("build_number"))
        .unwrap_or_else(|_| PathBuf::from("build_number"));

    let previous: u64 = fs::read_to_string(&counter_path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    if let Err(e) = fs::write(&counter_path, build_number.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=VITATRACK_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=VITATRACK_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=VITATRACK_BUILD_PROFILE={}", profile);
}
