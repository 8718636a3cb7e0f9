//! Build script for invaderwatch-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates face.toml at compile time and bakes the values into consts

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use invaderwatch_limits::*;

// Kept in sync with invaderwatch_core::flight; the build script cannot
// depend on a no_std workspace crate without complicating the target setup.
mod invaderwatch_limits {
    pub const MIN_FLIGHT_DURATION_MS: i64 = 200;
    pub const MAX_FLIGHT_DURATION_MS: i64 = 10_000;
}

fn main() {
    setup_linker();
    bake_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate face.toml and bake the values into generated consts
///
/// Baking at build time keeps TOML parsing off the thumbv6m target
/// entirely; the firmware only ever sees three consts.
fn bake_config() {
    println!("cargo:rerun-if-changed=face.toml");

    let content = fs::read_to_string("face.toml")
        .unwrap_or_else(|e| panic!("face.toml is required next to Cargo.toml: {e}"));

    let config: toml::Value = toml::from_str(&content)
        .unwrap_or_else(|e| panic!("face.toml: invalid TOML syntax: {e}"));

    let style = config
        .get("clock")
        .and_then(|clock| clock.get("style"))
        .and_then(|value| value.as_str())
        .unwrap_or("12h");
    let use_24h = match style {
        "12h" => false,
        "24h" => true,
        other => panic!("face.toml: clock.style must be \"12h\" or \"24h\", got {other:?}"),
    };

    let flight = config.get("flight");

    let duration_ms = flight
        .and_then(|f| f.get("duration_ms"))
        .and_then(|value| value.as_integer())
        .unwrap_or(1200);
    if !(MIN_FLIGHT_DURATION_MS..=MAX_FLIGHT_DURATION_MS).contains(&duration_ms) {
        panic!(
            "face.toml: flight.duration_ms must be {MIN_FLIGHT_DURATION_MS}-{MAX_FLIGHT_DURATION_MS}, got {duration_ms}"
        );
    }

    let frame_ms = flight
        .and_then(|f| f.get("frame_ms"))
        .and_then(|value| value.as_integer())
        .unwrap_or(33);
    if !(10..=200).contains(&frame_ms) {
        panic!("face.toml: flight.frame_ms must be 10-200, got {frame_ms}");
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("face_config.rs")).unwrap();
    writeln!(f, "/// face.toml: clock.style == \"24h\"").unwrap();
    writeln!(f, "pub const CLOCK_STYLE_24H: bool = {use_24h};").unwrap();
    writeln!(f, "/// face.toml: flight.duration_ms").unwrap();
    writeln!(f, "pub const FLIGHT_DURATION_MS: u32 = {duration_ms};").unwrap();
    writeln!(f, "/// face.toml: flight.frame_ms").unwrap();
    writeln!(f, "pub const FLIGHT_FRAME_MS: u64 = {frame_ms};").unwrap();
}
