//! Baked watchface configuration
//!
//! build.rs validates face.toml and generates the consts included here.

use invaderwatch_core::config::{ClockStyle, FaceConfig};

include!(concat!(env!("OUT_DIR"), "/face_config.rs"));

/// Watchface configuration from face.toml
pub fn face_config() -> FaceConfig {
    FaceConfig {
        clock_style: if CLOCK_STYLE_24H {
            ClockStyle::TwentyFourHour
        } else {
            ClockStyle::TwelveHour
        },
        flight_duration_ms: FLIGHT_DURATION_MS,
    }
}
