//! Watchface configuration type definitions
//!
//! Values come from the firmware's `face.toml`, baked in at build time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flight::DEFAULT_FLIGHT_DURATION_MS;

/// Hour display mode for the time line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockStyle {
    /// "3:07 pm"
    #[default]
    TwelveHour,
    /// "15:07"
    TwentyFourHour,
}

/// Watchface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Hour display mode
    pub clock_style: ClockStyle,
    /// Duration of the hourly ship flight in milliseconds
    pub flight_duration_ms: u32,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            clock_style: ClockStyle::default(),
            flight_duration_ms: DEFAULT_FLIGHT_DURATION_MS,
        }
    }
}
