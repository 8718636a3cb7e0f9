//! Ship flight interpolator
//!
//! A single fixed-duration linear position animation: the ship enters at
//! `start_x`, slides to `end_x`, and parks. The caller advances the flight
//! with elapsed wall time; completion is observed through `is_flying()`.

/// Default flight duration in milliseconds
pub const DEFAULT_FLIGHT_DURATION_MS: u32 = 1200;

/// Minimum allowed flight duration
pub const MIN_FLIGHT_DURATION_MS: u32 = 200;

/// Maximum allowed flight duration
pub const MAX_FLIGHT_DURATION_MS: u32 = 10_000;

/// Flight phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlightPhase {
    /// Ship parked off-screen
    Parked,
    /// Ship crossing the screen
    Flying,
}

/// Linear x-position animation for the hourly ship crossing
#[derive(Debug, Clone)]
pub struct ShipFlight {
    start_x: i32,
    end_x: i32,
    duration_ms: u32,
    elapsed_ms: u32,
    phase: FlightPhase,
}

impl ShipFlight {
    /// Create a flight over the given span
    ///
    /// The duration is clamped to `[MIN_FLIGHT_DURATION_MS, MAX_FLIGHT_DURATION_MS]`.
    pub fn new(start_x: i32, end_x: i32, duration_ms: u32) -> Self {
        Self {
            start_x,
            end_x,
            duration_ms: duration_ms.clamp(MIN_FLIGHT_DURATION_MS, MAX_FLIGHT_DURATION_MS),
            elapsed_ms: 0,
            phase: FlightPhase::Parked,
        }
    }

    /// Start the flight from the beginning of the span
    pub fn begin(&mut self) {
        self.elapsed_ms = 0;
        self.phase = FlightPhase::Flying;
    }

    /// Check if the flight is in progress
    pub fn is_flying(&self) -> bool {
        self.phase == FlightPhase::Flying
    }

    /// Current x position along the span
    pub fn position(&self) -> i32 {
        if self.duration_ms == 0 {
            return self.end_x;
        }
        let span = (self.end_x - self.start_x) as i64;
        let travelled = span * self.elapsed_ms as i64 / self.duration_ms as i64;
        self.start_x + travelled as i32
    }

    /// Advance the flight by elapsed time
    ///
    /// Returns the x position after the update. The flight parks once the
    /// full duration has elapsed.
    pub fn update(&mut self, delta_ms: u32) -> i32 {
        if self.phase == FlightPhase::Flying {
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.duration_ms);
            if self.elapsed_ms == self.duration_ms {
                self.phase = FlightPhase::Parked;
            }
        }
        self.position()
    }
}
