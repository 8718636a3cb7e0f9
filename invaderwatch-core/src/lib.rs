//! Hardware-agnostic logic for the invader watchface
//!
//! This crate contains all watchface behavior that does not depend on a
//! display or a clock peripheral:
//!
//! - Calendar keeping and tick-unit-change derivation
//! - Date/time string formatting
//! - The watchface state machine (sprite cycling, hourly ship flight)
//! - The ship flight interpolator
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod face;
pub mod flight;
