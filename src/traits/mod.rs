//! Trait definitions for hardware abstraction and telemetry.
//!
//! This module defines the core abstractions that allow rs-irrigate to:
//! - Run on different hardware (ESP32, desktop mock)
//! - Deliver status reports to different sinks
//!
//! # Submodules
//!
//! - `hardware`: Analog input, climate probe, clock
//! - `telemetry`: Report sink and network bring-up traits
//!
//! # Hardware Abstraction
//!
//! The key hardware traits are:
//!
//! - [`AnalogInput`]: Raw ADC sampling for the soil moisture probe
//! - [`ClimateProbe`]: Temperature/humidity queries (DHT22)
//! - [`Clock`]: Time source for `no_std` environments
//!
//! The valve relay is driven through [`embedded_hal::digital::OutputPin`]
//! rather than a crate-local trait.

pub mod hardware;
pub mod telemetry;

pub use hardware::*;
pub use telemetry::*;
