//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `console`: Stdout report sink and `Instant`-backed clock (requires `std`)
//! - `esp32`: ESP32 with capacitive soil probe, DHT22, and valve relay
//!   (requires `esp32` feature)

pub mod mock;

#[cfg(feature = "std")]
pub mod console;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "std")]
pub use console::*;

#[cfg(feature = "esp32")]
pub use esp32::*;
