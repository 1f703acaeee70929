//! ESP32 hardware abstraction layer for the irrigation device.
//!
//! This module provides hardware implementations for an ESP32 dev board
//! driving a capacitive soil moisture probe, a DHT22 ambient sensor, and
//! a solenoid valve behind a relay module.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32 (Wokwi-compatible dev board)
//! - **Soil probe**: capacitive sensor on a 12-bit ADC channel
//! - **Ambient sensor**: DHT22 single-wire temperature/humidity
//! - **Valve**: solenoid behind an active-high relay module
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for the GPIO assignments matching the
//! reference wiring.

mod climate;
mod clock;
mod soil;

pub use climate::{Dht22ReadError, Esp32ClimateProbe};
pub use clock::Esp32Clock;
pub use soil::Esp32SoilInput;

#[cfg(feature = "wifi")]
mod wifi;
#[cfg(feature = "wifi")]
pub use wifi::Esp32Wifi;

/// Pin assignments for the reference wiring.
///
/// These constants match the reference device:
/// - Capacitive soil probe on the GPIO34 ADC channel
/// - DHT22 data line on GPIO4
/// - Valve relay on GPIO12
pub mod pins {
    /// Soil moisture probe analog input (ADC1 channel 6)
    pub const SOIL_ADC: i32 = 34;

    /// DHT22 data line
    pub const DHT_DATA: i32 = 4;

    /// Valve relay output (active high)
    pub const VALVE_RELAY: i32 = 12;
}
