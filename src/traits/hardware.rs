//! Hardware abstraction traits for the sensor and timing lines.
//!
//! This module defines the hardware interfaces that allow rs-irrigate to
//! work across different platforms (ESP32, desktop mocks, etc.).
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`AnalogInput`] | Raw ADC sampling for the capacitive soil probe |
//! | [`ClimateProbe`] | Temperature/humidity queries (DHT22-class sensor) |
//! | [`Clock`] | Time source for `no_std` environments |
//!
//! The valve relay line has no bespoke trait here: the actuator drives an
//! [`embedded_hal::digital::OutputPin`] directly.
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. For ESP32 hardware, use the
//! implementations from `hal::esp32` (requires `esp32` feature).
//!
//! # Example
//!
//! ```rust
//! use rs_irrigate::traits::AnalogInput;
//! use rs_irrigate::hal::MockAnalogInput;
//!
//! let mut line = MockAnalogInput::new();
//! line.queue_sample(2048);
//! assert_eq!(line.read().unwrap(), 2048);
//! ```

/// Analog input line for the soil moisture probe.
///
/// Abstracts a single ADC channel. The reference hardware is a capacitive
/// soil moisture sensor on a 12-bit converter, so samples span 0–4095 with
/// 4095 meaning fully dry and 0 fully wet.
///
/// # Implementation Notes
///
/// - `configure()` performs any one-time line setup (input mode,
///   attenuation). Platforms that configure the channel at construction
///   can leave the default no-op.
/// - `read()` returns one raw sample; no averaging or filtering is expected.
pub trait AnalogInput {
    /// Error type for analog operations.
    type Error;

    /// One-time line setup. Defaults to a no-op.
    fn configure(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Take one raw sample from the line.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Temperature/humidity probe (DHT22-class single-wire sensor).
///
/// The probe answers two independent queries. Each query may fail on its
/// own (checksum error, bus timeout); callers decide how a failed query is
/// represented downstream.
///
/// # Implementation Notes
///
/// - `begin()` performs the driver's one-time setup; most embedded-hal
///   based drivers need none, so the default is a no-op.
/// - Queries are synchronous bounded-latency calls; there is no retry
///   built into this interface.
pub trait ClimateProbe {
    /// Error type for probe queries.
    type Error;

    /// One-time driver setup. Defaults to a no-op.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Query the current temperature in degrees Celsius.
    fn read_temperature(&mut self) -> Result<f32, Self::Error>;

    /// Query the current relative humidity in percent.
    fn read_humidity(&mut self) -> Result<f32, Self::Error>;
}

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds for report-interval gating.
/// On desktop, this can wrap `std::time::Instant`. On embedded,
/// use a hardware timer.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::traits::Clock;
/// use rs_irrigate::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLine {
        sample: u16,
    }

    impl AnalogInput for FixedLine {
        type Error = ();

        fn read(&mut self) -> Result<u16, ()> {
            Ok(self.sample)
        }
    }

    #[test]
    fn analog_input_configure_default_impl() {
        let mut line = FixedLine { sample: 1234 };

        assert!(line.configure().is_ok());
        assert_eq!(line.read().unwrap(), 1234);
    }

    struct FixedProbe;

    impl ClimateProbe for FixedProbe {
        type Error = ();

        fn read_temperature(&mut self) -> Result<f32, ()> {
            Ok(21.5)
        }

        fn read_humidity(&mut self) -> Result<f32, ()> {
            Ok(60.0)
        }
    }

    #[test]
    fn climate_probe_begin_default_impl() {
        let mut probe = FixedProbe;
        assert!(probe.begin().is_ok());
        assert_eq!(probe.read_temperature().unwrap(), 21.5);
        assert_eq!(probe.read_humidity().unwrap(), 60.0);
    }
}
