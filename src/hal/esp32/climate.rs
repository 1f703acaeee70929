//! DHT22 ambient sensor on a single-wire GPIO.
//!
//! Uses the `embedded-dht-rs` driver over an open-drain input/output pin.
//! The DHT22 protocol returns both values in one bus transaction, so each
//! trait query performs a full read and extracts the requested field.

use crate::traits::ClimateProbe;
use embedded_dht_rs::dht22::Dht22;
use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{AnyIOPin, InputOutput, PinDriver};

/// Error from a DHT22 query (bus timeout, checksum mismatch).
///
/// The controller degrades failed queries to `NaN`, so the error carries
/// no detail beyond the fact of failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dht22ReadError;

/// DHT22 probe on a single GPIO data line.
///
/// # Example
///
/// ```ignore
/// use esp_idf_hal::gpio::IOPin;
/// use esp_idf_hal::peripherals::Peripherals;
/// use rs_irrigate::hal::esp32::Esp32ClimateProbe;
/// use rs_irrigate::traits::ClimateProbe;
///
/// let peripherals = Peripherals::take()?;
/// let mut probe = Esp32ClimateProbe::new(peripherals.pins.gpio4.downgrade())?;
///
/// let temperature = probe.read_temperature()?;
/// let humidity = probe.read_humidity()?;
/// ```
pub struct Esp32ClimateProbe<'d> {
    driver: Dht22<PinDriver<'d, AnyIOPin, InputOutput>, Ets>,
}

impl<'d> Esp32ClimateProbe<'d> {
    /// Creates the probe on the given data pin.
    ///
    /// The line is configured open-drain: the DHT22 protocol has both
    /// sides driving the same wire. The line idles high until the first
    /// query pulls it low.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be configured.
    pub fn new(pin: AnyIOPin) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut line = PinDriver::input_output_od(pin)?;
        line.set_high()?;
        Ok(Self {
            driver: Dht22::new(line, Ets),
        })
    }
}

impl ClimateProbe for Esp32ClimateProbe<'_> {
    type Error = Dht22ReadError;

    fn read_temperature(&mut self) -> Result<f32, Self::Error> {
        self.driver
            .read()
            .map(|reading| reading.temperature)
            .map_err(|_| Dht22ReadError)
    }

    fn read_humidity(&mut self) -> Result<f32, Self::Error> {
        self.driver
            .read()
            .map(|reading| reading.humidity)
            .map_err(|_| Dht22ReadError)
    }
}
