//! Capacitive soil moisture probe on the ESP32 ADC.
//!
//! The probe outputs an analog voltage inversely proportional to soil
//! moisture; GPIO34 is the reference input (ADC1 channel 6). Full 11 dB
//! attenuation keeps the probe's output span inside the converter range.

use crate::traits::AnalogInput;
use esp_idf_hal::adc::attenuation::DB_11;
use esp_idf_hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_hal::adc::ADC1;
use esp_idf_hal::gpio::Gpio34;
use esp_idf_hal::peripheral::Peripheral;

/// Soil moisture ADC input on GPIO34.
///
/// # Example
///
/// ```ignore
/// use esp_idf_hal::adc::oneshot::AdcDriver;
/// use esp_idf_hal::peripherals::Peripherals;
/// use rs_irrigate::hal::esp32::Esp32SoilInput;
/// use rs_irrigate::traits::AnalogInput;
///
/// let peripherals = Peripherals::take()?;
/// let adc1 = AdcDriver::new(peripherals.adc1)?;
/// let mut soil = Esp32SoilInput::new(&adc1, peripherals.pins.gpio34)?;
///
/// let raw = soil.read()?; // 0 (wet) to 4095 (dry)
/// ```
pub struct Esp32SoilInput<'d> {
    channel: AdcChannelDriver<'d, Gpio34, &'d AdcDriver<'d, ADC1>>,
}

impl<'d> Esp32SoilInput<'d> {
    /// Creates the soil probe input channel.
    ///
    /// # Arguments
    ///
    /// * `adc` - Reference to the ADC1 driver (must outlive this struct)
    /// * `pin` - GPIO34, the probe's analog output
    ///
    /// # Errors
    ///
    /// Returns an error if ADC channel initialization fails.
    pub fn new(
        adc: &'d AdcDriver<'d, ADC1>,
        pin: impl Peripheral<P = Gpio34> + 'd,
    ) -> Result<Self, esp_idf_hal::sys::EspError> {
        let config = AdcChannelConfig {
            attenuation: DB_11,
            ..Default::default()
        };
        let channel = AdcChannelDriver::new(adc, pin, &config)?;
        Ok(Self { channel })
    }
}

impl AnalogInput for Esp32SoilInput<'_> {
    type Error = esp_idf_hal::sys::EspError;

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.channel.read()
    }
}
