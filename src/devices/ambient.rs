//! Ambient temperature/humidity sensor wrapper.
//!
//! Wraps one DHT22-class probe and caches the two most recent scalar
//! results. A failed query degrades to `NaN` rather than failing the
//! control tick, mirroring the behavior of the common Arduino DHT library
//! the reference hardware ships with.

use crate::traits::ClimateProbe;

/// Ambient sensor caching the last temperature and humidity values.
///
/// `read()` issues the two probe queries and stores each result
/// independently; `temperature()` and `humidity()` return the cached
/// values without triggering a new read. Before the first successful
/// query, both values are `NaN`.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::devices::AmbientSensor;
/// use rs_irrigate::hal::MockClimateProbe;
///
/// let probe = MockClimateProbe::new().with_values(23.4, 55.0);
/// let mut sensor = AmbientSensor::new(probe);
///
/// assert!(sensor.temperature().is_nan());
/// sensor.read();
/// assert_eq!(sensor.temperature(), 23.4);
/// assert_eq!(sensor.humidity(), 55.0);
/// ```
#[derive(Debug)]
pub struct AmbientSensor<C: ClimateProbe> {
    probe: C,
    temperature: f32,
    humidity: f32,
}

impl<C: ClimateProbe> AmbientSensor<C> {
    /// Create a sensor bound to the given probe.
    pub fn new(probe: C) -> Self {
        Self {
            probe,
            temperature: f32::NAN,
            humidity: f32::NAN,
        }
    }

    /// One-time driver setup.
    pub fn begin(&mut self) -> Result<(), C::Error> {
        self.probe.begin()
    }

    /// Query temperature and humidity, overwriting the cached values.
    ///
    /// Each query is stored independently: one failing does not prevent
    /// the other from updating. A failed query stores `NaN`, which then
    /// flows uncorrected into reports. There is no retry.
    pub fn read(&mut self) {
        self.temperature = match self.probe.read_temperature() {
            Ok(t) => t,
            Err(_) => {
                log::debug!("ambient temperature query failed");
                f32::NAN
            }
        };
        self.humidity = match self.probe.read_humidity() {
            Ok(h) => h,
            Err(_) => {
                log::debug!("ambient humidity query failed");
                f32::NAN
            }
        };
    }

    /// Last stored temperature in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Last stored relative humidity in percent.
    pub fn humidity(&self) -> f32 {
        self.humidity
    }
}


#[cfg(test)]
impl<C: ClimateProbe> AmbientSensor<C> {
    fn probe_mut(&mut self) -> &mut C {
        &mut self.probe
    }
}
