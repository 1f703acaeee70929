//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for all hardware and telemetry
//! traits, enabling development and testing on desktop without physical
//! hardware.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockAnalogInput`] | [`AnalogInput`] | Scripted raw soil samples |
//! | [`MockClimateProbe`] | [`ClimateProbe`] | Settable temp/humidity and failures |
//! | [`MockValvePin`] | [`OutputPin`] | Observable relay line level |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//! | [`MockReportSink`] | [`ReportSink`] | Captures emitted reports |
//! | [`MockNetwork`] | [`NetworkLink`] | Scripted bring-up success/failure |
//!
//! # Example
//!
//! ```rust
//! use rs_irrigate::IrrigationController;
//! use rs_irrigate::hal::{MockAnalogInput, MockClimateProbe, MockReportSink, MockValvePin};
//!
//! let mut soil = MockAnalogInput::new();
//! soil.queue_sample(1000); // wet-ish, ~75.6%
//!
//! let pin = MockValvePin::new();
//! let level = pin.level_handle();
//!
//! let mut controller = IrrigationController::new(
//!     "AA:BB:CC:DD:EE:FF",
//!     soil,
//!     MockClimateProbe::new().with_values(22.0, 50.0),
//!     pin,
//!     MockReportSink::new(),
//! );
//!
//! controller.tick(0).unwrap();
//! assert!(!level.get()); // neutral band, valve commanded closed
//! ```
//!
//! [`AnalogInput`]: crate::traits::AnalogInput
//! [`ClimateProbe`]: crate::traits::ClimateProbe
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`Clock`]: crate::traits::Clock
//! [`ReportSink`]: crate::traits::ReportSink
//! [`NetworkLink`]: crate::traits::NetworkLink

use crate::report::StatusReport;
use crate::traits::{AnalogInput, ClimateProbe, Clock, NetworkLink, ReportSink};

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::convert::Infallible;

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock analog input for the soil moisture line.
///
/// Queue raw samples to script a moisture curve; when the queue runs dry,
/// the last sample repeats, so a single queued value serves any number of
/// ticks.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockAnalogInput;
/// use rs_irrigate::traits::AnalogInput;
///
/// let mut line = MockAnalogInput::new();
/// line.queue_sample(100);
/// line.queue_sample(200);
///
/// assert_eq!(line.read().unwrap(), 100);
/// assert_eq!(line.read().unwrap(), 200);
/// assert_eq!(line.read().unwrap(), 200); // last sample repeats
/// ```
#[derive(Debug, Default)]
pub struct MockAnalogInput {
    queue: VecDeque<u16>,
    last: u16,
    fail_next: bool,
    /// Number of times `read` was called.
    pub read_count: usize,
}

impl MockAnalogInput {
    /// Creates a new mock line reading 0 until a sample is queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one raw sample (FIFO order).
    pub fn queue_sample(&mut self, raw: u16) {
        self.queue.push_back(raw);
    }

    /// Queue several raw samples.
    pub fn queue_samples(&mut self, raws: &[u16]) {
        self.queue.extend(raws.iter().copied());
    }

    /// Make the next `read()` call fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl AnalogInput for MockAnalogInput {
    type Error = ();

    fn read(&mut self) -> Result<u16, ()> {
        self.read_count += 1;
        if self.fail_next {
            self.fail_next = false;
            return Err(());
        }
        if let Some(raw) = self.queue.pop_front() {
            self.last = raw;
        }
        Ok(self.last)
    }
}

/// Mock temperature/humidity probe.
///
/// Values are settable at any time; each query can be failed
/// independently to exercise the NaN degradation path.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockClimateProbe;
/// use rs_irrigate::traits::ClimateProbe;
///
/// let mut probe = MockClimateProbe::new().with_values(23.4, 55.0);
/// assert_eq!(probe.read_temperature().unwrap(), 23.4);
///
/// probe.fail_humidity(true);
/// assert!(probe.read_humidity().is_err());
/// ```
#[derive(Debug)]
pub struct MockClimateProbe {
    temperature: f32,
    humidity: f32,
    temperature_fails: bool,
    humidity_fails: bool,
}

impl MockClimateProbe {
    /// Creates a probe reporting 0.0 for both values.
    pub fn new() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            temperature_fails: false,
            humidity_fails: false,
        }
    }

    /// Builder: set both readings.
    pub fn with_values(mut self, temperature: f32, humidity: f32) -> Self {
        self.temperature = temperature;
        self.humidity = humidity;
        self
    }

    /// Update both readings in place.
    pub fn set_values(&mut self, temperature: f32, humidity: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
    }

    /// Make temperature queries fail (persistently) or recover.
    pub fn fail_temperature(&mut self, fail: bool) {
        self.temperature_fails = fail;
    }

    /// Make humidity queries fail (persistently) or recover.
    pub fn fail_humidity(&mut self, fail: bool) {
        self.humidity_fails = fail;
    }
}

impl Default for MockClimateProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateProbe for MockClimateProbe {
    type Error = ();

    fn read_temperature(&mut self) -> Result<f32, ()> {
        if self.temperature_fails {
            Err(())
        } else {
            Ok(self.temperature)
        }
    }

    fn read_humidity(&mut self) -> Result<f32, ()> {
        if self.humidity_fails {
            Err(())
        } else {
            Ok(self.humidity)
        }
    }
}

/// Mock relay pin for the valve line.
///
/// Implements [`embedded_hal::digital::OutputPin`]. The line level is held
/// in a shared cell so tests can keep a handle after the pin moves into
/// the actuator.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockValvePin;
/// use embedded_hal::digital::OutputPin;
///
/// let mut pin = MockValvePin::new();
/// let level = pin.level_handle();
///
/// pin.set_high().unwrap();
/// assert!(level.get());
/// pin.set_low().unwrap();
/// assert!(!level.get());
/// ```
#[derive(Debug)]
pub struct MockValvePin {
    level: Rc<Cell<bool>>,
    writes: Rc<Cell<u32>>,
}

impl MockValvePin {
    /// Creates a pin starting low.
    pub fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    /// Creates a pin starting high, to simulate a floating line before
    /// `begin()` forces the fail-safe level.
    pub fn new_high() -> Self {
        let pin = Self::new();
        pin.level.set(true);
        pin
    }

    /// Shared handle on the current line level.
    pub fn level_handle(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.level)
    }

    /// Shared handle on the number of writes performed.
    pub fn write_count_handle(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.writes)
    }
}

impl Default for MockValvePin {
    fn default() -> Self {
        Self::new()
    }
}

impl embedded_hal::digital::ErrorType for MockValvePin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockValvePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.level.set(false);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.level.set(true);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockClock;
/// use rs_irrigate::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug, Default)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

// ============================================================================
// Telemetry Mocks
// ============================================================================

/// Mock report sink that captures every emitted report.
///
/// The capture buffer is shared so tests can keep a handle after the sink
/// moves into the controller.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockReportSink;
/// use rs_irrigate::report::StatusReport;
/// use rs_irrigate::traits::ReportSink;
/// use rs_irrigate::OperationMode;
///
/// let mut sink = MockReportSink::new();
/// let captured = sink.reports();
///
/// sink.emit(&StatusReport::new("X", OperationMode::Auto, 1.0, 2.0, 3.0));
/// assert_eq!(captured.borrow().len(), 1);
/// assert_eq!(captured.borrow()[0].current_soil_moisture, 1.0);
/// ```
#[derive(Debug, Default)]
pub struct MockReportSink {
    reports: Rc<RefCell<Vec<StatusReport>>>,
}

impl MockReportSink {
    /// Creates a sink with an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle on the captured reports.
    pub fn reports(&self) -> Rc<RefCell<Vec<StatusReport>>> {
        Rc::clone(&self.reports)
    }
}

impl ReportSink for MockReportSink {
    fn emit(&mut self, report: &StatusReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}

/// Mock network link with scripted bring-up behavior.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::hal::MockNetwork;
/// use rs_irrigate::traits::NetworkLink;
///
/// let mut net = MockNetwork::new();
/// assert!(net.bring_up().is_ok());
/// assert_eq!(net.attempts, 1);
///
/// let mut down = MockNetwork::failing();
/// assert!(down.bring_up().is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockNetwork {
    /// Number of bring-up attempts made.
    pub attempts: u32,
    fail: bool,
}

impl MockNetwork {
    /// Creates a link whose bring-up succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a link whose bring-up always fails.
    pub fn failing() -> Self {
        Self {
            attempts: 0,
            fail: true,
        }
    }
}

impl NetworkLink for MockNetwork {
    type Error = ();

    fn bring_up(&mut self) -> Result<(), ()> {
        self.attempts += 1;
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}
