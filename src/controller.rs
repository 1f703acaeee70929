//! Main irrigation controller that ties everything together.
//!
//! This module provides [`IrrigationController`], the central component
//! that coordinates sensor reads, the valve actuation policy, and periodic
//! status reporting.
//!
//! # Overview
//!
//! The irrigation controller:
//! - Owns one soil moisture sensor, one ambient sensor, and one valve
//! - Switches between AUTO and MANUAL operation modes
//! - Applies the moisture threshold policy to the valve in AUTO mode
//! - Emits a status report at a fixed interval
//!
//! # Example
//!
//! ```rust
//! use rs_irrigate::IrrigationController;
//! use rs_irrigate::hal::{MockAnalogInput, MockClimateProbe, MockReportSink, MockValvePin};
//!
//! let mut soil = MockAnalogInput::new();
//! soil.queue_sample(3500); // dry soil, ~14.5%
//!
//! let mut controller = IrrigationController::new(
//!     "AA:BB:CC:DD:EE:FF",
//!     soil,
//!     MockClimateProbe::new().with_values(22.0, 50.0),
//!     MockValvePin::new(),
//!     MockReportSink::new(),
//! );
//!
//! // Main loop - call tick() at a fixed cadence with a monotonic timestamp
//! let outcome = controller.tick(0).unwrap();
//! assert!(outcome.moisture < 40.0); // below the dry threshold, valve opened
//! ```
//!
//! # Safety Override
//!
//! When moisture exceeds the wet threshold in AUTO mode, the controller
//! closes the valve and forces MANUAL mode. The transition is one-way:
//! only an explicit `set_mode("AUTO")` re-arms automatic control.

use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::config::{short_string, IrrigationConfig, ShortString};
use crate::devices::{AmbientSensor, SoilMoistureSensor, ValveActuator, ValveCommand};
use crate::report::StatusReport;
use crate::traits::{AnalogInput, ClimateProbe, NetworkLink, ReportSink};

/// Operation mode of the irrigation controller.
///
/// In `Auto` mode the controller actuates the valve from the moisture
/// thresholds on every tick. In `Manual` mode it never actuates the valve;
/// actuation must come from an external command outside this crate.
///
/// # Default
///
/// Defaults to [`Auto`](Self::Auto), matching the reference device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OperationMode {
    /// Valve actuation driven by the threshold policy.
    #[default]
    Auto,
    /// No autonomous valve actuation.
    Manual,
}

impl OperationMode {
    /// Returns the mode as its wire string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_irrigate::OperationMode;
    ///
    /// assert_eq!(OperationMode::Auto.as_str(), "AUTO");
    /// assert_eq!(OperationMode::Manual.as_str(), "MANUAL");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Auto => "AUTO",
            OperationMode::Manual => "MANUAL",
        }
    }

    /// Parse a mode-change command.
    ///
    /// Exactly `"AUTO"` and `"MANUAL"` are recognized; the match is
    /// case-sensitive and untrimmed, so `"auto"` or `" AUTO "` return
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_irrigate::OperationMode;
    ///
    /// assert_eq!(OperationMode::from_command("AUTO"), Some(OperationMode::Auto));
    /// assert_eq!(OperationMode::from_command("MANUAL"), Some(OperationMode::Manual));
    /// assert_eq!(OperationMode::from_command("auto"), None);
    /// assert_eq!(OperationMode::from_command("OFF"), None);
    /// ```
    pub fn from_command(s: &str) -> Option<Self> {
        match s {
            "AUTO" => Some(OperationMode::Auto),
            "MANUAL" => Some(OperationMode::Manual),
            _ => None,
        }
    }
}

/// Hardware error surfaced by a control tick or initialization.
///
/// Ambient probe failures are absent on purpose: they degrade to `NaN`
/// readings instead of failing the loop (see
/// [`AmbientSensor`](crate::devices::AmbientSensor)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceError<SE, VE> {
    /// The soil moisture ADC line failed.
    Soil(SE),
    /// The valve relay line failed.
    Valve(VE),
}

impl<SE, VE> fmt::Display for DeviceError<SE, VE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Soil(_) => write!(f, "soil moisture line failed"),
            DeviceError::Valve(_) => write!(f, "valve relay line failed"),
        }
    }
}

/// What one control tick did.
///
/// Returned by [`IrrigationController::tick`] so callers and tests can
/// observe the tick's decisions without valve readback (the actuator is
/// write-only).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Moisture percentage sampled this tick.
    pub moisture: f32,
    /// Valve command issued this tick, if any (`None` in MANUAL mode).
    pub valve_command: Option<ValveCommand>,
    /// Whether the safety override fired this tick.
    pub safety_override: bool,
    /// Whether a status report was emitted this tick.
    pub reported: bool,
}

/// Main irrigation controller.
///
/// Coordinates sensor reads, mode switching, valve actuation, and periodic
/// reporting. This is the primary interface of the crate.
///
/// # Type Parameters
///
/// - `A`: Soil moisture ADC line ([`AnalogInput`])
/// - `C`: Temperature/humidity probe ([`ClimateProbe`])
/// - `P`: Valve relay line ([`OutputPin`])
/// - `R`: Status report destination ([`ReportSink`])
///
/// # Thread Safety
///
/// The controller is single-threaded by design: one logical thread of
/// control drives `tick()` to completion before the next tick begins.
/// Nothing here needs locking.
pub struct IrrigationController<A, C, P, R>
where
    A: AnalogInput,
    C: ClimateProbe,
    P: OutputPin,
    R: ReportSink,
{
    mac: ShortString,
    soil: SoilMoistureSensor<A>,
    ambient: AmbientSensor<C>,
    valve: ValveActuator<P>,
    sink: R,
    mode: OperationMode,
    last_report_ms: u64,
    config: IrrigationConfig,
}

impl<A, C, P, R> IrrigationController<A, C, P, R>
where
    A: AnalogInput,
    C: ClimateProbe,
    P: OutputPin,
    R: ReportSink,
{
    /// Create a controller bound to the given hardware lines.
    ///
    /// The controller takes exclusive ownership of each line for its
    /// lifetime. Mode starts as AUTO; the report timer starts at zero, so
    /// the first report fires once a full interval has elapsed.
    pub fn new(mac: &str, soil_line: A, probe: C, valve_pin: P, sink: R) -> Self {
        Self::with_config(mac, soil_line, probe, valve_pin, sink, IrrigationConfig::default())
    }

    /// Create a controller with explicit policy configuration.
    pub fn with_config(
        mac: &str,
        soil_line: A,
        probe: C,
        valve_pin: P,
        sink: R,
        config: IrrigationConfig,
    ) -> Self {
        Self {
            mac: short_string(mac),
            soil: SoilMoistureSensor::new(soil_line),
            ambient: AmbientSensor::new(probe),
            valve: ValveActuator::new(valve_pin),
            sink,
            mode: OperationMode::Auto,
            last_report_ms: 0,
            config,
        }
    }

    /// One-time bring-up of connectivity and owned devices.
    ///
    /// Network bring-up runs first and is not fatal: a failed link is
    /// logged and the control loop proceeds without connectivity. Soil
    /// and valve line setup errors are fatal; an ambient probe setup
    /// failure is logged and ignored, consistent with how its reads
    /// degrade.
    pub fn initialize<N: NetworkLink>(
        &mut self,
        network: &mut N,
    ) -> Result<(), DeviceError<A::Error, P::Error>> {
        if network.bring_up().is_err() {
            log::warn!("network bring-up failed; continuing without connectivity");
        }

        log::info!("irrigation controller starting (device {})", self.mac);

        self.soil.begin().map_err(DeviceError::Soil)?;
        if self.ambient.begin().is_err() {
            log::warn!("ambient probe setup failed; readings will be NaN until it recovers");
        }
        self.valve.begin().map_err(DeviceError::Valve)?;
        Ok(())
    }

    /// Handle a mode-change command.
    ///
    /// Exactly `"AUTO"` and `"MANUAL"` are accepted; any other value is a
    /// silent no-op with no state change. This call and the safety
    /// override are the only two writers of the mode flag.
    pub fn set_mode(&mut self, requested: &str) {
        if let Some(mode) = OperationMode::from_command(requested) {
            self.mode = mode;
            log::info!("irrigation mode changed to: {}", mode.as_str());
        }
    }

    /// Run one control tick.
    ///
    /// Executes the fixed sequence: read sensors, apply the safety
    /// override, apply the actuation policy, emit a report if the interval
    /// has elapsed. `now_ms` must come from a monotonic clock.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] if the soil ADC read or a valve write
    /// fails. Ambient probe failures do not fail the tick; they surface
    /// as `NaN` in the cached readings and the report.
    pub fn tick(&mut self, now_ms: u64) -> Result<TickOutcome, DeviceError<A::Error, P::Error>> {
        self.soil.read().map_err(DeviceError::Soil)?;
        self.ambient.read();

        let moisture = self.soil.moisture_percent();

        // Safety override: excessive moisture forces MANUAL until re-armed
        let mut safety_override = false;
        if self.mode == OperationMode::Auto && moisture > self.config.wet_threshold {
            self.mode = OperationMode::Manual;
            self.valve.close().map_err(DeviceError::Valve)?;
            safety_override = true;
            log::warn!(
                "excessive moisture ({moisture:.1}%); switching to MANUAL mode"
            );
        }

        // Actuation policy; skipped for the rest of the tick once the
        // override has dropped us to MANUAL
        let valve_command = if self.mode == OperationMode::Auto {
            let cmd = if moisture < self.config.dry_threshold {
                ValveCommand::Open
            } else {
                ValveCommand::Closed
            };
            self.valve.command(cmd).map_err(DeviceError::Valve)?;
            Some(cmd)
        } else if safety_override {
            Some(ValveCommand::Closed)
        } else {
            None
        };

        // Periodic report
        let mut reported = false;
        if now_ms.saturating_sub(self.last_report_ms) >= u64::from(self.config.report_interval_ms) {
            self.last_report_ms = now_ms;
            let report = StatusReport::new(
                self.mac.as_str(),
                self.mode,
                moisture,
                self.ambient.temperature(),
                self.ambient.humidity(),
            );
            self.sink.emit(&report);
            reported = true;
        }

        Ok(TickOutcome {
            moisture,
            valve_command,
            safety_override,
            reported,
        })
    }

    /// Current operation mode.
    pub fn mode(&self) -> OperationMode {
        self.mode
    }

    /// Moisture percentage from the most recent tick's sample.
    pub fn moisture_percent(&self) -> f32 {
        self.soil.moisture_percent()
    }

    /// Last cached ambient temperature in degrees Celsius.
    pub fn temperature(&self) -> f32 {
        self.ambient.temperature()
    }

    /// Last cached relative humidity in percent.
    pub fn humidity(&self) -> f32 {
        self.ambient.humidity()
    }

    /// Device identity used in reports.
    pub fn device_id(&self) -> &str {
        self.mac.as_str()
    }
}
