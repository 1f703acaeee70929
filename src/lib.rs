//! # rs-irrigate
//!
//! A smart irrigation controller with capacitive soil moisture sensing,
//! DHT22 ambient readings, and solenoid valve control.
//!
//! ## Features
//!
//! - **Hardware abstraction**: Traits for the soil ADC line, the
//!   temperature/humidity probe, and the report sink
//! - **Threshold policy**: Valve opens below 40% moisture, closes in the
//!   neutral band, and a safety override above 80% drops to MANUAL mode
//! - **Sticky safety override**: Once excessive moisture forces MANUAL,
//!   only an explicit mode command re-arms automatic control
//! - **Periodic reporting**: One JSON status line per 5-second interval,
//!   fire-and-forget
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware and telemetry abstractions
//! - `devices` - Soil sensor, ambient sensor, and valve wrappers
//! - `controller` - Main controller that ties everything together
//! - `report` - Status report type and wire rendering
//! - `config` - Policy, WiFi, and device configuration
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rs_irrigate::{
//!     IrrigationController, OperationMode,
//!     hal::{MockAnalogInput, MockClimateProbe, MockNetwork, MockReportSink, MockValvePin},
//! };
//!
//! // Create controller with mock hardware
//! let mut soil = MockAnalogInput::new();
//! soil.queue_sample(3000); // ~26.7% moisture, below the dry threshold
//!
//! let mut controller = IrrigationController::new(
//!     "AA:BB:CC:DD:EE:FF",
//!     soil,
//!     MockClimateProbe::new().with_values(22.0, 55.0),
//!     MockValvePin::new(),
//!     MockReportSink::new(),
//! );
//!
//! controller.initialize(&mut MockNetwork::new()).unwrap();
//!
//! // Drive ticks from your main loop with a monotonic timestamp
//! let outcome = controller.tick(0).unwrap();
//! assert_eq!(controller.mode(), OperationMode::Auto);
//! assert!(outcome.valve_command.is_some());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Policy, WiFi, and device configuration.
pub mod config;
/// Main irrigation controller coordinating sensors, valve, and reports.
pub mod controller;
/// Device wrappers for the soil sensor, ambient sensor, and valve.
pub mod devices;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Status report type and wire rendering.
pub mod report;
/// Core traits for hardware abstraction and telemetry.
pub mod traits;

// Re-exports for convenience
pub use controller::{DeviceError, IrrigationController, OperationMode, TickOutcome};
pub use devices::{AmbientSensor, SoilMoistureSensor, ValveActuator, ValveCommand};
pub use report::StatusReport;
pub use traits::{AnalogInput, ClimateProbe, Clock, NetworkLink, NullNetwork, ReportSink};

// Config re-exports
pub use config::{Config, DeviceConfig, IrrigationConfig, WifiConfig};
