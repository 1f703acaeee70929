//! Device wrappers owned by the irrigation controller.
//!
//! Each wrapper binds exactly one hardware line and adds the small amount
//! of logic the raw line lacks:
//!
//! - [`SoilMoistureSensor`]: raw ADC sample plus the linear raw→percent
//!   mapping
//! - [`AmbientSensor`]: cached temperature/humidity from a DHT22-class probe
//! - [`ValveActuator`]: open/close writes to the solenoid relay line
//!
//! Ownership is 1:1 for the controller's lifetime; nothing here is shared
//! or reassigned.

pub mod ambient;
pub mod soil;
pub mod valve;

pub use ambient::AmbientSensor;
pub use soil::{moisture_percent_from_raw, SoilMoistureSensor};
pub use valve::{ValveActuator, ValveCommand};
