//! Status report type and wire rendering.
//!
//! The controller emits one [`StatusReport`] per report interval. The wire
//! format is a single JSON line with a fixed field order:
//!
//! ```text
//! {"deviceMacAddress":"AA:BB:CC:DD:EE:FF","operationMode":"AUTO","currentSoilMoisture":47.3,"ambientTemperature":22.5,"ambientHumidity":61.0,"createdAt":"Jul  9 2025 14:02:51"}
//! ```
//!
//! Numeric fields render with one decimal place. `createdAt` is a
//! build-time marker stamped by `build.rs`, identifying the firmware image
//! that produced the report.
//!
//! A `NaN` sensor value renders as `NaN`, which is not valid JSON. This is
//! deliberate passthrough of a failed sensor query rather than a bug to
//! correct: consumers see exactly what the sensor produced.

use core::fmt::Write;

use crate::config::{short_string, ShortString};
use crate::controller::OperationMode;

/// Build timestamp baked into the firmware image (see `build.rs`).
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

/// Maximum rendered length of one report line.
pub const MAX_REPORT_LINE: usize = 256;

/// One status report, emitted at most once per report interval.
///
/// Field order matches the wire format. Implements `serde::Serialize` when
/// the `serde` feature is enabled; the derive produces the same camelCase
/// keys as [`render_json`](Self::render_json).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatusReport {
    /// Device MAC/identity string.
    pub device_mac_address: ShortString,
    /// Operation mode at emission time.
    pub operation_mode: OperationMode,
    /// Soil moisture percentage from the emitting tick.
    pub current_soil_moisture: f32,
    /// Cached ambient temperature in degrees Celsius.
    pub ambient_temperature: f32,
    /// Cached relative humidity in percent.
    pub ambient_humidity: f32,
    /// Build-time marker of the emitting firmware image.
    pub created_at: &'static str,
}

impl StatusReport {
    /// Assemble a report stamped with this build's timestamp.
    pub fn new(
        mac: &str,
        mode: OperationMode,
        moisture: f32,
        temperature: f32,
        humidity: f32,
    ) -> Self {
        Self {
            device_mac_address: short_string(mac),
            operation_mode: mode,
            current_soil_moisture: moisture,
            ambient_temperature: temperature,
            ambient_humidity: humidity,
            created_at: BUILD_TIMESTAMP,
        }
    }

    /// Render the single-line wire format.
    ///
    /// Numerics are formatted with one decimal place. The result fits in
    /// [`MAX_REPORT_LINE`] bytes for any identity the config layer accepts;
    /// an overlong line is truncated rather than erroring.
    pub fn render_json(&self) -> heapless::String<MAX_REPORT_LINE> {
        let mut line = heapless::String::new();
        let _ = write!(
            line,
            "{{\"deviceMacAddress\":\"{}\",\"operationMode\":\"{}\",\"currentSoilMoisture\":{:.1},\"ambientTemperature\":{:.1},\"ambientHumidity\":{:.1},\"createdAt\":\"{}\"}}",
            self.device_mac_address,
            self.operation_mode.as_str(),
            self.current_soil_moisture,
            self.ambient_temperature,
            self.ambient_humidity,
            self.created_at,
        );
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_in_wire_order() {
        let report = StatusReport::new("AA:BB:CC:DD:EE:FF", OperationMode::Auto, 47.25, 22.5, 61.0);
        let line = report.render_json();

        let expected_prefix = "{\"deviceMacAddress\":\"AA:BB:CC:DD:EE:FF\",\"operationMode\":\"AUTO\",\"currentSoilMoisture\":47.2,\"ambientTemperature\":22.5,\"ambientHumidity\":61.0,\"createdAt\":\"";
        assert!(
            line.starts_with(expected_prefix),
            "unexpected line: {line}"
        );
        assert!(line.ends_with("\"}"));
    }

    #[test]
    fn renders_one_decimal_place() {
        let report = StatusReport::new("X", OperationMode::Manual, 33.333, 19.999, 80.0);
        let line = report.render_json();
        assert!(line.contains("\"currentSoilMoisture\":33.3,"));
        assert!(line.contains("\"ambientTemperature\":20.0,"));
        assert!(line.contains("\"ambientHumidity\":80.0,"));
    }

    #[test]
    fn nan_readings_pass_through_verbatim() {
        // A failed sensor query reaches the wire as NaN, by design.
        let report = StatusReport::new("X", OperationMode::Auto, 50.0, f32::NAN, f32::NAN);
        let line = report.render_json();
        assert!(line.contains("\"ambientTemperature\":NaN,"));
        assert!(line.contains("\"ambientHumidity\":NaN,"));
    }

    #[test]
    fn created_at_is_nonempty() {
        assert!(!BUILD_TIMESTAMP.is_empty());
        let report = StatusReport::new("X", OperationMode::Auto, 0.0, 0.0, 0.0);
        assert_eq!(report.created_at, BUILD_TIMESTAMP);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keys_match_wire_names() {
        let report = StatusReport::new("AA:BB", OperationMode::Manual, 10.0, 21.5, 60.5);
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["deviceMacAddress"], "AA:BB");
        assert_eq!(value["operationMode"], "MANUAL");
        assert_eq!(value["currentSoilMoisture"], 10.0);
        assert_eq!(value["ambientTemperature"], 21.5);
        assert_eq!(value["ambientHumidity"], 60.5);
        assert!(value["createdAt"].is_string());
    }
}
