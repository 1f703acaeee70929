//! Telemetry abstraction traits for report emission and network bring-up.
//!
//! This module defines the outward-facing seams of the controller: where
//! status reports go, and how the (optional) network transport is brought
//! up during initialization.
//!
//! # Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`ReportSink`] | Fire-and-forget destination for status reports |
//! | [`NetworkLink`] | One-time connectivity bring-up at initialization |
//!
//! # Report Emission
//!
//! Reports are a best-effort side channel: there is no acknowledgment, no
//! retry, and no delivery guarantee. A sink that loses a report loses it
//! silently. The reference sink is a serial console printing one JSON line
//! per report:
//!
//! ```text
//! {"deviceMacAddress":"AA:BB:CC:DD:EE:FF","operationMode":"AUTO",...}
//! ```

use crate::report::StatusReport;

/// Fire-and-forget destination for status reports.
///
/// Implementations render and deliver the report however they like (serial
/// console, MQTT topic, in-memory capture for tests). Emission must not
/// block the control loop indefinitely and must not fail loudly: delivery
/// problems are the sink's to swallow.
///
/// # Example
///
/// ```rust
/// use rs_irrigate::traits::ReportSink;
/// use rs_irrigate::hal::MockReportSink;
/// use rs_irrigate::report::StatusReport;
/// use rs_irrigate::OperationMode;
///
/// let mut sink = MockReportSink::new();
/// let captured = sink.reports();
///
/// sink.emit(&StatusReport::new("AA:BB", OperationMode::Auto, 42.0, 21.5, 60.0));
/// assert_eq!(captured.borrow().len(), 1);
/// ```
pub trait ReportSink {
    /// Deliver one status report, best-effort.
    fn emit(&mut self, report: &StatusReport);
}

/// One-time network bring-up for the telemetry transport.
///
/// The controller invokes this exactly once during initialization. A failed
/// bring-up is logged and ignored: the control loop proceeds without
/// connectivity, matching the reference behavior of never verifying the
/// connection.
pub trait NetworkLink {
    /// Error type for bring-up failures.
    type Error;

    /// Establish connectivity (e.g., WiFi station association + DHCP).
    fn bring_up(&mut self) -> Result<(), Self::Error>;
}

/// A network link that is intentionally absent.
///
/// Use when the device runs without telemetry transport (WiFi disabled,
/// desktop simulation). Bring-up always succeeds and does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNetwork;

impl NetworkLink for NullNetwork {
    type Error = core::convert::Infallible;

    fn bring_up(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
