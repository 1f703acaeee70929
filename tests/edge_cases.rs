//! Edge case tests: threshold boundaries, report timing, and the
//! documented pass-through behaviors.

use rs_irrigate::devices::soil::moisture_percent_from_raw;
use rs_irrigate::hal::{MockAnalogInput, MockClimateProbe, MockReportSink, MockValvePin};
use rs_irrigate::{IrrigationConfig, IrrigationController, OperationMode, ValveCommand};

fn build_controller(
    soil: MockAnalogInput,
    probe: MockClimateProbe,
    sink: MockReportSink,
    config: IrrigationConfig,
) -> IrrigationController<MockAnalogInput, MockClimateProbe, MockValvePin, MockReportSink> {
    IrrigationController::with_config(
        "AA:BB:CC:DD:EE:FF",
        soil,
        probe,
        MockValvePin::new(),
        sink,
        config,
    )
}

// =============================================================================
// Threshold Boundaries
// =============================================================================

#[test]
fn moisture_equal_to_dry_threshold_closes_valve() {
    // The open condition is strictly `m < dry`, so equality lands in the
    // neutral band. Pin the threshold to the exact mapped percentage to
    // avoid float-representation guesswork.
    let raw = 2457;
    let boundary = moisture_percent_from_raw(raw);

    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw);

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        MockReportSink::new(),
        IrrigationConfig::default().with_dry_threshold(boundary),
    );

    let outcome = controller.tick(0).unwrap();
    assert_eq!(outcome.valve_command, Some(ValveCommand::Closed));
    assert_eq!(controller.mode(), OperationMode::Auto);
}

#[test]
fn moisture_equal_to_wet_threshold_does_not_trip_override() {
    // The override condition is strictly `m > wet`.
    let raw = 819; // maps to exactly 80.0%
    let boundary = moisture_percent_from_raw(raw);

    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw);

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        MockReportSink::new(),
        IrrigationConfig::default().with_wet_threshold(boundary),
    );

    let outcome = controller.tick(0).unwrap();
    assert!(!outcome.safety_override);
    assert_eq!(controller.mode(), OperationMode::Auto);
    assert_eq!(outcome.valve_command, Some(ValveCommand::Closed));
}

#[test]
fn out_of_range_raw_sample_is_not_clamped() {
    // The mapping is deliberately unclamped: a raw sample past full scale
    // produces a negative percentage, which the dry check then treats as
    // very dry soil. This is the documented edge-case policy, not a bug.
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(5000);

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        MockReportSink::new(),
        IrrigationConfig::default(),
    );

    let outcome = controller.tick(0).unwrap();
    assert!(outcome.moisture < 0.0);
    assert_eq!(outcome.valve_command, Some(ValveCommand::Open));
}

// =============================================================================
// Report Timing
// =============================================================================

#[test]
fn first_report_waits_a_full_interval() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(2000);

    let sink = MockReportSink::new();
    let reports = sink.reports();

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        sink,
        IrrigationConfig::default(),
    );

    // No report before the interval has elapsed, even on the very first tick
    for now in [0u64, 1000, 2500, 4999] {
        let outcome = controller.tick(now).unwrap();
        assert!(!outcome.reported, "unexpected report at t={now}");
    }
    assert!(reports.borrow().is_empty());

    // The tick that crosses the boundary emits
    let outcome = controller.tick(5000).unwrap();
    assert!(outcome.reported);
    assert_eq!(reports.borrow().len(), 1);

    // And the window restarts from the emission timestamp
    assert!(!controller.tick(5001).unwrap().reported);
    assert!(!controller.tick(9999).unwrap().reported);
    assert!(controller.tick(10_000).unwrap().reported);
}

#[test]
fn report_window_restarts_at_emission_time() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(2000);

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        MockReportSink::new(),
        IrrigationConfig::default(),
    );

    // A late tick emits; the next window is measured from that tick
    assert!(controller.tick(7000).unwrap().reported);
    assert!(!controller.tick(11_000).unwrap().reported);
    assert!(controller.tick(12_000).unwrap().reported);
}

#[test]
fn custom_report_interval_is_honored() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(2000);

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        MockReportSink::new(),
        IrrigationConfig::default().with_report_interval_ms(1000),
    );

    assert!(!controller.tick(500).unwrap().reported);
    assert!(controller.tick(1000).unwrap().reported);
    assert!(controller.tick(2000).unwrap().reported);
}

// =============================================================================
// Pass-Through Behaviors
// =============================================================================

#[test]
fn failed_ambient_queries_report_nan() {
    // A failed sensor query is passed through uncorrected, not retried or
    // substituted. The report carries NaN, exactly what the sensor gave us.
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(2000);

    let mut probe = MockClimateProbe::new().with_values(20.0, 50.0);
    probe.fail_temperature(true);
    probe.fail_humidity(true);

    let sink = MockReportSink::new();
    let reports = sink.reports();

    let mut controller = build_controller(soil, probe, sink, IrrigationConfig::default());

    controller.tick(5000).unwrap();

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].ambient_temperature.is_nan());
    assert!(reports[0].ambient_humidity.is_nan());

    // The rendered line carries NaN verbatim, so it is not valid JSON.
    // Known boundary behavior of the device, not a defect to correct here.
    let line = reports[0].render_json();
    assert!(line.contains("\"ambientTemperature\":NaN"));
}

#[test]
fn ambient_failure_does_not_disturb_valve_policy() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(3500); // dry

    let mut probe = MockClimateProbe::new();
    probe.fail_temperature(true);
    probe.fail_humidity(true);

    let mut controller = build_controller(
        soil,
        probe,
        MockReportSink::new(),
        IrrigationConfig::default(),
    );

    let outcome = controller.tick(0).unwrap();
    assert_eq!(outcome.valve_command, Some(ValveCommand::Open));
}

#[test]
fn override_and_report_in_the_same_tick_reports_manual() {
    // When the override fires on a reporting tick, the report must carry
    // the post-override mode: the sequence is read, override, actuate,
    // report.
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(400); // ~90% moisture

    let sink = MockReportSink::new();
    let reports = sink.reports();

    let mut controller = build_controller(
        soil,
        MockClimateProbe::new(),
        sink,
        IrrigationConfig::default(),
    );

    let outcome = controller.tick(5000).unwrap();
    assert!(outcome.safety_override);
    assert!(outcome.reported);
    assert_eq!(reports.borrow()[0].operation_mode, OperationMode::Manual);
}
