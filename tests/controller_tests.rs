//! Integration tests for the irrigation controller

use rs_irrigate::hal::{
    MockAnalogInput, MockClimateProbe, MockNetwork, MockReportSink, MockValvePin,
};
use rs_irrigate::{IrrigationController, OperationMode, ValveCommand};

/// Raw ADC sample producing the given moisture percentage (inverse of the
/// sensor's linear mapping).
fn raw_for_percent(percent: f32) -> u16 {
    (4095.0 - percent / 100.0 * 4095.0) as u16
}

fn controller_with_moisture(
    percent: f32,
) -> (
    IrrigationController<MockAnalogInput, MockClimateProbe, MockValvePin, MockReportSink>,
    std::rc::Rc<std::cell::Cell<bool>>,
) {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw_for_percent(percent));

    let pin = MockValvePin::new();
    let level = pin.level_handle();

    let controller = IrrigationController::new(
        "AA:BB:CC:DD:EE:FF",
        soil,
        MockClimateProbe::new().with_values(22.0, 55.0),
        pin,
        MockReportSink::new(),
    );
    (controller, level)
}

#[test]
fn dry_soil_opens_valve_in_auto() {
    let (mut controller, level) = controller_with_moisture(25.0);

    let outcome = controller.tick(0).unwrap();

    assert_eq!(outcome.valve_command, Some(ValveCommand::Open));
    assert!(level.get());
    assert_eq!(controller.mode(), OperationMode::Auto);
    assert!(!outcome.safety_override);
}

#[test]
fn neutral_band_closes_valve_in_auto() {
    let (mut controller, level) = controller_with_moisture(55.0);

    let outcome = controller.tick(0).unwrap();

    assert_eq!(outcome.valve_command, Some(ValveCommand::Closed));
    assert!(!level.get());
    assert_eq!(controller.mode(), OperationMode::Auto);
}

#[test]
fn excessive_moisture_forces_manual_and_closes_valve() {
    let (mut controller, level) = controller_with_moisture(85.0);

    let outcome = controller.tick(0).unwrap();

    assert!(outcome.safety_override);
    assert_eq!(outcome.valve_command, Some(ValveCommand::Closed));
    assert!(!level.get());
    assert_eq!(controller.mode(), OperationMode::Manual);
}

#[test]
fn manual_mode_never_actuates() {
    let (mut controller, level) = controller_with_moisture(10.0);
    controller.set_mode("MANUAL");

    let outcome = controller.tick(0).unwrap();

    // Bone-dry soil, but no autonomous actuation in MANUAL
    assert_eq!(outcome.valve_command, None);
    assert!(!level.get());
    assert_eq!(controller.mode(), OperationMode::Manual);
}

#[test]
fn invalid_mode_command_is_silently_ignored() {
    let (mut controller, _level) = controller_with_moisture(55.0);

    controller.set_mode("OFF");
    assert_eq!(controller.mode(), OperationMode::Auto);

    controller.set_mode("MANUAL");
    assert_eq!(controller.mode(), OperationMode::Manual);

    // Still MANUAL after garbage, lowercase, and padded inputs
    controller.set_mode("OFF");
    controller.set_mode("auto");
    controller.set_mode(" AUTO ");
    controller.set_mode("");
    assert_eq!(controller.mode(), OperationMode::Manual);
}

#[test]
fn override_is_sticky_until_rearmed() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw_for_percent(85.0)); // trips the override
    soil.queue_sample(raw_for_percent(10.0)); // dry again; sample repeats

    let pin = MockValvePin::new();
    let level = pin.level_handle();

    let mut controller = IrrigationController::new(
        "AA:BB:CC:DD:EE:FF",
        soil,
        MockClimateProbe::new().with_values(22.0, 55.0),
        pin,
        MockReportSink::new(),
    );

    let outcome = controller.tick(0).unwrap();
    assert!(outcome.safety_override);
    assert_eq!(controller.mode(), OperationMode::Manual);

    // Many dry ticks later, still MANUAL, still no actuation
    for i in 1..20 {
        let outcome = controller.tick(i * 1000).unwrap();
        assert_eq!(controller.mode(), OperationMode::Manual);
        assert_eq!(outcome.valve_command, None);
        assert!(!level.get());
    }

    // Explicit re-arm restores automatic control
    controller.set_mode("AUTO");
    let outcome = controller.tick(21_000).unwrap();
    assert_eq!(controller.mode(), OperationMode::Auto);
    assert_eq!(outcome.valve_command, Some(ValveCommand::Open));
    assert!(level.get());
}

#[test]
fn report_carries_identity_mode_and_readings() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw_for_percent(55.0));

    let sink = MockReportSink::new();
    let reports = sink.reports();

    let mut controller = IrrigationController::new(
        "AA:BB:CC:DD:EE:FF",
        soil,
        MockClimateProbe::new().with_values(21.5, 60.5),
        MockValvePin::new(),
        sink,
    );

    // First report fires once a full interval has elapsed
    controller.tick(5000).unwrap();

    let reports = reports.borrow();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.device_mac_address.as_str(), "AA:BB:CC:DD:EE:FF");
    assert_eq!(report.operation_mode, OperationMode::Auto);
    assert!((report.current_soil_moisture - 55.0).abs() < 0.1);
    assert_eq!(report.ambient_temperature, 21.5);
    assert_eq!(report.ambient_humidity, 60.5);
    assert!(!report.created_at.is_empty());
}

#[test]
fn reports_are_gated_to_the_interval() {
    let mut soil = MockAnalogInput::new();
    soil.queue_sample(raw_for_percent(55.0));

    let sink = MockReportSink::new();
    let reports = sink.reports();

    let mut controller = IrrigationController::new(
        "AA:BB:CC:DD:EE:FF",
        soil,
        MockClimateProbe::new().with_values(22.0, 55.0),
        MockValvePin::new(),
        sink,
    );

    // Tick every 100ms for 20 seconds of simulated time
    let mut emitted = 0;
    for now in (0..=20_000).step_by(100) {
        let outcome = controller.tick(now).unwrap();
        if outcome.reported {
            emitted += 1;
        }
    }

    // t=5000, 10000, 15000, 20000
    assert_eq!(emitted, 4);
    assert_eq!(reports.borrow().len(), 4);
}

#[test]
fn initialize_proceeds_when_network_fails() {
    let (mut controller, level) = controller_with_moisture(25.0);

    let mut network = MockNetwork::failing();
    controller.initialize(&mut network).unwrap();
    assert_eq!(network.attempts, 1);

    // Valve starts closed (fail-safe), loop runs regardless of the network
    assert!(!level.get());
    let outcome = controller.tick(0).unwrap();
    assert_eq!(outcome.valve_command, Some(ValveCommand::Open));
}

#[test]
fn tick_surfaces_soil_line_errors() {
    let mut soil = MockAnalogInput::new();
    soil.fail_next();

    let mut controller = IrrigationController::new(
        "AA:BB:CC:DD:EE:FF",
        soil,
        MockClimateProbe::new(),
        MockValvePin::new(),
        MockReportSink::new(),
    );

    assert!(controller.tick(0).is_err());

    // The next tick recovers once the line does
    assert!(controller.tick(1000).is_ok());
}
