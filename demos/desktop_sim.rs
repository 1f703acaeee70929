//! Desktop simulation of a soil dry-out and irrigation cycle.
//!
//! This example runs the controller against mock hardware, scripting a
//! moisture curve that walks through all three policy bands:
//! - dry soil opens the valve,
//! - the neutral band closes it,
//! - saturation trips the safety override into MANUAL mode,
//! - an operator command re-arms AUTO control.
//!
//! Status reports print to stdout as JSON lines, exactly as the device
//! would emit them over serial.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example desktop_sim
//! ```

use rs_irrigate::hal::{ConsoleSink, MockAnalogInput, MockClimateProbe, MockValvePin};
use rs_irrigate::traits::NullNetwork;
use rs_irrigate::{IrrigationController, OperationMode};

/// Simulated tick cadence in milliseconds.
const TICK_MS: u64 = 1000;

fn main() {
    println!("=================================");
    println!("  rs-irrigate Desktop Simulation");
    println!("=================================");
    println!();

    // Scripted moisture curve: dry -> watered -> saturated -> recovering.
    // Raw samples are inverted (4095 = bone dry, 0 = soaked).
    let mut soil = MockAnalogInput::new();
    soil.queue_samples(&[
        3800, 3500, 3100, // dry: valve opens
        2300, 2000, 1800, // neutral band: valve closes
        600, 400, // saturated: safety override fires
        2500, 2500, // drying out again, but the override is sticky
    ]);

    let pin = MockValvePin::new();
    let valve_level = pin.level_handle();

    let mut controller = IrrigationController::new(
        "02:00:C0:FF:EE:01",
        soil,
        MockClimateProbe::new().with_values(24.5, 58.0),
        pin,
        ConsoleSink::new(),
    );

    controller
        .initialize(&mut NullNetwork)
        .expect("mock bring-up cannot fail");

    let mut now_ms = 0u64;
    for step in 0..10 {
        let outcome = controller.tick(now_ms).expect("mock tick cannot fail");

        println!(
            "t={:>5}ms moisture={:>6.1}% mode={:<6} valve={} {}",
            now_ms,
            outcome.moisture,
            controller.mode().as_str(),
            if valve_level.get() { "OPEN" } else { "CLOSED" },
            if outcome.safety_override {
                "<- safety override"
            } else {
                ""
            },
        );

        // Step 8: the operator re-arms automatic control
        if step == 8 {
            println!("operator: set_mode(\"AUTO\")");
            controller.set_mode("AUTO");
        }

        now_ms += TICK_MS;
    }

    assert_eq!(controller.mode(), OperationMode::Auto);
    println!();
    println!("simulation complete");
}
