//! ESP32 smart irrigation controller.
//!
//! This is the main entry point for the physical hardware device.
//! It runs a 1 Hz control loop that:
//! - Samples the capacitive soil moisture probe
//! - Reads the DHT22 ambient sensor
//! - Applies the threshold policy to the valve relay
//! - Emits a JSON status line every 5 seconds
//!
//! # Hardware Setup
//!
//! - Soil probe analog output → GPIO34 (ADC1)
//! - DHT22 data line → GPIO4
//! - Valve relay input → GPIO12 (active high)
//!
//! # Build
//!
//! ```bash
//! # With WiFi bring-up for telemetry transport
//! cargo build --features wifi --target xtensa-esp32-espidf
//!
//! # Credentials via compile-time env vars
//! WIFI_SSID=mynet WIFI_PASSWORD=secret cargo build --features wifi ...
//! ```

use esp_idf_hal::adc::oneshot::AdcDriver;
use esp_idf_hal::gpio::{IOPin, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::log::EspLogger;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use rs_irrigate::hal::esp32::{Esp32ClimateProbe, Esp32Clock, Esp32SoilInput, Esp32Wifi};
use rs_irrigate::hal::ConsoleSink;
use rs_irrigate::traits::{Clock, NullNetwork};
use rs_irrigate::{Config, IrrigationController, WifiConfig};
use std::thread;
use std::time::Duration;

/// Main loop interval in milliseconds (1Hz)
const LOOP_INTERVAL_MS: u64 = 1000;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    EspLogger::initialize_default();

    log::info!("================================");
    log::info!("  rs-irrigate controller");
    log::info!("================================");

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = Config::default().with_wifi(
        WifiConfig::default()
            .with_ssid(option_env!("WIFI_SSID").unwrap_or("Wokwi-GUEST"))
            .with_password(option_env!("WIFI_PASSWORD").unwrap_or("")),
    );

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize WiFi driver (connection happens in controller bring-up)
    // =========================================================================
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;

    let mut wifi = if config.wifi.enabled && config.wifi.is_configured() {
        Some(Esp32Wifi::new(
            peripherals.modem,
            sysloop,
            Some(nvs),
            &config.wifi,
        )?)
    } else {
        log::info!("[SKIP] WiFi not configured");
        None
    };

    // Device identity: station MAC when WiFi is present, config fallback otherwise
    let mac = match wifi.as_ref() {
        Some(w) => {
            let mac = w.mac_string();
            String::from(mac.as_str())
        }
        None => String::from(config.device.mac.as_str()),
    };
    log::info!("[OK] Device identity: {mac}");

    // =========================================================================
    // Initialize soil probe (capacitive sensor on GPIO34 ADC)
    // =========================================================================
    let adc1 = AdcDriver::new(peripherals.adc1)?;
    let soil = Esp32SoilInput::new(&adc1, peripherals.pins.gpio34)?;
    log::info!("[OK] Soil probe initialized (GPIO34 ADC)");

    // =========================================================================
    // Initialize DHT22 ambient sensor (GPIO4)
    // =========================================================================
    let probe = Esp32ClimateProbe::new(peripherals.pins.gpio4.downgrade())?;
    log::info!("[OK] DHT22 initialized (GPIO4)");

    // =========================================================================
    // Initialize valve relay (GPIO12, active high)
    // =========================================================================
    let valve_pin = PinDriver::output(peripherals.pins.gpio12)?;
    log::info!("[OK] Valve relay initialized (GPIO12)");

    // =========================================================================
    // Initialize Clock and Controller
    // =========================================================================
    let clock = Esp32Clock::new();
    let mut controller = IrrigationController::with_config(
        &mac,
        soil,
        probe,
        valve_pin,
        ConsoleSink::new(),
        config.irrigation,
    );

    match wifi.as_mut() {
        Some(link) => controller.initialize(link),
        None => controller.initialize(&mut NullNetwork),
    }
    .map_err(|e| anyhow::anyhow!("device bring-up failed: {e}"))?;

    log::info!("Starting control loop (1Hz)...");

    // =========================================================================
    // Main Control Loop (1Hz)
    // =========================================================================
    loop {
        let now = clock.now_ms();

        if let Err(e) = controller.tick(now) {
            log::error!("control tick failed: {e}");
        }

        thread::sleep(Duration::from_millis(LOOP_INTERVAL_MS));
    }
}
