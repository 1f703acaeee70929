//! WiFi connection management for ESP32.
//!
//! Provides synchronous WiFi station mode bring-up using esp-idf-svc. The
//! driver is configured at construction; association and DHCP run in
//! [`NetworkLink::bring_up`], where the controller treats failure as
//! non-fatal.
//!
//! # Example
//!
//! ```ignore
//! use rs_irrigate::hal::esp32::Esp32Wifi;
//! use rs_irrigate::config::WifiConfig;
//! use rs_irrigate::traits::NetworkLink;
//!
//! let config = WifiConfig::default(); // Wokwi guest network
//! let mut wifi = Esp32Wifi::new(modem, sysloop, nvs, &config)?;
//! if wifi.bring_up().is_ok() {
//!     log::info!("IP: {:?}", wifi.ip_addr());
//! }
//! ```

use crate::config::WifiConfig;
use crate::traits::NetworkLink;
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use std::net::Ipv4Addr;

/// WiFi station link for ESP32.
///
/// Construction configures station mode with the given credentials but
/// does not connect; connection happens in [`NetworkLink::bring_up`].
pub struct Esp32Wifi<'a> {
    wifi: BlockingWifi<EspWifi<'a>>,
    ssid: heapless::String<32>,
}

impl<'a> Esp32Wifi<'a> {
    /// Create and configure the WiFi driver in station mode.
    ///
    /// # Errors
    ///
    /// Returns an error if driver initialization or configuration fails.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: Option<EspDefaultNvsPartition>,
        config: &WifiConfig,
    ) -> anyhow::Result<Self> {
        let esp_wifi = EspWifi::new(modem, sysloop.clone(), nvs)?;
        let mut wifi = BlockingWifi::wrap(esp_wifi, sysloop)?;

        // esp-idf caps SSIDs at 32 and passwords at 64 bytes
        let mut ssid_buf: heapless::String<32> = heapless::String::new();
        let _ = ssid_buf.push_str(config.ssid.as_str());

        let mut pass_buf: heapless::String<64> = heapless::String::new();
        let _ = pass_buf.push_str(config.password.as_str());

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: ssid_buf.clone(),
            password: pass_buf,
            ..Default::default()
        }))?;

        Ok(Self {
            wifi,
            ssid: ssid_buf,
        })
    }

    /// Get the current IP address, if connected.
    pub fn ip_addr(&self) -> Option<Ipv4Addr> {
        self.wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| info.ip)
    }

    /// Check if WiFi is connected.
    pub fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }

    /// Disconnect from the current network.
    pub fn disconnect(&mut self) -> anyhow::Result<()> {
        self.wifi.disconnect()?;
        Ok(())
    }

    /// MAC address of the station interface, formatted for reports.
    pub fn mac_string(&self) -> heapless::String<17> {
        use core::fmt::Write;

        let mut out: heapless::String<17> = heapless::String::new();
        if let Ok(mac) = self.wifi.wifi().sta_netif().get_mac() {
            let _ = write!(
                out,
                "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
                mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
            );
        }
        out
    }
}

impl NetworkLink for Esp32Wifi<'_> {
    type Error = esp_idf_svc::sys::EspError;

    fn bring_up(&mut self) -> Result<(), Self::Error> {
        log::info!("wifi: connecting to '{}'", self.ssid);
        self.wifi.start()?;
        self.wifi.connect()?;
        self.wifi.wait_netif_up()?;

        if let Ok(ip_info) = self.wifi.wifi().sta_netif().get_ip_info() {
            log::info!("wifi: connected, ip {}", ip_info.ip);
        }
        Ok(())
    }
}
