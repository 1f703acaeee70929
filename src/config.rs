//! Shared configuration system for desktop and ESP32.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`. Policy thresholds and the WiFi
//! credentials are explicit configuration passed at construction, not
//! process-wide globals.
//!
//! # Example
//!
//! ```rust
//! use rs_irrigate::config::{Config, IrrigationConfig, WifiConfig};
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // Or customize
//! let config = Config::default()
//!     .with_wifi(WifiConfig::default().with_ssid("greenhouse-net"))
//!     .with_irrigation(IrrigationConfig::default().with_report_interval_ms(10_000));
//! ```

use heapless::String as HString;

/// Maximum length for short config strings (identities, SSIDs)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// WiFi connection configuration
    pub wifi: WifiConfig,
    /// Device identification
    pub device: DeviceConfig,
    /// Irrigation policy configuration
    pub irrigation: IrrigationConfig,
}

impl Config {
    /// Set WiFi configuration
    pub fn with_wifi(mut self, wifi: WifiConfig) -> Self {
        self.wifi = wifi;
        self
    }

    /// Set device configuration
    pub fn with_device(mut self, device: DeviceConfig) -> Self {
        self.device = device;
        self
    }

    /// Set irrigation policy configuration
    pub fn with_irrigation(mut self, irrigation: IrrigationConfig) -> Self {
        self.irrigation = irrigation;
        self
    }
}

// ============================================================================
// Irrigation Config
// ============================================================================

/// Irrigation policy configuration.
///
/// The defaults are the tested reference behavior; overriding them changes
/// the policy but not the control sequence.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrrigationConfig {
    /// Below this moisture percentage the valve opens (AUTO mode)
    pub dry_threshold: f32,
    /// Above this moisture percentage the safety override fires
    pub wet_threshold: f32,
    /// Minimum interval between status reports in milliseconds
    pub report_interval_ms: u32,
}

impl Default for IrrigationConfig {
    fn default() -> Self {
        Self {
            dry_threshold: 40.0,
            wet_threshold: 80.0,
            report_interval_ms: 5000,
        }
    }
}

impl IrrigationConfig {
    /// Set the dry/open threshold
    pub fn with_dry_threshold(mut self, percent: f32) -> Self {
        self.dry_threshold = percent;
        self
    }

    /// Set the wet/safety threshold
    pub fn with_wet_threshold(mut self, percent: f32) -> Self {
        self.wet_threshold = percent;
        self
    }

    /// Set the report interval
    pub fn with_report_interval_ms(mut self, ms: u32) -> Self {
        self.report_interval_ms = ms;
        self
    }
}

// ============================================================================
// WiFi Config
// ============================================================================

/// WiFi connection configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WifiConfig {
    /// WiFi network SSID
    pub ssid: ShortString,
    /// WiFi password
    pub password: ShortString,
    /// Whether WiFi is enabled
    pub enabled: bool,
}

impl Default for WifiConfig {
    fn default() -> Self {
        // Wokwi simulation defaults: open guest network
        Self {
            ssid: short_string("Wokwi-GUEST"),
            password: ShortString::new(),
            enabled: true,
        }
    }
}

impl WifiConfig {
    /// Set the SSID
    pub fn with_ssid(mut self, ssid: &str) -> Self {
        self.ssid = short_string(ssid);
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = short_string(password);
        self
    }

    /// Enable or disable WiFi
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Check if WiFi credentials are configured
    pub fn is_configured(&self) -> bool {
        !self.ssid.is_empty()
    }
}

// ============================================================================
// Device Config
// ============================================================================

/// Device identification configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// Human-readable device name
    pub name: ShortString,
    /// Device MAC/identity used in reports (empty = derive from hardware)
    pub mac: ShortString,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: short_string("rs-irrigate"),
            mac: ShortString::new(),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = short_string(name);
        self
    }

    /// Set the device MAC/identity
    pub fn with_mac(mut self, mac: &str) -> Self {
        self.mac = short_string(mac);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
