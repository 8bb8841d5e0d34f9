/// Centralized constants for the Wi-Fi status translation layer

// Feature flag named when the platform reports the capability is missing
pub const WIFI_FEATURE: &str = "http://tizen.org/feature/network.wifi";

// Code spaces
pub const MIN_PLATFORM_ERROR: i32 = -0x4000_0000;
pub const WIFI_ERROR_BASE: i32 = -0x01CE_0000;
/// Bits that identify the private Wi-Fi block (`WIFI_ERROR_BASE | offset`)
pub const WIFI_ERROR_MASK: i32 = !0xFFFF;

// Fixed messages
pub const MSG_POLICY_DISABLED: &str = "Disabled by the device policy";
pub const MSG_OUT_OF_MEMORY: &str = "Out of memory";
pub const MSG_INVALID_PARAMETER: &str = "Invalid parameter";
pub const MSG_INVALID_INSTANCE: &str =
    "Invalid instance (object may have been disposed or released)";
pub const MSG_WPS_TIMEOUT: &str = "WPS connection is timed out";

// Logging
pub const LOG_TARGET: &str = "wifi";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";
