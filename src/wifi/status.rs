use std::str::FromStr;

use crate::config::{MIN_PLATFORM_ERROR, WIFI_ERROR_BASE, WIFI_ERROR_MASK};
use crate::error::ParseStatusError;

/// Status codes returned by the native Wi-Fi API
///
/// Shared platform codes are errno based. Wi-Fi specific codes live in a
/// private block at `WIFI_ERROR_BASE | offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StatusCode {
    None = 0,
    InvalidParameter = -22,
    OutOfMemory = -12,
    InvalidOperation = -38,
    AddressFamilyNotSupported = -97,
    OperationFailed = WIFI_ERROR_BASE | 0x01,
    NoConnection = WIFI_ERROR_BASE | 0x02,
    NowInProgress = -115,
    AlreadyExists = WIFI_ERROR_BASE | 0x03,
    OperationAborted = WIFI_ERROR_BASE | 0x04,
    DhcpFailed = WIFI_ERROR_BASE | 0x05,
    InvalidKey = WIFI_ERROR_BASE | 0x06,
    NoReply = WIFI_ERROR_BASE | 0x07,
    SecurityRestricted = WIFI_ERROR_BASE | 0x08,
    WpsTimeout = WIFI_ERROR_BASE | 0x10,
    PermissionDenied = -13,
    NotSupported = MIN_PLATFORM_ERROR + 2,
}

impl StatusCode {
    pub const ALL: [StatusCode; 17] = [
        StatusCode::None,
        StatusCode::InvalidParameter,
        StatusCode::OutOfMemory,
        StatusCode::InvalidOperation,
        StatusCode::AddressFamilyNotSupported,
        StatusCode::OperationFailed,
        StatusCode::NoConnection,
        StatusCode::NowInProgress,
        StatusCode::AlreadyExists,
        StatusCode::OperationAborted,
        StatusCode::DhcpFailed,
        StatusCode::InvalidKey,
        StatusCode::NoReply,
        StatusCode::SecurityRestricted,
        StatusCode::WpsTimeout,
        StatusCode::PermissionDenied,
        StatusCode::NotSupported,
    ];

    /// Look up a raw code: shared platform range first, then the private
    /// Wi-Fi block.
    pub fn from_raw(code: i32) -> Option<Self> {
        Self::from_shared(code).or_else(|| Self::from_private(code))
    }

    fn from_shared(code: i32) -> Option<Self> {
        let status = match code {
            0 => StatusCode::None,
            -22 => StatusCode::InvalidParameter,
            -12 => StatusCode::OutOfMemory,
            -38 => StatusCode::InvalidOperation,
            -97 => StatusCode::AddressFamilyNotSupported,
            -115 => StatusCode::NowInProgress,
            -13 => StatusCode::PermissionDenied,
            c if c == MIN_PLATFORM_ERROR + 2 => StatusCode::NotSupported,
            _ => return None,
        };
        Some(status)
    }

    fn from_private(code: i32) -> Option<Self> {
        if code & WIFI_ERROR_MASK != WIFI_ERROR_BASE {
            return None;
        }
        let status = match code & !WIFI_ERROR_MASK {
            0x01 => StatusCode::OperationFailed,
            0x02 => StatusCode::NoConnection,
            0x03 => StatusCode::AlreadyExists,
            0x04 => StatusCode::OperationAborted,
            0x05 => StatusCode::DhcpFailed,
            0x06 => StatusCode::InvalidKey,
            0x07 => StatusCode::NoReply,
            0x08 => StatusCode::SecurityRestricted,
            0x10 => StatusCode::WpsTimeout,
            _ => return None,
        };
        Some(status)
    }

    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Member name without the native layer's `Error` suffix
    /// (`DhcpFailed`, not `DhcpFailedError`)
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::None => "None",
            StatusCode::InvalidParameter => "InvalidParameter",
            StatusCode::OutOfMemory => "OutOfMemory",
            StatusCode::InvalidOperation => "InvalidOperation",
            StatusCode::AddressFamilyNotSupported => "AddressFamilyNotSupported",
            StatusCode::OperationFailed => "OperationFailed",
            StatusCode::NoConnection => "NoConnection",
            StatusCode::NowInProgress => "NowInProgress",
            StatusCode::AlreadyExists => "AlreadyExists",
            StatusCode::OperationAborted => "OperationAborted",
            StatusCode::DhcpFailed => "DhcpFailed",
            StatusCode::InvalidKey => "InvalidKey",
            StatusCode::NoReply => "NoReply",
            StatusCode::SecurityRestricted => "SecurityRestricted",
            StatusCode::WpsTimeout => "WpsTimeout",
            StatusCode::PermissionDenied => "PermissionDenied",
            StatusCode::NotSupported => "NotSupported",
        }
    }
}

impl FromStr for StatusCode {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCode::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError::UnknownName(s.to_string()))
    }
}

/// Name of the status member, or the decimal value when it is unmapped
pub fn status_name(code: i32) -> String {
    match StatusCode::from_raw(code) {
        Some(status) => status.name().to_string(),
        None => code.to_string(),
    }
}

/// Read a raw status from a member name, a decimal, or `0x` hex
pub fn parse_status(s: &str) -> Result<i32, ParseStatusError> {
    let s = s.trim();
    if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return s.parse::<StatusCode>().map(StatusCode::raw);
    }

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let invalid = || ParseStatusError::InvalidNumber(s.to_string());
    let (radix, body) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // Only the one leading minus above may carry a sign
    if body.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = i64::from_str_radix(body, radix).map_err(|_| invalid())?;

    let value = if negative {
        magnitude.checked_neg().ok_or_else(invalid)?
    } else {
        magnitude
    };
    // Accept unsigned hex spellings such as 0xFE320006 as well
    i32::try_from(value)
        .or_else(|_| u32::try_from(value).map(|v| v as i32))
        .map_err(|_| invalid())
}
