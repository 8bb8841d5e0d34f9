/// Typed errors produced from native Wi-Fi status codes
use std::fmt;

use thiserror::Error;

use crate::config;

/// Result type alias for WiFi operations
pub type WifiResult<T> = Result<T, WifiError>;

/// Errors a native Wi-Fi status code translates into
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WifiError {
    #[error("Unsupported feature {}", config::WIFI_FEATURE)]
    NotSupported,

    #[error("Permission denied {0}")]
    PermissionDenied(String),

    #[error("{}", config::MSG_POLICY_DISABLED)]
    SecurityRestricted,

    #[error("{}", config::MSG_OUT_OF_MEMORY)]
    OutOfMemory,

    #[error("{}", config::MSG_INVALID_PARAMETER)]
    InvalidParameter,

    /// A native handle involved in the call was null
    #[error("{}", config::MSG_INVALID_INSTANCE)]
    InvalidInstance,

    #[error("{0}")]
    InvalidKey(String),

    #[error("{0}")]
    NowInProgress(String),

    #[error("{}", config::MSG_WPS_TIMEOUT)]
    WpsTimeout,

    /// Every other failure, carrying the status name or raw value
    #[error("{0}")]
    InvalidOperation(String),
}

impl WifiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WifiError::NotSupported => ErrorKind::CapabilityMissing,
            WifiError::PermissionDenied(_) | WifiError::SecurityRestricted => {
                ErrorKind::AccessDenied
            }
            WifiError::OutOfMemory => ErrorKind::ResourceExhausted,
            WifiError::InvalidParameter => ErrorKind::InvalidArgument,
            WifiError::InvalidInstance => ErrorKind::InvalidState,
            WifiError::InvalidKey(_) => ErrorKind::DomainInvalidKey,
            WifiError::NowInProgress(_) => ErrorKind::OperationInProgress,
            WifiError::WpsTimeout => ErrorKind::Timeout,
            WifiError::InvalidOperation(_) => ErrorKind::Generic,
        }
    }
}

/// Coarse classification of a [`WifiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Required hardware or feature flag is absent
    CapabilityMissing,
    /// Permission refused or blocked by device policy
    AccessDenied,
    ResourceExhausted,
    InvalidArgument,
    /// Referenced native handle is null or disposed
    InvalidState,
    /// A Wi-Fi key or credential was rejected
    DomainInvalidKey,
    OperationInProgress,
    Timeout,
    Generic,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::CapabilityMissing => "CapabilityMissing",
            ErrorKind::AccessDenied => "AccessDenied",
            ErrorKind::ResourceExhausted => "ResourceExhausted",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::InvalidState => "InvalidState",
            ErrorKind::DomainInvalidKey => "DomainInvalidKey",
            ErrorKind::OperationInProgress => "OperationInProgress",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to read a status code from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseStatusError {
    #[error("Unknown status name: {0}")]
    UnknownName(String),

    #[error("Invalid status value: {0}")]
    InvalidNumber(String),
}
