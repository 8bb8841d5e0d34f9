//! Translation of native Wi-Fi driver status codes into typed Rust errors.

pub mod config;
pub mod error;
pub mod wifi;

pub use error::{ErrorKind, ParseStatusError, WifiError, WifiResult};
pub use wifi::{
    Completion, ErrorContext, NativeHandle, PendingCompletion, StatusCode, build_callback_error,
    check, completion_callback, parse_status, pending_completion, raise_on_failure, status_name,
};
