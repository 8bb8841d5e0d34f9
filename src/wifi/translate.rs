use crate::config::LOG_TARGET;
use crate::error::{WifiError, WifiResult};
use crate::wifi::handle::ErrorContext;
use crate::wifi::status::{StatusCode, status_name};

/// Guard for the return value of a native call
pub fn check(code: i32, ctx: &ErrorContext) -> WifiResult<()> {
    if code == StatusCode::None.raw() {
        return Ok(());
    }
    Err(raise_on_failure(code, ctx))
}

/// Translate the status of a failed native call
///
/// Always yields an error, `None` included; callers that may see success
/// should go through [`check`].
pub fn raise_on_failure(code: i32, ctx: &ErrorContext) -> WifiError {
    let status = StatusCode::from_raw(code);
    tracing::debug!(
        target: LOG_TARGET,
        code,
        status = %status_name(code),
        handle_absent = ctx.any_handle_absent(),
        "native call failed"
    );

    match status {
        Some(StatusCode::NotSupported) => WifiError::NotSupported,
        Some(StatusCode::PermissionDenied) => WifiError::PermissionDenied(ctx.text().to_string()),
        Some(StatusCode::SecurityRestricted) => WifiError::SecurityRestricted,
        Some(StatusCode::OutOfMemory) => WifiError::OutOfMemory,
        Some(StatusCode::InvalidParameter) => {
            if ctx.any_handle_absent() {
                WifiError::InvalidInstance
            } else {
                WifiError::InvalidParameter
            }
        }
        Some(StatusCode::InvalidKey) => {
            if ctx.any_handle_absent() {
                WifiError::InvalidInstance
            } else {
                WifiError::InvalidKey(ctx.text().to_string())
            }
        }
        Some(StatusCode::NowInProgress) => WifiError::NowInProgress(ctx.text().to_string()),
        _ => WifiError::InvalidOperation(status_name(code)),
    }
}

/// Translate a status delivered to an asynchronous callback
///
/// Handles fewer cases than [`raise_on_failure`] and formats the fallback as
/// `"{message} {status}"`.
pub fn build_callback_error(code: i32, message: &str) -> WifiError {
    tracing::debug!(
        target: LOG_TARGET,
        code,
        status = %status_name(code),
        "callback reported failure"
    );

    match StatusCode::from_raw(code) {
        Some(StatusCode::NowInProgress) => WifiError::NowInProgress(message.to_string()),
        Some(StatusCode::InvalidKey) => WifiError::InvalidKey(message.to_string()),
        Some(StatusCode::SecurityRestricted) => WifiError::SecurityRestricted,
        Some(StatusCode::WpsTimeout) => WifiError::WpsTimeout,
        _ => WifiError::InvalidOperation(format!("{} {}", message, status_name(code))),
    }
}
