use std::ffi::c_void;

use wifi_errmap::{
    ErrorContext, ErrorKind, StatusCode, WifiError, build_callback_error, check,
    raise_on_failure,
};

fn expected_sync_kind(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::NotSupported => ErrorKind::CapabilityMissing,
        StatusCode::PermissionDenied | StatusCode::SecurityRestricted => ErrorKind::AccessDenied,
        StatusCode::OutOfMemory => ErrorKind::ResourceExhausted,
        StatusCode::InvalidParameter => ErrorKind::InvalidArgument,
        StatusCode::InvalidKey => ErrorKind::DomainInvalidKey,
        StatusCode::NowInProgress => ErrorKind::OperationInProgress,
        _ => ErrorKind::Generic,
    }
}

#[test]
fn every_status_raises_its_kind() {
    let ctx = ErrorContext::with_message("context");
    for status in StatusCode::ALL {
        let err = raise_on_failure(status.raw(), &ctx);
        assert_eq!(err.kind(), expected_sync_kind(status), "{status:?}");
        if err.kind() == ErrorKind::Generic {
            assert_eq!(err.to_string(), status.name());
        }
    }
}

#[test]
fn unmapped_codes_raise_generic_with_numeric_text() {
    for code in [1, 9999, -1, -0x01CE_0000, i32::MIN] {
        let err = raise_on_failure(code, &ErrorContext::new());
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.to_string(), code.to_string());
    }
}

#[test]
fn invalid_parameter_with_released_handle() {
    let null: *const c_void = std::ptr::null();
    let value = 1u8;
    let live: *const u8 = &value;

    let ctx = ErrorContext::handles(&null, &live).message("anything");
    let err = raise_on_failure(StatusCode::InvalidParameter.raw(), &ctx);
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(err.to_string().contains("disposed or released"));

    let ctx = ErrorContext::handles(&live, &live).message("x");
    let err = raise_on_failure(StatusCode::InvalidParameter.raw(), &ctx);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "Invalid parameter");
}

#[test]
fn security_restriction_ignores_message_and_handles() {
    for (first, second) in [(false, false), (true, false), (false, true), (true, true)] {
        let ctx = ErrorContext::absent(first, second).message("ignored message");
        let err = raise_on_failure(StatusCode::SecurityRestricted.raw(), &ctx);
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(err.to_string(), "Disabled by the device policy");
    }
}

#[test]
fn permission_denied_appends_message() {
    let ctx = ErrorContext::with_message("to scan");
    let err = raise_on_failure(StatusCode::PermissionDenied.raw(), &ctx);
    assert_eq!(err.to_string(), "Permission denied to scan");
}

#[test]
fn pass_through_messages_are_verbatim() {
    let ctx = ErrorContext::with_message("Connection already in progress");
    assert_eq!(
        raise_on_failure(StatusCode::NowInProgress.raw(), &ctx),
        WifiError::NowInProgress("Connection already in progress".into())
    );
}

#[test]
fn callback_wps_timeout_has_fixed_message() {
    let err = build_callback_error(StatusCode::WpsTimeout.raw(), "ignored");
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(err.to_string(), "WPS connection is timed out");
}

#[test]
fn callback_unmapped_code_joins_context_and_value() {
    let err = build_callback_error(9999, "ctx");
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.to_string(), "ctx 9999");
}

#[test]
fn translation_is_repeatable() {
    let ctx = ErrorContext::absent(true, false).message("m");
    for status in StatusCode::ALL {
        assert_eq!(
            raise_on_failure(status.raw(), &ctx),
            raise_on_failure(status.raw(), &ctx)
        );
        assert_eq!(
            build_callback_error(status.raw(), "m"),
            build_callback_error(status.raw(), "m")
        );
    }
}

#[test]
fn native_call_guard_propagates_with_question_mark() {
    fn activate(code: i32) -> wifi_errmap::WifiResult<&'static str> {
        check(code, &ErrorContext::with_message("activate"))?;
        Ok("activated")
    }

    assert_eq!(activate(0), Ok("activated"));
    assert_eq!(
        activate(StatusCode::NowInProgress.raw()),
        Err(WifiError::NowInProgress("activate".into()))
    );
}
