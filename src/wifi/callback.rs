use std::ffi::{c_int, c_void};

use tokio::sync::oneshot;

use crate::config::LOG_TARGET;
use crate::error::WifiResult;
use crate::wifi::status::StatusCode;
use crate::wifi::translate::build_callback_error;

/// Result delivered when a native asynchronous operation finishes
pub type Completion = WifiResult<()>;

/// One outstanding native operation waiting for its completion callback
#[derive(Debug)]
pub struct PendingCompletion {
    message: String,
    sender: oneshot::Sender<Completion>,
}

/// Create a pending completion and the receiver that resolves when it fires
///
/// `message` prefixes generic failures reported by the callback.
pub fn pending_completion(
    message: impl Into<String>,
) -> (PendingCompletion, oneshot::Receiver<Completion>) {
    let (sender, receiver) = oneshot::channel();
    let pending = PendingCompletion {
        message: message.into(),
        sender,
    };
    (pending, receiver)
}

impl PendingCompletion {
    /// Resolve with a native status. Returns false if nobody is waiting.
    pub fn complete(self, code: i32) -> bool {
        let result = if code == StatusCode::None.raw() {
            Ok(())
        } else {
            Err(build_callback_error(code, &self.message))
        };

        if self.sender.send(result).is_err() {
            tracing::warn!(target: LOG_TARGET, code, "completion dropped, receiver gone");
            return false;
        }
        true
    }

    /// Hand ownership to the native layer as callback user data
    pub fn into_user_data(self) -> *mut c_void {
        Box::into_raw(Box::new(self)) as *mut c_void
    }

    /// Reclaim user data that the native layer will never call back with,
    /// e.g. when the asynchronous call itself failed to start.
    ///
    /// # Safety
    ///
    /// `user_data` must come from [`PendingCompletion::into_user_data`] and
    /// must not have been passed to [`completion_callback`] or reclaimed
    /// already.
    pub unsafe fn from_user_data(user_data: *mut c_void) -> Option<Self> {
        if user_data.is_null() {
            return None;
        }
        // SAFETY: caller guarantees the pointer is a live Box<PendingCompletion>
        let pending = unsafe { Box::from_raw(user_data as *mut PendingCompletion) };
        Some(*pending)
    }
}

/// Native completion callback: `void (*)(int result, void *user_data)`
///
/// # Safety
///
/// `user_data` must be null or come from [`PendingCompletion::into_user_data`],
/// and the native layer must invoke this at most once per pointer.
pub unsafe extern "C" fn completion_callback(result: c_int, user_data: *mut c_void) {
    // SAFETY: forwarded from this function's contract
    if let Some(pending) = unsafe { PendingCompletion::from_user_data(user_data) } {
        pending.complete(result);
    }
}
