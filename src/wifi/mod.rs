//! Native Wi-Fi status translation
//!
//! This module maps status codes returned by the native Wi-Fi API into typed
//! errors, both for synchronous calls and for asynchronous completion
//! callbacks.

mod callback;
mod handle;
mod status;
mod translate;

// Re-export public API
pub use callback::{Completion, PendingCompletion, completion_callback, pending_completion};
pub use handle::{ErrorContext, NativeHandle};
pub use status::{StatusCode, parse_status, status_name};
pub use translate::{build_callback_error, check, raise_on_failure};
