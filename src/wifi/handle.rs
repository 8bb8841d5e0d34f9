use std::ptr::NonNull;

/// A native handle whose absence invalidates the owning object
pub trait NativeHandle {
    fn is_absent(&self) -> bool;
}

impl<T> NativeHandle for *const T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> NativeHandle for *mut T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T> NativeHandle for Option<NonNull<T>> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Context accompanying a native status code
///
/// Records whether up to two handles passed to the failing call were null,
/// plus a free-text message used by the pass-through error kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    handles_absent: [bool; 2],
    message: String,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a call made with one native handle
    pub fn handle(handle: &impl NativeHandle) -> Self {
        Self::absent(handle.is_absent(), false)
    }

    /// Context for a call made with two native handles
    pub fn handles(first: &impl NativeHandle, second: &impl NativeHandle) -> Self {
        Self::absent(first.is_absent(), second.is_absent())
    }

    /// Context built from precomputed absence flags
    pub fn absent(first: bool, second: bool) -> Self {
        Self {
            handles_absent: [first, second],
            message: String::new(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self::new().message(message)
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn any_handle_absent(&self) -> bool {
        self.handles_absent.iter().any(|&absent| absent)
    }
}
