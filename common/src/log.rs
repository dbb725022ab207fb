//! Status macros layered over `tracing`.
//!
//! Each macro emits under its own target so the terminal formatter can pick
//! a symbol and a color for it.

pub const TARGET_INFO: &str = "shelf::info";
pub const TARGET_SUCCESS: &str = "shelf::success";
pub const TARGET_WARN: &str = "shelf::warn";

/// Neutral status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__private::tracing::info!(target: $crate::log::TARGET_INFO, $($arg)*)
    };
}

/// An operation finished and produced something worth showing.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__private::tracing::info!(target: $crate::log::TARGET_SUCCESS, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__private::tracing::warn!(target: $crate::log::TARGET_WARN, $($arg)*)
    };
}
