//! Logging macros.
//!
//! Forwarded to the [`log`](https://docs.rs/log) facade when the `log` feature is enabled,
//! otherwise expand to nothing.
#![allow(unused, reason = "logger")]

macro_rules! info {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::info!(target: "httpclient", $($tt)*);
    };
}

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!(target: "httpclient", $($tt)*);
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::warn!(target: "httpclient", $($tt)*);
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::error!(target: "httpclient", $($tt)*);
    };
}

pub(crate) use {info, debug, warning, error};
