//! HTTP Protocol.
mod method;
mod status;

pub use method::{Method, UnknownMethod};
pub use status::StatusCode;
