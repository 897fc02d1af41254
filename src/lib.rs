//! Minimal HTTP/1.1 Client
//!
//! Sends `GET` and `POST` requests over a plain TCP socket, writing every byte of the request by
//! hand and reading the response until the server closes the connection.
//!
//! ```no_run
//! # fn main() -> Result<(), httpclient::Error> {
//! let res = httpclient::execute("http://example.com/", httpclient::Method::GET, None)?;
//! assert_eq!(res.code(), 200);
//! # Ok(())
//! # }
//! ```
//!
//! Only the `http` scheme is supported. There is no TLS, no connection reuse, no redirect, no
//! chunked transfer coding, and no timeout.
#![warn(missing_debug_implementations)]

mod log;

pub mod uri;
pub mod http;
pub mod form;
pub mod h1;
pub mod client;
#[cfg(feature = "tokio")]
pub mod rt;
mod error;

pub use client::{Client, Connection, execute};
pub use error::{Error, ErrorKind};
pub use form::Form;
pub use h1::Response;
pub use http::{Method, StatusCode};
pub use uri::Target;
