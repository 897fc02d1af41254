use bytes::{BufMut, BytesMut};
use std::ops::Range;
use std::str::Utf8Error;

use super::{CRLF, ParseError, VERSION};
use crate::http::StatusCode;

/// HTTP Response.
///
/// Holds the whole decoded response message, the status code, and the body.
///
/// The body is the last `\r\n` delimited segment of the message, headers are not parsed. This
/// means:
///
/// - a body containing `\r\n` only yields its last line
/// - an empty body yields an empty string
/// - a message without any `\r\n` after its last header yields that header line
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    message: String,
    body: Range<usize>,
}

impl Response {
    /// Returns the response status code.
    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response status code as integer, e.g: `200`.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns the response body.
    #[inline]
    pub fn body(&self) -> &str {
        &self.message[self.body.clone()]
    }

    /// Returns the whole response message as received.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume response returning the whole message.
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Decode received bytes as UTF-8.
///
/// # Errors
///
/// Returns [`Err`] on invalid UTF-8, there is no fallback encoding.
pub fn decode(buffer: BytesMut) -> Result<String, Utf8Error> {
    String::from_utf8(Vec::from(buffer)).map_err(|err| err.utf8_error())
}

/// Split decoded response message into status code and body.
///
/// The status code is the second whitespace delimited token of the first line. The body is the
/// last `\r\n` delimited segment, see [`Response`] for its limitations.
///
/// # Errors
///
/// Returns [`Err`] if the status line does not have a numeric second token.
pub fn parse_response(message: String) -> Result<Response, ParseError> {
    let status_line = match message.split_once(CRLF) {
        Some((line, _)) => line,
        None => &message,
    };

    let Some(code) = status_line.split_ascii_whitespace().nth(1) else {
        return Err(ParseError::MissingStatus);
    };
    let Some(status) = StatusCode::from_bytes(code.as_bytes()) else {
        return Err(ParseError::InvalidStatus);
    };

    let start = match message.rfind(CRLF) {
        Some(crlf) => crlf + CRLF.len(),
        None => 0,
    };
    let body = start..message.len();

    Ok(Response {
        status,
        message,
        body,
    })
}

/// Write a response message, used by loopback peers.
///
/// Headers are written in order, followed by an empty line and the body.
pub fn write_response<B: BufMut>(status: StatusCode, headers: &[(&str, &str)], body: &[u8], mut buf: B) {
    let mut code = itoa::Buffer::new();

    buf.put_slice(VERSION);
    buf.put_u8(b' ');
    buf.put_slice(code.format(status.as_u16()).as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(status.reason().unwrap_or_default().as_bytes());
    buf.put_slice(b"\r\n");

    for (name, value) in headers {
        buf.put_slice(name.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(value.as_bytes());
        buf.put_slice(b"\r\n");
    }

    buf.put_slice(b"\r\n");
    buf.put_slice(body);
}

// ===== Formatting =====

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("body", &self.body())
            .finish()
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        f.write_str(self.body())
    }
}
