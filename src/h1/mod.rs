//! HTTP/1.1 Protocol.
//!
//! - [`write_request`] serialize `GET` and `POST` request
//! - [`read_to_close`] drain a connection until the peer close it
//! - [`parse_response`] split decoded response into status code and body
//!
//! Every message this client send carries `Connection: Close`, so the end of a response is
//! simply the end of the stream, no `Content-Length` or chunked framing is needed.
mod request;
mod io;
mod response;
mod error;

#[cfg(test)]
mod test;

pub use request::{encode_request, write_request};
pub use io::{MAX_READ_CHUNK, READ_CHUNK, exchange, read_to_close};
pub use response::{Response, decode, parse_response, write_response};
pub use error::ParseError;

/// Line separator, both for writing request and splitting response.
pub const CRLF: &str = "\r\n";

const VERSION: &[u8] = b"HTTP/1.1";
