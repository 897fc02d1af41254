//! Blocking request execution.
use bytes::BytesMut;
use std::net::{Shutdown, SocketAddr, TcpStream};

use crate::error::Error;
use crate::form::Form;
use crate::h1::{self, MAX_READ_CHUNK, READ_CHUNK, Response};
use crate::http::Method;
use crate::log::{debug, info, warning};
use crate::uri::Target;

/// Execute a single request.
///
/// Shorthand for [`Client::new`] followed by [`Client::execute`].
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), httpclient::Error> {
/// use httpclient::{Form, Method};
///
/// let res = httpclient::execute("http://example.com/", Method::GET, None)?;
/// println!("{} {}", res.code(), res.body());
///
/// let form = Form::from([("name", "ferret")]);
/// let res = httpclient::execute("http://example.com/submit", Method::POST, Some(&form))?;
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn execute(url: &str, method: Method, form: Option<&Form>) -> Result<Response, Error> {
    Client::new().execute(url, method, form)
}

/// HTTP/1.1 client.
///
/// The client holds no connection, every request opens its own [`Connection`] and closes it once
/// the response is received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Client {
    pub(crate) read_chunk: usize,
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create new [`Client`] with default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self { read_chunk: READ_CHUNK }
    }

    /// Set the maximum size of a single read from the connection.
    ///
    /// Clamped to `1..=`[`MAX_READ_CHUNK`].
    #[inline]
    pub const fn read_chunk(mut self, read_chunk: usize) -> Self {
        self.read_chunk = if read_chunk == 0 {
            1
        } else if read_chunk > MAX_READ_CHUNK {
            MAX_READ_CHUNK
        } else {
            read_chunk
        };
        self
    }

    /// Send `GET` request.
    #[inline]
    pub fn get(&self, url: &str) -> Result<Response, Error> {
        self.execute(url, Method::GET, None)
    }

    /// Send `POST` request with url encoded `form`.
    #[inline]
    pub fn post(&self, url: &str, form: Option<&Form>) -> Result<Response, Error> {
        self.execute(url, Method::POST, form)
    }

    /// Parse `url` and send request.
    ///
    /// `form` is only sent with [`Method::POST`].
    ///
    /// # Errors
    ///
    /// URL errors are returned before any connection is opened. Otherwise returns the first
    /// connect, transfer, decode, or status line error.
    pub fn execute(&self, url: &str, method: Method, form: Option<&Form>) -> Result<Response, Error> {
        let target = match Target::parse(url) {
            Ok(ok) => ok,
            Err(err) => {
                warning!("rejected {url:?}: {err}");
                return Err(err.into());
            },
        };
        self.send(method, &target, form)
    }

    /// Send request to an already decomposed target.
    pub fn send(&self, method: Method, target: &Target, form: Option<&Form>) -> Result<Response, Error> {
        let request = h1::encode_request(method, target, form);

        let buffer = Connection::open(target.host(), target.port())?.exchange(&request, self.read_chunk)?;

        let response = h1::parse_response(h1::decode(buffer)?)?;
        info!("{method} {target} {}", response.status());
        Ok(response)
    }
}

// ===== Connection =====

/// One shot TCP connection.
///
/// A connection is opened right before a request is sent and is consumed by
/// [`exchange`][Connection::exchange], so it cannot be used again after the response is read.
/// The socket is closed when the connection is dropped, whether the exchange succeeded or not.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    /// Resolve and connect to `host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionFailure`][crate::ErrorKind::ConnectionFailure] if resolution fails or
    /// no resolved address accepts the connection.
    pub fn open(host: &str, port: u16) -> Result<Self, Error> {
        debug!("connecting to {host}:{port}");
        let stream = TcpStream::connect((host, port)).map_err(Error::connection)?;
        let peer = stream.peer_addr().map_err(Error::connection)?;
        debug!("connected to {peer}");
        Ok(Self { stream, peer })
    }

    /// Returns the address of the connected peer.
    #[inline]
    pub const fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Send `request` and read until the peer close the connection, then close it.
    ///
    /// # Errors
    ///
    /// Returns [`TransferFailure`][crate::ErrorKind::TransferFailure] if writing or reading
    /// fails, bytes received so far are discarded.
    pub fn exchange(mut self, request: &[u8], read_chunk: usize) -> Result<BytesMut, Error> {
        h1::exchange(&mut self.stream, request, read_chunk).map_err(Error::transfer)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // peer may already closed its side
        let _ = self.stream.shutdown(Shutdown::Both);
        debug!("connection to {} closed", self.peer);
    }
}

#[cfg(test)]
mod test {
    use super::Client;
    use crate::h1::{MAX_READ_CHUNK, READ_CHUNK};

    #[test]
    fn test_read_chunk_clamped() {
        assert_eq!(Client::new().read_chunk, READ_CHUNK);
        assert_eq!(Client::new().read_chunk(0).read_chunk, 1);
        assert_eq!(Client::new().read_chunk(4096).read_chunk, 4096);
        assert_eq!(Client::new().read_chunk(usize::MAX).read_chunk, MAX_READ_CHUNK);
        assert_eq!(Client::new().read_chunk(MAX_READ_CHUNK + 1).read_chunk, MAX_READ_CHUNK);
    }
}
