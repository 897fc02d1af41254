//! Asynchronous request execution on tokio.
//!
//! Same pipeline as the blocking [`Client`], the request is serialized and the response is
//! decomposed by the same [`h1`] functions, only the socket is a [`tokio::net::TcpStream`].
use bytes::BytesMut;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::client::Client;
use crate::error::Error;
use crate::form::Form;
use crate::h1::{self, Response};
use crate::http::Method;
use crate::log::{debug, info};
use crate::uri::Target;

/// Execute a single request asynchronously.
///
/// Shorthand for [`Client::new`] followed by [`Client::execute_async`].
#[inline]
pub async fn execute(url: &str, method: Method, form: Option<&Form>) -> Result<Response, Error> {
    Client::new().execute_async(url, method, form).await
}

impl Client {
    /// Parse `url` and send request asynchronously.
    ///
    /// See [`Client::execute`].
    pub async fn execute_async(&self, url: &str, method: Method, form: Option<&Form>) -> Result<Response, Error> {
        let target = Target::parse(url)?;
        self.send_async(method, &target, form).await
    }

    /// Send request to an already decomposed target asynchronously.
    pub async fn send_async(&self, method: Method, target: &Target, form: Option<&Form>) -> Result<Response, Error> {
        let request = h1::encode_request(method, target, form);

        debug!("connecting to {}:{}", target.host(), target.port());
        let mut stream = TcpStream::connect((target.host(), target.port()))
            .await
            .map_err(Error::connection)?;

        let buffer = exchange(&mut stream, &request, self.read_chunk)
            .await
            .map_err(Error::transfer)?;
        drop(stream);

        let response = h1::parse_response(h1::decode(buffer)?)?;
        info!("{method} {target} {}", response.status());
        Ok(response)
    }
}

/// Write the whole request, then read until the peer close the connection.
pub async fn exchange<IO>(io: &mut IO, request: &[u8], chunk: usize) -> io::Result<BytesMut>
where
    IO: AsyncRead + AsyncWrite + Unpin,
{
    io.write_all(request).await?;
    io.flush().await?;
    debug!("sent {} bytes", request.len());

    let chunk = chunk.clamp(1, h1::MAX_READ_CHUNK);
    let mut buffer = BytesMut::with_capacity(chunk);

    loop {
        buffer.reserve(chunk);
        match io.read_buf(&mut buffer).await {
            Ok(0) => break,
            Ok(_) => {},
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    debug!("received {} bytes", buffer.len());
    Ok(buffer)
}
