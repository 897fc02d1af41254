use bytes::BytesMut;
use std::io::{self, Read, Write};

use crate::log::{debug, error};

/// Default size of a single read from a connection.
pub const READ_CHUNK: usize = 1024;

/// Upper bound of a single read from a connection.
pub const MAX_READ_CHUNK: usize = 1024 * 1024;

/// Write the whole request, then read until the peer close the connection.
///
/// # Errors
///
/// Returns any write or read error other than [`io::ErrorKind::Interrupted`]. Bytes received
/// before the error are discarded.
pub fn exchange<IO: Read + Write>(io: &mut IO, request: &[u8], chunk: usize) -> io::Result<BytesMut> {
    io.write_all(request)?;
    io.flush()?;
    debug!("sent {} bytes", request.len());

    let buffer = read_to_close(io, chunk)?;
    debug!("received {} bytes", buffer.len());
    Ok(buffer)
}

/// Read into buffer until the read returns zero.
///
/// Each read is at most `chunk` bytes, clamped to `1..=`[`MAX_READ_CHUNK`]. Returned buffer is
/// the concatenation of every read in order.
///
/// # Errors
///
/// Returns any read error other than [`io::ErrorKind::Interrupted`], which is retried.
pub fn read_to_close<R: Read>(io: &mut R, chunk: usize) -> io::Result<BytesMut> {
    let chunk = chunk.clamp(1, MAX_READ_CHUNK);
    let mut buffer = BytesMut::with_capacity(chunk);
    let mut part = vec![0u8; chunk];

    loop {
        match io.read(&mut part) {
            Ok(0) => return Ok(buffer),
            Ok(read) => buffer.extend_from_slice(&part[..read]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                error!("read failed after {} bytes: {err}", buffer.len());
                return Err(err);
            },
        }
    }
}
