//! Loopback peers for integration testing.
#![allow(dead_code)]

use bytes::BytesMut;
use httpclient::StatusCode;
use httpclient::h1::write_response;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Accept a single connection, reply with `response` in `chunk` sized writes, then close.
///
/// The join handle returns the raw request received.
pub fn serve_once(response: Vec<u8>, chunk: usize) -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut socket, _) = listener.accept().unwrap();
        let request = read_request(&mut socket);
        for part in response.chunks(chunk.max(1)) {
            socket.write_all(part).unwrap();
            socket.flush().unwrap();
        }
        request
    });

    (addr, handle)
}

/// Reply with a well formed response.
pub fn serve_status(status: u16, body: &str) -> (SocketAddr, JoinHandle<Vec<u8>>) {
    let mut buf = BytesMut::new();
    let len = body.len().to_string();
    write_response(
        StatusCode::from_u16(status),
        &[("Content-Type", "text/plain"), ("Content-Length", &len), ("Connection", "close")],
        body.as_bytes(),
        &mut buf,
    );
    serve_once(buf.to_vec(), 1024)
}

/// Returns an address that refuses connections.
pub fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Read request head and `Content-Length` bytes of body.
fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buf = [0u8; 256];

    let head_end = loop {
        if let Some(pos) = find(&request, b"\r\n\r\n") {
            break pos + 4;
        }
        let read = socket.read(&mut buf).unwrap();
        if read == 0 {
            return request;
        }
        request.extend_from_slice(&buf[..read]);
    };

    let head = String::from_utf8_lossy(&request[..head_end]).into_owned();
    let content_len = head
        .split("\r\n")
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .map_or(0, |len| len.parse::<usize>().unwrap());

    while request.len() < head_end + content_len {
        let read = socket.read(&mut buf).unwrap();
        if read == 0 {
            break;
        }
        request.extend_from_slice(&buf[..read]);
    }

    request
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
