use bytes::BytesMut;
use std::io::{self, Read};

use super::{ParseError, decode, encode_request, parse_response, read_to_close, write_response};
use crate::form::Form;
use crate::http::{Method, StatusCode};
use crate::uri::Target;

fn target(url: &str) -> Target {
    Target::parse(url).unwrap()
}

// ===== Request =====

#[test]
fn test_get_request() {
    let req = encode_request(Method::GET, &target("http://example.com/foo"), None);
    assert_eq!(&req[..], b"GET /foo HTTP/1.1\r\nHost: example.com:80\r\nConnection: Close\r\n\r\n");

    let req = encode_request(Method::GET, &target("http://localhost:8080"), None);
    assert_eq!(&req[..], b"GET / HTTP/1.1\r\nHost: localhost:8080\r\nConnection: Close\r\n\r\n");

    let req = encode_request(Method::GET, &target("http://[::1]:3000/a?b=c"), None);
    assert_eq!(&req[..], b"GET /a?b=c HTTP/1.1\r\nHost: [::1]:3000\r\nConnection: Close\r\n\r\n");
}

#[test]
fn test_get_ignores_form() {
    let form = Form::from([("a", "1")]);
    let req = encode_request(Method::GET, &target("http://example.com/foo"), Some(&form));
    assert_eq!(&req[..], b"GET /foo HTTP/1.1\r\nHost: example.com:80\r\nConnection: Close\r\n\r\n");
}

#[test]
fn test_post_request() {
    let form = Form::from([("a", "1"), ("b", "2")]);
    let req = encode_request(Method::POST, &target("http://example.com/submit"), Some(&form));
    assert_eq!(
        &req[..],
        b"POST /submit HTTP/1.1\r\n\
        Host: example.com:80\r\n\
        Content-Type: application/x-www-form-urlencoded\r\n\
        Content-Length: 7\r\n\
        Connection: Close\r\n\
        \r\n\
        a=1&b=2"
    );
}

#[test]
fn test_post_request_empty() {
    let expected = b"POST / HTTP/1.1\r\n\
        Host: example.com:81\r\n\
        Content-Type: application/x-www-form-urlencoded\r\n\
        Content-Length: 0\r\n\
        Connection: Close\r\n\
        \r\n";

    let req = encode_request(Method::POST, &target("http://example.com:81"), None);
    assert_eq!(&req[..], expected);

    let req = encode_request(Method::POST, &target("http://example.com:81"), Some(&Form::new()));
    assert_eq!(&req[..], expected);
}

#[test]
fn test_post_content_length_is_bytes() {
    let form = Form::from([("name", "héllo")]);
    let req = encode_request(Method::POST, &target("http://example.com/"), Some(&form));
    let req = std::str::from_utf8(&req).unwrap();
    assert!(req.contains("Content-Length: 11\r\n"));
    assert!(req.ends_with("\r\n\r\nname=héllo"));
}

#[test]
fn test_request_lines_use_crlf() {
    let form = Form::from([("k", "v")]);
    let req = encode_request(Method::POST, &target("http://example.com/"), Some(&form));
    let head = &req[..req.len() - 3];
    for (i, byte) in head.iter().enumerate() {
        if *byte == b'\n' {
            assert_eq!(head[i - 1], b'\r', "bare newline at {i}");
        }
    }
}

// ===== Receive =====

/// Yields each chunk in a single read, then zero.
struct Chunks {
    chunks: Vec<&'static [u8]>,
    interrupt: bool,
}

impl Read for Chunks {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt {
            self.interrupt = false;
            return Err(io::ErrorKind::Interrupted.into());
        }
        if self.chunks.is_empty() {
            return Ok(0);
        }
        let chunk = self.chunks.remove(0);
        let len = chunk.len().min(buf.len());
        buf[..len].copy_from_slice(&chunk[..len]);
        if len < chunk.len() {
            self.chunks.insert(0, &chunk[len..]);
        }
        self.interrupt = true;
        Ok(len)
    }
}

#[test]
fn test_read_to_close() {
    let mut io = Chunks {
        chunks: vec![b"HTTP/1.1 200 OK\r\n", b"Content-Length: 5\r\n\r\n", b"he", b"llo"],
        interrupt: false,
    };
    let buffer = read_to_close(&mut io, 1024).unwrap();
    assert_eq!(&buffer[..], b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello");
}

#[test]
fn test_read_to_close_small_chunk() {
    let mut io = Chunks {
        chunks: vec![b"abcdefghij", b"klmnop"],
        interrupt: false,
    };
    let buffer = read_to_close(&mut io, 3).unwrap();
    assert_eq!(&buffer[..], b"abcdefghijklmnop");
}

#[test]
fn test_read_to_close_chunk_bounds() {
    let mut io = Chunks {
        chunks: vec![b"HTTP/1.1 200 OK\r\n\r\n", b"ok"],
        interrupt: false,
    };
    let buffer = read_to_close(&mut io, usize::MAX).unwrap();
    assert_eq!(&buffer[..], b"HTTP/1.1 200 OK\r\n\r\nok");

    let mut io = Chunks { chunks: vec![b"abc"], interrupt: false };
    let buffer = read_to_close(&mut io, 0).unwrap();
    assert_eq!(&buffer[..], b"abc");
}

#[test]
fn test_read_to_close_empty() {
    let mut io = Chunks { chunks: vec![], interrupt: false };
    assert!(read_to_close(&mut io, 1024).unwrap().is_empty());
}

#[test]
fn test_read_error() {
    struct Reset(bool);

    impl Read for Reset {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if std::mem::replace(&mut self.0, true) {
                Err(io::ErrorKind::ConnectionReset.into())
            } else {
                buf[..4].copy_from_slice(b"HTTP");
                Ok(4)
            }
        }
    }

    let err = read_to_close(&mut Reset(false), 1024).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
}

#[test]
fn test_decode() {
    assert_eq!(decode(BytesMut::from(&b"HTTP/1.1 200 OK"[..])).unwrap(), "HTTP/1.1 200 OK");
    assert!(decode(BytesMut::from(&b"HTTP/1.1 200 OK\r\n\r\n\xff\xfe"[..])).is_err());
}

// ===== Response =====

#[test]
fn test_parse_response() {
    let res = parse_response("HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\nNope".into()).unwrap();
    assert_eq!(res.code(), 404);
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.body(), "Nope");

    let res = parse_response("HTTP/1.1 200 OK\r\n\r\n<h1>hello</h1>".into()).unwrap();
    assert_eq!(res.code(), 200);
    assert_eq!(res.body(), "<h1>hello</h1>");
    assert_eq!(res.message(), "HTTP/1.1 200 OK\r\n\r\n<h1>hello</h1>");
}

#[test]
fn test_parse_response_last_segment() {
    // multi line body only keeps the last line
    let res = parse_response("HTTP/1.1 200 OK\r\n\r\nfirst\r\nsecond".into()).unwrap();
    assert_eq!(res.body(), "second");

    // bare newline is not a delimiter
    let res = parse_response("HTTP/1.1 200 OK\r\n\r\nfirst\nsecond".into()).unwrap();
    assert_eq!(res.body(), "first\nsecond");

    // empty body
    let res = parse_response("HTTP/1.1 204 No Content\r\nServer: x\r\n\r\n".into()).unwrap();
    assert_eq!(res.code(), 204);
    assert_eq!(res.body(), "");

    // no terminating empty line
    let res = parse_response("HTTP/1.1 200 OK\r\nServer: x".into()).unwrap();
    assert_eq!(res.body(), "Server: x");

    // status line only
    let res = parse_response("HTTP/1.1 500 Internal Server Error".into()).unwrap();
    assert_eq!(res.code(), 500);
    assert_eq!(res.body(), "HTTP/1.1 500 Internal Server Error");
}

#[test]
fn test_parse_response_status() {
    let res = parse_response("HTTP/1.0   302   Found\r\n\r\n".into()).unwrap();
    assert_eq!(res.code(), 302);

    let res = parse_response("HTTP/1.1 599\r\n\r\nodd".into()).unwrap();
    assert_eq!(res.code(), 599);
    assert_eq!(res.status().reason(), None);
}

#[test]
fn test_parse_response_malformed() {
    assert_eq!(parse_response(String::new()), Err(ParseError::MissingStatus));
    assert_eq!(parse_response("HTTP/1.1\r\n\r\nbody".into()), Err(ParseError::MissingStatus));
    assert_eq!(parse_response("\r\nHTTP/1.1 200 OK".into()), Err(ParseError::MissingStatus));
    assert_eq!(parse_response("HTTP/1.1 OK 200\r\n\r\n".into()), Err(ParseError::InvalidStatus));
    assert_eq!(parse_response("HTTP/1.1 2OO OK\r\n\r\n".into()), Err(ParseError::InvalidStatus));
}

#[test]
fn test_response_round_trip() {
    for code in 100..=999u16 {
        let mut buf = BytesMut::new();
        write_response(StatusCode::from_u16(code), &[("Content-Type", "text/plain")], b"ok", &mut buf);

        let res = parse_response(decode(buf).unwrap()).unwrap();
        assert_eq!(res.code(), code);
        assert_eq!(res.body(), "ok");
    }
}

#[test]
fn test_write_response() {
    let mut buf = BytesMut::new();
    write_response(StatusCode::NOT_FOUND, &[("Content-Type", "text/plain")], b"Nope", &mut buf);
    assert_eq!(&buf[..], b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\nNope");
}
