use bytes::{BufMut, BytesMut};

use super::VERSION;
use crate::form::{self, Form};
use crate::http::Method;
use crate::uri::Target;

/// Serialize request into a new buffer.
///
/// See [`write_request`] for details.
pub fn encode_request(method: Method, target: &Target, form: Option<&Form>) -> BytesMut {
    let body_len = match method {
        Method::POST => form.map_or(0, Form::encoded_len),
        _ => 0,
    };
    let mut buf = BytesMut::with_capacity(128 + target.path().len() + body_len);
    write_request(method, target, form, &mut buf);
    buf
}

/// Write request head and body.
///
/// `GET` request have no body and `form` is ignored.
///
/// `POST` request is sent with `application/x-www-form-urlencoded` body, with `Content-Length`
/// of exactly the encoded form length. Missing `form` is an empty body.
///
/// ```not_rust
/// GET /foo HTTP/1.1\r\n
/// Host: example.com:80\r\n
/// Connection: Close\r\n
/// \r\n
/// ```
pub fn write_request<B: BufMut>(method: Method, target: &Target, form: Option<&Form>, mut buf: B) {
    let mut port = itoa::Buffer::new();

    buf.put_slice(method.as_str().as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(target.path().as_bytes());
    buf.put_u8(b' ');
    buf.put_slice(VERSION);
    buf.put_slice(b"\r\n");

    buf.put_slice(b"Host: ");
    if target.is_ipv6() {
        buf.put_u8(b'[');
        buf.put_slice(target.host().as_bytes());
        buf.put_u8(b']');
    } else {
        buf.put_slice(target.host().as_bytes());
    }
    buf.put_u8(b':');
    buf.put_slice(port.format(target.port()).as_bytes());
    buf.put_slice(b"\r\n");

    if method == Method::POST {
        let mut len = itoa::Buffer::new();
        let content_len = form.map_or(0, Form::encoded_len);

        buf.put_slice(b"Content-Type: ");
        buf.put_slice(form::CONTENT_TYPE.as_bytes());
        buf.put_slice(b"\r\n");
        buf.put_slice(b"Content-Length: ");
        buf.put_slice(len.format(content_len).as_bytes());
        buf.put_slice(b"\r\n");
        buf.put_slice(b"Connection: Close\r\n\r\n");

        if let Some(form) = form {
            form.write_to(&mut buf);
        }
    } else {
        buf.put_slice(b"Connection: Close\r\n\r\n");
    }
}
