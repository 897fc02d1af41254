#![cfg(feature = "tokio")]
mod common;

use httpclient::{Client, ErrorKind, Form, Method};

#[tokio::test]
async fn test_get_async() {
    let (addr, server) = common::serve_status(200, "hello");
    let url = format!("http://127.0.0.1:{}/", addr.port());

    let res = httpclient::rt::execute(&url, Method::GET, None).await.unwrap();
    assert_eq!(res.code(), 200);
    assert_eq!(res.body(), "hello");

    let request = server.join().unwrap();
    assert!(request.starts_with(b"GET / HTTP/1.1\r\n"));
}

#[tokio::test]
async fn test_post_async() {
    let (addr, server) = common::serve_status(302, "");
    let url = format!("http://127.0.0.1:{}/login", addr.port());
    let form = Form::from([("user", "a"), ("pass", "b")]);

    let res = Client::new()
        .read_chunk(4)
        .execute_async(&url, Method::POST, Some(&form))
        .await
        .unwrap();
    assert_eq!(res.code(), 302);
    assert_eq!(res.body(), "");

    let request = String::from_utf8(server.join().unwrap()).unwrap();
    assert!(request.ends_with("\r\n\r\nuser=a&pass=b"));
}

#[tokio::test]
async fn test_unsupported_scheme_async() {
    let err = httpclient::rt::execute("ftp://127.0.0.1/", Method::GET, None).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnsupportedScheme));
}
