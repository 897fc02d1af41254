/// HTTP [Status Code][rfc].
///
/// Unlike a server, a client must accept whatever code the peer sends, so any integer is
/// representable. Known codes have a canonical [reason phrase][StatusCode::reason].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(u16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_code {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident $msg:literal;
        )*
    ) => {
        impl StatusCode {
            /// Returns the canonical reason phrase, e.g: `"OK"`.
            ///
            /// Returns `None` for unregistered status code.
            #[inline]
            pub const fn reason(&self) -> Option<&'static str> {
                match self.0 {
                    $(
                        $int => Some($msg),
                    )*
                    _ => None,
                }
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self($int);
            )*
        }
    };
}

impl StatusCode {
    /// Create [`StatusCode`] from integer.
    #[inline]
    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }

    /// Parse status code from the status line token, e.g: `"200"`.
    #[inline]
    pub fn from_bytes(src: &[u8]) -> Option<Self> {
        if src.is_empty() || !src.iter().all(u8::is_ascii_digit) {
            return None;
        }
        std::str::from_utf8(src).ok()?.parse().ok().map(Self)
    }

    /// Returns status code value, e.g: `200`.
    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns `true` for `1xx` status code.
    #[inline]
    pub const fn is_informational(&self) -> bool {
        matches!(self.0, 100..200)
    }

    /// Returns `true` for `2xx` status code.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.0, 200..300)
    }

    /// Returns `true` for `3xx` status code.
    #[inline]
    pub const fn is_redirection(&self) -> bool {
        matches!(self.0, 300..400)
    }

    /// Returns `true` for `4xx` status code.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.0, 400..500)
    }

    /// Returns `true` for `5xx` status code.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.0, 500..600)
    }
}

status_code! {
    /// `100`. The client should continue the request.
    100 CONTINUE "Continue";
    /// `101`. The server is switching to the protocol requested in `Upgrade`.
    101 SWITCHING_PROTOCOL "Switching Protocols";
    /// `200`. The request succeeded.
    200 OK "OK";
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED "Created";
    /// `202`. The request has been received but not yet acted upon.
    202 ACCEPTED "Accepted";
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT "No Content";
    /// `301`. The URI of the requested resource has been changed permanently.
    301 MOVED_PERMANENTLY "Moved Permanently";
    /// `302`. The URI of requested resource has been changed temporarily.
    302 FOUND "Found";
    /// `303`. Get the requested resource at another URI with a GET request.
    303 SEE_OTHER "See Other";
    /// `304`. The response has not been modified.
    304 NOT_MODIFIED "Not Modified";
    /// `307`. Get the requested resource at another URI with the same method.
    307 TEMPORARY_REDIRECT "Temporary Redirect";
    /// `308`. The resource is now permanently located at another URI.
    308 PERMANENT_REDIRECT "Permanent Redirect";
    /// `400`. The server cannot or will not process the request due to a client error.
    400 BAD_REQUEST "Bad Request";
    /// `401`. Semantically this response means "unauthenticated".
    401 UNAUTHORIZED "Unauthorized";
    /// `403`. The client does not have access rights to the content.
    403 FORBIDDEN "Forbidden";
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND "Not Found";
    /// `405`. The request method is not supported by the target resource.
    405 METHOD_NOT_ALLOWED "Method Not Allowed";
    /// `408`. The server would like to shut down this unused connection.
    408 REQUEST_TIMEOUT "Request Timeout";
    /// `411`. The server requires the `Content-Length` header field.
    411 LENGTH_REQUIRED "Length Required";
    /// `413`. The request body is larger than limits defined by server.
    413 CONTENT_TOO_LARGE "Content Too Large";
    /// `414`. The URI requested by the client is too long.
    414 URI_TOO_LONG "URI Too Long";
    /// `415`. The media format of the requested data is not supported.
    415 UNSUPPORTED_MEDIA_TYPE "Unsupported Media Type";
    /// `418`. The server refuses the attempt to brew coffee with a teapot.
    418 IM_A_TEAPOT "I'm a teapot";
    /// `429`. The user has sent too many requests in a given amount of time.
    429 TOO_MANY_REQUESTS "Too Many Requests";
    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    /// `501`. The request method is not supported by the server.
    501 NOT_IMPLEMENTED "Not Implemented";
    /// `502`. The server, working as a gateway, got an invalid response.
    502 BAD_GATEWAY "Bad Gateway";
    /// `503`. The server is not ready to handle the request.
    503 SERVICE_UNAVAILABLE "Service Unavailable";
    /// `504`. The server, working as a gateway, cannot get a response in time.
    504 GATEWAY_TIMEOUT "Gateway Timeout";
    /// `505`. The HTTP version used in the request is not supported by the server.
    505 HTTP_VERSION_NOT_SUPPORTED "HTTP Version Not Supported";
}

impl From<u16> for StatusCode {
    #[inline]
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl PartialEq<u16> for StatusCode {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {reason}", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.0).finish()
    }
}

#[test]
fn test_status_code() {
    assert_eq!(StatusCode::from_bytes(b"200"), Some(StatusCode::OK));
    assert_eq!(StatusCode::from_bytes(b"404"), Some(StatusCode::NOT_FOUND));
    assert_eq!(StatusCode::from_bytes(b"599").map(|s| s.as_u16()), Some(599));
    assert_eq!(StatusCode::from_bytes(b""), None);
    assert_eq!(StatusCode::from_bytes(b"+200"), None);
    assert_eq!(StatusCode::from_bytes(b"OK"), None);
    assert_eq!(StatusCode::from_bytes(b"70000"), None);

    assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
    assert_eq!(StatusCode::from_u16(599).to_string(), "599");
    assert!(StatusCode::CREATED.is_success());
    assert!(StatusCode::BAD_GATEWAY.is_server_error());
    assert!(!StatusCode::FOUND.is_client_error());
}
