//! Request target decomposition.
//!
//! A [`Target`] is the part of a URL that this client needs to open a connection and write a
//! request line:
//!
//! ```not_rust
//!   http://user@example.com:8042/over/there?name=ferret#nose
//!          \___/\_________/ \__/\_________/ \_________/ \__/
//!            |       |        |      |           |        |
//!        dropped   host     port   path        query   dropped
//! ```
//!
//! Only the `http` scheme is supported. Percent encoding is never decoded or encoded.
mod parser;
mod error;


pub use error::UriError;

/// Default port for the `http` scheme.
pub const DEFAULT_PORT: u16 = 80;

/// Decomposed HTTP request target.
///
/// Constructed once per request with [`Target::parse`], immutable afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Target {
    host: String,
    port: u16,
    path: String,
}

impl Target {
    /// Parse URL into request target.
    ///
    /// # Errors
    ///
    /// Returns [`UriError::UnsupportedScheme`] if the scheme is not `http`, other variants if
    /// the authority is malformed.
    #[inline]
    pub fn parse<S: AsRef<str>>(url: S) -> Result<Self, UriError> {
        parser::parse_http(url.as_ref())
    }

    /// Returns the lowercased host, without IPv6 brackets, e.g: `example.com`.
    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port, [`DEFAULT_PORT`] if the URL does not specify one.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns path and query, e.g: `/over/there?name=ferret`.
    ///
    /// Never empty, an URL without path returns `/`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns `true` if host is an IPv6 literal.
    #[inline]
    pub fn is_ipv6(&self) -> bool {
        self.host.contains(':')
    }
}

// ===== Formatting =====

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .finish()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ipv6() {
            write!(f, "http://[{}]:{}{}", self.host, self.port, self.path)
        } else {
            write!(f, "http://{}:{}{}", self.host, self.port, self.path)
        }
    }
}
