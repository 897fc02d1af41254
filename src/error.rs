use std::{fmt, io, str::Utf8Error};

use crate::h1::ParseError;
use crate::uri::UriError;

/// An error that can occur while executing a request.
///
/// Every error is terminal for the request, nothing is retried.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of [`Error`].
#[derive(Debug)]
pub enum ErrorKind {
    /// URL scheme is not `http`, no connection was attempted.
    UnsupportedScheme,
    /// URL cannot be decomposed into a target, no connection was attempted.
    InvalidUrl(UriError),
    /// Failed to resolve or connect to the target.
    ConnectionFailure(io::Error),
    /// Failed to send the request or receive the response.
    TransferFailure(io::Error),
    /// Response is not valid UTF-8.
    DecodeFailure(Utf8Error),
    /// Response status line does not contain a status code.
    MalformedResponse(ParseError),
}

use ErrorKind as Kind;

impl Error {
    /// Returns the error kind.
    #[inline]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume error returning the error kind.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the error occurs before any network operation.
    #[inline]
    pub const fn is_url(&self) -> bool {
        matches!(self.kind, Kind::UnsupportedScheme | Kind::InvalidUrl(_))
    }

    pub(crate) fn connection(err: io::Error) -> Self {
        Kind::ConnectionFailure(err).into()
    }

    pub(crate) fn transfer(err: io::Error) -> Self {
        Kind::TransferFailure(err).into()
    }
}

impl From<Kind> for Error {
    fn from(kind: Kind) -> Self {
        Self { kind }
    }
}

impl From<UriError> for Error {
    fn from(v: UriError) -> Self {
        match v {
            UriError::UnsupportedScheme => Kind::UnsupportedScheme.into(),
            err => Kind::InvalidUrl(err).into(),
        }
    }
}

impl From<Utf8Error> for Error {
    fn from(v: Utf8Error) -> Self {
        Kind::DecodeFailure(v).into()
    }
}

impl From<ParseError> for Error {
    fn from(v: ParseError) -> Self {
        Kind::MalformedResponse(v).into()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Kind::UnsupportedScheme => None,
            Kind::InvalidUrl(err) => Some(err),
            Kind::ConnectionFailure(err) | Kind::TransferFailure(err) => Some(err),
            Kind::DecodeFailure(err) => Some(err),
            Kind::MalformedResponse(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::UnsupportedScheme => f.write_str("only http is supported"),
            Kind::InvalidUrl(err) => write!(f, "invalid url: {err}"),
            Kind::ConnectionFailure(err) => write!(f, "connection failed: {err}"),
            Kind::TransferFailure(err) => write!(f, "transfer failed: {err}"),
            Kind::DecodeFailure(err) => write!(f, "response is not utf-8: {err}"),
            Kind::MalformedResponse(err) => write!(f, "malformed response: {err}"),
        }
    }
}
