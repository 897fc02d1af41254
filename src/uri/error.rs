/// A possible error value when parsing URL.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum UriError {
    /// Scheme is missing or is not `http`.
    UnsupportedScheme,
    /// Authority does not contain a host.
    EmptyHost,
    /// Port is not a number in `0..=65535`.
    InvalidPort,
    /// Invalid character found.
    Char,
}

// ===== Error =====

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl UriError {
            pub(crate) const fn message(&self) -> &'static str {
                use UriError::*;
                match self {
                    $($variant => $msg,)*
                }
            }
        }
    };
}

gen_error! {
    UnsupportedScheme => "only http is supported",
    EmptyHost => "URL has no host",
    InvalidPort => "URL contains invalid port",
    Char => "URL contains invalid character",
}

impl std::error::Error for UriError { }

impl std::fmt::Display for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
