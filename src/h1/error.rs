/// Response decomposition error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Status line have less than two tokens.
    MissingStatus,
    /// Status code is not an integer.
    InvalidStatus,
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MissingStatus => f.write_str("status line missing status code"),
            Self::InvalidStatus => f.write_str("invalid status code"),
        }
    }
}
