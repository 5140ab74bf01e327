use thiserror::Error;

/// Errors raised while reading a DER byte stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),

    #[error("parser incomplete")]
    Incomplete,

    /// DER requires definite lengths; a 0x80 length octet is BER-only.
    #[error("indefinite length is not valid in DER")]
    IndefiniteLength,

    /// A length field wider than 8 octets cannot fit in a u64.
    #[error("length field too large")]
    LengthOverflow,

    #[error("empty input")]
    Empty,
}

impl nom::error::ParseError<&[u8]> for Error {
    fn from_error_kind(_input: &[u8], kind: nom::error::ErrorKind) -> Self {
        Error::Parser(kind)
    }

    fn append(_input: &[u8], _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl Error {
    pub(crate) fn from_nom(err: nom::Err<Error>) -> Self {
        match err {
            nom::Err::Incomplete(_) => Error::Incomplete,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        }
    }
}
