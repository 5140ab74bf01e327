use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid binary octet '{0}'")]
    InvalidBinaryOctet(String),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("base64 decode: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("invalid base32 character '{0}'")]
    InvalidBase32Char(char),

    #[error("invalid base58 character '{0}'")]
    InvalidBase58Char(char),

    #[error("invalid ascii85 character '{0}'")]
    InvalidAscii85Char(char),

    #[error("ascii85 group of a single character cannot be decoded")]
    InvalidAscii85Length,

    #[error("hex length must be a multiple of {0}")]
    InvalidHexGroup(usize),

    #[error("invalid UTF-16 data")]
    InvalidUtf16,

    #[error("invalid code point 0x{0:08x}")]
    InvalidCodePoint(u32),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("message needs {needed} carrier bits but the image provides {available}")]
    CarrierTooSmall { needed: usize, available: usize },

    #[error("carrier data ended before the embedded message")]
    TruncatedCarrier,
}
