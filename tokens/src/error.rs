use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Token does not split into the expected dot-separated parts.
    #[error("malformed token")]
    MalformedToken,

    #[error("base64 decode: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid secret")]
    InvalidSecret,

    #[error("invalid hex secret: {0}")]
    InvalidHexSecret(#[from] hex::FromHexError),

    #[error("digits must be between 1 and 9, got {0}")]
    InvalidDigits(u32),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,

    #[error("encoding: {0}")]
    Encoding(#[from] shinobi_encodings::error::Error),
}
