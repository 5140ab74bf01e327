use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid HMAC key length")]
    InvalidKeyLength,

    #[error("bcrypt: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("argon2: {0}")]
    Argon2(String),
}
