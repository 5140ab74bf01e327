use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PEM decode error: {0}")]
    Pem(#[from] shinobi_pem::error::Error),

    #[error("DER decode error: {0}")]
    Der(#[from] shinobi_der::error::Error),

    #[error("ASN.1 decode error: {0}")]
    Asn1(#[from] shinobi_asn1::error::Error),

    #[error("X.509 parse error: {0}")]
    X509(#[from] shinobi_x509::error::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] shinobi_encodings::error::Error),

    #[error("text error: {0}")]
    Strings(#[from] shinobi_strings::error::Error),

    #[error("hashing error: {0}")]
    Hashing(#[from] shinobi_hashing::error::Error),

    #[error("cipher error: {0}")]
    Cipher(#[from] shinobi_cipher::Error),

    #[error("token error: {0}")]
    Token(#[from] shinobi_tokens::error::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
