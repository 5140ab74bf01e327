use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("PEM decode error: {0}")]
    Pem(#[from] shinobi_pem::error::Error),

    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("DER decode error: {0}")]
    Der(#[from] shinobi_der::error::Error),

    #[error("ASN.1 decode error: {0}")]
    Asn1(#[from] shinobi_asn1::error::Error),

    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),
}
