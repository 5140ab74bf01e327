use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when parsing or decoding PEM data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Missing the opening boundary (e.g. `-----BEGIN CERTIFICATE-----`).
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// Missing the closing boundary (e.g. `-----END CERTIFICATE-----`).
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    /// No data lines between the boundaries.
    #[error("missing PEM data")]
    MissingData,

    /// The BEGIN and END labels do not match.
    #[error("label doesn't match")]
    LabelMismatch,

    /// A blank or malformed line inside the base64 body.
    #[error("invalid base64 line")]
    InvalidBase64Line,

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
