//! Error types for ASN.1 parsing and encoding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while interpreting or re-encoding ASN.1 elements.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid boolean")]
    InvalidBoolean,

    #[error("INTEGER: no data")]
    IntegerNoData,

    #[error("parse int error: {0}")]
    ParseInt(ParseIntError),

    #[error("OBJECT IDENTIFIER: no data")]
    ObjectIdentifierNoData,
    #[error("OBJECT IDENTIFIER: incomplete encoding")]
    ObjectIdentifierIncompleteEncoding,
    #[error("OBJECT IDENTIFIER: too few components (need at least 2)")]
    ObjectIdentifierTooFewComponents,

    #[error("BIT STRING: no data")]
    BitStringNoData,
    #[error("BIT STRING: unused bits {0} out of range (must be 0-7)")]
    BitStringUnusedBitsOutOfRange(u8),

    #[error("UTF8String: invalid UTF-8")]
    Utf8StringInvalidUtf8,
    #[error("PrintableString: invalid encoding")]
    PrintableStringInvalidEncoding,
    #[error("IA5String: invalid encoding")]
    Ia5StringInvalidEncoding,

    #[error("time value: invalid encoding")]
    TimeInvalidEncoding,
    #[error("time value: unrecognized format '{0}'")]
    TimeUnrecognizedFormat(String),

    #[error("invalid context-specific value: slot {slot}, {msg}")]
    InvalidContextSpecific { slot: u8, msg: String },

    #[error("invalid DER encoding: {0}")]
    FailedToDecodeDer(#[source] shinobi_der::error::Error),
}
