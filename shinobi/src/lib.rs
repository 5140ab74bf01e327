//! # shinobi
//!
//! Core traits for the shinobi string and certificate toolbox.
//!
//! Every inspection pipeline in this workspace is a chain of typed
//! conversions:
//!
//! ```text
//! PEM → Vec<u8> → Der → Asn1Object → CertificateSummary
//! ```
//!
//! Each arrow is a [`decoder::Decoder`] implementation; [`encoder::Encoder`]
//! walks the same chain in reverse where a step is reversible (ASN.1 element
//! trees re-encode to DER bytes, PEM re-wraps raw bytes).
//!
//! The marker traits (`DecodableFrom`, `EncodableTo`) pin down which
//! conversions exist, so an invalid step is a compile error rather than a
//! runtime surprise.

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
