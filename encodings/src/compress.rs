//! Gzip and raw-deflate text compression, base64-armored.

use std::io::{Read, Write};

use base64::{Engine, engine::general_purpose::STANDARD};
use flate2::Compression;

use crate::error::Error;

pub fn gzip_compress(input: &str) -> Result<String, Error> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input.as_bytes())?;
    Ok(STANDARD.encode(encoder.finish()?))
}

pub fn gzip_decompress(input: &str) -> Result<String, Error> {
    let clean: String = input.split_whitespace().collect();
    let bytes = STANDARD.decode(clean)?;
    let mut decoder = flate2::read::GzDecoder::new(bytes.as_slice());
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}

pub fn deflate_compress(input: &str) -> Result<String, Error> {
    let mut encoder = flate2::write::DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input.as_bytes())?;
    Ok(STANDARD.encode(encoder.finish()?))
}

pub fn deflate_decompress(input: &str) -> Result<String, Error> {
    let clean: String = input.split_whitespace().collect();
    let bytes = STANDARD.decode(clean)?;
    inflate_raw(&bytes)
}

/// Raw-deflate inflate of already-decoded bytes, e.g. a SAML redirect
/// payload.
pub fn inflate_raw(bytes: &[u8]) -> Result<String, Error> {
    let mut decoder = flate2::read::DeflateDecoder::new(bytes);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}
