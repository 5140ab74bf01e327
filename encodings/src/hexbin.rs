//! Hex and binary-octet text representations.
//!
//! Decoders tolerate whitespace anywhere in the input; binary octets are
//! space-separated groups of bits, one byte each.

use crate::error::Error;

pub fn text_to_hex(input: &str) -> String {
    hex::encode(input.as_bytes())
}

pub fn hex_to_text(input: &str) -> Result<String, Error> {
    let bytes = decode_hex(input)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

pub fn text_to_binary(input: &str) -> String {
    input
        .bytes()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn binary_to_text(input: &str) -> Result<String, Error> {
    let bytes = decode_binary(input)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

pub fn hex_to_binary(input: &str) -> Result<String, Error> {
    let bytes = decode_hex(input)?;
    Ok(bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" "))
}

pub fn binary_to_hex(input: &str) -> Result<String, Error> {
    let bytes = decode_binary(input)?;
    Ok(bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" "))
}

pub(crate) fn decode_hex(input: &str) -> Result<Vec<u8>, Error> {
    let clean: String = input.split_whitespace().collect();
    Ok(hex::decode(clean)?)
}

fn decode_binary(input: &str) -> Result<Vec<u8>, Error> {
    input
        .split_whitespace()
        .map(|octet| {
            u8::from_str_radix(octet, 2).map_err(|_| Error::InvalidBinaryOctet(octet.to_string()))
        })
        .collect()
}
