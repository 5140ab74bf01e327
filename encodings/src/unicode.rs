//! UTF-16 and UTF-32 hex representations with selectable endianness.
//!
//! UTF-16 operates on code units, UTF-32 on code points. Decoding validates
//! group length and scalar values.

use crate::error::Error;
use crate::hexbin::decode_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

pub fn utf16_to_hex(input: &str, endian: Endian) -> String {
    let mut out = String::new();
    for unit in input.encode_utf16() {
        let bytes = match endian {
            Endian::Little => unit.to_le_bytes(),
            Endian::Big => unit.to_be_bytes(),
        };
        out.push_str(&hex::encode(bytes));
    }
    out
}

pub fn hex_to_utf16(input: &str, endian: Endian) -> Result<String, Error> {
    let bytes = decode_hex(input)?;
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidHexGroup(4));
    }
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            match endian {
                Endian::Little => u16::from_le_bytes(pair),
                Endian::Big => u16::from_be_bytes(pair),
            }
        })
        .collect();
    String::from_utf16(&units).map_err(|_| Error::InvalidUtf16)
}

pub fn utf32_to_hex(input: &str, endian: Endian) -> String {
    let mut out = String::new();
    for ch in input.chars() {
        let bytes = match endian {
            Endian::Little => (ch as u32).to_le_bytes(),
            Endian::Big => (ch as u32).to_be_bytes(),
        };
        out.push_str(&hex::encode(bytes));
    }
    out
}

pub fn hex_to_utf32(input: &str, endian: Endian) -> Result<String, Error> {
    let bytes = decode_hex(input)?;
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidHexGroup(8));
    }
    bytes
        .chunks(4)
        .map(|quad| {
            let quad = [quad[0], quad[1], quad[2], quad[3]];
            let cp = match endian {
                Endian::Little => u32::from_le_bytes(quad),
                Endian::Big => u32::from_be_bytes(quad),
            };
            char::from_u32(cp).ok_or(Error::InvalidCodePoint(cp))
        })
        .collect()
}
