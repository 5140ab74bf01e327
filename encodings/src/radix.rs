//! Base-N text encodings: Base64, Base32 (RFC 4648), Base58 (Bitcoin
//! alphabet), and Ascii85 (no `<~ ~>` framing).

use base64::{Engine, engine::general_purpose::STANDARD};
use num_bigint::BigUint;

use crate::error::Error;

pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

pub fn base64_decode(input: &str) -> Result<String, Error> {
    let clean: String = input.split_whitespace().collect();
    let bytes = STANDARD.decode(clean)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

const B32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub fn base32_encode(input: &str) -> String {
    let mut out = String::new();
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for &byte in input.as_bytes() {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(B32_ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(B32_ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    while !out.is_empty() && out.len() % 8 != 0 {
        out.push('=');
    }
    out
}

pub fn base32_decode(input: &str) -> Result<String, Error> {
    let bytes = base32_decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

/// Base32 decode to raw bytes. Case-insensitive, padding optional.
pub fn base32_decode_bytes(input: &str) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for ch in input.chars() {
        if ch.is_whitespace() || ch == '=' {
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        let index = B32_ALPHABET
            .iter()
            .position(|&a| a as char == upper)
            .ok_or(Error::InvalidBase32Char(ch))?;
        buffer = (buffer << 5) | index as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((buffer >> bits) & 0xff) as u8);
        }
    }
    Ok(out)
}

const B58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn base58_encode(input: &str) -> String {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return String::new();
    }
    // Each leading zero byte becomes a literal '1'.
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let mut out: String = std::iter::repeat_n('1', zeros).collect();
    let rest = &bytes[zeros..];
    if !rest.is_empty() {
        for digit in BigUint::from_bytes_be(rest).to_radix_be(58) {
            out.push(B58_ALPHABET[digit as usize] as char);
        }
    }
    out
}

pub fn base58_decode(input: &str) -> Result<String, Error> {
    let bytes = base58_decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

pub fn base58_decode_bytes(input: &str) -> Result<Vec<u8>, Error> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let mut digits = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let index = B58_ALPHABET
            .iter()
            .position(|&a| a as char == ch)
            .ok_or(Error::InvalidBase58Char(ch))?;
        digits.push(index as u8);
    }
    let zeros = input.chars().take_while(|&c| c == '1').count();
    let mut out = vec![0u8; zeros];
    if zeros < digits.len() {
        let value = BigUint::from_radix_be(&digits, 58).unwrap_or_default();
        out.extend(value.to_bytes_be());
    }
    Ok(out)
}

pub fn ascii85_encode(input: &str) -> String {
    let data = input.as_bytes();
    let mut out = String::new();
    for chunk in data.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let num = u32::from_be_bytes(group);
        if chunk.len() == 4 && num == 0 {
            out.push('z');
            continue;
        }
        let mut digits = [0u8; 5];
        let mut div = num;
        for slot in digits.iter_mut().rev() {
            *slot = (div % 85) as u8;
            div /= 85;
        }
        for digit in digits.iter().take(chunk.len() + 1) {
            out.push((33 + digit) as char);
        }
    }
    out
}

pub fn ascii85_decode(input: &str) -> Result<String, Error> {
    let clean: String = input.split_whitespace().collect();
    let mut out = Vec::new();
    let mut chars = clean.chars().peekable();
    let mut group = Vec::with_capacity(5);
    while let Some(&ch) = chars.peek() {
        // 'z' is shorthand for a full zero group; only valid on a boundary,
        // and the loop is always on a boundary here.
        if ch == 'z' {
            out.extend_from_slice(&[0, 0, 0, 0]);
            chars.next();
            continue;
        }
        group.clear();
        for _ in 0..5 {
            match chars.next() {
                Some(c) => group.push(c),
                None => break,
            }
        }
        let pad = 5 - group.len();
        if group.len() == 1 {
            return Err(Error::InvalidAscii85Length);
        }
        let mut num = 0u32;
        for i in 0..5 {
            // Partial groups pad with 'u', the highest digit.
            let c = group.get(i).copied().unwrap_or('u');
            let value = (c as u32).wrapping_sub(33);
            if value > 84 {
                return Err(Error::InvalidAscii85Char(c));
            }
            num = num
                .checked_mul(85)
                .and_then(|n| n.checked_add(value))
                .ok_or(Error::InvalidAscii85Char(c))?;
        }
        let bytes = num.to_be_bytes();
        out.extend_from_slice(&bytes[..4 - pad]);
    }
    String::from_utf8(out).map_err(|_| Error::InvalidUtf8)
}
