//! LSB steganography over raw RGBA pixel data.
//!
//! The message is a 4-byte little-endian length header followed by UTF-8
//! text, packed one bit at a time into the least significant bit of each
//! R/G/B channel byte. Alpha bytes (every fourth) are skipped so the embed
//! is invisible to compositing. Bits within each payload byte are written
//! least-significant first.

use crate::error::Error;

pub fn embed_text(pixels: &mut [u8], text: &str) -> Result<(), Error> {
    let bytes = text.as_bytes();
    let mut payload = Vec::with_capacity(4 + bytes.len());
    payload.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    payload.extend_from_slice(bytes);

    let needed = payload.len() * 8;
    let available = carrier_capacity(pixels.len());
    if needed > available {
        return Err(Error::CarrierTooSmall { needed, available });
    }

    let mut index = 0;
    for byte in &payload {
        for bit in 0..8 {
            while index % 4 == 3 {
                index += 1;
            }
            let value = (byte >> bit) & 1;
            pixels[index] = (pixels[index] & 0xfe) | value;
            index += 1;
        }
    }
    Ok(())
}

pub fn extract_text(pixels: &[u8]) -> Result<String, Error> {
    let mut bits = pixels
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 4 != 3)
        .map(|(_, b)| b & 1);

    let header = read_bytes(&mut bits, 4)?;
    let len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let message = read_bytes(&mut bits, len)?;
    String::from_utf8(message).map_err(|_| Error::InvalidUtf8)
}

fn read_bytes(bits: &mut impl Iterator<Item = u8>, count: usize) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut byte = 0u8;
        for bit in 0..8 {
            let value = bits.next().ok_or(Error::TruncatedCarrier)?;
            byte |= value << bit;
        }
        out.push(byte);
    }
    Ok(out)
}

fn carrier_capacity(pixel_bytes: usize) -> usize {
    // Three usable bytes per RGBA group, plus any partial tail.
    (pixel_bytes / 4) * 3 + (pixel_bytes % 4).min(3)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn carrier(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[rstest(message, case("hi"), case(""), case("secret message with spaces"))]
    fn test_embed_extract_roundtrip(message: &str) {
        let mut pixels = carrier(4096);
        embed_text(&mut pixels, message).unwrap();
        assert_eq!(message, extract_text(&pixels).unwrap());
    }

    #[test]
    fn test_embed_skips_alpha_bytes() {
        let mut pixels = carrier(4096);
        let before: Vec<u8> = pixels.iter().skip(3).step_by(4).copied().collect();
        embed_text(&mut pixels, "payload").unwrap();
        let after: Vec<u8> = pixels.iter().skip(3).step_by(4).copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_embed_changes_only_low_bits() {
        let mut pixels = carrier(4096);
        let original = pixels.clone();
        embed_text(&mut pixels, "payload").unwrap();
        for (a, b) in original.iter().zip(pixels.iter()) {
            assert_eq!(a & 0xfe, b & 0xfe);
        }
    }

    #[test]
    fn test_embed_too_large_message() {
        let mut pixels = carrier(64);
        let result = embed_text(&mut pixels, "this message will not fit in a tiny carrier");
        assert!(matches!(result, Err(Error::CarrierTooSmall { .. })));
    }

    #[test]
    fn test_extract_from_truncated_carrier() {
        let mut pixels = carrier(4096);
        embed_text(&mut pixels, "a fairly long hidden message").unwrap();
        let result = extract_text(&pixels[..32]);
        assert!(matches!(result, Err(Error::TruncatedCarrier)));
    }
}
