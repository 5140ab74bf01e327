use std::fs;
use std::io::{self, Read};
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::STANDARD};
use shinobi::decoder::Decoder;
use shinobi_pem::Pem;

use crate::error::Result;

/// Read input from a file or stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<Vec<u8>> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read input from a file or stdin as text, trimming the trailing newline a
/// shell pipe usually appends.
pub(crate) fn read_input_string(file: Option<&str>) -> Result<String> {
    let bytes = read_input(file)?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Interpret certificate-ish input as DER bytes: PEM text, bare base64, or
/// raw binary DER, in that order of preference.
pub(crate) fn der_bytes_from_input(input: &[u8]) -> Result<Vec<u8>> {
    if let Ok(text) = std::str::from_utf8(input) {
        if text.contains("-----BEGIN") {
            let pem = Pem::from_str(text)?;
            return Ok(pem.decode()?);
        }
        let clean: String = text.split_whitespace().collect();
        if !clean.is_empty() {
            if let Ok(bytes) = STANDARD.decode(&clean) {
                return Ok(bytes);
            }
        }
    }
    Ok(input.to_vec())
}

/// Format binary data as a hexdump (xxd style): offset, 16 hex bytes split
/// into two groups of 8, ASCII gutter.
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;

    data.chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(line, chunk)| {
            let hex: String = (0..BYTES_PER_LINE)
                .map(|i| {
                    let cell = match chunk.get(i) {
                        Some(byte) => format!("{:02x} ", byte),
                        None => "   ".to_string(),
                    };
                    if i == 7 { cell + " " } else { cell }
                })
                .collect();
            let ascii: String = chunk
                .iter()
                .map(|&b| {
                    if b.is_ascii_graphic() || b == b' ' {
                        b as char
                    } else {
                        '.'
                    }
                })
                .collect();
            format!("{:08x}  {} |{}|\n", line * BYTES_PER_LINE, hex, ascii)
        })
        .collect()
}
