use clap::Args;
use shinobi::decoder::Decoder;
use shinobi_der::{Der, Tlv};

use crate::error::Result;
use crate::utils::{der_bytes_from_input, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER, PEM, or base64 file. If not specified, reads from
    /// stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let der_bytes = der_bytes_from_input(&input_bytes)?;
    let der: Der = der_bytes.decode()?;

    let mut output = String::new();
    for tlv in der.elements() {
        format_tlv(tlv, 0, &mut output);
    }
    print!("{}", output);
    Ok(())
}

fn format_tlv(tlv: &Tlv, depth: usize, output: &mut String) {
    let indent = "  ".repeat(depth);
    match tlv.tlvs() {
        Some(children) => {
            output.push_str(&format!(
                "{}tag 0x{:02x} len {} ({} children)\n",
                indent,
                tlv.tag().raw(),
                tlv.length(),
                children.len()
            ));
            for child in children {
                format_tlv(child, depth + 1, output);
            }
        }
        None => {
            let data = tlv.data().unwrap_or_default();
            let preview: String = data
                .iter()
                .take(16)
                .map(|b| format!("{:02x}", b))
                .collect();
            let ellipsis = if data.len() > 16 { ".." } else { "" };
            output.push_str(&format!(
                "{}tag 0x{:02x} len {} [{}{}]\n",
                indent,
                tlv.tag().raw(),
                tlv.length(),
                preview,
                ellipsis
            ));
        }
    }
}
