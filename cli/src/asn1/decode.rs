use clap::Args;
use shinobi::decoder::Decoder;
use shinobi_asn1::Asn1Object;
use shinobi_der::Der;

use crate::error::Result;
use crate::utils::{der_bytes_from_input, read_input};

use super::format::format_asn1;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER, PEM, or base64 file. If not specified, reads from
    /// stdin
    file: Option<String>,

    /// Try to parse implicit-tagged OCTET STRING content as nested ASN.1
    #[arg(long)]
    parse_implicit: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let der_bytes = der_bytes_from_input(&input_bytes)?;
    let der: Der = der_bytes.decode()?;
    let object: Asn1Object = der.decode()?;

    print!("{}", format_asn1(&object, config.parse_implicit));
    Ok(())
}
