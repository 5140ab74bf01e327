use clap::Args;

use crate::error::Result;
use crate::utils::{der_bytes_from_input, format_hex_dump, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the DER, PEM, or base64 file. If not specified, reads from
    /// stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let der_bytes = der_bytes_from_input(&input_bytes)?;
    print!("{}", format_hex_dump(&der_bytes));
    Ok(())
}
