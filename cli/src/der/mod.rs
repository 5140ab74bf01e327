pub(crate) mod decode;
pub(crate) mod dump;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum DerCommands {
    /// Decode DER and print the TLV tree
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Hexdump the DER bytes (after PEM/base64 unwrapping)
    Dump {
        #[command(flatten)]
        config: dump::Config,
    },
}
