use clap::Subcommand;

use crate::error::Result;
use crate::utils::read_input_string;

#[derive(Subcommand)]
pub(crate) enum CipherCommands {
    /// Encrypt text with a password (AES-256-GCM, PBKDF2-SHA256 key)
    Encrypt {
        /// Password to derive the key from
        #[arg(short, long)]
        password: String,

        /// Path to the plaintext file. If not specified, reads from stdin
        file: Option<String>,
    },
    /// Decrypt a base64 payload produced by `cipher encrypt`
    Decrypt {
        #[arg(short, long)]
        password: String,

        /// Path to the payload file. If not specified, reads from stdin
        file: Option<String>,
    },
}

pub(crate) fn execute(command: CipherCommands) -> Result<()> {
    match command {
        CipherCommands::Encrypt { password, file } => {
            let plaintext = read_input_string(file.as_deref())?;
            println!("{}", shinobi_cipher::encrypt(&plaintext, &password)?);
        }
        CipherCommands::Decrypt { password, file } => {
            let payload = read_input_string(file.as_deref())?;
            println!("{}", shinobi_cipher::decrypt(&payload, &password)?);
        }
    }
    Ok(())
}
