use clap::{Parser, Subcommand};

mod asn1;
mod cert;
mod cipher;
mod der;
mod encode;
mod error;
mod hash;
mod output;
mod random;
mod text;
mod time;
mod token;
mod utils;

use crate::asn1::Asn1Commands;
use crate::cert::CertCommands;
use crate::cipher::CipherCommands;
use crate::der::DerCommands;
use crate::encode::EncodeCommands;
use crate::error::Result;
use crate::hash::HashCommands;
use crate::text::TextCommands;
use crate::time::TimeCommands;
use crate::token::TokenCommands;

#[derive(Parser)]
#[command(name = "shinobi")]
#[command(about = "String, encoding, and certificate toolbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Certificate operations
    Cert {
        #[command(subcommand)]
        command: CertCommands,
    },
    /// DER encoding operations
    Der {
        #[command(subcommand)]
        command: DerCommands,
    },
    /// ASN.1 operations
    Asn1 {
        #[command(subcommand)]
        command: Asn1Commands,
    },
    /// Encoders and decoders
    Encode {
        #[command(subcommand)]
        command: EncodeCommands,
    },
    /// Text transforms
    Text {
        #[command(subcommand)]
        command: TextCommands,
    },
    /// Digests, HMAC, and password hashing
    Hash {
        #[command(subcommand)]
        command: HashCommands,
    },
    /// Password-based encryption
    Cipher {
        #[command(subcommand)]
        command: CipherCommands,
    },
    /// JWT, SAML, OTP, and PKCE helpers
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
    /// Generate random strings and passwords
    Random {
        #[command(flatten)]
        config: random::Config,
    },
    /// Timestamp conversion
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cert { command } => match command {
            CertCommands::Inspect { config } => cert::inspect::execute(config)?,
        },
        Commands::Der { command } => match command {
            DerCommands::Decode { config } => der::decode::execute(config)?,
            DerCommands::Dump { config } => der::dump::execute(config)?,
        },
        Commands::Asn1 { command } => match command {
            Asn1Commands::Decode { config } => asn1::decode::execute(config)?,
        },
        Commands::Encode { command } => encode::execute(command)?,
        Commands::Text { command } => text::execute(command)?,
        Commands::Hash { command } => hash::execute(command)?,
        Commands::Cipher { command } => cipher::execute(command)?,
        Commands::Token { command } => token::execute(command)?,
        Commands::Random { config } => random::execute(config)?,
        Commands::Time { command } => time::execute(command)?,
    }

    Ok(())
}
