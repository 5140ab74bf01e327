use clap::{Args, Subcommand, ValueEnum};
use shinobi_hashing::digest::{Algorithm, digest_hex};
use shinobi_hashing::mac::{HmacAlgorithm, hmac_hex};
use shinobi_hashing::password;

use crate::error::Result;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct DigestConfig {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum MacAlg {
    Sha256,
    Sha512,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PasswordScheme {
    Bcrypt,
    Argon2,
}

#[derive(Subcommand)]
pub(crate) enum HashCommands {
    /// MD5 digest (for checksums, not security)
    Md5 {
        #[command(flatten)]
        config: DigestConfig,
    },
    /// SHA-1 digest
    Sha1 {
        #[command(flatten)]
        config: DigestConfig,
    },
    /// SHA-256 digest
    Sha256 {
        #[command(flatten)]
        config: DigestConfig,
    },
    /// SHA-512 digest
    Sha512 {
        #[command(flatten)]
        config: DigestConfig,
    },
    /// HMAC over the input
    Hmac {
        /// Secret key
        #[arg(short, long)]
        key: String,

        #[arg(short, long, value_enum, default_value = "sha256")]
        algorithm: MacAlg,

        #[command(flatten)]
        config: DigestConfig,
    },
    /// Hash or verify a password (bcrypt or Argon2id)
    Password {
        #[arg(value_enum)]
        scheme: PasswordScheme,

        /// The password to hash or verify
        password: String,

        /// Verify against this existing hash instead of creating one
        #[arg(long)]
        verify: Option<String>,

        /// bcrypt cost factor
        #[arg(long, default_value_t = 10)]
        cost: u32,
    },
}

pub(crate) fn execute(command: HashCommands) -> Result<()> {
    match command {
        HashCommands::Md5 { config } => print_digest(Algorithm::Md5, config),
        HashCommands::Sha1 { config } => print_digest(Algorithm::Sha1, config),
        HashCommands::Sha256 { config } => print_digest(Algorithm::Sha256, config),
        HashCommands::Sha512 { config } => print_digest(Algorithm::Sha512, config),
        HashCommands::Hmac {
            key,
            algorithm,
            config,
        } => {
            let data = read_trimmed(config)?;
            let algorithm = match algorithm {
                MacAlg::Sha256 => HmacAlgorithm::Sha256,
                MacAlg::Sha512 => HmacAlgorithm::Sha512,
            };
            println!("{}", hmac_hex(algorithm, key.as_bytes(), &data)?);
            Ok(())
        }
        HashCommands::Password {
            scheme,
            password,
            verify,
            cost,
        } => {
            match (scheme, verify) {
                (PasswordScheme::Bcrypt, None) => {
                    println!("{}", password::bcrypt_hash(&password, cost)?)
                }
                (PasswordScheme::Bcrypt, Some(hash)) => {
                    println!("{}", verdict(password::bcrypt_verify(&password, &hash)?))
                }
                (PasswordScheme::Argon2, None) => println!("{}", password::argon2_hash(&password)?),
                (PasswordScheme::Argon2, Some(hash)) => {
                    println!("{}", verdict(password::argon2_verify(&password, &hash)?))
                }
            }
            Ok(())
        }
    }
}

fn print_digest(algorithm: Algorithm, config: DigestConfig) -> Result<()> {
    let data = read_trimmed(config)?;
    println!("{}", digest_hex(algorithm, &data));
    Ok(())
}

/// Digest the exact bytes of a file, but strip the trailing newline from
/// piped text so `echo abc | shinobi hash sha256` matches the usual vectors.
fn read_trimmed(config: DigestConfig) -> Result<Vec<u8>> {
    let mut data = read_input(config.file.as_deref())?;
    if config.file.is_none() && data.last() == Some(&b'\n') {
        data.pop();
        if data.last() == Some(&b'\r') {
            data.pop();
        }
    }
    Ok(data)
}

fn verdict(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}
