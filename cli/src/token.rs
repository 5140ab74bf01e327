use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Subcommand, ValueEnum};
use shinobi_tokens::otp::{self, SecretFormat};
use shinobi_tokens::{jwt, pkce, saml};

use crate::error::{Error, Result};
use crate::utils::read_input_string;

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum SecretFormatArg {
    Text,
    Hex,
    Base32,
}

impl From<SecretFormatArg> for SecretFormat {
    fn from(value: SecretFormatArg) -> Self {
        match value {
            SecretFormatArg::Text => SecretFormat::Text,
            SecretFormatArg::Hex => SecretFormat::Hex,
            SecretFormatArg::Base32 => SecretFormat::Base32,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum JwtCommands {
    /// Decode header and payload without verifying
    Decode {
        /// Path to the token file. If not specified, reads from stdin
        file: Option<String>,
    },
    /// Verify an HS256 signature
    Verify {
        #[arg(short, long)]
        secret: String,

        file: Option<String>,
    },
    /// Sign JSON claims as an HS256 token
    Sign {
        #[arg(short, long)]
        secret: String,

        /// Path to the claims JSON. If not specified, reads from stdin
        file: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum TokenCommands {
    /// JWT operations
    Jwt {
        #[command(subcommand)]
        command: JwtCommands,
    },
    /// Decode a SAML response (POST binding, or --redirect for
    /// HTTP-Redirect)
    Saml {
        /// Input is an HTTP-Redirect binding parameter (URL-encoded,
        /// deflated)
        #[arg(long)]
        redirect: bool,

        file: Option<String>,
    },
    /// Generate a TOTP (default) or HOTP (--counter) code
    Otp {
        /// Shared secret
        #[arg(short, long)]
        secret: String,

        /// How to interpret the secret string
        #[arg(short, long, value_enum, default_value = "text")]
        format: SecretFormatArg,

        /// Generate HOTP for this counter instead of TOTP
        #[arg(long)]
        counter: Option<u64>,

        /// TOTP time step in seconds
        #[arg(long, default_value_t = 30)]
        period: u64,

        #[arg(long, default_value_t = 6)]
        digits: u32,
    },
    /// Generate a PKCE verifier and its S256 challenge
    Pkce {
        /// Verifier length (clamped to 43-128)
        #[arg(short, long, default_value_t = 64)]
        length: usize,
    },
}

pub(crate) fn execute(command: TokenCommands) -> Result<()> {
    match command {
        TokenCommands::Jwt { command } => match command {
            JwtCommands::Decode { file } => {
                let token = read_input_string(file.as_deref())?;
                let decoded = jwt::decode(&token)?;
                println!(
                    "header:  {}",
                    serde_json::to_string_pretty(decoded.header())?
                );
                println!(
                    "payload: {}",
                    serde_json::to_string_pretty(decoded.payload())?
                );
            }
            JwtCommands::Verify { secret, file } => {
                let token = read_input_string(file.as_deref())?;
                if jwt::verify_hs256(&token, &secret)? {
                    println!("valid");
                } else {
                    println!("invalid");
                    return Err(Error::InvalidInput("signature check failed".to_string()));
                }
            }
            JwtCommands::Sign { secret, file } => {
                let claims_text = read_input_string(file.as_deref())?;
                let claims: serde_json::Value = serde_json::from_str(&claims_text)?;
                println!("{}", jwt::sign_hs256(&claims, &secret)?);
            }
        },
        TokenCommands::Saml { redirect, file } => {
            let input = read_input_string(file.as_deref())?;
            let xml = if redirect {
                saml::decode_redirect(&input)?
            } else {
                saml::decode_response(&input)?
            };
            println!("{}", xml);
        }
        TokenCommands::Otp {
            secret,
            format,
            counter,
            period,
            digits,
        } => {
            let secret = otp::parse_secret(&secret, format.into())?;
            let code = match counter {
                Some(counter) => otp::hotp(&secret, counter, digits)?,
                None => {
                    let now = SystemTime::now()
                        .duration_since(UNIX_EPOCH)
                        .map_err(|_| Error::InvalidInput("system clock before 1970".to_string()))?
                        .as_secs();
                    otp::totp(&secret, period, digits, now)?
                }
            };
            println!("{}", code);
        }
        TokenCommands::Pkce { length } => {
            let verifier = pkce::generate_verifier(length);
            println!("verifier:  {}", verifier);
            println!("challenge: {}", pkce::challenge_s256(&verifier));
        }
    }
    Ok(())
}
