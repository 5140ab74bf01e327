use clap::{Args, Subcommand, ValueEnum};
use shinobi_encodings::unicode::Endian;
use shinobi_encodings::{compress, hexbin, html, radix, rot, unicode, url};

use crate::error::Result;
use crate::utils::read_input_string;

#[derive(Args)]
pub(crate) struct CodecConfig {
    /// Path to the input file. If not specified, reads from stdin
    file: Option<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum EndianArg {
    Le,
    Be,
}

impl From<EndianArg> for Endian {
    fn from(value: EndianArg) -> Self {
        match value {
            EndianArg::Le => Endian::Little,
            EndianArg::Be => Endian::Big,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum EncodeCommands {
    /// Base64 (standard alphabet)
    Base64 {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Base32 (RFC 4648)
    Base32 {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Base58 (Bitcoin alphabet)
    Base58 {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Ascii85
    Base85 {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Text to hex and back
    Hex {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Text to binary octets and back
    Binary {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// URL percent-encoding
    Url {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// HTML entities
    Html {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// ROT-N Caesar rotation (self-inverting at 13)
    Rot {
        #[command(flatten)]
        config: CodecConfig,

        /// Rotation amount
        #[arg(short, long, default_value_t = 13)]
        n: u32,
    },
    /// UTF-16 code units as hex
    Utf16 {
        #[command(flatten)]
        config: CodecConfig,

        /// Byte order
        #[arg(short, long, value_enum, default_value = "le")]
        endian: EndianArg,
    },
    /// UTF-32 code points as hex
    Utf32 {
        #[command(flatten)]
        config: CodecConfig,

        /// Byte order
        #[arg(short, long, value_enum, default_value = "le")]
        endian: EndianArg,
    },
    /// Gzip, base64-armored
    Gzip {
        #[command(flatten)]
        config: CodecConfig,
    },
    /// Raw deflate, base64-armored
    Deflate {
        #[command(flatten)]
        config: CodecConfig,
    },
}

pub(crate) fn execute(command: EncodeCommands) -> Result<()> {
    let output = match command {
        EncodeCommands::Base64 { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                radix::base64_decode(&input)?
            } else {
                radix::base64_encode(&input)
            }
        }
        EncodeCommands::Base32 { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                radix::base32_decode(&input)?
            } else {
                radix::base32_encode(&input)
            }
        }
        EncodeCommands::Base58 { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                radix::base58_decode(&input)?
            } else {
                radix::base58_encode(&input)
            }
        }
        EncodeCommands::Base85 { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                radix::ascii85_decode(&input)?
            } else {
                radix::ascii85_encode(&input)
            }
        }
        EncodeCommands::Hex { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                hexbin::hex_to_text(&input)?
            } else {
                hexbin::text_to_hex(&input)
            }
        }
        EncodeCommands::Binary { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                hexbin::binary_to_text(&input)?
            } else {
                hexbin::text_to_binary(&input)
            }
        }
        EncodeCommands::Url { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                url::decode(&input)?
            } else {
                url::encode(&input)
            }
        }
        EncodeCommands::Html { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                html::unescape(&input)
            } else {
                html::escape(&input)
            }
        }
        EncodeCommands::Rot { config, n } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                rot::rot(&input, 26 - (n % 26))
            } else {
                rot::rot(&input, n)
            }
        }
        EncodeCommands::Utf16 { config, endian } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                unicode::hex_to_utf16(&input, endian.into())?
            } else {
                unicode::utf16_to_hex(&input, endian.into())
            }
        }
        EncodeCommands::Utf32 { config, endian } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                unicode::hex_to_utf32(&input, endian.into())?
            } else {
                unicode::utf32_to_hex(&input, endian.into())
            }
        }
        EncodeCommands::Gzip { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                compress::gzip_decompress(&input)?
            } else {
                compress::gzip_compress(&input)?
            }
        }
        EncodeCommands::Deflate { config } => {
            let input = read_input_string(config.file.as_deref())?;
            if config.decode {
                compress::deflate_decompress(&input)?
            } else {
                compress::deflate_compress(&input)?
            }
        }
    };
    println!("{}", output);
    Ok(())
}
