use clap::{Args, ValueEnum};
use rand::Rng;

use crate::error::Result;

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Charset {
    /// Letters, digits, and symbols
    Full,
    /// Letters and digits
    Alnum,
    /// Lowercase hex digits
    Hex,
}

#[derive(Args)]
pub(crate) struct Config {
    /// Number of characters to generate
    #[arg(short, long, default_value_t = 24)]
    length: usize,

    #[arg(short, long, value_enum, default_value = "full")]
    charset: Charset,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let pool: String = match config.charset {
        Charset::Full => format!("{}{}{}", LETTERS, DIGITS, SYMBOLS),
        Charset::Alnum => format!("{}{}", LETTERS, DIGITS),
        Charset::Hex => "0123456789abcdef".to_string(),
    };
    let chars: Vec<char> = pool.chars().collect();
    let mut rng = rand::rng();
    let out: String = (0..config.length.max(1))
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();
    println!("{}", out);
    Ok(())
}
