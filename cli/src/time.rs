use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Subcommand;

use crate::error::{Error, Result};

#[derive(Subcommand)]
pub(crate) enum TimeCommands {
    /// Convert a datetime to a unix timestamp (now if omitted)
    Unix {
        /// `YYYY-MM-DD HH:MM:SS` or RFC 3339, interpreted as UTC
        datetime: Option<String>,
    },
    /// Convert a unix timestamp to a readable UTC datetime
    Readable { timestamp: i64 },
}

pub(crate) fn execute(command: TimeCommands) -> Result<()> {
    match command {
        TimeCommands::Unix { datetime } => {
            let timestamp = match datetime {
                Some(text) => parse_datetime(&text)?.timestamp(),
                None => Utc::now().timestamp(),
            };
            println!("{}", timestamp);
        }
        TimeCommands::Readable { timestamp } => {
            let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0)
                .ok_or_else(|| Error::InvalidInput(format!("timestamp {} out of range", timestamp)))?;
            println!("{}", datetime.format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }
    Ok(())
}

fn parse_datetime(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::InvalidInput(format!("unrecognized datetime '{}'", text)))
}
