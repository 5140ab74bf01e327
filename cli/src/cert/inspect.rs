use std::collections::BTreeMap;

use clap::Args;
use shinobi_x509::{CertificateSummary, InspectionReport, Version};

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::read_input;

use super::{algorithm_name, oid_short_name};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the certificate file (PEM, base64, or DER). If not specified,
    /// reads from stdin
    file: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Show only subject
    #[arg(long)]
    show_subject: bool,

    /// Show only issuer
    #[arg(long)]
    show_issuer: bool,

    /// Show only validity dates
    #[arg(long)]
    show_dates: bool,

    /// Show only serial number
    #[arg(long)]
    show_serial: bool,
}

impl Config {
    fn should_show_specific_fields(&self) -> bool {
        self.show_subject || self.show_issuer || self.show_dates || self.show_serial
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;

    // Text input goes through the PEM/base64 path; binary is raw DER.
    let report = match std::str::from_utf8(&input_bytes) {
        Ok(text) => shinobi_x509::inspect(text),
        Err(_) => shinobi_x509::inspect_der(&input_bytes),
    };

    if !report.ok() {
        let message = report.error().unwrap_or("unknown failure").to_string();
        render_report(&report, config.output)?;
        return Err(Error::Certificate(message));
    }

    let summary = report
        .summary()
        .ok_or_else(|| Error::Certificate("inspection produced no summary".to_string()))?;

    if config.should_show_specific_fields() {
        if config.show_subject {
            println!("Subject: {}", format_name(summary.subject()));
        }
        if config.show_issuer {
            println!("Issuer: {}", format_name(summary.issuer()));
        }
        if config.show_dates {
            if let Some(validity) = summary.validity() {
                println!("Not Before: {}", format_time(validity.not_before()));
                println!("Not After:  {}", format_time(validity.not_after()));
            } else {
                println!("No validity information");
            }
        }
        if config.show_serial {
            println!(
                "Serial Number: {}",
                summary.serial_number().unwrap_or("(absent)")
            );
        }
        return Ok(());
    }

    render_report(&report, config.output)
}

fn render_report(report: &InspectionReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => match report.summary() {
            Some(summary) => print!("{}", format_summary_text(summary)),
            None => println!("Error: {}", report.error().unwrap_or("unknown failure")),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Yaml => {
            let json_value = serde_json::to_value(report)?;
            print!("{}", serde_yml::to_string(&json_value)?);
        }
    }
    Ok(())
}

fn format_summary_text(summary: &CertificateSummary) -> String {
    let mut out = String::new();
    out.push_str("Certificate:\n");
    let version = match summary.version() {
        Version::V1 => "1",
        Version::V2 => "2",
        Version::V3 => "3",
    };
    out.push_str(&format!("    Version: {}\n", version));
    out.push_str(&format!(
        "    Serial Number: {}\n",
        summary.serial_number().unwrap_or("(absent)")
    ));
    out.push_str(&format!("    Issuer: {}\n", format_name(summary.issuer())));
    if let Some(validity) = summary.validity() {
        out.push_str("    Validity:\n");
        out.push_str(&format!(
            "        Not Before: {}\n",
            format_time(validity.not_before())
        ));
        out.push_str(&format!(
            "        Not After:  {}\n",
            format_time(validity.not_after())
        ));
    }
    out.push_str(&format!(
        "    Subject: {}\n",
        format_name(summary.subject())
    ));
    if let Some(alg) = summary.subject_public_key_alg() {
        match algorithm_name(alg) {
            Some(name) => {
                out.push_str(&format!("    Public Key Algorithm: {} ({})\n", name, alg))
            }
            None => out.push_str(&format!("    Public Key Algorithm: {}\n", alg)),
        }
    }
    out
}

/// Renders a name map as `CN=x, O=y`, short attribute names where known.
fn format_name(attributes: &BTreeMap<String, String>) -> String {
    if attributes.is_empty() {
        return "(empty)".to_string();
    }
    attributes
        .iter()
        .map(|(oid, value)| match oid_short_name(oid) {
            Some(short) => format!("{}={}", short, value),
            None => format!("{}={}", oid, value),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The raw wire string, with a parsed rendering appended when the common
/// `Z`-suffixed forms apply.
fn format_time(raw: &str) -> String {
    let time = shinobi_asn1::TimeString::new(raw);
    match time.to_datetime() {
        Ok(dt) => format!("{} ({})", raw, dt.format("%b %d %H:%M:%S %Y GMT")),
        Err(_) => raw.to_string(),
    }
}
