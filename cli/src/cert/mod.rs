pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CertCommands {
    /// Inspect and display a certificate
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
}

/// Short names for the attribute and algorithm OIDs that show up in almost
/// every certificate. Everything else renders as the dotted OID.
pub(crate) fn oid_short_name(oid: &str) -> Option<&'static str> {
    match oid {
        "2.5.4.3" => Some("CN"),
        "2.5.4.6" => Some("C"),
        "2.5.4.7" => Some("L"),
        "2.5.4.8" => Some("ST"),
        "2.5.4.10" => Some("O"),
        "2.5.4.11" => Some("OU"),
        "2.5.4.5" => Some("serialNumber"),
        "1.2.840.113549.1.9.1" => Some("emailAddress"),
        _ => None,
    }
}

pub(crate) fn algorithm_name(oid: &str) -> Option<&'static str> {
    match oid {
        "1.2.840.113549.1.1.1" => Some("rsaEncryption"),
        "1.2.840.113549.1.1.11" => Some("sha256WithRSAEncryption"),
        "1.2.840.10045.2.1" => Some("id-ecPublicKey"),
        "1.2.840.10045.4.3.2" => Some("ecdsa-with-SHA256"),
        "1.3.101.112" => Some("Ed25519"),
        _ => None,
    }
}
