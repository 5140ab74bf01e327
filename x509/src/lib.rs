//! Best-effort X.509 certificate inspection.
//!
//! Walks the RFC 5280 layout:
//!
//! ```text
//! Certificate  ::=  SEQUENCE  {
//!     tbsCertificate       TBSCertificate,
//!     signatureAlgorithm   AlgorithmIdentifier,
//!     signatureValue       BIT STRING
//! }
//!
//! TBSCertificate  ::=  SEQUENCE  {
//!     version         [0]  EXPLICIT Version DEFAULT v1,
//!     serialNumber         CertificateSerialNumber,
//!     signature            AlgorithmIdentifier,
//!     issuer               Name,
//!     validity             Validity,
//!     subject              Name,
//!     subjectPublicKeyInfo SubjectPublicKeyInfo,
//!     ...
//! }
//! ```
//!
//! The optional `version` element is located by its context-specific tag
//! rather than a fixed index, so v1 certificates (no explicit version) read
//! correctly instead of shifting every later field. This is an inspector,
//! not a validator: no signature check, no date check, no chain building.
//! Fields whose shape doesn't match are reported as absent rather than
//! failing the whole inspection.

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use shinobi::decoder::{DecodableFrom, Decoder};
use shinobi_asn1::{Asn1Object, Element};
use shinobi_der::Der;
use shinobi_pem::Pem;

pub mod error;

use error::Error;

/// X.509 certificate version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Version {
    #[serde(rename = "v1")]
    V1,
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v3")]
    V3,
}

impl Version {
    fn from_element(element: &Element) -> Option<Version> {
        match element {
            Element::Integer(i) => match i.to_u8()? {
                0 => Some(Version::V1),
                1 => Some(Version::V2),
                2 => Some(Version::V3),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Raw notBefore/notAfter time strings, exactly as decoded from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validity {
    not_before: String,
    not_after: String,
}

impl Validity {
    pub fn not_before(&self) -> &str {
        &self.not_before
    }

    pub fn not_after(&self) -> &str {
        &self.not_after
    }
}

/// Flat summary of the fields a TBSCertificate walk extracted.
///
/// Issuer and subject map attribute OID strings to decoded values; a
/// duplicate OID within one name overwrites the earlier value.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateSummary {
    version: Version,
    #[serde(skip_serializing_if = "Option::is_none")]
    serial_number: Option<String>,
    issuer: BTreeMap<String, String>,
    subject: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validity: Option<Validity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subject_public_key_alg: Option<String>,
}

impl CertificateSummary {
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }

    pub fn issuer(&self) -> &BTreeMap<String, String> {
        &self.issuer
    }

    pub fn subject(&self) -> &BTreeMap<String, String> {
        &self.subject
    }

    pub fn validity(&self) -> Option<&Validity> {
        self.validity.as_ref()
    }

    pub fn subject_public_key_alg(&self) -> Option<&str> {
        self.subject_public_key_alg.as_deref()
    }
}

impl DecodableFrom<Asn1Object> for CertificateSummary {}

impl Decoder<Asn1Object, CertificateSummary> for Asn1Object {
    type Error = Error;

    fn decode(&self) -> Result<CertificateSummary, Self::Error> {
        let root = self.elements().first().ok_or_else(|| {
            Error::InvalidCertificate("empty ASN.1 object".to_string())
        })?;
        let Element::Sequence(certificate) = root else {
            return Err(Error::InvalidCertificate(
                "expected Certificate SEQUENCE at top level".to_string(),
            ));
        };
        let Some(Element::Sequence(tbs)) = certificate.first() else {
            return Err(Error::InvalidCertificate(
                "expected TBSCertificate SEQUENCE".to_string(),
            ));
        };
        Ok(summarize_tbs(tbs))
    }
}

fn summarize_tbs(items: &[Element]) -> CertificateSummary {
    // The explicit version tag, when present, occupies item 0 and shifts
    // every later field by one.
    let (version, base) = match items.first() {
        Some(Element::ContextSpecific {
            slot: 0,
            constructed: true,
            element,
        }) => (Version::from_element(element).unwrap_or(Version::V1), 1),
        _ => (Version::V1, 0),
    };

    let serial_number = match items.get(base) {
        Some(Element::Integer(i)) => Some(i.to_hex()),
        _ => None,
    };
    // base + 1 is the signature AlgorithmIdentifier; not part of the summary.
    let issuer = items.get(base + 2).map(name_to_map).unwrap_or_default();
    let validity = items.get(base + 3).and_then(validity_from_element);
    let subject = items.get(base + 4).map(name_to_map).unwrap_or_default();
    let subject_public_key_alg = items.get(base + 5).and_then(spki_algorithm);

    CertificateSummary {
        version,
        serial_number,
        issuer,
        subject,
        validity,
        subject_public_key_alg,
    }
}

/// Flattens `Name ::= SEQUENCE OF SET OF AttributeTypeAndValue` into an
/// OID-string → value map. Members that don't match the shape are skipped.
fn name_to_map(element: &Element) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let Element::Sequence(rdns) = element else {
        return map;
    };
    for rdn in rdns {
        let Element::Set(attributes) = rdn else {
            continue;
        };
        for attribute in attributes {
            let Element::Sequence(pair) = attribute else {
                continue;
            };
            let (Some(Element::ObjectIdentifier(oid)), Some(value)) = (pair.first(), pair.get(1))
            else {
                continue;
            };
            if let Some(text) = element_text(value) {
                map.insert(oid.to_string(), text);
            }
        }
    }
    map
}

fn validity_from_element(element: &Element) -> Option<Validity> {
    let Element::Sequence(times) = element else {
        return None;
    };
    let not_before = times.first().and_then(element_text)?;
    let not_after = times.get(1).and_then(element_text)?;
    Some(Validity {
        not_before,
        not_after,
    })
}

/// `SubjectPublicKeyInfo ::= SEQUENCE { algorithm AlgorithmIdentifier, ... }`;
/// the algorithm OID is the first child of the first child.
fn spki_algorithm(element: &Element) -> Option<String> {
    let Element::Sequence(spki) = element else {
        return None;
    };
    let Some(Element::Sequence(algorithm)) = spki.first() else {
        return None;
    };
    match algorithm.first() {
        Some(Element::ObjectIdentifier(oid)) => Some(oid.to_string()),
        _ => None,
    }
}

fn element_text(element: &Element) -> Option<String> {
    match element {
        Element::PrintableString(s) | Element::UTF8String(s) | Element::IA5String(s) => {
            Some(s.clone())
        }
        Element::UTCTime(t) | Element::GeneralizedTime(t) => Some(t.as_str().to_string()),
        _ => None,
    }
}

/// Outcome of one inspection call.
///
/// `ok: false` carries the failure message; `ok: true` flattens the summary
/// fields alongside. Inspection never panics and never propagates an error
/// to the caller.
#[derive(Debug, Serialize)]
pub struct InspectionReport {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    summary: Option<CertificateSummary>,
}

impl InspectionReport {
    pub fn ok(&self) -> bool {
        self.ok
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> Option<&CertificateSummary> {
        self.summary.as_ref()
    }

    fn success(summary: CertificateSummary) -> Self {
        InspectionReport {
            ok: true,
            error: None,
            summary: Some(summary),
        }
    }

    fn failure(error: Error) -> Self {
        InspectionReport {
            ok: false,
            error: Some(error.to_string()),
            summary: None,
        }
    }
}

/// Inspects a certificate supplied as PEM text or bare base64.
pub fn inspect(input: &str) -> InspectionReport {
    match try_inspect(input) {
        Ok(summary) => InspectionReport::success(summary),
        Err(error) => InspectionReport::failure(error),
    }
}

/// Inspects a certificate supplied as raw DER bytes.
pub fn inspect_der(bytes: &[u8]) -> InspectionReport {
    match try_inspect_der(bytes) {
        Ok(summary) => InspectionReport::success(summary),
        Err(error) => InspectionReport::failure(error),
    }
}

fn try_inspect(input: &str) -> Result<CertificateSummary, Error> {
    let bytes = if input.contains("-----BEGIN") {
        let pem: Pem = input.decode()?;
        pem.decode()?
    } else {
        let stripped: String = input.split_whitespace().collect();
        STANDARD.decode(stripped)?
    };
    try_inspect_der(&bytes)
}

fn try_inspect_der(bytes: &[u8]) -> Result<CertificateSummary, Error> {
    let der: Der = bytes.as_ref().decode()?;
    let object: Asn1Object = der.decode()?;
    object.decode()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use shinobi::encoder::Encoder;
    use shinobi_asn1::{Asn1Object, BitString, Element, Integer, ObjectIdentifier, TimeString};
    use shinobi_der::Der;
    use shinobi_pem::{Label, Pem};

    use crate::{Version, inspect, inspect_der};

    const OID_CN: &str = "2.5.4.3";
    const OID_ORG: &str = "2.5.4.10";
    const OID_RSA: &str = "1.2.840.113549.1.1.1";
    const OID_SHA256_RSA: &str = "1.2.840.113549.1.1.11";

    fn oid(text: &str) -> Element {
        Element::ObjectIdentifier(ObjectIdentifier::from_str(text).unwrap())
    }

    fn algorithm_identifier(algorithm: &str) -> Element {
        Element::Sequence(vec![oid(algorithm), Element::Null])
    }

    fn name(attributes: &[(&str, &str)]) -> Element {
        Element::Sequence(
            attributes
                .iter()
                .map(|(o, v)| {
                    Element::Set(vec![Element::Sequence(vec![
                        oid(o),
                        Element::PrintableString(v.to_string()),
                    ])])
                })
                .collect(),
        )
    }

    fn validity(not_before: &str, not_after: &str) -> Element {
        Element::Sequence(vec![
            Element::UTCTime(TimeString::new(not_before)),
            Element::UTCTime(TimeString::new(not_after)),
        ])
    }

    fn spki() -> Element {
        Element::Sequence(vec![
            algorithm_identifier(OID_RSA),
            Element::BitString(BitString::new(0, vec![0x03, 0x02, 0x06, 0xa0])),
        ])
    }

    fn explicit_version(value: i64) -> Element {
        Element::ContextSpecific {
            slot: 0,
            constructed: true,
            element: Box::new(Element::Integer(Integer::from(value))),
        }
    }

    fn certificate_der(tbs_items: Vec<Element>) -> Vec<u8> {
        let certificate = Element::Sequence(vec![
            Element::Sequence(tbs_items),
            algorithm_identifier(OID_SHA256_RSA),
            Element::BitString(BitString::new(0, vec![0xde, 0xad, 0xbe, 0xef])),
        ]);
        let der: Der = Asn1Object::new(vec![certificate]).encode().unwrap();
        der.encode().unwrap()
    }

    fn v3_certificate() -> Vec<u8> {
        certificate_der(vec![
            explicit_version(2),
            Element::Integer(Integer::from(0x1234)),
            algorithm_identifier(OID_SHA256_RSA),
            name(&[(OID_CN, "Example CA"), (OID_ORG, "Example Org")]),
            validity("250101000000Z", "350101000000Z"),
            name(&[(OID_CN, "example.com")]),
            spki(),
        ])
    }

    fn v1_certificate() -> Vec<u8> {
        certificate_der(vec![
            Element::Integer(Integer::from(7)),
            algorithm_identifier(OID_SHA256_RSA),
            name(&[(OID_CN, "Old Root")]),
            validity("990101000000Z", "090101000000Z"),
            name(&[(OID_CN, "old.example.net")]),
            spki(),
        ])
    }

    #[test]
    fn test_inspect_der_v3_certificate() {
        let report = inspect_der(&v3_certificate());
        assert!(report.ok());
        let summary = report.summary().unwrap();
        assert_eq!(Version::V3, summary.version());
        assert_eq!(Some("1234"), summary.serial_number());
        assert_eq!("Example CA", summary.issuer()[OID_CN]);
        assert_eq!("Example Org", summary.issuer()[OID_ORG]);
        assert_eq!("example.com", summary.subject()[OID_CN]);
        let validity = summary.validity().unwrap();
        assert_eq!("250101000000Z", validity.not_before());
        assert_eq!("350101000000Z", validity.not_after());
        assert_eq!(Some(OID_RSA), summary.subject_public_key_alg());
    }

    // A v1 body has no explicit version element. The tag-directed walk keeps
    // every field aligned where a fixed index map would have shifted them.
    #[test]
    fn test_inspect_der_v1_certificate_fields_do_not_shift() {
        let report = inspect_der(&v1_certificate());
        assert!(report.ok());
        let summary = report.summary().unwrap();
        assert_eq!(Version::V1, summary.version());
        assert_eq!(Some("07"), summary.serial_number());
        assert_eq!("Old Root", summary.issuer()[OID_CN]);
        assert_eq!("old.example.net", summary.subject()[OID_CN]);
        assert_eq!(Some(OID_RSA), summary.subject_public_key_alg());
    }

    #[test]
    fn test_inspect_pem_input() {
        let pem = Pem::from_bytes(Label::Certificate, &v3_certificate()).to_string();
        let report = inspect(&pem);
        assert!(report.ok());
        assert_eq!(
            "example.com",
            report.summary().unwrap().subject()[OID_CN]
        );
    }

    #[test]
    fn test_inspect_bare_base64_input() {
        use base64::{Engine, engine::general_purpose::STANDARD};
        let encoded = STANDARD.encode(v3_certificate());
        // Whitespace inside bare base64 is tolerated.
        let wrapped: String = encoded
            .as_bytes()
            .chunks(40)
            .map(|c| String::from_utf8_lossy(c).to_string() + "\n")
            .collect();
        let report = inspect(&wrapped);
        assert!(report.ok());
    }

    #[rstest(input,
        case("!!! not base64 at all !!!"),
        case("-----BEGIN CERTIFICATE-----\nAAA\n"),
        case(""),
    )]
    fn test_inspect_malformed_input_reports_failure(input: &str) {
        let report = inspect(input);
        assert!(!report.ok());
        assert!(report.error().is_some());
        assert!(report.summary().is_none());
    }

    #[test]
    fn test_inspect_der_truncated_buffer_reports_failure() {
        let der = v3_certificate();
        let report = inspect_der(&der[..der.len() / 2]);
        assert!(!report.ok());
        assert!(report.error().is_some());
    }

    #[test]
    fn test_inspect_der_non_certificate_structure() {
        // A lone INTEGER is valid DER but not a certificate.
        let report = inspect_der(&[0x02, 0x01, 0x05]);
        assert!(!report.ok());
    }

    #[test]
    fn test_duplicate_attribute_oid_last_wins() {
        let der = certificate_der(vec![
            explicit_version(2),
            Element::Integer(Integer::from(1)),
            algorithm_identifier(OID_SHA256_RSA),
            name(&[(OID_CN, "first"), (OID_CN, "second")]),
            validity("250101000000Z", "350101000000Z"),
            name(&[(OID_CN, "subject")]),
            spki(),
        ]);
        let report = inspect_der(&der);
        let summary = report.summary().unwrap();
        assert_eq!("second", summary.issuer()[OID_CN]);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = inspect_der(&v3_certificate());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(true, json["ok"]);
        assert_eq!("v3", json["version"]);
        assert_eq!("example.com", json["subject"][OID_CN]);

        let failed = inspect("garbage");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(false, json["ok"]);
        assert!(json["error"].is_string());
    }
}
