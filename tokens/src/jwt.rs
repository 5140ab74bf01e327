//! JWT decoding, HS256 verification, and HS256 signing.
//!
//! Decoding never verifies: it only base64url-decodes the header and payload
//! into JSON values. Verification checks the header declares an HS-family
//! algorithm and compares the HMAC-SHA256 over `header.payload` against the
//! signature in constant time.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::error::Error;

type HmacSha256 = Hmac<Sha256>;

/// Decoded (not verified) header and payload of a JWT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedJwt {
    header: Value,
    payload: Value,
}

impl DecodedJwt {
    pub fn header(&self) -> &Value {
        &self.header
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

fn base64url_json(part: &str) -> Result<Value, Error> {
    // Tolerate padded input; tokens in the wild carry both forms.
    let bytes = URL_SAFE_NO_PAD.decode(part.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub fn decode(token: &str) -> Result<DecodedJwt, Error> {
    let mut parts = token.trim().split('.');
    let header = parts.next().ok_or(Error::MalformedToken)?;
    let payload = parts.next().ok_or(Error::MalformedToken)?;
    Ok(DecodedJwt {
        header: base64url_json(header)?,
        payload: base64url_json(payload)?,
    })
}

/// Verifies an HS256 signature. Returns `Ok(false)` for a wrong signature or
/// a non-HS algorithm header; `Err` only for tokens too malformed to check.
pub fn verify_hs256(token: &str, secret: &str) -> Result<bool, Error> {
    let [header, payload, signature] = split3(token)?;

    let header_json = base64url_json(header)?;
    let algorithm = header_json["alg"].as_str().unwrap_or_default();
    if !algorithm.starts_with("HS") {
        return Ok(false);
    }

    let signature = URL_SAFE_NO_PAD.decode(signature.trim_end_matches('='))?;
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| Error::InvalidSecret)?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    Ok(mac.verify_slice(&signature).is_ok())
}

/// Signs arbitrary JSON claims as an HS256 JWT.
pub fn sign_hs256(claims: &Value, secret: &str) -> Result<String, Error> {
    let header = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?),
    );

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| Error::InvalidSecret)?;
    mac.update(signing_input.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    Ok(format!("{}.{}", signing_input, signature))
}

fn split3(token: &str) -> Result<[&str; 3], Error> {
    let mut parts = token.trim().split('.');
    let result = [
        parts.next().ok_or(Error::MalformedToken)?,
        parts.next().ok_or(Error::MalformedToken)?,
        parts.next().ok_or(Error::MalformedToken)?,
    ];
    if parts.next().is_some() {
        return Err(Error::MalformedToken);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use rstest::rstest;
    use serde_json::json;

    use super::{decode, sign_hs256, verify_hs256};

    #[test]
    fn test_sign_decode_verify_roundtrip() {
        let claims = json!({ "sub": "1234567890", "name": "Jane", "admin": true });
        let token = sign_hs256(&claims, "top secret").unwrap();
        assert_eq!(2, token.bytes().filter(|&b| b == b'.').count());

        let decoded = decode(&token).unwrap();
        assert_eq!("HS256", decoded.header()["alg"]);
        assert_eq!("Jane", decoded.payload()["name"]);

        assert!(verify_hs256(&token, "top secret").unwrap());
        assert!(!verify_hs256(&token, "wrong secret").unwrap());
    }

    #[test]
    fn test_verify_rejects_tampered_payload() {
        let token = sign_hs256(&json!({ "admin": false }), "s").unwrap();
        let forged_claims = URL_SAFE_NO_PAD.encode(b"{\"admin\":true}");
        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = &forged_claims;
        let forged = parts.join(".");
        assert!(!verify_hs256(&forged, "s").unwrap());
    }

    #[test]
    fn test_verify_non_hs_algorithm_is_false() {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"RS256\",\"typ\":\"JWT\"}");
        let payload = URL_SAFE_NO_PAD.encode(b"{}");
        let token = format!("{}.{}.c2ln", header, payload);
        assert!(!verify_hs256(&token, "secret").unwrap());
    }

    #[rstest(token,
        case("only-one-part"),
        case("a.b"),
        case("a.b.c.d"),
    )]
    fn test_verify_malformed_token(token: &str) {
        assert!(verify_hs256(token, "secret").is_err());
    }

    #[test]
    fn test_decode_invalid_json() {
        let header = URL_SAFE_NO_PAD.encode(b"not json");
        let token = format!("{}.{}.x", header, header);
        assert!(decode(&token).is_err());
    }

    #[test]
    fn test_decode_accepts_padded_base64url() {
        let claims = json!({ "a": 1 });
        let token = sign_hs256(&claims, "s").unwrap();
        let padded: Vec<String> = token
            .split('.')
            .map(|p| {
                let mut p = p.to_string();
                while p.len() % 4 != 0 {
                    p.push('=');
                }
                p
            })
            .collect();
        let decoded = decode(&padded.join(".")).unwrap();
        assert_eq!(1, decoded.payload()["a"]);
    }
}
