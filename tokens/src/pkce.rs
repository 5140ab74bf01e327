//! PKCE code verifier and S256 challenge (RFC 7636).

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
use sha2::{Digest, Sha256};

/// RFC 7636 unreserved characters.
const VERIFIER_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Generates a random code verifier. Length is clamped into the RFC 7636
/// range of 43-128 characters.
pub fn generate_verifier(length: usize) -> String {
    let length = length.clamp(43, 128);
    let mut rng = rand::rng();
    (0..length)
        .map(|_| VERIFIER_CHARS[rng.random_range(0..VERIFIER_CHARS.len())] as char)
        .collect()
}

/// `code_challenge = base64url-nopad(SHA-256(code_verifier))`.
pub fn challenge_s256(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::{VERIFIER_CHARS, challenge_s256, generate_verifier};

    // RFC 7636 appendix B.
    #[test]
    fn test_challenge_s256_rfc_vector() {
        assert_eq!(
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM",
            challenge_s256("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk")
        );
    }

    #[test]
    fn test_generate_verifier_charset_and_length() {
        let verifier = generate_verifier(64);
        assert_eq!(64, verifier.len());
        assert!(verifier.bytes().all(|b| VERIFIER_CHARS.contains(&b)));
    }

    #[test]
    fn test_generate_verifier_clamps_length() {
        assert_eq!(43, generate_verifier(1).len());
        assert_eq!(128, generate_verifier(4096).len());
    }
}
