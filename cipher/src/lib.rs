//! Password-based AES-256-GCM.
//!
//! Wire format: `base64(salt || nonce || ciphertext+tag)` with a 16-byte salt
//! and a 12-byte nonce, both freshly random per message. The key is
//! PBKDF2-HMAC-SHA256 over the password with 100 000 iterations. Decryption
//! re-derives the key from the embedded salt; a wrong password or a
//! tampered payload fails the AEAD tag check.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::{Engine, engine::general_purpose::STANDARD};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KDF_ITERATIONS: u32 = 100_000;

#[derive(Debug, Error)]
pub enum Error {
    #[error("base64 decode: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Payload shorter than salt + nonce.
    #[error("payload too short to contain salt and nonce")]
    PayloadTooShort,

    #[error("decryption failed (wrong password or corrupted payload)")]
    Aead,

    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8,
}

fn derive_key(password: &str, salt: &[u8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ITERATIONS, &mut key);
    key
}

pub fn encrypt(plaintext: &str, password: &str) -> Result<String, Error> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut nonce);

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| Error::Aead)?;

    let mut packed = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    packed.extend_from_slice(&salt);
    packed.extend_from_slice(&nonce);
    packed.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(packed))
}

pub fn decrypt(payload: &str, password: &str) -> Result<String, Error> {
    let clean: String = payload.split_whitespace().collect();
    let packed = STANDARD.decode(clean)?;
    if packed.len() < SALT_LEN + NONCE_LEN {
        return Err(Error::PayloadTooShort);
    }
    let (salt, rest) = packed.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(password, salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::Aead)?;
    String::from_utf8(plaintext).map_err(|_| Error::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(plaintext, case("attack at dawn"), case(""), case("🦀 unicode too"))]
    fn test_encrypt_decrypt_roundtrip(plaintext: &str) {
        let payload = encrypt(plaintext, "correct horse").unwrap();
        assert_eq!(plaintext, decrypt(&payload, "correct horse").unwrap());
    }

    #[test]
    fn test_decrypt_with_wrong_password() {
        let payload = encrypt("secret", "right").unwrap();
        assert!(matches!(decrypt(&payload, "wrong"), Err(Error::Aead)));
    }

    #[test]
    fn test_decrypt_tampered_payload() {
        let payload = encrypt("secret", "pw").unwrap();
        let mut bytes = STANDARD.decode(&payload).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let tampered = STANDARD.encode(bytes);
        assert!(matches!(decrypt(&tampered, "pw"), Err(Error::Aead)));
    }

    #[test]
    fn test_fresh_salt_and_nonce_per_message() {
        let one = encrypt("same message", "pw").unwrap();
        let two = encrypt("same message", "pw").unwrap();
        assert_ne!(one, two);
    }

    #[rstest(payload, case("!!!"), case("aGk="))]
    fn test_decrypt_malformed_payload(payload: &str) {
        assert!(decrypt(payload, "pw").is_err());
    }
}
