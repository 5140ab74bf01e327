//! Password hashing: bcrypt and Argon2id (PHC encoded strings).

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::error::Error;

pub fn bcrypt_hash(password: &str, cost: u32) -> Result<String, Error> {
    Ok(bcrypt::hash(password, cost)?)
}

pub fn bcrypt_verify(password: &str, hash: &str) -> Result<bool, Error> {
    Ok(bcrypt::verify(password, hash)?)
}

pub fn argon2_hash(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Argon2(e.to_string()))
}

pub fn argon2_verify(password: &str, encoded: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(encoded).map_err(|e| Error::Argon2(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the test fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_bcrypt_roundtrip() {
        let hash = bcrypt_hash("hunter2", TEST_COST).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(bcrypt_verify("hunter2", &hash).unwrap());
        assert!(!bcrypt_verify("wrong", &hash).unwrap());
    }

    #[test]
    fn test_argon2_roundtrip() {
        let encoded = argon2_hash("hunter2").unwrap();
        assert!(encoded.starts_with("$argon2id$"));
        assert!(argon2_verify("hunter2", &encoded).unwrap());
        assert!(!argon2_verify("wrong", &encoded).unwrap());
    }

    #[test]
    fn test_argon2_verify_rejects_malformed_hash() {
        assert!(argon2_verify("pw", "not a phc string").is_err());
    }
}
