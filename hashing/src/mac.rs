//! HMAC over SHA-2, rendered as lowercase hex.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    Sha256,
    Sha512,
}

pub fn hmac_hex(algorithm: HmacAlgorithm, key: &[u8], message: &[u8]) -> Result<String, Error> {
    match algorithm {
        HmacAlgorithm::Sha256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
            mac.update(message);
            Ok(hex::encode(mac.finalize().into_bytes()))
        }
        HmacAlgorithm::Sha512 => {
            let mut mac =
                Hmac::<Sha512>::new_from_slice(key).map_err(|_| Error::InvalidKeyLength)?;
            mac.update(message);
            Ok(hex::encode(mac.finalize().into_bytes()))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HmacAlgorithm, hmac_hex};

    #[rstest(algorithm, expected,
        case(
            HmacAlgorithm::Sha256,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        ),
        case(
            HmacAlgorithm::Sha512,
            "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
        ),
    )]
    fn test_hmac_known_vectors(algorithm: HmacAlgorithm, expected: &str) {
        let actual = hmac_hex(
            algorithm,
            b"key",
            b"The quick brown fox jumps over the lazy dog",
        )
        .unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_hmac_empty_key_is_accepted() {
        assert!(hmac_hex(HmacAlgorithm::Sha256, b"", b"message").is_ok());
    }
}
