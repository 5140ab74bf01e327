//! Message digests rendered as lowercase hex.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

pub fn digest_hex(algorithm: Algorithm, data: &[u8]) -> String {
    match algorithm {
        Algorithm::Md5 => hex::encode(Md5::digest(data)),
        Algorithm::Sha1 => hex::encode(Sha1::digest(data)),
        Algorithm::Sha256 => hex::encode(Sha256::digest(data)),
        Algorithm::Sha512 => hex::encode(Sha512::digest(data)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Algorithm, digest_hex};

    #[rstest(algorithm, input, expected,
        case(Algorithm::Md5, "abc", "900150983cd24fb0d6963f7d28e17f72"),
        case(Algorithm::Md5, "", "d41d8cd98f00b204e9800998ecf8427e"),
        case(Algorithm::Sha1, "abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        case(Algorithm::Sha256, "abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
        case(
            Algorithm::Sha512,
            "abc",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        ),
    )]
    fn test_digest_hex(algorithm: Algorithm, input: &str, expected: &str) {
        assert_eq!(expected, digest_hex(algorithm, input.as_bytes()));
    }
}
