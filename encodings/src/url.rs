//! URL percent-encoding.

use crate::error::Error;

pub fn encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

pub fn decode(input: &str) -> Result<String, Error> {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .map_err(|_| Error::InvalidUtf8)
}
