//! SAML response decoding.
//!
//! POST binding carries base64-encoded XML; the HTTP-Redirect binding
//! URL-encodes base64 of raw-deflated XML. Output is the XML text; signature
//! validation is out of scope.

use base64::{Engine, engine::general_purpose::STANDARD};
use shinobi_encodings::compress::inflate_raw;
use shinobi_encodings::url;

use crate::error::Error;

pub fn decode_response(input: &str) -> Result<String, Error> {
    let clean: String = input.split_whitespace().collect();
    let bytes = STANDARD.decode(clean)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

pub fn decode_redirect(param: &str) -> Result<String, Error> {
    let url_decoded = url::decode(param.trim())?;
    let clean: String = url_decoded.split_whitespace().collect();
    let bytes = STANDARD.decode(clean)?;
    Ok(inflate_raw(&bytes)?)
}
