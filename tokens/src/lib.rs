//! Token helpers: JWT decode/verify/sign, SAML response decoding, HOTP/TOTP
//! generation, and PKCE verifier/challenge derivation.

pub mod error;
pub mod jwt;
pub mod otp;
pub mod pkce;
pub mod saml;
