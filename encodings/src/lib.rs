//! Text and byte codecs.
//!
//! Each module is a set of pure transforms over a string or byte buffer:
//! encode and decode never touch shared state, and every failure is a typed
//! [`error::Error`].

pub mod compress;
pub mod error;
pub mod hexbin;
pub mod html;
pub mod radix;
pub mod rot;
pub mod stego;
pub mod unicode;
pub mod url;
