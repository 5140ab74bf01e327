//! Decoder trait for type-safe conversions.
//!
//! A source type implements [`Decoder<T, D>`] to convert itself into a
//! destination type `D`; the destination opts in with the
//! [`DecodableFrom<T>`] marker. The pair keeps the conversion graph explicit:
//! only steps that make sense (bytes → DER, DER → ASN.1, PEM → bytes) are
//! implemented, and a bogus conversion does not type-check.
//!
//! ```no_run
//! use shinobi::decoder::{DecodableFrom, Decoder};
//!
//! struct Raw(Vec<u8>);
//! struct Text(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Raw> for Text {}
//!
//! impl Decoder<Raw, Text> for Raw {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Text, Self::Error> {
//!         Ok(Text(String::from_utf8_lossy(&self.0).to_string()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into the destination type `D`.
///
/// The destination must implement [`DecodableFrom<T>`].
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait: type `D` can be decoded from type `T`.
///
/// Has no methods; implementing it for a `(source, destination)` pair is what
/// makes the corresponding [`Decoder`] implementation legal.
pub trait DecodableFrom<T> {}
