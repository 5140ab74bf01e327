//! Encoder trait: the reverse direction of [`crate::decoder`].
//!
//! Implemented where a conversion step is reversible, e.g. an ASN.1 element
//! tree re-encodes to DER bytes. Round-trip tests in the `der` and `asn1`
//! crates lean on this to check that decode ∘ encode is the identity.

/// Converts `self` (of type `T`) into the encoded form `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait: type `E` is a valid encoding target for type `T`.
pub trait EncodableTo<T> {}
