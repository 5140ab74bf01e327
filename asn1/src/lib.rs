//! Typed ASN.1 element tree.
//!
//! Interprets the raw [`Tlv`] records produced by `shinobi-der` as universal
//! ASN.1 types: INTEGER becomes an arbitrary-precision [`Integer`], OBJECT
//! IDENTIFIER a decoded arc list, SEQUENCE/SET ordered child lists, and so
//! on. Time values keep their raw decoded text; [`TimeString::to_datetime`]
//! interprets the common `Z`-suffixed forms on demand.

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDateTime;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use shinobi::decoder::{DecodableFrom, Decoder};
use shinobi::encoder::{EncodableTo, Encoder};
use shinobi_der::{Der, PrimitiveTag, Tag, Tlv};

pub mod error;

use error::Error;

/// An ordered list of top-level ASN.1 elements decoded from one DER buffer.
#[derive(Debug, Clone)]
pub struct Asn1Object {
    elements: Vec<Element>,
}

impl Asn1Object {
    pub fn new(elements: Vec<Element>) -> Self {
        Asn1Object { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl DecodableFrom<Der> for Asn1Object {}

impl Decoder<Der, Asn1Object> for Der {
    type Error = Error;

    fn decode(&self) -> Result<Asn1Object, Error> {
        let mut elements = Vec::new();
        for tlv in self.elements() {
            elements.push(Element::try_from(tlv)?);
        }
        Ok(Asn1Object { elements })
    }
}

impl EncodableTo<Asn1Object> for Der {}

impl Encoder<Asn1Object, Der> for Asn1Object {
    type Error = Error;

    fn encode(&self) -> Result<Der, Self::Error> {
        let mut tlvs = Vec::new();
        for element in &self.elements {
            tlvs.push(Tlv::try_from(element)?);
        }
        Ok(Der::new(tlvs))
    }
}

/// One decoded ASN.1 value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Boolean(bool),
    Integer(Integer),
    BitString(BitString),
    OctetString(OctetString),
    Null,
    ObjectIdentifier(ObjectIdentifier),
    UTF8String(String),
    Sequence(Vec<Element>),
    Set(Vec<Element>),
    PrintableString(String),
    IA5String(String),
    UTCTime(TimeString),
    GeneralizedTime(TimeString),
    ContextSpecific {
        slot: u8,
        constructed: bool,
        element: Box<Element>,
    },
    Unimplemented(Tlv),
}

impl TryFrom<&Tlv> for Element {
    type Error = Error;

    fn try_from(tlv: &Tlv) -> Result<Self, Self::Error> {
        match tlv.tag() {
            Tag::Primitive(primitive_tag, _raw) => match primitive_tag {
                PrimitiveTag::Boolean => match tlv.data().and_then(|d| d.first().copied()) {
                    Some(0x00) => Ok(Element::Boolean(false)),
                    Some(0xff) => Ok(Element::Boolean(true)),
                    _ => Err(Error::InvalidBoolean),
                },
                PrimitiveTag::Integer => {
                    let data = tlv.data().ok_or(Error::IntegerNoData)?;
                    Ok(Element::Integer(Integer::from(data)))
                }
                PrimitiveTag::BitString => {
                    let data = tlv.data().ok_or(Error::BitStringNoData)?;
                    Ok(Element::BitString(BitString::try_from(data)?))
                }
                PrimitiveTag::OctetString => {
                    let data = tlv.data().unwrap_or_default();
                    Ok(Element::OctetString(OctetString::from(data)))
                }
                PrimitiveTag::Null => Ok(Element::Null),
                PrimitiveTag::ObjectIdentifier => {
                    let data = tlv.data().ok_or(Error::ObjectIdentifierNoData)?;
                    Ok(Element::ObjectIdentifier(ObjectIdentifier::try_from(data)?))
                }
                PrimitiveTag::UTF8String => Ok(Element::UTF8String(
                    decode_text(tlv, Error::Utf8StringInvalidUtf8)?,
                )),
                PrimitiveTag::PrintableString => Ok(Element::PrintableString(decode_text(
                    tlv,
                    Error::PrintableStringInvalidEncoding,
                )?)),
                PrimitiveTag::IA5String => Ok(Element::IA5String(decode_text(
                    tlv,
                    Error::Ia5StringInvalidEncoding,
                )?)),
                PrimitiveTag::UTCTime => Ok(Element::UTCTime(TimeString::try_from_tlv(tlv)?)),
                PrimitiveTag::GeneralizedTime => {
                    Ok(Element::GeneralizedTime(TimeString::try_from_tlv(tlv)?))
                }
                PrimitiveTag::Sequence => Ok(Element::Sequence(decode_children(tlv)?)),
                PrimitiveTag::Set => Ok(Element::Set(decode_children(tlv)?)),
                PrimitiveTag::Unimplemented(_) => Ok(Element::Unimplemented(tlv.clone())),
            },
            Tag::ContextSpecific { slot, constructed } => {
                if *constructed {
                    // EXPLICIT tagging: exactly one nested value.
                    let tlvs = tlv.tlvs().ok_or_else(|| Error::InvalidContextSpecific {
                        slot: *slot,
                        msg: "constructed tag has no nested value".to_string(),
                    })?;
                    if tlvs.len() != 1 {
                        return Err(Error::InvalidContextSpecific {
                            slot: *slot,
                            msg: format!("expected exactly one nested value, got {}", tlvs.len()),
                        });
                    }
                    Ok(Element::ContextSpecific {
                        slot: *slot,
                        constructed: true,
                        element: Box::new(Element::try_from(&tlvs[0])?),
                    })
                } else {
                    // IMPLICIT tagging: raw content; the schema layer decides
                    // how to reinterpret it.
                    let data = tlv.data().ok_or_else(|| Error::InvalidContextSpecific {
                        slot: *slot,
                        msg: "primitive tag has no data".to_string(),
                    })?;
                    Ok(Element::ContextSpecific {
                        slot: *slot,
                        constructed: false,
                        element: Box::new(Element::OctetString(OctetString::from(data))),
                    })
                }
            }
        }
    }
}

fn decode_text(tlv: &Tlv, err: Error) -> Result<String, Error> {
    match tlv.data() {
        Some(data) => String::from_utf8(data.to_vec()).map_err(|_| err),
        None => Ok(String::new()),
    }
}

fn decode_children(tlv: &Tlv) -> Result<Vec<Element>, Error> {
    match tlv.tlvs() {
        Some(tlvs) => tlvs.iter().map(Element::try_from).collect(),
        None => Ok(Vec::new()),
    }
}

impl TryFrom<&Element> for Tlv {
    type Error = Error;

    fn try_from(element: &Element) -> Result<Self, Self::Error> {
        let primitive = |tag: PrimitiveTag, data: Vec<u8>| {
            Tlv::new_primitive(Tag::Primitive(tag, u8::from(&tag)), data)
        };
        match element {
            Element::Boolean(b) => Ok(primitive(
                PrimitiveTag::Boolean,
                vec![if *b { 0xff } else { 0x00 }],
            )),
            Element::Integer(i) => Ok(primitive(
                PrimitiveTag::Integer,
                i.as_bigint().to_signed_bytes_be(),
            )),
            Element::BitString(bs) => {
                let mut data = Vec::with_capacity(bs.as_bytes().len() + 1);
                data.push(bs.unused_bits());
                data.extend_from_slice(bs.as_bytes());
                Ok(primitive(PrimitiveTag::BitString, data))
            }
            Element::OctetString(os) => {
                Ok(primitive(PrimitiveTag::OctetString, os.as_bytes().to_vec()))
            }
            Element::Null => Ok(primitive(PrimitiveTag::Null, vec![])),
            Element::ObjectIdentifier(oid) => Ok(primitive(
                PrimitiveTag::ObjectIdentifier,
                Vec::try_from(oid.clone())?,
            )),
            Element::UTF8String(s) => Ok(primitive(PrimitiveTag::UTF8String, s.clone().into_bytes())),
            Element::PrintableString(s) => Ok(primitive(
                PrimitiveTag::PrintableString,
                s.clone().into_bytes(),
            )),
            Element::IA5String(s) => Ok(primitive(PrimitiveTag::IA5String, s.clone().into_bytes())),
            Element::UTCTime(t) => Ok(primitive(
                PrimitiveTag::UTCTime,
                t.as_str().as_bytes().to_vec(),
            )),
            Element::GeneralizedTime(t) => Ok(primitive(
                PrimitiveTag::GeneralizedTime,
                t.as_str().as_bytes().to_vec(),
            )),
            Element::Sequence(elements) => Ok(Tlv::new_constructed(
                Tag::Primitive(PrimitiveTag::Sequence, u8::from(&PrimitiveTag::Sequence)),
                encode_children(elements)?,
            )),
            Element::Set(elements) => Ok(Tlv::new_constructed(
                Tag::Primitive(PrimitiveTag::Set, u8::from(&PrimitiveTag::Set)),
                encode_children(elements)?,
            )),
            Element::ContextSpecific {
                slot,
                constructed,
                element,
            } => {
                let tag = Tag::ContextSpecific {
                    slot: *slot,
                    constructed: *constructed,
                };
                if *constructed {
                    let inner = Tlv::try_from(element.as_ref())?;
                    Ok(Tlv::new_constructed(tag, vec![inner]))
                } else {
                    let inner = Tlv::try_from(element.as_ref())?;
                    let data =
                        inner
                            .data()
                            .map(<[u8]>::to_vec)
                            .ok_or(Error::InvalidContextSpecific {
                                slot: *slot,
                                msg: "implicit tagging requires a primitive value".to_string(),
                            })?;
                    Ok(Tlv::new_primitive(tag, data))
                }
            }
            Element::Unimplemented(tlv) => Ok(tlv.clone()),
        }
    }
}

fn encode_children(elements: &[Element]) -> Result<Vec<Tlv>, Error> {
    elements.iter().map(Tlv::try_from).collect()
}

impl EncodableTo<Element> for Tlv {}

impl Encoder<Element, Tlv> for Element {
    type Error = Error;

    fn encode(&self) -> Result<Tlv, Self::Error> {
        Tlv::try_from(self)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Boolean(b) => write!(f, "Boolean({})", b),
            Element::Integer(i) => write!(f, "Integer({})", i),
            Element::BitString(bs) => write!(f, "BitString({} bits)", bs.bit_len()),
            Element::OctetString(os) => write!(f, "OctetString({})", os),
            Element::Null => write!(f, "Null"),
            Element::ObjectIdentifier(oid) => write!(f, "ObjectIdentifier({})", oid),
            Element::UTF8String(s) => write!(f, "UTF8String({})", s),
            Element::Sequence(seq) => write!(f, "Sequence({:?})", seq),
            Element::Set(set) => write!(f, "Set({:?})", set),
            Element::PrintableString(s) => write!(f, "PrintableString({})", s),
            Element::IA5String(s) => write!(f, "IA5String({})", s),
            Element::UTCTime(t) => write!(f, "UTCTime({})", t.as_str()),
            Element::GeneralizedTime(t) => write!(f, "GeneralizedTime({})", t.as_str()),
            Element::ContextSpecific {
                slot,
                constructed,
                element,
            } => write!(
                f,
                "ContextSpecific(slot: {}, constructed: {}, element: {})",
                slot, constructed, element
            ),
            Element::Unimplemented(tlv) => write!(f, "Unimplemented({:?})", tlv),
        }
    }
}

/// Arbitrary-precision ASN.1 INTEGER (two's-complement big-endian on the
/// wire).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Integer {
    inner: BigInt,
}

impl Integer {
    pub fn as_bigint(&self) -> &BigInt {
        &self.inner
    }

    pub fn to_u8(&self) -> Option<u8> {
        self.inner.to_u8()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.inner.to_u64()
    }

    /// Magnitude as lowercase hex byte pairs, e.g. serial number rendering.
    pub fn to_hex(&self) -> String {
        let (_, bytes) = self.inner.to_bytes_be();
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl From<&[u8]> for Integer {
    fn from(value: &[u8]) -> Self {
        Integer {
            inner: BigInt::from_signed_bytes_be(value),
        }
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            inner: BigInt::from(value),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Decoded OBJECT IDENTIFIER arc list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier {
    inner: Vec<u64>,
}

impl TryFrom<&[u8]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(Error::ObjectIdentifierNoData);
        }

        // First octet packs the first two arcs as first*40 + second.
        let mut values = Vec::new();
        let first = value[0] as u64;
        values.push(first / 40);
        values.push(first % 40);

        // Remaining arcs are base-128 varints; 0x80 marks continuation.
        let mut val = 0u64;
        let mut pending = false;
        for b in &value[1..] {
            val = (val << 7) | (*b as u64 & 0x7f);
            pending = true;
            if b & 0x80 == 0 {
                values.push(val);
                val = 0;
                pending = false;
            }
        }
        if pending {
            return Err(Error::ObjectIdentifierIncompleteEncoding);
        }

        Ok(ObjectIdentifier { inner: values })
    }
}

impl TryFrom<Vec<u8>> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(value.as_slice())
    }
}

impl TryFrom<ObjectIdentifier> for Vec<u8> {
    type Error = Error;

    fn try_from(oid: ObjectIdentifier) -> Result<Self, Self::Error> {
        if oid.inner.len() < 2 {
            return Err(Error::ObjectIdentifierTooFewComponents);
        }

        let mut result = vec![(oid.inner[0] * 40 + oid.inner[1]) as u8];
        for v in &oid.inner[2..] {
            let mut encoded = Vec::new();
            let mut value = *v;
            loop {
                encoded.push((value & 0x7f) as u8);
                value >>= 7;
                if value == 0 {
                    break;
                }
            }
            while let Some(b) = encoded.pop() {
                if encoded.is_empty() {
                    result.push(b);
                } else {
                    result.push(b | 0x80);
                }
            }
        }

        Ok(result)
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split('.')
            .map(|part| part.parse::<u64>().map_err(Error::ParseInt))
            .collect::<Result<Vec<u64>, Error>>()?;
        Ok(ObjectIdentifier { inner: values })
    }
}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self.inner.first() {
            Some(n) => self.inner[1..]
                .iter()
                .fold(n.to_string(), |s, n| s + "." + &n.to_string()),
            None => String::new(),
        };
        write!(f, "{}", s)
    }
}

impl PartialEq<&str> for ObjectIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// BIT STRING: content bytes plus the count of unused trailing bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    unused: u8,
    data: Vec<u8>,
}

impl BitString {
    pub fn new(unused: u8, data: Vec<u8>) -> Self {
        BitString { unused, data }
    }

    pub fn unused_bits(&self) -> u8 {
        self.unused
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bit_len(&self) -> usize {
        if self.data.is_empty() {
            0
        } else {
            self.data.len() * 8 - self.unused as usize
        }
    }
}

impl TryFrom<&[u8]> for BitString {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        match value.first() {
            Some(&unused) if unused <= 7 => Ok(BitString {
                unused,
                data: value[1..].to_vec(),
            }),
            Some(&unused) => Err(Error::BitStringUnusedBitsOutOfRange(unused)),
            None => Err(Error::BitStringNoData),
        }
    }
}

/// OCTET STRING content bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetString {
    inner: Vec<u8>,
}

impl OctetString {
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

impl From<&[u8]> for OctetString {
    fn from(value: &[u8]) -> Self {
        OctetString {
            inner: value.to_vec(),
        }
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(value: Vec<u8>) -> Self {
        OctetString { inner: value }
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl Display for OctetString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.inner {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl TryFrom<&OctetString> for Asn1Object {
    type Error = Error;

    fn try_from(value: &OctetString) -> Result<Self, Self::Error> {
        let der: Der = value.as_ref().decode().map_err(Error::FailedToDecodeDer)?;
        der.decode()
    }
}

/// Raw UTCTime/GeneralizedTime text.
///
/// The wire string is kept as decoded; certificate inspection reports it
/// verbatim. [`TimeString::to_datetime`] interprets the common `Z`-suffixed
/// forms when a caller wants a structured timestamp for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeString {
    raw: String,
}

impl TimeString {
    pub fn new(raw: impl Into<String>) -> Self {
        TimeString { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn try_from_tlv(tlv: &Tlv) -> Result<Self, Error> {
        let data = tlv.data().unwrap_or_default();
        let raw = String::from_utf8(data.to_vec()).map_err(|_| Error::TimeInvalidEncoding)?;
        Ok(TimeString { raw })
    }

    /// Interprets `YYMMDDHHMMSSZ` (UTCTime) or `YYYYMMDDHHMMSSZ`
    /// (GeneralizedTime).
    pub fn to_datetime(&self) -> Result<NaiveDateTime, Error> {
        NaiveDateTime::parse_from_str(&self.raw, "%y%m%d%H%M%SZ")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.raw, "%Y%m%d%H%M%SZ"))
            .map_err(|_| Error::TimeUnrecognizedFormat(self.raw.clone()))
    }
}

impl Display for TimeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shinobi::decoder::Decoder;
    use shinobi::encoder::Encoder;
    use std::str::FromStr;

    use crate::{Asn1Object, Element, Integer, ObjectIdentifier, TimeString};
    use shinobi_der::Der;

    #[rstest(input, expected,
        case(vec![0x01], "1"),
        case(vec![0x00], "0"),
        case(vec![0xff], "-1"),
        case(vec![0x00, 0x80], "128"),
        case(
            vec![0x03, 0xd4, 0x15, 0x31, 0x8e, 0x2c, 0x57, 0x1d, 0x29, 0x05, 0xfc, 0x3e, 0x05, 0x27, 0x68, 0x9d, 0x0d, 0x09],
            "333504890676592408951587385614406537514249"
        ),
    )]
    fn test_integer_from_bytes(input: Vec<u8>, expected: &str) {
        let value = Integer::from(input.as_slice());
        assert_eq!(expected, value.to_string());
    }

    #[rstest(input, expected,
        case(vec![0x00], "00"),
        case(vec![0x05], "05"),
        case(vec![0x00, 0xa2, 0xf4, 0x50, 0x6f, 0xa6, 0x46, 0x49, 0x92], "a2f4506fa6464992"),
    )]
    fn test_integer_to_hex(input: Vec<u8>, expected: &str) {
        let value = Integer::from(input.as_slice());
        assert_eq!(expected, value.to_hex());
    }

    #[rstest(input, expected,
        case(vec![0x55, 0x04, 0x03], "2.5.4.3"),
        case(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01], "1.2.840.113549.1.1.1"),
        case(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b], "1.2.840.113549.1.1.11"),
        case(vec![0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01], "1.3.6.1.5.5.7.3.1"),
    )]
    fn test_oid_decode(input: Vec<u8>, expected: &str) {
        let oid = ObjectIdentifier::try_from(input.as_slice()).unwrap();
        assert_eq!(expected, oid.to_string());
    }

    #[rstest(text,
        case("2.5.4.3"),
        case("1.2.840.113549.1.1.1"),
        case("1.3.6.1.4.1.311.21.20"),
    )]
    fn test_oid_roundtrip(text: &str) {
        let oid = ObjectIdentifier::from_str(text).unwrap();
        let encoded = Vec::try_from(oid).unwrap();
        let decoded = ObjectIdentifier::try_from(encoded.as_slice()).unwrap();
        assert_eq!(text, decoded.to_string());
    }

    #[test]
    fn test_oid_empty_content_is_an_error() {
        assert!(ObjectIdentifier::try_from([].as_slice()).is_err());
    }

    #[test]
    fn test_oid_incomplete_continuation_is_an_error() {
        // Trailing octet with the continuation bit still set.
        assert!(ObjectIdentifier::try_from([0x2a, 0x86].as_slice()).is_err());
        assert!(ObjectIdentifier::try_from([0x2a, 0x80].as_slice()).is_err());
    }

    #[rstest(input, expected,
        case(
            vec![0x30, 0x06, 0x02, 0x01, 0x05, 0x05, 0x00],
            Element::Sequence(vec![Element::Integer(Integer::from(5)), Element::Null]),
        ),
        case(
            vec![0x31, 0x03, 0x01, 0x01, 0xff],
            Element::Set(vec![Element::Boolean(true)]),
        ),
        case(
            vec![0xa0, 0x03, 0x02, 0x01, 0x02],
            Element::ContextSpecific {
                slot: 0,
                constructed: true,
                element: Box::new(Element::Integer(Integer::from(2))),
            },
        ),
        case(
            vec![0x0c, 0x04, 0xf0, 0x9f, 0x98, 0x8e],
            Element::UTF8String("😎".to_string()),
        ),
        case(
            vec![0x17, 0x0d, 0x31, 0x36, 0x31, 0x32, 0x32, 0x31, 0x31, 0x36, 0x33, 0x30, 0x30, 0x35, 0x5a],
            Element::UTCTime(TimeString::new("161221163005Z")),
        ),
    )]
    fn test_element_decode(input: Vec<u8>, expected: Element) {
        let der: Der = input.decode().unwrap();
        let obj: Asn1Object = der.decode().unwrap();
        assert_eq!(1, obj.elements().len());
        assert_eq!(expected, obj.elements()[0]);
    }

    #[rstest(input,
        case(vec![0x30, 0x06, 0x02, 0x01, 0x05, 0x05, 0x00]),
        case(vec![0xa0, 0x03, 0x02, 0x01, 0x02]),
        case(vec![0x31, 0x03, 0x01, 0x01, 0xff]),
        case(vec![0x06, 0x03, 0x55, 0x04, 0x03]),
        case(vec![0x17, 0x0d, 0x31, 0x36, 0x31, 0x32, 0x32, 0x31, 0x31, 0x36, 0x33, 0x30, 0x30, 0x35, 0x5a]),
    )]
    fn test_element_encode_roundtrip(input: Vec<u8>) {
        let der: Der = input.decode().unwrap();
        let obj: Asn1Object = der.decode().unwrap();
        let re_encoded: Der = obj.encode().unwrap();
        let bytes: Vec<u8> = re_encoded.encode().unwrap();
        assert_eq!(input, bytes);
    }

    #[test]
    fn test_time_string_to_datetime() {
        let utc = TimeString::new("161221163005Z");
        let dt = utc.to_datetime().unwrap();
        assert_eq!("2016-12-21 16:30:05", dt.format("%Y-%m-%d %H:%M:%S").to_string());

        let generalized = TimeString::new("20450101000000Z");
        let dt = generalized.to_datetime().unwrap();
        assert_eq!(2045, dt.format("%Y").to_string().parse::<i32>().unwrap());

        // Offset forms stay raw; interpretation fails but the text survives.
        let offset = TimeString::new("191215190210-0800");
        assert!(offset.to_datetime().is_err());
        assert_eq!("191215190210-0800", offset.as_str());
    }
}
