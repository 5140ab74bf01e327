//! DER (Distinguished Encoding Rules) TLV reader and writer.
//!
//! A DER stream is a sequence of tag-length-value records. Constructed
//! records (SEQUENCE, SET, explicit context tags) nest further records in
//! their value region, so parsing yields a tree of [`Tlv`] nodes. Only
//! definite lengths are accepted; the BER indefinite form is rejected.

use nom::{IResult, Parser};
use shinobi::decoder::{DecodableFrom, Decoder};
use shinobi::encoder::{EncodableTo, Encoder};

pub mod error;

use error::Error;

/// Bit 0x20 of a tag octet marks a constructed encoding.
pub const TAG_CONSTRUCTED: u8 = 0x20;

type ParseResult<'a, T> = IResult<&'a [u8], T, Error>;

/// Universal-class tag numbers this crate understands.
///
/// Anything else is carried through as `Unimplemented` with its raw tag
/// octet, so unknown types survive a decode/encode round trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrimitiveTag {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    UTF8String,
    Sequence,
    Set,
    PrintableString,
    IA5String,
    UTCTime,
    GeneralizedTime,
    Unimplemented(u8),
}

impl From<u8> for PrimitiveTag {
    fn from(value: u8) -> Self {
        match value {
            0x01 => Self::Boolean,
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x0c => Self::UTF8String,
            0x30 => Self::Sequence,
            0x31 => Self::Set,
            0x13 => Self::PrintableString,
            0x16 => Self::IA5String,
            0x17 => Self::UTCTime,
            0x18 => Self::GeneralizedTime,
            _ => Self::Unimplemented(value),
        }
    }
}

impl From<&PrimitiveTag> for u8 {
    fn from(tag: &PrimitiveTag) -> Self {
        match tag {
            PrimitiveTag::Boolean => 0x01,
            PrimitiveTag::Integer => 0x02,
            PrimitiveTag::BitString => 0x03,
            PrimitiveTag::OctetString => 0x04,
            PrimitiveTag::Null => 0x05,
            PrimitiveTag::ObjectIdentifier => 0x06,
            PrimitiveTag::UTF8String => 0x0c,
            PrimitiveTag::Sequence => 0x30,
            PrimitiveTag::Set => 0x31,
            PrimitiveTag::PrintableString => 0x13,
            PrimitiveTag::IA5String => 0x16,
            PrimitiveTag::UTCTime => 0x17,
            PrimitiveTag::GeneralizedTime => 0x18,
            PrimitiveTag::Unimplemented(v) => *v,
        }
    }
}

/// A decoded tag octet.
///
/// The raw octet is preserved so re-encoding reproduces the input exactly,
/// class bits included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Universal (or application/private, via `Unimplemented`) class.
    Primitive(PrimitiveTag, u8),
    /// Context-specific class, e.g. the `[0] EXPLICIT Version` wrapper in a
    /// TBSCertificate.
    ContextSpecific { slot: u8, constructed: bool },
}

impl From<u8> for Tag {
    fn from(value: u8) -> Self {
        if value & 0xc0 == 0x80 {
            Tag::ContextSpecific {
                slot: value & 0x1f,
                constructed: value & TAG_CONSTRUCTED != 0,
            }
        } else {
            Tag::Primitive(PrimitiveTag::from(value), value)
        }
    }
}

impl Tag {
    /// The raw tag octet.
    pub fn raw(&self) -> u8 {
        match self {
            Tag::Primitive(_, raw) => *raw,
            Tag::ContextSpecific { slot, constructed } => {
                let constructed_bit = if *constructed { TAG_CONSTRUCTED } else { 0 };
                0x80 | constructed_bit | (slot & 0x1f)
            }
        }
    }

    /// Whether the value region nests further TLV records.
    pub fn is_constructed(&self) -> bool {
        self.raw() & TAG_CONSTRUCTED != 0
    }
}

/// One tag-length-value record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    length: u64,
    value: Value,
}

/// Value region of a record: nested records or raw content octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Tlv(Vec<Tlv>),
    Data(Vec<u8>),
}

impl Tlv {
    pub fn new_primitive(tag: Tag, data: Vec<u8>) -> Self {
        Tlv {
            tag,
            length: data.len() as u64,
            value: Value::Data(data),
        }
    }

    pub fn new_constructed(tag: Tag, tlvs: Vec<Tlv>) -> Self {
        let length = tlvs.iter().map(Tlv::encoded_len).sum();
        Tlv {
            tag,
            length,
            value: Value::Tlv(tlvs),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Decoded content length in bytes.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Content octets of a primitive record.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.value {
            Value::Data(data) => Some(data),
            Value::Tlv(_) => None,
        }
    }

    /// Children of a constructed record, in encoding order.
    pub fn tlvs(&self) -> Option<&[Tlv]> {
        match &self.value {
            Value::Tlv(tlvs) => Some(tlvs),
            Value::Data(_) => None,
        }
    }

    /// Total encoded size: tag octet + length field + content.
    pub fn encoded_len(&self) -> u64 {
        1 + length_field_size(self.length) + self.length
    }

    fn parse(input: &[u8]) -> ParseResult<'_, Tlv> {
        let (input, tag) = parse_tag(input)?;
        let (input, length) = parse_length(input)?;
        let (input, data) = nom::bytes::complete::take(length).parse(input)?;

        if tag.is_constructed() {
            // Children fill the content region exactly; a child overrunning
            // it fails the inner take above.
            let mut tlvs = Vec::new();
            let mut data = data;
            while !data.is_empty() {
                let (rest, child) = Self::parse(data)?;
                data = rest;
                tlvs.push(child);
            }

            return Ok((
                input,
                Tlv {
                    tag,
                    length,
                    value: Value::Tlv(tlvs),
                },
            ));
        }

        Ok((
            input,
            Tlv {
                tag,
                length,
                value: Value::Data(data.to_vec()),
            },
        ))
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.tag.raw());
        encode_length(self.length, out);
        match &self.value {
            Value::Data(data) => out.extend_from_slice(data),
            Value::Tlv(tlvs) => {
                for tlv in tlvs {
                    tlv.encode_into(out);
                }
            }
        }
    }
}

fn parse_tag(input: &[u8]) -> ParseResult<'_, Tag> {
    let (input, n) = nom::number::be_u8().parse(input)?;
    Ok((input, Tag::from(n)))
}

fn parse_length(input: &[u8]) -> ParseResult<'_, u64> {
    let (input, n) = nom::number::be_u8().parse(input)?;
    if n == 0x80 {
        return Err(nom::Err::Failure(Error::IndefiniteLength));
    }
    if n & 0x80 == 0x80 {
        // Long form: the low 7 bits count the big-endian length octets.
        let count = n & 0x7f;
        if count > 8 {
            return Err(nom::Err::Failure(Error::LengthOverflow));
        }
        let (input, bs) = nom::bytes::complete::take(count).parse(input)?;
        let length = bs.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        return Ok((input, length));
    }
    // Short form: 0-127.
    Ok((input, n as u64))
}

fn length_field_size(length: u64) -> u64 {
    if length < 0x80 {
        1
    } else {
        let bytes = (u64::BITS / 8) as u64 - (length.leading_zeros() / 8) as u64;
        1 + bytes
    }
}

fn encode_length(length: u64, out: &mut Vec<u8>) {
    if length < 0x80 {
        out.push(length as u8);
        return;
    }
    let bytes = length.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[skip..];
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
}

/// An ordered sequence of top-level TLV records decoded from one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Der {
    tlvs: Vec<Tlv>,
}

impl Der {
    pub fn new(tlvs: Vec<Tlv>) -> Self {
        Der { tlvs }
    }

    pub fn elements(&self) -> &[Tlv] {
        &self.tlvs
    }
}

fn decode_der(input: &[u8]) -> Result<Der, Error> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    let mut tlvs = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let (next, tlv) = Tlv::parse(rest).map_err(Error::from_nom)?;
        rest = next;
        tlvs.push(tlv);
    }
    Ok(Der { tlvs })
}

impl DecodableFrom<Vec<u8>> for Der {}

impl Decoder<Vec<u8>, Der> for Vec<u8> {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        decode_der(self)
    }
}

impl DecodableFrom<&[u8]> for Der {}

impl Decoder<&[u8], Der> for &[u8] {
    type Error = Error;

    fn decode(&self) -> Result<Der, Self::Error> {
        decode_der(self)
    }
}

impl EncodableTo<Der> for Vec<u8> {}

impl Encoder<Der, Vec<u8>> for Der {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        let mut out = Vec::new();
        for tlv in &self.tlvs {
            tlv.encode_into(&mut out);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shinobi::decoder::Decoder;
    use shinobi::encoder::Encoder;

    use crate::{Der, Error, PrimitiveTag, Tag, Tlv, Value, parse_length, parse_tag};

    #[rstest(input, expected,
        case(vec![0x02, 0x01], Tag::Primitive(PrimitiveTag::Integer, 0x02)),
        case(vec![0x30, 0x01], Tag::Primitive(PrimitiveTag::Sequence, 0x30)),
        case(vec![0x31], Tag::Primitive(PrimitiveTag::Set, 0x31)),
        case(vec![0xa0, 0x03], Tag::ContextSpecific { slot: 0, constructed: true }),
        case(vec![0x82, 0x01], Tag::ContextSpecific { slot: 2, constructed: false }),
        case(vec![0x47, 0x00], Tag::Primitive(PrimitiveTag::Unimplemented(0x47), 0x47)),
    )]
    fn test_parse_tag(input: Vec<u8>, expected: Tag) {
        let (_, actual) = parse_tag(&input).unwrap();
        assert_eq!(expected, actual);
        assert_eq!(input[0], actual.raw());
    }

    #[rstest(input, expected,
        case(vec![0x00], 0),
        case(vec![0x02], 0x02),
        case(vec![0x7f], 0x7f),
        case(vec![0x81, 0x80], 0x80),
        case(vec![0x82, 0x02, 0x10], 256 * 0x02 + 0x10),
        case(vec![0x83, 0x01, 0x00, 0x00], 256 * 256),
        case(vec![0x82, 0xff, 0xff], 256 * 0xff + 0xff),
    )]
    fn test_parse_length(input: Vec<u8>, expected: u64) {
        let (_, actual) = parse_length(&input).unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_parse_length_indefinite_is_rejected() {
        let err = parse_length(&[0x80, 0x02, 0x01, 0x05, 0x00, 0x00]).unwrap_err();
        assert_eq!(
            Error::from_nom(err),
            Error::IndefiniteLength,
            "BER indefinite length must not parse"
        );
    }

    #[rstest(input, expected,
        case(vec![0x02, 0x01, 0x05],
             Tlv { tag: Tag::Primitive(PrimitiveTag::Integer, 0x02), length: 1, value: Value::Data(vec![0x05]) }),
        case(vec![0x05, 0x00],
             Tlv { tag: Tag::Primitive(PrimitiveTag::Null, 0x05), length: 0, value: Value::Data(vec![]) }),
        case(vec![0x13, 0x02, 0x68, 0x69],
             Tlv { tag: Tag::Primitive(PrimitiveTag::PrintableString, 0x13), length: 2, value: Value::Data(vec![0x68, 0x69]) }),
        case(vec![0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01],
             Tlv { tag: Tag::Primitive(PrimitiveTag::ObjectIdentifier, 0x06), length: 9,
                   value: Value::Data(vec![0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01]) }),
        case(vec![0x03, 0x04, 0x06, 0x6e, 0x5d, 0xc0],
             Tlv { tag: Tag::Primitive(PrimitiveTag::BitString, 0x03), length: 4, value: Value::Data(vec![0x06, 0x6e, 0x5d, 0xc0]) }),
    )]
    fn test_tlv_parse_primitive(input: Vec<u8>, expected: Tlv) {
        let (rest, actual) = Tlv::parse(&input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(expected, actual);
        assert_eq!(input.len() as u64, actual.encoded_len());
    }

    // SEQUENCE of length 3 containing INTEGER 5: the minimal constructed case.
    #[test]
    fn test_tlv_parse_minimal_sequence() {
        let input = [0x30, 0x03, 0x02, 0x01, 0x05];
        let (rest, tlv) = Tlv::parse(&input).unwrap();
        assert!(rest.is_empty());
        assert!(tlv.tag().is_constructed());
        let children = tlv.tlvs().expect("constructed node has children");
        assert_eq!(1, children.len());
        assert_eq!(Some([0x05].as_slice()), children[0].data());
    }

    #[test]
    fn test_tlv_parse_sequence_preserves_order() {
        let input = [
            0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09,
        ];
        let (_, tlv) = Tlv::parse(&input).unwrap();
        let children = tlv.tlvs().unwrap();
        assert_eq!(3, children.len());
        let values: Vec<u8> = children.iter().map(|c| c.data().unwrap()[0]).collect();
        assert_eq!(vec![0x07, 0x08, 0x09], values);
    }

    #[test]
    fn test_tlv_parse_explicit_context_tag() {
        // [0] EXPLICIT wrapping INTEGER 2, as in a TBSCertificate version.
        let input = [0xa0, 0x03, 0x02, 0x01, 0x02];
        let (_, tlv) = Tlv::parse(&input).unwrap();
        assert_eq!(
            &Tag::ContextSpecific {
                slot: 0,
                constructed: true
            },
            tlv.tag()
        );
        let inner = &tlv.tlvs().unwrap()[0];
        assert_eq!(Some([0x02].as_slice()), inner.data());
    }

    #[rstest(input,
        case(vec![0x30]),                   // tag without length
        case(vec![0x02, 0x05, 0x01]),       // declared length exceeds buffer
        case(vec![0x30, 0x04, 0x02, 0x01]), // child truncated inside content
        case(vec![0x82, 0x01]),             // long-form length field truncated
    )]
    fn test_decode_truncated_input_is_an_error(input: Vec<u8>) {
        let result: Result<Der, Error> = input.decode();
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_empty_input() {
        let result: Result<Der, Error> = Vec::<u8>::new().decode();
        assert_eq!(Err(Error::Empty), result);
    }

    #[rstest(input,
        case(vec![0x02, 0x01, 0x05]),
        case(vec![0x30, 0x03, 0x02, 0x01, 0x05]),
        case(vec![0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09]),
        case(vec![0xa0, 0x03, 0x02, 0x01, 0x02]),
        case(vec![0x05, 0x00]),
        case(vec![0x02, 0x01, 0x05, 0x02, 0x01, 0x06]), // two sibling records
    )]
    fn test_decode_encode_roundtrip(input: Vec<u8>) {
        let der: Der = input.decode().unwrap();
        let encoded: Vec<u8> = der.encode().unwrap();
        assert_eq!(input, encoded);
    }

    #[test]
    fn test_encoded_len_matches_consumed_bytes() {
        // A long-form length: OCTET STRING of 200 bytes.
        let mut input = vec![0x04, 0x81, 0xc8];
        input.extend(std::iter::repeat_n(0xab, 200));
        let (rest, tlv) = Tlv::parse(&input).unwrap();
        assert!(rest.is_empty());
        assert_eq!(input.len() as u64, tlv.encoded_len());
        assert_eq!(200, tlv.length());
        assert_eq!(200, tlv.data().unwrap().len());
    }
}
