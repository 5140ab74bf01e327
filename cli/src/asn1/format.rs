use shinobi_asn1::{Asn1Object, Element, OctetString};

/// Format an ASN.1 structure in a tree style similar to lapo.it/asn1js.
pub(crate) fn format_asn1(object: &Asn1Object, parse_implicit: bool) -> String {
    let mut output = String::new();
    for element in object.elements() {
        format_element(element, 0, parse_implicit, &mut output);
    }
    output
}

/// Nested ASN.1 inside an OCTET STRING, when it parses as such.
fn parse_nested_octets(octets: &OctetString, depth: usize) -> Option<String> {
    let object = Asn1Object::try_from(octets).ok()?;
    let mut output = String::new();
    for element in object.elements() {
        format_element(element, depth + 1, true, &mut output);
    }
    Some(output)
}

fn push_octet_string(octets: &OctetString, prefix: &str, output: &mut String) {
    let byte_count = octets.as_bytes().len();
    if byte_count > 32 {
        output.push_str(&format!("{}OCTET STRING ({} bytes)\n", prefix, byte_count));
    } else {
        output.push_str(&format!("{}OCTET STRING {}\n", prefix, octets));
    }
}

fn format_element(element: &Element, depth: usize, parse_implicit: bool, output: &mut String) {
    let prefix = "  ".repeat(depth);

    match element {
        Element::Boolean(b) => {
            output.push_str(&format!("{}BOOLEAN {}\n", prefix, b));
        }
        Element::Integer(int) => {
            output.push_str(&format!("{}INTEGER {}\n", prefix, int));
        }
        Element::BitString(bits) => {
            output.push_str(&format!("{}BIT STRING ({} bits)\n", prefix, bits.bit_len()));
        }
        Element::OctetString(octets) => {
            if parse_implicit {
                if let Some(nested) = parse_nested_octets(octets, depth) {
                    push_octet_string(octets, &prefix, output);
                    output.push_str(&nested);
                    return;
                }
            }
            push_octet_string(octets, &prefix, output);
        }
        Element::Null => {
            output.push_str(&format!("{}NULL\n", prefix));
        }
        Element::ObjectIdentifier(oid) => {
            output.push_str(&format!("{}OBJECT IDENTIFIER {}\n", prefix, oid));
        }
        Element::UTF8String(s) => {
            output.push_str(&format!("{}UTF8String '{}'\n", prefix, s));
        }
        Element::PrintableString(s) => {
            output.push_str(&format!("{}PrintableString '{}'\n", prefix, s));
        }
        Element::IA5String(s) => {
            output.push_str(&format!("{}IA5String '{}'\n", prefix, s));
        }
        Element::UTCTime(t) => {
            output.push_str(&format!("{}UTCTime {}\n", prefix, t));
        }
        Element::GeneralizedTime(t) => {
            output.push_str(&format!("{}GeneralizedTime {}\n", prefix, t));
        }
        Element::Sequence(elements) => {
            output.push_str(&format!("{}SEQUENCE ({} elem)\n", prefix, elements.len()));
            for element in elements {
                format_element(element, depth + 1, parse_implicit, output);
            }
        }
        Element::Set(elements) => {
            output.push_str(&format!("{}SET ({} elem)\n", prefix, elements.len()));
            for element in elements {
                format_element(element, depth + 1, parse_implicit, output);
            }
        }
        Element::ContextSpecific {
            slot,
            constructed,
            element,
        } => {
            if *constructed {
                output.push_str(&format!("{}[{}] (explicit)\n", prefix, slot));
                format_element(element, depth + 1, parse_implicit, output);
            } else {
                // Implicit tagging carries raw content; show it as an octet
                // string, optionally re-parsed.
                output.push_str(&format!("{}[{}] (implicit)\n", prefix, slot));
                if let Element::OctetString(octets) = element.as_ref() {
                    let inner_prefix = format!("{}  ", prefix);
                    if parse_implicit {
                        if let Some(nested) = parse_nested_octets(octets, depth) {
                            push_octet_string(octets, &inner_prefix, output);
                            output.push_str(&nested);
                            return;
                        }
                    }
                    push_octet_string(octets, &inner_prefix, output);
                } else {
                    format_element(element, depth + 1, parse_implicit, output);
                }
            }
        }
        Element::Unimplemented(tlv) => {
            output.push_str(&format!(
                "{}(unimplemented tag 0x{:02x})\n",
                prefix,
                tlv.tag().raw()
            ));
        }
    }
}
