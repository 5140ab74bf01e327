//! Case converters between camelCase, PascalCase, snake_case, kebab-case,
//! Title Case, and Sentence case.

pub fn to_camel(input: &str) -> String {
    let mut out = String::new();
    let mut upper_next = false;
    for ch in input.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    lower_first(&out)
}

pub fn to_pascal(input: &str) -> String {
    upper_first(&to_camel(input))
}

pub fn to_snake(input: &str) -> String {
    delimit(input, '_')
}

pub fn to_kebab(input: &str) -> String {
    delimit(input, '-')
}

/// Lowercase then uppercase the first letter of every word.
pub fn title_case(input: &str) -> String {
    let mut out = String::new();
    let mut word_start = true;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

/// Uppercase the first letter of the text and of each sentence after
/// `.`/`!`/`?`. Other characters are left as they are.
pub fn sentence_case(input: &str) -> String {
    let mut out = String::new();
    let mut capitalize = true;
    for ch in input.chars() {
        if matches!(ch, '.' | '!' | '?') {
            capitalize = true;
            out.push(ch);
        } else if ch.is_whitespace() {
            out.push(ch);
        } else if capitalize && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.push(ch);
            capitalize = false;
        }
    }
    out
}

/// ASCII slug: lowercase, runs of anything else collapse to single hyphens.
pub fn slugify(input: &str) -> String {
    let mut out = String::new();
    let mut pending_hyphen = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    out
}

fn delimit(input: &str, sep: char) -> String {
    let mut out = String::new();
    let mut prev_lower = false;
    let mut pending_sep = false;
    for ch in input.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = !out.is_empty();
            continue;
        }
        if pending_sep {
            out.push(sep);
            pending_sep = false;
        } else if prev_lower && ch.is_uppercase() {
            out.push(sep);
        }
        prev_lower = ch.is_lowercase();
        out.extend(ch.to_lowercase());
    }
    out
}

fn lower_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
