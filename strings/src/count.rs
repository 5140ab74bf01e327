//! Word/character statistics and code point listing.

use std::collections::HashMap;

pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

pub fn char_count(input: &str) -> usize {
    input.chars().count()
}

/// One line per character: the character followed by its `U+XXXX` code
/// point.
pub fn code_points(input: &str) -> String {
    input
        .chars()
        .map(|ch| format!("{} U+{:04X}", ch, ch as u32))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word frequencies, most frequent first; ties break alphabetically.
/// Comparison is case-insensitive.
pub fn word_frequencies(input: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in input.split_whitespace() {
        let key: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if !key.is_empty() {
            *counts.entry(key).or_default() += 1;
        }
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(input, words, chars,
        case("hello world", 2, 11),
        case("", 0, 0),
        case("  a  ", 1, 5),
        case("😎", 1, 1),
    )]
    fn test_counts(input: &str, words: usize, chars: usize) {
        assert_eq!(words, word_count(input));
        assert_eq!(chars, char_count(input));
    }

    #[test]
    fn test_code_points() {
        assert_eq!("A U+0041\n€ U+20AC", code_points("A€"));
    }

    #[test]
    fn test_word_frequencies() {
        let freq = word_frequencies("the cat and the dog and the bird");
        assert_eq!(("the".to_string(), 3), freq[0]);
        assert_eq!(("and".to_string(), 2), freq[1]);
    }

    #[test]
    fn test_word_frequencies_ignores_case_and_punctuation() {
        let freq = word_frequencies("Hello, hello! HELLO?");
        assert_eq!(vec![("hello".to_string(), 3)], freq);
    }
}
