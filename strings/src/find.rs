//! Regex find and replace.

use regex::Regex;

use crate::error::Error;

/// One regex match: the matched text and its byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub offset: usize,
}

pub fn find_matches(input: &str, pattern: &str) -> Result<Vec<Match>, Error> {
    let re = Regex::new(pattern)?;
    Ok(re
        .find_iter(input)
        .map(|m| Match {
            text: m.as_str().to_string(),
            offset: m.start(),
        })
        .collect())
}

/// Replaces matches of `pattern` with `replacement` (capture groups like
/// `$1` work). `all` controls first-match vs every-match.
pub fn replace(input: &str, pattern: &str, replacement: &str, all: bool) -> Result<String, Error> {
    let re = Regex::new(pattern)?;
    let out = if all {
        re.replace_all(input, replacement)
    } else {
        re.replace(input, replacement)
    };
    Ok(out.into_owned())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_find_matches() {
        let matches = find_matches("one two three two", r"two").unwrap();
        assert_eq!(
            vec![
                Match {
                    text: "two".to_string(),
                    offset: 4
                },
                Match {
                    text: "two".to_string(),
                    offset: 14
                },
            ],
            matches
        );
    }

    #[test]
    fn test_find_matches_no_match() {
        assert!(find_matches("abc", r"\d+").unwrap().is_empty());
    }

    #[rstest(input, pattern, replacement, all, expected,
        case("one two two", "two", "2", false, "one 2 two"),
        case("one two two", "two", "2", true, "one 2 2"),
        case("2024-08-07", r"(\d+)-(\d+)-(\d+)", "$3/$2/$1", true, "07/08/2024"),
    )]
    fn test_replace(input: &str, pattern: &str, replacement: &str, all: bool, expected: &str) {
        assert_eq!(expected, replace(input, pattern, replacement, all).unwrap());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(find_matches("abc", "(unclosed").is_err());
        assert!(replace("abc", "(unclosed", "x", true).is_err());
    }
}
