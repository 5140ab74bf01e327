use clap::{Subcommand, ValueEnum};
use shinobi_strings::lines::SortOrder;
use shinobi_strings::{case, count, diff, find, lines, wrap};

use crate::error::Result;
use crate::utils::read_input_string;

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Title,
    Sentence,
    Upper,
    Lower,
    Slug,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum LineOp {
    Sort,
    SortDesc,
    Unique,
    RemoveBlank,
    NormalizeSpaces,
}

#[derive(Subcommand)]
pub(crate) enum TextCommands {
    /// Convert between naming and prose cases
    Case {
        #[arg(value_enum)]
        style: CaseStyle,

        /// Path to the input file. If not specified, reads from stdin
        file: Option<String>,
    },
    /// Sort, deduplicate, or clean up lines
    Lines {
        #[arg(value_enum)]
        op: LineOp,

        file: Option<String>,
    },
    /// Join lines with a delimiter (\n and \t escapes are interpreted)
    Join {
        #[arg(short, long, default_value = ", ")]
        delimiter: String,

        /// Keep leading/trailing whitespace on each line
        #[arg(long)]
        no_trim: bool,

        /// Keep empty lines
        #[arg(long)]
        keep_empty: bool,

        file: Option<String>,
    },
    /// Wrap text at a column width
    Wrap {
        #[arg(short, long, default_value_t = 80)]
        width: usize,

        file: Option<String>,
    },
    /// Word and character counts
    Count { file: Option<String> },
    /// Show each character with its Unicode code point
    Codepoints { file: Option<String> },
    /// Word frequency table
    Freq { file: Option<String> },
    /// List regex matches with byte offsets
    Find {
        pattern: String,

        file: Option<String>,
    },
    /// Regex replace ($1-style capture references work)
    Replace {
        pattern: String,
        replacement: String,

        /// Replace only the first match
        #[arg(long)]
        first: bool,

        file: Option<String>,
    },
    /// Line diff between two files
    Diff { old_file: String, new_file: String },
}

pub(crate) fn execute(command: TextCommands) -> Result<()> {
    match command {
        TextCommands::Case { style, file } => {
            let input = read_input_string(file.as_deref())?;
            let output = match style {
                CaseStyle::Camel => case::to_camel(&input),
                CaseStyle::Pascal => case::to_pascal(&input),
                CaseStyle::Snake => case::to_snake(&input),
                CaseStyle::Kebab => case::to_kebab(&input),
                CaseStyle::Title => case::title_case(&input),
                CaseStyle::Sentence => case::sentence_case(&input),
                CaseStyle::Upper => input.to_uppercase(),
                CaseStyle::Lower => input.to_lowercase(),
                CaseStyle::Slug => case::slugify(&input),
            };
            println!("{}", output);
        }
        TextCommands::Lines { op, file } => {
            let input = read_input_string(file.as_deref())?;
            let output = match op {
                LineOp::Sort => lines::sort_lines(&input, SortOrder::Ascending),
                LineOp::SortDesc => lines::sort_lines(&input, SortOrder::Descending),
                LineOp::Unique => lines::unique_lines(&input),
                LineOp::RemoveBlank => lines::remove_blank_lines(&input),
                LineOp::NormalizeSpaces => lines::normalize_spaces(&input),
            };
            println!("{}", output);
        }
        TextCommands::Join {
            delimiter,
            no_trim,
            keep_empty,
            file,
        } => {
            let input = read_input_string(file.as_deref())?;
            println!(
                "{}",
                lines::join_lines(&input, &delimiter, !no_trim, !keep_empty)
            );
        }
        TextCommands::Wrap { width, file } => {
            let input = read_input_string(file.as_deref())?;
            println!("{}", wrap::wrap(&input, width));
        }
        TextCommands::Count { file } => {
            let input = read_input_string(file.as_deref())?;
            println!("words: {}", count::word_count(&input));
            println!("chars: {}", count::char_count(&input));
            println!("lines: {}", input.lines().count());
        }
        TextCommands::Codepoints { file } => {
            let input = read_input_string(file.as_deref())?;
            println!("{}", count::code_points(&input));
        }
        TextCommands::Freq { file } => {
            let input = read_input_string(file.as_deref())?;
            for (word, n) in count::word_frequencies(&input) {
                println!("{:6}  {}", n, word);
            }
        }
        TextCommands::Find { pattern, file } => {
            let input = read_input_string(file.as_deref())?;
            for m in find::find_matches(&input, &pattern)? {
                println!("{}: {}", m.offset, m.text);
            }
        }
        TextCommands::Replace {
            pattern,
            replacement,
            first,
            file,
        } => {
            let input = read_input_string(file.as_deref())?;
            println!("{}", find::replace(&input, &pattern, &replacement, !first)?);
        }
        TextCommands::Diff { old_file, new_file } => {
            let old = read_input_string(Some(&old_file))?;
            let new = read_input_string(Some(&new_file))?;
            print!("{}", diff::diff_lines(&old, &new));
        }
    }
    Ok(())
}
