use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word boundaries: any whitespace run, or a single underscore or hyphen
    static ref SEPARATOR: Regex = Regex::new(r"\s+|_|-").unwrap();
}

/// A single word produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Verbatim text for acronyms, otherwise the word with every
    /// non-ASCII-letter removed. Never empty.
    pub text: String,
    pub acronym: bool,
}

impl Word {
    fn parse(raw: &str) -> Option<Self> {
        if is_acronym(raw) {
            return Some(Self {
                text: raw.to_string(),
                acronym: true,
            });
        }

        let text: String = raw.chars().filter(char::is_ascii_alphabetic).collect();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text,
                acronym: false,
            })
        }
    }
}

/// Split `input` into words on whitespace, `_` and `-`, dropping words that
/// contain no letters. Order is preserved.
pub fn tokenize(input: &str) -> Vec<Word> {
    SEPARATOR
        .split(input)
        .filter(|raw| !raw.is_empty())
        .filter_map(Word::parse)
        .collect()
}

fn is_acronym(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase())
}
