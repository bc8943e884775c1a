pub mod tokenizer;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tokenizer::{tokenize, Word};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Target notation for [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Camel,
    Dot,
    Kebab,
    Snake,
}

impl Notation {
    pub const ALL: [Notation; 4] = [
        Notation::Camel,
        Notation::Dot,
        Notation::Kebab,
        Notation::Snake,
    ];

    /// Whether this notation goes through the word tokenizer.
    ///
    /// Kebab and snake are whole-string transforms: they keep punctuation and
    /// do not preserve acronyms.
    pub fn uses_tokenizer(self) -> bool {
        matches!(self, Notation::Camel | Notation::Dot)
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "camel" | "camelcase" => Ok(Notation::Camel),
            "dot" | "dotcase" => Ok(Notation::Dot),
            "kebab" | "kebabcase" => Ok(Notation::Kebab),
            "snake" | "snakecase" => Ok(Notation::Snake),
            _ => Err(format!("Unknown notation: {}", s)),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Camel => write!(f, "camel"),
            Notation::Dot => write!(f, "dot"),
            Notation::Kebab => write!(f, "kebab"),
            Notation::Snake => write!(f, "snake"),
        }
    }
}

/// Convert `input` into the given notation.
pub fn convert(input: &str, notation: Notation) -> String {
    let output = match notation {
        Notation::Camel => to_camel_case(input),
        Notation::Dot => to_dot_case(input),
        Notation::Kebab => to_kebab_case(input),
        Notation::Snake => to_snake_case(input),
    };
    tracing::trace!(%notation, input, output = %output, "converted");
    output
}

/// Convert to camelCase.
///
/// The first word is lowercased, later words are capitalized, and all-caps
/// acronyms are kept verbatim wherever they appear:
///
/// ```
/// use recase::to_camel_case;
///
/// assert_eq!(to_camel_case("make-this_snake"), "makeThisSnake");
/// assert_eq!(to_camel_case("NASA project"), "NASAProject");
/// assert_eq!(to_camel_case("hello@world"), "helloWorld");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, word) in tokenize(input).iter().enumerate() {
        if word.acronym {
            out.push_str(&word.text);
        } else if i == 0 {
            out.push_str(&word.text.to_ascii_lowercase());
        } else {
            push_capitalized(&mut out, word);
        }
    }

    out
}

/// Convert to dot.case. Acronyms are lowercased like every other word.
///
/// ```
/// use recase::to_dot_case;
///
/// assert_eq!(to_dot_case("NASA project"), "nasa.project");
/// ```
pub fn to_dot_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|word| word.text.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

/// Convert to kebab-case by lowercasing and turning each whitespace run into
/// a single `-`. Punctuation is left in place.
pub fn to_kebab_case(input: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&input.to_lowercase(), "-")
        .into_owned()
}

/// Convert to snake_case by trimming, replacing every space with `_` and
/// lowercasing. Runs of spaces are not collapsed.
pub fn to_snake_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    input.trim().replace(' ', "_").to_lowercase()
}

// Tokenized words are ASCII-only, so byte slicing is safe here.
fn push_capitalized(out: &mut String, word: &Word) {
    let (head, tail) = word.text.split_at(1);
    out.push_str(&head.to_ascii_uppercase());
    out.push_str(&tail.to_ascii_lowercase());
}
