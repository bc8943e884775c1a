pub mod case;
pub mod cli;
pub mod config;
pub mod dynamic;
pub mod error;
pub mod numeric;

pub use case::tokenizer::{tokenize, Word};
pub use case::{convert, to_camel_case, to_dot_case, to_kebab_case, to_snake_case, Notation};
pub use config::Config;
pub use error::{Error, Result};
pub use numeric::add_numbers;
