use crate::case::Notation;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One converted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversions {
    notation: Notation,
    results: Vec<Conversion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSum {
    a: Value,
    b: Value,
    sum: f64,
}

pub fn render_conversions(
    notation: Notation,
    conversions: &[Conversion],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| c.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let output = JsonConversions {
                notation,
                results: conversions.to_vec(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

pub fn print_conversions(
    notation: Notation,
    conversions: &[Conversion],
    format: OutputFormat,
) -> Result<()> {
    if conversions.is_empty() && format == OutputFormat::Text {
        return Ok(());
    }
    println!("{}", render_conversions(notation, conversions, format)?);
    Ok(())
}

pub fn render_sum(a: &Value, b: &Value, sum: f64, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(sum.to_string()),
        OutputFormat::Json => {
            let output = JsonSum {
                a: a.clone(),
                b: b.clone(),
                sum,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

pub fn print_sum(
    a: &Value,
    b: &Value,
    sum: f64,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render_sum(a, b, sum, format)?;
    if colored_output && format == OutputFormat::Text {
        println!("{}", rendered.green().bold());
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

pub fn print_error(message: impl fmt::Display, colored_output: bool) {
    if colored_output {
        eprintln!("{} {}", "error:".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}
