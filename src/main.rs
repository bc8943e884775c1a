use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, Conversion, OutputFormat};
use recase::config::Overrides;
use recase::{dynamic, Config, Notation};
use serde_json::Value;
use std::io::{self, BufRead};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(
    version,
    about = "Convert text to camelCase, dot.case, kebab-case or snake_case",
    long_about = None
)]
struct Cli {
    /// Text to convert (reads lines from stdin when omitted).
    /// Put `--` first to convert text that names a subcommand: `recase -- add`
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Target notation (camel, dot, kebab, snake)
    #[arg(short = 't', long = "to", value_name = "NOTATION")]
    notation: Option<Notation>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Parse each TEXT as a JSON value instead of a plain string
    #[arg(long)]
    json_args: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add two numbers (operands are read as JSON; `null` counts as missing)
    Add {
        #[arg(allow_negative_numbers = true)]
        a: String,
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose), !cli.no_color);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        notation: cli.notation,
        format: cli.format,
        no_color: cli.no_color,
    })?;

    let ok = match cli.command {
        Some(Commands::Add { a, b }) => run_add(&a, &b, &config)?,
        None => run_convert(&cli.text, cli.json_args, &config)?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

fn run_convert(text: &[String], json_args: bool, config: &Config) -> Result<bool> {
    let mut ok = true;

    let inputs: Vec<Value> = if text.is_empty() {
        let stdin = read_lines(io::stdin().lock(), config.color)?;
        ok &= stdin.unreadable == 0;
        stdin.lines.into_iter().map(Value::String).collect()
    } else if json_args {
        text.iter()
            .map(|raw| {
                serde_json::from_str(raw)
                    .with_context(|| format!("Failed to parse JSON argument: {}", raw))
            })
            .collect::<Result<Vec<Value>>>()?
    } else {
        text.iter().cloned().map(Value::String).collect()
    };

    let mut conversions = Vec::with_capacity(inputs.len());

    for input in &inputs {
        match dynamic::convert(input, config.notation) {
            Ok(converted) => conversions.push(Conversion {
                input: display_value(input),
                output: converted,
            }),
            Err(e) => {
                output::print_error(format!("{}: {}", input, e), config.color);
                ok = false;
            }
        }
    }

    tracing::info!(
        notation = %config.notation,
        converted = conversions.len(),
        failed = inputs.len() - conversions.len(),
        "conversion finished"
    );

    output::print_conversions(config.notation, &conversions, config.format)?;
    Ok(ok)
}

fn run_add(a: &str, b: &str, config: &Config) -> Result<bool> {
    let a = parse_operand(a);
    let b = parse_operand(b);

    match dynamic::add_numbers(Some(&a), Some(&b)) {
        Ok(sum) => {
            output::print_sum(&a, &b, sum, config.color, config.format)?;
            Ok(true)
        }
        Err(e) => {
            output::print_error(e, config.color);
            Ok(false)
        }
    }
}

/// Operands are JSON; anything that does not parse is taken as a string.
fn parse_operand(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

struct InputLines {
    lines: Vec<String>,
    unreadable: usize,
}

/// Lines that are not valid UTF-8 are reported and skipped; any other read
/// error ends the input.
fn read_lines(reader: impl BufRead, colored_output: bool) -> Result<InputLines> {
    let mut input = InputLines {
        lines: Vec::new(),
        unreadable: 0,
    };

    for (idx, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => input.lines.push(line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                output::print_error(format!("stdin line {}: {}", idx + 1, e), colored_output);
                input.unreadable += 1;
            }
            Err(e) => return Err(e).context("Failed to read stdin"),
        }
    }

    Ok(input)
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter, ansi: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
