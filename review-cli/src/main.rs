//! Command-line interface for review-text
//! This binary normalizes review text, shows what each stage did, and runs the
//! submission gate.
//!
//! Usage:
//!   review normalize [`<path>`] [--format `<format>`] [--stages]   - Print the normalized text
//!   review stages [`<path>`] [--format `<format>`]                 - Print the output of every stage
//!   review submit [`<path>`] --doctor `<id>` [options]             - Validate and record a review
//!
//! Text is read from stdin when no path is given. `--config <file>` layers a file
//! over the built-in defaults; without it `review.toml` in the current directory
//! is used if present.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use review_config::{Loader, OutputFormat, ReviewConfig};
use review_text::review::submission::origin_address;
use review_text::{trace, LengthGate, ReviewText, StageOutput, Submission};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to a file with the review text (stdin if omitted)")
        .index(1)
}

fn build_cli() -> Command {
    Command::new("review")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and submit review text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .value_parser(["text", "json"])
                .help("Output format (default comes from configuration)"),
        )
        .subcommand(
            Command::new("normalize")
                .about("Print the normalized form of a review")
                .arg(path_arg())
                .arg(
                    Arg::new("stages")
                        .long("stages")
                        .help("Also print every intermediate stage to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("stages")
                .about("Print the text after each pipeline stage")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("submit")
                .about("Apply the length gate and print the resulting submission")
                .long_about(
                    "Apply the length gate and print the resulting submission. \
                     The text is taken exactly as read, including any trailing line break.",
                )
                .arg(path_arg())
                .arg(
                    Arg::new("doctor")
                        .long("doctor")
                        .help("Id of the doctor the review is about")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("forwarded-for")
                        .long("forwarded-for")
                        .help("Value of the X-Forwarded-For header, if any"),
                )
                .arg(
                    Arg::new("remote-addr")
                        .long("remote-addr")
                        .help("Address of the connecting peer"),
                )
                .arg(
                    Arg::new("user")
                        .long("user")
                        .help("Name of the authenticated user, if any"),
                )
                .arg(
                    Arg::new("min-length")
                        .long("min-length")
                        .help("Override the minimum review length")
                        .value_parser(value_parser!(usize)),
                ),
        )
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let (name, sub_matches) = matches
        .subcommand()
        .expect("subcommand is required by the parser");
    let config = load_config(sub_matches);

    match name {
        "normalize" => handle_normalize_command(sub_matches, &config),
        "stages" => handle_stages_command(sub_matches, &config),
        "submit" => handle_submit_command(sub_matches, &config),
        other => {
            eprintln!("Unknown command '{}'", other);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout stays clean for piping
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(matches: &ArgMatches) -> ReviewConfig {
    let explicit = matches.get_one::<String>("config").map(Path::new);
    let mut loader = Loader::new().with_user_file(explicit);

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader
            .with_format(format)
            .unwrap_or_else(|e| exit_with("Invalid --format", e));
    }
    if let Ok(Some(min_length)) = matches.try_get_one::<usize>("min-length") {
        loader = loader
            .with_min_length(*min_length)
            .unwrap_or_else(|e| exit_with("Invalid --min-length", e));
    }

    loader
        .build()
        .unwrap_or_else(|e| exit_with("Configuration error", e))
}

fn exit_with(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, err);
    std::process::exit(1);
}

/// Read the review from the given path or stdin, byte for byte
fn read_input(matches: &ArgMatches) -> String {
    match matches.get_one::<String>("path") {
        Some(path) => {
            tracing::debug!(path = %path, "reading review from file");
            std::fs::read_to_string(path)
                .unwrap_or_else(|e| exit_with(&format!("Cannot read '{}'", path), e))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| exit_with("Cannot read stdin", e));
            buf
        }
    }
}

/// Drop the single line break a shell pipe or editor leaves at the end
fn strip_final_line_break(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn format_trace(outputs: &[StageOutput]) -> String {
    outputs
        .iter()
        .map(|output| format!("{}: {}", output.stage, output.text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| exit_with("Error formatting JSON", e))
}

/// Handle the normalize command
fn handle_normalize_command(matches: &ArgMatches, config: &ReviewConfig) {
    let input = strip_final_line_break(read_input(matches));

    if matches.get_flag("stages") || config.output.show_stages {
        eprintln!("{}", format_trace(&trace(&input)));
    }

    let text = ReviewText::new(input);
    match config.output.format {
        OutputFormat::Text => println!("{}", text.processed()),
        OutputFormat::Json => println!("{}", to_json(&text)),
    }
}

/// Handle the stages command
fn handle_stages_command(matches: &ArgMatches, config: &ReviewConfig) {
    let outputs = trace(&strip_final_line_break(read_input(matches)));
    match config.output.format {
        OutputFormat::Text => println!("{}", format_trace(&outputs)),
        OutputFormat::Json => println!("{}", to_json(&outputs)),
    }
}

/// Handle the submit command
///
/// The review is stored exactly as read, so a trailing line break counts
/// towards the minimum length.
fn handle_submit_command(matches: &ArgMatches, config: &ReviewConfig) {
    let original = read_input(matches);
    let doctor_id = *matches
        .get_one::<u64>("doctor")
        .expect("doctor is required by the parser");
    let origin = origin_address(
        matches.get_one::<String>("forwarded-for").map(String::as_str),
        matches.get_one::<String>("remote-addr").map(String::as_str),
    );
    let user = matches.get_one::<String>("user").cloned();
    let gate = LengthGate::new(config.submission.min_length);

    let submission = Submission::accept(&gate, doctor_id, original, origin, user)
        .unwrap_or_else(|e| exit_with("Submission rejected", e));

    match config.output.format {
        OutputFormat::Text => {
            let summary = submission.summary();
            println!("{}  {}", summary.date, summary.text);
        }
        OutputFormat::Json => println!("{}", to_json(&submission)),
    }
}
