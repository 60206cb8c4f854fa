// Command-line interface for quizmark
//
// This binary converts quiz documents between quiz markdown and structured JSON, and lints
// markdown quizzes. All conversion logic lives in the quizmark-babel crate; this binary owns
// file I/O, configuration, logging and exit codes.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  quizmark <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  quizmark convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  quizmark check <input>...                                                   - Report every invalid question
//  quizmark --list-formats                                                     - List available formats
//
// Invalid questions abort the conversion unless `--on-invalid skip` (or `parse.on_invalid = "skip"`
// in quizmark.toml) is given, in which case they are reported and left out.
//
// Extra Parameters:
//
// Serializer parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the target format.
// Example:
//  quizmark quiz.md --to json --extra-indent 2

use clap::{Arg, ArgAction, Command, ValueHint};
use quizmark_babel::{BatchPolicy, FormatRegistry};
use quizmark_config::{Loader, QuizmarkConfig};
use std::collections::HashMap;
use std::fs;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SUBCOMMANDS: &[&str] = &["convert", "check", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        let Some(key) = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"))
        else {
            cleaned_args.push(arg.clone());
            continue;
        };

        let value = match iter.peek() {
            Some(next) if !next.starts_with('-') => iter.next().cloned().unwrap_or_default(),
            _ => "true".to_string(),
        };
        extra_params.insert(key.to_string(), value);
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("quizmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert quiz questions between markdown and JSON")
        .long_about(
            "quizmark converts quiz questions between an authoring markdown format and\n\
            structured JSON records.\n\n\
            Commands:\n  \
            - convert: Transform between formats (default)\n  \
            - check:   Report every invalid question in markdown quizzes\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quizmark quiz.md --to json                  # Convert to JSON (stdout)\n  \
            quizmark quiz.json --to markdown -o quiz.md # Convert JSON back to markdown\n  \
            quizmark quiz.md --to json --extra-indent 2 # Two-space JSON\n  \
            quizmark check week1.md week2.md            # Lint quizzes",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quizmark.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("on-invalid")
                .long("on-invalid")
                .value_name("POLICY")
                .help("What to do with invalid questions (overrides parse.on_invalid)")
                .value_parser(clap::builder::PossibleValuesParser::new(BatchPolicy::NAMES))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more details to stderr (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between quiz formats (default command)")
                .long_about(
                    "Convert quizzes between formats.\n\n\
                    Supported formats:\n  \
                    - markdown: Quiz markdown (.md, .markdown, .quiz)\n  \
                    - json:     Structured question records (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    quizmark convert quiz.md --to json               # Markdown to JSON (stdout)\n  \
                    quizmark convert quiz.json --to markdown -o q.md # JSON to markdown file\n  \
                    quizmark quiz.md --to json                       # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: markdown, json\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report every invalid question in markdown quizzes")
                .long_about(
                    "Validate quiz markdown files without converting them.\n\n\
                    Every question is checked, not only the first invalid one.\n\
                    Exits with status 1 if any question is invalid.\n\n\
                    Examples:\n  \
                    quizmark check quiz.md\n  \
                    quizmark check quizzes/*.md",
                )
                .arg(
                    Arg::new("inputs")
                        .help("Markdown files to check")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means the "convert" subcommand was omitted
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        matches.get_one::<String>("on-invalid").map(|s| s.as_str()),
    );

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match FormatRegistry::default().detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("check", sub_matches)) => {
            let inputs: Vec<&str> = sub_matches
                .get_many::<String>("inputs")
                .expect("inputs are required")
                .map(|s| s.as_str())
                .collect();
            if !handle_check_command(&inputs) {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Log filter used when `RUST_LOG` is not set.
fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &QuizmarkConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let policy = config.parse.on_invalid;
    let report = registry
        .parse_with_policy(&source, from, policy)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        });
    for err in &report.rejected {
        eprintln!("Skipped invalid question: {err}");
    }
    info!(
        input,
        from,
        to,
        %policy,
        questions = report.quiz.len(),
        skipped = report.rejected.len(),
        "parsed quiz"
    );

    let options = serializer_options(to, config, extra_params);
    let text = registry
        .serialize_with_options(&report.quiz, to, &options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
            info!(path, "wrote output");
        }
        None => print!("{text}"),
    }
}

/// Handle the check command. Returns whether every file was valid.
fn handle_check_command(inputs: &[&str]) -> bool {
    let registry = FormatRegistry::default();
    let mut all_valid = true;

    for input in inputs {
        let source = match fs::read_to_string(input) {
            Ok(source) => source,
            Err(e) => {
                println!("{input}: error reading file: {e}");
                all_valid = false;
                continue;
            }
        };

        match registry.parse_with_policy(&source, "markdown", BatchPolicy::Skip) {
            Ok(report) if report.is_clean() => {
                println!("{input}: ok ({} questions)", report.quiz.len());
            }
            Ok(report) => {
                all_valid = false;
                for err in &report.rejected {
                    println!("{input}: {err}");
                }
            }
            Err(e) => {
                all_valid = false;
                println!("{input}: {e}");
            }
        }
    }

    all_valid
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {name:<10} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>, on_invalid: Option<&str>) -> QuizmarkConfig {
    let loader = Loader::new().with_optional_file("quizmark.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match on_invalid {
        Some(policy) => loader.set_override("parse.on_invalid", policy),
        None => Ok(loader),
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Serializer parameters for the target format: configured defaults, then --extra-* overrides.
fn serializer_options(
    to: &str,
    config: &QuizmarkConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = if to == "json" {
        config.convert.json.to_params()
    } else {
        HashMap::new()
    };
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}
