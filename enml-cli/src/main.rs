// Command-line interface for enml
//
// Converts note bodies between ENML, plain text and Markdown, and exposes the
// service-side helpers: JSON conversion requests, strict ENML checks and the
// effective configuration.
//
// Usage:
//  enml <input> --to <format> [--from <format>] [-o <file>]  - Convert between formats (default)
//  enml convert <input> --to <format> ...                     - Same as above (explicit)
//  enml request [<path>]                                      - Run a JSON conversion request
//  enml check <input>                                         - Check that <input> is valid ENML
//  enml config                                                - Print the effective configuration
//  enml --list-formats                                        - List available formats
//
// An input of "-" reads stdin. The source format is detected from the file
// extension unless --from is given.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// Keys the configuration knows about (checked-todos) update the configuration, the
// rest are passed to the target format, which rejects keys it does not support.
// Example:
//  enml note.enml --to markdown --extra-checked-todos

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use enml_babel::convert::check_title;
use enml_babel::formats::MarkdownFormat;
use enml_babel::FormatRegistry;
use enml_cli::extras::{parse_bool_arg, parse_extra_args, take_override};
use enml_cli::input::{read_input, write_output, STDIN};
use enml_config::{EnmlConfig, LoadError, Loader};
use enml_service::envelope::to_pretty_json;
use enml_service::validate::validate_enml;
use enml_service::{handle_error, redact_sensitive, respond, ServiceError, SuccessEnvelope};
use std::collections::HashMap;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SUBCOMMANDS: &[&str] = &["convert", "request", "check", "config", "help"];

fn build_cli() -> Command {
    Command::new("enml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert note bodies between ENML, plain text and Markdown")
        .long_about(
            "enml converts note bodies stored as ENML into plain text or Markdown,\n\
            and builds ENML bodies from plain text.\n\n\
            Commands:\n  \
            - convert: Transform between formats (enml, text, markdown)\n  \
            - request: Run a JSON conversion request and print the response envelope\n  \
            - check:   Strictly check that a document is well-formed ENML\n  \
            - config:  Print the effective configuration\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            enml note.enml --to text                      # Plain text (stdout)\n  \
            enml note.enml --to markdown -o note.md       # Markdown file\n  \
            enml - --from text --to enml < draft.txt      # Build ENML from stdin\n  \
            enml note.enml --to markdown --extra-checked-todos",
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
                .help("Path to an enml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert documents between formats.\n\n\
                    Supported formats:\n  \
                    - enml:     ENML note markup (.enml, .xml)\n  \
                    - text:     Plain text (.txt)\n  \
                    - markdown: Markdown (.md), output only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\
                    With --json the result is wrapped in a response envelope.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
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
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Note title, rendered as a heading in Markdown output"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a success/error envelope instead of the raw output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("request")
                .about("Run a JSON conversion request")
                .long_about(
                    "Reads a request such as\n\n  \
                    {\"operation\": \"markup_to_text\", \"input\": \"<en-note>...</en-note>\"}\n\n\
                    and prints the response envelope. Operations: markup_to_text,\n\
                    markup_to_markdown, text_to_markup. Exits with 1 when the\n\
                    response reports a failure.",
                )
                .arg(
                    Arg::new("input")
                        .help("Request file path (defaults to stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a document is well-formed ENML")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("config").about("Print the effective configuration (token redacted)"),
        )
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enml=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// `enml note.enml --to text` has no subcommand; retry it as `convert`.
fn should_inject_convert(args: &[String]) -> bool {
    match args.get(1) {
        Some(first) => {
            (first == STDIN || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
        }
        None => false,
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_convert(&cleaned_args) {
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

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(String::as_str));
    if let Err(message) = apply_config_overrides(&mut config, &mut extra_params) {
        eprintln!("{message}");
        process::exit(1);
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let args = ConvertArgs::from_matches(sub_matches);
            handle_convert_command(&args, &extra_params, &config);
        }
        Some(("request", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .map(String::as_str)
                .unwrap_or(STDIN);
            handle_request_command(input);
        }
        Some(("check", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_check_command(input);
        }
        Some(("config", _)) => handle_config_command(&config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            process::exit(1);
        }
    }
}

struct ConvertArgs<'a> {
    input: &'a str,
    from: Option<&'a str>,
    to: &'a str,
    output: Option<&'a str>,
    title: Option<&'a str>,
    json: bool,
}

impl<'a> ConvertArgs<'a> {
    fn from_matches(matches: &'a ArgMatches) -> Self {
        ConvertArgs {
            input: matches
                .get_one::<String>("input")
                .expect("input is required"),
            from: matches.get_one::<String>("from").map(String::as_str),
            to: matches.get_one::<String>("to").expect("to is required"),
            output: matches.get_one::<String>("output").map(String::as_str),
            title: matches.get_one::<String>("title").map(String::as_str),
            json: matches.get_flag("json"),
        }
    }

    /// Envelope field for `--json` output, matching the request operations.
    fn result_field(&self) -> &'static str {
        if self.to == "text" {
            "text"
        } else {
            "content"
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    args: &ConvertArgs<'_>,
    extra_params: &HashMap<String, String>,
    config: &EnmlConfig,
) {
    let result = run_convert(args, extra_params, config);

    let (rendered, failed) = if args.json {
        let response = match &result {
            Ok(output) => SuccessEnvelope::new(args.result_field(), output.as_str()).to_json(),
            Err(err) => handle_error(err).to_json(),
        };
        (to_pretty_json(&response), result.is_err())
    } else {
        match result {
            Ok(output) => (output, false),
            Err(err) => {
                eprintln!("Error: {}", redact_sensitive(&err.to_string()));
                process::exit(1);
            }
        }
    };

    if let Err(e) = write_output(args.output, &rendered) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
    if failed {
        process::exit(1);
    }
}

fn run_convert(
    args: &ConvertArgs<'_>,
    extra_params: &HashMap<String, String>,
    config: &EnmlConfig,
) -> Result<String, ServiceError> {
    let registry = registry_from_config(config);

    let from = match args.from {
        Some(from) => from.to_string(),
        None => registry
            .detect_format_from_filename(args.input)
            .ok_or_else(|| {
                ServiceError::Other(format!(
                    "Could not detect format from filename '{}'. Please specify --from explicitly",
                    args.input
                ))
            })?,
    };

    registry.get(&from)?;
    registry.get(args.to)?;
    if let Some(title) = args.title {
        check_title(title)?;
    }

    let source = read_input(args.input)
        .map_err(|e| ServiceError::Other(format!("Error reading '{}': {e}", args.input)))?;
    tracing::debug!(from = %from, to = args.to, bytes = source.len(), "converting");

    let doc = registry
        .parse(&source, &from)?
        .with_title(args.title.map(str::to_string));

    Ok(registry.serialize_with_options(&doc, args.to, extra_params)?)
}

/// The default formats, with Markdown configured from `[convert.markdown]`.
fn registry_from_config(config: &EnmlConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new((&config.convert.markdown).into()));
    registry
}

/// Handle the request command
fn handle_request_command(input: &str) {
    let json = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        process::exit(1);
    });

    let response = respond(&json);
    println!("{}", to_pretty_json(&response));
    if response["success"] != serde_json::Value::Bool(true) {
        process::exit(1);
    }
}

/// Handle the check command
fn handle_check_command(input: &str) {
    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        process::exit(1);
    });

    match validate_enml(&source) {
        Ok(()) => println!("ok"),
        Err(err) => {
            eprintln!("{}", redact_sensitive(&err.to_string()));
            process::exit(1);
        }
    }
}

/// Handle the config command
fn handle_config_command(config: &EnmlConfig) {
    if let Err(err) = config.service.credentials() {
        tracing::warn!("{err}");
    }
    match serde_json::to_string_pretty(config) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => {
            eprintln!("Failed to render configuration: {err}");
            process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let mut directions = Vec::new();
        if format.supports_parsing() {
            directions.push("from");
        }
        if format.supports_serialization() {
            directions.push("to");
        }
        println!(
            "  {:<10} {:<16} [{}]  {}",
            name,
            format.file_extensions().join(", "),
            directions.join("/"),
            format.description()
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> EnmlConfig {
    let loader = Loader::new().with_optional_file("enml.toml");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    loader
        .with_env()
        .and_then(|loader| loader.build().map_err(LoadError::from))
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            process::exit(1);
        })
}

fn apply_config_overrides(
    config: &mut EnmlConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), String> {
    if let Some(raw) = take_override(extra_params, &["checked-todos", "checked_todos"]) {
        config.convert.markdown.checked_todos = parse_bool_arg("checked-todos", &raw)?;
    }
    Ok(())
}
