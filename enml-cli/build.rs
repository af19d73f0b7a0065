use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by FormatRegistry::default().
// Build scripts can't depend on the crates they build alongside.
const AVAILABLE_FORMATS: &[&str] = &["enml", "markdown", "text"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let formats = clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS);

    let mut cmd = Command::new("enml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert note bodies between ENML, plain text and Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an enml.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .arg(input_arg().required(true))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(formats.clone()),
                )
                .arg(Arg::new("to").long("to").required(true).value_parser(formats))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("title").long("title"))
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("request")
                .about("Run a JSON conversion request")
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Check that a document is well-formed ENML")
                .arg(input_arg().required(true)),
        )
        .subcommand(Command::new("config").about("Print the effective configuration"));

    generate_to(Bash, &mut cmd, "enml", &outdir)?;
    generate_to(Zsh, &mut cmd, "enml", &outdir)?;
    generate_to(Fish, &mut cmd, "enml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
