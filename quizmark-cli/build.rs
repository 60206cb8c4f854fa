use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const FORMATS: &[&str] = &["markdown", "json"];
const POLICIES: &[&str] = &["abort", "skip"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quizmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert quiz questions between markdown and JSON")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a quizmark.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("on-invalid")
                .long("on-invalid")
                .help("What to do with invalid questions")
                .value_parser(clap::builder::PossibleValuesParser::new(POLICIES)),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between quiz formats")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report every invalid question in markdown quizzes")
                .arg(
                    Arg::new("inputs")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        );

    generate_to(Bash, &mut cmd, "quizmark", &outdir)?;
    generate_to(Zsh, &mut cmd, "quizmark", &outdir)?;
    generate_to(Fish, &mut cmd, "quizmark", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
