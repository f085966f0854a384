//! Command-line interface for pddl-reader
//! Reads PDDL domain/problem files and prints their nested list structure.
//!
//! Usage:
//!   pddl-reader `<domain>` [`<problem>`] [--format `<format>`]   - Parse and print files
//!   pddl-reader `<path>` --tokens                            - Print the token stream
//!   pddl-reader --list-formats                             - List output formats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::debug;
use pddl_reader::pddl::config::{ConfigError, Loader, ReaderConfig};
use pddl_reader::pddl::formats::FormatRegistry;
use pddl_reader::pddl::lexing::tokenize;
use pddl_reader::pddl::loader::{load_file, LoadError, PddlKind};

fn main() {
    env_logger::init();

    let matches = Command::new("pddl-reader")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads PDDL domain and problem files into nested lists")
        .arg_required_else_help(true)
        .arg(
            Arg::new("domain")
                .help("Path to the domain file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("problem")
                .help("Path to the problem file")
                .index(2),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (sexpr, json, yaml, treeviz); defaults to the config value"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Reject lists nested deeper than this (0 disables the limit)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream instead of the parsed structure")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    debug!("effective configuration: {:?}", config);

    let mut inputs = Vec::new();
    if let Some(domain) = matches.get_one::<String>("domain") {
        inputs.push((PddlKind::Domain, domain.as_str()));
    }
    if let Some(problem) = matches.get_one::<String>("problem") {
        inputs.push((PddlKind::Problem, problem.as_str()));
    }

    for (kind, path) in inputs {
        if matches.get_flag("tokens") {
            handle_tokens_command(kind, path);
        } else {
            handle_parse_command(kind, path, &config);
        }
    }
}

/// Layer the config file and CLI flags over the built-in defaults
fn load_config(matches: &ArgMatches) -> Result<ReaderConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(max_depth) = matches.get_one::<u32>("max-depth") {
        loader = loader.set_override("parser.max_depth", i64::from(*max_depth))?;
    }
    loader.build()
}

/// Parse one file and print it in the configured format
fn handle_parse_command(kind: PddlKind, path: &str, config: &ReaderConfig) {
    let options = config.parser.parse_options();
    let file = load_file(kind, path, &options).unwrap_or_else(|e| {
        report_load_error(&e);
        std::process::exit(1);
    });

    let output = FormatRegistry::global()
        .serialize(&file.items, &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            eprintln!(
                "Available formats: {}",
                FormatRegistry::global().list_formats().join(", ")
            );
            std::process::exit(1);
        });

    print!("{}", output);
}

/// Print the token stream of one file, one token per line
fn handle_tokens_command(kind: PddlKind, path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {} file {}: {}", kind, path, e);
        std::process::exit(1);
    });

    let tokens = tokenize(&source);
    debug!("{} file {} has {} tokens", kind, path, tokens.len());
    for token in tokens {
        println!("{}", token);
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::global();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}

fn report_load_error(err: &LoadError) {
    eprintln!("Error: {}", err);
    if let Some(position) = err.parse_error().and_then(|e| e.position()) {
        eprintln!(
            "  --> {}:{}:{}",
            err.path().display(),
            position.line + 1,
            position.column + 1
        );
    }
}
