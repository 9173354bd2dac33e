//! Command-line interface for scene files
//! Inspects `.scene` files: how they lex, how they parse and which language they are written in.
//!
//! Usage:
//!   scene inspect `<path>` [--format `<format>`] [--config `<file>`]  - Print the parse in a format
//!   scene detect `<path>`                                        - Print the detected locale
//!   scene check `<path>`                                         - Report diagnostics, exit 1 on errors
//!
//! Without `--config`, a `scene.toml` in the current directory is layered over the defaults when
//! present. `RUST_LOG=debug` shows what the pipeline is doing.

use clap::{Arg, ArgAction, ArgMatches, Command};
use imagineui::scene::config::{Loader, SceneConfig};
use imagineui::scene::formats::{FormatOptions, FormatRegistry};
use imagineui::scene::{detect_locale, SceneError, SceneProcessor};
use std::path::{Path, PathBuf};
use std::process;

const LOCAL_CONFIG: &str = "scene.toml";

fn main() {
    env_logger::init();

    let registry = FormatRegistry::with_defaults();
    let formats = registry.list_formats().join(", ");

    let matches = Command::new("scene")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting imagineui scene files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("inspect")
                .about("Parse a scene and print the result")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help(format!("Output format ({formats}), defaults to the configured one")),
                )
                .arg(
                    Arg::new("line-numbers")
                        .long("line-numbers")
                        .short('n')
                        .action(ArgAction::SetTrue)
                        .help("Prefix treeviz lines with source line numbers"),
                )
                .arg(config_arg())
                .arg(locale_arg()),
        )
        .subcommand(
            Command::new("detect")
                .about("Print the locale a scene is written in")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Report lex and parse errors")
                .arg(path_arg())
                .arg(config_arg())
                .arg(locale_arg()),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches, &registry),
        Some(("detect", detect_matches)) => handle_detect_command(detect_matches),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        _ => unreachable!(),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the scene file")
        .required(true)
        .index(1)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults")
}

fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .short('l')
        .help("Parse with this locale (ru_RU, en_US) instead of detecting it")
}

fn read_source(path: &str) -> Result<String, SceneError> {
    std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: PathBuf::from(path),
        source,
    })
}

/// Defaults, then the config file, then flags
fn load_config(matches: &ArgMatches) -> Result<SceneConfig, SceneError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(Path::new(LOCAL_CONFIG)),
    };
    if let Some(locale) = matches.get_one::<String>("locale") {
        loader = loader.set_override("parsing.locale", locale.as_str())?;
    }
    if let Ok(Some(format)) = matches.try_get_one::<String>("format") {
        loader = loader.set_override("inspect.format", format.as_str())?;
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("line-numbers") {
        loader = loader.set_override("inspect.show_line_numbers", true)?;
    }
    loader.build()
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches, registry: &FormatRegistry) -> Result<(), SceneError> {
    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(matches)?;
    let source = read_source(path)?;

    let result = SceneProcessor::new(config.parsing).parse(&source);
    for line in result.diagnostics() {
        eprintln!("{}: {}", path, line);
    }

    let options = FormatOptions::from(&config.inspect);
    let output = registry.serialize(&result, config.inspect.format.name(), &options)?;
    print!("{}", output);
    Ok(())
}

/// Handle the detect command
fn handle_detect_command(matches: &ArgMatches) -> Result<(), SceneError> {
    let path = matches.get_one::<String>("path").unwrap();
    let source = read_source(path)?;
    match detect_locale(&source) {
        Some(locale) => println!("{}", locale),
        None => {
            eprintln!("{}: no page keyword found, cannot detect the locale", path);
            process::exit(1);
        }
    }
    Ok(())
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> Result<(), SceneError> {
    let path = matches.get_one::<String>("path").unwrap();
    let config = load_config(matches)?;
    let source = read_source(path)?;

    let result = SceneProcessor::new(config.parsing).parse(&source);
    let diagnostics = result.diagnostics();
    if diagnostics.is_empty() {
        let locale = result.locale().map(|locale| locale.to_string()).unwrap_or_default();
        println!("{}: ok ({})", path, locale);
        return Ok(());
    }
    for line in &diagnostics {
        eprintln!("{}: {}", path, line);
    }
    process::exit(1);
}
