// Command-line interface for quill
//
// This binary exposes the plain text conversion pipeline: authors' text in, the HTML fragment or
// the editor node tree out. It is a thin shell over the quill-babel library, which owns every
// conversion rule.
//
// Usage:
//  quill <input> [--to <format>] [--from <format>] [--output <file>]  - Convert (default command)
//  quill convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above
//  quill inspect <path> [<transform>]    - Execute a transform (defaults to "blocks-treeviz")
//  quill paste <input> [--into <doc.json>] [--at <selection>]  - Paste text into a node tree
//  quill count <input> [--min <words>]   - Count words and check the article minimum
//  quill --list-transforms               - List available transforms
//
// An input of "-" reads from stdin.
//
// Options:
//
// Any `--extra-<key> [value]` pair is removed before clap sees the arguments. Keys that match a
// config setting (heading-level, sanitize, pretty, show-linum) override it; the rest are handed to
// the format or transform untouched.
//  quill inspect article.txt lines-simple --extra-show-linum false

use quill_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use quill_babel::formats::nodes::{handle_paste, node_tree_to_json, Node, Schema, SchemaEditor};
use quill_babel::formats::text::ParseOptions;
use quill_babel::stats::validate_word_count;
use quill_babel::FormatRegistry;
use quill_config::{Loader, QuillConfig};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::ops::Range;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "paste", "count", "help"];

/// Exit status when the paste pipeline declines the clipboard content.
const EXIT_NOT_HANDLED: i32 = 2;

/// Split `--extra-<key> [value]` pairs out of the raw argument list.
///
/// A key not followed by a value is a flag and maps to "true". `--extras-` is
/// accepted as a spelling of the same prefix.
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert plain text articles to HTML and editor node trees")
        .long_about(
            "quill infers the structure of plain text articles (titles, paragraphs,\n\
            numbered and bulleted lists, bold spans) and renders it as an HTML fragment\n\
            or as the JSON node tree a rich text editor inserts on paste.\n\n\
            Commands:\n  \
            - convert: Render a text file (default command)\n  \
            - inspect: View intermediate stages (line kinds, blocks, events)\n  \
            - paste:   Insert text into an editor document, as a paste would\n  \
            - count:   Count words and check the article minimum\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            quill article.txt                          # HTML to stdout\n  \
            quill article.txt --to nodes -o doc.json   # Node tree to a file\n  \
            quill inspect article.txt lines-simple     # How each line was read\n  \
            quill paste clip.txt --into doc.json       # Paste at the end of doc.json",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a quill.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a text file (default command)")
                .long_about(
                    "Render a plain text article.\n\n\
                    Formats:\n  \
                    - html:    HTML fragment (default)\n  \
                    - nodes:   Editor node tree as JSON\n  \
                    - text:    Readable plain text view of the HTML\n  \
                    - treeviz: Tree of the inferred blocks\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(input_arg("input", "Input file path, or - for stdin"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("html")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the intermediate stages of a conversion")
                .arg(input_arg("path", "Path to the text file, or - for stdin"))
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'blocks-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("paste")
                .about("Paste text into an editor document")
                .long_about(
                    "Run the structured paste pipeline against an in-memory editor.\n\n\
                    Without --into the editor starts with one empty paragraph, which the\n\
                    paste replaces. With --into the document is loaded and validated first.\n\
                    --at selects top-level blocks: N places the caret before block N,\n\
                    N..M replaces blocks N to M. The default caret is the document end.\n\n\
                    Exits with status 2 when the paste is not handled (no text, or content\n\
                    the configured schema rejects); the document is left untouched.",
                )
                .arg(input_arg("input", "File holding the clipboard text, or - for stdin"))
                .arg(
                    Arg::new("into")
                        .long("into")
                        .value_name("DOC")
                        .help("Node tree JSON to paste into")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("at")
                        .long("at")
                        .value_name("SELECTION")
                        .help("Caret (N) or block range (N..M) to replace"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("count")
                .about("Count the words of an article and check the minimum")
                .arg(input_arg("input", "Article file (text or HTML), or - for stdin"))
                .arg(
                    Arg::new("min")
                        .long("min")
                        .help("Minimum number of words (defaults to the configured minimum)")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that is not a subcommand is the input of an implicit convert
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
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

    init_logging(matches.get_flag("verbose"), matches.get_flag("quiet"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &extra_params, &config),
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("paste", sub_matches)) => handle_paste_command(sub_matches, &config),
        Some(("count", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let minimum = sub_matches
                .get_one::<usize>("min")
                .copied()
                .unwrap_or(config.editor.min_word_count);
            handle_count_command(input, minimum, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with converted output.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read a file, or stdin when the path is "-".
fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => fs::write(path, data).unwrap_or_else(|e| {
            eprintln!("Error writing file '{path}': {e}");
            std::process::exit(1);
        }),
        None => print!("{data}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let source = read_input(path);
    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    sub_matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &QuillConfig,
) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let to = sub_matches.get_one::<String>("to").expect("to has a default");
    let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

    let registry = FormatRegistry::default();

    // Auto-detect --from if not provided; stdin is always plain text
    let from = match sub_matches.get_one::<String>("from") {
        Some(f) => f.to_string(),
        None if input == "-" => "text".to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };

    let source = read_input(input);

    let mut parse_options = HashMap::new();
    parse_options.insert(
        "heading-level".to_string(),
        config.convert.heading_level.to_string(),
    );
    let mut format_options = convert_params_from_config(config, to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .convert(&source, &from, to, &parse_options, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    write_output(output, &result);
}

/// Handle the paste command
fn handle_paste_command(sub_matches: &ArgMatches, config: &QuillConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

    let clipboard = read_input(input);
    let schema: Schema = (&config.paste).into();

    let mut editor = match sub_matches.get_one::<String>("into") {
        None => SchemaEditor::new(schema),
        Some(path) => {
            let json = read_input(path);
            let doc: Node = serde_json::from_str(&json).unwrap_or_else(|e| {
                eprintln!("Error: '{path}' is not a node tree: {e}");
                std::process::exit(1);
            });
            SchemaEditor::with_document(schema, doc).unwrap_or_else(|e| {
                eprintln!("Error: '{path}' does not fit the editor schema: {e}");
                std::process::exit(1);
            })
        }
    };

    if let Some(raw) = sub_matches.get_one::<String>("at") {
        let selection = parse_selection(raw).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        editor.select(selection);
    }

    let options: ParseOptions = (&config.convert).into();
    match handle_paste(&mut editor, Some(&clipboard), options) {
        Ok(summary) => {
            tracing::debug!(blocks = summary.blocks, "paste handled");
            let json = node_tree_to_json(editor.document(), config.convert.nodes.pretty)
                .unwrap_or_else(|e| {
                    eprintln!("Serialization error: {e}");
                    std::process::exit(1);
                });
            write_output(output, &json);
        }
        Err(reason) => {
            eprintln!("Paste not handled: {reason}");
            std::process::exit(EXIT_NOT_HANDLED);
        }
    }
}

/// Handle the count command
fn handle_count_command(input: &str, minimum: usize, config: &QuillConfig) {
    let registry = FormatRegistry::default();
    let source = read_input(input);

    let html = if registry.detect_format_from_filename(input).as_deref() == Some("html") {
        source
    } else {
        let mut parse_options = HashMap::new();
        parse_options.insert(
            "heading-level".to_string(),
            config.convert.heading_level.to_string(),
        );
        registry
            .parse_with_options(&source, "text", &parse_options)
            .and_then(|doc| {
                registry.serialize_with_options(
                    &doc,
                    "html",
                    &convert_params_from_config(config, "html"),
                )
            })
            .unwrap_or_else(|e| {
                eprintln!("Conversion error: {e}");
                std::process::exit(1);
            })
    };

    match validate_word_count(&html, minimum) {
        Ok(count) => println!("{count} / {minimum} words"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Inspect transforms (stage-format):");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
    println!();
    println!("  lines   one classification per input line");
    println!("  blocks  paragraphs, titles and lists after grouping");
    println!("  events  the stream both renderers consume");
    println!("  nodes   the editor node tree");

    println!("\nFormats (r = read, w = write):");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let Ok(format) = registry.get(&format_name) else {
            continue;
        };
        let modes = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "rw",
            (true, false) => "r ",
            (false, true) => " w",
            (false, false) => "  ",
        };
        println!("  {format_name:<8} {modes}  {}", format.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> QuillConfig {
    let loader = Loader::new().with_optional_file("quill.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut QuillConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("heading-level") {
        config.convert.heading_level = match raw.parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => level,
            _ => {
                eprintln!("Invalid heading level '{raw}' for --extra-heading-level, expected 1-6");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = extra_params.remove("sanitize") {
        config.convert.html.sanitize = parse_bool_arg("sanitize", &raw);
    }
    if let Some(raw) = extra_params.remove("pretty") {
        config.convert.nodes.pretty = parse_bool_arg("pretty", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["show-linum", "show-line-numbers"]) {
        config.inspect.show_line_numbers = parse_bool_arg("show-linum", &raw);
    }
}

fn build_inspect_params(
    config: &QuillConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "show-linum".to_string(),
        config.inspect.show_line_numbers.to_string(),
    );
    params.insert(
        "heading-level".to_string(),
        config.convert.heading_level.to_string(),
    );

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn convert_params_from_config(config: &QuillConfig, to: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    match to {
        "html" => {
            params.insert(
                "sanitize".to_string(),
                config.convert.html.sanitize.to_string(),
            );
        }
        "nodes" => {
            params.insert(
                "pretty".to_string(),
                config.convert.nodes.pretty.to_string(),
            );
        }
        _ => {}
    }
    params
}

/// `N` is a caret before block N, `N..M` a block range.
fn parse_selection(raw: &str) -> Result<Range<usize>, String> {
    let invalid = || format!("Invalid selection '{raw}', expected N or N..M");
    match raw.split_once("..") {
        Some((start, end)) => {
            let start = start.trim().parse::<usize>().map_err(|_| invalid())?;
            let end = end.trim().parse::<usize>().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            Ok(start..end)
        }
        None => {
            let caret = raw.trim().parse::<usize>().map_err(|_| invalid())?;
            Ok(caret..caret)
        }
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
