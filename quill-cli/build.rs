use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

// Keep in sync with quill_cli::transforms::AVAILABLE_TRANSFORMS.
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "lines-simple",
    "blocks-json",
    "blocks-treeviz",
    "events-json",
    "nodes-json",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let path_arg = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .help(help)
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("quill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert plain text articles to HTML and editor node trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("verbose").long("verbose").short('v').action(ArgAction::SetTrue))
        .arg(Arg::new("quiet").long("quiet").short('q').action(ArgAction::SetTrue))
        .subcommand(
            Command::new("convert")
                .arg(path_arg("input", "Input file path"))
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(path_arg("path", "Path to the text file"))
                .arg(
                    Arg::new("transform")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        )),
                ),
        )
        .subcommand(
            Command::new("paste")
                .arg(path_arg("input", "File holding the clipboard text"))
                .arg(
                    Arg::new("into")
                        .long("into")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("at").long("at"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("count")
                .arg(path_arg("input", "Article file (text or HTML)"))
                .arg(Arg::new("min").long("min")),
        );

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = generate_to(shell, &mut cmd, "quill", &outdir)?;
        println!("cargo:warning={shell} completions written to {}", path.display());
    }

    Ok(())
}
