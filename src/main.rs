extern crate clap;

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgMatches, Command};
use tracing::debug;

use pathlex::{Dialect, PathLexer, Verbatim};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = cli().get_matches();
    let (name, sub_matches) = matches
        .subcommand()
        .context("no subcommand given")?;

    let lexer = lexer_from(sub_matches)?;
    debug!(command = name, dialect = %lexer.dialect(), "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(paths) = sub_matches.values_of("paths") {
        for path in paths {
            writeln!(out, "{}", run(&lexer, name, path)?).context("failed to write output")?;
        }
    }

    Ok(())
}

fn cli() -> Command<'static> {
    let paths = Arg::new("paths")
        .help("Paths to process")
        .required(true)
        .multiple_values(true);

    let operations = [
        ("clean", "Print the shortest lexically equivalent path"),
        ("split", "Print the directory and file parts, separated by a tab"),
        ("base", "Print the last element"),
        ("dir", "Print all but the last element, cleaned"),
        ("ext", "Print the extension of the last element"),
        ("volume", "Print the leading volume name"),
        ("to-slash", "Replace separators with '/'"),
        ("from-slash", "Replace '/' with the separator"),
    ];

    let mut app = Command::new("pathlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lexical path manipulation for POSIX and Windows paths")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .short('d')
                .takes_value(true)
                .env("PATHLEX_DIALECT")
                .global(true)
                .help("Path syntax to use: posix or windows [default: host]"),
        )
        .arg(
            Arg::new("verbatim")
                .long("verbatim")
                .takes_value(true)
                .global(true)
                .help("Cleaning of \\\\?\\ paths: preserve or normalize [default: preserve]"),
        );

    for (name, about) in operations.iter() {
        app = app.subcommand(Command::new(*name).about(*about).arg(paths.clone()));
    }

    app
}

fn lexer_from(matches: &ArgMatches) -> Result<PathLexer> {
    let dialect = match matches.value_of("dialect") {
        Some(name) => name.parse::<Dialect>().context("invalid --dialect")?,
        None => Dialect::host(),
    };

    let verbatim = match matches.value_of("verbatim") {
        Some(name) => name.parse::<Verbatim>().context("invalid --verbatim")?,
        None => Verbatim::default(),
    };

    Ok(PathLexer::new(dialect).with_verbatim(verbatim))
}

fn run(lexer: &PathLexer, command: &str, path: &str) -> Result<String> {
    let result = match command {
        "clean" => lexer.clean(path),
        "split" => {
            let (dir, file) = lexer.split(path);
            format!("{}\t{}", dir, file)
        }
        "base" => lexer.base(path),
        "dir" => lexer.dir(path),
        "ext" => lexer.ext(path).to_owned(),
        "volume" => lexer.volume_name(path),
        "to-slash" => lexer.to_slash(path),
        "from-slash" => lexer.from_slash(path),
        other => bail!("unknown command {:?}", other),
    };

    Ok(result)
}

#[test]
fn test_cli_is_consistent() {
    cli().debug_assert();
}

#[test]
fn test_run_with_dialect_flag() {
    let matches = cli().get_matches_from(vec!["pathlex", "--dialect", "windows", "base", "C:"]);
    let (name, sub_matches) = matches.subcommand().unwrap();
    let lexer = lexer_from(sub_matches).unwrap();

    assert_eq!(lexer.dialect(), Dialect::Windows);
    assert_eq!(run(&lexer, name, "C:").unwrap(), "\\");
}

#[test]
fn test_run_split() {
    let lexer = PathLexer::POSIX;
    assert_eq!(run(&lexer, "split", "path/to/file.txt").unwrap(), "path/to/\tfile.txt");
    assert!(run(&lexer, "glob", "*").is_err());
}

#[test]
fn test_invalid_dialect_is_reported() {
    let matches = cli().get_matches_from(vec!["pathlex", "clean", "-d", "plan9", "a"]);
    let (_, sub_matches) = matches.subcommand().unwrap();
    assert!(lexer_from(sub_matches).is_err());
}
