use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
};
use treescaffold::{
    errors::{FileOperation, IoError},
    preview, Report, Settings,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
enum CliError {
    #[error("No input provided. Use -f FILE or provide input via stdin.")]
    #[diagnostic(code(treescaffold::cli::no_input))]
    NoInput,

    #[error("No input provided")]
    #[diagnostic(
        code(treescaffold::cli::empty_input),
        help("The input is empty or contains only whitespace")
    )]
    EmptyInput,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] treescaffold::ScaffoldError),
}

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Input file containing folder structure (defaults to stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .default_value(".")
                .help("Output directory"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .default_value("auto")
                .help("Input format: tree, simple, yaml or auto"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be created without actually creating files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .help("Print the parsed structure as a tree and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("export")
                .long("export")
                .help("Print the parsed structure as YAML and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    init_logger(is_verbose);

    run(&matches, is_verbose).map_err(miette::Report::from)
}

fn init_logger(is_verbose: bool) {
    let level = if is_verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: &ArgMatches, is_verbose: bool) -> Result<(), CliError> {
    let content = read_input(args.get_one::<String>("file"))?;

    if content.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    let output = args
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let format = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or(treescaffold::notation::AUTO);

    let settings = Settings::default()
        .with_output(output)
        .with_dry_run(args.get_flag("dry-run"))
        .with_format(format)
        .map_err(treescaffold::ScaffoldError::from)?;

    let tree = treescaffold::parse(&content, settings.format)?;

    if args.get_flag("preview") {
        preview::preview_as_tree(&tree, &settings.output);
        return Ok(());
    }

    if args.get_flag("export") {
        print!("{}", treescaffold::export(&tree)?);
        return Ok(());
    }

    let report = treescaffold::generate(&tree, &settings)?;

    print_report(&report, settings.dry_run, is_verbose);

    Ok(())
}

fn read_input(file: Option<&String>) -> Result<String, CliError> {
    match file {
        Some(file) => fs::read_to_string(file)
            .map_err(|error| IoError::new(FileOperation::Read, file.into(), error).into()),
        None => {
            let mut stdin = io::stdin();

            if stdin.is_terminal() {
                return Err(CliError::NoInput);
            }

            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .map_err(|error| IoError::new(FileOperation::Read, PathBuf::from("<stdin>"), error))?;

            Ok(content)
        }
    }
}

fn print_report(report: &Report, dry_run: bool, is_verbose: bool) {
    if dry_run {
        println!("{}", "DRY RUN - No files were actually created".bold().yellow());
        println!();
    }

    if !report.created_directories.is_empty() {
        println!(
            "{} ({}):",
            "Created directories".bold(),
            report.created_directories.len()
        );
        for path in &report.created_directories {
            println!("  {} {}", "create".green(), path.display());
        }
        println!();
    }

    if !report.created_files.is_empty() {
        println!("{} ({}):", "Created files".bold(), report.created_files.len());
        for path in &report.created_files {
            println!("  {} {}", "create".green(), path.display());
        }
        println!();
    }

    if !report.skipped_items.is_empty() {
        println!("{} ({}):", "Skipped items".bold(), report.skipped_items.len());
        for item in &report.skipped_items {
            println!("  {} {}", "skip".yellow(), item);
        }
        println!();
    }

    if is_verbose {
        println!(
            "Total: {} directories, {} files",
            report.created_directories.len(),
            report.created_files.len()
        );
        if !report.skipped_items.is_empty() {
            println!("Skipped: {} items", report.skipped_items.len());
        }
    }
}
