use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use appid_lib::{list_apps, Column, ExtractError, OutputRequest};

fn attributes_help() -> String {
    let mut help = String::from("App Store attributes available:\n");
    for column in Column::ALL {
        help.push_str(&format!("   {} - {}\n", column.code(), column.description()));
    }
    help.push_str(
        "\nExample usage:\n   \
         Display current apps: appid \"~/Music/iTunes/Mobile Applications\"\n   \
         Display only iOS name and ID, sorted by ID: appid -c s,i -s i PATH",
    );
    help
}

/// List information about the iOS App Store .ipa files located in PATH.
///
/// Output is tab separated, with columns a,s,i unless --columns is given.
#[derive(Parser)]
#[command(name = "appid", version, after_help = attributes_help())]
struct Cli {
    /// Directory containing .ipa files
    path: PathBuf,

    /// Comma separated list of attributes to display
    #[arg(short, long, value_name = "COLUMNS")]
    columns: Option<String>,

    /// Sort by specified attribute
    #[arg(short, long, value_name = "ATTRIBUTE")]
    sort: Option<String>,

    /// Save output to specified file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Ignore problematic .ipa files instead of stopping
    #[arg(short, long)]
    ignore: bool,

    /// Text encoding of the output (WHATWG label)
    #[arg(short, long, value_name = "ENCODING")]
    encoding: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            match err.downcast_ref::<ExtractError>() {
                Some(ExtractError::Configuration(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let request = OutputRequest::from_options(
        cli.path,
        cli.columns.as_deref(),
        cli.sort.as_deref(),
        cli.output,
        cli.ignore,
        cli.encoding.as_deref(),
    )?;

    let report = list_apps(&request)?;
    log::info!(
        "{} row(s) from {} archive(s), {} skipped",
        report.records_written,
        report.archives_found,
        report.skipped.len()
    );
    Ok(())
}
