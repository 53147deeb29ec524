use std::env;
use std::path::PathBuf;

use airhr_platform::SystemClipboard;
use tracing::info;

use crate::error::CliError;

mod config;
mod error;
mod logging;
mod store;
mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        return launch(None);
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("airhr {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "run" => launch(parse_config_arg(&args[1..])?),
        "--config" => launch(parse_config_arg(&args)?),
        _ => {
            print_help();
            Err(CliError::Usage(format!("unknown command: {command}")))
        }
    }
}

fn parse_config_arg(args: &[String]) -> Result<Option<PathBuf>, CliError> {
    let mut config = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err(CliError::Usage("--config requires a path".to_string()));
                };
                config = Some(PathBuf::from(value));
                i += 2;
            }
            other => {
                return Err(CliError::Usage(format!("unsupported argument: {other}")));
            }
        }
    }
    Ok(config)
}

fn launch(config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = config::load(config_path.as_deref())?;
    let log_path = logging::init(config.shell.log_level.as_deref())?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        share_url = %config.shell.share_url,
        "starting airhr"
    );
    ui::run(&config, &SystemClipboard)
}

fn print_help() {
    println!(
        "airhr {}\n\nUSAGE:\n  airhr [run] [--config <path>]\n  airhr --help\n  airhr --version\n\nKEYS:\n  Enter        launch from the landing screen\n  h            show or hide chat history\n  s            open the share panel (c copies the URL, Esc closes)\n  d            open the disclaimer (Enter or Esc closes)\n  q, Ctrl-C    quit\n\nLogs are written to {} (filter with {}).",
        env!("CARGO_PKG_VERSION"),
        logging::log_path().display(),
        logging::LOG_ENV,
    );
}
