use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use tomboy::api::ExportApi;
use tomboy::source::fs::FileSource;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::print;
use cli::setup::{normalize_args, Cli};

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries nothing but the export.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    info!("Output path: {}", config.out_path.display());
    info!("Save revisions: {}", config.revisions);

    let api = ExportApi::new(FileSource::new(), config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if api.config().list_paths {
        let result = api.note_paths()?;
        print::write_paths(&mut out, &result.note_paths)?;
    } else {
        let result = api.convert()?;
        print::write_notes(&mut out, &result.notes)?;
    }

    out.flush()?;
    Ok(())
}
