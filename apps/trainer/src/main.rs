//! Interactive flashcard trainer.

mod args;
mod console;
mod shell;
mod storage;

use args::Cli;
use clap::Parser;
use console::Console;
use shell::Shell;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never mix with the session on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let normalized = args::normalize(std::env::args());
    let cli = Cli::parse_from(&normalized.args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Console::new(stdin.lock(), stdout.lock()));

    // Warnings and startup imports come out in command-line order.
    let mut warnings = normalized.warnings.iter().peekable();
    for (loaded, path) in cli.import.iter().enumerate() {
        while let Some(warning) = warnings.next_if(|w| w.imports_before <= loaded) {
            report(&mut shell, warning)?;
        }
        shell.preload(path)?;
    }
    for warning in warnings {
        report(&mut shell, warning)?;
    }
    if let Some(path) = cli.export {
        tracing::info!(path = %path.display(), "cards will be exported on exit");
        shell.set_export_on_exit(path);
    }

    shell.run()?;
    Ok(())
}

fn report<R: io::BufRead, W: io::Write>(
    shell: &mut Shell<R, W>,
    warning: &args::Warning,
) -> io::Result<()> {
    tracing::warn!("{}", warning.message);
    shell.notice("ERROR: Invalid argument. Program may not run as expected.")
}
