use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizdeck_cli::Options;

#[derive(Parser)]
#[command(name = "quizdeck", about = "Interactive flashcard study tool", version)]
struct Cli {
    /// Load cards from this file before the first prompt
    #[arg(long, value_name = "FILE")]
    import_from: Option<PathBuf>,

    /// Save all cards to this file on exit
    #[arg(long, value_name = "FILE")]
    export_to: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // diagnostics go to stderr, the transcript owns stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    quizdeck_cli::run(Options {
        import_from: cli.import_from,
        export_to: cli.export_to,
    })
}
