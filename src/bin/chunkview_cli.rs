//! chunkview CLI - inspect how text splits into chunks
//!
//! # Examples
//!
//! ```bash
//! # Split a text file with the sentence-aware strategy
//! chunkview split notes.txt --strategy sentence-aware --chunk-size 100 --chunk-overlap 10
//!
//! # Count tokens in a file
//! chunkview count notes.txt
//!
//! # List strategies
//! chunkview strategies
//!
//! # JSON output for scripting
//! chunkview split notes.txt --format json
//! ```

use clap::Parser;
use chunkview::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Quiet by default; RUST_LOG=chunkview=debug enables engine traces
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chunkview=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
