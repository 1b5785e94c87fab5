//! Thin binary: set up logging, hand off to `cli::run()`, and own the exit status.

use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
