use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ifdef_filter::cli::Cli;
use ifdef_filter::config::expand_response_files;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    let argv0 = args.next().unwrap_or_else(|| "ifdef-filter".to_string());
    let expanded =
        expand_response_files(args).context("could not expand command-line arguments")?;
    let cli = Cli::parse_from(std::iter::once(argv0).chain(expanded));

    init_logging(cli.verbose);

    cli.run()?;
    Ok(())
}

/// Log to stderr only; stdout carries nothing but filtered lines.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
