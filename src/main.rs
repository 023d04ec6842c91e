use anyhow::{Context, Result};
use clap::Parser;
use evifuncqa_csv::cli::Cli;
use evifuncqa_csv::commands::run_convert;
use evifuncqa_csv::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = cli.convert_config();
    let summary = run_convert(&config)
        .with_context(|| format!("failed to convert {}", config.input.display()))?;

    println!(
        "Wrote {} rows to {}",
        summary.rows_written,
        summary.output.display()
    );
    Ok(())
}
