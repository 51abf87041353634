use anyhow::Result;
use clap::Parser;
use demora::{
    chart,
    cli::{Cli, OutputFormat},
    csv_output,
    histogram::{Domain, Histogram},
    json_output::JsonReport,
    loader, record, report, stats,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve the input paths from the explicit file list or a directory scan
fn input_paths(args: &Cli) -> Result<Vec<PathBuf>> {
    match (&args.dir, args.files.is_empty()) {
        (Some(dir), _) => Ok(loader::scan_dir(dir)?),
        (None, false) => Ok(args.files.clone()),
        (None, true) => {
            anyhow::bail!("No input files. Usage: demora FILE... or demora --dir DIR");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let domain = Domain::new(args.min, args.max)?;
    let paths = input_paths(&args)?;
    tracing::debug!(files = paths.len(), "loading result files");

    let records = loader::load_files(&paths)?;
    let successful = record::successful(&records);
    tracing::debug!(
        total = records.len(),
        successful = successful.len(),
        "filtered records"
    );

    let times: Vec<f64> = successful.iter().map(|r| r.time).collect();

    let mut hist = Histogram::new(domain);
    hist.record_all(times.iter().copied())?;

    let timing = if args.stats_extended {
        stats::summarize(&times)
    } else {
        None
    };

    match args.format {
        OutputFormat::Text => {
            print!(
                "{}",
                report::render_text(records.len(), successful.len(), &hist, timing.as_ref())
            );
        }
        OutputFormat::Json => {
            let json =
                JsonReport::build(records.len(), successful.len(), &hist, timing.as_ref())
                    .to_pretty()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            print!("{}", csv_output::to_csv(&hist));
        }
    }

    if let Some(path) = &args.chart {
        chart::render_bar_chart(&hist, path, "Result time distribution")
            .map_err(|e| anyhow::anyhow!("failed to render chart to {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "chart rendered");
    }

    Ok(())
}
