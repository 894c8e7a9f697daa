use anyhow::Result;
use clap::Parser;
use evaluar::{
    analysis::{self, AnalysisOptions},
    cli::{Cli, OutputFormat},
    labels::LabelSet,
    loader, plots, report,
};
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

fn main() -> Result<()> {
    let args = Cli::parse();

    // Validate the benchmark rate before doing any work
    if let Some(rate) = args.null_mean {
        if !rate.is_finite() || rate <= 0.0 {
            anyhow::bail!(
                "Invalid value for --null-mean: {} (must be a positive rate)",
                rate
            );
        }
    }

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let labels = LabelSet::for_locale(args.locale);

    let records = loader::load_results(&args.input)?;

    let options = AnalysisOptions {
        null_mean: args.null_mean,
        extended: args.stats_extended,
    };
    let report = analysis::analyze(records, &options)?;

    match args.format {
        OutputFormat::Text => report::write_text(&report, &labels, &mut std::io::stdout())?,
        OutputFormat::Json => println!("{}", report::to_json(&report)?),
        OutputFormat::Csv => print!("{}", report::to_csv(&report)),
    }

    if !args.no_plots {
        let config = plots::PlotConfig {
            out_dir: args.out_dir.clone(),
            font_family: args
                .font_family
                .clone()
                .unwrap_or_else(|| labels.default_font.to_string()),
            labels: labels.clone(),
        };
        for path in plots::render_all(&report.records, &config)? {
            println!("{} {}", labels.chart_written, path.display());
        }
    }

    // Only remove the input once everything above has succeeded
    if args.cleanup {
        std::fs::remove_file(&args.input)?;
    }

    Ok(())
}
