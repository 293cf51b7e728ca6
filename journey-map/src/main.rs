use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use journey_map::filter::FilterConfig;
use journey_map::input::{load_export, parse_date, read_exclude_file};
#[cfg(not(feature = "parallel"))]
use journey_map::pipeline::process_journeys;
#[cfg(feature = "parallel")]
use journey_map::pipeline::process_journeys_parallel;
use journey_map::render::{GeoJsonBackend, RenderBackend, RenderStyle, Theme, build_render_plan};

#[derive(Parser, Debug)]
#[command(name = "journey-map")]
#[command(about = "Draw recorded train journeys as a styled GeoJSON map", long_about = None)]
struct Args {
    /// Travel-log raw data file
    #[arg(long, default_value = "data.json")]
    data: PathBuf,

    /// Output file for the rendered GeoJSON
    #[arg(long, default_value = "output.geojson")]
    output: PathBuf,

    /// Include journeys from this date, YYYY-MM-DD (optional)
    #[arg(long)]
    start: Option<String>,

    /// Include journeys until this date, YYYY-MM-DD (optional)
    #[arg(long)]
    end: Option<String>,

    /// File with station name substrings to exclude, one per line (optional)
    #[arg(long)]
    exclude: Option<PathBuf>,

    /// Render using a dark theme
    #[arg(long)]
    dark: bool,

    /// Hide the attribution string (may violate tile licenses if published)
    #[arg(long)]
    hide_attribution: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = FilterConfig::new()
        .with_start(parse_date(args.start.as_deref()).context("error parsing start date")?)
        .with_end(parse_date(args.end.as_deref()).context("error parsing end date")?)
        .with_excluded_stations(
            read_exclude_file(args.exclude.as_deref())
                .context("error reading stations exclude file")?,
        );

    let export = load_export(&args.data)?;
    #[cfg(not(feature = "parallel"))]
    let processed = process_journeys(&export.journeys, &config)?;
    #[cfg(feature = "parallel")]
    let processed = process_journeys_parallel(&export.journeys, &config)?;
    let plan = build_render_plan(&export.journeys, &processed);

    let style =
        RenderStyle::new(Theme::from_dark(args.dark)).with_hide_attribution(args.hide_attribution);

    let file = File::create(&args.output)
        .with_context(|| format!("error creating {}", args.output.display()))?;
    GeoJsonBackend::new(BufWriter::new(file))
        .render(&plan, &style)
        .context("error rendering map")?;

    info!(output = %args.output.display(), "done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{e:#}");
        std::process::exit(2);
    }
}
