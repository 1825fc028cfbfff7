// File: crates/pump-demo/src/main.rs
// Summary: Renders launch statistics (or a plain points CSV) as an area chart to SVG, optionally PNG.

mod load;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pump_chart::{theme, AreaChart, Color, DataPoint};
use pump_chart_skia::{RenderOptions, SkiaRenderer};
use pump_stats::{stats_points, template_points, DateRange, Metric};

#[derive(Debug, Parser)]
#[command(name = "pump-demo")]
#[command(about = "Render launch statistics as an area chart")]
struct App {
    #[command(subcommand)]
    command: Commands,
    #[command(flatten)]
    render: RenderArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Chart per-day counts or profit from stats/history JSON
    Stats {
        /// Stats summary JSON (total, byTemplate, byDay)
        #[arg(long)]
        summary: PathBuf,
        /// History JSON; needed for the profit metric
        #[arg(long)]
        history: Option<PathBuf>,
        /// Metric to plot: count or profit
        #[arg(long, default_value = "count")]
        metric: Metric,
        /// Date range: 7d, 30d or all
        #[arg(long, default_value = "all")]
        range: DateRange,
        /// Plot per-template counts instead of per-day values
        #[arg(long)]
        by_template: bool,
    },
    /// Chart a label,value CSV file
    Points {
        #[arg(long)]
        csv: PathBuf,
    },
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Logical canvas height
    #[arg(long, global = true, default_value_t = pump_chart::types::HEIGHT)]
    height: f64,
    /// Color preset: violet, emerald, amber, slate
    #[arg(long, global = true, default_value = "violet")]
    theme: String,
    /// Line/marker color override (CSS color)
    #[arg(long, global = true)]
    stroke: Option<Color>,
    /// Area fill override (CSS color)
    #[arg(long, global = true)]
    fill: Option<Color>,
    /// SVG output path
    #[arg(long, global = true, default_value = "target/out/chart.svg")]
    out: PathBuf,
    /// Also rasterize to PNG next to the SVG
    #[arg(long, global = true)]
    png: bool,
    /// Device pixels per logical unit for PNG output
    #[arg(long, global = true, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let app = App::parse();
    let points = match &app.command {
        Commands::Stats { summary, history, metric, range, by_template } => {
            load_stats_points(summary, history.as_deref(), *metric, *range, *by_template)?
        }
        Commands::Points { csv } => {
            let points = load::load_points_csv(csv)
                .with_context(|| format!("failed to load CSV '{}'", csv.display()))?;
            tracing::info!(count = points.len(), path = %csv.display(), "loaded points");
            points
        }
    };

    render(points, &app.render)
}

fn load_stats_points(
    summary: &Path,
    history: Option<&Path>,
    metric: Metric,
    range: DateRange,
    by_template: bool,
) -> Result<Vec<DataPoint>> {
    let summary = load::load_summary(summary)?;
    tracing::info!(total = summary.total, templates = summary.by_template.len(), "loaded stats summary");

    if by_template {
        return Ok(template_points(&summary));
    }

    let history = match history {
        Some(path) => load::load_history(path)?,
        None => {
            if metric == Metric::Profit {
                tracing::warn!("profit metric without --history; every day will read 0");
            }
            Vec::new()
        }
    };
    tracing::info!(items = history.len(), %metric, %range, "building per-day series");
    Ok(stats_points(&summary, &history, range, metric))
}

fn render(points: Vec<DataPoint>, args: &RenderArgs) -> Result<()> {
    if points.is_empty() {
        tracing::warn!("no points to plot; output will be an empty canvas");
    }

    let mut chart = AreaChart::new(points)
        .with_height(args.height)
        .with_theme(theme::find(&args.theme));
    if let Some(stroke) = args.stroke {
        chart = chart.with_stroke(stroke);
    }
    if let Some(fill) = args.fill {
        chart = chart.with_fill(fill);
    }

    chart
        .render_to_svg(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(path = %args.out.display(), points = chart.points.len(), "wrote svg");

    if args.png {
        let drawing = chart.render();
        let out_png = args.out.with_extension("png");
        let opts = RenderOptions { scale: args.scale, ..RenderOptions::default() };
        SkiaRenderer::new().render_to_png(&drawing, &opts, &out_png)?;
        tracing::info!(path = %out_png.display(), "wrote png");
    }
    Ok(())
}
