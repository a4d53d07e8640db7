//! Sensorscope - Hardware Sensor Measurement Binary
//!
//! A standalone binary for polling hardware sensors, collecting short time
//! series, and reporting them as statistics, charts, and JSON dumps.

use clap::{Args, Parser, Subcommand};
use sensorscope::report::chart::LINE_COLOR_GREEN;
use sensorscope::{
    persist, render_histogram, render_line_chart, FanReader, LineStyle, RecordingSession, Sampler,
    SamplerConfig, SensorReader, Statistics, ThermalReader, TimeAxis, DEFAULT_HISTOGRAM_BINS,
    DEFAULT_SAMPLE_COUNT,
};
use std::path::Path;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Fixed output artifact names.
const MEASUREMENTS_FILE: &str = "measurements.json";
const GRAPH_FILE: &str = "graph.png";
const RPM_GRAPH_FILE: &str = "rpm_graph.png";
const RPM_DISTRIBUTION_FILE: &str = "rpm_distribution.png";

#[derive(Parser)]
#[command(name = "sensorscope")]
#[command(about = "🌡️ Sensorscope - hardware sensor sampling and statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Austin Couch")]
#[command(long_about = "Polls temperature and fan sensors, collects fixed-interval series, \
and renders statistics, charts, and JSON dumps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print current temperature and fan readings (default)
    Temps,

    /// Record temperature mappings over time and dump them to JSON
    Record(SampleArgs),

    /// Sample one fan and render a time-descending line chart
    Chart(FanArgs),

    /// Sample one fan and report statistics, line chart, and histogram
    Analyze(FanArgs),
}

#[derive(Args)]
struct SampleArgs {
    /// Seconds between two polls
    #[arg(short, long, default_value_t = 2)]
    interval: u64,

    /// Number of polls in the run
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    count: u32,
}

#[derive(Args)]
struct FanArgs {
    #[command(flatten)]
    sample: SampleArgs,

    /// Fan to track (e.g. "fan1"); the first fan observed when omitted
    #[arg(short, long)]
    fan: Option<String>,
}

impl SampleArgs {
    fn to_config(&self) -> SamplerConfig {
        SamplerConfig::new(Duration::from_secs(self.interval), self.count)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    print_banner();

    match &cli.command {
        Some(Commands::Temps) | None => temps_command(),
        Some(Commands::Record(args)) => record_command(args).await,
        Some(Commands::Chart(args)) => chart_command(args).await,
        Some(Commands::Analyze(args)) => analyze_command(args).await,
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn print_banner() {
    println!("🌡️ Sensorscope - hardware sensor measurements");
    println!("   Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
}

/// Print the current state of every reachable sensor.
fn temps_command() -> anyhow::Result<()> {
    match ThermalReader::new().read() {
        Ok(readings) => {
            println!("Sensor temperatures:");
            for (name, value) in readings.iter() {
                println!("  {}: {:.1}°C", name, value);
            }
        }
        Err(err) => println!("{}", err),
    }

    println!();

    match FanReader::new().read() {
        Ok(readings) if readings.is_empty() => println!("No fan tachometers reported."),
        Ok(readings) => {
            println!("Fan speeds:");
            for (name, value) in readings.iter() {
                println!("  {}: {:.0} RPM", name, value);
            }
        }
        Err(err) => println!("{}", err),
    }

    Ok(())
}

/// Record full temperature mappings and dump the session to JSON.
async fn record_command(args: &SampleArgs) -> anyhow::Result<()> {
    let config = args.to_config();
    println!(
        "Recording {} temperature measurements at {}s intervals...",
        config.count, args.interval
    );

    let ticks = Sampler::new(ThermalReader::new(), config).collect_readings().await;
    println!("Recorded {} of {} ticks.", ticks.len(), args.count);

    let session = RecordingSession::new(args.interval as f64, ticks);
    persist(&session, Path::new(MEASUREMENTS_FILE));
    println!("Results written to {}.", MEASUREMENTS_FILE);

    Ok(())
}

/// Sample one fan and render the inverted-axis line chart.
async fn chart_command(args: &FanArgs) -> anyhow::Result<()> {
    let series = collect_fan_series(args).await;
    if series.is_empty() {
        println!("No fan data collected; nothing to plot.");
        return Ok(());
    }

    let label = args.fan.as_deref().unwrap_or("fan");
    let style = LineStyle {
        color: LINE_COLOR_GREEN,
        time_axis: TimeAxis::VerticalInverted,
    };
    render_line_chart(&series, label, style, Path::new(GRAPH_FILE))?;
    println!("Chart saved to {}.", GRAPH_FILE);

    Ok(())
}

/// Sample one fan, report statistics, and render both charts.
async fn analyze_command(args: &FanArgs) -> anyhow::Result<()> {
    let series = collect_fan_series(args).await;
    let Some(stats) = Statistics::from_series(&series) else {
        println!("No fan data collected; nothing to analyze.");
        return Ok(());
    };

    println!();
    println!("Samples collected: {}", stats.count);
    println!("Mean speed:        {:.2} RPM", stats.mean);
    println!("Std deviation:     {:.2} RPM", stats.std_dev);

    let label = args.fan.as_deref().unwrap_or("fan");
    render_line_chart(&series, label, LineStyle::default(), Path::new(RPM_GRAPH_FILE))?;
    println!("Line chart saved to {}.", RPM_GRAPH_FILE);

    render_histogram(
        &series.values(),
        DEFAULT_HISTOGRAM_BINS,
        label,
        Path::new(RPM_DISTRIBUTION_FILE),
    )?;
    println!("Histogram saved to {}.", RPM_DISTRIBUTION_FILE);

    Ok(())
}

async fn collect_fan_series(args: &FanArgs) -> sensorscope::Series {
    let config = args.sample.to_config().with_target(args.fan.clone());
    println!(
        "Collecting {} fan speed measurements at {}s intervals...",
        config.count, args.sample.interval
    );

    let reader = FanReader::new();
    info!("polling {} via the sensors utility", reader.source());
    Sampler::new(reader, config).collect().await
}
