//! Hourglass CLI
//!
//! Command-line host for the Tracked Hours dashboard:
//! - Show the hourly summary and the 5-minute breakdown
//! - Inspect the per-app tooltip of a bucket
//! - Classify an offline (empty) slot
//! - Generate a default config file

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use hourglass::clock::parse_clock_string;
use hourglass::config::{generate_default_config, Config, LoggingConfig};
use hourglass::dashboard::Dashboard;
use hourglass::selector::{ClassificationLabel, Handle};
use hourglass::usage::{
    format_duration, FixtureUsageProvider, MockUsageProvider, UsageBucket, UsageProvider,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "hourglass")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tracked hours dashboard with offline time classification")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/hourglass/config.toml or ./hourglass.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Seed for generated interval data
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON usage fixture to display instead of generated data
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the hourly summary
    Hourly,

    /// Show the 5-minute interval breakdown
    Intervals {
        /// Only list slots with no recorded activity
        #[arg(long)]
        empty_only: bool,
    },

    /// Show the apps behind one category of a bucket
    Apps {
        /// Bucket time ("10:05", or "10AM" with --hourly)
        time: String,
        /// Category (productive, neutral, unproductive)
        label: ClassificationLabel,
        /// Look the bucket up in the hourly summary
        #[arg(long)]
        hourly: bool,
    },

    /// Classify an empty interval slot
    Classify {
        /// Slot time, e.g. "12:30"
        slot: String,
        /// Category (productive, neutral, unproductive)
        #[arg(short, long, default_value = "productive")]
        label: ClassificationLabel,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Move the start handle to this time
        #[arg(long)]
        start: Option<String>,
        /// Move the end handle to this time
        #[arg(long)]
        end: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format: {} (expected table or json)", other),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }
    if let Some(seed) = cli.seed {
        config.data.seed = Some(seed);
    }
    if let Some(fixture) = &cli.fixture {
        config.data.fixture = Some(fixture.to_string_lossy().to_string());
    }

    init_logging(&config.logging);
    let format = OutputFormat::parse(&config.output.format)?;

    let load_dashboard = || -> anyhow::Result<Dashboard> {
        let provider = build_provider(&config)?;
        Ok(Dashboard::load(provider.as_ref())?)
    };

    match cli.command {
        Commands::Hourly => {
            let dashboard = load_dashboard()?;
            print_buckets(dashboard.hourly().iter(), format)?;
        }

        Commands::Intervals { empty_only } => {
            let dashboard = load_dashboard()?;
            if empty_only {
                print_buckets(dashboard.empty_slots(), format)?;
            } else {
                print_buckets(dashboard.intervals().iter(), format)?;
            }
        }

        Commands::Apps {
            time,
            label,
            hourly,
        } => {
            let dashboard = load_dashboard()?;
            let bucket = if hourly {
                dashboard.find_hourly(&time)
            } else {
                dashboard.find_interval(&time)
            };
            let Some(bucket) = bucket else {
                bail!("No bucket at {}", time);
            };

            let apps = bucket.apps_for(label);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(apps)?),
                OutputFormat::Table => {
                    println!("{} Apps ({})", label, bucket.time);
                    for app in apps {
                        println!("  {:<20} {}", app.app, format_duration(app.duration));
                    }
                }
            }
        }

        Commands::Classify {
            slot,
            label,
            description,
            start,
            end,
        } => {
            let mut dashboard = load_dashboard()?;
            if !dashboard.click_interval(&slot)? {
                bail!("Slot {} has recorded activity and cannot be classified", slot);
            }

            let start = start.as_deref().map(parse_clock_string).transpose()?;
            let end = end.as_deref().map(parse_clock_string).transpose()?;
            drag_handles(&mut dashboard, start, end)?;

            let selector = dashboard.selector_mut();
            selector.set_label(label)?;
            selector.set_description(description)?;

            let request = dashboard.save()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&request)?),
                OutputFormat::Table => println!(
                    "Classified {} - {} as {}{}",
                    request.result.adjusted_time_range.start,
                    request.result.adjusted_time_range.end,
                    request.result.label,
                    if request.result.description.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", request.result.description)
                    }
                ),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hourglass={}", logging.level)));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_provider(config: &Config) -> anyhow::Result<Box<dyn UsageProvider>> {
    if let Some(path) = &config.data.fixture {
        let path = PathBuf::from(path);
        return Ok(Box::new(FixtureUsageProvider::from_json_file(&path)?));
    }

    Ok(match config.data.seed {
        Some(seed) => Box::new(MockUsageProvider::seeded(seed)),
        None => Box::new(MockUsageProvider::new()),
    })
}

/// Move the slider thumbs in an order that lets each reach its target
/// without being blocked by the other.
fn drag_handles(
    dashboard: &mut Dashboard,
    start: Option<u32>,
    end: Option<u32>,
) -> anyhow::Result<()> {
    let selector = dashboard.selector_mut();
    let Some(current) = selector.range() else {
        bail!("Selector is not open");
    };

    match (start, end) {
        (Some(start), Some(end)) if end > current.end => {
            selector.drag(Handle::End, end)?;
            selector.drag(Handle::Start, start)?;
        }
        (Some(start), Some(end)) => {
            selector.drag(Handle::Start, start)?;
            selector.drag(Handle::End, end)?;
        }
        (Some(start), None) => {
            selector.drag(Handle::Start, start)?;
        }
        (None, Some(end)) => {
            selector.drag(Handle::End, end)?;
        }
        (None, None) => {}
    }

    Ok(())
}

fn print_buckets<'a>(
    buckets: impl Iterator<Item = &'a UsageBucket>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let buckets: Vec<&UsageBucket> = buckets.collect();
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }
        OutputFormat::Table => {
            println!(
                "{:<8} {:>10} {:>8} {:>12}",
                "TIME", "PRODUCTIVE", "NEUTRAL", "UNPRODUCTIVE"
            );
            for bucket in buckets {
                println!(
                    "{:<8} {:>10} {:>8} {:>12}{}",
                    bucket.time,
                    bucket.productive,
                    bucket.neutral,
                    bucket.unproductive,
                    if bucket.is_empty() { "  (offline)" } else { "" }
                );
            }
        }
    }
    Ok(())
}
