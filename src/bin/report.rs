use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};

use handstat::efficiency::Role;
use handstat::engine::{Config, Sources, StatsEngine};
use handstat::event::MatchEvent;
use handstat::file::FromJsonFile;
use handstat::label::Roster;
use handstat::window::{self, Period, HALF_LENGTH_SECS};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file with the subject's own events
    events: PathBuf,

    /// JSON file with the events to build the fouls-committed map from
    #[clap(short = 'f', long)]
    fouls: Option<PathBuf>,

    /// JSON file with the shots faced by the subject's goalkeepers
    #[clap(short = 'g', long)]
    goalkeeping: Option<PathBuf>,

    /// apply the goalkeeper efficiency formula to the subject
    #[clap(long)]
    goalkeeper_mode: bool,

    /// JSON config file (role and baseline efficiencies)
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// JSON roster mapping player ids to names and numbers
    #[clap(short = 'l', long)]
    labels: Option<PathBuf>,

    /// restrict every event log to a single period
    #[clap(short = 'p', long, value_parser = parse_period)]
    period: Option<Period>,
}

fn parse_period(s: &str) -> anyhow::Result<Period> {
    match s.to_lowercase().as_str() {
        "1" | "first" => Ok(Period::FirstHalf),
        "2" | "second" => Ok(Period::SecondHalf),
        "ot" | "overtime" => Ok(Period::Overtime),
        "full" => Ok(Period::FullMatch),
        _ => Err(anyhow::anyhow!("unsupported period {s}")),
    }
}

fn load_events(path: &Path, period: Option<Period>) -> anyhow::Result<Vec<MatchEvent>> {
    debug!("loading events from {path:?}");
    let events = Vec::<MatchEvent>::from_json_file(path)?;
    Ok(match period {
        None => events,
        Some(period) => window::filter_period(&events, period, HALF_LENGTH_SECS),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if args.goalkeeper_mode {
        config.role = Role::Goalkeeper;
    }

    let events = load_events(&args.events, args.period)?;
    let fouls = args
        .fouls
        .as_ref()
        .map(|path| load_events(path, args.period))
        .transpose()?;
    let goalkeeping = args
        .goalkeeping
        .as_ref()
        .map(|path| load_events(path, args.period))
        .transpose()?;

    let mut engine = StatsEngine::try_new(events, config)?;
    if let Some(path) = &args.labels {
        engine = engine.with_labels(Roster::from_json_file(path)?);
    }

    let mut sources = Sources::default();
    if let Some(fouls) = &fouls {
        sources = sources.with_fouls(fouls);
    }
    if let Some(goalkeeping) = &goalkeeping {
        sources = sources.with_goalkeeping(goalkeeping);
    }

    let start_time = Instant::now();
    let stats = engine.calculate(sources);
    let elapsed = start_time.elapsed();
    info!(
        "aggregated {} events into {} player records in {:.3}ms",
        engine.events().len(),
        stats.players.len(),
        elapsed.as_secs_f64() * 1_000.
    );

    println!("{}", serde_json::to_string_pretty(&*stats)?);
    Ok(())
}
