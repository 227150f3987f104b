use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hullscan::algorithms::convex_hull;
use hullscan::data::Point;
use hullscan::persistence::{load_points, save_points};
use hullscan::render::Plot;
use hullscan::source::{parse_points, SourceConfig};

#[derive(Parser)]
#[command(name = "hullscan")]
#[command(about = "Compute, save and plot the convex hull of a point set")]
struct Cmd {
  /// Where the input points are written
  #[arg(long, global = true, default_value = "given_points.csv")]
  points: PathBuf,

  /// Where the hull vertices are written
  #[arg(long, global = true, default_value = "convex_hull.csv")]
  hull: PathBuf,

  /// Plot width in characters
  #[arg(long, global = true, default_value_t = 60)]
  width: usize,

  /// Plot height in characters
  #[arg(long, global = true, default_value_t = 20)]
  height: usize,

  /// Skip the plot after computing the hull
  #[arg(long, global = true)]
  no_plot: bool,

  /// Log at debug level unless RUST_LOG says otherwise
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  action: Action,
}

#[derive(Subcommand)]
enum Action {
  /// Generate random points in [0, 99) and compute their hull
  Random {
    /// Number of points, at most 10000
    #[arg(long)]
    count: String,
    /// Seed for reproducible point sets
    #[arg(long)]
    seed: Option<u64>,
  },
  /// Read `x,y` lines from a file (or stdin) and compute their hull
  Manual {
    #[arg(long)]
    input: Option<PathBuf>,
  },
  /// Plot previously saved points and hull
  Plot,
}

fn main() -> Result<()> {
  let cmd = Cmd::parse();
  let default_level = if cmd.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .init();

  match &cmd.action {
    Action::Random { count, seed } => {
      let config = SourceConfig::default();
      let count = config
        .parse_count(count)
        .context("invalid input, please enter a valid number")?;
      let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(*seed),
        None => SmallRng::from_entropy(),
      };
      let points = config.random_points(count, &mut rng)?;
      compute(&cmd, points)
    }
    Action::Manual { input } => {
      let text = match input {
        Some(path) => std::fs::read_to_string(path)
          .with_context(|| format!("reading {}", path.display()))?,
        None => {
          let mut text = String::new();
          std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
          text
        }
      };
      let points = parse_points(&text).context("invalid input format, expected one 'x,y' per line")?;
      compute(&cmd, points)
    }
    Action::Plot => plot(&cmd),
  }
}

fn compute(cmd: &Cmd, points: Vec<Point>) -> Result<()> {
  save_points(&cmd.points, &points)
    .with_context(|| format!("writing {}", cmd.points.display()))?;
  let hull = convex_hull(points);
  save_points(&cmd.hull, &hull).with_context(|| format!("writing {}", cmd.hull.display()))?;
  if hull.is_degenerate() {
    warn!(vertices = hull.len(), "no polygon: fewer than three distinct points or all co-linear");
  }
  info!(vertices = hull.len(), path = %cmd.hull.display(), "convex hull created");
  if cmd.no_plot {
    return Ok(());
  }
  plot(cmd)
}

// Plots from disk so that saved files can be re-plotted later.
fn plot(cmd: &Cmd) -> Result<()> {
  let points = load_points(&cmd.points).with_context(|| format!("reading {}", cmd.points.display()))?;
  let hull = load_points(&cmd.hull).with_context(|| format!("reading {}", cmd.hull.display()))?;
  print!("{}", Plot::new(&points, &hull).with_size(cmd.width, cmd.height));
  Ok(())
}
