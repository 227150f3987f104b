//! Where points come from: random generation or comma-separated text.
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::ops::Range;
use tracing::debug;

use crate::data::Point;
use crate::Error;

pub const MAX_POINTS: usize = 10_000;

/// Limits applied to generated and counted input.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
  /// Half-open range for both coordinates of random points.
  pub range: Range<f64>,
  pub max_points: usize,
}

impl Default for SourceConfig {
  fn default() -> Self {
    SourceConfig {
      range: 0.0..99.0,
      max_points: MAX_POINTS,
    }
  }
}

impl SourceConfig {
  /// `count` points drawn uniformly from `range` on both axes.
  pub fn random_points<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Point>, Error>
  where
    R: Rng + ?Sized,
  {
    if count > self.max_points {
      return Err(Error::TooManyPoints {
        limit: self.max_points,
      });
    }
    // Uniform::new panics on empty or non-finite ranges.
    let Range { start, end } = self.range;
    if !(start.is_finite() && end.is_finite() && start < end) {
      return Err(Error::InvalidRange);
    }
    let coord = Uniform::new(start, end);
    let pts: Vec<Point> = (0..count)
      .map(|_| Point::new([coord.sample(rng), coord.sample(rng)]))
      .collect();
    debug!(count, "generated random points");
    Ok(pts)
  }

  /// Parse a requested number of points. Only plain decimal digits are
  /// accepted, surrounding whitespace aside.
  pub fn parse_count(&self, text: &str) -> Result<usize, Error> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
      return Err(Error::InvalidCount(text.to_string()));
    }
    match digits.parse::<usize>() {
      Ok(count) if count <= self.max_points => Ok(count),
      _ => Err(Error::TooManyPoints {
        limit: self.max_points,
      }),
    }
  }
}

pub fn random_points<R>(count: usize, rng: &mut R) -> Result<Vec<Point>, Error>
where
  R: Rng + ?Sized,
{
  SourceConfig::default().random_points(count, rng)
}

/// Parse one point per line, written as `x,y`.
///
/// Leading and trailing blank space around the whole text is ignored, as is
/// space around each number. Every remaining line must hold exactly two
/// finite numbers.
///
/// ```rust
/// # use hullscan::source::parse_points;
/// # use hullscan::data::Point;
/// let pts = parse_points("1, 2\n3.5,-4\n").unwrap();
/// assert_eq!(pts, vec![Point::new([1., 2.]), Point::new([3.5, -4.])]);
/// assert!(parse_points("1,2,3").is_err());
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>, Error> {
  let text = text.trim();
  if text.is_empty() {
    return Err(Error::EmptyInput);
  }
  text
    .lines()
    .enumerate()
    .map(|(idx, line)| {
      parse_line(line).ok_or_else(|| Error::InvalidLine {
        line: idx + 1,
        text: line.to_string(),
      })
    })
    .collect()
}

fn parse_line(line: &str) -> Option<Point> {
  let mut fields = line.split(',');
  let x = parse_coord(fields.next()?)?;
  let y = parse_coord(fields.next()?)?;
  if fields.next().is_some() {
    return None;
  }
  Some(Point::new([x, y]))
}

fn parse_coord(field: &str) -> Option<f64> {
  field.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
