//! Convex hulls of planar point sets, computed with a Graham scan.
//!
//! ```rust
//! use hullscan::algorithms::convex_hull;
//! use hullscan::data::Point;
//!
//! let hull = convex_hull(vec![
//!   Point::new([0., 0.]),
//!   Point::new([0., 0.]),
//!   Point::new([4., 0.]),
//!   Point::new([4., 4.]),
//!   Point::new([0., 4.]),
//!   Point::new([2., 2.]),
//! ]);
//! assert_eq!(hull.as_slice(), &[
//!   Point::new([0., 0.]),
//!   Point::new([4., 0.]),
//!   Point::new([4., 4.]),
//!   Point::new([0., 4.]),
//! ]);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

pub mod algorithms;
pub mod data;
mod orientation;
pub mod persistence;
pub mod render;
pub mod source;

pub use orientation::Orientation;

#[derive(Debug)]
pub enum Error {
  /// A hull has a repeated vertex.
  DuplicatePoints,
  /// Two consecutive hull edges are either co-linear or oriented clockwise.
  ConvexViolation,
  /// Point text had no lines.
  EmptyInput,
  /// A line of point text did not hold exactly two finite numbers.
  InvalidLine { line: usize, text: String },
  /// A point count was not a non-negative integer.
  InvalidCount(String),
  TooManyPoints { limit: usize },
  /// The coordinate range for random points is empty.
  InvalidRange,
  Io(std::io::Error),
  Csv(csv::Error),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::EmptyInput => write!(f, "No points given"),
      Error::InvalidLine { line, text } => {
        write!(f, "Line {}: expected 'x,y', got {:?}", line, text)
      }
      Error::InvalidCount(text) => write!(f, "Invalid point count {:?}", text),
      Error::TooManyPoints { limit } => write!(f, "At most {} points are allowed", limit),
      Error::InvalidRange => write!(f, "Empty coordinate range"),
      Error::Io(err) => write!(f, "I/O error: {}", err),
      Error::Csv(err) => write!(f, "CSV error: {}", err),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::Io(err) => Some(err),
      Error::Csv(err) => Some(err),
      _ => None,
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Error {
    Error::Io(err)
  }
}

impl From<csv::Error> for Error {
  fn from(err: csv::Error) -> Error {
    Error::Csv(err)
  }
}

#[cfg(test)]
pub mod testing;
