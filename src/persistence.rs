//! Point tables on disk: a `X,Y` header row followed by one row per point.
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

use crate::data::Point;
use crate::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Row {
  #[serde(rename = "X")]
  x: f64,
  #[serde(rename = "Y")]
  y: f64,
}

impl From<&Point> for Row {
  fn from(pt: &Point) -> Row {
    Row {
      x: pt.x_coord(),
      y: pt.y_coord(),
    }
  }
}

impl From<Row> for Point {
  fn from(row: Row) -> Point {
    Point::new([row.x, row.y])
  }
}

/// Write `points` as CSV. The header is written even when there are no points.
pub fn write_points<W: Write>(writer: W, points: &[Point]) -> Result<(), Error> {
  let mut wtr = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(writer);
  wtr.write_record(["X", "Y"])?;
  for pt in points {
    wtr.serialize(Row::from(pt))?;
  }
  wtr.flush()?;
  Ok(())
}

/// Read points written by [`write_points`]. Space around fields is ignored.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>, Error> {
  let mut rdr = csv::ReaderBuilder::new()
    .trim(csv::Trim::All)
    .from_reader(reader);
  let mut points = Vec::new();
  for row in rdr.deserialize() {
    let row: Row = row?;
    points.push(row.into());
  }
  Ok(points)
}

pub fn save_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), Error> {
  let path = path.as_ref();
  write_points(BufWriter::new(File::create(path)?), points)?;
  info!(path = %path.display(), count = points.len(), "saved points");
  Ok(())
}

pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, Error> {
  let path = path.as_ref();
  let points = read_points(BufReader::new(File::open(path)?))?;
  info!(path = %path.display(), count = points.len(), "loaded points");
  Ok(points)
}
