//! Text scatter plots drawn with Braille Unicode symbols.
use std::fmt;

use crate::data::Point;

/// A scatter plot of a point set with its hull boundary on top.
///
/// Braille characters (U+2800 to U+28FF) encode 2×4 dot patterns. Each
/// character cell of the plot therefore holds 2 pixels across and 4 down. The
/// plot is scaled to the bounding box of all points, with y growing upwards.
///
/// # Braille Dot Numbering
///
/// ```text
/// 1  4
/// 2  5
/// 3  6
/// 7  8
/// ```
///
/// # Examples
///
/// ```
/// use hullscan::algorithms::convex_hull;
/// use hullscan::data::Point;
/// use hullscan::render::Plot;
///
/// let points = vec![
///   Point::new([0., 0.]),
///   Point::new([10., 0.]),
///   Point::new([5., 8.]),
///   Point::new([5., 3.]),
/// ];
/// let hull = convex_hull(points.clone());
/// println!("{}", Plot::new(&points, &hull).with_size(20, 8));
/// ```
pub struct Plot<'a> {
  points: &'a [Point],
  hull: &'a [Point],
  width: usize,
  height: usize,
}

impl<'a> Plot<'a> {
  pub fn new(points: &'a [Point], hull: &'a [Point]) -> Self {
    Plot {
      points,
      hull,
      width: 40,
      height: 20,
    }
  }

  /// Size of the plot in characters. Each dimension is at least one.
  #[must_use]
  pub fn with_size(mut self, width: usize, height: usize) -> Self {
    self.width = width.max(1);
    self.height = height.max(1);
    self
  }

  fn render(&self) -> String {
    let Some(frame) = Frame::new(self.points.iter().chain(self.hull), self.width * 2, self.height * 4)
    else {
      return String::new();
    };

    // false = empty, true = filled
    let mut grid = vec![vec![false; frame.width]; frame.height];
    let mut plot = |x: i32, y: i32| {
      if x >= 0 && y >= 0 && (x as usize) < frame.width && (y as usize) < frame.height {
        grid[y as usize][x as usize] = true;
      }
    };

    for pt in self.points {
      let (x, y) = frame.pixel(pt);
      plot(x, y);
    }

    // The boundary is closed by returning to the first vertex.
    let boundary = self.hull.iter().chain(self.hull.first());
    for (src, dst) in self.hull.iter().zip(boundary.skip(1)) {
      let (x0, y0) = frame.pixel(src);
      let (x1, y1) = frame.pixel(dst);
      bresenham_line(x0, y0, x1, y1, &mut plot);
    }

    grid_to_braille(&grid)
  }
}

impl<'a> fmt::Display for Plot<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render())
  }
}

// Maps plane coordinates onto a pixel grid.
struct Frame {
  min_x: f64,
  max_y: f64,
  scale_x: f64,
  scale_y: f64,
  width: usize,
  height: usize,
}

impl Frame {
  fn new<'p>(pts: impl Iterator<Item = &'p Point>, width: usize, height: usize) -> Option<Frame> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for pt in pts {
      let (x, y) = (pt.x_coord(), pt.y_coord());
      bounds = Some(match bounds {
        None => (x, y, x, y),
        Some((min_x, min_y, max_x, max_y)) => (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)),
      });
    }
    let (min_x, min_y, max_x, max_y) = bounds?;
    let scale = |span: f64, pixels: usize| {
      if span > 0.0 {
        (pixels - 1) as f64 / span
      } else {
        0.0
      }
    };
    Some(Frame {
      min_x,
      max_y,
      scale_x: scale(max_x - min_x, width),
      scale_y: scale(max_y - min_y, height),
      width,
      height,
    })
  }

  // Row 0 is the top of the plot.
  fn pixel(&self, pt: &Point) -> (i32, i32) {
    let x = ((pt.x_coord() - self.min_x) * self.scale_x).round();
    let y = ((self.max_y - pt.y_coord()) * self.scale_y).round();
    (x as i32, y as i32)
  }
}

/// Convert a pixel grid to Braille characters.
fn grid_to_braille(grid: &[Vec<bool>]) -> String {
  let height = grid.len();
  let width = if height > 0 { grid[0].len() } else { 0 };

  let braille_rows = height.div_ceil(4);
  let braille_cols = width.div_ceil(2);

  // Dot bits in Unicode order, indexed by [row][column] within a cell.
  const DOTS: [[u8; 2]; 4] = [
    [0b00000001, 0b00001000],
    [0b00000010, 0b00010000],
    [0b00000100, 0b00100000],
    [0b01000000, 0b10000000],
  ];

  let mut result = String::new();
  for row in 0..braille_rows {
    for col in 0..braille_cols {
      let mut dots = 0u8;
      for (dy, bits) in DOTS.iter().enumerate() {
        for (dx, bit) in bits.iter().enumerate() {
          if get_pixel(grid, col * 2 + dx, row * 4 + dy) {
            dots |= bit;
          }
        }
      }
      // U+2800 is the blank pattern.
      result.push(char::from_u32(0x2800 + u32::from(dots)).unwrap_or('?'));
    }
    result.push('\n');
  }
  result
}

/// Get a pixel from the grid, returning false if out of bounds.
fn get_pixel(grid: &[Vec<bool>], x: usize, y: usize) -> bool {
  grid
    .get(y)
    .and_then(|row| row.get(x))
    .copied()
    .unwrap_or(false)
}

/// Bresenham's line drawing algorithm.
///
/// Calls the provided closure for each point along the line from (x0, y0) to (x1, y1).
fn bresenham_line<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: F)
where
  F: FnMut(i32, i32),
{
  let dx = (x1 - x0).abs();
  let dy = -(y1 - y0).abs();
  let sx = if x0 < x1 { 1 } else { -1 };
  let sy = if y0 < y1 { 1 } else { -1 };
  let mut error = dx + dy;

  let mut x = x0;
  let mut y = y0;

  loop {
    plot(x, y);

    if x == x1 && y == y1 {
      break;
    }

    let e2 = 2 * error;

    if e2 >= dy {
      if x == x1 {
        break;
      }
      error += dy;
      x += sx;
    }

    if e2 <= dx {
      if y == y1 {
        break;
      }
      error += dx;
      y += sy;
    }
  }
}
