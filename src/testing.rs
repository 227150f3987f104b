// Strategies for generating point sets in property tests.
use crate::data::Point;

use core::ops::Range;
use proptest::collection::vec;
use proptest::prelude::*;

/// Points with arbitrary coordinates in `[0, 99)`, the range used by the
/// random point source. Exact co-linearity is vanishingly unlikely.
pub fn any_point() -> impl Strategy<Value = Point> {
  (0.0..99.0f64, 0.0..99.0f64).prop_map(Point::from)
}

pub fn any_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size)
}

/// Points on a small integer grid. Lots of duplicates and co-linear triples.
pub fn grid_point() -> impl Strategy<Value = Point> {
  (-8..8i8, -8..8i8).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(grid_point(), size)
}

impl Arbitrary for Point {
  type Parameters = ();
  type Strategy = BoxedStrategy<Point>;
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any_point().boxed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn arbitrary_points_in_range(pt: Point) {
    prop_assert!((0.0..99.0).contains(&pt.x_coord()));
    prop_assert!((0.0..99.0).contains(&pt.y_coord()));
  }
}
