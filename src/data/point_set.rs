use std::ops::Deref;

use super::{Hull, Point};

/// A set of distinct points.
///
/// Duplicates are removed on construction using exact coordinate equality.
/// The points are stored in lexicographic (x, y) order, so two sets built from
/// permutations of the same input are identical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
  points: Vec<Point>,
}

impl PointSet {
  /// $O(n \log n)$
  pub fn new<I>(points: I) -> PointSet
  where
    I: IntoIterator<Item = Point>,
  {
    let mut points: Vec<Point> = points.into_iter().collect();
    points.sort_by(Point::cmp_xy);
    points.dedup();
    PointSet { points }
  }

  /// $O(\log n)$
  pub fn contains(&self, point: &Point) -> bool {
    self
      .points
      .binary_search_by(|probe| probe.cmp_xy(point))
      .is_ok()
  }

  /// Convex hull of the set. See [`convex_hull`](crate::algorithms::convex_hull).
  pub fn convex_hull(&self) -> Hull {
    crate::algorithms::convex_hull::graham_scan::graham_scan(self)
  }

  pub fn as_slice(&self) -> &[Point] {
    &self.points
  }

  pub fn into_vec(self) -> Vec<Point> {
    self.points
  }
}

impl Deref for PointSet {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.points
  }
}

impl FromIterator<Point> for PointSet {
  fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> PointSet {
    PointSet::new(iter)
  }
}

impl<'a> IntoIterator for &'a PointSet {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
