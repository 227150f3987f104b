use ordered_float::OrderedFloat;
use tracing::debug;

use crate::data::{Hull, Point, PointSet};
use crate::Orientation;

// https://en.wikipedia.org/wiki/Graham_scan

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// Duplicate points are removed first. Fewer than three distinct points give
/// an empty hull. This is a regular outcome, not an error. Co-linear input
/// collapses to a hull with one or two vertices.
///
/// # Properties
/// * All vertices of the hull are from the input set.
/// * The vertices are listed counter-clockwise starting at the lowest point,
///   ties broken by the leftmost one.
///
/// # Examples
///
/// ```rust
/// # use hullscan::algorithms::convex_hull;
/// # use hullscan::data::Point;
/// let dups = vec![Point::new([0., 0.])].repeat(3);
/// assert!(convex_hull(dups).is_empty());
/// ```
///
/// ```rust
/// # use hullscan::algorithms::convex_hull;
/// # use hullscan::data::Point;
/// let hull = convex_hull(vec![
///   Point::new([0., 0.]),
///   Point::new([4., 0.]),
///   Point::new([2., 1.]),
///   Point::new([4., 4.]),
///   Point::new([0., 4.]),
/// ]);
/// assert_eq!(hull.len(), 4);
/// assert_eq!(hull[0], Point::new([0., 0.]));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<I>(pts: I) -> Hull
where
  I: IntoIterator<Item = Point>,
{
  graham_scan(&PointSet::new(pts))
}

/// Graham scan over an already deduplicated set.
pub fn graham_scan(set: &PointSet) -> Hull {
  if set.len() < 3 {
    debug!(points = set.len(), "too few distinct points for a hull");
    return Hull::empty();
  }
  let hull = Hull::new_unchecked(sweep(angular_sort(set)));
  if hull.is_degenerate() {
    debug!(points = set.len(), vertices = hull.len(), "co-linear input");
  } else {
    debug!(points = set.len(), vertices = hull.len(), "convex hull");
  }
  hull
}

/// Order the set for the sweep: the pivot first, then the rest by polar
/// angle around the pivot. Points on the same ray are ordered nearest first.
///
/// The pivot is the point with the lowest y-coordinate, the leftmost one if
/// several share it.
pub fn angular_sort(set: &PointSet) -> Vec<Point> {
  let mut pts = set.to_vec();
  let Some(pivot_idx) = pivot_index(&pts) else {
    return pts;
  };
  pts.swap(0, pivot_idx);
  let pivot = pts[0];
  pts[1..].sort_by_cached_key(|pt| {
    (
      OrderedFloat(pivot.angle_to(pt)),
      OrderedFloat(pivot.euclidean_distance(pt)),
    )
  });
  pts
}

// O(n)
fn pivot_index(pts: &[Point]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp_yx(b))
    .map(|(idx, _)| idx)
}

// Doesn't allocate. pts[..=top] is the stack; it never outgrows the prefix
// that has already been read.
fn sweep(mut pts: Vec<Point>) -> Vec<Point> {
  if pts.len() < 2 {
    return pts;
  }
  let mut top = 1;
  for read_idx in 2..pts.len() {
    let next = pts[read_idx];
    // Drop the top until the last two stacked points and `next` turn
    // counter-clockwise.
    while top > 0 && pts[top - 1].orientation(&pts[top], &next) != Orientation::CounterClockWise {
      top -= 1;
    }
    top += 1;
    pts[top] = next;
  }
  pts.truncate(top + 1);
  pts
}
