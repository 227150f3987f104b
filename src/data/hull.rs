use std::ops::Deref;

use super::{Point, PointLocation, PointSet};
use crate::{Error, Orientation};

/// Boundary of a convex hull.
///
/// The vertices are listed counter-clockwise starting at the lowest
/// (then leftmost) point. The boundary is not explicitly closed: the last
/// vertex connects back to the first. Use [`Hull::closed`] when drawing.
///
/// A hull with fewer than three vertices is degenerate. It is empty when the
/// input had fewer than three distinct points and has one or two vertices when
/// all points were co-linear.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hull {
  vertices: Vec<Point>,
}

impl Hull {
  pub fn empty() -> Hull {
    Hull::default()
  }

  pub(crate) fn new_unchecked(vertices: Vec<Point>) -> Hull {
    Hull { vertices }
  }

  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() < 3
  }

  /// Vertices followed by the first vertex again.
  ///
  /// ```rust
  /// # use hullscan::algorithms::convex_hull;
  /// # use hullscan::data::Point;
  /// let hull = convex_hull(vec![
  ///   Point::new([0., 0.]),
  ///   Point::new([2., 0.]),
  ///   Point::new([1., 2.]),
  /// ]);
  /// let xs: Vec<f64> = hull.closed().map(|pt| pt.x_coord()).collect();
  /// assert_eq!(xs, vec![0., 2., 1., 0.]);
  /// ```
  pub fn closed(&self) -> impl Iterator<Item = &Point> + '_ {
    self.vertices.iter().chain(self.vertices.first())
  }

  /// Consecutive vertex triples, wrapping around the end.
  pub fn iter_triples(&self) -> impl Iterator<Item = (&Point, &Point, &Point)> + '_ {
    let n = self.vertices.len();
    (0..n).map(move |i| {
      (
        &self.vertices[i],
        &self.vertices[(i + 1) % n],
        &self.vertices[(i + 2) % n],
      )
    })
  }

  /// $O(n \log n)$ Check that no vertex is repeated and that every turn along
  /// the boundary is counter-clockwise. Degenerate hulls only need distinct
  /// vertices.
  pub fn validate(&self) -> Result<(), Error> {
    if PointSet::new(self.vertices.iter().copied()).len() != self.vertices.len() {
      return Err(Error::DuplicatePoints);
    }
    if self.is_degenerate() {
      return Ok(());
    }
    for (a, b, c) in self.iter_triples() {
      if a.orientation(b, c) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// For degenerate hulls the boundary is the vertex or segment itself, so any
  /// point not on it is outside.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    match self.vertices.as_slice() {
      [] => PointLocation::Outside,
      [a] if a == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] => {
        if a.orientation(b, pt).is_colinear() && within_bounds(a, b, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_edge = false;
        for (a, b) in self.vertices.iter().zip(self.closed().skip(1)) {
          match a.orientation(b, pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  pub fn as_slice(&self) -> &[Point] {
    &self.vertices
  }

  pub fn into_vec(self) -> Vec<Point> {
    self.vertices
  }
}

fn within_bounds(a: &Point, b: &Point, pt: &Point) -> bool {
  let (min_x, max_x) = (a.x_coord().min(b.x_coord()), a.x_coord().max(b.x_coord()));
  let (min_y, max_y) = (a.y_coord().min(b.y_coord()), a.y_coord().max(b.y_coord()));
  (min_x..=max_x).contains(&pt.x_coord()) && (min_y..=max_y).contains(&pt.y_coord())
}

impl Deref for Hull {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.vertices
  }
}

impl<'a> IntoIterator for &'a Hull {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl From<Hull> for Vec<Point> {
  fn from(hull: Hull) -> Vec<Point> {
    hull.vertices
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::{assert_err, assert_ok};

  fn square() -> Hull {
    Hull::new_unchecked(vec![
      Point::new([0., 0.]),
      Point::new([4., 0.]),
      Point::new([4., 4.]),
      Point::new([0., 4.]),
    ])
  }

  #[test]
  fn closed_repeats_first() {
    let hull = square();
    let closed: Vec<&Point> = hull.closed().collect();
    assert_eq!(closed.len(), 5);
    assert_eq!(closed[0], closed[4]);
    assert_eq!(Hull::empty().closed().count(), 0);
  }

  #[test]
  fn triples_wrap_around() {
    let hull = square();
    let last = hull.iter_triples().last().unwrap();
    assert_eq!(last, (&hull[3], &hull[0], &hull[1]));
  }

  #[test]
  fn valid_square() {
    assert_ok!(square().validate());
    assert_ok!(Hull::empty().validate());
  }

  #[test]
  fn clockwise_square_is_invalid() {
    let mut pts = square().into_vec();
    pts.reverse();
    assert!(matches!(
      Hull::new_unchecked(pts).validate(),
      Err(Error::ConvexViolation)
    ));
  }

  #[test]
  fn colinear_vertex_is_invalid() {
    let hull = Hull::new_unchecked(vec![
      Point::new([0., 0.]),
      Point::new([2., 0.]),
      Point::new([4., 0.]),
      Point::new([0., 4.]),
    ]);
    assert_err!(hull.validate());
  }

  #[test]
  fn repeated_vertex_is_invalid() {
    let hull = Hull::new_unchecked(vec![Point::new([0., 0.]), Point::new([0., 0.])]);
    assert!(matches!(hull.validate(), Err(Error::DuplicatePoints)));
  }

  #[test]
  fn locate_in_square() {
    let hull = square();
    assert_eq!(hull.locate(&Point::new([2., 2.])), PointLocation::Inside);
    assert_eq!(hull.locate(&Point::new([2., 0.])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([0., 0.])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([5., 2.])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([-1., -1.])), PointLocation::Outside);
  }

  #[test]
  fn locate_on_segment() {
    let hull = Hull::new_unchecked(vec![Point::new([0., 0.]), Point::new([2., 2.])]);
    assert_eq!(hull.locate(&Point::new([1., 1.])), PointLocation::OnBoundary);
    assert_eq!(hull.locate(&Point::new([3., 3.])), PointLocation::Outside);
    assert_eq!(hull.locate(&Point::new([1., 0.])), PointLocation::Outside);
  }
}
