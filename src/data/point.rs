use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::Orientation;

/// A point in the plane.
///
/// Equality is exact: two points are the same iff both coordinates compare
/// equal as `f64` values. `0.0` and `-0.0` are therefore the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Polar angle of `other` as seen from `self`, in `(-pi, pi]`.
  pub fn angle_to(&self, other: &Point) -> f64 {
    (other.y_coord() - self.y_coord()).atan2(other.x_coord() - self.x_coord())
  }

  pub fn euclidean_distance(&self, other: &Point) -> f64 {
    (other.x_coord() - self.x_coord()).hypot(other.y_coord() - self.y_coord())
  }

  /// Lexicographic (x, y) order. Total, and consistent with `==` for every
  /// non-NaN coordinate.
  pub fn cmp_xy(&self, other: &Point) -> Ordering {
    self.sort_key().cmp(&other.sort_key())
  }

  /// Lowest y first, ties broken by lowest x.
  pub fn cmp_yx(&self, other: &Point) -> Ordering {
    OrderedFloat(self.y_coord())
      .cmp(&OrderedFloat(other.y_coord()))
      .then_with(|| OrderedFloat(self.x_coord()).cmp(&OrderedFloat(other.x_coord())))
  }

  fn sort_key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    (OrderedFloat(self.array[0]), OrderedFloat(self.array[1]))
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Point> for (f64, f64) {
  fn from(point: Point) -> (f64, f64) {
    (point.array[0], point.array[1])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

  #[test]
  fn negative_zero_is_zero() {
    assert_eq!(Point::new([0.0, -0.0]), Point::new([-0.0, 0.0]));
    assert_eq!(
      Point::new([0.0, 1.0]).cmp_xy(&Point::new([-0.0, 1.0])),
      Ordering::Equal
    );
  }

  #[test]
  fn angles_around_origin() {
    let origin = Point::new([0., 0.]);
    assert_eq!(origin.angle_to(&Point::new([5., 0.])), 0.0);
    assert!((origin.angle_to(&Point::new([1., 1.])) - FRAC_PI_4).abs() < 1e-15);
    assert_eq!(origin.angle_to(&Point::new([0., 3.])), FRAC_PI_2);
    assert_eq!(origin.angle_to(&Point::new([-2., 0.])), PI);
  }

  #[test]
  fn distance() {
    let p = Point::new([1., 1.]);
    assert_eq!(p.euclidean_distance(&Point::new([4., 5.])), 5.0);
    assert_eq!(p.euclidean_distance(&p), 0.0);
  }

  #[test]
  fn lowest_then_leftmost() {
    let a = Point::new([3., 0.]);
    let b = Point::new([1., 0.]);
    let c = Point::new([0., 1.]);
    assert_eq!(a.cmp_yx(&b), Ordering::Greater);
    assert_eq!(b.cmp_yx(&c), Ordering::Less);
  }

  #[test]
  fn conversions() {
    let p = Point::from((1.5, -2.0));
    assert_eq!(p[0], 1.5);
    assert_eq!(p.y_coord(), -2.0);
    assert_eq!(<(f64, f64)>::from(p), (1.5, -2.0));
    assert_eq!(Point::from([1.5, -2.0]), p);
  }
}
