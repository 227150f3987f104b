#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is classified by the sign of the cross product
  /// `(p2.y-p1.y)*(p3.x-p2.x) - (p2.x-p1.x)*(p3.y-p2.y)`: zero is
  /// [`CoLinear`](Orientation::CoLinear), positive is
  /// [`ClockWise`](Orientation::ClockWise) and negative is
  /// [`CounterClockWise`](Orientation::CounterClockWise). Coincident points
  /// are allowed and come out as co-linear.
  ///
  /// No tolerance is applied. Nearly co-linear inputs are classified by
  /// whatever sign the floating-point evaluation produces.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullscan::data::Point;
  /// # use hullscan::Orientation;
  /// let p1 = Point::new([0., 0.]);
  /// let p2 = Point::new([0., 1.]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0., 2.])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1., 2.])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1., 2.])).is_cw());
  /// ```
  pub fn new(p1: &[f64; 2], p2: &[f64; 2], p3: &[f64; 2]) -> Orientation {
    let cross = (p2[1] - p1[1]) * (p3[0] - p2[0]) - (p2[0] - p1[0]) * (p3[1] - p2[1]);
    if cross == 0.0 {
      Orientation::CoLinear
    } else if cross > 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CounterClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
