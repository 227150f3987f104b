mod convex_hull {
  use hullscan::algorithms::convex_hull;
  use hullscan::data::*;
  use hullscan::*;

  fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
  }

  #[test]
  fn duplicate_and_interior_point() -> Result<(), Error> {
    let hull = convex_hull(pts(&[
      (0., 0.),
      (0., 0.),
      (4., 0.),
      (4., 4.),
      (0., 4.),
      (2., 2.),
    ]));
    hull.validate()?;
    assert_eq!(
      hull.as_slice(),
      pts(&[(0., 0.), (4., 0.), (4., 4.), (0., 4.)]).as_slice()
    );
    Ok(())
  }

  #[test]
  fn colinear_has_no_area() {
    let hull = convex_hull(pts(&[(0., 0.), (1., 1.), (2., 2.)]));
    assert!(hull.len() <= 2);
  }

  #[test]
  fn two_points() {
    assert!(convex_hull(pts(&[(1., 1.), (5., 2.)])).is_empty());
  }

  #[test]
  fn triangle_from_lowest_point() -> Result<(), Error> {
    let hull = convex_hull(pts(&[(0., 0.), (2., 0.), (1., 2.)]));
    hull.validate()?;
    assert_eq!(
      hull.as_slice(),
      pts(&[(0., 0.), (2., 0.), (1., 2.)]).as_slice()
    );
    Ok(())
  }

  #[test]
  fn consecutive_turns_are_ccw() {
    let hull = convex_hull(pts(&[
      (3., 1.),
      (7., 2.),
      (9., 6.),
      (5., 9.),
      (1., 6.),
      (4., 4.),
      (6., 5.),
    ]));
    assert_eq!(hull.len(), 5);
    for (a, b, c) in hull.iter_triples() {
      assert_eq!(a.orientation(b, c), Orientation::CounterClockWise);
    }
  }

  #[test]
  fn hull_of_hull() {
    let hull = convex_hull(pts(&[(3., 1.), (7., 2.), (9., 6.), (5., 9.), (1., 6.), (4., 4.)]));
    assert_eq!(convex_hull(hull.to_vec()), hull);
  }
}

mod round_trip {
  use hullscan::algorithms::convex_hull;
  use hullscan::persistence::{load_points, save_points};
  use hullscan::source::random_points;
  use hullscan::*;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn saved_hull_reloads() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let points_path = dir.path().join("given_points.csv");
    let hull_path = dir.path().join("convex_hull.csv");

    let points = random_points(200, &mut SmallRng::seed_from_u64(3))?;
    save_points(&points_path, &points)?;
    let hull = convex_hull(points.clone());
    save_points(&hull_path, &hull)?;

    assert_eq!(load_points(&points_path)?, points);
    assert_eq!(load_points(&hull_path)?, hull.to_vec());
    Ok(())
  }

  #[test]
  fn empty_hull_file_has_header() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("convex_hull.csv");
    save_points(&path, &convex_hull(Vec::new()))?;
    assert_eq!(std::fs::read_to_string(&path)?, "X,Y\n");
    assert!(load_points(&path)?.is_empty());
    Ok(())
  }

  #[test]
  fn missing_file() {
    assert!(matches!(
      load_points("/nonexistent/hullscan/points.csv"),
      Err(Error::Io(_))
    ));
  }
}
