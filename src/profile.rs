#![warn(missing_docs)]
//! Half profile of a surface of rotation as open polyline
use crate::error::{LensError, LensResult};
use nalgebra::Point3;
use num::Zero;
use uom::si::f64::Length;

/// Open polyline describing the half profile of a surface of rotation.
///
/// Each point is `(radius, sag, 0)`. The third coordinate is always zero and marks the plane containing the axis of
/// revolution. Consecutive points are connected by the edges `(i, i+1)`. The polyline is never closed.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfilePolyline {
    points: Vec<Point3<Length>>,
    edges: Vec<(usize, usize)>,
}
impl ProfilePolyline {
    /// Creates a new [`ProfilePolyline`] from the given points connecting consecutive points by edges.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - less than two points are given.
    ///   - the radii (x components) are not strictly increasing.
    ///   - a point has a non-zero z component.
    pub fn new(points: Vec<Point3<Length>>) -> LensResult<Self> {
        if points.len() < 2 {
            return Err(LensError::Configuration(
                "a profile polyline needs at least two points".into(),
            ));
        }
        if points.windows(2).any(|p| p[1].x <= p[0].x) {
            return Err(LensError::Configuration(
                "radii of a profile polyline must be strictly increasing".into(),
            ));
        }
        if points.iter().any(|p| !p.z.is_zero()) {
            return Err(LensError::Configuration(
                "z component of profile points must be zero".into(),
            ));
        }
        let edges = (0..points.len() - 1).map(|i| (i, i + 1)).collect();
        Ok(Self { points, edges })
    }
    /// Returns the points of this [`ProfilePolyline`] ordered by increasing radius.
    #[must_use]
    pub fn points(&self) -> &[Point3<Length>] {
        &self.points
    }
    /// Returns the edges of this [`ProfilePolyline`] as pairs of point indices.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
    /// Returns the number of points of this [`ProfilePolyline`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns `true` if this [`ProfilePolyline`] has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns the radius of the last (outermost) point.
    #[must_use]
    pub fn max_radius(&self) -> Length {
        self.points.last().map_or_else(Length::zero, |p| p.x)
    }
    /// Returns the radial distance between the first two points.
    ///
    /// For profiles created by [`generate_profile`](crate::generate_profile) all points are evenly spaced.
    #[must_use]
    pub fn radial_spacing(&self) -> Length {
        if self.points.len() < 2 {
            return Length::zero();
        }
        self.points[1].x - self.points[0].x
    }
    /// Returns the minimum and maximum sag (y component) of all points.
    #[must_use]
    pub fn sag_range(&self) -> (Length, Length) {
        let Some(first) = self.points.first() else {
            return (Length::zero(), Length::zero());
        };
        self.points
            .iter()
            .fold((first.y, first.y), |(min, max), p| (min.min(p.y), max.max(p.y)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use assert_matches::assert_matches;
    #[test]
    fn new() {
        let polyline = ProfilePolyline::new(vec![
            millimeter!(0.0, 0.0, 0.0),
            millimeter!(1.0, -0.5, 0.0),
            millimeter!(2.0, -2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(polyline.len(), 3);
        assert!(!polyline.is_empty());
        assert_eq!(polyline.edges(), &[(0, 1), (1, 2)]);
        assert_eq!(polyline.points()[2], millimeter!(2.0, -2.0, 0.0));
    }
    #[test]
    fn new_wrong() {
        assert_matches!(
            ProfilePolyline::new(vec![]),
            Err(LensError::Configuration(_))
        );
        assert_matches!(
            ProfilePolyline::new(vec![millimeter!(0.0, 0.0, 0.0)]),
            Err(LensError::Configuration(_))
        );
        assert!(
            ProfilePolyline::new(vec![millimeter!(1.0, 0.0, 0.0), millimeter!(1.0, 0.0, 0.0)])
                .is_err()
        );
        assert!(
            ProfilePolyline::new(vec![millimeter!(1.0, 0.0, 0.0), millimeter!(0.0, 0.0, 0.0)])
                .is_err()
        );
        assert!(
            ProfilePolyline::new(vec![millimeter!(0.0, 0.0, 0.0), millimeter!(1.0, 0.0, 0.1)])
                .is_err()
        );
    }
    #[test]
    fn open_polyline() {
        let polyline = ProfilePolyline::new(vec![
            millimeter!(0.0, 0.0, 0.0),
            millimeter!(1.0, 0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(polyline.edges().len(), polyline.len() - 1);
        assert!(!polyline.edges().contains(&(1, 0)));
    }
    #[test]
    fn geometry() {
        let polyline = ProfilePolyline::new(vec![
            millimeter!(0.0, 0.0, 0.0),
            millimeter!(1.0, -0.5, 0.0),
            millimeter!(2.0, 0.25, 0.0),
        ])
        .unwrap();
        assert_eq!(polyline.max_radius(), millimeter!(2.0));
        assert_eq!(polyline.radial_spacing(), millimeter!(1.0));
        assert_eq!(polyline.sag_range(), (millimeter!(-0.5), millimeter!(0.25)));
    }
}
