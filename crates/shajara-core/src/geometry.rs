//! Geometric primitives for family tree layout.
//!
//! This module provides the geometric types layout strategies use to report
//! where members sit in the logical plane.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Shajara uses a coordinate system consistent with SVG and screen space:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Units are logical. Mapping to a viewport (scaling, translation) is left to
//! the renderer; [`Bounds`] exists so it can do so without rescanning every
//! position. Radial strategies center their output on the origin, so
//! coordinates may be negative.

use serde::Serialize;

/// A 2D point representing a position in layout coordinate space.
///
/// # Examples
///
/// ```
/// # use shajara_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point at `radius` from the origin in the direction `angle`.
    ///
    /// Angles are in radians, measured from the +X axis towards +Y (clockwise
    /// on screen).
    ///
    /// # Examples
    ///
    /// ```
    /// # use shajara_core::geometry::Point;
    /// let p = Point::from_polar(10.0, 0.0);
    /// assert_eq!(p.x(), 10.0);
    /// assert_eq!(p.y(), 0.0);
    /// ```
    pub fn from_polar(radius: f32, angle: f32) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns a new point with the two coordinates exchanged.
    ///
    /// Tree layouts compute in (breadth, depth) space and transpose when the
    /// depth axis runs horizontally.
    pub fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a zero-sized bounds located at `point`.
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the smallest bounds containing every point, or `None` for an
    /// empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shajara_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::enclosing([Point::new(-5.0, 2.0), Point::new(10.0, -4.0)]).unwrap();
    /// assert_eq!(bounds.min_x(), -5.0);
    /// assert_eq!(bounds.max_y(), 2.0);
    /// assert_eq!(bounds.width(), 15.0);
    /// assert!(Bounds::enclosing(std::iter::empty()).is_none());
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points
            .into_iter()
            .map(Self::from_point)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Enclosing bounds contain every point they were built from.
    fn check_enclosing_contains_all(points: Vec<Point>) -> Result<(), TestCaseError> {
        let bounds = Bounds::enclosing(points.iter().copied());
        prop_assert_eq!(bounds.is_some(), !points.is_empty());

        if let Some(bounds) = bounds {
            for point in points {
                prop_assert!(bounds.min_x() <= point.x() && point.x() <= bounds.max_x());
                prop_assert!(bounds.min_y() <= point.y() && point.y() <= bounds.max_y());
            }
        }
        Ok(())
    }

    /// Polar construction preserves the radius.
    fn check_from_polar_radius(radius: f32, angle: f32) -> Result<(), TestCaseError> {
        let point = Point::from_polar(radius, angle);
        prop_assert!(approx_eq!(f32, point.hypot(), radius, epsilon = 0.01));
        Ok(())
    }

    proptest! {
        #[test]
        fn enclosing_contains_all(points in prop::collection::vec(point_strategy(), 0..32)) {
            check_enclosing_contains_all(points)?;
        }

        #[test]
        fn from_polar_radius(radius in 0.0f32..1000.0, angle in -10.0f32..10.0) {
            check_from_polar_radius(radius, angle)?;
        }
    }
}
