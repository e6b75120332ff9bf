//! Geometric primitives for the shape editor.
//!
//! A rectangle on the canvas is stored axis-aligned; its rotation angle is
//! carried separately by the caller and applied about the rectangle's
//! center. World space follows the canvas convention (+Y up), so the `Top*`
//! handles sit on the `y + height` edge.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and `other`.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the coordinates as an `(x, y)` tuple.
    pub fn pos(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the component at `index`: 0 is X, 1 is Y.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointIndexOutOfRange`] for any other index.
    pub fn component(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::PointIndexOutOfRange { index }),
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Rotates `p` around `origin` by `angle_deg` degrees, counter-clockwise
/// positive. Angles are degrees at the API boundary and converted to
/// radians only here.
pub fn rotate_point(p: Point, origin: Point, angle_deg: f64) -> Point {
    if angle_deg.abs() < 1e-6 {
        return p;
    }
    let angle_rad = angle_deg.to_radians();
    let cos_a = angle_rad.cos();
    let sin_a = angle_rad.sin();
    let dx = p.x - origin.x;
    let dy = p.y - origin.y;
    Point {
        x: origin.x + dx * cos_a - dy * sin_a,
        y: origin.y + dx * sin_a + dy * cos_a,
    }
}

/// A rectangle defined by its origin corner and dimensions.
///
/// `width` and `height` may go negative when a drag crosses the opposite
/// edge; the resize pipeline keeps the raw values and leaves normalization
/// to the caller (see [`Rectangle::normalized`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a new rectangle from its origin corner and dimensions.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Origin corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Corners in the local (unrotated) frame, starting at the origin
    /// corner and walking the perimeter.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }

    /// Copy with negative width/height folded back to positive.
    ///
    /// The resize pipeline never calls this: a drag through the opposite
    /// edge intentionally yields a negative dimension (flip), and callers
    /// that cannot render one opt in here.
    pub fn normalized(&self) -> Rectangle {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rectangle::new(x, y, width, height)
    }
}

/// Control points on a rectangle's bounding box used to resize it via drag.
///
/// For every handle exactly one corner of the box stays fixed under the
/// drag; the opposite corner or edge follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Handle {
    /// All eight handles in drawing order.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopMiddle,
        Handle::TopRight,
        Handle::MiddleLeft,
        Handle::MiddleRight,
        Handle::BottomLeft,
        Handle::BottomMiddle,
        Handle::BottomRight,
    ];

    /// World-space location of this handle on `rect` after rotating the
    /// bounding box by `angle_deg` about its center.
    ///
    /// This is where an editor draws the grab handle; hit-testing against
    /// it is the caller's concern.
    pub fn position(&self, rect: &Rectangle, angle_deg: f64) -> Point {
        let right = rect.x + rect.width;
        let top = rect.y + rect.height;
        let mid_x = rect.x + rect.width / 2.0;
        let mid_y = rect.y + rect.height / 2.0;
        let local = match self {
            Handle::TopLeft => Point::new(rect.x, top),
            Handle::TopMiddle => Point::new(mid_x, top),
            Handle::TopRight => Point::new(right, top),
            Handle::MiddleLeft => Point::new(rect.x, mid_y),
            Handle::MiddleRight => Point::new(right, mid_y),
            Handle::BottomLeft => Point::new(rect.x, rect.y),
            Handle::BottomMiddle => Point::new(mid_x, rect.y),
            Handle::BottomRight => Point::new(right, rect.y),
        };
        rotate_point(local, rect.center(), angle_deg)
    }
}
