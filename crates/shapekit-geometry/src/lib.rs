//! # ShapeKit Geometry
//!
//! Computational core for interactive rectangle editing. Given a rectangle,
//! a rotation angle, and the new position of a dragged resize handle, this
//! crate computes the rectangle's new geometry, consistently for all eight
//! handles and arbitrary rotation angles.
//!
//! ## Core Components
//!
//! ### Primitives
//! - **Point / Rectangle**: immutable value types with structural equality
//! - **Handle**: the eight bounding-box control points (corners and edge
//!   midpoints)
//! - **Rotation**: point rotation about an arbitrary origin, degrees at the
//!   API boundary
//!
//! ### Resize Pipeline
//! - **Anchor resolution**: a handle drag becomes a `(fixed, moving)` anchor
//!   pair
//! - **Reconstruction**: the anchor pair becomes an axis-aligned rectangle,
//!   with negative dimensions preserved for flip-through drags
//! - **Anchor adjustment**: re-derives diagonal corners around a moved
//!   rotation center
//!
//! ## Architecture
//!
//! ```text
//! Caller (hit-testing, pointer tracking, rendering)
//!   └── resize_anchors (handle + target -> fixed/moving pair)
//!         └── rotate_point (world <-> local frame)
//!   └── rect_from_anchors (fixed/moving pair -> rectangle)
//! ```
//!
//! Every operation is a deterministic, side-effect-free transformation of
//! immutable inputs; calls are safe from any number of threads.
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_geometry::{resize_rect, Handle, Point, Rectangle};
//!
//! let rect = Rectangle::new(0.0, 0.0, 2.0, 2.0);
//! let resized = resize_rect(&rect, Point::new(3.0, 3.0), 45.0, Handle::BottomRight);
//! assert_eq!(resized, Rectangle::new(0.0, 3.0, 3.0, -1.0));
//! ```

pub mod error;
pub mod shapes;
pub mod transform;

pub use error::{Error, Result};
pub use shapes::{rotate_point, Handle, Point, Rectangle};
pub use transform::{adjust_points, rect_from_anchors, resize_anchors, resize_rect};
