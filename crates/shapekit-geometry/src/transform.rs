//! Rotation-aware resize pipeline for rectangles.
//!
//! A drag of one of the eight bounding-box handles is reduced to a pair of
//! anchor points: the corner that stays fixed under the drag and the point
//! that follows the pointer. Reconstructing the axis-aligned rectangle from
//! that pair is a per-handle formula. Each function is a stateless,
//! single-shot computation over value types; callers feed in the pointer
//! position and rotation angle and consume the returned rectangle.

use tracing::trace;

use crate::shapes::{rotate_point, Handle, Point, Rectangle};

/// Re-derives two diagonal corners of a rectangle around a moved rotation
/// center.
///
/// When an edit shifts the rectangle's geometric center, the two corners
/// that defined the rotated rectangle must be re-expressed consistently
/// around the new center:
///
/// 1. rotate `corner_a` about `center` by `angle_deg`;
/// 2. the midpoint of the rotated corner and `corner_c` becomes the new
///    center;
/// 3. rotate both points back by `-angle_deg` about that new center.
///
/// `corner_a` and `corner_c` are expected to be diagonal; no validation is
/// performed.
pub fn adjust_points(
    corner_a: Point,
    corner_c: Point,
    center: Point,
    angle_deg: f64,
) -> (Point, Point) {
    let rotated_a = rotate_point(corner_a, center, angle_deg);
    let new_center = rotated_a.midpoint(&corner_c);
    (
        rotate_point(rotated_a, new_center, -angle_deg),
        rotate_point(corner_c, new_center, -angle_deg),
    )
}

/// Resolves a handle drag to its `(fixed, moving)` anchor pair.
///
/// `target` is the dragged handle's new position in world space and
/// `angle_deg` the rectangle's current rotation about its center. For
/// corner handles the diagonally opposite corner stays fixed and the target
/// is taken as given. For edge-midpoint handles only one axis of the
/// opposite edge may move: the unconstrained coordinate is interpolated
/// from the target expressed in the rectangle's unrotated local frame, then
/// re-rotated into world space, so the untouched dimension is unaffected by
/// the drag.
pub fn resize_anchors(
    rect: &Rectangle,
    target: Point,
    angle_deg: f64,
    handle: Handle,
) -> (Point, Point) {
    let center = rect.center();
    let right = rect.x + rect.width;
    let top = rect.y + rect.height;
    // Target in the rectangle's unrotated local frame.
    let local_target = rotate_point(target, center, -angle_deg);

    match handle {
        Handle::TopRight => (Point::new(rect.x, rect.y), target),
        Handle::BottomRight => (Point::new(rect.x, top), target),
        Handle::TopLeft => (Point::new(right, rect.y), target),
        Handle::BottomLeft => (Point::new(right, top), target),
        Handle::MiddleRight => {
            let interpolated = Point::new(local_target.x, top);
            (
                Point::new(rect.x, rect.y),
                rotate_point(interpolated, center, angle_deg),
            )
        }
        Handle::MiddleLeft => {
            let interpolated = Point::new(local_target.x, top);
            (
                Point::new(right, rect.y),
                rotate_point(interpolated, center, angle_deg),
            )
        }
        Handle::TopMiddle => {
            let interpolated = Point::new(right, local_target.y);
            (
                Point::new(rect.x, rect.y),
                rotate_point(interpolated, center, angle_deg),
            )
        }
        Handle::BottomMiddle => {
            let interpolated = Point::new(right, local_target.y);
            (
                Point::new(rect.x, top),
                rotate_point(interpolated, center, angle_deg),
            )
        }
    }
}

/// Reconstructs the axis-aligned rectangle from a `(fixed, moving)` anchor
/// pair for the given handle.
///
/// Width and height are not clamped: dragging past the opposite edge
/// produces a negative dimension (flip). Callers keep the raw values or
/// fold them away with [`Rectangle::normalized`].
pub fn rect_from_anchors(fixed: Point, moving: Point, handle: Handle) -> Rectangle {
    match handle {
        Handle::TopRight | Handle::MiddleRight | Handle::TopMiddle => {
            Rectangle::new(fixed.x, fixed.y, moving.x - fixed.x, moving.y - fixed.y)
        }
        Handle::BottomRight => {
            let height = fixed.y - moving.y;
            Rectangle::new(fixed.x, fixed.y - height, moving.x - fixed.x, height)
        }
        Handle::TopLeft | Handle::MiddleLeft => {
            let height = moving.y - fixed.y;
            Rectangle::new(moving.x, moving.y - height, fixed.x - moving.x, height)
        }
        Handle::BottomLeft => {
            Rectangle::new(moving.x, moving.y, fixed.x - moving.x, fixed.y - moving.y)
        }
        Handle::BottomMiddle => {
            Rectangle::new(fixed.x, moving.y, moving.x - fixed.x, fixed.y - moving.y)
        }
    }
}

/// Resizes `rect` by dragging `handle` to `target` while the rectangle is
/// rotated by `angle_deg` about its center.
///
/// Composition of [`resize_anchors`] and [`rect_from_anchors`].
pub fn resize_rect(rect: &Rectangle, target: Point, angle_deg: f64, handle: Handle) -> Rectangle {
    let (fixed, moving) = resize_anchors(rect, target, angle_deg, handle);
    let resized = rect_from_anchors(fixed, moving, handle);
    trace!(
        "resize {:?} to ({:.3}, {:.3}) at {:.1} deg -> {:?}",
        handle,
        target.x,
        target.y,
        angle_deg,
        resized
    );
    resized
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_adjust_points_identity_at_zero_angle() {
        let a = Point::new(0.0, 0.0);
        let c = Point::new(4.0, 2.0);
        let (a2, c2) = adjust_points(a, c, Point::new(2.0, 1.0), 0.0);
        assert_eq!(a2, a);
        assert_eq!(c2, c);
    }

    #[test]
    fn test_adjust_points_recenters_on_midpoint() {
        let a = Point::new(0.0, 0.0);
        let c = Point::new(6.0, 0.0);
        let old_center = Point::new(2.0, 0.0);
        let angle = 30.0;

        let rotated_a = rotate_point(a, old_center, angle);
        let expected_center = rotated_a.midpoint(&c);

        let (a2, c2) = adjust_points(a, c, old_center, angle);
        let center = a2.midpoint(&c2);
        assert!(center.distance_to(&expected_center) < EPS);
        // Un-rotation about the new center preserves the diagonal length.
        assert!((a2.distance_to(&c2) - rotated_a.distance_to(&c)).abs() < EPS);
    }

    #[test]
    fn test_resize_anchors_bottom_right_at_45_deg() {
        let rect = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        let target = Point::new(3.0, 3.0);
        let (fixed, moving) = resize_anchors(&rect, target, 45.0, Handle::BottomRight);
        assert_eq!(fixed, Point::new(0.0, 2.0));
        assert_eq!(moving, target);
    }

    #[test]
    fn test_rect_from_anchors_bottom_right_flip() {
        let rect = rect_from_anchors(Point::new(0.0, 2.0), Point::new(3.0, 3.0), Handle::BottomRight);
        assert_eq!(rect, Rectangle::new(0.0, 3.0, 3.0, -1.0));
    }

    #[test]
    fn test_middle_handles_keep_unconstrained_axis() {
        let rect = Rectangle::new(0.0, 0.0, 4.0, 2.0);
        // Drag the right edge outward; height must not change.
        let resized = resize_rect(&rect, Point::new(6.0, 5.0), 0.0, Handle::MiddleRight);
        assert!((resized.width - 6.0).abs() < EPS);
        assert!((resized.height - 2.0).abs() < EPS);
        assert!((resized.y - 0.0).abs() < EPS);

        // Drag the top edge upward; width must not change.
        let resized = resize_rect(&rect, Point::new(9.0, 3.0), 0.0, Handle::TopMiddle);
        assert!((resized.width - 4.0).abs() < EPS);
        assert!((resized.height - 3.0).abs() < EPS);
        assert!((resized.x - 0.0).abs() < EPS);
    }
}
