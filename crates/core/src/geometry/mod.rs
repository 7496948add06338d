use serde::{Deserialize, Serialize};

/// Screen-space point in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Live geometry of the circle the items sit on.
///
/// Callers re-read this from the container on every frame and every pointer
/// event; it is never cached inside the engine, so a resize mid-drag takes
/// effect before the next render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Point,
    pub radius: f64,
}

impl Viewport {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Anchors the circle at the bottom-center of a container, showing the
    /// upper half of the wheel.
    pub fn bottom_center(width: f64, height: f64, radius: f64) -> Self {
        Self::new(Point::new(width / 2.0, height), radius)
    }

    /// A viewport is usable once the first layout measurement has produced a
    /// finite center and a positive radius.
    pub fn is_usable(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite() && self.radius > 0.0
    }

    fn sanitized_center(&self) -> Point {
        if self.center.is_finite() {
            self.center
        } else {
            Point::default()
        }
    }
}

/// Where one item sits this frame, plus the rotation the presentation layer
/// applies to the item itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub display_rotation: f64,
    pub is_active: bool,
}

/// Pure mapping from item index and wheel rotation to screen space.
///
/// `angle = i * step + rotation - 90` puts index 0 at twelve o'clock while
/// the wheel is at rest; the `+90` on the display rotation cancels that
/// phase so the item's own art stays oriented along the circle. Before the
/// viewport is usable every item collapses onto the (sanitized) center
/// rather than producing NaN positions.
pub fn place_item(index: usize, step_angle: f64, rotation: f64, viewport: &Viewport) -> Placement {
    let angle = index as f64 * step_angle + rotation - 90.0;
    let center = viewport.sanitized_center();
    let radius = if viewport.is_usable() {
        viewport.radius
    } else {
        0.0
    };
    let radians = angle.to_radians();
    Placement {
        x: center.x + radians.cos() * radius,
        y: center.y + radians.sin() * radius,
        display_rotation: angle + 90.0,
        is_active: false,
    }
}

/// Angle of a pointer position around the circle center, in degrees within
/// (-180, 180]. A pointer exactly on the center yields 0.
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Point::new(400.0, 600.0), 300.0)
    }

    #[test]
    fn identical_inputs_yield_identical_placements() {
        let step = 360.0 / 7.0;
        let a = place_item(3, step, 42.5, &viewport());
        let b = place_item(3, step, 42.5, &viewport());
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.display_rotation, b.display_rotation);
    }

    #[test]
    fn index_zero_rests_at_twelve_o_clock() {
        let step = 360.0 / 7.0;
        let placement = place_item(0, step, 0.0, &viewport());
        assert!((placement.x - 400.0).abs() < 1e-9);
        assert!((placement.y - 300.0).abs() < 1e-9);
        assert!(placement.display_rotation.abs() < 1e-9);
    }

    #[test]
    fn unmeasured_viewport_collapses_to_center() {
        let degenerate = Viewport::new(Point::new(400.0, 600.0), 0.0);
        let placement = place_item(2, 360.0 / 7.0, 10.0, &degenerate);
        assert_eq!(placement.x, 400.0);
        assert_eq!(placement.y, 600.0);

        let unmeasured = Viewport::new(Point::new(f64::NAN, f64::NAN), f64::NAN);
        let placement = place_item(2, 360.0 / 7.0, 10.0, &unmeasured);
        assert_eq!(placement.x, 0.0);
        assert_eq!(placement.y, 0.0);
    }

    #[test]
    fn pointer_angle_covers_all_quadrants() {
        let center = Point::new(0.0, 0.0);
        assert!((pointer_angle(Point::new(10.0, 0.0), center) - 0.0).abs() < 1e-9);
        assert!((pointer_angle(Point::new(0.0, 10.0), center) - 90.0).abs() < 1e-9);
        assert!((pointer_angle(Point::new(-10.0, 0.0), center) - 180.0).abs() < 1e-9);
        assert!((pointer_angle(Point::new(0.0, -10.0), center) + 90.0).abs() < 1e-9);
    }
}
