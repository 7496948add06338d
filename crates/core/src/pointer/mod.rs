//! Converts raw pointer events into signed angular deltas.

use crate::geometry::{self, Point};
use crate::state::{DragSession, Phase, WheelState};

/// Wraps a raw angular delta into `(-180, 180]` so a pointer crossing the
/// atan2 seam reads as a small movement, not a full turn.
pub fn wrap_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Pointer down: the pointer takes ownership of the wheel. Any in-flight
/// coasting or snapping is discarded on the spot.
pub fn press(state: &mut WheelState, pointer: Point, center: Point, now_ms: f64) {
    let angle = geometry::pointer_angle(pointer, center);
    state.angular_velocity = 0.0;
    state.phase = Phase::Dragging(DragSession {
        last_pointer_angle: angle,
        started_at_ms: now_ms,
    });
    state.touch(now_ms);
}

/// Pointer move while dragging. Ignored in every other phase.
///
/// The delta is zeroed, not the rotation bounded: the selection may not
/// advance past the first item in the previous direction or past the last
/// in the next direction, but rotation itself stays an unbounded real.
pub fn drag(
    state: &mut WheelState,
    pointer: Point,
    center: Point,
    now_ms: f64,
    current_index: usize,
    last_index: usize,
    drag_gain: f64,
) {
    let Phase::Dragging(session) = &mut state.phase else {
        return;
    };

    let angle = geometry::pointer_angle(pointer, center);
    let mut delta = wrap_delta(angle - session.last_pointer_angle);
    if (current_index == 0 && delta > 0.0) || (current_index == last_index && delta < 0.0) {
        delta = 0.0;
    }

    session.last_pointer_angle = angle;
    state.rotation_degrees += delta;
    state.angular_velocity = delta * drag_gain;
    state.touch(now_ms);
}

/// Pointer up: hands the wheel over to coasting and starts the idle clock.
pub fn release(state: &mut WheelState, now_ms: f64) {
    if !state.is_dragging() {
        return;
    }
    state.phase = Phase::Coasting;
    state.touch(now_ms);
}
