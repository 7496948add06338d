//! Discrete input sources: keyboard, wheel scroll and item clicks.
//!
//! These bypass inertia and easing entirely; the rotation is reassigned to
//! its post-snap value in one step, interrupting any coasting or snapping
//! that was in flight.

use serde::{Deserialize, Serialize};

use crate::selection;
use crate::state::{Phase, WheelState};

/// Direction of one discrete navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Arrow keys step the selection left and right.
pub fn direction_for_key(key: &str) -> Option<NavDirection> {
    match key {
        "ArrowLeft" => Some(NavDirection::Previous),
        "ArrowRight" => Some(NavDirection::Next),
        _ => None,
    }
}

/// Scroll-to-direction mapping. A zero delta carries no sign and is
/// ignored.
pub fn direction_for_scroll(delta_y: f64) -> Option<NavDirection> {
    if delta_y > 0.0 {
        Some(NavDirection::Next)
    } else if delta_y < 0.0 {
        Some(NavDirection::Previous)
    } else {
        None
    }
}

/// One discrete step in the given direction. A no-op at the respective
/// boundary index and on non-interactive rosters. Returns whether the wheel
/// moved.
pub fn step(
    state: &mut WheelState,
    direction: NavDirection,
    current_index: usize,
    last_index: usize,
    step_angle: Option<f64>,
    now_ms: f64,
) -> bool {
    let Some(step_angle) = step_angle else {
        return false;
    };
    let target_index = match direction {
        NavDirection::Previous if current_index > 0 => current_index - 1,
        NavDirection::Next if current_index < last_index => current_index + 1,
        _ => return false,
    };
    settle_on(state, target_index, step_angle, now_ms);
    true
}

/// Item click: brings the clicked item straight to the top. Indices past
/// the roster are absorbed, not errors.
pub fn activate(
    state: &mut WheelState,
    index: usize,
    item_count: usize,
    step_angle: Option<f64>,
    now_ms: f64,
) -> bool {
    let Some(step_angle) = step_angle else {
        return false;
    };
    if index >= item_count {
        return false;
    }
    settle_on(state, index, step_angle, now_ms);
    true
}

fn settle_on(state: &mut WheelState, index: usize, step_angle: f64, now_ms: f64) {
    state.rotation_degrees = selection::resting_rotation(index, step_angle);
    state.angular_velocity = 0.0;
    state.phase = Phase::Idle;
    state.touch(now_ms);
}
