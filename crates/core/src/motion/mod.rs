//! Per-frame motion: inertial coasting and convergence onto a resting
//! angle.

use serde::Serialize;

use crate::config::MotionConfig;
use crate::selection;
use crate::state::{Phase, WheelState};

/// What the frame step did, so the host knows whether scheduling another
/// frame is worth it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FrameProgress {
    /// A pointer owns the wheel; the frame step leaves it alone.
    Dragging,
    /// Residual velocity moved the wheel.
    Coasting,
    /// The wheel eased toward, or jumped onto, its resting angle.
    Snapping,
    /// Nothing to do until the next interaction.
    Settled,
}

/// Advances the wheel by one frame.
///
/// While the velocity magnitude stays above the threshold the frame is pure
/// inertia under exponential friction; the magnitude check itself is the
/// hand-over to snapping, no extra flag. Below the threshold, an idle time
/// past the timeout becomes a single hard jump onto the resting angle,
/// deliberately discontinuous; otherwise the rotation eases toward the
/// target by a fixed fraction per frame until it is within tolerance. The
/// easing is cosmetic, not a spring; it cannot overshoot.
pub fn advance_frame(
    state: &mut WheelState,
    current_index: usize,
    step_angle: Option<f64>,
    tuning: &MotionConfig,
    now_ms: f64,
) -> FrameProgress {
    if state.is_dragging() {
        return FrameProgress::Dragging;
    }

    let Some(step_angle) = step_angle else {
        // Nothing to coast against or snap onto.
        state.angular_velocity = 0.0;
        state.phase = Phase::Idle;
        return FrameProgress::Settled;
    };

    if state.angular_velocity.abs() > tuning.min_velocity {
        state.rotation_degrees += state.angular_velocity;
        state.angular_velocity *= tuning.friction;
        state.phase = Phase::Coasting;
        return FrameProgress::Coasting;
    }

    let target = selection::resting_rotation(current_index, step_angle);

    if state.idle_for(now_ms) > tuning.idle_snap_ms {
        let moved = state.rotation_degrees != target || state.angular_velocity != 0.0;
        state.rotation_degrees = target;
        state.angular_velocity = 0.0;
        state.phase = Phase::Idle;
        return if moved {
            FrameProgress::Snapping
        } else {
            FrameProgress::Settled
        };
    }

    if (state.rotation_degrees - target).abs() > tuning.snap_tolerance {
        state.rotation_degrees += (target - state.rotation_degrees) * tuning.snap_smoothing;
        state.phase = Phase::Snapping;
        return FrameProgress::Snapping;
    }

    state.angular_velocity = 0.0;
    state.phase = Phase::Idle;
    FrameProgress::Settled
}
