use serde::Serialize;

/// Ephemeral bookkeeping that exists only while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragSession {
    /// Pointer angle seen by the most recent event, in degrees.
    pub last_pointer_angle: f64,
    pub started_at_ms: f64,
}

/// Explicit motion phase of the wheel.
///
/// The tagged variant makes the transitions checkable, instead of inferring
/// them from flag combinations, and carries the drag session only while one
/// actually exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Phase {
    /// Nothing moves; the wheel waits for input.
    Idle,
    /// A pointer owns the wheel; rotation follows the pointer directly.
    Dragging(DragSession),
    /// Rotation changes solely from decaying velocity after a release.
    Coasting,
    /// Rotation is being pulled toward the nearest resting angle.
    Snapping,
}

impl Phase {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Phase::Dragging(_))
    }
}

/// Mutable state of one selector instance.
///
/// Exactly one owner mutates this, strictly interleaved between input
/// handlers and the per-frame step; rotation itself is unbounded between
/// snaps, only directional deltas are clamped at the roster boundaries.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WheelState {
    pub rotation_degrees: f64,
    pub angular_velocity: f64,
    pub phase: Phase,
    /// Wall-clock timestamp in milliseconds of the last interaction; feeds
    /// the idle snap.
    pub last_interaction_ms: f64,
}

impl WheelState {
    pub fn new() -> Self {
        Self {
            rotation_degrees: 0.0,
            angular_velocity: 0.0,
            phase: Phase::Idle,
            last_interaction_ms: 0.0,
        }
    }

    /// Restamps the idle clock.
    pub fn touch(&mut self, now_ms: f64) {
        self.last_interaction_ms = now_ms;
    }

    /// Milliseconds since the last interaction. Clocks that jump backwards
    /// read as zero idle time rather than a negative one.
    pub fn idle_for(&self, now_ms: f64) -> f64 {
        (now_ms - self.last_interaction_ms).max(0.0)
    }

    pub fn is_dragging(&self) -> bool {
        self.phase.is_dragging()
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}
