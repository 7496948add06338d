//! Derives the selected item from the wheel rotation.
//!
//! The selection is recomputed from scratch after every rotation mutation;
//! nothing here caches state, so a stale index is impossible by
//! construction.

/// Wraps any angle into `[0, 360)`.
pub fn normalize_360(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Index of the item whose resting angle is nearest the given rotation.
///
/// Works on the negated rotation plus the selection bias. The half step
/// added before the floor division makes a rotation exactly halfway between
/// two resting angles round to the higher index. Only meaningful for
/// rosters of at least two items; smaller rosters pin the selection to 0.
pub fn selected_index(rotation: f64, item_count: usize, selection_bias: f64) -> usize {
    if item_count < 2 {
        return 0;
    }
    let step = 360.0 / item_count as f64;
    let normalized = normalize_360(-(rotation + selection_bias));
    let index = (((normalized + step / 2.0) % 360.0) / step).floor() as usize;
    index.min(item_count - 1)
}

/// Rotation at which the given item sits exactly at the top of the wheel.
pub fn resting_rotation(index: usize, step_angle: f64) -> f64 {
    -(index as f64) * step_angle
}
