use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, ToolWheelError};

/// Per-frame motion tuning for one selector instance.
///
/// Every value is a named knob; the defaults are the shipped tuning.
/// Presets can be loaded from a JSON file instead of editing source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Multiplier applied to the angular velocity once per coasting frame.
    pub friction: f64,
    /// Velocity magnitude in degrees per frame below which coasting ends.
    pub min_velocity: f64,
    /// Fraction of the remaining distance covered per snapping frame.
    pub snap_smoothing: f64,
    /// Distance to the resting angle, in degrees, treated as close enough to
    /// stop easing.
    pub snap_tolerance: f64,
    /// Idle time in milliseconds after which the wheel jumps straight to the
    /// resting angle instead of easing toward it.
    pub idle_snap_ms: f64,
    /// Converts the last drag delta into the release velocity.
    pub drag_gain: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            friction: 0.92,
            min_velocity: 0.02,
            snap_smoothing: 0.08,
            snap_tolerance: 0.5,
            idle_snap_ms: 3000.0,
            drag_gain: 0.6,
        }
    }
}

/// Top-level configuration for a selector instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Constant bias in degrees folded into the rotation before the selected
    /// index is derived. Item placement is unaffected.
    pub selection_bias: f64,
    pub motion: MotionConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            selection_bias: 10.0,
            motion: MotionConfig::default(),
        }
    }
}

impl SelectorConfig {
    /// Reads a configuration file in JSON form. Missing fields fall back to
    /// the defaults, so partial presets are fine.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every tuning value for a range the motion step can work with.
    pub fn validate(&self) -> Result<()> {
        let motion = &self.motion;
        if !(motion.friction > 0.0 && motion.friction < 1.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "friction must lie in (0, 1), got {}",
                motion.friction
            )));
        }
        if !(motion.min_velocity > 0.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "min_velocity must be positive, got {}",
                motion.min_velocity
            )));
        }
        if !(motion.snap_smoothing > 0.0 && motion.snap_smoothing <= 1.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "snap_smoothing must lie in (0, 1], got {}",
                motion.snap_smoothing
            )));
        }
        if !(motion.snap_tolerance > 0.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "snap_tolerance must be positive, got {}",
                motion.snap_tolerance
            )));
        }
        if !(motion.idle_snap_ms >= 0.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "idle_snap_ms must not be negative, got {}",
                motion.idle_snap_ms
            )));
        }
        if !(motion.drag_gain > 0.0) {
            return Err(ToolWheelError::invalid_config(format!(
                "drag_gain must be positive, got {}",
                motion.drag_gain
            )));
        }
        if !self.selection_bias.is_finite() {
            return Err(ToolWheelError::invalid_config(
                "selection_bias must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        SelectorConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_out_of_range_friction() {
        let mut config = SelectorConfig::default();
        config.motion.friction = 1.0;
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("friction"));
    }

    #[test]
    fn partial_preset_fills_in_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{ "motion": { "friction": 0.9 } }"#).unwrap();
        assert_eq!(config.motion.friction, 0.9);
        assert_eq!(config.motion.idle_snap_ms, 3000.0);
        assert_eq!(config.selection_bias, 10.0);
    }
}
