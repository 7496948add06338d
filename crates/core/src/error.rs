/// Result alias that carries the custom [`ToolWheelError`] type.
pub type Result<T> = std::result::Result<T, ToolWheelError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum ToolWheelError {
    /// A tuning value or roster/bias combination the engine cannot operate
    /// on, e.g. a friction factor outside (0, 1) or a selection bias wider
    /// than half a step.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Wrapper around standard IO errors raised while reading files.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around JSON (de)serialization failures.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl ToolWheelError {
    /// Creates a configuration error from any printable message.
    pub fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
