//! Error handling for the sensorscope crate.

/// A specialized `Result` type for sensorscope operations.
pub type Result<T> = std::result::Result<T, SensorError>;

/// The main error type for sensor and reporting operations.
///
/// Read failures carry enough type information for callers to distinguish a
/// missing capability from a missing tool or a malformed payload; the polling
/// loop degrades all of them to "no data this tick".
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external diagnostic tool is not installed
    #[error("tool not found: {0}")]
    ToolMissing(String),

    /// The sensor capability is absent or produced nothing usable
    #[error("sensors unavailable: {0}")]
    Unavailable(String),

    /// Sensor output could not be parsed
    #[error("failed to parse sensor output: {0}")]
    Parse(String),

    /// Chart rendering failed
    #[error("render error: {0}")]
    Render(String),

    /// Serializing a data structure failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SensorError {
    /// Create a new missing-tool error
    pub fn tool_missing(msg: impl Into<String>) -> Self {
        Self::ToolMissing(msg.into())
    }

    /// Create a new unavailable-capability error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new render error
    pub fn render_error(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
