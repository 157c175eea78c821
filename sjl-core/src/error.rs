/// Error types for the springshed dashboard core
use thiserror::Error;

/// Main error type for generator and remote store operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpringshedError {
    /// The remote store has nothing stored for this device
    #[error("No data found for device: {device_id}")]
    MissingRemoteData { device_id: String },

    /// A requested sample size can't be met by the available range
    #[error("Degenerate input range: {0}")]
    DegenerateInputRange(String),

    /// Year outside what the calendar arithmetic can represent
    #[error("Year out of supported calendar range: {0}")]
    InvalidYear(i32),

    /// Device id that can't be used as a database key
    #[error("Invalid device id: {0:?}")]
    InvalidDeviceId(String),

    /// Remote request or response failure
    #[error("Remote request failed: {0}")]
    Remote(String),

    /// Malformed remote store configuration
    #[error("Invalid remote configuration: {0}")]
    Config(String),
}

/// Type alias for Results using SpringshedError
pub type Result<T> = std::result::Result<T, SpringshedError>;
