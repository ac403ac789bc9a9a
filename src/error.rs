//! Error types for turnout-servo.
//!
//! Provides unified error handling across configuration and servo control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all turnout-servo operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Servo operation error
    Servo(ServoError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Servo key not found in configuration
    ServoNotFound(heapless::String<32>),
    /// Servo entry has an empty display name
    EmptyName(heapless::String<32>),
    /// Endpoint angle outside the servo range (0-180)
    AngleOutOfRange(u16),
    /// Invalid limits (min must be < max)
    InvalidLimits {
        /// Minimum endpoint
        min: u16,
        /// Maximum endpoint
        max: u16,
    },
    /// Builder was missing a required part
    Missing(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Servo operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// The underlying driver rejected an attach, write, or read
    Driver,
    /// Operation requires `init()` first
    NotInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Servo(e) => write!(f, "Servo error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::ServoNotFound(name) => write!(f, "Servo '{}' not found", name),
            ConfigError::EmptyName(key) => write!(f, "Servo '{}' has an empty name", key),
            ConfigError::AngleOutOfRange(v) => {
                write!(f, "Angle {} out of range. Must be 0-180", v)
            }
            ConfigError::InvalidLimits { min, max } => {
                write!(f, "Invalid limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::Missing(what) => write!(f, "{} is required", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ServoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServoError::Driver => write!(f, "Servo driver operation failed"),
            ServoError::NotInitialized => write!(f, "Servo not initialized"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ServoError> for Error {
    fn from(e: ServoError) -> Self {
        Error::Servo(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ServoError {}
