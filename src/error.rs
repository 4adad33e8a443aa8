//! Error types for the visual_colors library

use thiserror::Error;

/// Result type alias for visual_colors operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color normalization and configuration
#[derive(Error, Debug)]
pub enum ColorError {
    /// Descriptor shape is not a number, string, array or object
    #[error("Unrecognized color descriptor: {shape}")]
    UnrecognizedShape { shape: &'static str },

    /// String is neither a hex color nor an rgb()/rgba() function
    #[error("Unrecognized color string: {input:?}")]
    UnmatchedString { input: String },

    /// Hex chunk contains characters outside 0-9a-fA-F
    #[error("Invalid hex digits {chunk:?} in {input:?}")]
    InvalidHexDigits { input: String, chunk: String },

    /// Functional string component could not be parsed
    #[error("Invalid color component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },

    /// Descriptor supplies more channels than red, green, blue, alpha
    #[error("Too many color channels: {count} (maximum 4)")]
    TooManyChannels { count: usize },

    /// Channel value is NaN or infinite
    #[error("Non-finite channel value: {value}")]
    NonFiniteChannel { value: f64 },

    /// Configuration could not be loaded, saved or resolved
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this error means the descriptor could not be normalized
    pub fn is_unrecognized_descriptor(&self) -> bool {
        !matches!(self, ColorError::ConfigError { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::ConfigError { message, .. } => {
                format!("Could not load color settings: {}", message)
            }
            ColorError::TooManyChannels { count } => {
                format!(
                    "A color has {} channels. Use at most red, green, blue and alpha.",
                    count
                )
            }
            _ => "Could not understand the color. Use #rgb, #rrggbb, rgb(), rgba(), \
                  a number, an array or a {red, green, blue, alpha} object."
                .to_string(),
        }
    }
}
