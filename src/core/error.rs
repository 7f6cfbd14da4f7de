//! Error types for property capture

pub type Result<T> = std::result::Result<T, CaptureError>;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Property names must contain at least one non-whitespace character
    #[error("Invalid property name: '{name}'")]
    InvalidPropertyName { name: String },

    /// A member getter failed while a structure was being destructured
    #[error("Accessor for member '{member}' failed: {message}")]
    MemberAccess { member: String, message: String },

    /// JSON serialization error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl CaptureError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        CaptureError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid property name error
    pub fn property_name(name: impl Into<String>) -> Self {
        CaptureError::InvalidPropertyName { name: name.into() }
    }

    /// Create a member access error
    pub fn member_access(member: impl Into<String>, message: impl Into<String>) -> Self {
        CaptureError::MemberAccess {
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CaptureError::Other(msg.into())
    }
}
