//! Error types for the Commons domain.

use thiserror::Error;

/// Input rejections surfaced to the interactive caller as inline messages.
///
/// These never unwind a view: every operation that can produce one leaves the
/// state it was called on untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select an input type")]
    MissingFieldType,

    #[error("Open the response form first")]
    FormNotOpen,

    #[error("Input name is required")]
    BlankName,

    #[error("Add at least one item to a {0} input")]
    NoOptions(&'static str),

    #[error("Please enter a response")]
    BlankText,

    #[error("Please select an option")]
    NoOptionSelected,

    #[error("Please select at least one option")]
    NoOptionsChecked,

    #[error("Community title is required")]
    BlankTitle,

    #[error("Community description is required")]
    BlankDescription,

    #[error("Add at least one community input")]
    NoFields,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// A shared error type for the Commons crates.
///
/// Validation failures and missing entities are modelled here so that layers
/// above the core (storage, use cases) can report them uniformly.
#[derive(Error, Debug, Clone)]
pub enum CommonsError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommonsError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for CommonsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CommonsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CommonsError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CommonsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CommonsError>`.
pub type Result<T> = std::result::Result<T, CommonsError>;
