use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Actor not available")]
    ActorUnavailable,

    #[error("Remote call failed: {0}")]
    Remote(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        AppError::Remote(message.into())
    }

    /// Stable machine-readable code, logged with failed mutations.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::ActorUnavailable => "ACTOR_UNAVAILABLE",
            AppError::Remote(_) => "REMOTE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidPrincipal(_) => "INVALID_PRINCIPAL",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message suitable for a toast notification.
    ///
    /// Remote and validation messages are passed through verbatim since the
    /// actor's rejection text is the most useful thing to show.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Remote(msg) | AppError::Unauthorized(msg) => {
                msg.clone()
            }
            AppError::ActorUnavailable => "Actor not available".to_string(),
            AppError::NotFound(msg) => format!("{msg} not found"),
            AppError::InvalidPrincipal(_) => "Invalid profile reference".to_string(),
            AppError::Configuration(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => "Something went wrong".to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
