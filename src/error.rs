use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while attaching controllers to the live document.
///
/// Missing page elements are not errors; those controllers are simply inert.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
}

pub type BindResult<T> = Result<T, BindError>;
