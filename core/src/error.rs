use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid checklist: {0}")]
    InvalidChecklist(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Why an asset has no content. Never fatal: checks turn it into a failing result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("no such file: {path}")]
    Missing { path: String },

    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("asset not declared in checklist: {name}")]
    Undeclared { name: String },
}
