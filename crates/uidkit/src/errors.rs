/// Error type for the fallible edges of the crate (config loading, logging
/// setup).
///
/// The validation predicates themselves never return this: they are total
/// functions that degrade to safe defaults, so callers can use them as gating
/// checks without error handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
