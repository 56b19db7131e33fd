#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The request was structurally malformed and evaluation never started.
    #[error("Validation failed: {0}")]
    Validation(String),
}
