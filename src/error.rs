use thiserror::Error;

pub type VisResult<T> = Result<T, VisError>;

#[derive(Debug, Error)]
pub enum VisError {
    #[error("invalid container size: width={width}, height={height}")]
    InvalidContainer { width: u32, height: u32 },

    /// Query shape falls outside the declared field-count bounds.
    /// The message is host-facing and names the violated bound.
    #[error("{0}")]
    ShapeViolation(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
