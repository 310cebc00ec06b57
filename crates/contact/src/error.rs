use crate::ValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", .0.first_error().unwrap_or("invalid form"))]
    Validation(ValidationResult),

    #[error("a submission is already in progress")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
