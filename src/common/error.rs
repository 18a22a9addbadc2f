use thiserror::Error;

/// Engine error types
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Course {0} already exists")]
    DuplicateCourse(String),

    #[error("Course {0} not found")]
    CourseNotFound(String),

    #[error("Already registered for course {0}")]
    AlreadyRegistered(String),

    #[error("Prerequisites not met for course {0}")]
    PrerequisiteUnmet(String),

    #[error("Registering {code} would raise the credit load from {current} by {adding}, above the limit of {limit}")]
    CreditOverflow {
        code: String,
        current: u32,
        adding: u32,
        limit: u32,
    },

    #[error("Cart total of {total} credits is below the minimum of {min}")]
    CartBelowMinimum { total: u32, min: u32 },

    #[error("Cart total of {total} credits exceeds the limit of {limit}")]
    CartAboveLimit { total: u32, limit: u32 },
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
