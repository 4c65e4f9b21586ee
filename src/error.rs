use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid order {order}: {reason}")]
    InvalidOrder { order: i32, reason: String },

    #[error("Invalid boundary side: {0:?}")]
    InvalidSide(String),

    #[error("Member index {index} out of range for boundary family of order {order}")]
    IndexOutOfRange { index: isize, order: usize },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Filter design failed: {0}")]
    FilterDesign(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
