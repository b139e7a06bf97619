use crate::DType;
use thiserror::Error;

/// Core error type for frame construction and preprocessing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrepError {
    #[error("{transformer}: transform() called before fit()")]
    NotFitted { transformer: &'static str },

    #[error("Column '{column}' has unsupported dtype {dtype:?}")]
    UnsupportedColumnType { column: String, dtype: DType },

    #[error("Schema mismatch: {reason}")]
    SchemaMismatch { reason: String },

    #[error("Unknown category '{value}' in '{column}': not seen during fit")]
    UnknownCategory { column: String, value: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("Duplicate column name '{column}'")]
    DuplicateColumn { column: String },

    #[error("Column '{column}' is empty: cannot fit statistics")]
    EmptyColumn { column: String },
}

pub type PrepResult<T> = Result<T, PrepError>;
