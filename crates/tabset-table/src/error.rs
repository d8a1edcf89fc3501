//! Table error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Column {column} does not support {operation}")]
    UnsupportedOperation {
        operation: &'static str,
        column: String,
    },
}
