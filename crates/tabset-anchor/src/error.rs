//! Anchor error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("Anchor link hash cannot be empty")]
    EmptyHash,
}
