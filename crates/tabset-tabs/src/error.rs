//! Tab group error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabsError {
    #[error("Cannot switch selection mode at runtime: {from} -> {to}")]
    ModeSwitch { from: String, to: String },

    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },
}
