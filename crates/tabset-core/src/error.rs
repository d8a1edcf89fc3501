//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tabs(#[from] tabset_tabs::TabsError),

    #[error("Table error: {0}")]
    Table(#[from] tabset_table::TableError),

    #[error("Anchor error: {0}")]
    Anchor(#[from] tabset_anchor::AnchorError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tab group disposed")]
    Disposed,
}
