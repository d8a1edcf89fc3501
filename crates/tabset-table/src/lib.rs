//! Tabset Table Operation Cells
//!
//! Decision logic for the selection and expansion cells of a table row:
//! which control a cell shows, whether it is checked, and which `select`
//! or `expand` event a user interaction raises.

mod cell;
mod column;
mod error;

pub use cell::{CellClass, CellContent, CellEvent, OperationCell};
pub use column::{OperationColumn, OperationKind, TableRecord};
pub use error::TableError;

pub type Result<T> = std::result::Result<T, TableError>;
