//! Operation cell
//!
//! ```text
//! selection + multi  -> checkbox   (checked: key in selection)
//! selection + radio  -> radio      (checked: key is first selected)
//! expand             -> button     (only with has_expand and an expandable row)
//! custom             -> host content
//! ```

use serde::Serialize;

use crate::column::{OperationColumn, OperationKind, TableRecord};
use crate::error::TableError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase")]
pub enum CellContent {
    Checkbox { checked: bool, disabled: bool },
    Radio { checked: bool, disabled: bool },
    ExpandButton { expanded: bool },
    Custom { name: String },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum CellEvent {
    /// New selection set for the table
    Select { keys: Vec<String> },
    Expand { key: String },
}

/// Modifier classes of the cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellClass {
    pub checkbox: bool,
    pub radio: bool,
    pub expand: bool,
}

pub struct OperationCell<'a> {
    record: &'a TableRecord,
    column: &'a OperationColumn,
    is_radio: bool,
    has_expand: bool,
    selected: &'a [String],
    expanded: &'a [String],
}

impl<'a> OperationCell<'a> {
    pub fn new(record: &'a TableRecord, column: &'a OperationColumn) -> Self {
        Self {
            record,
            column,
            is_radio: false,
            has_expand: false,
            selected: &[],
            expanded: &[],
        }
    }

    pub fn radio(mut self, is_radio: bool) -> Self {
        self.is_radio = is_radio;
        self
    }

    pub fn has_expand(mut self, has_expand: bool) -> Self {
        self.has_expand = has_expand;
        self
    }

    pub fn selected(mut self, keys: &'a [String]) -> Self {
        self.selected = keys;
        self
    }

    pub fn expanded(mut self, keys: &'a [String]) -> Self {
        self.expanded = keys;
        self
    }

    fn is_checked(&self) -> bool {
        if self.is_radio {
            self.selected.first() == Some(&self.record.key)
        } else {
            self.selected.contains(&self.record.key)
        }
    }

    fn is_expanded(&self) -> bool {
        self.expanded.contains(&self.record.key)
    }

    pub fn content(&self) -> CellContent {
        match &self.column.kind {
            OperationKind::Selection if self.is_radio => CellContent::Radio {
                checked: self.is_checked(),
                disabled: self.record.disabled,
            },
            OperationKind::Selection => CellContent::Checkbox {
                checked: self.is_checked(),
                disabled: self.record.disabled,
            },
            OperationKind::Expand if self.has_expand && self.record.expandable => {
                CellContent::ExpandButton {
                    expanded: self.is_expanded(),
                }
            }
            OperationKind::Expand => CellContent::Empty,
            OperationKind::Custom(name) => CellContent::Custom { name: name.clone() },
        }
    }

    pub fn class(&self) -> CellClass {
        let selection = self.column.kind == OperationKind::Selection;
        CellClass {
            checkbox: selection && !self.is_radio,
            radio: selection && self.is_radio,
            expand: self.column.kind == OperationKind::Expand,
        }
    }

    /// User toggled the selection control to `checked`.
    ///
    /// Radio cells only report being checked, always as a single key.
    pub fn toggle_selection(&self, checked: bool) -> Result<Option<CellEvent>> {
        if self.column.kind != OperationKind::Selection {
            return Err(self.unsupported("selection"));
        }
        if self.record.disabled {
            tracing::debug!(key = %self.record.key, "Ignoring selection of disabled row");
            return Ok(None);
        }

        let key = &self.record.key;
        let keys = if self.is_radio {
            if !checked {
                return Ok(None);
            }
            vec![key.clone()]
        } else if checked {
            let mut keys = self.selected.to_vec();
            if !keys.contains(key) {
                keys.push(key.clone());
            }
            keys
        } else {
            self.selected.iter().filter(|k| *k != key).cloned().collect()
        };

        Ok(Some(CellEvent::Select { keys }))
    }

    /// User pressed the expand button
    pub fn toggle_expand(&self) -> Result<Option<CellEvent>> {
        if self.column.kind != OperationKind::Expand {
            return Err(self.unsupported("expand"));
        }
        if !self.has_expand || !self.record.expandable {
            return Ok(None);
        }
        Ok(Some(CellEvent::Expand {
            key: self.record.key.clone(),
        }))
    }

    fn unsupported(&self, operation: &'static str) -> TableError {
        TableError::UnsupportedOperation {
            operation,
            column: self.column.kind.name().to_string(),
        }
    }
}
