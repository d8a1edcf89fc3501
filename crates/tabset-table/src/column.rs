//! Operation columns and row records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Selection,
    Expand,
    /// Host rendered column, identified by name
    Custom(String),
}

impl OperationKind {
    pub fn name(&self) -> &str {
        match self {
            OperationKind::Selection => "selection",
            OperationKind::Expand => "expand",
            OperationKind::Custom(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationColumn {
    pub kind: OperationKind,
}

impl OperationColumn {
    pub fn selection() -> Self {
        Self {
            kind: OperationKind::Selection,
        }
    }

    pub fn expand() -> Self {
        Self {
            kind: OperationKind::Expand,
        }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::Custom(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRecord {
    pub key: String,
    pub disabled: bool,
    /// Row carries expandable content
    pub expandable: bool,
}

impl TableRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }
}
