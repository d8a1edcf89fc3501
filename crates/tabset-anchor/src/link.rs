//! Anchor link data

use serde::{Deserialize, Serialize};

/// Target element of a link, positioned within the scroll container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRef {
    pub id: String,
    pub offset_top: f64,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// Click on a link item; the anchor takes over scrolling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub default_prevented: bool,
}

impl LinkClick {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AnchorEvent {
    /// A link item was clicked
    Select { hash: Option<String> },
    /// The current link changed
    Change { hash: String },
}
