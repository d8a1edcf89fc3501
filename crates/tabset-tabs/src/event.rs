//! Events raised to the host

use serde::{Deserialize, Serialize};

/// What triggered a tab click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickSource {
    #[default]
    Pointer,
    Keyboard,
    Programmatic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TabsEvent {
    /// Two-way binding request for the active key
    #[serde(rename = "update:activeKey")]
    UpdateActiveKey { key: String },
    /// Active key changed
    Change { key: String },
    /// Any click on a tab header, including the active one
    TabClick { key: String, source: ClickSource },
    /// Add affordance activated
    Add,
    /// Close affordance activated
    Delete { key: String },
}

impl TabsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TabsEvent::UpdateActiveKey { .. } => "update:activeKey",
            TabsEvent::Change { .. } => "change",
            TabsEvent::TabClick { .. } => "tabClick",
            TabsEvent::Add => "add",
            TabsEvent::Delete { .. } => "delete",
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            TabsEvent::UpdateActiveKey { key }
            | TabsEvent::Change { key }
            | TabsEvent::TabClick { key, .. }
            | TabsEvent::Delete { key } => Some(key),
            TabsEvent::Add => None,
        }
    }
}
