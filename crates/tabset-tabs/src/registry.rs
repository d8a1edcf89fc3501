//! Tab registry
//!
//! Rebuilt from the declared children on every render pass. Keys, not
//! descriptor identity, correlate tabs across passes.

use indexmap::IndexMap;

use crate::pane::{for_each_pane, Node, PaneNode, Slot};

/// Display title of a tab, evaluated on demand
#[derive(Clone)]
pub enum Title {
    /// Title slot supplied by the pane
    Slot(Slot),
    /// Plain `title` attribute (may be missing)
    Attr(Option<String>),
}

impl Title {
    fn from_pane(pane: &PaneNode) -> Self {
        match &pane.title_slot {
            Some(slot) => Title::Slot(slot.clone()),
            None => Title::Attr(pane.title_attr()),
        }
    }

    /// Missing titles render as empty, never as an error
    pub fn resolve(&self) -> Option<String> {
        match self {
            Title::Slot(slot) => Some(slot()),
            Title::Attr(attr) => attr.clone(),
        }
    }
}

impl std::fmt::Debug for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Title::Slot(_) => f.write_str("Title::Slot(..)"),
            Title::Attr(attr) => f.debug_tuple("Title::Attr").field(attr).finish(),
        }
    }
}

#[derive(Clone)]
pub struct TabDescriptor {
    pub key: String,
    pub title: Title,
    pub disabled: bool,
    pub closable: bool,
    pub(crate) body: Option<Slot>,
}

impl TabDescriptor {
    fn from_pane(pane: &PaneNode) -> Self {
        Self {
            key: pane.key.clone(),
            title: Title::from_pane(pane),
            disabled: pane.flag("disabled"),
            closable: pane.flag("closable"),
            body: pane.body.clone(),
        }
    }

    /// Produce the pane body, if the pane declared one
    pub fn render_body(&self) -> Option<String> {
        self.body.as_ref().map(|body| body())
    }
}

impl std::fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("disabled", &self.disabled)
            .field("closable", &self.closable)
            .finish_non_exhaustive()
    }
}

/// Ordered tabs, in declaration order
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: Vec<TabDescriptor>,
}

impl TabRegistry {
    pub fn iter(&self) -> impl Iterator<Item = &TabDescriptor> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn first(&self) -> Option<&TabDescriptor> {
        self.tabs.first()
    }

    pub fn get(&self, key: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|t| t.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Position of `key`, if registered
    pub fn position(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.key.as_str()).collect()
    }
}

/// Derive the registry from the declared children.
///
/// Duplicate keys keep only the last declaration, at the last declaration's
/// position.
pub fn derive_tabs(children: &[Node]) -> TabRegistry {
    let mut tabs: IndexMap<String, TabDescriptor> = IndexMap::new();

    for_each_pane(children, &mut |pane| {
        let tab = TabDescriptor::from_pane(pane);
        if tabs.shift_remove(&tab.key).is_some() {
            tracing::warn!(key = %tab.key, "Duplicate pane key, last declaration wins");
        }
        tabs.insert(tab.key.clone(), tab);
    });

    TabRegistry {
        tabs: tabs.into_values().collect(),
    }
}
