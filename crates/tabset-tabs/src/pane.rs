//! Declared children of a tab group
//!
//! The host hands the group a tree of nodes. Only pane nodes become tabs;
//! fragments are walked in declaration order and anything else is skipped.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Lazily evaluated content producer (title or body)
pub type Slot = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Debug, Clone)]
pub enum Node {
    Pane(PaneNode),
    Fragment(Vec<Node>),
    /// Text or a foreign element
    Other(String),
}

#[derive(Clone)]
pub struct PaneNode {
    pub key: String,
    /// Raw attributes as declared (`title`, `disabled`, `closable`, ...)
    pub attrs: HashMap<String, Value>,
    /// Title slot, preferred over the `title` attribute
    pub title_slot: Option<Slot>,
    pub body: Option<Slot>,
}

impl PaneNode {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            attrs: HashMap::new(),
            title_slot: None,
            body: None,
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title.into())
    }

    pub fn title_slot(mut self, slot: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.title_slot = Some(Arc::new(slot));
        self
    }

    pub fn body(mut self, body: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.body = Some(Arc::new(body));
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.attr("disabled", disabled)
    }

    pub fn closable(self, closable: bool) -> Self {
        self.attr("closable", closable)
    }

    /// Plain `title` attribute, if it is a string or number
    pub fn title_attr(&self) -> Option<String> {
        match self.attrs.get("title")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        coerce_flag(self.attrs.get(name))
    }

    pub fn into_node(self) -> Node {
        Node::Pane(self)
    }
}

impl std::fmt::Debug for PaneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaneNode")
            .field("key", &self.key)
            .field("attrs", &self.attrs)
            .field("title_slot", &self.title_slot.is_some())
            .field("body", &self.body.is_some())
            .finish()
    }
}

/// Coerce a loosely typed attribute into a boolean flag.
///
/// A bare attribute (`<pane disabled>`) arrives as an empty string and
/// counts as set.
pub fn coerce_flag(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s != "false",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Depth-first walk over pane nodes in declaration order
pub(crate) fn for_each_pane<'a>(children: &'a [Node], f: &mut impl FnMut(&'a PaneNode)) {
    for child in children {
        match child {
            Node::Pane(pane) => f(pane),
            Node::Fragment(nested) => for_each_pane(nested, f),
            Node::Other(_) => {}
        }
    }
}
