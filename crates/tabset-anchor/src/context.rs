//! Anchor link registry
//!
//! `AnchorRegistry` is the single owner. Descendants get an `AnchorHandle`,
//! a shared reference to the same state, passed down explicitly.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::AnchorError;
use crate::link::{AnchorEvent, LinkClick, NodeRef};
use crate::Result;

/// Contract exposed to anchor link items
pub trait AnchorContext {
    fn current_link(&self) -> Option<String>;

    /// Register `hash`, replacing any node already registered for it
    fn add_link(&self, hash: &str, node: NodeRef) -> Result<()>;

    fn remove_link(&self, hash: &str);

    fn handle_click(&self, event: &mut LinkClick, hash: Option<&str>) -> Vec<AnchorEvent>;
}

#[derive(Debug, Default)]
struct AnchorState {
    links: IndexMap<String, NodeRef>,
    current: Option<String>,
}

impl AnchorState {
    /// Returns a change event when the current link actually moved
    fn set_current(&mut self, hash: &str) -> Option<AnchorEvent> {
        if self.current.as_deref() == Some(hash) {
            return None;
        }
        tracing::debug!(from = ?self.current, to = %hash, "Current anchor link changed");
        self.current = Some(hash.to_string());
        Some(AnchorEvent::Change {
            hash: hash.to_string(),
        })
    }
}

#[derive(Clone, Default)]
pub struct AnchorHandle {
    state: Arc<RwLock<AnchorState>>,
}

impl AnchorHandle {
    /// Register a link and get a guard that can deregister it
    pub fn register(&self, hash: &str, node: NodeRef) -> Result<LinkRegistration> {
        self.add_link(hash, node)?;
        Ok(LinkRegistration {
            handle: self.clone(),
            hash: hash.to_string(),
        })
    }

    pub fn link_count(&self) -> usize {
        self.state.read().links.len()
    }

    pub fn node(&self, hash: &str) -> Option<NodeRef> {
        self.state.read().links.get(hash).cloned()
    }
}

impl AnchorContext for AnchorHandle {
    fn current_link(&self) -> Option<String> {
        self.state.read().current.clone()
    }

    fn add_link(&self, hash: &str, node: NodeRef) -> Result<()> {
        if hash.is_empty() {
            return Err(AnchorError::EmptyHash);
        }
        tracing::debug!(hash = %hash, node = %node.id, "Registered anchor link");
        self.state.write().links.insert(hash.to_string(), node);
        Ok(())
    }

    fn remove_link(&self, hash: &str) {
        let mut state = self.state.write();
        if state.links.shift_remove(hash).is_none() {
            return;
        }
        if state.current.as_deref() == Some(hash) {
            state.current = None;
        }
        tracing::debug!(hash = %hash, "Removed anchor link");
    }

    fn handle_click(&self, event: &mut LinkClick, hash: Option<&str>) -> Vec<AnchorEvent> {
        event.prevent_default();

        let mut events = vec![AnchorEvent::Select {
            hash: hash.map(str::to_string),
        }];
        if let Some(hash) = hash {
            events.extend(self.state.write().set_current(hash));
        }
        events
    }
}

/// Registration of one link, removable without repeating the hash
pub struct LinkRegistration {
    handle: AnchorHandle,
    hash: String,
}

impl LinkRegistration {
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn remove(self) {
        self.handle.remove_link(&self.hash);
    }
}

/// Owning side of the anchor context
#[derive(Default)]
pub struct AnchorRegistry {
    handle: AnchorHandle,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle for descendants
    pub fn handle(&self) -> AnchorHandle {
        self.handle.clone()
    }

    pub fn current_link(&self) -> Option<String> {
        self.handle.current_link()
    }

    /// Link whose node top is the greatest not exceeding `scroll_top + offset`
    pub fn nearest_link(&self, scroll_top: f64, offset: f64) -> Option<String> {
        let boundary = scroll_top + offset;
        let state = self.handle.state.read();
        state
            .links
            .iter()
            .filter(|(_, node)| node.offset_top <= boundary)
            .max_by(|(_, a), (_, b)| a.offset_top.total_cmp(&b.offset_top))
            .map(|(hash, _)| hash.clone())
    }

    /// Follow the scroll position of the container
    pub fn update_from_scroll(&self, scroll_top: f64, offset: f64) -> Option<AnchorEvent> {
        let hash = self.nearest_link(scroll_top, offset)?;
        self.handle.state.write().set_current(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AnchorRegistry {
        let registry = AnchorRegistry::new();
        let handle = registry.handle();
        handle.add_link("#intro", NodeRef::new("intro", 0.0)).unwrap();
        handle.add_link("#usage", NodeRef::new("usage", 400.0)).unwrap();
        handle.add_link("#api", NodeRef::new("api", 900.0)).unwrap();
        registry
    }

    #[test]
    fn test_handles_share_state() {
        let registry = registry();
        let a = registry.handle();
        let b = registry.handle();

        let mut click = LinkClick::default();
        a.handle_click(&mut click, Some("#usage"));
        assert_eq!(b.current_link(), Some("#usage".to_string()));
        assert_eq!(registry.current_link(), Some("#usage".to_string()));
        assert!(click.default_prevented);
    }

    #[test]
    fn test_click_events() {
        let registry = registry();
        let handle = registry.handle();

        let events = handle.handle_click(&mut LinkClick::default(), Some("#api"));
        assert_eq!(
            events,
            vec![
                AnchorEvent::Select {
                    hash: Some("#api".to_string())
                },
                AnchorEvent::Change {
                    hash: "#api".to_string()
                },
            ]
        );

        // Same link again: no change
        let events = handle.handle_click(&mut LinkClick::default(), Some("#api"));
        assert_eq!(events.len(), 1);

        let events = handle.handle_click(&mut LinkClick::default(), None);
        assert_eq!(events, vec![AnchorEvent::Select { hash: None }]);
        assert_eq!(handle.current_link(), Some("#api".to_string()));
    }

    #[test]
    fn test_empty_hash_rejected() {
        let handle = AnchorRegistry::new().handle();
        assert_eq!(
            handle.add_link("", NodeRef::new("x", 0.0)),
            Err(AnchorError::EmptyHash)
        );
        assert_eq!(handle.link_count(), 0);
    }

    #[test]
    fn test_register_replaces_node() {
        let registry = registry();
        let handle = registry.handle();
        handle.add_link("#api", NodeRef::new("api-v2", 950.0)).unwrap();
        assert_eq!(handle.link_count(), 3);
        assert_eq!(handle.node("#api").unwrap().id, "api-v2");
    }

    #[test]
    fn test_registration_guard() {
        let registry = AnchorRegistry::new();
        let handle = registry.handle();
        let registration = handle.register("#faq", NodeRef::new("faq", 10.0)).unwrap();
        assert_eq!(registration.hash(), "#faq");
        assert_eq!(handle.link_count(), 1);

        registration.remove();
        assert_eq!(handle.link_count(), 0);
    }

    #[test]
    fn test_removing_current_clears_it() {
        let registry = registry();
        let handle = registry.handle();
        handle.handle_click(&mut LinkClick::default(), Some("#usage"));

        handle.remove_link("#intro");
        assert_eq!(handle.current_link(), Some("#usage".to_string()));

        handle.remove_link("#usage");
        assert_eq!(handle.current_link(), None);

        // Unknown hash is a no-op
        handle.remove_link("#missing");
        assert_eq!(handle.link_count(), 1);
    }

    #[test]
    fn test_nearest_link() {
        let registry = registry();
        assert_eq!(registry.nearest_link(0.0, 0.0), Some("#intro".to_string()));
        assert_eq!(registry.nearest_link(399.0, 0.0), Some("#intro".to_string()));
        assert_eq!(registry.nearest_link(380.0, 20.0), Some("#usage".to_string()));
        assert_eq!(registry.nearest_link(5000.0, 0.0), Some("#api".to_string()));
        assert_eq!(registry.nearest_link(-10.0, 0.0), None);
    }

    #[test]
    fn test_update_from_scroll() {
        let registry = registry();
        assert_eq!(
            registry.update_from_scroll(500.0, 0.0),
            Some(AnchorEvent::Change {
                hash: "#usage".to_string()
            })
        );
        assert_eq!(registry.update_from_scroll(600.0, 0.0), None);
        assert_eq!(registry.current_link(), Some("#usage".to_string()));
    }
}
