//! Tab group host binding
//!
//! Wraps a `TabsController` for hosts and forwards every emitted event to
//! registered listeners, in emission order. Listeners run after the
//! controller lock is released, so a listener may feed the key straight
//! back through `set_active_key` (two-way binding). Pane bodies are
//! produced the same way, outside the lock, so a body may read the group.

use parking_lot::RwLock;
use std::sync::Arc;

use tabset_tabs::{ClickSource, Node, RenderPlan, TabsConfig, TabsController, TabsEvent};

use crate::error::CoreError;
use crate::Result;

type Listener = Arc<dyn Fn(&TabsEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

pub struct TabGroup {
    /// `None` once disposed
    controller: Arc<RwLock<Option<TabsController>>>,
    listeners: Arc<RwLock<Listeners>>,
}

impl TabGroup {
    pub fn new(config: TabsConfig, children: &[Node]) -> Self {
        Self {
            controller: Arc::new(RwLock::new(Some(TabsController::new(config, children)))),
            listeners: Arc::new(RwLock::new(Listeners::default())),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&TabsEvent) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.write();
        let id = ListenerId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry, _)| *entry != id);
        listeners.entries.len() != before
    }

    pub fn with_controller<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&TabsController) -> T,
    {
        let guard = self.controller.read();
        match guard.as_ref() {
            Some(controller) => Ok(f(controller)),
            None => Err(CoreError::Disposed),
        }
    }

    fn with_controller_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TabsController) -> T,
    {
        let mut guard = self.controller.write();
        match guard.as_mut() {
            Some(controller) => Ok(f(controller)),
            None => Err(CoreError::Disposed),
        }
    }

    fn dispatch(&self, events: &[TabsEvent]) {
        if events.is_empty() {
            return;
        }
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for event in events {
            tracing::debug!(event = event.name(), key = ?event.key(), "Dispatching tab event");
            for listener in &listeners {
                listener(event);
            }
        }
    }

    pub fn active_key(&self) -> Result<Option<String>> {
        self.with_controller(|c| c.active_key().map(str::to_string))
    }

    pub fn render(&self, children: &[Node]) -> Result<RenderPlan> {
        let (mut plan, registry) =
            self.with_controller_mut(|c| (c.render_deferred(children), c.registry().clone()))?;
        plan.fill_bodies(&registry);
        Ok(plan)
    }

    pub fn plan(&self) -> Result<RenderPlan> {
        let (mut plan, registry) =
            self.with_controller(|c| (c.plan_deferred(), c.registry().clone()))?;
        plan.fill_bodies(&registry);
        Ok(plan)
    }

    pub fn click(&self, key: &str, source: ClickSource) -> Result<Vec<TabsEvent>> {
        let events = self.with_controller_mut(|c| c.click(key, source))?;
        self.dispatch(&events);
        Ok(events)
    }

    pub fn add(&self) -> Result<Vec<TabsEvent>> {
        let events = self.with_controller(|c| c.request_add())?;
        self.dispatch(&events);
        Ok(events)
    }

    pub fn delete(&self, key: &str) -> Result<Vec<TabsEvent>> {
        let events = self.with_controller(|c| c.request_delete(key))?;
        self.dispatch(&events);
        Ok(events)
    }

    /// Host update of the controlled `activeKey` prop
    pub fn set_active_key(&self, key: Option<&str>) -> Result<()> {
        Ok(self.with_controller_mut(|c| c.set_active_key(key))??)
    }

    /// Tear down the controller; later calls fail with `Disposed`
    pub fn dispose(&self) {
        if self.controller.write().take().is_some() {
            self.listeners.write().entries.clear();
            tracing::info!("Disposed tab group");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.controller.read().is_none()
    }
}

impl Clone for TabGroup {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use tabset_tabs::PaneNode;

    fn panes(keys: &[&str]) -> Vec<Node> {
        keys.iter().map(|k| PaneNode::new(*k).into_node()).collect()
    }

    fn recorder(group: &TabGroup) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        group.subscribe(move |event| sink.lock().push(event.name().to_string()));
        seen
    }

    #[test]
    fn test_dispatch_order() {
        let group = TabGroup::new(TabsConfig::default(), &panes(&["a", "b"]));
        let seen = recorder(&group);

        group.click("b", ClickSource::Pointer).unwrap();
        group.click("b", ClickSource::Pointer).unwrap();

        assert_eq!(
            *seen.lock(),
            vec!["update:activeKey", "change", "tabClick", "tabClick"]
        );
        assert_eq!(group.active_key().unwrap(), Some("b".to_string()));
    }

    #[test]
    fn test_two_way_binding_from_listener() {
        let config = TabsConfig {
            active_key: Some("a".to_string()),
            ..TabsConfig::default()
        };
        let group = TabGroup::new(config, &panes(&["a", "b"]));

        let bound = group.clone();
        group.subscribe(move |event| {
            if let TabsEvent::UpdateActiveKey { key } = event {
                bound.set_active_key(Some(key)).unwrap();
            }
        });

        group.click("b", ClickSource::Pointer).unwrap();
        assert_eq!(group.active_key().unwrap(), Some("b".to_string()));
        assert_eq!(group.plan().unwrap().active_index, 1);
    }

    #[test]
    fn test_controlled_without_binding_keeps_key() {
        let config = TabsConfig {
            active_key: Some("a".to_string()),
            ..TabsConfig::default()
        };
        let group = TabGroup::new(config, &panes(&["a", "b"]));
        let events = group.click("b", ClickSource::Pointer).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(group.active_key().unwrap(), Some("a".to_string()));
    }

    #[test]
    fn test_unsubscribe() {
        let group = TabGroup::new(TabsConfig::default(), &panes(&["a", "b"]));
        let seen = Arc::new(Mutex::new(0));
        let sink = seen.clone();
        let id = group.subscribe(move |_| *sink.lock() += 1);

        group.click("a", ClickSource::Pointer).unwrap();
        assert!(group.unsubscribe(id));
        assert!(!group.unsubscribe(id));
        group.click("b", ClickSource::Pointer).unwrap();
        assert_eq!(*seen.lock(), 1);
    }

    #[test]
    fn test_mode_switch_surfaces_as_core_error() {
        let group = TabGroup::new(TabsConfig::default(), &panes(&["a"]));
        let err = group.set_active_key(Some("a")).unwrap_err();
        assert!(matches!(err, CoreError::Tabs(_)));
    }

    #[test]
    fn test_body_may_read_group_while_rendering() {
        let slot: Arc<Mutex<Option<TabGroup>>> = Arc::new(Mutex::new(None));
        let body_slot = slot.clone();
        let children = vec![PaneNode::new("a")
            .body(move || {
                let group = body_slot.lock().clone();
                match group {
                    Some(group) => {
                        let index = group.with_controller(|c| c.active_index()).unwrap_or(usize::MAX);
                        format!("{:?} at {index}", group.active_key().ok().flatten())
                    }
                    None => "detached".to_string(),
                }
            })
            .into_node()];

        let group = TabGroup::new(TabsConfig::default(), &children);
        *slot.lock() = Some(group.clone());

        let plan = group.render(&children).unwrap();
        assert_eq!(plan.panes[0].body.as_deref(), Some("Some(\"a\") at 0"));
    }

    #[test]
    fn test_dispose() {
        let group = TabGroup::new(TabsConfig::default(), &panes(&["a"]));
        let seen = recorder(&group);
        group.dispose();

        assert!(group.is_disposed());
        assert!(matches!(group.plan(), Err(CoreError::Disposed)));
        assert!(matches!(
            group.click("a", ClickSource::Pointer),
            Err(CoreError::Disposed)
        ));
        assert!(seen.lock().is_empty());
    }
}
