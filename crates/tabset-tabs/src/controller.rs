//! Tab group controller
//!
//! Owns the selection state and the lazy mount set of one tab group and
//! runs the render pipeline over the host's declared children.

use serde::Serialize;

use crate::config::{Policies, Size, TabType, TabsConfig};
use crate::eligibility::should_render_body;
use crate::event::{ClickSource, TabsEvent};
use crate::lazy::LazyMountSet;
use crate::layout::{active_index, content_offset_percent, Placement};
use crate::pane::Node;
use crate::registry::{derive_tabs, TabRegistry};
use crate::selector::ActiveKeyState;
use crate::Result;

/// A tab header in the navigation strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTab {
    pub key: String,
    pub title: Option<String>,
    pub active: bool,
    pub disabled: bool,
    /// Close affordance shown (editable group and closable pane)
    pub closable: bool,
}

/// A slot in the content strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneContent {
    pub key: String,
    pub active: bool,
    pub render_body: bool,
    /// Produced only when `render_body` is set
    pub body: Option<String>,
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub active_key: Option<String>,
    pub active_index: usize,
    pub offset_percent: f64,
    pub placement: Placement,
    pub size: Size,
    #[serde(rename = "type")]
    pub tab_type: TabType,
    pub justify: bool,
    pub animation: bool,
    pub show_add_button: bool,
    pub tabs: Vec<NavTab>,
    pub panes: Vec<PaneContent>,
}

impl RenderPlan {
    /// Keys whose bodies are mounted in this pass
    pub fn mounted_keys(&self) -> Vec<&str> {
        self.panes
            .iter()
            .filter(|p| p.render_body)
            .map(|p| p.key.as_str())
            .collect()
    }

    /// Produce the bodies of mounted panes from `registry`
    pub fn fill_bodies(&mut self, registry: &TabRegistry) {
        for pane in self.panes.iter_mut().filter(|p| p.render_body) {
            pane.body = registry.get(&pane.key).and_then(|tab| tab.render_body());
        }
    }
}

pub struct TabsController {
    config: TabsConfig,
    policies: Policies,
    active: ActiveKeyState,
    visited: LazyMountSet,
    /// Registry of the latest render pass
    registry: TabRegistry,
}

impl TabsController {
    pub fn new(config: TabsConfig, children: &[Node]) -> Self {
        let registry = derive_tabs(children);
        let active = ActiveKeyState::seed(
            config.active_key.as_deref(),
            config.default_key(),
            registry.first().map(|t| t.key.as_str()),
        );
        let visited = LazyMountSet::seeded(active.key());

        tracing::info!(
            controlled = active.is_controlled(),
            active_key = ?active.key(),
            tab_count = registry.len(),
            "Created tab group"
        );

        Self {
            policies: config.policies(),
            config,
            active,
            visited,
            registry,
        }
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn policies(&self) -> &Policies {
        &self.policies
    }

    pub fn is_controlled(&self) -> bool {
        self.active.is_controlled()
    }

    /// Resolved active key, which may name a pane that no longer exists
    pub fn active_key(&self) -> Option<&str> {
        self.active.key()
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn visited(&self) -> &LazyMountSet {
        &self.visited
    }

    pub fn has_visited(&self, key: &str) -> bool {
        self.visited.has_visited(key)
    }

    pub fn active_index(&self) -> usize {
        active_index(&self.registry, self.active_key())
    }

    pub fn placement(&self) -> Placement {
        Placement::merge(self.policies.position, self.policies.direction)
    }

    /// Body decision for `key` against the current snapshot
    pub fn should_render_body(&self, key: &str) -> bool {
        let is_active = self.active_key() == Some(key) && self.registry.contains(key);
        should_render_body(key, is_active, &self.policies, &self.visited)
    }

    /// Run a render pass over the current children
    pub fn render(&mut self, children: &[Node]) -> RenderPlan {
        self.registry = derive_tabs(children);
        self.plan()
    }

    /// Render pass that leaves every `body` unset; see `plan_deferred`
    pub fn render_deferred(&mut self, children: &[Node]) -> RenderPlan {
        self.registry = derive_tabs(children);
        self.plan_deferred()
    }

    /// Plan for the latest registry snapshot
    pub fn plan(&self) -> RenderPlan {
        let mut plan = self.plan_deferred();
        plan.fill_bodies(&self.registry);
        plan
    }

    /// Plan without producing pane bodies. Callers fill them later with
    /// `RenderPlan::fill_bodies`, outside any lock guarding the controller.
    pub fn plan_deferred(&self) -> RenderPlan {
        let active_key = self.active_key();
        if let Some(key) = active_key {
            if !self.registry.contains(key) {
                tracing::warn!(key = %key, "Active key not found among panes");
            }
        }

        let editable = self.config.editable;
        let mut tabs = Vec::with_capacity(self.registry.len());
        let mut panes = Vec::with_capacity(self.registry.len());

        for tab in self.registry.iter() {
            let active = active_key == Some(tab.key.as_str());
            let render_body = should_render_body(&tab.key, active, &self.policies, &self.visited);

            tabs.push(NavTab {
                key: tab.key.clone(),
                title: tab.title.resolve(),
                active,
                disabled: tab.disabled,
                closable: editable && tab.closable,
            });
            panes.push(PaneContent {
                key: tab.key.clone(),
                active,
                render_body,
                body: None,
            });
        }

        let index = self.active_index();

        RenderPlan {
            active_key: active_key.map(str::to_string),
            active_index: index,
            offset_percent: content_offset_percent(index),
            placement: self.placement(),
            size: self.config.size,
            tab_type: self.config.tab_type,
            justify: self.config.justify,
            animation: self.policies.animation,
            show_add_button: self.shows_add_button(),
            tabs,
            panes,
        }
    }

    /// Selection intent for `key`.
    ///
    /// Re-selecting the active key only raises `tabClick`. Otherwise the key
    /// is recorded as visited, the internal key is updated when uncontrolled,
    /// and `update:activeKey` and `change` precede `tabClick`.
    pub fn select(&mut self, key: &str, source: ClickSource) -> Vec<TabsEvent> {
        let mut events = Vec::with_capacity(3);

        if self.active_key() != Some(key) {
            let from = self.active_key().map(str::to_string);
            self.active.select(key);
            self.visited.record_visit(key);

            tracing::debug!(
                from = ?from,
                to = %key,
                controlled = self.is_controlled(),
                "Tab selection changed"
            );

            events.push(TabsEvent::UpdateActiveKey { key: key.to_string() });
            events.push(TabsEvent::Change { key: key.to_string() });
        }

        events.push(TabsEvent::TabClick {
            key: key.to_string(),
            source,
        });
        events
    }

    /// Click on a tab header. Disabled and unknown tabs swallow the click.
    pub fn click(&mut self, key: &str, source: ClickSource) -> Vec<TabsEvent> {
        let Some(tab) = self.registry.get(key) else {
            tracing::warn!(key = %key, "Ignoring click on unknown tab");
            return Vec::new();
        };
        if tab.disabled {
            tracing::warn!(key = %key, "Ignoring click on disabled tab");
            return Vec::new();
        }
        self.select(key, source)
    }

    pub fn shows_add_button(&self) -> bool {
        self.config.editable && self.config.show_add_button
    }

    /// The host owns pane creation; this only raises `add`
    pub fn request_add(&self) -> Vec<TabsEvent> {
        if !self.shows_add_button() {
            tracing::warn!("Add requested without an add button");
            return Vec::new();
        }
        vec![TabsEvent::Add]
    }

    /// The host owns pane removal; this only raises `delete`
    pub fn request_delete(&self, key: &str) -> Vec<TabsEvent> {
        let closable = self.config.editable && self.registry.get(key).is_some_and(|t| t.closable);
        if !closable {
            tracing::warn!(key = %key, "Delete requested for a tab that cannot be closed");
            return Vec::new();
        }
        vec![TabsEvent::Delete { key: key.to_string() }]
    }

    /// Host update of the controlled `activeKey` prop
    pub fn set_active_key(&mut self, value: Option<&str>) -> Result<()> {
        if self.active.sync_controlled(value)? {
            if let Some(key) = self.active.key() {
                tracing::debug!(key = %key, "Controlled active key updated");
                self.visited.record_visit(key);
            }
        }
        Ok(())
    }
}
