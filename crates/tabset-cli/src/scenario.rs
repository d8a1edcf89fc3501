//! Scenario files
//!
//! A scenario declares the group config, the initial panes and a list of
//! host actions replayed in order against one `TabGroup`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use tabset_core::{ClickSource, Node, PaneNode, RenderPlan, TabGroup, TabsConfig, TabsEvent};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub config: Option<TabsConfig>,
    #[serde(default)]
    pub panes: Vec<NodeDecl>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Declared child: a fragment, a pane, or plain text
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeDecl {
    Fragment { fragment: Vec<NodeDecl> },
    Pane(PaneDecl),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneDecl {
    pub key: String,
    pub title_slot: Option<String>,
    pub body: Option<String>,
    /// Remaining attributes (`title`, `disabled`, `closable`, ...)
    #[serde(flatten)]
    pub attrs: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Step {
    Render,
    Click {
        key: String,
        #[serde(default)]
        source: ClickSource,
    },
    Add,
    Delete {
        key: String,
    },
    SetActiveKey {
        key: Option<String>,
    },
    SetPanes {
        panes: Vec<NodeDecl>,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Render => "render",
            Step::Click { .. } => "click",
            Step::Add => "add",
            Step::Delete { .. } => "delete",
            Step::SetActiveKey { .. } => "setActiveKey",
            Step::SetPanes { .. } => "setPanes",
        }
    }
}

/// Result of one replayed step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    pub step: usize,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RenderPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<TabsEvent>,
}

impl NodeDecl {
    pub fn to_node(&self) -> Node {
        match self {
            NodeDecl::Fragment { fragment } => Node::Fragment(to_nodes(fragment)),
            NodeDecl::Pane(pane) => pane.to_node(),
            NodeDecl::Text(text) => Node::Other(text.clone()),
        }
    }
}

impl PaneDecl {
    fn to_node(&self) -> Node {
        let mut pane = PaneNode::new(self.key.clone());
        for (name, value) in &self.attrs {
            pane = pane.attr(name, value.clone());
        }
        if let Some(title) = self.title_slot.clone() {
            pane = pane.title_slot(move || title.clone());
        }
        if let Some(body) = self.body.clone() {
            pane = pane.body(move || body.clone());
        }
        pane.into_node()
    }
}

pub fn to_nodes(decls: &[NodeDecl]) -> Vec<Node> {
    decls.iter().map(NodeDecl::to_node).collect()
}

/// Replay every step; the children persist between steps until `setPanes`
pub fn replay(group: &TabGroup, initial: Vec<Node>, steps: &[Step]) -> tabset_core::Result<Vec<StepOutput>> {
    let mut children = initial;
    let mut outputs = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        tracing::debug!(step = index, action = step.name(), "Replaying step");

        let mut output = StepOutput {
            step: index,
            action: step.name(),
            plan: None,
            events: Vec::new(),
        };

        match step {
            Step::Render => output.plan = Some(group.render(&children)?),
            Step::Click { key, source } => output.events = group.click(key, *source)?,
            Step::Add => output.events = group.add()?,
            Step::Delete { key } => output.events = group.delete(key)?,
            Step::SetActiveKey { key } => group.set_active_key(key.as_deref())?,
            Step::SetPanes { panes } => {
                children = to_nodes(panes);
                output.plan = Some(group.render(&children)?);
            }
        }

        outputs.push(output);
    }

    Ok(outputs)
}
