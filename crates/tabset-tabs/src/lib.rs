//! Tabset Tab Groups
//!
//! Headless controller for a tab group: derives the tab registry from the
//! declared panes, reconciles controlled and uncontrolled selection, tracks
//! lazily mounted panes and computes the content strip layout.
//!
//! Every render pass runs the same pipeline:
//! ```text
//! children ─▶ derive_tabs ─▶ resolve active key ─▶ lazy mount set
//!                                   │
//!                                   ▼
//!                  should_render_body / active_index / placement
//! ```

mod config;
mod controller;
mod eligibility;
mod error;
mod event;
mod lazy;
mod layout;
mod pane;
mod registry;
mod selector;

pub use config::{Direction, Policies, Position, Size, TabType, TabsConfig};
pub use controller::{NavTab, PaneContent, RenderPlan, TabsController};
pub use eligibility::should_render_body;
pub use error::TabsError;
pub use event::{ClickSource, TabsEvent};
pub use lazy::LazyMountSet;
pub use layout::{active_index, content_offset_percent, structural_order, Placement, StructuralOrder};
pub use pane::{coerce_flag, Node, PaneNode, Slot};
pub use registry::{derive_tabs, TabDescriptor, TabRegistry, Title};
pub use selector::{resolve, ActiveKeyState};

pub type Result<T> = std::result::Result<T, TabsError>;
