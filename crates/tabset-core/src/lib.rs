//! Tabset Core
//!
//! Coordination layer for hosts embedding tab groups: configuration
//! loading, logging setup and the `TabGroup` binding that dispatches
//! controller events to host listeners.

mod config;
mod error;
mod group;

pub use config::Config;
pub use error::CoreError;
pub use group::{ListenerId, TabGroup};

// Re-export component crates
pub use tabset_anchor::{
    AnchorContext, AnchorError, AnchorEvent, AnchorHandle, AnchorRegistry, LinkClick,
    LinkRegistration, NodeRef,
};
pub use tabset_table::{
    CellClass, CellContent, CellEvent, OperationCell, OperationColumn, OperationKind, TableError,
    TableRecord,
};
pub use tabset_tabs::{
    ClickSource, Direction, NavTab, Node, PaneContent, PaneNode, Placement, Policies, Position,
    RenderPlan, Size, TabRegistry, TabType, TabsConfig, TabsController, TabsError, TabsEvent,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging from `RUST_LOG`, defaulting to `info`
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    install_subscriber(filter);
}

/// Initialize logging with an explicit filter directive
pub fn init_logging_with(directive: &str) {
    install_subscriber(tracing_subscriber::EnvFilter::new(directive));
}

fn install_subscriber(filter: tracing_subscriber::EnvFilter) {
    use tracing_subscriber::fmt;

    // Output goes to stderr so stdout stays machine readable
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
