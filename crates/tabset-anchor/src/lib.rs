//! Tabset Anchor Context
//!
//! One anchor owns the link registry; its link items receive an explicit
//! handle to it and register, deregister and report clicks through the
//! `AnchorContext` contract.

mod context;
mod error;
mod link;

pub use context::{AnchorContext, AnchorHandle, AnchorRegistry, LinkRegistration};
pub use error::AnchorError;
pub use link::{AnchorEvent, LinkClick, NodeRef};

pub type Result<T> = std::result::Result<T, AnchorError>;
