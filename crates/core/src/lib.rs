//! Tool abstractions: the [`Tool`] trait, the approval workflow, and a
//! registry that exposes tool calls behind a plain-text contract.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

pub mod tool;

pub use tool::{Registry, Tool, ToolDef, ToolResult};
