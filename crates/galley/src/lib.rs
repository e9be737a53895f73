//! An out-of-the-box toolset for driving kitchen, currency, and shipping
//! helpers, plus remote tools served by a spawned tool-server process.
//!
//! The crate includes a CLI binary for invoking tools from the terminal.
//! You can also use it as a library and hand the [`Toolbox`] to whatever
//! hosts your agent.

#![deny(missing_docs)]

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

mod toolbox;
pub mod tools;

pub use toolbox::{Toolbox, ToolboxBuilder};

/// Re-exports of [`galley_core`] crate.
pub mod core {
    pub use galley_core::*;
}

/// Re-exports of [`galley_mcp`] crate.
pub mod mcp {
    pub use galley_mcp::*;
}
