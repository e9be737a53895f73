//! Tool call supports.

mod approval;
mod error;
mod object;
mod registry;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use approval::Approval;
pub use error::{Error, ErrorKind};
pub use registry::Registry;

/// The result of a tool call.
pub type ToolResult = Result<String, Error>;

/// Describes a tool to whatever drives the toolset, typically a model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolDef {
    /// Name of the tool.
    pub name: String,
    /// Description of the tool.
    pub description: String,
    /// Parameters definition of the tool.
    ///
    /// Typically a [JSON schema](https://json-schema.org/).
    pub parameters: Value,
}

/// A named capability that can be invoked with a JSON argument mapping.
///
/// Implementations should be stateless, or confine their state to values
/// set during initialization and cloned into the execution future. Tools
/// may hold handles to external resources (such as a shared subprocess
/// client), as long as the returned future owns its copy of the handle.
pub trait Tool: Send + Sync + 'static {
    /// The type of input that the tool accepts.
    type Input: DeserializeOwned + Send;

    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Returns the parameter schema of the tool.
    fn parameter_schema(&self) -> &Value;

    /// Returns an approval request when the call needs user confirmation.
    ///
    /// The default implementation approves everything implicitly by
    /// returning `None`. Tools that return `Some` will only execute after
    /// the registry's request handler resolves the approval.
    fn make_approval(&self, _input: &Self::Input) -> Option<Approval> {
        None
    }

    /// Executes the tool with the given input.
    ///
    /// This method must return a future that is fully independent of
    /// `self`, and the future should be cancellation safe.
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl Future<Output = ToolResult> + Send + 'static;
}
