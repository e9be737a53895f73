use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::tool::object::{ToolObject, ToolObjectImpl};
use crate::tool::{Approval, Tool, ToolDef};

/// An object that manages a toolset and dispatches calls by name.
///
/// The registry is the public boundary of the tool layer: a call returns
/// the tool's textual result or a human-readable error string, and never
/// propagates a typed failure. The driving model only ever sees text it
/// can reason about.
#[derive(Default)]
pub struct Registry {
    tools: HashMap<String, Arc<dyn ToolObject>>,
    on_request: Option<Box<dyn Fn(Approval) + Send + Sync>>,
}

impl Registry {
    /// Adds a tool to the registry, replacing any tool of the same name.
    pub fn add_tool<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_owned();
        self.tools.insert(name, Arc::new(ToolObjectImpl(tool)));
    }

    /// Attaches a handler for approval requests raised by tools.
    ///
    /// Without a handler, requests are approved implicitly.
    #[inline]
    pub fn on_request<F: Fn(Approval) + Send + Sync + 'static>(
        &mut self,
        on_request: F,
    ) {
        self.on_request = Some(Box::new(on_request));
    }

    /// Returns the definitions of all registered tools.
    #[inline]
    pub fn definitions(&self) -> Vec<ToolDef> {
        self.tools
            .values()
            .map(|tool| ToolDef {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                parameters: tool.parameter_schema().clone(),
            })
            .collect()
    }

    /// Calls a tool by name with a JSON argument mapping.
    ///
    /// Unknown tools, undeserializable arguments, rejected approvals, and
    /// execution failures all come back as `"Error calling <tool>: ..."`
    /// strings.
    pub fn call(
        &self,
        name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = String> + Send>> {
        let span = debug_span!("tool registry");
        let _enter = span.enter();

        let Some(tool) = self.tools.get(name) else {
            warn!("tool not found: {name}");
            let message = format!("Error calling {name}: unknown tool");
            return Box::pin(std::future::ready(message));
        };

        trace!("dispatching {name} with args: {arguments:?}");
        let future = Arc::clone(tool).execute(arguments, &self.on_request);
        let name = name.to_owned();
        Box::pin(async move {
            match future.await {
                Ok(text) => text,
                Err(err) => {
                    format!("Error calling {name}: {}", err.reason())
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use serde_json::{Value, json};

    use super::*;
    use crate::tool::ToolResult;

    static EMPTY_SCHEMA: &Value = &Value::Null;

    struct TestTool;

    impl Tool for TestTool {
        type Input = serde_json::Value;

        fn name(&self) -> &str {
            "test_tool"
        }

        fn description(&self) -> &str {
            "A test tool"
        }

        fn parameter_schema(&self) -> &serde_json::Value {
            EMPTY_SCHEMA
        }

        fn execute(
            &self,
            _input: Self::Input,
        ) -> impl Future<Output = ToolResult> + Send + 'static {
            ready(Ok("success".to_owned()))
        }
    }

    struct GuardedTool;

    impl Tool for GuardedTool {
        type Input = serde_json::Value;

        fn name(&self) -> &str {
            "guarded_tool"
        }

        fn description(&self) -> &str {
            "A tool that always asks for confirmation"
        }

        fn parameter_schema(&self) -> &serde_json::Value {
            EMPTY_SCHEMA
        }

        fn make_approval(&self, _input: &Self::Input) -> Option<Approval> {
            Some(Approval::new("do the thing", "Tool wants to run"))
        }

        fn execute(
            &self,
            _input: Self::Input,
        ) -> impl Future<Output = ToolResult> + Send + 'static {
            ready(Ok("approved and done".to_owned()))
        }
    }

    #[derive(serde::Deserialize)]
    struct StrictInput {
        #[allow(dead_code)]
        message: String,
    }

    struct StrictTool;

    impl Tool for StrictTool {
        type Input = StrictInput;

        fn name(&self) -> &str {
            "strict_tool"
        }

        fn description(&self) -> &str {
            "A tool with a required string field"
        }

        fn parameter_schema(&self) -> &serde_json::Value {
            EMPTY_SCHEMA
        }

        fn execute(
            &self,
            _input: Self::Input,
        ) -> impl Future<Output = ToolResult> + Send + 'static {
            ready(Ok("ok".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_call_returns_tool_output() {
        let mut registry = Registry::default();
        registry.add_tool(TestTool);

        let result = registry.call("test_tool", json!({})).await;
        assert_eq!(result, "success");
    }

    #[tokio::test]
    async fn test_unknown_tool_becomes_error_string() {
        let registry = Registry::default();

        let result = registry.call("read_tool", json!({})).await;
        assert_eq!(result, "Error calling read_tool: unknown tool");
    }

    #[tokio::test]
    async fn test_invalid_input_becomes_error_string() {
        let mut registry = Registry::default();
        registry.add_tool(StrictTool);

        let result = registry.call("strict_tool", json!({"bogus": 1})).await;
        assert!(result.starts_with("Error calling strict_tool:"));
    }

    #[tokio::test]
    async fn test_approval_is_granted_by_handler() {
        let mut registry = Registry::default();
        registry.add_tool(GuardedTool);
        registry.on_request(|approval| approval.approve());

        let result = registry.call("guarded_tool", json!({})).await;
        assert_eq!(result, "approved and done");
    }

    #[tokio::test]
    async fn test_rejected_approval_becomes_error_string() {
        let mut registry = Registry::default();
        registry.add_tool(GuardedTool);
        registry.on_request(|approval| {
            approval.reject(Some("not today".to_owned()))
        });

        let result = registry.call("guarded_tool", json!({})).await;
        assert_eq!(result, "Error calling guarded_tool: not today");
    }

    #[tokio::test]
    async fn test_missing_handler_approves_implicitly() {
        let mut registry = Registry::default();
        registry.add_tool(GuardedTool);

        let result = registry.call("guarded_tool", json!({})).await;
        assert_eq!(result, "approved and done");
    }
}
