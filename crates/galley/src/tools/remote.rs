use galley_core::tool::{Error as ToolError, Tool, ToolResult};
use galley_mcp::SharedClient;
use serde_json::{Value, json};

/// A tool served by the subprocess-backed tool server.
///
/// Arguments are forwarded as-is over the wire; the textual content of
/// the result payload becomes the tool output.
pub struct RemoteTool {
    client: SharedClient,
    name: String,
    description: String,
    parameter_schema: Value,
}

impl RemoteTool {
    /// Creates a tool that forwards calls to the given client.
    pub fn new<S1, S2>(
        client: SharedClient,
        name: S1,
        description: S2,
        parameter_schema: Value,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            client,
            name: name.into(),
            description: description.into(),
            parameter_schema,
        }
    }
}

impl Tool for RemoteTool {
    type Input = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: Value,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let client = SharedClient::clone(&self.client);
        let name = self.name.clone();
        async move {
            let result = client
                .lock()
                .await
                .call_tool(&name, input)
                .await
                .map_err(|err| {
                    ToolError::execution_error()
                        .with_reason(format!("{err}"))
                })?;
            Ok(text_content(&result))
        }
    }
}

/// Extracts the first textual content item from a result payload.
fn text_content(result: &Value) -> String {
    result
        .get("content")
        .and_then(|content| content.get(0))
        .and_then(|item| item.get("text"))
        .and_then(Value::as_str)
        .unwrap_or("No response")
        .to_owned()
}

/// Returns remote wrappers for the tools of the reference "everything"
/// server.
pub fn everything_tools(client: &SharedClient) -> Vec<RemoteTool> {
    let tool = |name: &str, description: &str, parameter_schema: Value| {
        RemoteTool::new(
            SharedClient::clone(client),
            name,
            description,
            parameter_schema,
        )
    };

    vec![
        tool(
            "echo",
            "Echoes back the given message.",
            json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The message to echo.",
                    },
                },
                "required": ["message"],
            }),
        ),
        tool(
            "add",
            "Adds two numbers.",
            json!({
                "type": "object",
                "properties": {
                    "a": { "type": "number" },
                    "b": { "type": "number" },
                },
                "required": ["a", "b"],
            }),
        ),
        tool(
            "longRunningOperation",
            "Runs a long running operation that reports progress.",
            json!({
                "type": "object",
                "properties": {
                    "duration": {
                        "type": "number",
                        "description": "Duration in seconds, default to 10.",
                    },
                    "steps": {
                        "type": "number",
                        "description": "Number of steps, default to 5.",
                    },
                },
            }),
        ),
        tool(
            "printEnv",
            "Prints the environment variables of the tool server.",
            json!({ "type": "object", "properties": {} }),
        ),
        tool(
            "sampleLLM",
            "Samples a response from the server-side language model.",
            json!({
                "type": "object",
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "The prompt to sample from.",
                    },
                    "maxTokens": {
                        "type": "number",
                        "description": "Token budget, default to 100.",
                    },
                },
                "required": ["prompt"],
            }),
        ),
        tool(
            "getTinyImage",
            "Returns a tiny test image.",
            json!({ "type": "object", "properties": {} }),
        ),
        tool(
            "listRoots",
            "Lists the roots exposed to the tool server.",
            json!({ "type": "object", "properties": {} }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_extraction() {
        let result = json!({
            "content": [{ "type": "text", "text": "hi" }],
        });
        assert_eq!(text_content(&result), "hi");
    }

    #[test]
    fn test_missing_content_defaults() {
        assert_eq!(text_content(&json!({})), "No response");
        assert_eq!(text_content(&json!({ "content": [] })), "No response");
        assert_eq!(
            text_content(&json!({ "content": [{ "type": "image" }] })),
            "No response"
        );
    }

    #[test]
    fn test_everything_toolset_names() {
        let client = galley_mcp::Client::new_shared(
            galley_mcp::ClientConfig::default(),
        );
        let tools = everything_tools(&client);
        let names: Vec<_> =
            tools.iter().map(|tool| tool.name().to_owned()).collect();
        assert_eq!(
            names,
            vec![
                "echo",
                "add",
                "longRunningOperation",
                "printEnv",
                "sampleLLM",
                "getTinyImage",
                "listRoots",
            ]
        );
    }
}
