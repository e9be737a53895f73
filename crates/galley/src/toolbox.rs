use galley_core::tool::Approval as ToolApproval;
use galley_core::{Registry, ToolDef};
use galley_mcp::SharedClient;
use serde_json::Value;

use crate::tools::*;

/// A toolbox builder.
///
/// See [`Toolbox`].
#[derive(Default)]
pub struct ToolboxBuilder {
    remote_client: Option<SharedClient>,
    on_request: Option<Box<dyn Fn(ToolApproval) + Send + Sync>>,
}

impl ToolboxBuilder {
    /// Creates a toolbox builder with the built-in tools only.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the remote toolset served by the given client.
    #[inline]
    pub fn with_remote_client(mut self, client: SharedClient) -> Self {
        self.remote_client = Some(client);
        self
    }

    /// Attaches a callback to be invoked when a tool requests approval.
    #[inline]
    pub fn on_tool_request(
        mut self,
        on_request: impl Fn(ToolApproval) + Send + Sync + 'static,
    ) -> Self {
        self.on_request = Some(Box::new(on_request));
        self
    }

    /// Builds a new toolbox.
    pub fn build(self) -> Toolbox {
        let mut registry = Registry::default();
        registry.add_tool(CheckAllergensTool::new());
        registry.add_tool(CalculateCaloriesTool::new());
        registry.add_tool(IngredientPricesTool::new());
        registry.add_tool(CardFeeTool::new());
        registry.add_tool(ConversionRateTool::new());
        registry.add_tool(CoordinateShippingTool::new());

        if let Some(client) = self.remote_client {
            for tool in everything_tools(&client) {
                registry.add_tool(tool);
            }
        }

        if let Some(on_request) = self.on_request {
            registry.on_request(on_request);
        }

        Toolbox { registry }
    }
}

/// A fully assembled toolset behind the plain-text call contract.
///
/// The toolbox is basically a wrapper around [`Registry`] that wires up
/// the built-in tools, and optionally the remote ones, for you.
pub struct Toolbox {
    registry: Registry,
}

impl Toolbox {
    /// Calls a tool by name, returning its text output or an error
    /// string.
    #[inline]
    pub async fn call(&self, name: &str, arguments: Value) -> String {
        self.registry.call(name, arguments).await
    }

    /// Returns the definitions of all available tools.
    #[inline]
    pub fn definitions(&self) -> Vec<ToolDef> {
        self.registry.definitions()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_builtin_tools_are_registered() {
        let toolbox = ToolboxBuilder::new().build();
        let mut names: Vec<_> = toolbox
            .definitions()
            .into_iter()
            .map(|def| def.name)
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "calculate_calories",
                "check_allergens",
                "coordinate_shipping",
                "fees_percentage",
                "get_conversion_rate",
                "get_ingredient_prices",
            ]
        );
    }

    #[tokio::test]
    async fn test_call_goes_through_the_registry() {
        let toolbox = ToolboxBuilder::new().build();

        let output = toolbox
            .call("fees_percentage", json!({"card_type": "amex"}))
            .await;
        let report: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(report["fee_percentage"], 3.0);

        let output = toolbox.call("no_such_tool", json!({})).await;
        assert_eq!(output, "Error calling no_such_tool: unknown tool");
    }

    #[tokio::test]
    async fn test_remote_client_adds_the_everything_toolset() {
        let client = galley_mcp::Client::new_shared(
            galley_mcp::ClientConfig::default(),
        );
        let toolbox =
            ToolboxBuilder::new().with_remote_client(client).build();

        let names: Vec<_> = toolbox
            .definitions()
            .into_iter()
            .map(|def| def.name)
            .collect();
        assert!(names.contains(&"echo".to_owned()));
        assert!(names.contains(&"listRoots".to_owned()));
        assert_eq!(names.len(), 13);
    }
}
