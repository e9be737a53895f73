use galley_core::tool::{Approval as ToolApproval, Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::Value;

/// Orders with at most this many containers skip the approval workflow.
const AUTO_APPROVE_LIMIT: u32 = 5;

#[derive(Deserialize, JsonSchema)]
pub struct CoordinateShippingParameters {
    #[schemars(
        description = "Number of containers in the shipping order."
    )]
    num_containers: u32,
}

/// A tool for coordinating shipping orders.
///
/// Small orders are approved automatically; larger ones pend on a
/// confirmation from the registry's request handler.
pub struct CoordinateShippingTool {
    parameter_schema: Value,
}

impl CoordinateShippingTool {
    /// Creates a new shipping coordination tool.
    #[inline]
    pub fn new() -> Self {
        CoordinateShippingTool {
            parameter_schema: schema_for!(CoordinateShippingParameters)
                .to_value(),
        }
    }
}

impl Default for CoordinateShippingTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CoordinateShippingTool {
    type Input = CoordinateShippingParameters;

    fn name(&self) -> &str {
        "coordinate_shipping"
    }

    fn description(&self) -> &str {
        r#"
Coordinates a shipping order.
Orders of up to 5 containers are approved automatically; larger orders require an explicit approval before they are processed."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn make_approval(
        &self,
        input: &CoordinateShippingParameters,
    ) -> Option<ToolApproval> {
        let num_containers = input.num_containers;
        if num_containers <= AUTO_APPROVE_LIMIT {
            return None;
        }
        Some(ToolApproval::new(
            format!("Ship {num_containers} containers"),
            format!(
                "Large shipping order detected: {num_containers} \
                 containers. Please approve or reject this shipment."
            ),
        ))
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: CoordinateShippingParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        async move {
            let num_containers = input.num_containers;
            if num_containers <= AUTO_APPROVE_LIMIT {
                return Ok(format!(
                    "✅ Auto-approved shipping order for \
                     {num_containers} containers. Order will be \
                     processed immediately."
                ));
            }
            // Large orders only get here once the approval resolved.
            Ok(format!(
                "✅ Approved shipping order for {num_containers} \
                 containers. Order will be processed."
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(num_containers: u32) -> CoordinateShippingParameters {
        serde_json::from_value(json!({ "num_containers": num_containers }))
            .unwrap()
    }

    #[test]
    fn test_small_orders_skip_approval() {
        let tool = CoordinateShippingTool::new();
        assert!(tool.make_approval(&input(5)).is_none());
    }

    #[test]
    fn test_large_orders_request_approval() {
        let tool = CoordinateShippingTool::new();
        let approval = tool.make_approval(&input(6)).unwrap();
        assert!(approval.hint().contains("Large shipping order"));
    }

    #[tokio::test]
    async fn test_small_order_is_auto_approved() {
        let tool = CoordinateShippingTool::new();
        let result = tool.execute(input(3)).await.unwrap();
        assert!(result.contains("Auto-approved"));
        assert!(result.contains("3 containers"));
    }

    #[tokio::test]
    async fn test_large_order_reports_approval() {
        let tool = CoordinateShippingTool::new();
        let result = tool.execute(input(12)).await.unwrap();
        assert!(result.contains("Approved shipping order"));
        assert!(result.contains("12 containers"));
    }
}
