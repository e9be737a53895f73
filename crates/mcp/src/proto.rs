use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub(crate) const PROTOCOL_VERSION: &str = "2.0";

/// Request id used for the one-shot handshake.
pub(crate) const INIT_REQUEST_ID: u64 = 1;
/// Request id used for every tool call. The protocol never pipelines,
/// so ids only need to be distinct from the handshake id.
pub(crate) const CALL_REQUEST_ID: u64 = 2;

/// A single request line sent to the server.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Request {
    jsonrpc: &'static str,
    pub id: u64,
    method: &'static str,
    params: Value,
}

impl Request {
    /// Creates the handshake request.
    pub fn initialize() -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            id: INIT_REQUEST_ID,
            method: "initialize",
            params: json!({}),
        }
    }

    /// Creates a tool call request.
    pub fn call_tool(name: &str, arguments: Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION,
            id: CALL_REQUEST_ID,
            method: "tools/call",
            params: json!({
                "name": name,
                "arguments": arguments,
            }),
        }
    }
}

/// A single response line received from the server.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Response {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_request_shape() {
        let request = Request::call_tool("echo", json!({"message": "hi"}));
        let line = serde_json::to_string(&request).unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 2);
        assert_eq!(value["method"], "tools/call");
        assert_eq!(value["params"]["name"], "echo");
        assert_eq!(value["params"]["arguments"]["message"], "hi");
    }

    #[test]
    fn test_initialize_request_shape() {
        let request = Request::initialize();
        let line = serde_json::to_string(&request).unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["method"], "initialize");
        assert_eq!(value["params"], json!({}));
    }

    #[test]
    fn test_response_without_result() {
        let response: Response =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":2}"#).unwrap();
        assert_eq!(response.id, Some(2));
        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }
}
