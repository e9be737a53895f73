use galley::ToolboxBuilder;
use galley::mcp::{Client, ClientConfigBuilder};
use serde_json::json;

const INIT_RESPONSE: &str = r#"{"jsonrpc":"2.0","id":1,"result":{}}"#;

/// A canned tool server: answers the handshake, then serves the given
/// response lines in order.
fn canned_client(responses: &[&str]) -> galley::mcp::SharedClient {
    let mut script = format!("read _; printf '%s\\n' '{INIT_RESPONSE}'");
    for response in responses {
        script.push_str(&format!("; read _; printf '%s\\n' '{response}'"));
    }
    let config = ClientConfigBuilder::with_program("/bin/sh")
        .arg("-c")
        .arg(script)
        .build();
    Client::new_shared(config)
}

#[tokio::test]
async fn test_remote_echo_through_the_toolbox() {
    let client = canned_client(&[
        r#"{"jsonrpc":"2.0","id":2,"result":{"content":[{"type":"text","text":"hi"}]}}"#,
    ]);
    let toolbox = ToolboxBuilder::new().with_remote_client(client).build();

    let output = toolbox.call("echo", json!({"message": "hi"})).await;
    assert_eq!(output, "hi");
}

#[tokio::test]
async fn test_remote_add_through_the_toolbox() {
    let client = canned_client(&[
        r#"{"jsonrpc":"2.0","id":2,"result":{"content":[{"type":"text","text":"5"}]}}"#,
    ]);
    let toolbox = ToolboxBuilder::new().with_remote_client(client).build();

    let output = toolbox.call("add", json!({"a": 2, "b": 3})).await;
    assert_eq!(output, "5");
}

#[tokio::test]
async fn test_remote_failure_becomes_error_string() {
    // The server closes its output stream without answering.
    let config = ClientConfigBuilder::with_program("/bin/sh")
        .arg("-c")
        .arg("exit 0")
        .build();
    let client = Client::new_shared(config);
    let toolbox = ToolboxBuilder::new().with_remote_client(client).build();

    let output = toolbox.call("echo", json!({"message": "hi"})).await;
    assert!(output.starts_with("Error calling echo:"));
    assert!(output.contains("no response"));
}

#[tokio::test]
async fn test_remote_error_payload_becomes_error_string() {
    let client = canned_client(&[
        r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32000,"message":"boom"}}"#,
    ]);
    let toolbox = ToolboxBuilder::new().with_remote_client(client).build();

    let output = toolbox.call("echo", json!({"message": "hi"})).await;
    assert!(output.starts_with("Error calling echo:"));
    assert!(output.contains("boom"));
}
