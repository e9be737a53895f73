//! A blocking entry point for callers that cannot suspend.
//!
//! The call runs on a dedicated runtime thread while the caller blocks on
//! a channel with a bounded wait. This trades a thread hop per call for
//! the ability to invoke the client from synchronous code, including code
//! that already runs inside a cooperative scheduler. It is a workaround
//! for such callers, not a path for high call volume.

use std::sync::LazyLock;
use std::sync::mpsc;
use std::time::Duration;

use serde_json::Value;
use tokio::runtime::{Builder as RuntimeBuilder, Runtime};

use crate::{Error, SharedClient};

/// The bounded wait applied when no explicit timeout is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

static RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    RuntimeBuilder::new_multi_thread()
        .enable_all()
        .worker_threads(1)
        .build()
        .unwrap()
});

/// Invokes a remote tool, blocking the calling thread for the result.
///
/// Equivalent to [`Client::call_tool`](crate::Client::call_tool) with the
/// wait bounded by [`DEFAULT_TIMEOUT`].
#[inline]
pub fn call_tool(
    client: &SharedClient,
    name: &str,
    arguments: Value,
) -> Result<Value, Error> {
    call_tool_with_timeout(client, name, arguments, DEFAULT_TIMEOUT)
}

/// Invokes a remote tool, blocking for at most `timeout`.
///
/// A hung child process cannot block the caller past the timeout, but the
/// request itself is not cancelled: the worker keeps waiting for the
/// response line and the client stays locked until it arrives.
pub fn call_tool_with_timeout(
    client: &SharedClient,
    name: &str,
    arguments: Value,
    timeout: Duration,
) -> Result<Value, Error> {
    let (result_tx, result_rx) = mpsc::channel();
    let client = SharedClient::clone(client);
    let name = name.to_owned();

    RUNTIME.spawn(async move {
        let result = client.lock().await.call_tool(&name, arguments).await;
        result_tx.send(result).ok();
    });

    match result_rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(timeout)),
    }
}
