//! A client for tool servers that speak line-delimited JSON-RPC over the
//! standard streams of a spawned child process.
//!
//! The client owns exactly one child process. It performs a one-shot
//! handshake on first use and then exposes a single logical operation:
//! invoke a named remote tool with a JSON argument mapping and return its
//! result payload. Each request is one newline-terminated line written to
//! the child's stdin, answered by exactly one line read from its stdout.
//!
//! The protocol has no pipelining. `&mut self` receivers keep one request
//! in flight per client; use [`SharedClient`] to serialize access from
//! multiple owners.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod blocking;
mod config;
mod error;
mod proto;

use std::process::Stdio;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;

pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::Error;

use proto::{Request, Response};

/// A client shared between multiple owners.
///
/// The mutex serializes calls, which the wire protocol requires: the next
/// line read from the child is always taken to answer the last line
/// written.
pub type SharedClient = Arc<Mutex<Client>>;

enum State {
    Idle,
    Ready(Transport),
    Failed,
    Closed,
}

/// A subprocess-backed tool server client.
///
/// Created idle; the child process is spawned lazily on the first call.
/// A spawn or handshake failure is terminal, as is [`Client::close`] —
/// there is no reconnection path.
pub struct Client {
    config: ClientConfig,
    state: State,
}

impl Client {
    /// Creates an idle client with the given configuration.
    ///
    /// No process is spawned until the first call.
    #[inline]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Creates an idle client and wraps it for shared use.
    #[inline]
    pub fn new_shared(config: ClientConfig) -> SharedClient {
        Arc::new(Mutex::new(Self::new(config)))
    }

    /// Spawns the child process and performs the handshake.
    ///
    /// Idempotent: if the client is already initialized this returns
    /// immediately without spawning a second process.
    pub async fn initialize(&mut self) -> Result<(), Error> {
        match self.state {
            State::Ready(_) => return Ok(()),
            State::Failed => {
                return Err(Error::transport("server failed to initialize"));
            }
            State::Closed => {
                return Err(Error::transport("client is closed"));
            }
            State::Idle => {}
        }

        let mut transport = match Transport::spawn(&self.config) {
            Ok(transport) => transport,
            Err(err) => {
                self.state = State::Failed;
                return Err(err);
            }
        };

        debug!("performing handshake with {}", self.config.program);
        if let Err(err) = transport.round_trip(&Request::initialize()).await {
            self.state = State::Failed;
            return Err(err);
        }

        self.state = State::Ready(transport);
        Ok(())
    }

    /// Invokes a named remote tool and returns its result payload.
    ///
    /// Initializes the client first if needed. Returns an empty mapping
    /// when the server omits the result, and [`Error::Remote`] when the
    /// response carries an error payload.
    pub async fn call_tool(
        &mut self,
        name: &str,
        arguments: Value,
    ) -> Result<Value, Error> {
        self.initialize().await?;
        let State::Ready(transport) = &mut self.state else {
            return Err(Error::transport("server not initialized"));
        };

        trace!("calling remote tool: {name}");
        let request = Request::call_tool(name, arguments);
        let response = transport.round_trip(&request).await?;

        if let Some(payload) = response.error {
            return Err(Error::Remote(payload));
        }
        Ok(response.result.unwrap_or_else(|| json!({})))
    }

    /// Terminates the child process and releases its pipes.
    ///
    /// The client cannot be used afterwards. Dropping an unclosed client
    /// also kills the child, but without waiting for it to exit.
    pub async fn close(&mut self) -> Result<(), Error> {
        let state = std::mem::replace(&mut self.state, State::Closed);
        if let State::Ready(mut transport) = state {
            transport.child.kill().await.map_err(|err| {
                Error::transport(format!("failed to kill server: {err}"))
            })?;
        }
        Ok(())
    }

    /// Returns whether the handshake has completed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }
}

struct Transport {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl Transport {
    fn spawn(config: &ClientConfig) -> Result<Self, Error> {
        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                Error::transport(format!(
                    "failed to spawn {}: {err}",
                    config.program
                ))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::transport("server stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| Error::transport("server stdout not captured"))?;

        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }

    /// Writes one request line and reads one response line.
    ///
    /// These are the only two suspension points of the protocol: awaiting
    /// the write drain, and awaiting a full line (or stream closure) from
    /// the child.
    async fn round_trip(
        &mut self,
        request: &Request,
    ) -> Result<Response, Error> {
        let mut line = serde_json::to_string(request)?;
        line.push('\n');

        self.stdin.write_all(line.as_bytes()).await.map_err(|err| {
            Error::transport(format!("failed to write request: {err}"))
        })?;
        self.stdin.flush().await.map_err(|err| {
            Error::transport(format!("failed to flush request: {err}"))
        })?;

        let mut response_line = String::new();
        let read = self
            .stdout
            .read_line(&mut response_line)
            .await
            .map_err(|err| {
                Error::transport(format!("failed to read response: {err}"))
            })?;
        if read == 0 {
            return Err(Error::no_response());
        }

        let response: Response = serde_json::from_str(response_line.trim())?;
        if response.id != Some(request.id) {
            return Err(Error::protocol(format!(
                "response id {:?} does not match request id {}",
                response.id, request.id
            )));
        }
        Ok(response)
    }
}
