//! A simple program demonstrates how to use `galley` as a library.

#[macro_use]
extern crate tracing;

use std::io::Write as _;

use galley::ToolboxBuilder;
use galley::core::tool::Approval as ToolApproval;
use galley::mcp::{Client, ClientConfig};
use owo_colors::OwoColorize;
use serde_json::Value;
use tokio::io::{self, AsyncBufReadExt};
use tokio::select;
use tokio::sync::mpsc;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::new_shared(ClientConfig::default());
    let (request_tx, mut request_rx) = mpsc::unbounded_channel();

    let toolbox = ToolboxBuilder::new()
        .with_remote_client(client)
        .on_tool_request(move |approval| {
            request_tx.send(approval).ok();
        })
        .build();

    print_tool_list(&toolbox);

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if line == "tools" {
            print_tool_list(&toolbox);
            continue;
        }

        let (name, arguments) = match parse_invocation(line) {
            Ok(invocation) => invocation,
            Err(err) => {
                println!("{}", format!("Invalid arguments: {err}").red());
                continue;
            }
        };

        let call = toolbox.call(name, arguments);
        tokio::pin!(call);

        // Tools may raise approval requests while the call is pending,
        // so serve those until the call resolves.
        let output = loop {
            select! {
                output = &mut call => break output,
                request = request_rx.recv() => {
                    let Some(approval) = request else {
                        continue;
                    };
                    handle_approval(approval).await;
                }
            }
        };
        println!("{}{}", BAR_CHAR.bright_cyan(), output.bright_white());
    }
}

fn print_tool_list(toolbox: &galley::Toolbox) {
    let mut definitions = toolbox.definitions();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    println!("Available tools:");
    for def in definitions {
        println!("  {}", def.name.bright_cyan());
    }
    println!("Call one with: <tool> <json-arguments>\n");
}

fn parse_invocation(line: &str) -> Result<(&str, Value), serde_json::Error> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let arguments = if rest.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::from_str(rest)?
    };
    Ok((name, arguments))
}

async fn handle_approval(approval: ToolApproval) {
    let bar = BAR_CHAR.bright_yellow();
    println!("\n{bar}⚠️  Tool needs approval:");
    println!("{bar}{}", approval.what().bright_white().bold());
    println!("{bar}{}", approval.hint());
    print!("Proceed? [Y/n]: ");
    std::io::stdout().flush().unwrap();

    let Some(line) = read_line().await else {
        approval.reject(None);
        return;
    };
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("y") {
        approval.approve();
    } else {
        approval.reject(Some("Rejected from the terminal".to_owned()));
    }

    println!();
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
