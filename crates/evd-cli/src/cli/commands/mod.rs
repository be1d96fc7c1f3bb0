//! CLI command handlers.

use anyhow::{Context, Result};
use evd_core::command::Reply;

pub mod config;
pub mod events;
pub mod routes;
pub mod script;
pub mod session;

/// Prints a reply as text, or as pretty JSON with `--json`.
fn print_reply(reply: &Reply, json: bool) -> Result<()> {
    if json {
        println!("{}", reply.to_json().context("serialize reply")?);
    } else {
        println!("{reply}");
    }
    Ok(())
}
