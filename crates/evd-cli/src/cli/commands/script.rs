//! Session script runner.

use std::io::Read;
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use evd_core::app::App;
use evd_core::script;

/// Runs every line against one app. With `--json`, prints one JSON reply
/// per line.
pub fn run(app: &mut App, file: Option<&Path>, json: bool) -> Result<()> {
    let source = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read script from stdin")?;
            buf
        }
    };

    let commands = script::parse_script(&source)?;
    tracing::debug!(commands = commands.len(), "running script");

    for (line, command) in commands {
        let reply = app
            .apply(command)
            .with_context(|| format!("line {line}"))?;
        if json {
            println!(
                "{}",
                serde_json::to_string(&reply).context("serialize reply")?
            );
        } else {
            println!("{reply}");
        }
    }
    Ok(())
}
