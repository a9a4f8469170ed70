//! REPL Module
//!
//! The interactive prompt: reads a line, cleans it, dispatches it through the
//! command table and prints the result.

pub mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use commands::{catch_chance, lookup, CliCommand, CommandKind, Flow, COMMANDS};
pub use session::Session;

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words on any whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the prompt loop until `exit` or end of input.
///
/// Command failures are printed as `Error: ...` and the loop carries on; only
/// a failure to read input or write output ends it early.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            // End of input: finish the prompt line and leave
            writeln!(out)?;
            break;
        }

        // Invalid UTF-8 is replaced rather than rejected
        let line = String::from_utf8_lossy(&buf);
        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = lookup(name) else {
            writeln!(out, "Unknown command.")?;
            continue;
        };

        match command.execute(session, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                debug!(command = command.name, error = %err, "command failed");
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
