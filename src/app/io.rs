use std::io::{IsTerminal, Read, Write};

use anyhow::Context;

/// Reads standard input when it is piped rather than attached to a
/// terminal. The text is trimmed, so an empty pipe yields an empty string.
pub fn read_piped_stdin() -> anyhow::Result<Option<String>> {
    let mut stdin = std::io::stdin();

    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("reading standard input failed")?;

    tracing::debug!(len = text.len(), "read piped input");

    Ok(Some(text.trim().to_string()))
}

pub fn print_line(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;

    Ok(())
}
