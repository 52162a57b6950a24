use std::io::{self, Write};

use anyhow::{bail, Context, Result};

/// Prints `prompt` and reads one trimmed line from stdin.
pub fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut buffer = String::new();
    let read = io::stdin()
        .read_line(&mut buffer)
        .context("Failed to read input")?;
    if read == 0 {
        bail!("stdin closed");
    }
    Ok(buffer.trim().to_string())
}

/// Yes/no confirmation; an empty answer counts as yes.
pub fn prompt_yes(prompt: &str) -> Result<bool> {
    let decision = prompt_line(prompt)?.to_ascii_lowercase();
    Ok(matches!(decision.as_str(), "" | "y" | "yes"))
}
