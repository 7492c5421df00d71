//! Operator confirmation prompts.
//!
//! Destructive commands take a `Confirm` so tests can script answers;
//! these are the two implementations the CLI wires in.

use std::io::{self, Write};

use tracadm_core::error::Result;
use tracadm_core::trac_print;
use tracadm_remote::Confirm;

/// Prompts on stdout and reads y/yes from stdin.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        trac_print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(
            input.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Answers yes to everything; wired in by `--yes`.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}
