//! Overwrite confirmation, decoupled from the terminal.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::path::Path;

/// Decides whether an existing file may be replaced.
pub trait Confirm {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool>;
}

/// How existing output files are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Replace without asking (`--force`).
    Always,
    /// Never replace.
    Never,
    /// Ask through a [`Confirm`] implementation.
    #[default]
    Ask,
}

impl OverwritePolicy {
    /// Returns whether `path` may be written. Paths that do not exist yet are
    /// always writable and never trigger a question.
    pub fn permits(self, path: &Path, confirm: &mut dyn Confirm) -> io::Result<bool> {
        if !path.exists() {
            return Ok(true);
        }

        match self {
            OverwritePolicy::Always => Ok(true),
            OverwritePolicy::Never => Ok(false),
            OverwritePolicy::Ask => confirm.confirm_overwrite(path),
        }
    }
}

/// Only answers starting with `y` or `Y` count as consent.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

/// Asks on `output` and reads the answer from `input`.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<BufReader<Stdin>, Stdout> {
    /// A prompt bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        write!(self.output, "md2html: overwrite '{}'? ", path.display())?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF leaves the answer empty, which is a refusal.
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
