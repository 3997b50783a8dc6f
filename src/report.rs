use itertools::Itertools;
use std::fmt;

/// An ordered record of the changes a migration made, one line per change.
///
/// Rendered through `Display` as the human-readable summary the CLI prints.
#[derive(Debug, Clone, Default)]
pub struct ChangeReport {
    lines: Vec<String>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The individual change lines, in the order they were applied.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Changes applied:")?;
        write!(
            f,
            "{}",
            self.lines
                .iter()
                .enumerate()
                .map(|(i, line)| format!("  {}. {}", i + 1, line))
                .join("\n")
        )
    }
}
