//! Even-position todo report.
//!
//! # Responsibility
//! - Render `<position> - <title> -> <status>` lines for even positions up to
//!   a limit.
//!
//! # Invariants
//! - Lines are produced lazily in list order and never mutate the list.
//! - Odd positions and positions above the limit are skipped, not deferred.

use crate::list::TodoList;
use crate::model::todo::Todo;
use std::io::{self, Write};

/// Highest position included by the default report (yields at most 20 lines).
pub const DEFAULT_REPORT_LIMIT: usize = 40;

/// Formats one report line, including the trailing newline.
pub fn format_line(position: usize, todo: &Todo) -> String {
    format!("{position} - {} -> {}\n", todo.title, todo.status_label())
}

impl TodoList {
    /// Lazily yields report lines for even positions `<= limit`.
    pub fn even_position_lines(&self, limit: usize) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .enumerate()
            .map(|(slot, todo)| (slot + 1, todo))
            .take_while(move |(position, _)| *position <= limit)
            .filter(|(position, _)| position % 2 == 0)
            .map(|(position, todo)| format_line(position, todo))
    }

    /// Writes the even-position report with an explicit limit.
    pub fn write_filtered_even<W: Write>(&self, limit: usize, out: &mut W) -> io::Result<()> {
        for line in self.even_position_lines(limit) {
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Prints the default report (limit 40) to stdout.
    pub fn print_filtered_even(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_filtered_even(DEFAULT_REPORT_LIMIT, &mut handle)?;
        handle.flush()
    }
}
