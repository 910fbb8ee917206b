use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

pub fn write_heading<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "\n{}", text.bold())
}

/// Centers `text` in a field of `width` columns, padding the extra space
/// on the right when it does not split evenly.
pub fn centered(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}
