//! The four planner operations, driven through a [`LineSource`] and
//! reporting to any writer.

use crate::export::{ExportOutcome, export_plans};
use crate::persistence::PlanStorage;
use crate::shell::input::LineSource;
use crate::shell::terminal::write_heading;
use crate::shell::ShellResult;
use crate::store::PlanStore;
use crate::{PlanEntry, PlanField};
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The count did not parse; nothing was captured or saved.
    InvalidCount,
    Added { count: usize, saved: bool },
}

pub fn prompt<L, W>(input: &mut L, out: &mut W, text: &str) -> ShellResult<String>
where
    L: LineSource,
    W: Write,
{
    write!(out, "{text}")?;
    out.flush()?;
    Ok(input.read_line()?)
}

/// Asks for a count, captures that many entries field by field, appends
/// them as one batch and saves once.
pub fn add_entries<S, L, W>(
    store: &mut PlanStore<S>,
    input: &mut L,
    out: &mut W,
) -> ShellResult<AddOutcome>
where
    S: PlanStorage,
    L: LineSource,
    W: Write,
{
    let raw = prompt(input, out, "How many entries do you want to add? ")?;
    let requested: i64 = match raw.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            writeln!(out, "Invalid input. Please enter a number.")?;
            return Ok(AddOutcome::InvalidCount);
        }
    };
    // Negative counts capture nothing, same as zero.
    let count = usize::try_from(requested).unwrap_or(0);

    let mut entries = Vec::new();
    for _ in 0..count {
        writeln!(out, "\nNew Entry:")?;
        let mut entry = PlanEntry::default();
        for field in PlanField::ALL {
            let value = prompt(input, out, field.prompt())?;
            entry.set(field, value);
        }
        entries.push(entry);
    }

    store.append(entries);
    let saved = match store.save() {
        Ok(()) => {
            writeln!(out, "Entry added successfully.")?;
            true
        }
        Err(err) => {
            writeln!(out, "Error saving plans: {err}")?;
            false
        }
    };
    info!(count, saved, total = store.len(), "added plan entries");
    Ok(AddOutcome::Added { count, saved })
}

/// Prompts for a term and prints the matching entries. Returns the match
/// count.
pub fn search_plans<S, L, W>(store: &PlanStore<S>, input: &mut L, out: &mut W) -> ShellResult<usize>
where
    S: PlanStorage,
    L: LineSource,
    W: Write,
{
    let term = prompt(input, out, "Enter a search term: ")?;
    let results = store.search(&term);
    write_heading(out, &format!("Search Results - Total Found: {}", results.len()))?;
    for plan in &results {
        writeln!(out, "{}", plan.display_line())?;
    }
    Ok(results.len())
}

pub fn list_plans<S, W>(store: &PlanStore<S>, out: &mut W) -> io::Result<usize>
where
    S: PlanStorage,
    W: Write,
{
    write_heading(out, &format!("Total number of plans: {}", store.len()))?;
    for plan in store.plans() {
        writeln!(out, "{}", plan.display_line())?;
    }
    Ok(store.len())
}

/// Exports the store to `path`. Export failures are reported to `out` and
/// come back as `None`.
pub fn export_plans_to_file<S, W>(
    store: &PlanStore<S>,
    path: &Path,
    out: &mut W,
) -> io::Result<Option<ExportOutcome>>
where
    S: PlanStorage,
    W: Write,
{
    match export_plans(store.plans(), path) {
        Ok(ExportOutcome::NothingToExport) => {
            writeln!(out, "No plans to export.")?;
            Ok(Some(ExportOutcome::NothingToExport))
        }
        Ok(outcome @ ExportOutcome::Written { .. }) => {
            writeln!(out, "Plans exported to {}", path.display())?;
            Ok(Some(outcome))
        }
        Err(err) => {
            warn!(error = %err, path = %path.display(), "export failed");
            writeln!(out, "Error exporting plans: {err}")?;
            Ok(None)
        }
    }
}
