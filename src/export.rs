use crate::{PlanEntry, PlanField};
use polars::prelude::*;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("dataframe conversion error: {0}")]
    DataFrame(#[from] PolarsError),
    #[error("workbook error: {0}")]
    Workbook(#[from] XlsxError),
    #[error("too many rows for a worksheet: {0}")]
    TooManyRows(usize),
    #[error("too many columns for a worksheet: {0}")]
    TooManyColumns(usize),
}

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The store was empty; no file was touched.
    NothingToExport,
    Written { path: PathBuf, rows: usize },
}

/// One string column per field, in declaration order, one row per entry.
pub fn plans_to_dataframe(plans: &[PlanEntry]) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = PlanField::ALL
        .iter()
        .map(|field| {
            let values: Vec<&str> = plans.iter().map(|plan| plan.get(*field)).collect();
            Series::new(PlSmallStr::from_static(field.label()), values).into_column()
        })
        .collect();
    DataFrame::new(columns)
}

/// Writes a string-typed frame to a single-sheet workbook: bold header row
/// of column names, then the data rows. No index column.
pub fn write_dataframe_to_xlsx<P: AsRef<Path>>(df: &DataFrame, path: P) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(|_| ExportError::TooManyColumns(col_idx))?;
        worksheet.write_string_with_format(0, col, column.name().as_str(), &header)?;
        for (row_idx, value) in column.str()?.into_iter().enumerate() {
            let row = u32::try_from(row_idx + 1).map_err(|_| ExportError::TooManyRows(row_idx))?;
            worksheet.write_string(row, col, value.unwrap_or_default())?;
        }
    }
    worksheet.autofit();

    workbook.save(path.as_ref())?;
    Ok(())
}

/// Exports every plan to `path`, overwriting it. An empty slice writes
/// nothing.
pub fn export_plans<P: AsRef<Path>>(plans: &[PlanEntry], path: P) -> ExportResult<ExportOutcome> {
    if plans.is_empty() {
        debug!("no plans to export");
        return Ok(ExportOutcome::NothingToExport);
    }
    let path = path.as_ref();
    let df = plans_to_dataframe(plans)?;
    write_dataframe_to_xlsx(&df, path)?;
    debug!(path = %path.display(), rows = df.height(), "exported plans");
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        rows: df.height(),
    })
}
