use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;

/// Writes rows of a table as CSV, with a header taken from the fields of the row type.
pub struct CsvTableWriter<W>
where
    W: Write,
{
    writer: csv::Writer<W>,
}

impl<W> CsvTableWriter<W>
where
    W: Write,
{
    /// Creates a new [`CsvTableWriter`] with the specified [`Write`]r.
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    /// Write the header and every row, returning the number of rows written.
    ///
    /// The header is written with the first row, so nothing at all is written for an empty
    /// slice.
    pub fn write_rows<T>(&mut self, rows: &[T]) -> Result<usize, csv::Error>
    where
        T: Serialize,
    {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(rows.len())
    }
}

impl CsvTableWriter<File> {
    /// Creates a new [`CsvTableWriter`] writing to a file at the specified path.
    ///
    /// An existing file is truncated.
    pub fn from_file<P>(path: P) -> Result<Self, std::io::Error>
    where
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// What happened when a table was exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The table was written to `path`.
    Written { path: PathBuf, rows: usize },
    /// There were no rows, so no file was created.
    Empty,
}

/// Write `rows` to a CSV file at `path`.
///
/// An empty table does not create a file.
pub fn write_table<T>(path: &Path, rows: &[T]) -> Result<TableOutcome, ExportError>
where
    T: Serialize,
{
    if rows.is_empty() {
        return Ok(TableOutcome::Empty);
    }

    let written = CsvTableWriter::from_file(path)?.write_rows(rows)?;
    Ok(TableOutcome::Written {
        path: path.to_path_buf(),
        rows: written,
    })
}
