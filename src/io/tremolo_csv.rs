use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use super::TremoloRow;
use crate::{Error, Result};

/// Read a tremolo table from any CSV source.
///
/// Columns are matched by header name, so order is free and extra columns
/// are ignored. A missing `sample`, `input`, `output` or `tri_wave` column
/// is an error.
pub fn read_tremolo<R: Read>(reader: R) -> Result<Vec<TremoloRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let rows = csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<TremoloRow>, csv::Error>>()?;
    Ok(rows)
}

pub fn read_tremolo_csv(path: impl AsRef<Path>) -> Result<Vec<TremoloRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let rows = read_tremolo(file)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded tremolo table");
    Ok(rows)
}

/// Write a tremolo table with a `sample,input,output,tri_wave` header.
pub fn write_tremolo<W: Write>(writer: W, rows: &[TremoloRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_tremolo_csv(path: impl AsRef<Path>, rows: &[TremoloRow]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_tremolo(file, rows)?;
    debug!(path = %path.display(), rows = rows.len(), "wrote tremolo table");
    Ok(())
}
