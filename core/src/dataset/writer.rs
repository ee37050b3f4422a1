use super::record::{ReadingRecord, COLUMNS};
use crate::prelude::{GenerationError, GenerationResult};
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Streams records as comma-separated rows under the fixed header.
pub struct DatasetWriter<W: Write> {
    writer: Writer<W>,
    rows: usize,
    header_written: bool,
}

impl DatasetWriter<File> {
    /// Creates (or truncates) the file at `path`, creating parent directories.
    pub fn create<P: AsRef<Path>>(path: P) -> GenerationResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GenerationError::Io(display.clone(), e))?;
        }
        let file = File::create(path).map_err(|e| GenerationError::Io(display, e))?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> DatasetWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Writer::from_writer(inner),
            rows: 0,
            header_written: false,
        }
    }

    pub fn write_header(&mut self) -> GenerationResult<()> {
        if !self.header_written {
            self.writer.write_record(COLUMNS)?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &ReadingRecord) -> GenerationResult<()> {
        self.write_header()?;
        self.writer.write_record(record.to_row())?;
        self.rows += 1;
        Ok(())
    }

    /// Writes the header and every record in the given order, then flushes.
    pub fn write_all(&mut self, records: &[ReadingRecord]) -> GenerationResult<usize> {
        self.write_header()?;
        for record in records {
            self.write_record(record)?;
        }
        self.flush()?;
        Ok(records.len())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> GenerationResult<()> {
        self.writer
            .flush()
            .map_err(|e| GenerationError::Io("dataset".into(), e))
    }

    pub fn into_inner(self) -> GenerationResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| GenerationError::Io("dataset".into(), e.into_error()))
    }
}

/// Writes the whole dataset to `path` in one pass.
pub fn write_dataset<P: AsRef<Path>>(
    path: P,
    records: &[ReadingRecord],
) -> GenerationResult<usize> {
    let mut writer = DatasetWriter::create(path)?;
    writer.write_all(records)
}
