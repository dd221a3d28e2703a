// src/presentation.rs
use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use file_lister_domain::EntryRecord;
use file_lister_ports::listing::ListingSink;
use file_lister_shared_kernel::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct DirectoryLine<'a> {
    directory: &'a Path,
}

/// Writes the listing to any `Write`, buffered; `finish` flushes.
pub struct WriterSink<W: Write> {
    out: BufWriter<W>,
    format: OutputFormat,
}

impl WriterSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out: BufWriter::new(out), format }
    }

    /// Flushes and hands back the underlying writer.
    ///
    /// # Errors
    /// Fails when the final flush fails.
    pub fn into_inner(self) -> Result<W> {
        self.out.into_inner().map_err(|err| err.into_error().into())
    }

    fn json_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ListingSink for WriterSink<W> {
    fn directory(&mut self, path: &Path) -> Result<()> {
        match self.format {
            OutputFormat::Line => writeln!(self.out, "{}", path.display())?,
            OutputFormat::Jsonl => self.json_line(&DirectoryLine { directory: path })?,
        }
        Ok(())
    }

    fn entry(&mut self, record: &EntryRecord) -> Result<()> {
        match self.format {
            OutputFormat::Line => writeln!(self.out, "{record}")?,
            OutputFormat::Jsonl => self.json_line(record)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
