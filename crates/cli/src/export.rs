use std::io;

use anyhow::Result;
use gyrocourse_solvers::lateral::{Sample, Series};

/// Exported columns, in order.
pub const COLUMNS: [Series; 8] = [
    Series::Time,
    Series::Bank,
    Series::BankRate,
    Series::Heading,
    Series::HeadingRate,
    Series::Sideslip,
    Series::Aileron,
    Series::Rudder,
];

/// Streams samples as CSV rows under a `t,gamma,...` header.
pub struct CsvSink<W: io::Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl<W: io::Write> CsvSink<W> {
    /// Wraps `writer` and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(COLUMNS.map(Series::column))?;
        Ok(Self { writer, rows: 0 })
    }

    /// Writes one sample as a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn write(&mut self, sample: &Sample) -> Result<()> {
        self.writer
            .write_record(COLUMNS.map(|series| series.of(sample).to_string()))?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes buffered rows and returns the inner writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("failed to flush CSV output: {}", err.error()))
    }
}
