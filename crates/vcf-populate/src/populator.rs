//! VCF file output.

use crate::error::VcfPopulatorError;
use crate::renderer::VcfRenderer;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use vcf_generator::VcfData;

/// Default buffer size for VCF writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of data rows written.
    pub rows_written: u64,
    /// Number of `##INFO` declarations written.
    pub info_fields: usize,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes the rows accumulated in a [`VcfData`] to disk.
#[derive(Debug, Clone, Default)]
pub struct VcfPopulator {
    file_date: Option<NaiveDate>,
}

impl VcfPopulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a fixed `##fileDate` instead of today's.
    pub fn with_file_date(mut self, file_date: NaiveDate) -> Self {
        self.file_date = Some(file_date);
        self
    }

    fn renderer<'a>(&self, data: &'a VcfData) -> VcfRenderer<'a> {
        let renderer = VcfRenderer::new(data);
        match self.file_date {
            Some(date) => renderer.with_file_date(date),
            None => renderer,
        }
    }

    /// Render `data` to `output_path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(
        &self,
        data: &VcfData,
        output_path: P,
    ) -> Result<PopulateMetrics, VcfPopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing VCF file '{}' with {} rows and {} INFO fields",
            output_path.display(),
            data.len(),
            data.info_fields().len()
        );

        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.renderer(data).write_to(writer)?;

        let metrics = PopulateMetrics {
            rows_written: data.len() as u64,
            info_fields: data.info_fields().len(),
            total_duration: start_time.elapsed(),
            file_size_bytes: fs::metadata(output_path)?.len(),
        };

        info!(
            "VCF file written: {} rows, {} bytes in {:?} ({:.0} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Dump the generated rows as a JSON array.
    pub fn write_rows_json<P: AsRef<Path>>(
        &self,
        data: &VcfData,
        output_path: P,
    ) -> Result<(), VcfPopulatorError> {
        let output_path = output_path.as_ref();
        debug!(
            "Writing {} rows as JSON to '{}'",
            data.len(),
            output_path.display()
        );
        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        serde_json::to_writer_pretty(writer, data.rows())?;
        Ok(())
    }

    /// Delete a previously written file. A missing file is not an error.
    pub fn remove<P: AsRef<Path>>(output_path: P) -> Result<bool, VcfPopulatorError> {
        let output_path = output_path.as_ref();
        match fs::remove_file(output_path) {
            Ok(()) => {
                info!("Removed VCF file '{}'", output_path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("VCF file '{}' does not exist", output_path.display());
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
