//! VCF text rendering.
//!
//! Output layout:
//!
//! ```text
//! ##fileformat=VCFv4.1
//! ##fileDate=20240131
//! ##INFO=<ID=..,Number=..,Type=..,Description="..">   (one per INFO key, sorted)
//! #CHROM  POS  ID  REF  ALT  QUAL  FILTER  INFO
//! <data rows, tab-separated, INFO as k=v;k=v>
//! ```

use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use vcf_core::{DataRow, MandatoryColumn, INFO_COLUMN};
use vcf_generator::VcfData;

/// Date format of the `##fileDate` header line.
pub const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// Renders the accumulated rows of a [`VcfData`] as VCF text.
pub struct VcfRenderer<'a> {
    data: &'a VcfData,
    file_date: NaiveDate,
}

impl<'a> VcfRenderer<'a> {
    /// Create a renderer stamping today's local date.
    pub fn new(data: &'a VcfData) -> Self {
        Self {
            data,
            file_date: Local::now().date_naive(),
        }
    }

    /// Stamp a fixed date instead of today's.
    pub fn with_file_date(mut self, file_date: NaiveDate) -> Self {
        self.file_date = file_date;
        self
    }

    /// The meta-information lines, in output order.
    pub fn meta_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.data.info_fields().len());
        lines.push(format!("##fileformat={}", self.data.fileformat()));
        lines.push(format!(
            "##fileDate={}",
            self.file_date.format(FILE_DATE_FORMAT)
        ));
        lines.extend(self.data.info_metadata().map(|f| f.rendered_info_items()));
        lines
    }

    /// The `#CHROM ... INFO` column header line.
    pub fn header_line(&self) -> String {
        let columns: Vec<&str> = MandatoryColumn::ALL
            .iter()
            .map(|c| c.as_str())
            .chain(std::iter::once(INFO_COLUMN))
            .collect();
        format!("#{}", columns.join("\t"))
    }

    /// One data line.
    ///
    /// INFO pairs follow `info_ids`, the declaration order of the header. A
    /// key with no value in this row, because it was defined after the row
    /// was made, is left out.
    fn data_line(row: &DataRow, info_ids: &[&str]) -> String {
        let mut cells: Vec<String> = MandatoryColumn::ALL
            .iter()
            .map(|&c| row.get(c).map(ToString::to_string).unwrap_or_default())
            .collect();

        let info: Vec<String> = info_ids
            .iter()
            .filter_map(|id| row.get_info(id).map(|v| format!("{id}={v}")))
            .collect();
        cells.push(info.join(";"));

        cells.join("\t")
    }

    /// All lines of the document, without terminators.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.meta_lines();
        lines.push(self.header_line());
        let info_ids = self.data.info_fields();
        lines.extend(
            self.data
                .rows()
                .iter()
                .map(|row| Self::data_line(row, &info_ids)),
        );
        lines
    }

    /// The whole document, newline-terminated.
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    /// Stream the document into `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.meta_lines() {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer, "{}", self.header_line())?;
        let info_ids = self.data.info_fields();
        for row in self.data.rows() {
            writeln!(writer, "{}", Self::data_line(row, &info_ids))?;
        }
        writer.flush()
    }
}
