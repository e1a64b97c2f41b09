//! Delimited-text output of alignment records
//!
//! Every scalar field is followed by the separator. Each block column is
//! rendered as its elements, each followed by a comma (`50,40,`, or nothing
//! at all when there are no blocks). Columns are separated by the separator
//! and the last one is followed by the terminator.

use std::{fmt, io::Write};

use log::debug;

use crate::{
    error::{Result, WriteError},
    list::AlignmentList,
    record::{AlignmentRecord, Block, ARRAY_FIELDS},
};

/// Separator and terminator used when rendering records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One record per line of a tab-separated file (`'\t'`, `'\n'`)
    #[default]
    TabRecord,
    /// Inline comma-separated list including the final comma (`','`, `','`)
    CommaList,
    /// Any other separator/terminator pair
    Custom { separator: char, terminator: char },
}
impl OutputFormat {
    #[must_use]
    pub fn new(separator: char, terminator: char) -> Self {
        Self::Custom {
            separator,
            terminator,
        }
    }

    /// Character following every field but the last
    #[must_use]
    pub fn separator(self) -> char {
        match self {
            Self::TabRecord => '\t',
            Self::CommaList => ',',
            Self::Custom { separator, .. } => separator,
        }
    }

    /// Character following the last field
    #[must_use]
    pub fn terminator(self) -> char {
        match self {
            Self::TabRecord => '\n',
            Self::CommaList => ',',
            Self::Custom { terminator, .. } => terminator,
        }
    }
}

/// Block columns in output order
const COLUMNS: [fn(&Block) -> u32; ARRAY_FIELDS] = [
    |b| b.size,
    |b| b.q_start,
    |b| b.t_bac,
    |b| b.t_start,
    |b| u32::from(b.start_good),
    |b| u32::from(b.end_good),
];

/// Renders a record piece by piece through `put`
///
/// Shared by the `io::Write` and `fmt::Display` paths. `terminator` is
/// omitted when `None`.
fn render<E>(
    record: &AlignmentRecord,
    separator: char,
    terminator: Option<char>,
    mut put: impl FnMut(&str) -> std::result::Result<(), E>,
) -> std::result::Result<(), E> {
    let mut sep_buf = [0u8; 4];
    let sep: &str = separator.encode_utf8(&mut sep_buf);
    let mut ibuf = itoa::Buffer::new();

    macro_rules! scalar {
        ($value:expr) => {{
            put($value)?;
            put(sep)?;
        }};
    }
    scalar!(ibuf.format(record.id));
    scalar!(ibuf.format(record.read_dir.as_i8()));
    scalar!(ibuf.format(record.orientation.as_i8()));
    scalar!(ibuf.format(u8::from(record.has_introns)));
    scalar!(ibuf.format(u8::from(record.is_est)));
    scalar!(ibuf.format(record.score));
    scalar!(record.q_acc.as_str());
    scalar!(ibuf.format(record.q_id));
    scalar!(ibuf.format(record.q_total_size));
    scalar!(ibuf.format(record.q_start));
    scalar!(ibuf.format(record.q_end));
    scalar!(ibuf.format(record.t_start_bac));
    scalar!(ibuf.format(record.t_start_pos));
    scalar!(ibuf.format(record.t_end_bac));
    scalar!(ibuf.format(record.t_end_pos));
    scalar!(ibuf.format(record.block_count()));

    for (idx, column) in COLUMNS.iter().enumerate() {
        if idx > 0 {
            put(sep)?;
        }
        for block in &record.blocks {
            put(ibuf.format(column(block)))?;
            put(",")?;
        }
    }

    if let Some(terminator) = terminator {
        let mut term_buf = [0u8; 4];
        put(terminator.encode_utf8(&mut term_buf))?;
    }
    Ok(())
}

/// Writes a single record to `sink` using the given format
///
/// Fails only when the sink rejects a write, in which case a prefix of the
/// record may already have been written.
pub fn write_record<W: Write>(
    record: &AlignmentRecord,
    sink: &mut W,
    format: OutputFormat,
) -> std::result::Result<(), WriteError> {
    render(record, format.separator(), Some(format.terminator()), |s| {
        sink.write_all(s.as_bytes())
    })?;
    Ok(())
}

impl AlignmentRecord {
    /// Writes the record using an arbitrary format
    pub fn write<W: Write>(
        &self,
        sink: &mut W,
        format: OutputFormat,
    ) -> std::result::Result<(), WriteError> {
        write_record(self, sink, format)
    }

    /// Writes the record as a line in a tab-separated file
    pub fn write_tab<W: Write>(&self, sink: &mut W) -> std::result::Result<(), WriteError> {
        write_record(self, sink, OutputFormat::TabRecord)
    }

    /// Writes the record as a comma-separated list including the final comma
    pub fn write_comma<W: Write>(&self, sink: &mut W) -> std::result::Result<(), WriteError> {
        write_record(self, sink, OutputFormat::CommaList)
    }
}

/// Tab-separated rendering without the trailing newline
impl fmt::Display for AlignmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, OutputFormat::TabRecord.separator(), None, |s| {
            f.write_str(s)
        })
    }
}

/// Writes many records to a sink with a fixed format
///
/// Wrap file handles in a [`std::io::BufWriter`] before handing them over.
pub struct AlignmentWriter<W: Write> {
    /// Inner writer
    inner: W,

    /// Separator and terminator configuration
    format: OutputFormat,

    /// Number of records written
    records_written: usize,
}
impl<W: Write> AlignmentWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self {
            inner,
            format,
            records_written: 0,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn write_record(&mut self, record: &AlignmentRecord) -> Result<()> {
        write_record(record, &mut self.inner, self.format)?;
        self.records_written += 1;
        Ok(())
    }

    /// Writes every record of the list, head to tail
    pub fn write_list(&mut self, list: &AlignmentList) -> Result<()> {
        list.iter().try_for_each(|record| self.write_record(record))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(WriteError::from)?;
        Ok(())
    }

    /// Flushes and returns the inner writer
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        debug!("Finished writing {} records", self.records_written);
        Ok(self.inner)
    }
}
