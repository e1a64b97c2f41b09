use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{
    error::{ReadError, Result},
    list::AlignmentList,
    record::AlignmentRecord,
};

/// Reads alignment records from tab-separated text, one record per line
///
/// Empty lines are skipped. A line that fails to load yields a
/// [`ReadError::Row`] carrying its 1-based line number, and a line that is not
/// UTF-8 yields [`ReadError::InvalidUtf8`]; reading can resume with the
/// following line in both cases.
#[derive(Debug)]
pub struct RecordReader<R: BufRead> {
    inner: R,
    buf: Vec<u8>,
    n_lines: usize,
    n_processed: usize,
}
impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            n_lines: 0,
            n_processed: 0,
        }
    }

    /// Number of records loaded so far
    pub fn n_processed(&self) -> usize {
        self.n_processed
    }

    /// Loads the next record, or `None` at the end of the stream
    pub fn next_record(&mut self) -> Option<Result<AlignmentRecord>> {
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.n_lines += 1;
            let line = match std::str::from_utf8(&self.buf) {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(ReadError::InvalidUtf8 {
                        line: self.n_lines,
                        source,
                    }
                    .into()))
                }
            };
            if line.trim_end_matches(['\n', '\r']).is_empty() {
                continue;
            }
            return Some(match line.parse::<AlignmentRecord>() {
                Ok(record) => {
                    self.n_processed += 1;
                    Ok(record)
                }
                Err(source) => Err(ReadError::Row {
                    line: self.n_lines,
                    source,
                }
                .into()),
            });
        }
    }

    /// Loads every remaining record into a list, stopping at the first error
    pub fn read_all(&mut self) -> Result<AlignmentList> {
        let mut list = AlignmentList::new();
        while let Some(record) = self.next_record() {
            list.push(record?);
        }
        debug!(
            "Loaded {} mrnaAli records from {} lines",
            self.n_processed, self.n_lines
        );
        Ok(list)
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<AlignmentRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// Loads every record of a tab-separated file
pub fn load_all<P: AsRef<Path>>(path: P) -> Result<AlignmentList> {
    let handle = File::open(path).map(BufReader::new)?;
    RecordReader::new(handle).read_all()
}
