//! Loading of alignment records from rows of field strings
//!
//! A row holds the sixteen scalar fields in declaration order followed by the
//! six block columns. Two row shapes are accepted:
//!
//! * the database shape: exactly [`DB_ROW_FIELDS`] fields, each block column
//!   stored as one comma-list (`"50,40,"`, trailing comma optional)
//! * the flat shape: exactly `16 + 6 * blockCount` fields, one per element
//!
//! The shapes coincide when `blockCount` is 1 since a one-element comma-list
//! parses the same as a bare token.

use std::str::FromStr;

use log::{debug, trace};

use crate::{
    error::ParseError,
    record::{
        Accession, AlignmentRecord, Block, Strand, ARRAY_FIELDS, ARRAY_FIELD_NAMES, DB_ROW_FIELDS,
        SCALAR_FIELDS,
    },
};

/// Index of `blockCount` within a row
const BLOCK_COUNT_FIELD: usize = SCALAR_FIELDS - 1;

/// Tokens of each block column, in row order
type Columns<'a> = [Vec<&'a str>; ARRAY_FIELDS];

/// Parses a decimal integer column, optionally with a leading `-`
fn parse_int<T: FromStr>(field: &'static str, token: &str) -> Result<T, ParseError> {
    let invalid = || ParseError::InvalidInteger {
        field,
        token: token.to_string(),
    };
    if token.starts_with('+') {
        return Err(invalid());
    }
    token.parse().map_err(|_| invalid())
}

fn parse_strand(field: &'static str, token: &str) -> Result<Strand, ParseError> {
    Strand::parse(token).ok_or_else(|| ParseError::InvalidStrand {
        field,
        token: token.to_string(),
    })
}

fn parse_flag(field: &'static str, token: &str) -> Result<bool, ParseError> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidFlag {
            field,
            token: token.to_string(),
        }),
    }
}

/// Splits a comma-list column into its elements
///
/// A single trailing comma is allowed and the empty string is the empty list.
fn split_list(field: &str) -> Vec<&str> {
    let field = field.strip_suffix(',').unwrap_or(field);
    if field.is_empty() {
        Vec::new()
    } else {
        field.split(',').collect()
    }
}

/// Parses the sixteen scalar fields into a record without blocks
///
/// Returns the record along with the declared block count.
fn parse_scalars(fields: &[&str]) -> Result<(AlignmentRecord, usize), ParseError> {
    if fields.len() < SCALAR_FIELDS {
        return Err(ParseError::TooFewFields(fields.len()));
    }
    let block_count: u32 = parse_int("blockCount", fields[BLOCK_COUNT_FIELD])?;
    let record = AlignmentRecord {
        id: parse_int("id", fields[0])?,
        read_dir: parse_strand("readDir", fields[1])?,
        orientation: parse_strand("orientation", fields[2])?,
        has_introns: parse_flag("hasIntrons", fields[3])?,
        is_est: parse_flag("isEst", fields[4])?,
        score: parse_int("score", fields[5])?,
        q_acc: Accession::new(fields[6])?,
        q_id: parse_int("qId", fields[7])?,
        q_total_size: parse_int("qTotalSize", fields[8])?,
        q_start: parse_int("qStart", fields[9])?,
        q_end: parse_int("qEnd", fields[10])?,
        t_start_bac: parse_int("tStartBac", fields[11])?,
        t_start_pos: parse_int("tStartPos", fields[12])?,
        t_end_bac: parse_int("tEndBac", fields[13])?,
        t_end_pos: parse_int("tEndPos", fields[14])?,
        blocks: Vec::new(),
    };
    if record.q_start > record.q_end || record.q_end > record.q_total_size {
        return Err(ParseError::QueryCoordinates {
            start: record.q_start,
            end: record.q_end,
            total: record.q_total_size,
        });
    }
    Ok((record, block_count as usize))
}

/// Zips the block columns into blocks, checking every column length first
fn parse_blocks(columns: &Columns<'_>, block_count: usize) -> Result<Vec<Block>, ParseError> {
    for (column, name) in columns.iter().zip(ARRAY_FIELD_NAMES) {
        if column.len() != block_count {
            return Err(ParseError::ArrayLength {
                field: name,
                expected: block_count,
                got: column.len(),
            });
        }
    }
    let [sizes, q_starts, t_bacs, t_starts, start_goods, end_goods] = columns;
    (0..block_count)
        .map(|i| -> Result<Block, ParseError> {
            Ok(Block {
                size: parse_int("blockSizes", sizes[i])?,
                q_start: parse_int("qBlockStarts", q_starts[i])?,
                t_bac: parse_int("tBlockBacs", t_bacs[i])?,
                t_start: parse_int("tBlockStarts", t_starts[i])?,
                start_good: parse_int("startGoods", start_goods[i])?,
                end_good: parse_int("endGoods", end_goods[i])?,
            })
        })
        .collect()
}

fn load_row(row: &[&str]) -> Result<AlignmentRecord, ParseError> {
    let (mut record, block_count) = parse_scalars(row)?;
    let arrays = &row[SCALAR_FIELDS..];

    let columns: Columns<'_> = if row.len() == DB_ROW_FIELDS {
        std::array::from_fn(|i| split_list(arrays[i]))
    } else {
        let expected = block_count
            .checked_mul(ARRAY_FIELDS)
            .and_then(|n| n.checked_add(SCALAR_FIELDS));
        if expected != Some(row.len()) {
            return Err(ParseError::FieldCount {
                expected: expected.unwrap_or(usize::MAX),
                got: row.len(),
            });
        }
        std::array::from_fn(|i| arrays[i * block_count..(i + 1) * block_count].to_vec())
    };

    record.blocks = parse_blocks(&columns, block_count)?;
    Ok(record)
}

fn load_comma_list(line: &str) -> Result<AlignmentRecord, ParseError> {
    let line = line
        .strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
    let tokens: Vec<&str> = line.split(',').collect();
    let (mut record, block_count) = parse_scalars(&tokens)?;

    // each column is its elements followed by one empty token left by the
    // separator (or terminator) that closes it
    let mut rest = &tokens[SCALAR_FIELDS..];
    let mut columns: Columns<'_> = Default::default();
    for (column, name) in columns.iter_mut().zip(ARRAY_FIELD_NAMES) {
        let len = rest.iter().position(|t| t.is_empty()).ok_or(ParseError::ArrayLength {
            field: name,
            expected: block_count,
            got: rest.len(),
        })?;
        column.extend_from_slice(&rest[..len]);
        rest = &rest[len + 1..];
    }
    match rest {
        [] | [""] => {}
        _ => return Err(ParseError::TrailingTokens(rest.len())),
    }

    record.blocks = parse_blocks(&columns, block_count)?;
    Ok(record)
}

impl AlignmentRecord {
    /// Loads a record from a row fetched with `select * from mrnaAli`
    ///
    /// Either row shape described in the [module docs](crate::loader) is accepted.
    /// On failure no record is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrna_ali::AlignmentRecord;
    ///
    /// let row = [
    ///     "1", "1", "-1", "1", "0", "500", "AB123456", "42", "1000", "10", "200",
    ///     "5", "100", "5", "300", "2", "50,40,", "10,160,", "5,5,", "100,250,", "5,3,", "2,1,",
    /// ];
    /// let record = AlignmentRecord::load(&row).unwrap();
    /// assert_eq!(record.block_count(), 2);
    /// assert_eq!(record.q_acc().as_str(), "AB123456");
    /// ```
    pub fn load<S: AsRef<str>>(row: &[S]) -> Result<Self, ParseError> {
        let row: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
        let record = load_row(&row).inspect_err(|e| debug!("Rejected mrnaAli row: {e}"))?;
        trace!(
            "Loaded mrnaAli {} ({}) with {} blocks",
            record.id,
            record.q_acc,
            record.blocks.len()
        );
        Ok(record)
    }

    /// Parses a record back from its comma-list rendering
    ///
    /// This is the inverse of writing with [`OutputFormat::CommaList`](crate::OutputFormat::CommaList).
    /// A trailing newline is ignored.
    pub fn from_comma_list(line: &str) -> Result<Self, ParseError> {
        load_comma_list(line).inspect_err(|e| debug!("Rejected mrnaAli comma-list: {e}"))
    }
}

/// Parses one tab-separated line as written with [`OutputFormat::TabRecord`](crate::OutputFormat::TabRecord)
impl FromStr for AlignmentRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s
            .strip_suffix('\n')
            .map_or(s, |l| l.strip_suffix('\r').unwrap_or(l));
        let row: Vec<&str> = line.split('\t').collect();
        Self::load(&row)
    }
}
