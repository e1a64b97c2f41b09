/// Custom Result type for mrna-ali operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the mrna-ali library, encompassing all possible error cases
/// that can occur while loading, reading, or writing alignment records.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// A single row could not be turned into a record
    ParseError(#[from] ParseError),
    /// Errors that occur while reading a stream of rows
    ReadError(#[from] ReadError),
    /// Errors that occur during write operations
    WriteError(#[from] WriteError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
}

/// Errors raised while converting a row of field strings into an [`AlignmentRecord`](crate::AlignmentRecord)
///
/// A failed load never yields a partial record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The row is too short to even reach the block count
    ///
    /// # Arguments
    /// * `usize` - The number of fields found
    #[error("Row has {0} fields, at least 16 are required")]
    TooFewFields(usize),

    /// The row length matches neither the database shape nor the flat shape
    ///
    /// # Fields
    /// * `expected` - The flat-shape length implied by the block count
    /// * `got` - The actual number of fields
    #[error("Row has {got} fields, expected 22 or {expected}")]
    FieldCount { expected: usize, got: usize },

    /// A numeric field held something that is not a number of the field's type
    #[error("Invalid integer for {field}: {token:?}")]
    InvalidInteger { field: &'static str, token: String },

    /// A direction field was not one of `1`, `+1` or `-1`
    #[error("Invalid strand for {field}: {token:?}")]
    InvalidStrand { field: &'static str, token: String },

    /// A boolean field was not `0` or `1`
    #[error("Invalid flag for {field}: {token:?}")]
    InvalidFlag { field: &'static str, token: String },

    /// The accession is longer than [`Accession::MAX_LEN`](crate::Accession::MAX_LEN)
    ///
    /// # Arguments
    /// * `usize` - The length of the rejected accession in bytes
    #[error("Accession is {0} bytes long, the maximum is 12")]
    AccessionTooLong(usize),

    /// The accession holds a comma or a control character
    ///
    /// # Arguments
    /// * `String` - The rejected accession
    #[error("Accession contains a separator or control character: {0:?}")]
    InvalidAccession(String),

    /// A block column does not have exactly `block count` elements
    ///
    /// # Fields
    /// * `field` - The name of the column
    /// * `expected` - The block count
    /// * `got` - The number of elements found
    #[error("Column {field} has {got} elements, expected {expected}")]
    ArrayLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// Query coordinates violate `start <= end <= total`
    #[error("Query coordinates out of order: start {start}, end {end}, total size {total}")]
    QueryCoordinates { start: u32, end: u32, total: u32 },

    /// Unconsumed input remained after the last column of a comma-list
    ///
    /// # Arguments
    /// * `usize` - The number of leftover tokens
    #[error("{0} unexpected tokens after the last column")]
    TrailingTokens(usize),
}

/// Errors that can occur while reading a stream of tab-separated records
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// A line could not be loaded
    ///
    /// # Fields
    /// * `line` - The 1-based line number
    /// * `source` - Why the row was rejected
    #[error("Invalid record on line {line}: {source}")]
    Row { line: usize, source: ParseError },

    /// A line is not valid UTF-8
    ///
    /// # Fields
    /// * `line` - The 1-based line number
    /// * `source` - The decoding failure
    #[error("Line {line} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        line: usize,
        source: std::str::Utf8Error,
    },
}

/// Errors that can occur while writing alignment records
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    /// The output sink rejected a write
    ///
    /// Some prefix of the current record may already have been written.
    #[error("Failed to write record: {0}")]
    Io(#[from] std::io::Error),
}
