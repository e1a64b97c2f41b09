mod accession;
mod block;
mod strand;

pub use accession::Accession;
pub use block::Block;
pub use strand::Strand;

/// Number of scalar fields leading every row (`id` through `blockCount`)
pub const SCALAR_FIELDS: usize = 16;

/// Number of per-block columns following the scalar fields
pub const ARRAY_FIELDS: usize = 6;

/// Row length when every column is stored as a single comma-list field
pub const DB_ROW_FIELDS: usize = SCALAR_FIELDS + ARRAY_FIELDS;

/// Names of the per-block columns, in row order
pub const ARRAY_FIELD_NAMES: [&str; ARRAY_FIELDS] = [
    "blockSizes",
    "qBlockStarts",
    "tBlockBacs",
    "tBlockStarts",
    "startGoods",
    "endGoods",
];

/// An mRNA/genomic alignment
///
/// Records are only built by the loader ([`AlignmentRecord::load`],
/// [`AlignmentRecord::from_comma_list`] or a [`RecordReader`](crate::RecordReader))
/// and are read-only afterwards, so the invariants checked at load time hold
/// for the lifetime of the value:
///
/// * `q_start <= q_end <= q_total_size`
/// * every block column has exactly `block_count` elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentRecord {
    pub(crate) id: u32,
    pub(crate) read_dir: Strand,
    pub(crate) orientation: Strand,
    pub(crate) has_introns: bool,
    pub(crate) is_est: bool,
    pub(crate) score: i32,
    pub(crate) q_acc: Accession,
    pub(crate) q_id: u32,
    pub(crate) q_total_size: u32,
    pub(crate) q_start: u32,
    pub(crate) q_end: u32,
    pub(crate) t_start_bac: u32,
    pub(crate) t_start_pos: u32,
    pub(crate) t_end_bac: u32,
    pub(crate) t_end_pos: u32,
    pub(crate) blocks: Vec<Block>,
}
impl AlignmentRecord {
    /// Unique ID
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Read direction of the mRNA
    #[must_use]
    pub fn read_dir(&self) -> Strand {
        self.read_dir
    }

    /// Orientation relative to the first BAC
    #[must_use]
    pub fn orientation(&self) -> Strand {
        self.orientation
    }

    #[must_use]
    pub fn has_introns(&self) -> bool {
        self.has_introns
    }

    #[must_use]
    pub fn is_est(&self) -> bool {
        self.is_est
    }

    /// Score in something like log-odds form
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// GenBank accession of the mRNA
    #[must_use]
    pub fn q_acc(&self) -> &Accession {
        &self.q_acc
    }

    /// Database ID of the mRNA sequence
    #[must_use]
    pub fn q_id(&self) -> u32 {
        self.q_id
    }

    /// Total bases in the mRNA, aligned or not
    #[must_use]
    pub fn q_total_size(&self) -> u32 {
        self.q_total_size
    }

    #[must_use]
    pub fn q_start(&self) -> u32 {
        self.q_start
    }

    #[must_use]
    pub fn q_end(&self) -> u32 {
        self.q_end
    }

    /// ID of the first genomic BAC in the alignment
    #[must_use]
    pub fn t_start_bac(&self) -> u32 {
        self.t_start_bac
    }

    /// Start position within the first BAC
    #[must_use]
    pub fn t_start_pos(&self) -> u32 {
        self.t_start_pos
    }

    /// ID of the last genomic BAC in the alignment
    #[must_use]
    pub fn t_end_bac(&self) -> u32 {
        self.t_end_bac
    }

    /// End position within the last BAC
    #[must_use]
    pub fn t_end_pos(&self) -> u32 {
        self.t_end_pos
    }

    /// Number of aligned blocks
    #[must_use]
    pub fn block_count(&self) -> u32 {
        self.blocks.len() as u32
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block_sizes(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.blocks.iter().map(|b| b.size)
    }

    pub fn q_block_starts(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.blocks.iter().map(|b| b.q_start)
    }

    pub fn t_block_bacs(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.blocks.iter().map(|b| b.t_bac)
    }

    pub fn t_block_starts(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.blocks.iter().map(|b| b.t_start)
    }

    pub fn start_goods(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.blocks.iter().map(|b| b.start_good)
    }

    pub fn end_goods(&self) -> impl ExactSizeIterator<Item = u16> + '_ {
        self.blocks.iter().map(|b| b.end_good)
    }
}
