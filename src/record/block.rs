/// One contiguous aligned segment of an alignment
///
/// Gathers the six per-block columns of the database row so that every
/// column necessarily has the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    /// Size of the block
    pub size: u32,

    /// Start of the block in the mRNA
    pub q_start: u32,

    /// BAC the block starts in
    pub t_bac: u32,

    /// Position within the BAC of the block start
    pub t_start: u32,

    /// Number of perfect bases at the start of the block
    pub start_good: u16,

    /// Number of perfect bases at the end of the block
    pub end_good: u16,
}
