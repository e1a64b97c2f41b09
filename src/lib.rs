//! # mrna-ali
//!
//! In-memory representation of `mrnaAli` rows, mRNA/genomic alignments stored
//! one per database row, along with their delimited-text rendering.
//!
//! * [`AlignmentRecord::load`] turns a row of field strings into a record or
//!   fails with a [`ParseError`] without producing anything.
//! * [`write_record`] renders a record under an [`OutputFormat`]: one line of
//!   a tab-separated file, an inline comma-list, or any custom pair of
//!   separator and terminator.
//! * [`AlignmentList`], [`free`] and [`free_list`] own and release records.
//! * [`RecordReader`] and [`AlignmentWriter`] stream many records through
//!   `BufRead` and `Write` handles.
//!
//! ```
//! use mrna_ali::{AlignmentRecord, OutputFormat};
//!
//! let row = [
//!     "1", "1", "-1", "1", "0", "500", "AB123456", "42", "1000", "10", "200",
//!     "5", "100", "5", "300", "2", "50,40,", "10,160,", "5,5,", "100,250,", "5,3,", "2,1,",
//! ];
//! let record = AlignmentRecord::load(&row).unwrap();
//!
//! let mut line = Vec::new();
//! record.write(&mut line, OutputFormat::TabRecord).unwrap();
//! assert!(line.ends_with(b"\t50,40,\t10,160,\t5,5,\t100,250,\t5,3,\t2,1,\n"));
//! ```

mod error;
pub mod list;
pub mod loader;
mod reader;
mod record;
pub mod writer;

pub use error::{Error, ParseError, ReadError, Result, WriteError};
pub use list::{free, free_list, AlignmentList};
pub use reader::{load_all, RecordReader};
pub use record::{
    Accession, AlignmentRecord, Block, Strand, ARRAY_FIELDS, ARRAY_FIELD_NAMES, DB_ROW_FIELDS,
    SCALAR_FIELDS,
};
pub use writer::{write_record, AlignmentWriter, OutputFormat};

#[cfg(test)]
mod testing {

    use super::*;
    use anyhow::Result;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use std::io::Cursor;

    const EXAMPLE_ROW: [&str; 22] = [
        "1", "1", "-1", "1", "0", "500", "AB123456", "42", "1000", "10", "200", "5", "100", "5",
        "300", "2", "50,40,", "10,160,", "5,5,", "100,250,", "5,3,", "2,1,",
    ];

    fn strand(rng: &mut SmallRng) -> &'static str {
        if rng.random_bool(0.5) {
            "1"
        } else {
            "-1"
        }
    }

    fn flag(rng: &mut SmallRng) -> &'static str {
        if rng.random_bool(0.5) {
            "1"
        } else {
            "0"
        }
    }

    /// Builds a database-shape row with `n_blocks` random blocks
    fn random_row(rng: &mut SmallRng, n_blocks: usize) -> Vec<String> {
        let q_total: u32 = rng.random_range(0..1_000_000);
        let q_start = rng.random_range(0..=q_total);
        let q_end = rng.random_range(q_start..=q_total);
        let acc_len = rng.random_range(0..=Accession::MAX_LEN);
        let acc: String = (0..acc_len)
            .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
            .collect();
        let mut row = vec![
            rng.random::<u32>().to_string(),
            strand(rng).to_string(),
            strand(rng).to_string(),
            flag(rng).to_string(),
            flag(rng).to_string(),
            rng.random::<i32>().to_string(),
            acc,
            rng.random::<u32>().to_string(),
            q_total.to_string(),
            q_start.to_string(),
            q_end.to_string(),
            rng.random::<u32>().to_string(),
            rng.random::<u32>().to_string(),
            rng.random::<u32>().to_string(),
            rng.random::<u32>().to_string(),
            n_blocks.to_string(),
        ];
        for column in 0..ARRAY_FIELDS {
            let mut list = String::new();
            for _ in 0..n_blocks {
                let value = if column < 4 {
                    rng.random::<u32>()
                } else {
                    u32::from(rng.random::<u16>())
                };
                list.push_str(&format!("{value},"));
            }
            row.push(list);
        }
        row
    }

    #[test]
    fn test_example_scenario() -> Result<()> {
        let record = AlignmentRecord::load(&EXAMPLE_ROW)?;
        let mut out = Vec::new();
        write_record(&record, &mut out, OutputFormat::TabRecord)?;
        let line = String::from_utf8(out)?;

        assert_eq!(line.matches('\n').count(), 1);
        let fields: Vec<&str> = line.trim_end_matches('\n').split('\t').collect();
        assert_eq!(fields[..SCALAR_FIELDS], EXAMPLE_ROW[..SCALAR_FIELDS]);
        assert_eq!(
            fields[SCALAR_FIELDS..],
            ["50,40,", "10,160,", "5,5,", "100,250,", "5,3,", "2,1,"]
        );
        Ok(())
    }

    #[test]
    fn test_tab_round_trip() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);
        for n_blocks in [0, 1, 2, 3, 17, 250] {
            let row = random_row(&mut rng, n_blocks);
            let record = AlignmentRecord::load(&row)?;

            let mut out = Vec::new();
            record.write_tab(&mut out)?;
            let line = String::from_utf8(out)?;
            let fields: Vec<&str> = line.trim_end_matches('\n').split('\t').collect();
            assert_eq!(fields, row);

            assert_eq!(line.parse::<AlignmentRecord>()?, record);
        }
        Ok(())
    }

    #[test]
    fn test_comma_round_trip() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(7);
        for n_blocks in [0, 1, 5, 64] {
            let record = AlignmentRecord::load(&random_row(&mut rng, n_blocks))?;
            let mut out = Vec::new();
            record.write_comma(&mut out)?;
            let line = String::from_utf8(out)?;
            assert_eq!(AlignmentRecord::from_comma_list(&line)?, record);
        }
        Ok(())
    }

    #[test]
    fn test_column_lengths_scale() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(1);
        for n_blocks in [0, 1, 10, 1000, 5000] {
            let record = AlignmentRecord::load(&random_row(&mut rng, n_blocks))?;
            assert_eq!(record.block_count() as usize, n_blocks);
            assert_eq!(record.blocks().len(), n_blocks);
            assert_eq!(record.block_sizes().len(), n_blocks);
            assert_eq!(record.q_block_starts().len(), n_blocks);
            assert_eq!(record.t_block_bacs().len(), n_blocks);
            assert_eq!(record.t_block_starts().len(), n_blocks);
            assert_eq!(record.start_goods().len(), n_blocks);
            assert_eq!(record.end_goods().len(), n_blocks);
        }
        Ok(())
    }

    #[test]
    fn test_truncated_column_yields_nothing() {
        let mut row = EXAMPLE_ROW;
        row[16] = "50";
        let result = AlignmentRecord::load(&row);
        assert!(matches!(result, Err(ParseError::ArrayLength { .. })));
    }

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(99);
        let list: AlignmentList = (0..20)
            .map(|i| AlignmentRecord::load(&random_row(&mut rng, i % 4)))
            .collect::<std::result::Result<_, _>>()?;

        let mut writer = AlignmentWriter::new(Vec::new(), OutputFormat::TabRecord);
        writer.write_list(&list)?;
        let bytes = writer.into_inner()?;

        let reread = RecordReader::new(Cursor::new(bytes)).read_all()?;
        assert_eq!(reread, list);

        let mut slot = Some(reread);
        free_list(&mut slot);
        assert!(slot.is_none());
        Ok(())
    }
}
