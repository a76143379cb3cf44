//! Permissive cell-list ingestion.
//!
//! The input is a whitespace-separated stream of `x y sand` triples.
//! Parsing is deliberately permissive: the stream is consumed until the
//! first token that fails to parse, and everything read up to that point
//! is kept.

use std::fs;
use std::io;
use std::path::Path;

use scree::grid::CellRecord;
use tracing::warn;

/// Read and parse a cell-list file.
pub fn read_cells(path: &Path) -> io::Result<Vec<CellRecord>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_cells(&text))
}

/// Parse whitespace-separated `x y sand` triples from `text`.
///
/// Coordinates parse as `i16`, sand as `u64`. The first token that fails
/// to parse ends the stream; records parsed before it are returned and a
/// warning notes the truncation. An incomplete trailing triple is
/// likewise dropped.
pub fn parse_cells(text: &str) -> Vec<CellRecord> {
    let mut records = Vec::new();
    let mut tokens = text.split_whitespace();
    while let Some(first) = tokens.next() {
        let record = (|| {
            let x = first.parse::<i16>().ok()?;
            let y = tokens.next()?.parse::<i16>().ok()?;
            let sand = tokens.next()?.parse::<u64>().ok()?;
            Some(CellRecord { x, y, sand })
        })();
        match record {
            Some(record) => records.push(record),
            None => {
                warn!(
                    kept = records.len(),
                    "cell list truncated at an unparsable token"
                );
                break;
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_across_lines_and_spacing() {
        let records = parse_cells("0 0 4\n  1 -2   100\n\t-3 5 0\n");
        assert_eq!(
            records,
            vec![
                CellRecord { x: 0, y: 0, sand: 4 },
                CellRecord { x: 1, y: -2, sand: 100 },
                CellRecord { x: -3, y: 5, sand: 0 },
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_cells("").is_empty());
        assert!(parse_cells("   \n\t ").is_empty());
    }

    #[test]
    fn stops_at_first_unparsable_token() {
        let records = parse_cells("0 0 4\n1 1 8\nnot-a-number 2 2\n3 3 3");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], CellRecord { x: 1, y: 1, sand: 8 });
    }

    #[test]
    fn negative_sand_ends_the_stream() {
        let records = parse_cells("0 0 4 1 1 -8 2 2 2");
        assert_eq!(records, vec![CellRecord { x: 0, y: 0, sand: 4 }]);
    }

    #[test]
    fn incomplete_trailing_triple_is_dropped() {
        let records = parse_cells("0 0 4 5 5");
        assert_eq!(records, vec![CellRecord { x: 0, y: 0, sand: 4 }]);
    }

    #[test]
    fn coordinates_outside_i16_end_the_stream() {
        let records = parse_cells("0 0 1 40000 0 1");
        assert_eq!(records.len(), 1);
    }
}
