//! Reading sequence databases from plain text.
//!
//! One line per sequence, comma-separated tokens per line. Blank lines and
//! empty tokens are dropped.

use std::path::Path;

use tracing::debug;

use crate::error::{MiningError, MiningResult};
use crate::seq::SequenceDatabase;

const ACCEPTED_EXTENSIONS: [&str; 2] = ["txt", "csv"];

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Each token becomes a single-item itemset.
pub fn parse_sequences(text: &str) -> SequenceDatabase {
    let mut db = SequenceDatabase::new();
    for line in text.lines() {
        let itemsets: Vec<[&str; 1]> = tokens(line).map(|token| [token]).collect();
        if !itemsets.is_empty() {
            db.push_sequence(itemsets);
        }
    }
    db
}

/// Like [`parse_sequences`], but whitespace inside a token separates the
/// items of one itemset: `a b, c` is `[{a, b}, {c}]`.
pub fn parse_itemset_sequences(text: &str) -> SequenceDatabase {
    let mut db = SequenceDatabase::new();
    for line in text.lines() {
        let itemsets: Vec<Vec<&str>> = tokens(line)
            .map(|token| token.split_whitespace().collect())
            .collect();
        if !itemsets.is_empty() {
            db.push_sequence(itemsets);
        }
    }
    db
}

/// Parse `text`, rejecting input that yields no sequences.
pub fn load_database(text: &str, itemsets: bool) -> MiningResult<SequenceDatabase> {
    let db = if itemsets {
        parse_itemset_sequences(text)
    } else {
        parse_sequences(text)
    };
    if db.is_empty() {
        return Err(MiningError::EmptyInput);
    }
    debug!(sequences = db.len(), items = db.num_items(), "parsed input");
    Ok(db)
}

/// Read a `.txt` or `.csv` file as UTF-8 text.
pub fn read_input_file(path: &Path) -> MiningResult<String> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        });
    if !accepted {
        return Err(MiningError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| MiningError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| MiningError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_drops_blank_lines_and_tokens() {
        let db = parse_sequences("a, b,,c\n\n   \n, ,\nb ,c\n");
        assert_eq!(db.len(), 2);

        let first: Vec<&[usize]> = db.sequence(0).iter_itemsets().collect();
        assert_eq!(first.len(), 3);
        assert_eq!(db.decode_pattern(&[first[0][0], first[1][0], first[2][0]]), vec!["a", "b", "c"]);
        assert_eq!(db.sequence(1).len(), 2);
    }

    #[test]
    fn test_parse_keeps_unicode_labels() {
        let db = parse_sequences("sữa, bánh_mỳ, trà");
        assert_eq!(db.len(), 1);
        assert!(db.item_id("bánh_mỳ").is_some());
    }

    #[test]
    fn test_parse_itemsets() {
        let db = parse_itemset_sequences("a b, c\nb");
        assert_eq!(db.len(), 2);
        let seq = db.sequence(0);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.itemset(0).len(), 2);
        assert_eq!(seq.itemset(1), &[db.item_id("c").unwrap()]);
    }

    #[test]
    fn test_load_database_empty() {
        assert!(matches!(load_database(" \n,,\n", false), Err(MiningError::EmptyInput)));
        assert!(load_database("a", false).is_ok());
    }

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::Builder::new().suffix(".CSV").tempfile().unwrap();
        writeln!(file, "a,b,c").unwrap();
        let text = read_input_file(file.path()).unwrap();
        assert_eq!(text.trim(), "a,b,c");
    }

    #[test]
    fn test_read_input_file_rejects_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = read_input_file(file.path()).unwrap_err();
        assert!(matches!(err, MiningError::UnsupportedFile { .. }));
    }

    #[test]
    fn test_read_input_file_rejects_invalid_utf8() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0x61, 0xff, 0xfe]).unwrap();
        let err = read_input_file(file.path()).unwrap_err();
        assert!(matches!(err, MiningError::Decode { .. }));
    }

    #[test]
    fn test_read_input_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, MiningError::Io { .. }));
    }
}
