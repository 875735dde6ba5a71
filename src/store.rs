// src/store.rs
use std::collections::HashSet;
use std::path::Path;

use crate::error::CrawlError;
use crate::file::{read_table_file, write_table_file};
use crate::specs::match_row::{MATCH_ID_COL, MatchRow, schema_headers};

/// The persisted match table: one header row plus one row per match, in append order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Default for Table {
    fn default() -> Self {
        Self { headers: schema_headers(), rows: Vec::new() }
    }
}

impl Table {
    /// Load a table written by this crate (or any file with the identical layout).
    /// A file without a `matchId` column, or with columns in another order, is refused.
    pub fn load(path: &Path) -> Result<Self, CrawlError> {
        let (headers, rows) = read_table_file(path)?;
        let table = Self { headers, rows };
        table.check_schema(path)?;
        Ok(table)
    }

    /// Full rewrite of `path`.
    pub fn save(&self, path: &Path) -> Result<(), CrawlError> {
        write_table_file(path, &self.headers, &self.rows)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn match_ids(&self) -> impl Iterator<Item = &str> {
        let col = self.column(MATCH_ID_COL);
        self.rows
            .iter()
            .filter_map(move |r| col.and_then(|c| r.get(c)).map(String::as_str))
    }

    pub fn seen_set(&self) -> HashSet<String> {
        self.match_ids().map(str::to_string).collect()
    }

    pub fn push(&mut self, row: &MatchRow) {
        self.rows.push(row.to_cells());
    }

    fn check_schema(&self, path: &Path) -> Result<(), CrawlError> {
        let mismatch = |reason: String| CrawlError::SchemaMismatch {
            path: path.display().to_string(),
            reason,
        };
        if self.column(MATCH_ID_COL).is_none() {
            return Err(mismatch(format!("no {MATCH_ID_COL} column")));
        }
        let expected = schema_headers();
        if self.headers.len() != expected.len() {
            return Err(mismatch(format!(
                "{} columns, expected {}",
                self.headers.len(),
                expected.len()
            )));
        }
        if let Some(i) = self.headers.iter().zip(&expected).position(|(a, b)| a != b) {
            return Err(mismatch(format!(
                "column {} is {:?}, expected {:?}",
                i + 1,
                self.headers[i],
                expected[i]
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(match_id: &str) -> Vec<String> {
        let mut cells: Vec<String> = (0..schema_headers().len() - 2).map(|i| i.to_string()).collect();
        cells.push(match_id.to_string());
        cells.push("ARAM".to_string());
        cells
    }

    #[test]
    fn save_load_roundtrip_csv_and_tsv() {
        let dir = TempDir::new().unwrap();
        let mut table = Table::default();
        table.rows.push(row("NA1_1"));
        table.rows.push(row("NA1_2"));

        for name in ["t.csv", "t.tsv"] {
            let path = dir.path().join("nested").join(name);
            table.save(&path).unwrap();
            let loaded = Table::load(&path).unwrap();
            assert_eq!(loaded, table);
        }
        let tsv = std::fs::read_to_string(dir.path().join("nested/t.tsv")).unwrap();
        assert!(tsv.starts_with("p1_championId\tp1_championName\t"));
    }

    #[test]
    fn seen_set_comes_from_match_id_column() {
        let mut table = Table::default();
        table.rows.push(row("NA1_1"));
        table.rows.push(row("NA1_9"));
        let seen = table.seen_set();
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("NA1_9"));
        assert_eq!(table.cell(1, "gameMode"), Some("ARAM"));
    }

    #[test]
    fn load_refuses_foreign_layouts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("other.csv");

        std::fs::write(&path, "a,b\n1,2\n").unwrap();
        let err = Table::load(&path).unwrap_err();
        assert!(err.to_string().contains("no matchId column"), "{err}");

        let mut headers = schema_headers();
        headers.swap(0, 1);
        write_table_file(&path, &headers, &[]).unwrap();
        assert!(matches!(Table::load(&path), Err(CrawlError::SchemaMismatch { .. })));
    }
}
