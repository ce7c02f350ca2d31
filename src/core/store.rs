//! Question Store
//!
//! Reads the CSV question bank from disk. The bank is re-read on every call;
//! nothing is cached. A missing or broken file is not an error for callers:
//! [`QuestionStore::load`] logs the cause and hands back an empty table.

use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{QuestionRecord, QuestionTable};
use crate::utils::constants::QUESTION_COLUMNS;

#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
}

impl QuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Current bank, or an empty table if it cannot be read
    pub fn load(&self) -> QuestionTable {
        match self.try_load() {
            Ok(table) => {
                debug!(path = %self.path.display(), rows = table.len(), "Question bank loaded");
                table
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    code = e.code_str(),
                    "Question bank unavailable, serving empty set: {}",
                    e
                );
                QuestionTable::empty()
            }
        }
    }

    /// Read the whole bank, failing on the first unusable row
    pub fn try_load(&self) -> AppResult<QuestionTable> {
        let file = File::open(&self.path).map_err(|e| {
            AppError::with_source(
                ErrorCode::StorageUnavailable,
                format!("cannot open {}", self.path.display()),
                e,
            )
        })?;
        read_questions(file)
    }
}

/// Parse a question bank from any reader
pub fn read_questions<R: std::io::Read>(reader: R) -> AppResult<QuestionTable> {
    // Only header names are trimmed; stored values are compared verbatim
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = QUESTION_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::storage_malformed(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: QuestionRecord = row?;
        records.push(record);
    }

    Ok(QuestionTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_valid_bank() {
        let csv = "id,topic,difficulty,question,answer\n\
                   1,Array,1,What is the index of the first element?,0\n\
                   2,Tree,2,\"How many children, at most, in a binary tree?\",2\n";
        let table = read_questions(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[1].topic, "Tree");
        assert_eq!(
            table.records[1].question,
            "How many children, at most, in a binary tree?"
        );
    }

    #[test]
    fn test_column_order_and_extras_tolerated() {
        let csv = "answer,question,difficulty,topic,id,author\n\
                   O(1),Access cost?,1,Array,9,someone\n";
        let table = read_questions(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].id, 9);
        assert_eq!(table.records[0].answer, "O(1)");
    }

    #[test]
    fn test_stored_values_kept_verbatim() {
        let csv = "id, topic ,difficulty,question,answer\n\
                   1,Array ,2,  indented question,  x\n";
        let table = read_questions(csv.as_bytes()).unwrap();
        assert_eq!(table.records[0].topic, "Array ");
        assert_eq!(table.records[0].question, "  indented question");
        assert_eq!(table.records[0].answer, "  x");

        let mut rng = rand::thread_rng();
        let matches = crate::core::selector::select(&table.records, "Array", 2, 1, &mut rng);
        assert!(matches.is_empty(), "padded topic must not match \"Array\"");
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let csv = "id,topic,question,answer\n1,Array,Q,A\n";
        let err = read_questions(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageMalformed);
        assert!(err.message.contains("difficulty"));
    }

    #[test]
    fn test_bad_row_is_malformed() {
        let csv = "id,topic,difficulty,question,answer\n1,Array,hard,Q,A\n";
        let err = read_questions(csv.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageMalformed);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = QuestionStore::new("/nonexistent/dsquiz/questions.csv");
        assert!(!store.exists());
        assert_eq!(
            store.try_load().unwrap_err().code,
            ErrorCode::StorageUnavailable
        );

        let table = store.load();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 5);
    }
}
