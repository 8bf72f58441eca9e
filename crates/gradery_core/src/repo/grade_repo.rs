//! Grade persistence over the delimited text format.
//!
//! # Responsibility
//! - Append encoded grade lines to a per-user text file and read them back.
//! - Compose the line codec with the transposition cipher when a key is
//!   configured.
//!
//! # Invariants
//! - One record per line; line framing is handled here, not in the codec.
//! - Cipher failures on read are structural and propagate; they are never
//!   masked as a default record.

use crate::codec::{grade_line, transposition};
use crate::model::grade::Grade;
use crate::repo::{RepoError, RepoResult};
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

const GRADES_FILE_SUFFIX: &str = "_grades.txt";

/// Append/read contract for grade storage.
pub trait GradeRepository {
    /// Appends one grade. On failure the grade is not persisted; no partial
    /// write recovery is attempted.
    fn append_grade(&self, grade: &Grade) -> RepoResult<()>;

    /// Reads one grade back, or `None` when the file holds no lines.
    fn read_grade(&self) -> RepoResult<Option<Grade>>;
}

/// File-backed grade repository over the delimited text format, optionally
/// composed with the transposition cipher.
pub struct TextFileGradeRepository {
    path: PathBuf,
    cipher_key: Option<i32>,
}

impl TextFileGradeRepository {
    /// Plaintext repository for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cipher_key: None,
        }
    }

    /// Repository whose lines are obscured with the given cipher key. The
    /// same key must be used for every append and read against the file.
    pub fn with_cipher(path: impl Into<PathBuf>, key: i32) -> Self {
        Self {
            path: path.into(),
            cipher_key: Some(key),
        }
    }

    /// Repository for a user's grade file (`<username>_grades.txt`) inside
    /// `dir`, ciphered with `key`.
    pub fn for_user(dir: impl AsRef<Path>, username: &str, key: i32) -> Self {
        Self::with_cipher(
            dir.as_ref().join(format!("{username}{GRADES_FILE_SUFFIX}")),
            key,
        )
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn try_append(&self, grade: &Grade) -> RepoResult<()> {
        let line = match self.cipher_key {
            Some(key) => grade_line::encode_encrypted(grade, key)?,
            None => grade_line::encode(grade),
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        writeln!(file, "{line}").map_err(|source| self.io_error(source))
    }

    fn try_read(&self) -> RepoResult<Option<Grade>> {
        let content = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;

        // Later lines overwrite earlier ones: the last decodable record wins.
        let mut last = None;
        for line in content.lines() {
            let decoded = match self.cipher_key {
                Some(key) => transposition::decode(line, key)?,
                None => line.to_string(),
            };
            last = Some(grade_line::decode(&decoded));
        }
        Ok(last)
    }
}

impl GradeRepository for TextFileGradeRepository {
    fn append_grade(&self, grade: &Grade) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.try_append(grade) {
            Ok(()) => {
                info!(
                    "event=grade_append module=repo status=ok path={} duration_ms={}",
                    self.path.display(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=grade_append module=repo status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_grade(&self) -> RepoResult<Option<Grade>> {
        let started_at = Instant::now();
        match self.try_read() {
            Ok(grade) => {
                info!(
                    "event=grade_read module=repo status=ok path={} duration_ms={} found={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    grade.is_some()
                );
                Ok(grade)
            }
            Err(err) => {
                error!(
                    "event=grade_read module=repo status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
