//! Job data sources.
//!
//! A source only hands back the raw tabular text; parsing happens in
//! [`super::parser`]. This keeps the store agnostic of where the CSV lives.

use std::io;
use std::path::PathBuf;

/// The CSV bundled with the binary.
const BUNDLED_JOB_DATA: &str = include_str!("../../data/job_data.csv");

/// Anything that can produce the job CSV.
///
/// Implementations:
///   - `EmbeddedSource` → the bundled `job_data.csv`
///   - `FileSource`     → a CSV file on disk
///   - `TextSource`     → an in-memory string
pub trait JobSource: Send + Sync {
    /// Short description used in logs and errors.
    fn name(&self) -> String;

    /// Read the whole source.
    fn read(&self) -> io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl JobSource for EmbeddedSource {
    fn name(&self) -> String {
        "bundled:job_data.csv".to_string()
    }

    fn read(&self) -> io::Result<String> {
        Ok(BUNDLED_JOB_DATA.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl JobSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}

#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl JobSource for TextSource {
    fn name(&self) -> String {
        "inline".to_string()
    }

    fn read(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}
