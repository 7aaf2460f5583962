use std::path::PathBuf;

pub const DEFAULT_BASE_NAME: &str = "newFile";
pub const DEFAULT_FILE_COUNT: u32 = 3;

/// Options for a scribe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScribeOptions {
    /// Directory the letter files are created in.
    pub out_dir: PathBuf,
    /// File name prefix; the zero-based index is appended to it.
    pub base_name: String,
    /// Number of files written per run.
    pub file_count: u32,
}

impl Default for ScribeOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
            file_count: DEFAULT_FILE_COUNT,
        }
    }
}

impl ScribeOptions {
    /// Path of the file written for `index`.
    pub fn file_path(&self, index: u32) -> PathBuf {
        self.out_dir.join(format!("{}{}", self.base_name, index))
    }
}

/// A file created by the file writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes_written: u64,
}
