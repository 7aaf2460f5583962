use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::errors::GenerationError;
use crate::generators::{LetterString, random_letter_string};
use crate::model::{ScribeOptions, WrittenFile};

/// Create one letter file per index in `0..options.file_count`.
///
/// Each file is opened before its string is generated, so a file that cannot
/// be opened never has a string echoed for it. Files are handled strictly one
/// after another; a failure stops the loop and leaves earlier files in place.
pub fn write_letter_files(
    options: &ScribeOptions,
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<Vec<WrittenFile>, GenerationError> {
    let mut written = Vec::with_capacity(options.file_count as usize);
    for index in 0..options.file_count {
        let path = options.file_path(index);
        let file = open_letter_file(&path)?;
        let value = random_letter_string(rng, out)?;
        let bytes_written = write_letter(file, &path, &value)?;
        tracing::debug!(event = "file_written", path = %path.display(), bytes = bytes_written);
        written.push(WrittenFile {
            path,
            bytes_written,
        });
    }
    Ok(written)
}

/// Open `path` for writing, creating or truncating it. Anything other than a
/// regular file at `path` is rejected.
pub fn open_letter_file(path: &Path) -> Result<File, GenerationError> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() => {
            return Err(GenerationError::NotARegularFile(path.to_path_buf()));
        }
        _ => {}
    }

    OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(|err| GenerationError::io(path, err))
}

/// Write `value` to an opened letter file as raw ASCII bytes.
fn write_letter(file: File, path: &Path, value: &LetterString) -> Result<u64, GenerationError> {
    let bytes = value.as_bytes();
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|_| writer.flush())
        .map_err(|err| GenerationError::io(path, err))?;
    Ok(bytes.len() as u64)
}
