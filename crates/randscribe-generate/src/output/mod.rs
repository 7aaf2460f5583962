pub mod files;

pub use files::{open_letter_file, write_letter_files};
