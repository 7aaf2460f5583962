use std::io::Write;
use std::time::Instant;

use rand::Rng;

use crate::errors::GenerationError;
use crate::generators::random_integer;
use crate::model::{ScribeOptions, WrittenFile};
use crate::output::write_letter_files;

/// Result of a full scribe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScribeResult {
    pub files: Vec<WrittenFile>,
    pub factors: [i64; 2],
    pub product: i64,
}

/// Runs the file writer followed by the integer product.
#[derive(Debug, Clone, Default)]
pub struct ScribeEngine {
    options: ScribeOptions,
}

impl ScribeEngine {
    pub fn new(options: ScribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScribeOptions {
        &self.options
    }

    /// The closing line printed after the product.
    pub fn naming_note(&self) -> String {
        format!(
            "File names of created files start with {}",
            self.options.base_name
        )
    }

    /// Write the letter files, then echo two integers, their product, a blank
    /// line and the naming note to `out`.
    pub fn run(
        &self,
        rng: &mut impl Rng,
        out: &mut impl Write,
    ) -> Result<ScribeResult, GenerationError> {
        tracing::info!(
            event = "run_started",
            out_dir = %self.options.out_dir.display(),
            file_count = self.options.file_count
        );
        let timer = Instant::now();

        let files = write_letter_files(&self.options, rng, out)?;

        let left = random_integer(rng, out)?;
        let right = random_integer(rng, out)?;
        let product = left * right;
        writeln!(out, "{product}").map_err(GenerationError::Echo)?;

        writeln!(out).map_err(GenerationError::Echo)?;
        writeln!(out, "{}", self.naming_note()).map_err(GenerationError::Echo)?;
        out.flush().map_err(GenerationError::Echo)?;

        tracing::info!(
            event = "run_finished",
            status = "success",
            files = files.len(),
            product = product,
            duration_ms = timer.elapsed().as_millis()
        );

        Ok(ScribeResult {
            files,
            factors: [left, right],
            product,
        })
    }
}
