mod logging;

use std::io::{self, BufWriter};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randscribe_generate::{GenerationError, ScribeEngine, ScribeOptions};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Writes three files of random letters to the working directory and prints
/// the product of two random integers.
#[derive(Parser, Debug)]
#[command(name = "randscribe", version, about)]
struct Cli {}

fn main() -> Result<(), CliError> {
    let _cli = Cli::parse();
    logging::init_logging().map_err(CliError::Logging)?;

    let engine = ScribeEngine::new(ScribeOptions::default());
    let mut rng = ChaCha8Rng::from_os_rng();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = engine.run(&mut rng, &mut out)?;
    tracing::debug!(event = "product_printed", product = result.product);

    Ok(())
}
