use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use randscribe_generate::errors::GenerationError;
use randscribe_generate::generators::{INTEGER_RANGE, sample_integer, sample_letter_string};
use randscribe_generate::{ScribeEngine, ScribeOptions};

fn temp_out_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("randscribe_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn engine_for(dir: &PathBuf) -> ScribeEngine {
    ScribeEngine::new(ScribeOptions {
        out_dir: dir.clone(),
        ..ScribeOptions::default()
    })
}

#[test]
fn run_prints_expected_sequence() {
    let dir = temp_out_dir("sequence");
    let engine = engine_for(&dir);
    let mut out = Vec::new();

    let result = engine
        .run(&mut ChaCha8Rng::seed_from_u64(42), &mut out)
        .expect("run scribe");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut expected = String::new();
    for _ in 0..3 {
        expected.push_str(sample_letter_string(&mut rng).as_str());
    }
    let left = sample_integer(&mut rng);
    let right = sample_integer(&mut rng);
    expected.push_str(&format!("{left}\n{right}\n{}\n", left * right));
    expected.push_str("\nFile names of created files start with newFile\n");

    assert_eq!(String::from_utf8(out).expect("utf8"), expected);
    assert_eq!(result.factors, [left, right]);
    assert_eq!(result.product, left * right);
    assert!(result.factors.iter().all(|value| INTEGER_RANGE.contains(value)));
    assert_eq!(result.files.len(), 3);

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn same_seed_produces_identical_runs() {
    let dir_a = temp_out_dir("seed_a");
    let dir_b = temp_out_dir("seed_b");
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();

    engine_for(&dir_a)
        .run(&mut ChaCha8Rng::seed_from_u64(9), &mut out_a)
        .expect("run A");
    engine_for(&dir_b)
        .run(&mut ChaCha8Rng::seed_from_u64(9), &mut out_b)
        .expect("run B");

    assert_eq!(out_a, out_b, "stdout should be deterministic");
    for name in ["newFile0", "newFile1", "newFile2"] {
        let a = fs::read(dir_a.join(name)).expect("read A");
        let b = fs::read(dir_b.join(name)).expect("read B");
        assert_eq!(a, b, "{name} should be deterministic");
    }

    fs::remove_dir_all(&dir_a).expect("cleanup A");
    fs::remove_dir_all(&dir_b).expect("cleanup B");
}

#[test]
fn file_failure_stops_before_product() {
    let dir = temp_out_dir("blocked_run");
    let engine = engine_for(&dir);
    fs::create_dir(engine.options().file_path(0)).expect("create blocking dir");
    let mut out = Vec::new();

    let result = engine.run(&mut ChaCha8Rng::seed_from_u64(3), &mut out);

    assert!(matches!(result, Err(GenerationError::NotARegularFile(_))));
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.is_empty(), "nothing is echoed for a file that was never opened: {printed:?}");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn unopenable_out_dir_stops_before_product() {
    let dir = temp_out_dir("not_a_dir");
    let blocker = dir.join("plain_file");
    fs::write(&blocker, b"occupied").expect("create plain file");
    let engine = ScribeEngine::new(ScribeOptions {
        out_dir: blocker.clone(),
        ..ScribeOptions::default()
    });
    let mut out = Vec::new();

    let result = engine.run(&mut ChaCha8Rng::seed_from_u64(8), &mut out);

    match result {
        Err(GenerationError::Io { path, .. }) => assert_eq!(path, blocker.join("newFile0")),
        other => panic!("expected Io error, got {other:?}"),
    }
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.is_empty(), "no string, product or note expected: {printed:?}");
    assert!(!printed.contains("File names"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn broken_output_sink_is_reported() {
    let dir = temp_out_dir("broken_sink");
    let result = engine_for(&dir).run(&mut ChaCha8Rng::seed_from_u64(4), &mut BrokenSink);

    assert!(matches!(result, Err(GenerationError::Echo(_))));

    fs::remove_dir_all(&dir).expect("cleanup");
}
