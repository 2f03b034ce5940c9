//! Golden output verification
//!
//! Every strategy must reproduce the checked-in reference byte for byte.

use std::path::PathBuf;

use fizzbuzz_lut::Strategy;

fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("fizzbuzz_1_100.txt")
}

fn load_golden() -> Vec<u8> {
    std::fs::read(golden_path()).expect("Failed to load golden output")
}

#[test]
fn test_golden_has_100_lines() {
    let golden = load_golden();
    assert_eq!(golden.iter().filter(|&&b| b == b'\n').count(), 100);
}

#[test]
fn test_strategies_match_golden() {
    let golden = load_golden();
    for strategy in Strategy::ALL {
        let mut buf = Vec::new();
        strategy.emit(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8_lossy(&buf),
            String::from_utf8_lossy(&golden),
            "{} diverges from golden output",
            strategy
        );
    }
}
