//! FizzBuzz 1..=100 with one `% 15` lookup per number

use fizzbuzz_lut::Strategy;
use fizzbuzz_lut::runner::run_to_stdout;

fn main() -> anyhow::Result<()> {
    run_to_stdout(Strategy::Direct)
}
