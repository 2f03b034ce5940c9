//! FizzBuzz 1..=100 with a 2-bit `%5`/`%3` offset into a 4-entry table

use fizzbuzz_lut::Strategy;
use fizzbuzz_lut::runner::run_to_stdout;

fn main() -> anyhow::Result<()> {
    run_to_stdout(Strategy::Offset)
}
