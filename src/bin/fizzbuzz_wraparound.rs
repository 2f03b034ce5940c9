//! FizzBuzz 1..=100 with a rolling mod-15 counter (no division in the loop)

use fizzbuzz_lut::Strategy;
use fizzbuzz_lut::runner::run_to_stdout;

fn main() -> anyhow::Result<()> {
    run_to_stdout(Strategy::Wraparound)
}
