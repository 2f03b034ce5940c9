//! Writing classified steps to an output stream

use std::io::Write;

use crate::error::EmitError;
use crate::line::Step;

/// Per-step trace target, silenced unless `enable_tracing` is set
pub const STEP_TARGET: &str = "FIZZ_STEP";

/// Write every step as one line, flushing after each so the line reaches
/// the stream as soon as it is computed.
///
/// Returns the number of lines written.
pub fn emit_steps<I, W>(steps: I, out: &mut W) -> Result<usize, EmitError>
where
    I: IntoIterator<Item = Step>,
    W: Write + ?Sized,
{
    let mut written = 0;
    for step in steps {
        tracing::trace!(target: STEP_TARGET, n = step.n, line = ?step.line);
        step.line.write_to(step.n, out)?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}
