use std::fmt::Display;
use std::io::{self, Write};

/// Write each item's display form to `out`, one per line, in order.
pub fn emit_each<W, I>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Print each item to stdout, one per line, in order.
///
/// Stdout is treated as always available; a failed write is logged and the remaining items are
/// dropped.
pub fn print_each<I>(items: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(err) = emit_each(&mut lock, items) {
        tracing::warn!(error = %err, "failed to write to stdout");
    }
}
