use std::io::{self, Write};

/// Library entry point.
///
/// Holds no state and cannot fail; calling it any number of times from any
/// thread is equivalent to calling it once.
pub fn init() {
    tracing::trace!("pixles_media {} entry point", env!("CARGO_PKG_VERSION"));
}

/// Writes each string on its own line to standard output, in order.
///
/// Output errors (closed pipe, full disk) are ignored.
pub fn print_vector<S: AsRef<str>>(strings: &[S]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_vector(&mut out, strings) {
        tracing::debug!("Discarding print_vector output error: {}", e);
    }
}

/// [`print_vector`] against an arbitrary writer.
pub fn write_vector<W: Write, S: AsRef<str>>(out: &mut W, strings: &[S]) -> io::Result<()> {
    for s in strings {
        writeln!(out, "{}", s.as_ref())?;
    }
    out.flush()
}
