use std::io::{self, Stderr, Stdout, Write};

/// Console sinks for user-facing lines: `out` for progress and results,
/// `err` for failures.
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Console::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Console { out, err }
    }

    pub fn log(&mut self, message: &str) {
        print_line(&mut self.out, message);
    }

    pub fn error(&mut self, message: &str) {
        print_line(&mut self.err, message);
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

// A closed pipe is not worth failing the run over.
fn print_line<W: Write>(w: &mut W, message: &str) {
    if let Err(e) = writeln!(w, "{}", message) {
        tracing::debug!(error = %e, "console write failed");
    }
}
