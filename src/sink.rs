//! Line-oriented output sink.

use std::io::{self, Write};

/// Destination for statement lines.
///
/// Lines arrive in emission order (statements, comments, and blanks alike)
/// and are forwarded as-is; no buffering across synset blocks, no grammar
/// validation.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writer-backed sink; each line goes straight to the underlying writer.
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{}", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_appends_newline_per_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line("$en = Ground(\"English Language\")").unwrap();
        sink.write_line("").unwrap();
        sink.write_line("# comment").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "$en = Ground(\"English Language\")\n\n# comment\n");
    }
}
