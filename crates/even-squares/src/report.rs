// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Single-line report of the computed squares.

use std::io::Write;

use tracing::debug;

use crate::error::ReportError;
use crate::squares::EvenSquares;

/// Label printed ahead of the list.
pub const LABEL: &str = "Squares of even numbers from 1 to 20:";

/// Formats the report line (without the trailing newline).
pub fn render_line(squares: &EvenSquares) -> String {
    format!("{LABEL} {squares}")
}

/// Writes exactly one line to `out` and flushes it.
pub fn report<W: Write>(squares: &EvenSquares, mut out: W) -> Result<(), ReportError> {
    let line = render_line(squares);
    writeln!(out, "{line}")?;
    out.flush()?;
    debug!(bytes = line.len() + 1, "report written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::squares::compute_even_squares;
    use std::io;

    const EXPECTED: &str =
        "Squares of even numbers from 1 to 20: [4, 16, 36, 64, 100, 144, 196, 256, 324, 400]";

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Accepts writes but refuses to flush.
    struct StuckFlush(Vec<u8>);

    impl Write for StuckFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush refused"))
        }
    }

    #[test]
    fn render_line_matches_expected_text() {
        assert_eq!(render_line(&compute_even_squares()), EXPECTED);
    }

    #[test]
    fn report_writes_one_newline_terminated_line() {
        let mut buf = Vec::new();
        report(&compute_even_squares(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{EXPECTED}\n"));
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(LABEL));
    }

    #[test]
    fn write_failure_is_reported() {
        let err = report(&compute_even_squares(), BrokenPipe).expect_err("write must fail");
        let ReportError::Io(inner) = err;
        assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn flush_failure_is_reported() {
        let mut sink = StuckFlush(Vec::new());
        let err = report(&compute_even_squares(), &mut sink).expect_err("flush must fail");
        assert!(err.to_string().contains("flush refused"));
        assert_eq!(sink.0, format!("{EXPECTED}\n").into_bytes());
    }
}
