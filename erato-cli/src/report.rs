//! Result printing and timing report.

use std::io::Write;
use std::time::Duration;

use crate::error::Result;

/// Write primes separated by single spaces, followed by a newline.
pub fn write_primes<W: Write>(out: &mut W, primes: &[usize]) -> Result<()> {
    let mut first = true;
    for prime in primes {
        if !first {
            out.write_all(b" ")?;
        }
        write!(out, "{}", prime)?;
        first = false;
    }
    out.write_all(b"\n")?;
    Ok(())
}

/// Write the elapsed wall-clock time line.
pub fn write_runtime<W: Write>(out: &mut W, elapsed: Duration) -> Result<()> {
    writeln!(out, "Runtime: {:.6} seconds", elapsed.as_secs_f64())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_primes() {
        let text = render(|out| write_primes(out, &[2, 3, 5, 7]));
        assert_eq!(text, "2 3 5 7\n");
    }

    #[test]
    fn test_write_no_primes() {
        let text = render(|out| write_primes(out, &[]));
        assert_eq!(text, "\n");
    }

    #[test]
    fn test_write_runtime() {
        let text = render(|out| write_runtime(out, Duration::from_micros(1_500_250)));
        assert_eq!(text, "Runtime: 1.500250 seconds\n");
    }
}
