use crate::PROMPT;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// The person at the keyboard.
///
/// Writes [`PROMPT`] without a newline, flushes, and reads back exactly one
/// line. The line is returned as typed, minus its terminator, so messages can
/// echo the user's own spelling. End of input reads as an empty line, and
/// bytes that are not UTF-8 are replaced rather than rejected.
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl<R, W> Human<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn ask(&mut self) -> anyhow::Result<String> {
        write!(self.output, "{}", PROMPT).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let ref mut bytes = Vec::new();
        let n = self
            .input
            .read_until(b'\n', bytes)
            .context("read move from input")?;
        if n == 0 {
            log::debug!("input closed before a move was entered");
        }
        let line = String::from_utf8_lossy(bytes);
        Ok(Self::chomp(&line).to_string())
    }
    /// Hands back the writer so the round can print to the same place.
    pub fn into_output(self) -> W {
        self.output
    }
    fn chomp(line: &str) -> &str {
        line.strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line)
    }
}
