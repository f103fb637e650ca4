use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Line-oriented console that records every line shown to or typed by the
/// user. Generic over the input/output handles so a session can run against
/// scripted input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Vec<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Vec::new(),
        }
    }

    /// Prints one line and appends it to the transcript.
    pub fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.transcript.push(line.to_string());
        Ok(())
    }

    /// Blocks for one line of input. The line terminator is stripped before
    /// the line is recorded and returned. A closed input stream is an error;
    /// the interactive loop has nothing sensible to do without a user.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        self.transcript.push(buf.clone());
        Ok(buf)
    }

    /// Writes the transcript to `path`, one recorded line per output line.
    pub fn persist(&self, path: &Path) -> io::Result<()> {
        let mut text = String::with_capacity(self.transcript.iter().map(|l| l.len() + 1).sum());
        for line in &self.transcript {
            text.push_str(line);
            text.push('\n');
        }
        fs::write(path, text)
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn records_output_and_input_in_order() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("hello\r\nworld\n"), &mut out);
        console.emit("first prompt").unwrap();
        assert_eq!(console.read_line().unwrap(), "hello");
        console.emit("second prompt").unwrap();
        assert_eq!(console.read_line().unwrap(), "world");
        assert_eq!(
            console.transcript(),
            ["first prompt", "hello", "second prompt", "world"]
        );
        drop(console);
        assert_eq!(out, b"first prompt\nsecond prompt\n");
    }

    #[test]
    fn read_past_eof_is_an_error() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut out);
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn persist_writes_lines_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.log");

        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new("typed\n"), &mut out);
        console.emit("shown").unwrap();
        console.read_line().unwrap();
        console.persist(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "shown\ntyped\n");
    }
}
