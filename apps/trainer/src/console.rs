//! Line-based console that records a transcript of the session.
//!
//! Everything printed and every line read is appended to the transcript,
//! which the `log` command writes to a file.

use std::io::{self, BufRead, Write};

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

    /// Print text without a trailing newline.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        self.transcript.push(text.to_string());
        Ok(())
    }

    /// Print a full line.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.newline()
    }

    pub fn newline(&mut self) -> io::Result<()> {
        self.print("\n")
    }

    /// Read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim().to_string();
        self.transcript.push(format!("{}\n", line));
        Ok(Some(line))
    }

    /// Print a prompt line and read the reply.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.println(text)?;
        self.read_line()
    }

    /// Everything shown and typed so far, in order.
    pub fn transcript(&self) -> String {
        self.transcript.concat()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
