//! Newline-delimited JSON framing for streamed response bodies.
//!
//! HTTP body chunks do not respect line boundaries: a fragment may arrive
//! split across several chunks, and a multi-byte UTF-8 character may be cut
//! in half. The decoder buffers raw bytes and only hands out complete lines,
//! so UTF-8 is validated per line rather than per chunk.

use qabot_types::generation::{Fragment, GenerationError};

/// Splits a byte stream into lines.
///
/// Accepts `\n` and `\r\n` terminators. Empty lines are dropped; any other
/// line (including whitespace-only) is returned for parsing.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
    /// Prefix of `buffer` already known to contain no `\n`.
    scanned: usize,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one body chunk and return every line it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(offset) = self.buffer[self.scanned..].iter().position(|&b| b == b'\n') {
            let pos = self.scanned + offset;
            let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.scanned = 0;
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if !line.is_empty() {
                lines.push(line);
            }
        }
        self.scanned = self.buffer.len();
        lines
    }

    /// Flush the trailing line at end of body, if it was not newline-terminated.
    pub fn finish(self) -> Option<Vec<u8>> {
        let mut line = self.buffer;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        (!line.is_empty()).then_some(line)
    }
}

/// Parse one complete line into a [`Fragment`].
pub fn parse_fragment(line: &[u8]) -> Result<Fragment, GenerationError> {
    let text = std::str::from_utf8(line).map_err(|e| GenerationError::Parse {
        line: String::from_utf8_lossy(line).into_owned(),
        reason: e.to_string(),
    })?;
    Fragment::parse(text)
}
