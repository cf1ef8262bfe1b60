//! Line and token cursor over an instance file.
//!
//! The driver pulls whole lines; section decoders pull whitespace-delimited
//! tokens, which may span lines. Whatever a decoder leaves unread on its last
//! line is served as the next line.
//!
//! Input is byte oriented: lines that are not valid UTF-8 are decoded as
//! Latin-1, so legacy single-byte comments still parse.

use std::io::BufRead;

use crate::TsplibResult;

/// Source of whitespace-delimited tokens for section decoders.
pub(crate) trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> TsplibResult<Option<String>>;
}

pub(crate) struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    pending: Option<String>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: None,
            line_number: 0,
        }
    }

    /// 1-based number of the line most recently read from the input.
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next raw line without its line terminator, or `None` at end of input.
    pub(crate) fn next_line(&mut self) -> TsplibResult<Option<String>> {
        if let Some(rest) = self.pending.take() {
            return Ok(Some(rest));
        }
        self.read_line()
    }

    fn read_line(&mut self) -> TsplibResult<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut line = self.buf.as_slice();
        line = line.strip_suffix(b"\n").unwrap_or(line);
        line = line.strip_suffix(b"\r").unwrap_or(line);
        Ok(Some(decode_line(line)))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().copied().map(char::from).collect(),
    }
}

impl<R: BufRead> TokenSource for LineReader<R> {
    fn next_token(&mut self) -> TsplibResult<Option<String>> {
        loop {
            let current = match self.pending.take() {
                Some(rest) => rest,
                None => match self.read_line()? {
                    Some(line) => line,
                    None => return Ok(None),
                },
            };

            let trimmed = current.trim_start();
            if trimmed.is_empty() {
                continue;
            }

            let end = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let (token, rest) = trimmed.split_at(end);
            if !rest.trim().is_empty() {
                self.pending = Some(rest.to_string());
            }
            return Ok(Some(token.to_string()));
        }
    }
}

#[cfg(test)]
impl TokenSource for std::str::SplitWhitespace<'_> {
    fn next_token(&mut self) -> TsplibResult<Option<String>> {
        Ok(self.next().map(str::to_string))
    }
}
