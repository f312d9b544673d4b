// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reconstruct logical lines from CRLF-terminated physical lines.
//!
//! A physical line starting with SPACE or TAB continues the previous logical
//! line: the leading whitespace character is dropped and the rest is appended
//! without a separator.

use std::io::BufRead;

use crate::error::{DocumentError, VCardError};

/// Create a logical line iterator over an in-memory document.
#[must_use]
pub fn unfold(src: &str) -> LogicalLines<&[u8]> {
    LogicalLines::new(src.as_bytes())
}

/// One unfolded property line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line content without CRLF and with continuations joined
    pub text: String,

    /// 1-based physical line number where this logical line starts
    pub line: usize,
}

/// Iterator of logical lines over a physical line source.
///
/// Forward only and not restartable. After the first error it yields nothing.
#[derive(Debug)]
pub struct LogicalLines<R> {
    reader: R,
    /// Physical line already read that starts the next logical line
    pending: Option<LogicalLine>,
    buf: Vec<u8>,
    /// Physical lines consumed so far
    line: usize,
    finished: bool,
}

impl<R: BufRead> LogicalLines<R> {
    /// Wrap a physical line source.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            buf: Vec::new(),
            line: 0,
            finished: false,
        }
    }

    fn next_logical(&mut self) -> Result<Option<LogicalLine>, VCardError> {
        let mut current = self.pending.take();
        loop {
            let Some(physical) = self.read_physical()? else {
                return Ok(current);
            };

            match physical.strip_prefix(|c: char| c == ' ' || c == '\t') {
                Some(rest) => match current.as_mut() {
                    Some(logical) => logical.text.push_str(rest),
                    None => {
                        current = Some(LogicalLine {
                            text: rest.to_owned(),
                            line: self.line,
                        });
                    }
                },
                None => {
                    let next = LogicalLine {
                        text: physical,
                        line: self.line,
                    };
                    match current {
                        Some(logical) => {
                            self.pending = Some(next);
                            return Ok(Some(logical));
                        }
                        None => current = Some(next),
                    }
                }
            }
        }
    }

    /// Read one physical line without its CRLF terminator.
    fn read_physical(&mut self) -> Result<Option<String>, VCardError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        self.line += 1;
        let line = self.line;
        let Some(content) = self.buf.strip_suffix(b"\r\n") else {
            let err = if self.buf.ends_with(b"\n") {
                DocumentError::BareLineFeed { line }
            } else {
                DocumentError::MissingLineEnding { line }
            };
            return Err(err.into());
        };

        let text = std::str::from_utf8(content).map_err(|_| DocumentError::InvalidUtf8 { line })?;
        Ok(Some(text.to_owned()))
    }
}

impl<R: BufRead> Iterator for LogicalLines<R> {
    type Item = Result<LogicalLine, VCardError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_logical() {
            Ok(Some(logical)) => {
                tracing::trace!(line = logical.line, text = %logical.text, "logical line");
                Some(Ok(logical))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
