// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Syntax layer of the card grammar.
//!
//! ```text
//! Physical Lines → Unfolder → Logical Lines → Lexer → Tokens → Scanner → Content Lines
//! ```

pub mod lexer;
pub mod scanner;
pub mod unfold;

use std::ops::Range;

pub use crate::syntax::lexer::{SpannedToken, Token, tokenize};
pub use crate::syntax::scanner::{ContentLine, ScannedParameter, scan_content_line};
pub use crate::syntax::unfold::{LogicalLine, LogicalLines, unfold};

/// Byte range inside a logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position of the span
    pub start: usize,
    /// End position of the span
    pub end: usize,
}

impl Span {
    /// Create a new span from start and end positions
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Convert to a standard range
    #[must_use]
    pub const fn into_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
