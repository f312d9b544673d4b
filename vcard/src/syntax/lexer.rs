// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lexer for a single unfolded vCard content line.

use std::fmt::{self, Display};

use logos::Logos;

use crate::syntax::Span;

/// Tokenize one logical line into `SpannedToken`s.
#[must_use]
pub fn tokenize<'src>(src: &'src str) -> impl IntoIterator<Item = SpannedToken<'src>> {
    Token::lexer(src).spanned().map(|(tok, span)| match tok {
        Ok(tok) => SpannedToken(tok, Span::new(span.start, span.end)),
        Err(()) => SpannedToken(Token::Error, Span::new(span.start, span.end)),
    })
}

/// Token emitted by the vCard lexer
#[derive(PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'a> {
    /// Colon (:), decimal codepoint 58
    #[token(":")]
    Colon,

    /// Semicolon (;), decimal codepoint 59
    #[token(";")]
    Semicolon,

    /// Equal sign (=), decimal codepoint 61
    #[token("=")]
    Equal,

    /// Full stop (.), decimal codepoint 46, separates a group from a name
    #[token(".")]
    Dot,

    /// Backslash followed by semicolon, a literal semicolon inside a value
    #[token(r"\;")]
    EscapedSemicolon,

    /// Backslash not followed by a semicolon
    #[token(r"\")]
    Backslash,

    /// Run of any other characters
    #[regex(r"[^:;=.\\]+")]
    Text(&'a str),

    /// Error token for lexing errors
    Error,
}

impl Token<'_> {
    /// Whether this token ends a name or a parameter.
    #[must_use]
    pub const fn is_delimiter(&self) -> bool {
        matches!(self, Self::Colon | Self::Semicolon)
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colon => write!(f, "Colon"),
            Self::Semicolon => write!(f, "Semicolon"),
            Self::Equal => write!(f, "Equal"),
            Self::Dot => write!(f, "Dot"),
            Self::EscapedSemicolon => write!(f, "EscapedSemicolon"),
            Self::Backslash => write!(f, "Backslash"),
            Self::Text(s) => write!(f, "Text({s})"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A token with its associated span in the logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'src>(pub Token<'src>, pub Span);

impl Display for SpannedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Token::*;
    use super::*;

    fn assert_tokenize(src: &str, expected: &[Token]) {
        let tokens: Vec<_> = tokenize(src).into_iter().map(|t| t.0).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn tokenizes_delimiters() {
        assert_tokenize(":;=.", &[Colon, Semicolon, Equal, Dot]);
    }

    #[test]
    fn tokenizes_property_line() {
        let src = "item1.TEL;TYPE=cell:+1-555";
        let expected = [
            Text("item1"),
            Dot,
            Text("TEL"),
            Semicolon,
            Text("TYPE"),
            Equal,
            Text("cell"),
            Colon,
            Text("+1-555"),
        ];
        assert_tokenize(src, &expected);
    }

    #[test]
    fn tokenizes_escaped_semicolon() {
        let src = r"a\;b;c";
        let expected = [Text("a"), EscapedSemicolon, Text("b"), Semicolon, Text("c")];
        assert_tokenize(src, &expected);
    }

    #[test]
    fn tokenizes_lone_backslash() {
        assert_tokenize(r"a\nb\", &[Text("a"), Backslash, Text("nb"), Backslash]);
    }

    #[test]
    fn tokenizes_unicode_and_spaces() {
        assert_tokenize("FN:Zoë Ünal", &[Text("FN"), Colon, Text("Zoë Ünal")]);
    }

    #[test]
    fn tokens_carry_spans() {
        let tokens: Vec<_> = tokenize("N:a;b").into_iter().collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens.first(), Some(&SpannedToken(Text("N"), Span::new(0, 1))));
        assert_eq!(tokens.last(), Some(&SpannedToken(Text("b"), Span::new(4, 5))));
    }
}
