use logos::Logos;
use std::ops::Range;

/// Token types for attribute text containing `$(name arg)` placeholders
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `$$`, an escaped literal dollar
    #[token("$$")]
    EscapedDollar,

    /// `$(`, start of a placeholder
    #[token("$(")]
    Open,

    /// `)`, end of a placeholder (or a stray paren outside one)
    #[token(")")]
    Close,

    /// A `$` not followed by `$` or `(`
    #[token("$")]
    Dollar,

    /// Maximal run of text containing neither `$` nor `)`
    #[regex(r"[^$)]+")]
    Text,
}

impl Token {
    /// Whether this token can start a placeholder
    pub fn is_open(&self) -> bool {
        matches!(self, Token::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub token: Token,
    pub span: Range<usize>,
}

impl TokenSpan {
    /// Source text covered by this token
    pub fn text<'source>(&self, source: &'source str) -> &'source str {
        &source[self.span.clone()]
    }
}

pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    pub fn source(&self) -> &'source str {
        self.inner.source()
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<TokenSpan, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let span = self.inner.span();

        match token {
            Ok(tok) => Some(Ok(TokenSpan { token: tok, span })),
            Err(_) => Some(Err(LexError::InvalidToken { span })),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Invalid token at {span:?}")]
    InvalidToken { span: Range<usize> },
}

impl LexError {
    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::InvalidToken { span } => span.clone(),
        }
    }
}
