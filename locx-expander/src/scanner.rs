//! Placeholder scanner
//!
//! Splits attribute text into literal runs, escaped dollars and `$(name arg)`
//! placeholders. Scanning either succeeds for the whole input or stops at the
//! first unterminated `$(`, so callers never see a partial result.

use std::ops::Range;

use locx_lexer::{Lexer, Token};

use crate::error::{ExpandError, Result};

/// A `$(name arg)` expression found in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    /// Text after the first whitespace run; empty when there is none
    pub arg: &'a str,
    /// The full `$(...)` source text
    pub raw: &'a str,
    pub span: Range<usize>,
}

impl<'a> Placeholder<'a> {
    fn new(source: &'a str, span: Range<usize>) -> Self {
        let raw = &source[span.clone()];
        let (name, arg) = split_body(&raw[2..raw.len() - 1]);
        Self {
            name,
            arg,
            raw,
            span,
        }
    }
}

/// One unit of scanned input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output as-is
    Literal(&'a str),
    /// `$$`, which expands to a single `$`
    EscapedDollar,
    Placeholder(Placeholder<'a>),
}

/// Name is everything up to the first whitespace, arg is the rest after that run
fn split_body(body: &str) -> (&str, &str) {
    match body.find(char::is_whitespace) {
        Some(pos) => (&body[..pos], body[pos..].trim_start()),
        None => (body, ""),
    }
}

/// Scan `input` into segments, failing on the first `$(` without a closing `)`
pub fn scan(input: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut pending: Option<Range<usize>> = None;
    let mut lexer = Lexer::new(input);

    while let Some(next) = lexer.next() {
        // Unknown bytes cannot occur with this token set, treat them as text anyway
        let (token, span) = match next {
            Ok(tok) => (tok.token, tok.span),
            Err(err) => (Token::Text, err.span()),
        };

        match token {
            Token::Text | Token::Dollar | Token::Close => {
                pending = Some(match pending {
                    Some(run) => run.start..span.end,
                    None => span,
                });
            }
            Token::EscapedDollar => {
                flush_literal(input, &mut pending, &mut segments);
                segments.push(Segment::EscapedDollar);
            }
            Token::Open => {
                let close = lexer
                    .by_ref()
                    .filter_map(|t| t.ok())
                    .find(|t| t.token == Token::Close);

                let Some(close) = close else {
                    log::debug!("unterminated placeholder at byte {}", span.start);
                    return Err(ExpandError::UnterminatedPlaceholder { offset: span.start });
                };

                flush_literal(input, &mut pending, &mut segments);
                segments.push(Segment::Placeholder(Placeholder::new(
                    input,
                    span.start..close.span.end,
                )));
            }
        }
    }

    flush_literal(input, &mut pending, &mut segments);
    Ok(segments)
}

fn flush_literal<'a>(
    input: &'a str,
    pending: &mut Option<Range<usize>>,
    segments: &mut Vec<Segment<'a>>,
) {
    if let Some(run) = pending.take() {
        segments.push(Segment::Literal(&input[run]));
    }
}

/// All placeholders in `input`, in source order
pub fn placeholders(input: &str) -> Result<Vec<Placeholder<'_>>> {
    Ok(scan(input)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_literal() {
        assert_eq!(scan("abc").unwrap(), vec![Segment::Literal("abc")]);
        assert_eq!(scan("a $ b ) c").unwrap(), vec![Segment::Literal("a $ b ) c")]);
        assert!(scan("").unwrap().is_empty());
    }

    #[test]
    fn test_placeholder_parts() {
        let segments = scan("---$(location a)---").unwrap();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Literal("---"));
        assert_eq!(
            segments[1],
            Segment::Placeholder(Placeholder {
                name: "location",
                arg: "a",
                raw: "$(location a)",
                span: 3..16,
            })
        );
        assert_eq!(segments[2], Segment::Literal("---"));
    }

    #[test]
    fn test_split_on_first_whitespace_run() {
        assert_eq!(split_body("location a"), ("location", "a"));
        assert_eq!(split_body("location \t //pkg:a b"), ("location", "//pkg:a b"));
        assert_eq!(split_body("location"), ("location", ""));
        assert_eq!(split_body("location "), ("location", ""));
        assert_eq!(split_body(""), ("", ""));
        assert_eq!(split_body(" a"), ("", "a"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            scan("a$$b").unwrap(),
            vec![
                Segment::Literal("a"),
                Segment::EscapedDollar,
                Segment::Literal("b"),
            ]
        );
    }

    #[test]
    fn test_placeholder_ends_at_first_close() {
        let found = placeholders("$(location a) $($(x) y)").unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].raw, "$(location a)");
        assert_eq!(found[1].raw, "$($(x)");
        assert_eq!(found[1].name, "$(x");
        assert_eq!(found[1].arg, "");
    }

    #[test]
    fn test_unterminated_reports_first_offset() {
        assert_eq!(
            scan("foo $(location a"),
            Err(ExpandError::UnterminatedPlaceholder { offset: 4 })
        );
        assert_eq!(
            scan("$(location a) $(x $(y"),
            Err(ExpandError::UnterminatedPlaceholder { offset: 14 })
        );
    }
}
