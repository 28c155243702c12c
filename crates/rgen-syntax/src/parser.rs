// rgen-syntax/src/parser.rs

use std::fmt;

use crate::ast::*;
use crate::tokenizer::{SpannedToken, Token, TokenizeError, TokenizeErrorKind, Tokenizer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// `(` without a matching `)`.
    UnmatchedLParen,
    /// `)` without a matching `(`.
    UnmatchedRParen,
    /// `}` outside a repetition range.
    UnmatchedRBrace,
    /// `{` without a closing `}`.
    UnterminatedRange,
    /// Anything inside `{...}` that is not a count, a comma or the closing brace.
    MalformedRange,
    /// `{,m}` or `{}`.
    MissingMinimum,
    /// `{n,m}` with `m < n`.
    InvertedRange,
    CountTooLarge,
    /// Empty pattern, empty group or empty alternative.
    EmptyExpression,
    /// A quantifier with no atom before it, e.g. `*a`.
    NothingToRepeat,
    /// A quantifier directly after another one, e.g. `a+*`.
    StackedQuantifier,
    /// Groups and alternations nested deeper than [`MAX_NESTING`].
    NestingTooDeep,
}

/// Deepest allowed nesting of groups and alternatives. Each `(` and each `|`
/// still open on the way down counts one level.
pub const MAX_NESTING: usize = 100;

/// A malformed pattern. Parsing is all-or-nothing: no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    fn new(kind: SyntaxErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    fn from_tokenize(input: &str, err: TokenizeError) -> Self {
        let rest = &input[err.at..];
        let first = rest.chars().next().map_or(0, char::len_utf8);
        let at = Span::new(err.at, err.at + first);

        match err.kind {
            TokenizeErrorKind::UnmatchedRBrace => Self::new(
                SyntaxErrorKind::UnmatchedRBrace,
                at,
                format!("unmatched '}}' in {:?}", input),
            ),
            TokenizeErrorKind::UnterminatedRange => Self::new(
                SyntaxErrorKind::UnterminatedRange,
                Span::new(err.at, input.len()),
                format!("unterminated repetition range {:?}", rest),
            ),
            TokenizeErrorKind::UnexpectedChar(ch) => Self::new(
                SyntaxErrorKind::MalformedRange,
                at,
                format!("unexpected character {:?} in repetition range", ch),
            ),
            TokenizeErrorKind::NumberTooLarge => {
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                Self::new(
                    SyntaxErrorKind::CountTooLarge,
                    Span::new(err.at, err.at + digits),
                    format!("repeat count {:?} is too large", &rest[..digits]),
                )
            }
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.span.start, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Parse a pattern into its syntax tree.
///
/// Grammar (recursive descent, one production per function):
///
/// ```text
/// expression ::= term* ('|' expression)?
/// term       ::= ('(' expression ')' | LITERAL) quantifier?
/// quantifier ::= '+' | '*' | '?' | '{' NUMBER (',' NUMBER?)? '}'
/// ```
///
/// Alternation nests to the right, so `a|b|c` is `a | (b | c)`.
pub fn parse_pattern(input: &str) -> Result<Node, SyntaxError> {
    let tokens = Tokenizer::new(input)
        .tokenize_all()
        .map_err(|e| SyntaxError::from_tokenize(input, e))?;

    let mut c = Cursor::new(input, &tokens);
    let node = parse_expression(&mut c)?;

    // A top-level expression only stops early at a `)` nobody opened.
    if let Some(t) = c.peek() {
        return Err(SyntaxError::new(
            SyntaxErrorKind::UnmatchedRParen,
            Span::new(t.start, t.end),
            format!("unmatched ')' after {:?}", &input[..t.start]),
        ));
    }

    log::trace!(
        "parsed {:?}: {} nodes, depth {}",
        input,
        node.size(),
        node.depth()
    );
    Ok(node)
}

fn parse_expression(c: &mut Cursor<'_>) -> Result<Node, SyntaxError> {
    let start = c.offset();
    let mut items: Vec<Node> = Vec::new();

    while let Some(t) = c.peek() {
        match t.token {
            Token::RParen => break,
            Token::Pipe => {
                let left = collapse(c, items, start)?;
                c.bump(); // consume '|'
                c.descend(t)?;
                let right = parse_expression(c)?;
                c.ascend();
                return Ok(Node::alternation(left, right));
            }
            _ => items.push(parse_term(c)?),
        }
    }

    collapse(c, items, start)
}

/// Turn the terms of one alternative into a node. One term stands for itself;
/// zero terms is an error.
fn collapse(c: &Cursor<'_>, mut items: Vec<Node>, start: usize) -> Result<Node, SyntaxError> {
    match items.len() {
        0 => Err(SyntaxError::new(
            SyntaxErrorKind::EmptyExpression,
            Span::new(start, c.offset()),
            format!("empty expression in {:?}", c.src),
        )),
        1 => Ok(items.remove(0)),
        _ => Ok(Node::concatenation(items)),
    }
}

fn parse_term(c: &mut Cursor<'_>) -> Result<Node, SyntaxError> {
    let t = c.bump().ok_or_else(|| {
        SyntaxError::new(
            SyntaxErrorKind::EmptyExpression,
            Span::new(c.src.len(), c.src.len()),
            format!("unexpected end of {:?}", c.src),
        )
    })?;

    let atom = match t.token {
        Token::LParen => {
            if c.is_eof() {
                return Err(unmatched_lparen(c, t));
            }
            c.descend(t)?;
            let inner = parse_expression(c)?;
            c.expect(|tok| matches!(tok, Token::RParen))
                .ok_or_else(|| unmatched_lparen(c, t))?;
            c.ascend();
            inner
        }
        Token::Literal(ch) => Node::Literal(ch),
        ref other if other.is_quantifier() => {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NothingToRepeat,
                Span::new(t.start, t.end),
                format!("nothing to repeat before {:?}", &c.src[t.start..t.end]),
            ));
        }
        // `)` and `|` end an expression before a term is requested; anything
        // else inside braces never leaves the tokenizer.
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptyExpression,
                Span::new(t.start, t.end),
                format!("expected a literal or '(' at {:?}", &c.src[t.start..]),
            ));
        }
    };

    if !c.peek().is_some_and(|q| q.token.is_quantifier()) {
        return Ok(atom);
    }

    let (bounds, quant_span) = parse_quantifier(c)?;

    if let Some(next) = c.peek().filter(|n| n.token.is_quantifier()) {
        let span = Span::join(quant_span, Span::new(next.start, next.end));
        return Err(SyntaxError::new(
            SyntaxErrorKind::StackedQuantifier,
            span,
            format!("stacked quantifier {:?}", &c.src[span.start..span.end]),
        ));
    }

    Ok(Node::repetition(atom, bounds))
}

fn unmatched_lparen(c: &Cursor<'_>, open: &SpannedToken) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::UnmatchedLParen,
        Span::new(open.start, c.offset()),
        format!("missing ')' to close {:?}", &c.src[open.start..c.offset()]),
    )
}

/// `+` `*` `?` or a `{...}` range. The cursor sits on the operator.
fn parse_quantifier(c: &mut Cursor<'_>) -> Result<(Bounds, Span), SyntaxError> {
    let Some(q) = c.bump() else {
        return Err(SyntaxError::new(
            SyntaxErrorKind::NothingToRepeat,
            Span::new(c.src.len(), c.src.len()),
            "expected a quantifier",
        ));
    };

    let bounds = match q.token {
        Token::Plus => Bounds::ONE_OR_MORE,
        Token::Star => Bounds::ZERO_OR_MORE,
        Token::Question => Bounds::ZERO_OR_ONE,
        Token::LBrace => return parse_range(c, q),
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NothingToRepeat,
                Span::new(q.start, q.end),
                format!("expected a quantifier at {:?}", &c.src[q.start..]),
            ));
        }
    };

    Ok((bounds, Span::new(q.start, q.end)))
}

/// `{n}`, `{n,}` or `{n,m}`. The opening brace is already consumed.
fn parse_range(c: &mut Cursor<'_>, open: &SpannedToken) -> Result<(Bounds, Span), SyntaxError> {
    let min = match c.peek() {
        Some(SpannedToken {
            token: Token::Number(n),
            ..
        }) => {
            let n = *n;
            c.bump();
            n
        }
        _ => {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MissingMinimum,
                Span::new(open.start, c.offset()),
                format!(
                    "repetition range {:?} has no minimum count",
                    range_text(c, open)
                ),
            ));
        }
    };

    let bounds = if c.expect(|t| matches!(t, Token::Comma)).is_some() {
        match c.peek() {
            Some(SpannedToken {
                token: Token::Number(m),
                ..
            }) => {
                let m = *m;
                c.bump();
                Bounds::new(min, Some(m))
            }
            // `{n,}`
            _ => Bounds::new(min, None),
        }
    } else {
        Bounds::exactly(min)
    };

    let Some(close) = c.expect(|t| matches!(t, Token::RBrace)) else {
        return Err(SyntaxError::new(
            SyntaxErrorKind::MalformedRange,
            Span::new(open.start, c.offset()),
            format!("malformed repetition range {:?}", range_text(c, open)),
        ));
    };
    let span = Span::new(open.start, close.end);

    if let Some(max) = bounds.max.filter(|&max| max < min) {
        return Err(SyntaxError::new(
            SyntaxErrorKind::InvertedRange,
            span,
            format!(
                "invalid repetition range {:?}: maximum {} is less than minimum {}",
                &c.src[span.start..span.end],
                max,
                min
            ),
        ));
    }

    Ok((bounds, span))
}

/// Source text of a range from its `{` through the next `}` (or end of input).
fn range_text<'a>(c: &Cursor<'a>, open: &SpannedToken) -> &'a str {
    let rest = &c.src[open.start..];
    match rest.find('}') {
        Some(i) => &rest[..=i],
        None => rest,
    }
}

/// Simple cursor over spanned tokens.
struct Cursor<'a> {
    src: &'a str,
    toks: &'a [SpannedToken],
    i: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str, toks: &'a [SpannedToken]) -> Self {
        Self {
            src,
            toks,
            i: 0,
            depth: 0,
        }
    }

    fn is_eof(&self) -> bool {
        self.i >= self.toks.len()
    }

    fn peek(&self) -> Option<&'a SpannedToken> {
        self.toks.get(self.i)
    }

    fn bump(&mut self) -> Option<&'a SpannedToken> {
        let t = self.toks.get(self.i);
        if t.is_some() {
            self.i += 1;
        }
        t
    }

    /// Consume the next token if `pred` accepts it.
    fn expect<F>(&mut self, pred: F) -> Option<&'a SpannedToken>
    where
        F: Fn(&Token) -> bool,
    {
        match self.peek() {
            Some(t) if pred(&t.token) => self.bump(),
            _ => None,
        }
    }

    /// Enter the group or alternative opened by `at`.
    fn descend(&mut self, at: &SpannedToken) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NestingTooDeep,
                Span::new(at.start, at.end),
                format!("pattern nests deeper than {MAX_NESTING} levels"),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Byte offset of the next token, or the input length at end of input.
    fn offset(&self) -> usize {
        self.peek().map_or(self.src.len(), |t| t.start)
    }
}
