// rgen-syntax/src/tokenizer.rs

use std::fmt;

/// Token kinds produced by the pattern tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Structural single-char tokens
    LParen,   // '('
    RParen,   // ')'
    Pipe,     // '|'
    Plus,     // '+'
    Star,     // '*'
    Question, // '?'
    LBrace,   // '{'
    RBrace,   // '}'
    Comma,    // ',' (only inside braces)

    // Value tokens
    /// A single character matched verbatim. Digits and `,` are literals outside braces.
    Literal(char),

    /// A decimal repeat count inside braces.
    Number(u32),
}

impl Token {
    /// Whether this token starts a repetition operator.
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Star | Token::Question | Token::LBrace
        )
    }
}

/// Token with span information (byte offsets in the original input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize, // inclusive
    pub end: usize,   // exclusive
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeErrorKind {
    UnmatchedRBrace,
    UnterminatedRange,
    UnexpectedChar(char),
    NumberTooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    pub kind: TokenizeErrorKind,
    pub at: usize, // byte offset
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenizeErrorKind::*;
        match self.kind {
            UnmatchedRBrace => write!(f, "unmatched '}}' at byte {}", self.at),
            UnterminatedRange => write!(
                f,
                "unterminated repetition range starting at byte {}",
                self.at
            ),
            UnexpectedChar(c) => write!(
                f,
                "unexpected character {:?} in repetition range at byte {}",
                c, self.at
            ),
            NumberTooLarge => write!(f, "repeat count too large at byte {}", self.at),
        }
    }
}

impl std::error::Error for TokenizeError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Mode {
    OutsideBraces,
    /// Inside `{...}`; carries the byte offset of the opening brace.
    InsideBraces(usize),
}

/// Tokenizer for a single pattern.
///
/// - Outside braces:
///   - `(` `)` `|` `+` `*` `?` are structural
///   - `{` => LBrace (switch to inside-braces mode)
///   - `}` is an error (unmatched)
///   - anything else is a one-character Literal, digits and `,` included
/// - Inside braces:
///   - digit runs => Number
///   - `,` => Comma
///   - `}` => RBrace (switch back to outside-braces mode)
///   - anything else is an error
///
/// Reaching the end of input inside braces is an unterminated range.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize, // byte offset
    mode: Mode,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            mode: Mode::OutsideBraces,
        }
    }

    pub fn tokenize_all(mut self) -> Result<Vec<SpannedToken>, TokenizeError> {
        let mut out = Vec::new();
        while let Some(tok) = self.next_token()? {
            out.push(tok);
        }
        Ok(out)
    }

    /// Returns next spanned token, or Ok(None) at end-of-input.
    pub fn next_token(&mut self) -> Result<Option<SpannedToken>, TokenizeError> {
        let Some(ch) = self.peek_char() else {
            return match self.mode {
                Mode::OutsideBraces => Ok(None),
                Mode::InsideBraces(open) => Err(TokenizeError {
                    kind: TokenizeErrorKind::UnterminatedRange,
                    at: open,
                }),
            };
        };

        let tok = match self.mode {
            Mode::OutsideBraces => self.next_outside(ch)?,
            Mode::InsideBraces(_) => self.next_inside(ch)?,
        };
        Ok(Some(tok))
    }

    fn next_outside(&mut self, ch: char) -> Result<SpannedToken, TokenizeError> {
        let start = self.pos;

        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '|' => Token::Pipe,
            '+' => Token::Plus,
            '*' => Token::Star,
            '?' => Token::Question,
            '{' => {
                self.mode = Mode::InsideBraces(start);
                Token::LBrace
            }
            '}' => {
                return Err(TokenizeError {
                    kind: TokenizeErrorKind::UnmatchedRBrace,
                    at: start,
                });
            }
            other => Token::Literal(other),
        };

        self.pos += ch.len_utf8();
        Ok(SpannedToken {
            token,
            start,
            end: self.pos,
        })
    }

    fn next_inside(&mut self, ch: char) -> Result<SpannedToken, TokenizeError> {
        let start = self.pos;

        let single = match ch {
            '}' => Some(Token::RBrace),
            ',' => Some(Token::Comma),
            _ => None,
        };

        if let Some(tok) = single {
            self.pos += 1;
            if matches!(tok, Token::RBrace) {
                self.mode = Mode::OutsideBraces;
            }
            return Ok(SpannedToken {
                token: tok,
                start,
                end: self.pos,
            });
        }

        if ch.is_ascii_digit() {
            let end = self.scan_while(|b| b.is_ascii_digit());
            let value = accumulate_digits(&self.input[start..end]).ok_or(TokenizeError {
                kind: TokenizeErrorKind::NumberTooLarge,
                at: start,
            })?;
            self.pos = end;
            return Ok(SpannedToken {
                token: Token::Number(value),
                start,
                end,
            });
        }

        Err(TokenizeError {
            kind: TokenizeErrorKind::UnexpectedChar(ch),
            at: start,
        })
    }

    fn scan_while<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let mut i = self.pos;
        while i < self.input.len() {
            let b = self.input.as_bytes()[i];
            if !pred(b) {
                break;
            }
            i += 1;
        }
        i
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// `value * 10 + digit` over an ASCII digit run; `None` on overflow.
fn accumulate_digits(digits: &str) -> Option<u32> {
    digits.bytes().try_fold(0u32, |value, b| {
        value.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}
