use std::{iter::Peekable, str::CharIndices};

use super::{error::*, token::*, *};

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct InputPos {
    pos: CharPos,
    value: char,
}

impl InputPos {
    fn new_opt(value: Option<(CharPos, char)>) -> Option<Self> {
        let (pos, value) = value?;

        Some(InputPos { pos, value })
    }
}

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    current: Option<InputPos>,
    prev: Option<char>,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        let mut chars = src.char_indices().peekable();

        Lexer {
            src,
            current: InputPos::new_opt(chars.next()),
            chars,
            prev: None,
        }
    }
}

/// Lexes the whole line, stopping at the first error.
pub fn lex(src: &str) -> Result<Vec<Spanned<Token>>, Spanned<LexError>> {
    Lexer::new(src).collect()
}

impl<'src> Lexer<'src> {
    fn pos(&self) -> CharPos {
        if let Some(InputPos { pos, .. }) = self.current {
            return pos;
        }

        self.src.len()
    }

    fn slice(&self, start: CharPos, end: CharPos) -> &'src str {
        let end = if end > self.src.len() {
            self.src.len()
        } else {
            end
        };

        &self.src[start..end]
    }

    fn spanned<T>(&self, start: CharPos, t: T) -> Spanned<T> {
        Spanned::new(start, self.pos() - self.prev.map_or(0, char::len_utf8), t)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }
}

macro_rules! consume_single {
    ($self:ident, $start:ident, $kind:expr) => {{
        $self.advance();
        let lexeme = $self.slice($start, $self.pos());
        Ok($self.spanned($start, Token::new(lexeme, $kind)))
    }};
}

impl<'src> Lexer<'src> {
    fn advance(&mut self) -> Option<InputPos> {
        let curr = self.current?;
        self.prev = Some(curr.value);
        self.current = InputPos::new_opt(self.chars.next());
        Some(curr)
    }

    fn read_while<P>(&mut self, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        let start = self.pos();

        while let Some(InputPos { value, .. }) = self.current {
            if predicate(value) {
                self.advance();
            } else {
                break;
            }
        }

        self.slice(start, self.pos())
    }

    fn skip_whitespace(&mut self) {
        self.read_while(|c| c == ' ' || c == '\t');
    }

    /// A `-` directly in front of a digit belongs to the literal, so
    /// `1-2` scans as `1` followed by `-2`.
    fn scan_num(&mut self) -> Scanned<'src> {
        let start = self.pos();

        if let Some(InputPos { value: '-', .. }) = self.current {
            self.advance();
        }
        self.read_while(|c| c.is_ascii_digit());

        let lexeme = self.slice(start, self.pos());
        Ok(self.spanned(start, Token::new(lexeme, TokenKind::Integer)))
    }

    fn scan_shift(&mut self, start: CharPos, ch: char, kind: TokenKind) -> Scanned<'src> {
        if self.peek_char() != Some(ch) {
            self.advance();
            return Err(Spanned::new(start, start, LexError::MalformedShift(ch)));
        }

        self.advance();
        consume_single!(self, start, kind)
    }

    fn scan_token(&mut self) -> Option<Scanned<'src>> {
        self.skip_whitespace();
        let start = self.pos();

        let ch = self.current.map(|InputPos { value, .. }| value)?;

        let scanned = match ch {
            '-' => match self.peek_char() {
                Some(next) if next.is_ascii_digit() => self.scan_num(),
                _ => consume_single!(self, start, TokenKind::Minus),
            },
            '<' => self.scan_shift(start, ch, TokenKind::LShift),
            '>' => self.scan_shift(start, ch, TokenKind::RShift),
            c if c.is_ascii_digit() => self.scan_num(),
            c => match TokenKind::from_char(c) {
                Some(kind) => consume_single!(self, start, kind),
                None => {
                    self.advance();
                    Err(Spanned::new(start, start, LexError::InvalidChar(c)))
                }
            },
        };

        if let Ok(token) = &scanned {
            log::trace!("scanned {:?} at {:?}", token.node, token.span);
        }

        Some(scanned)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Scanned<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_token()
    }
}
