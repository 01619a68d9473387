pub mod cursor;

use cursor::Cursor;
use mkyc_token::{lookup_ident, Token, TokenKind};
use tracing::{debug, trace};

/// Yields every token of `input` up to, but not including, `Eof`.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    let mut lexer = Lexer::new(input);
    std::iter::from_fn(move || {
        let token = lexer.next_token();
        if !token.is_eof() {
            Some(token)
        } else {
            None
        }
    })
}

/// Single-pass scanner. Never fails: bytes it does not understand come out
/// as `Illegal` tokens and scanning carries on.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let Some(first_char) = self.cursor.first() else {
            return Token::new(TokenKind::Eof, self.cursor.slice_from(start));
        };

        let kind = match first_char {
            // One or two symbol tokens
            b'=' => self.glue_eq(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.glue_eq(TokenKind::Bang, TokenKind::NotEq),

            // One symbol tokens
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Lt,
            b'>' => TokenKind::Gt,

            c if is_letter(c) => return self.ident(start),
            c if c.is_ascii_digit() => return self.number(start),

            c if c.is_ascii() => TokenKind::Illegal,
            // Leading byte of a multi-byte character: keep the character whole.
            _ => {
                let len = self.cursor.input()[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.cursor.bump_n(len - 1);
                TokenKind::Illegal
            }
        };

        self.cursor.bump();
        let token = Token::new(kind, self.cursor.slice_from(start));
        if kind == TokenKind::Illegal {
            debug!(literal = token.literal, pos = start, "illegal token");
        }
        trace!(kind = %token.kind, literal = token.literal, "token");
        token
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Leaves the cursor on the last byte of the operator.
    fn glue_eq(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        match self.cursor.peek() {
            Some(b'=') => {
                self.cursor.bump();
                double
            }
            _ => single,
        }
    }

    fn ident(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_letter);
        let literal = self.cursor.slice_from(start);
        let token = Token::new(lookup_ident(literal), literal);
        trace!(kind = %token.kind, literal, "token");
        token
    }

    fn number(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let literal = self.cursor.slice_from(start);
        trace!(kind = %TokenKind::Int, literal, "token");
        Token::new(TokenKind::Int, literal)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

/// `?` and `!` count as letters so that `valid?` and `mutate!` are identifiers.
pub fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'?' || c == b'!'
}

pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}
