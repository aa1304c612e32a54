//! Splits grammar text into tokens.

use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;

/// The kind of a token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    /// A letter followed by letters or digits.
    Id,
    /// `#`, which ends a declaration list or a rule.
    Hash,
    /// `##`, which ends the grammar.
    DoubleHash,
    /// `->`
    Arrow,
    /// Anything else.
    Error,
    /// The end of input.
    Eof,
}

/// A token record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// One-indexed.
    pub line: u32,
}

/// Scanner over grammar text. Returns `TokenKind::Eof` once input runs out.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            chars: input.chars().peekable(),
            line: 1,
        }
    }

    /// The line the scanner is currently on.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let c = match self.chars.next() {
            Some(c) => c,
            None => return self.token(String::new(), TokenKind::Eof),
        };
        match c {
            '#' => {
                if self.chars.next_if_eq(&'#').is_some() {
                    self.token("##".to_string(), TokenKind::DoubleHash)
                } else {
                    self.token("#".to_string(), TokenKind::Hash)
                }
            }
            '-' => {
                if self.chars.next_if_eq(&'>').is_some() {
                    self.token("->".to_string(), TokenKind::Arrow)
                } else {
                    self.token("-".to_string(), TokenKind::Error)
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut text = c.to_string();
                text.extend(
                    self.chars
                        .peeking_take_while(|c| c.is_ascii_alphanumeric()),
                );
                self.token(text, TokenKind::Id)
            }
            c => self.token(c.to_string(), TokenKind::Error),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.next_if(|c| c.is_whitespace()) {
            if c == '\n' {
                self.line += 1;
            }
        }
    }

    fn token(&self, text: String, kind: TokenKind) -> Token {
        Token {
            text,
            kind,
            line: self.line,
        }
    }
}

/// Scans the whole input. The last token is always `TokenKind::Eof`.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
