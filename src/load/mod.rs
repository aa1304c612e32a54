//! Allows us to load context-free grammars from simplified BNF text.
//!
//! ```text
//! S A B #
//! S -> A B #
//! A -> a #
//! A -> #
//! B -> b #
//! ##
//! ```
//!
//! Non-terminals are declared up front. Any right-hand name that is not a declared
//! non-terminal becomes a terminal, in order of first appearance. An empty right-hand side
//! stands for epsilon.

pub mod lexer;

use std::error::Error;
use std::fmt;

use log::debug;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

use self::lexer::{Lexer, Token, TokenKind};

/// The two ways loading can fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadErrorKind {
    /// Input ended before the closing `##`.
    IncompleteGrammar,
    /// A malformed token appeared in the grammar.
    SpecificationError,
}

/// Represents an error when loading a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
    /// Human-readable reason for the error.
    pub reason: String,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadErrorKind::IncompleteGrammar => write!(f, "incomplete grammar"),
            LoadErrorKind::SpecificationError => write!(f, "specification error"),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at line {}", self.kind, self.line)
    }
}

impl Error for LoadError {}

/// Loads a grammar from text.
pub fn load_grammar(input: &str) -> Result<Grammar, LoadError> {
    GrammarLoader::new(input).load()
}

impl Grammar {
    /// Loads a grammar from text. See the `load` module.
    pub fn load(input: &str) -> Result<Self, LoadError> {
        load_grammar(input)
    }
}

struct GrammarLoader<'a> {
    lexer: Lexer<'a>,
    grammar: Grammar,
}

impl<'a> GrammarLoader<'a> {
    fn new(input: &'a str) -> Self {
        GrammarLoader {
            lexer: Lexer::new(input),
            grammar: Grammar::new(),
        }
    }

    fn load(mut self) -> Result<Grammar, LoadError> {
        if self.declarations()? {
            self.rules()?;
        }
        debug!(
            "loaded {} non-terminals, {} terminals, {} rules",
            self.grammar.symbols().num_nonterminals(),
            self.grammar.symbols().num_terminals(),
            self.grammar.rules().len()
        );
        Ok(self.grammar)
    }

    /// Reads non-terminal names up to `#`. Returns `false` if the grammar ends right away.
    fn declarations(&mut self) -> Result<bool, LoadError> {
        let mut first = true;
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::DoubleHash if first => return Ok(false),
                TokenKind::Id => {
                    self.grammar
                        .nonterminal(&token.text)
                        .map_err(|error| specification_error(&token, error.to_string()))?;
                }
                TokenKind::Hash => return Ok(true),
                _ => return Err(unexpected(&token, "in non-terminal declarations")),
            }
            first = false;
        }
    }

    fn rules(&mut self) -> Result<(), LoadError> {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::DoubleHash => return Ok(()),
                TokenKind::Id => self.rule(&token)?,
                _ => return Err(unexpected(&token, "at the start of a rule")),
            }
        }
    }

    fn rule(&mut self, lhs_token: &Token) -> Result<(), LoadError> {
        let lhs = match self.grammar.symbols().lookup(&lhs_token.text) {
            Some(sym) if self.grammar.symbols().is_nonterminal(sym) => sym,
            _ => {
                return Err(specification_error(
                    lhs_token,
                    format!("`{}` is not a declared non-terminal", lhs_token.text),
                ))
            }
        };

        let arrow = self.lexer.next_token();
        if arrow.kind != TokenKind::Arrow {
            return Err(unexpected(&arrow, "where `->` was expected"));
        }

        let mut rhs = vec![];
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Hash => break,
                TokenKind::Id => rhs.push(self.rhs_symbol(&token)?),
                _ => return Err(unexpected(&token, "in a right-hand side")),
            }
        }
        if rhs.is_empty() {
            rhs.push(self.grammar.epsilon());
        }
        self.grammar.rules_mut().add_rule(lhs, rhs);
        Ok(())
    }

    fn rhs_symbol(&mut self, token: &Token) -> Result<Symbol, LoadError> {
        match self.grammar.symbols().lookup(&token.text) {
            Some(sym) => Ok(sym),
            None => self
                .grammar
                .symbols_mut()
                .insert_terminal(&token.text)
                .map_err(|error| specification_error(token, error.to_string())),
        }
    }
}

fn specification_error(token: &Token, reason: String) -> LoadError {
    debug!("line {}: {}", token.line, reason);
    LoadError {
        kind: LoadErrorKind::SpecificationError,
        line: token.line,
        reason,
    }
}

fn unexpected(token: &Token, context: &str) -> LoadError {
    if token.kind == TokenKind::Eof {
        let reason = format!("input ended {}", context);
        debug!("line {}: {}", token.line, reason);
        LoadError {
            kind: LoadErrorKind::IncompleteGrammar,
            line: token.line,
            reason,
        }
    } else {
        specification_error(token, format!("unexpected `{}` {}", token.text, context))
    }
}
