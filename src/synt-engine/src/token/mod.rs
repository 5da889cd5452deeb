// Copyright 2026 The Synt Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::str::CharIndices;

use lazy_static::lazy_static;

use self::Token::*;


/// Lexical classes of the statement language.
///
/// Classification discards the lexeme text: the recognizer dispatches on
/// the kind alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token {
    Neg,
    Mul,
    Add,
    Assign,
    LParen,
    RParen,
    Semi,
    Ident,
    Const,
    Undef,
}

pub type Spanned<T> = (usize, T, usize);

/// One-character-lookahead scanner over a single input line.
///
/// The cursor only moves forward; once the input is exhausted every
/// further pull yields `None`.
pub struct Lexer<'input> {
    text: &'input str,
    chars: CharIndices<'input>,
    lookahead: Option<(usize, char)>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        let mut t = Lexer {
            text: input,
            chars: input.char_indices(),
            lookahead: None,
        };
        t.bump();
        t
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.bump_n(1)
    }

    fn bump_n(&mut self, n: usize) -> Option<(usize, char)> {
        assert!(n > 0);
        self.lookahead = self.chars.nth(n - 1);
        self.lookahead
    }

    /// Maximal munge, capped at two letters: a third letter starts the
    /// next token.
    fn ident(&mut self, idx0: usize) -> Spanned<Token> {
        self.bump();
        if let Some((_, c)) = self.lookahead {
            if c.is_ascii_alphabetic() {
                self.bump();
            }
        }

        let end = match self.lookahead {
            Some((idx1, _)) => idx1,
            None => self.text.len(),
        };
        // a name is one or two letters, nothing else
        let tok = match end - idx0 {
            1 | 2 => Ident,
            _ => Undef,
        };
        (idx0, tok, end)
    }

    fn number(&mut self, idx0: usize) -> Spanned<Token> {
        use regex::{Match, Regex};

        lazy_static! {
            static ref NUMBER_RE: Regex =
                Regex::new(r"0[bB][01]*|0[xX][0-9a-fA-F]*|[0-9]+").unwrap();
        }

        let m: Match = NUMBER_RE.find(&self.text[idx0..]).unwrap();

        self.bump_n(m.end());

        let end = idx0 + m.end();
        // a radix marker with no digits after it is not a constant
        let tok = match m.as_str() {
            "0b" | "0B" | "0x" | "0X" => Undef,
            _ => Const,
        };
        (idx0, tok, end)
    }

    #[allow(clippy::unnecessary_wraps)]
    fn consume(&mut self, i: usize, tok: Token, len: usize) -> Option<Spanned<Token>> {
        self.bump();
        Some((i, tok, i + len))
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.lookahead {
                Some((i, '~')) => self.consume(i, Neg, 1),
                Some((i, '*')) => self.consume(i, Mul, 1),
                Some((i, '+')) => self.consume(i, Add, 1),
                Some((i, '=')) => self.consume(i, Assign, 1),
                Some((i, '(')) => self.consume(i, LParen, 1),
                Some((i, ')')) => self.consume(i, RParen, 1),
                Some((i, ';')) => self.consume(i, Semi, 1),
                Some((i, c)) if c.is_ascii_alphabetic() => Some(self.ident(i)),
                Some((i, c)) if c.is_ascii_digit() => Some(self.number(i)),
                Some((_, c)) if c.is_whitespace() => {
                    self.bump();
                    continue;
                }
                Some((i, _)) => {
                    self.bump();
                    let end = match self.lookahead {
                        Some((end, _)) => end,
                        None => self.text.len(),
                    };
                    Some((i, Undef, end))
                }
                None => None,
            };
        }
    }
}
