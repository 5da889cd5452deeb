// Copyright 2026 The Synt Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Recursive descent recognizer for the statement language.
//!
//! One method per grammar nonterminal; a single token of lookahead decides
//! every branch, and the first mismatch propagates out as a `SyntaxError`.
//! No syntax tree is built: a successful return means the consumed prefix
//! was well formed, nothing more.

use crate::common::{ErrorCode, SyntaxError};
use crate::token::{Lexer, Spanned, Token};

#[cfg(test)]
mod proptests;

/// Parser state: the lexer plus the single lookahead token.
///
/// Tokens are pulled one at a time; nothing upstream of the lookahead is
/// retained, so there is no backtracking.
struct Parser<'input> {
    lexer: Lexer<'input>,
    lookahead: Option<Spanned<Token>>,
    text_len: usize,
}

impl<'input> Parser<'input> {
    fn new(input: &'input str) -> Self {
        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next();
        Parser {
            lexer,
            lookahead,
            text_len: input.len(),
        }
    }

    /// Peek at the kind of the current token
    fn peek_kind(&self) -> Option<Token> {
        self.lookahead.map(|(_, tok, _)| tok)
    }

    /// Advance to the next token and return the consumed token
    fn advance(&mut self) -> Option<Spanned<Token>> {
        let tok = self.lookahead;
        self.lookahead = self.lexer.next();
        tok
    }

    /// Expect the current token to match the expected kind, returning an
    /// error if not
    fn expect(&mut self, expected: Token) -> Result<Spanned<Token>, SyntaxError> {
        if self.peek_kind() == Some(expected) {
            Ok(self.advance().unwrap())
        } else {
            Err(self.fail())
        }
    }

    /// Error for the current lookahead: a token no alternative accepts, or
    /// end of input if the line ended mid-production.
    fn fail(&self) -> SyntaxError {
        match self.lookahead {
            Some((start, _, end)) => SyntaxError {
                start: start as u16,
                end: end as u16,
                code: ErrorCode::UnrecognizedToken,
            },
            None => SyntaxError {
                start: self.text_len as u16,
                end: (self.text_len + 1) as u16,
                code: ErrorCode::UnrecognizedEof,
            },
        }
    }

    /// Parse a statement list: expression (';' expression)*
    fn parse_stmt_list(&mut self) -> Result<(), SyntaxError> {
        self.parse_expr()?;

        while self.peek_kind() == Some(Token::Semi) {
            self.advance();
            self.parse_expr()?;
        }

        Ok(())
    }

    /// Parse an expression.  Four lead tokens are possible; only an
    /// identifier lead may continue as an assignment.
    fn parse_expr(&mut self) -> Result<(), SyntaxError> {
        match self.peek_kind() {
            Some(Token::Neg) => {
                self.advance();
                self.parse_unary()?;
                self.parse_operator_tail()
            }
            Some(Token::LParen) => {
                self.advance();
                self.parse_expr()?;
                self.expect(Token::RParen)?;
                self.parse_operator_tail()
            }
            Some(Token::Const) => {
                self.advance();
                self.parse_operator_tail()
            }
            Some(Token::Ident) => {
                self.advance();
                self.parse_assign_tail()
            }
            _ => Err(self.fail()),
        }
    }

    /// After an identifier lead: '=' chains right-associatively, anything
    /// else falls through to the shared operator tail
    fn parse_assign_tail(&mut self) -> Result<(), SyntaxError> {
        if self.peek_kind() == Some(Token::Assign) {
            self.advance();
            self.parse_expr()
        } else {
            self.parse_operator_tail()
        }
    }

    /// Multiplicative chain, then additive chain
    fn parse_operator_tail(&mut self) -> Result<(), SyntaxError> {
        self.parse_mul_tail()?;
        self.parse_add_tail()
    }

    /// Parse a '+' chain left to right.  Each operand is a unary with its
    /// own multiplicative chain, so '*' binds tighter.
    fn parse_add_tail(&mut self) -> Result<(), SyntaxError> {
        while self.peek_kind() == Some(Token::Add) {
            self.advance();
            self.parse_unary()?;
            self.parse_mul_tail()?;
        }

        Ok(())
    }

    /// Parse a '*' chain left to right
    fn parse_mul_tail(&mut self) -> Result<(), SyntaxError> {
        while self.peek_kind() == Some(Token::Mul) {
            self.advance();
            self.parse_unary()?;
        }

        Ok(())
    }

    /// '~' nests right-associatively over a primary
    fn parse_unary(&mut self) -> Result<(), SyntaxError> {
        if self.peek_kind() == Some(Token::Neg) {
            self.advance();
            self.parse_unary()
        } else {
            self.parse_primary()
        }
    }

    /// Parse a primary: a constant, an identifier, or a parenthesized
    /// expression
    fn parse_primary(&mut self) -> Result<(), SyntaxError> {
        match self.peek_kind() {
            Some(Token::LParen) => {
                self.advance();
                self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(())
            }
            Some(Token::Const) | Some(Token::Ident) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.fail()),
        }
    }
}

/// Recognize one line of the statement language.
///
/// Returns `Ok(())` when the whole input is a valid statement list;
/// otherwise the error locates the first token no production accepts.
pub fn recognize(input: &str) -> Result<(), SyntaxError> {
    let mut parser = Parser::new(input);
    parser.parse_stmt_list()?;

    // anything left past the statement list is trailing garbage
    if let Some((start, _, end)) = parser.lookahead {
        return Err(SyntaxError {
            start: start as u16,
            end: end as u16,
            code: ErrorCode::ExtraToken,
        });
    }

    Ok(())
}
