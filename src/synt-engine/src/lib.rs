// Copyright 2026 The Synt Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

#![forbid(unsafe_code)]

pub mod common;
mod parser;
mod token;

pub use self::common::{ErrorCode, Result, SyntaxError};
pub use self::parser::recognize;
pub use self::token::{Lexer, Spanned, Token};
