//! Lexer: source text to token stream.
//!
//! Lexing is total. Every character of the input is either whitespace, part
//! of a comment, a delimiter, or part of an atom, so no input is rejected;
//! structural validation is left to the parser and the normalizer.

use crate::token::{Span, Token};
use logos::Logos;

/// Tokenize source text, keeping the byte span of each token.
pub fn lex(source: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // The skip pattern and the atom pattern together cover every char.
        debug_assert!(result.is_ok(), "unlexable input at {:?}", lexer.span());
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tracing::trace!(count = tokens.len(), "lexed source");
    tokens
}

/// Tokenize source text, dropping spans.
pub fn tokens(source: &str) -> Vec<Token> {
    lex(source).into_iter().map(|(token, _)| token).collect()
}
