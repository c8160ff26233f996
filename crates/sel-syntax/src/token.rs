//! Token definitions for SEL sources.
//!
//! Tokens are produced by a `logos` lexer. Comments (`;` to end of line) and
//! whitespace are skipped by the lexer itself, and the grouping delimiters
//! are always independent tokens, so `(f x)` and `( f x )` lex identically.

use logos::Logos;

/// Byte range of a token in the source text.
pub type Span = std::ops::Range<usize>;

/// Prefix given to atoms starting with a digit so they stay valid
/// identifiers in every target language.
pub const NUMERAL_PREFIX: &str = "BUILTIN___";

/// A lexical token.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"(\s+|;[^\n]*)")]
pub enum Token {
    #[token("(")]
    Open,

    #[token(")")]
    Close,

    /// `λ`, or its ASCII spelling `lambda`.
    #[token("λ")]
    #[token("lambda")]
    Lambda,

    #[token("let")]
    Let,

    /// Any other run of non-delimiter characters, already canonicalised.
    #[regex(r"[^\s();]+", |lex| canonical_atom(lex.slice()))]
    Atom(String),
}

impl Token {
    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Open => "'('".to_string(),
            Token::Close => "')'".to_string(),
            Token::Lambda => "'λ'".to_string(),
            Token::Let => "'let'".to_string(),
            Token::Atom(name) => format!("atom '{name}'"),
        }
    }
}

/// Map a raw symbol to its identifier-safe canonical spelling.
///
/// Operators and the boolean keywords go through a fixed table. Otherwise
/// every character outside XID_Continue is replaced with `_`, and a symbol
/// that still cannot start an identifier (a leading digit of any script) gets
/// [`NUMERAL_PREFIX`]. The result is valid in JavaScript and Python alike.
pub fn canonical_atom(symbol: &str) -> String {
    if let Some(name) = operator_name(symbol) {
        return name.to_string();
    }

    let sanitized: String = symbol
        .chars()
        .map(|c| if unicode_ident::is_xid_continue(c) { c } else { '_' })
        .collect();

    match sanitized.chars().next() {
        Some(first) if first != '_' && !unicode_ident::is_xid_start(first) => {
            format!("{NUMERAL_PREFIX}{sanitized}")
        }
        _ => sanitized,
    }
}

fn operator_name(symbol: &str) -> Option<&'static str> {
    let name = match symbol {
        "+" => "T_PLUS",
        "-" => "T_MINUS",
        "*" => "T_MULTIPLICATION",
        "/" => "T_DIVISION",
        "=" => "T_EQUAL",
        "≠" => "T_NOT_EQUAL",
        "<" => "T_IS_L_THAN",
        "≤" => "T_IS_L_THAN_EQ",
        ">" => "T_IS_G_THAN",
        "≥" => "T_IS_G_THAN_EQ",
        "∧" => "T_AND",
        "∨" => "T_OR",
        "¬" => "T_NOT",
        "∅" => "T_NULL",
        "If" => "T_IF",
        "True" => "T_TRUE",
        "False" => "T_FALSE",
        _ => return None,
    };
    Some(name)
}
