//! Reserved words

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::tokens::TokenKind;

/// Reserved-word table, built on first use
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ])
});

/// Look up a reserved word; `None` when `ident` is an ordinary identifier
///
/// Matching is exact and case-sensitive.
pub fn keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}
