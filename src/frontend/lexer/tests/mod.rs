//! Lexer tests module
//!
//! Organized test modules:
//! - basic: 基础测试（标识符、空白符、EOF）
//! - punctuation: 单字符标点测试
//! - operators: 运算符测试
//! - literals: 字面量测试（字符串、数字）
//! - keywords: 关键字测试
//! - comments: 注释测试
//! - errors: 错误处理测试
//! - lines: 行号跟踪测试
//! - fuzz: 基于属性的模糊测试


use crate::frontend::lexer::{scan, Token, TokenKind};
use crate::util::diagnostic::{Diagnostic, ErrorCollector};

/// Scan source, asserting no lexical errors were reported
fn scan_clean(source: &str) -> Vec<Token> {
    let mut collector = ErrorCollector::new();
    let tokens = scan(source, &mut collector);
    assert!(
        !collector.had_error(),
        "unexpected lexical errors: {:?}",
        collector.diagnostics()
    );
    tokens
}

/// Scan source, returning tokens and recorded diagnostics
fn scan_with_errors(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut collector = ErrorCollector::new();
    let tokens = scan(source, &mut collector);
    let diagnostics = collector.take();
    (tokens, diagnostics)
}

/// Token kinds for source, excluding the trailing EOF
fn kinds(source: &str) -> Vec<TokenKind> {
    scan_clean(source)
        .iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::Eof)
        .collect()
}
