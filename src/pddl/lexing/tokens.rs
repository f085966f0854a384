//! Token definitions for PDDL text
//!
//! PDDL is read as plain s-expressions: parentheses, `?`-prefixed variables and
//! every other whitespace-delimited run of characters. The rules below reproduce the
//! classic "pad the punctuation, then split on whitespace" reader exactly:
//!
//! - `;` starts a comment that runs to the end of the line
//! - `(` and `)` are always tokens of their own
//! - `?` always starts a new token, but nothing forces a break after it, so
//!   `?x?y` reads as `?x` `?y` and `a?b` reads as `a` `?b`
//!
//! Whitespace is Unicode `White_Space` plus the ASCII separators `\x1c`-`\x1f`, the
//! same set a Python-style `split()` breaks on. Symbol and variable text is case
//! folded while lexing.
use logos::Logos;
use std::fmt;

/// All possible tokens in PDDL text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Hash)]
#[logos(skip r"[\s\x1c-\x1f]+")]
#[logos(skip r";[^\n]*")]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // A lone `?` is still a variable token
    #[regex(r"\?[^\s\x1c-\x1f();?]*", |lex| lex.slice().to_lowercase())]
    Variable(String),

    // Catch-all for everything that is not punctuation, whitespace or a comment
    #[regex(r"[^\s\x1c-\x1f();?]+", |lex| lex.slice().to_lowercase())]
    Symbol(String),
}

impl Token {
    /// The token text as it appears in the token sequence (lowercased)
    pub fn text(&self) -> &str {
        match self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Variable(text) | Token::Symbol(text) => text,
        }
    }

    /// Consume the token, returning its text
    pub fn into_text(self) -> String {
        match self {
            Token::Variable(text) | Token::Symbol(text) => text,
            other => other.text().to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(|result| result.ok()).collect()
    }

    #[test]
    fn test_parens() {
        let mut lexer = Token::lexer("()");
        assert_eq!(lexer.next(), Some(Ok(Token::OpenParen)));
        assert_eq!(lexer.next(), Some(Ok(Token::CloseParen)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_symbols_are_lowercased() {
        assert_eq!(
            lex_all("Define :DOMAIN"),
            vec![
                Token::Symbol("define".into()),
                Token::Symbol(":domain".into())
            ]
        );
    }

    #[test]
    fn test_parens_split_symbols() {
        assert_eq!(
            lex_all("a(b)c"),
            vec![
                Token::Symbol("a".into()),
                Token::OpenParen,
                Token::Symbol("b".into()),
                Token::CloseParen,
                Token::Symbol("c".into()),
            ]
        );
    }

    #[test]
    fn test_question_mark_only_breaks_before() {
        assert_eq!(
            lex_all("a?b"),
            vec![Token::Symbol("a".into()), Token::Variable("?b".into())]
        );
        assert_eq!(
            lex_all("?x?y"),
            vec![Token::Variable("?x".into()), Token::Variable("?y".into())]
        );
        assert_eq!(
            lex_all("? x"),
            vec![Token::Variable("?".into()), Token::Symbol("x".into())]
        );
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            lex_all("a ; b (c)\nd"),
            vec![Token::Symbol("a".into()), Token::Symbol("d".into())]
        );
        assert_eq!(lex_all("abc;def"), vec![Token::Symbol("abc".into())]);
        assert_eq!(lex_all("?x;y"), vec![Token::Variable("?x".into())]);
    }

    #[test]
    fn test_ascii_separators_split_tokens() {
        assert_eq!(
            lex_all("a\u{1c}b\u{1d}?c\u{1e}(d\u{1f})"),
            vec![
                Token::Symbol("a".into()),
                Token::Symbol("b".into()),
                Token::Variable("?c".into()),
                Token::OpenParen,
                Token::Symbol("d".into()),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("  \t\r\n\n ").is_empty());
        assert!(lex_all("; only a comment").is_empty());
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::OpenParen.text(), "(");
        assert_eq!(Token::CloseParen.to_string(), ")");
        assert_eq!(Token::Variable("?obj".into()).into_text(), "?obj");
    }
}
