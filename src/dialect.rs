use std::str::FromStr;

use serde::Deserialize;

use crate::dialects;
use crate::error::FormatError;
use crate::token::{Token, TokenType};

/// A SQL dialect supported by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    BigQuery,
    Db2,
    Hive,
    MariaDb,
    MySql,
    N1ql,
    PlSql,
    PostgreSql,
    Redshift,
    Spark,
    #[default]
    Sql,
    Tsql,
}

pub const DIALECT_COUNT: usize = 12;

pub const ALL_DIALECTS: [Dialect; DIALECT_COUNT] = [
    Dialect::BigQuery,
    Dialect::Db2,
    Dialect::Hive,
    Dialect::MariaDb,
    Dialect::MySql,
    Dialect::N1ql,
    Dialect::PlSql,
    Dialect::PostgreSql,
    Dialect::Redshift,
    Dialect::Spark,
    Dialect::Sql,
    Dialect::Tsql,
];

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Self::BigQuery => "bigquery",
            Self::Db2 => "db2",
            Self::Hive => "hive",
            Self::MariaDb => "mariadb",
            Self::MySql => "mysql",
            Self::N1ql => "n1ql",
            Self::PlSql => "plsql",
            Self::PostgreSql => "postgresql",
            Self::Redshift => "redshift",
            Self::Spark => "spark",
            Self::Sql => "sql",
            Self::Tsql => "tsql",
        }
    }

    /// The passive data tables for this dialect.
    pub fn spec(self) -> &'static DialectSpec {
        match self {
            Self::BigQuery => &dialects::bigquery::SPEC,
            Self::Db2 => &dialects::db2::SPEC,
            Self::Hive => &dialects::hive::SPEC,
            Self::MariaDb => &dialects::mariadb::SPEC,
            Self::MySql => &dialects::mysql::SPEC,
            Self::N1ql => &dialects::n1ql::SPEC,
            Self::PlSql => &dialects::plsql::SPEC,
            Self::PostgreSql => &dialects::postgresql::SPEC,
            Self::Redshift => &dialects::redshift::SPEC,
            Self::Spark => &dialects::spark::SPEC,
            Self::Sql => &dialects::standard::SPEC,
            Self::Tsql => &dialects::tsql::SPEC,
        }
    }

    /// Stable index into per-process caches.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::BigQuery => 0,
            Self::Db2 => 1,
            Self::Hive => 2,
            Self::MariaDb => 3,
            Self::MySql => 4,
            Self::N1ql => 5,
            Self::PlSql => 6,
            Self::PostgreSql => 7,
            Self::Redshift => 8,
            Self::Spark => 9,
            Self::Sql => 10,
            Self::Tsql => 11,
        }
    }
}

impl FromStr for Dialect {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bigquery" => Ok(Self::BigQuery),
            "db2" => Ok(Self::Db2),
            "hive" => Ok(Self::Hive),
            "mariadb" => Ok(Self::MariaDb),
            "mysql" => Ok(Self::MySql),
            "n1ql" => Ok(Self::N1ql),
            "plsql" => Ok(Self::PlSql),
            "postgresql" => Ok(Self::PostgreSql),
            "redshift" => Ok(Self::Redshift),
            "spark" => Ok(Self::Spark),
            "sql" => Ok(Self::Sql),
            "tsql" => Ok(Self::Tsql),
            _ => Err(FormatError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Quoting style for strings and identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `'...'` with doubled-quote and backslash escapes.
    Single,
    /// `"..."` with doubled-quote and backslash escapes.
    Double,
    /// `` `...` `` with doubled-backtick escape.
    Backtick,
    /// `[...]` with doubled `]]` escape.
    Bracket,
    /// `$tag$...$tag$` dollar quoting.
    Dollar,
}

/// Context handed to a dialect's `token_override` hook.
#[derive(Debug, Clone, Copy)]
pub struct OverrideContext<'a> {
    pub previous_reserved: Option<&'a Token>,
    pub next: Option<&'a Token>,
}

/// Per-token override hook for dialect quirks. Returns `Some` to replace
/// the token before the engine dispatches on it.
pub type TokenOverride = fn(&Token, OverrideContext<'_>) -> Option<Token>;

/// Passive per-dialect tables consulted by the tokenizer. No code lives
/// here; the four keyword sets are disjoint and matched case-insensitively,
/// longest first, whole-word only.
pub struct DialectSpec {
    pub reserved_top_level: &'static [&'static str],
    pub reserved_top_level_no_indent: &'static [&'static str],
    pub reserved_newline: &'static [&'static str],
    pub reserved_plain: &'static [&'static str],

    /// Styles that lex as string literals.
    pub string_styles: &'static [QuoteStyle],
    /// Prefix letters allowed before a single-quoted string (N'...', E'...').
    pub string_prefixes: &'static [char],
    /// Styles that lex as quoted identifiers (emitted as words).
    pub ident_styles: &'static [QuoteStyle],

    /// Word parens beyond `(` / `)`, e.g. CASE / END.
    pub open_paren_words: &'static [&'static str],
    pub close_paren_words: &'static [&'static str],

    /// Line comment markers, e.g. `--`, `#`.
    pub line_comments: &'static [&'static str],
    pub nested_block_comments: bool,

    /// Prefix characters for positional placeholders (`?`).
    pub indexed_placeholders: &'static [char],
    /// Prefix characters for numbered placeholders (`$1`).
    pub numbered_placeholders: &'static [char],
    /// Prefix characters for named placeholders (`:name`, `@var`).
    pub named_placeholders: &'static [char],
    /// Prefix characters that also accept a quoted name (`@'a b'`).
    pub quoted_placeholders: &'static [char],

    /// Multi-character operators beyond the common comparison set.
    pub extra_operators: &'static [&'static str],
    /// Extra characters allowed inside bare words.
    pub word_chars: &'static [char],

    pub token_override: Option<TokenOverride>,
}

/// Reclassify a top-level `SET` as a plain reserved word when it follows
/// `BY` (e.g. `PARTITION BY SET`), where it cannot be starting a clause.
pub(crate) fn set_after_by(token: &Token, ctx: OverrideContext<'_>) -> Option<Token> {
    if token.token_type == TokenType::ReservedTopLevel
        && token.is_keyword("SET")
        && ctx.previous_reserved.is_some_and(|t| {
            t.value
                .split_whitespace()
                .next_back()
                .is_some_and(|w| w.eq_ignore_ascii_case("BY"))
        })
    {
        let mut replaced = token.clone();
        replaced.token_type = TokenType::Reserved;
        return Some(replaced);
    }
    None
}

/// Spark: `WINDOW` directly before `(` anchors a clause of its own.
pub(crate) fn window_before_paren(token: &Token, ctx: OverrideContext<'_>) -> Option<Token> {
    if token.token_type == TokenType::Reserved
        && token.is_keyword("WINDOW")
        && ctx
            .next
            .is_some_and(|t| t.token_type == TokenType::OpenParen && t.value == "(")
    {
        let mut replaced = token.clone();
        replaced.token_type = TokenType::ReservedTopLevel;
        return Some(replaced);
    }
    set_after_by(token, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_name() {
        assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::PostgreSql);
        assert_eq!("TSQL".parse::<Dialect>().unwrap(), Dialect::Tsql);
        assert!(matches!(
            "oracle9".parse::<Dialect>(),
            Err(FormatError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn test_default_dialect() {
        assert_eq!(Dialect::default(), Dialect::Sql);
    }

    #[test]
    fn test_indexes_are_distinct() {
        let mut seen = [false; DIALECT_COUNT];
        for dialect in ALL_DIALECTS {
            assert!(!seen[dialect.index()]);
            seen[dialect.index()] = true;
        }
    }

    #[test]
    fn test_every_spec_has_core_keywords() {
        for dialect in ALL_DIALECTS {
            let spec = dialect.spec();
            assert!(
                spec.reserved_top_level.iter().any(|k| *k == "SELECT"),
                "{} is missing SELECT",
                dialect.name()
            );
            assert!(!spec.reserved_newline.is_empty(), "{}", dialect.name());
            assert!(!spec.reserved_plain.is_empty(), "{}", dialect.name());
        }
    }

    #[test]
    fn test_set_after_by_override() {
        let by = Token::new(TokenType::ReservedTopLevel, "PARTITION BY", "", 0);
        let set = Token::new(TokenType::ReservedTopLevel, "SET", " ", 13);
        let ctx = OverrideContext {
            previous_reserved: Some(&by),
            next: None,
        };
        let replaced = set_after_by(&set, ctx).unwrap();
        assert_eq!(replaced.token_type, TokenType::Reserved);

        let select = Token::new(TokenType::ReservedTopLevel, "SELECT", "", 0);
        let ctx = OverrideContext {
            previous_reserved: Some(&select),
            next: None,
        };
        assert!(set_after_by(&set, ctx).is_none());
    }

    #[test]
    fn test_spark_window_override() {
        let window = Token::new(TokenType::Reserved, "WINDOW", " ", 0);
        let paren = Token::new(TokenType::OpenParen, "(", "", 7);
        let ctx = OverrideContext {
            previous_reserved: None,
            next: Some(&paren),
        };
        let replaced = window_before_paren(&window, ctx).unwrap();
        assert_eq!(replaced.token_type, TokenType::ReservedTopLevel);
    }
}
