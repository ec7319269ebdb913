//! GoogleSQL (BigQuery): backtick identifiers, triple-quoted strings,
//! QUALIFY and struct/array surface.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "ALTER COLUMN",
        "ALTER TABLE",
        "CLUSTER BY",
        "DELETE FROM",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT",
        "LIMIT",
        "MERGE INTO",
        "OMIT RECORD IF",
        "ORDER BY",
        "OPTIONS",
        "PARTITION BY",
        "QUALIFY",
        "SELECT",
        "SET",
        "UPDATE",
        "VALUES",
        "WHERE",
        "WINDOW",
    ],
    reserved_top_level_no_indent: &[
        "EXCEPT ALL",
        "EXCEPT DISTINCT",
        "INTERSECT ALL",
        "INTERSECT DISTINCT",
        "UNION ALL",
        "UNION DISTINCT",
        "UNION",
    ],
    reserved_newline: &[
        "AND",
        "CROSS JOIN",
        "ELSE",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "INNER JOIN",
        "JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "OR",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "WHEN",
        "XOR",
    ],
    reserved_plain: &[
        "ALL",
        "ANY",
        "ARRAY",
        "AS",
        "ASC",
        "ASSERT_ROWS_MODIFIED",
        "AT",
        "BETWEEN",
        "BY",
        "CASE",
        "CAST",
        "COLLATE",
        "CONTAINS",
        "CREATE",
        "CROSS",
        "CUBE",
        "CURRENT",
        "DEFAULT",
        "DEFINE",
        "DESC",
        "DISTINCT",
        "END",
        "ENUM",
        "ESCAPE",
        "EXCEPT",
        "EXCLUDE",
        "EXISTS",
        "EXTRACT",
        "FALSE",
        "FETCH",
        "FOLLOWING",
        "FOR",
        "FULL",
        "GROUP",
        "GROUPING",
        "GROUPS",
        "HASH",
        "IF",
        "IGNORE",
        "IN",
        "INNER",
        "INTERSECT",
        "INTERVAL",
        "INTO",
        "IS",
        "LATERAL",
        "LEFT",
        "LIKE",
        "LOOKUP",
        "MERGE",
        "NATURAL",
        "NEW",
        "NO",
        "NOT",
        "NULL",
        "NULLS",
        "OF",
        "ON",
        "ORDER",
        "OUTER",
        "OVER",
        "PARTITION",
        "PRECEDING",
        "PROTO",
        "RANGE",
        "RECURSIVE",
        "RESPECT",
        "RIGHT",
        "ROLLUP",
        "ROWS",
        "SOME",
        "STRUCT",
        "TABLESAMPLE",
        "THEN",
        "TO",
        "TREAT",
        "TRUE",
        "UNBOUNDED",
        "UNNEST",
        "USING",
        "WITHIN",
        "WITH",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Double],
    string_prefixes: &['R', 'B'],
    ident_styles: &[QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--", "#"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &['@'],
    quoted_placeholders: &[],
    extra_operators: &["||", "<<", ">>"],
    word_chars: &[],
    token_override: Some(set_after_by),
};
