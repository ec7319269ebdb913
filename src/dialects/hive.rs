//! HiveQL.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "ALTER COLUMN",
        "ALTER TABLE",
        "CLUSTER BY",
        "DISTRIBUTE BY",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT OVERWRITE",
        "INSERT",
        "LATERAL VIEW",
        "LIMIT",
        "ORDER BY",
        "SELECT",
        "SET",
        "SORT BY",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &["UNION ALL", "UNION DISTINCT", "UNION"],
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
        "LEFT SEMI JOIN",
        "OR",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "WHEN",
    ],
    reserved_plain: &[
        "ALL",
        "AS",
        "ASC",
        "BETWEEN",
        "BIGINT",
        "BINARY",
        "BOOLEAN",
        "BOTH",
        "BY",
        "CASE",
        "CAST",
        "COLUMN",
        "CONF",
        "CREATE",
        "CROSS",
        "CUBE",
        "CURRENT",
        "CURRENT_DATE",
        "CURRENT_TIMESTAMP",
        "CURSOR",
        "DATABASE",
        "DATE",
        "DECIMAL",
        "DELETE",
        "DESC",
        "DESCRIBE",
        "DISTINCT",
        "DOUBLE",
        "DROP",
        "END",
        "EXCHANGE",
        "EXISTS",
        "EXTENDED",
        "EXTERNAL",
        "FALSE",
        "FETCH",
        "FLOAT",
        "FOLLOWING",
        "FOR",
        "FULL",
        "FUNCTION",
        "GRANT",
        "GROUP",
        "GROUPING",
        "IF",
        "IMPORT",
        "IN",
        "INNER",
        "INT",
        "INTERVAL",
        "INTO",
        "IS",
        "LATERAL",
        "LEFT",
        "LESS",
        "LIKE",
        "LOCAL",
        "MACRO",
        "MAP",
        "MORE",
        "NONE",
        "NOT",
        "NULL",
        "OF",
        "ON",
        "OUT",
        "OUTER",
        "OVER",
        "PARTIALSCAN",
        "PARTITION",
        "PERCENT",
        "PRECEDING",
        "PRESERVE",
        "PROCEDURE",
        "RANGE",
        "READS",
        "REDUCE",
        "REGEXP",
        "REVOKE",
        "RIGHT",
        "RLIKE",
        "ROLLUP",
        "ROW",
        "ROWS",
        "SEMI",
        "SMALLINT",
        "TABLE",
        "TABLESAMPLE",
        "THEN",
        "TIMESTAMP",
        "TO",
        "TRANSFORM",
        "TRIGGER",
        "TRUE",
        "TRUNCATE",
        "UNBOUNDED",
        "UNIQUEJOIN",
        "USER",
        "USING",
        "UTC_TMESTAMP",
        "VARCHAR",
        "VIEWS",
        "WINDOW",
        "WITH",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Double],
    string_prefixes: &[],
    ident_styles: &[QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &['$'],
    quoted_placeholders: &[],
    extra_operators: &["<=>", "==", "||"],
    word_chars: &[],
    token_override: Some(set_after_by),
};
