//! Spark SQL. Carries the widest join zoo of the pack and a WINDOW
//! clause override.

use crate::dialect::{window_before_paren, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "AFTER",
        "ALTER COLUMN",
        "ALTER DATABASE",
        "ALTER SCHEMA",
        "ALTER TABLE",
        "CLUSTER BY",
        "CLUSTERED BY",
        "DELETE FROM",
        "DISTRIBUTE BY",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT OVERWRITE",
        "INSERT",
        "LIMIT",
        "ORDER BY",
        "PARTITION BY",
        "PARTITIONED BY",
        "RANGE",
        "ROWS",
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "SORT BY",
        "TABLESAMPLE",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &[
        "EXCEPT ALL",
        "EXCEPT",
        "INTERSECT ALL",
        "INTERSECT",
        "UNION ALL",
        "UNION",
    ],
    reserved_newline: &[
        "AND",
        "ANTI JOIN",
        "CROSS JOIN",
        "ELSE",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "INNER JOIN",
        "JOIN",
        "LEFT ANTI JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "LEFT SEMI JOIN",
        "NATURAL ANTI JOIN",
        "NATURAL FULL OUTER JOIN",
        "NATURAL INNER JOIN",
        "NATURAL LEFT ANTI JOIN",
        "NATURAL LEFT OUTER JOIN",
        "NATURAL LEFT SEMI JOIN",
        "NATURAL OUTER JOIN",
        "NATURAL RIGHT OUTER JOIN",
        "NATURAL RIGHT SEMI JOIN",
        "NATURAL SEMI JOIN",
        "OR",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "SEMI JOIN",
        "WHEN",
        "XOR",
    ],
    reserved_plain: &[
        "ALL",
        "ANY",
        "AS",
        "ASC",
        "BETWEEN",
        "BY",
        "CASE",
        "CAST",
        "CURRENT ROW",
        "DESC",
        "DISTINCT",
        "END",
        "EXISTS",
        "FALSE",
        "FILTER",
        "FIRST",
        "FOLLOWING",
        "GLOBAL",
        "GROUPING SETS",
        "IF",
        "IGNORE NULLS",
        "IN",
        "INTERVAL",
        "INTO",
        "IS",
        "LAST",
        "LIKE",
        "NOT",
        "NULL",
        "NULLS",
        "OF",
        "ON",
        "OVER",
        "PARTITION",
        "PIVOT",
        "PRECEDING",
        "RESPECT NULLS",
        "RLIKE",
        "ROLLUP",
        "THEN",
        "TO",
        "TRUE",
        "UNBOUNDED",
        "USING",
        "WINDOW",
        "WITH",
        "WITHIN GROUP",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Double],
    string_prefixes: &['R', 'X'],
    ident_styles: &[QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: true,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &['$'],
    quoted_placeholders: &[],
    extra_operators: &["<=>", "&&", "||", "==", "->"],
    word_chars: &[],
    token_override: Some(window_before_paren),
};
