//! MySQL: backtick identifiers, `#` line comments, `@` session variables.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "ALTER COLUMN",
        "ALTER TABLE",
        "DELETE FROM",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT",
        "LIMIT",
        "MODIFY",
        "ORDER BY",
        "REPLACE INTO",
        "SELECT",
        "SET",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &["INTERSECT", "MINUS", "UNION ALL", "UNION DISTINCT", "UNION"],
    reserved_newline: &[
        "AND",
        "CROSS JOIN",
        "ELSE",
        "INNER JOIN",
        "JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "NATURAL JOIN",
        "OR",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "STRAIGHT_JOIN",
        "WHEN",
        "XOR",
    ],
    reserved_plain: &[
        "ALL",
        "ANALYZE",
        "AS",
        "ASC",
        "AUTO_INCREMENT",
        "BETWEEN",
        "BINARY",
        "BOTH",
        "BY",
        "CASCADE",
        "CASE",
        "CHANGE",
        "CHARACTER SET",
        "CHARSET",
        "CHECK",
        "COLLATE",
        "COLUMN",
        "CONSTRAINT",
        "CONVERT",
        "CREATE",
        "CROSS",
        "CURRENT_DATE",
        "CURRENT_TIME",
        "CURRENT_TIMESTAMP",
        "CURRENT_USER",
        "DATABASE",
        "DATABASES",
        "DEFAULT",
        "DELAYED",
        "DELETE",
        "DESC",
        "DESCRIBE",
        "DISTINCT",
        "DISTINCTROW",
        "DIV",
        "DROP",
        "DUAL",
        "DUPLICATE",
        "END",
        "ENGINE",
        "ESCAPE",
        "EXISTS",
        "EXPLAIN",
        "FALSE",
        "FOR",
        "FORCE",
        "FOREIGN",
        "FULLTEXT",
        "GENERATED",
        "GRANT",
        "GROUP",
        "HIGH_PRIORITY",
        "IF",
        "IGNORE",
        "IN",
        "INDEX",
        "INFILE",
        "INTERVAL",
        "INTO",
        "IS",
        "KEY",
        "KEYS",
        "KILL",
        "LEADING",
        "LIKE",
        "LOCALTIME",
        "LOCALTIMESTAMP",
        "LOCK",
        "LOW_PRIORITY",
        "MATCH",
        "NATURAL",
        "NOT",
        "NULL",
        "OFFSET",
        "ON DELETE",
        "ON UPDATE",
        "ON",
        "OPTIMIZE",
        "OPTION",
        "OUTFILE",
        "PARTITION",
        "PRIMARY",
        "PROCEDURE",
        "PURGE",
        "RANGE",
        "READ",
        "REFERENCES",
        "REGEXP",
        "RENAME",
        "REPLACE",
        "REQUIRE",
        "RESTRICT",
        "RETURNING",
        "REVOKE",
        "RLIKE",
        "ROW",
        "ROWS",
        "SCHEMA",
        "SEPARATOR",
        "SHOW",
        "SOUNDS",
        "SQL_BIG_RESULT",
        "SQL_CACHE",
        "SQL_CALC_FOUND_ROWS",
        "SQL_NO_CACHE",
        "SQL_SMALL_RESULT",
        "TABLE",
        "TEMPORARY",
        "TERMINATED",
        "THEN",
        "TO",
        "TRAILING",
        "TRUE",
        "TRUNCATE",
        "UNIQUE",
        "UNLOCK",
        "UNSIGNED",
        "USAGE",
        "USE",
        "USING",
        "VIEW",
        "WITH",
        "WRITE",
        "ZEROFILL",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Double],
    string_prefixes: &['N', 'X', 'B'],
    ident_styles: &[QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--", "#"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &['@'],
    quoted_placeholders: &['@'],
    extra_operators: &["<=>", "&&", "||", ":="],
    word_chars: &[],
    token_override: Some(set_after_by),
};
