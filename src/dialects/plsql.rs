//! Oracle PL/SQL: `:name` bind variables, MINUS, CONNECT BY.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "ALTER COLUMN",
        "ALTER TABLE",
        "BEGIN",
        "CONNECT BY",
        "DECLARE",
        "DELETE FROM",
        "DELETE",
        "EXCEPTION",
        "FETCH FIRST",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT",
        "LIMIT",
        "LOOP",
        "MODIFY",
        "ORDER BY",
        "RETURNING",
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "START WITH",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &["INTERSECT", "MINUS", "UNION ALL", "UNION"],
    reserved_newline: &[
        "AND",
        "CROSS APPLY",
        "CROSS JOIN",
        "ELSE",
        "ELSIF",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "INNER JOIN",
        "JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "NATURAL JOIN",
        "OR",
        "OUTER APPLY",
        "OUTER JOIN",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "WHEN",
        "XOR",
    ],
    reserved_plain: &[
        "ACCESS",
        "ALL",
        "ANY",
        "AS",
        "ASC",
        "AUDIT",
        "BETWEEN",
        "BY",
        "CASE",
        "CHAR",
        "CHECK",
        "CLUSTER",
        "COLUMN",
        "COMMENT",
        "COMMIT",
        "COMPRESS",
        "CONNECT",
        "CREATE",
        "CURRENT",
        "CURSOR",
        "DATE",
        "DECIMAL",
        "DEFAULT",
        "DISTINCT",
        "DROP",
        "END",
        "ESCAPE",
        "EXCLUSIVE",
        "EXISTS",
        "FILE",
        "FLOAT",
        "FOR",
        "GRANT",
        "GROUP",
        "IDENTIFIED",
        "IMMEDIATE",
        "IN",
        "INCREMENT",
        "INDEX",
        "INITIAL",
        "INTEGER",
        "INTO",
        "IS",
        "LEVEL",
        "LIKE",
        "LOCK",
        "LONG",
        "MAXEXTENTS",
        "MLSLABEL",
        "MODE",
        "NOAUDIT",
        "NOCOMPRESS",
        "NOT",
        "NOWAIT",
        "NULL",
        "NUMBER",
        "OF",
        "OFFLINE",
        "ON",
        "ONLINE",
        "OPTION",
        "ORDER",
        "PCTFREE",
        "PRIOR",
        "PRIVILEGES",
        "PROCEDURE",
        "PUBLIC",
        "RAW",
        "RENAME",
        "RESOURCE",
        "REVOKE",
        "ROW",
        "ROWID",
        "ROWNUM",
        "ROWS",
        "SESSION",
        "SHARE",
        "SIZE",
        "SMALLINT",
        "SUCCESSFUL",
        "SYNONYM",
        "SYSDATE",
        "TABLE",
        "THEN",
        "TO",
        "TRIGGER",
        "UID",
        "UNIQUE",
        "USER",
        "VALIDATE",
        "VARCHAR",
        "VARCHAR2",
        "VIEW",
        "WHENEVER",
        "WITH",
    ],
    string_styles: &[QuoteStyle::Single],
    string_prefixes: &['N'],
    ident_styles: &[QuoteStyle::Double, QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[':'],
    named_placeholders: &[':'],
    quoted_placeholders: &[],
    extra_operators: &["**", ":=", "~=", "^=", "=>", "||"],
    word_chars: &['$', '#'],
    token_override: Some(set_after_by),
};
