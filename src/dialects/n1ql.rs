//! Couchbase N1QL: `$name` parameters, NEST/UNNEST clauses, USE KEYS.

use crate::dialect::{DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "DELETE FROM",
        "EXPLAIN",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INFER",
        "INSERT INTO",
        "LET",
        "LETTING",
        "LIMIT",
        "MERGE INTO",
        "NEST",
        "OFFSET",
        "ORDER BY",
        "PREPARE",
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "UNNEST",
        "UPDATE",
        "UPSERT INTO",
        "USE KEYS",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &[
        "EXCEPT ALL",
        "EXCEPT",
        "INTERSECT ALL",
        "INTERSECT",
        "MINUS",
        "UNION ALL",
        "UNION",
    ],
    reserved_newline: &[
        "AND",
        "ELSE",
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
        "ANALYZE",
        "ANY",
        "ARRAY",
        "AS",
        "ASC",
        "BEGIN",
        "BETWEEN",
        "BINARY",
        "BOOLEAN",
        "BREAK",
        "BUCKET",
        "BUILD",
        "BY",
        "CALL",
        "CASE",
        "CAST",
        "CLUSTER",
        "COLLATE",
        "COLLECTION",
        "COMMIT",
        "CONNECT",
        "CONTINUE",
        "CORRELATE",
        "COVER",
        "CREATE",
        "DATABASE",
        "DATASET",
        "DATASTORE",
        "DECLARE",
        "DECREMENT",
        "DELETE",
        "DERIVED",
        "DESC",
        "DESCRIBE",
        "DISTINCT",
        "DO",
        "DROP",
        "EACH",
        "ELEMENT",
        "END",
        "EVERY",
        "EXCLUDE",
        "EXECUTE",
        "EXISTS",
        "FETCH",
        "FIRST",
        "FLATTEN",
        "FOR",
        "FORCE",
        "FUNCTION",
        "GRANT",
        "GROUP",
        "GSI",
        "IF",
        "IGNORE",
        "ILIKE",
        "IN",
        "INCLUDE",
        "INCREMENT",
        "INDEX",
        "INLINE",
        "INNER",
        "INSERT",
        "INTO",
        "IS",
        "KEY",
        "KEYS",
        "KEYSPACE",
        "KNOWN",
        "LAST",
        "LEFT",
        "LIKE",
        "MAP",
        "MAPPING",
        "MATCHED",
        "MATERIALIZED",
        "MERGE",
        "MISSING",
        "NAMESPACE",
        "NOT",
        "NULL",
        "NUMBER",
        "OBJECT",
        "ON",
        "OPTION",
        "ORDER",
        "OUTER",
        "OVER",
        "PARSE",
        "PARTITION",
        "PASSWORD",
        "PATH",
        "POOL",
        "PRIMARY",
        "PRIVATE",
        "PRIVILEGE",
        "PROCEDURE",
        "PUBLIC",
        "RAW",
        "REALM",
        "REDUCE",
        "RENAME",
        "RETURN",
        "RETURNING",
        "REVOKE",
        "RIGHT",
        "ROLE",
        "ROLLBACK",
        "SATISFIES",
        "SCHEMA",
        "SELF",
        "SEMI",
        "SHOW",
        "SOME",
        "START",
        "STATISTICS",
        "STRING",
        "SYSTEM",
        "THEN",
        "TO",
        "TRANSACTION",
        "TRIGGER",
        "TRUNCATE",
        "UNDER",
        "UNIQUE",
        "UNKNOWN",
        "UNSET",
        "UPSERT",
        "USE",
        "USER",
        "USING",
        "VALIDATE",
        "VALUE",
        "VALUED",
        "VIA",
        "VIEW",
        "WHILE",
        "WITH",
        "WITHIN",
        "WORK",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Double],
    string_prefixes: &[],
    ident_styles: &[QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["#", "--"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &['$'],
    named_placeholders: &['$'],
    quoted_placeholders: &[],
    extra_operators: &["==", "||"],
    word_chars: &[],
    token_override: None,
};
