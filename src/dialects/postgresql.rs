//! PostgreSQL: dollar quoting, `$1` numbered and `:name` named placeholders,
//! nested block comments, the json/regex operator zoo.

use crate::dialect::{DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "AFTER",
        "ALTER COLUMN",
        "ALTER TABLE",
        "DELETE FROM",
        "FETCH FIRST",
        "FETCH NEXT",
        "FROM",
        "GROUP BY",
        "HAVING",
        "INSERT INTO",
        "INSERT",
        "LIMIT",
        "OFFSET",
        "ORDER BY",
        "RETURNING",
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "UPDATE",
        "VALUES",
        "WHERE",
        "WINDOW",
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
        "CROSS JOIN",
        "ELSE",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "INNER JOIN",
        "JOIN",
        "LATERAL",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "NATURAL JOIN",
        "OR",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "WHEN",
    ],
    reserved_plain: &[
        "ABORT",
        "ABSOLUTE",
        "ACCESS",
        "ACTION",
        "AGGREGATE",
        "ALL",
        "ALSO",
        "ALTER",
        "ALWAYS",
        "ANALYSE",
        "ANALYZE",
        "ANY",
        "ARRAY",
        "AS",
        "ASC",
        "ASSERTION",
        "ASSIGNMENT",
        "ASYMMETRIC",
        "AT",
        "ATTACH",
        "ATTRIBUTE",
        "AUTHORIZATION",
        "BACKWARD",
        "BEFORE",
        "BEGIN",
        "BETWEEN",
        "BIGINT",
        "BINARY",
        "BIT",
        "BOOLEAN",
        "BOTH",
        "BY",
        "CACHE",
        "CALL",
        "CALLED",
        "CASCADE",
        "CASCADED",
        "CASE",
        "CAST",
        "CATALOG",
        "CHAIN",
        "CHAR",
        "CHARACTER",
        "CHARACTERISTICS",
        "CHECK",
        "CHECKPOINT",
        "CLASS",
        "CLOSE",
        "CLUSTER",
        "COALESCE",
        "COLLATE",
        "COLLATION",
        "COLUMN",
        "COLUMNS",
        "COMMENT",
        "COMMENTS",
        "COMMIT",
        "COMMITTED",
        "CONCURRENTLY",
        "CONFIGURATION",
        "CONFLICT",
        "CONNECTION",
        "CONSTRAINT",
        "CONSTRAINTS",
        "CONTENT",
        "CONTINUE",
        "CONVERSION",
        "COPY",
        "COST",
        "CREATE",
        "CROSS",
        "CSV",
        "CUBE",
        "CURRENT",
        "CURRENT_CATALOG",
        "CURRENT_DATE",
        "CURRENT_ROLE",
        "CURRENT_SCHEMA",
        "CURRENT_TIME",
        "CURRENT_TIMESTAMP",
        "CURRENT_USER",
        "CURSOR",
        "CYCLE",
        "DATA",
        "DATABASE",
        "DEALLOCATE",
        "DECLARE",
        "DEFAULT",
        "DEFAULTS",
        "DEFERRABLE",
        "DEFERRED",
        "DELETE",
        "DELIMITER",
        "DESC",
        "DETACH",
        "DICTIONARY",
        "DISABLE",
        "DISCARD",
        "DISTINCT",
        "DO",
        "DOCUMENT",
        "DOMAIN",
        "DROP",
        "EACH",
        "ENABLE",
        "ENCODING",
        "ENCRYPTED",
        "END",
        "ENUM",
        "ESCAPE",
        "EVENT",
        "EXCLUDE",
        "EXCLUDING",
        "EXCLUSIVE",
        "EXECUTE",
        "EXISTS",
        "EXPLAIN",
        "EXTENSION",
        "EXTERNAL",
        "EXTRACT",
        "FALSE",
        "FAMILY",
        "FILTER",
        "FIRST",
        "FOLLOWING",
        "FOR",
        "FORCE",
        "FOREIGN",
        "FORWARD",
        "FREEZE",
        "FULL",
        "FUNCTION",
        "FUNCTIONS",
        "GENERATED",
        "GLOBAL",
        "GRANT",
        "GRANTED",
        "GROUPING",
        "GROUPS",
        "HANDLER",
        "HEADER",
        "HOLD",
        "IDENTITY",
        "IF",
        "ILIKE",
        "IMMEDIATE",
        "IMMUTABLE",
        "IMPLICIT",
        "IMPORT",
        "IN",
        "INCLUDE",
        "INCLUDING",
        "INCREMENT",
        "INDEX",
        "INDEXES",
        "INHERIT",
        "INHERITS",
        "INITIALLY",
        "INLINE",
        "INNER",
        "INOUT",
        "INPUT",
        "INSENSITIVE",
        "INSTEAD",
        "INTERVAL",
        "INTO",
        "INVOKER",
        "IS",
        "ISNULL",
        "ISOLATION",
        "KEY",
        "LANGUAGE",
        "LARGE",
        "LAST",
        "LEADING",
        "LEAKPROOF",
        "LEFT",
        "LEVEL",
        "LIKE",
        "LISTEN",
        "LOAD",
        "LOCAL",
        "LOCALTIME",
        "LOCALTIMESTAMP",
        "LOCATION",
        "LOCK",
        "LOCKED",
        "LOGGED",
        "MAPPING",
        "MATCH",
        "MATERIALIZED",
        "MAXVALUE",
        "METHOD",
        "MINVALUE",
        "MODE",
        "MOVE",
        "NATURAL",
        "NEXT",
        "NO",
        "NONE",
        "NOT",
        "NOTHING",
        "NOTIFY",
        "NOTNULL",
        "NOWAIT",
        "NULL",
        "NULLIF",
        "NULLS",
        "OBJECT",
        "OF",
        "OFF",
        "OIDS",
        "ON",
        "ONLY",
        "OPERATOR",
        "OPTION",
        "OPTIONS",
        "ORDINALITY",
        "OUT",
        "OUTER",
        "OVER",
        "OVERLAPS",
        "OWNED",
        "OWNER",
        "PARALLEL",
        "PARSER",
        "PARTIAL",
        "PARTITION",
        "PASSING",
        "PASSWORD",
        "PLACING",
        "PLANS",
        "POLICY",
        "PRECEDING",
        "PREPARE",
        "PREPARED",
        "PRESERVE",
        "PRIMARY",
        "PRIOR",
        "PRIVILEGES",
        "PROCEDURAL",
        "PROCEDURE",
        "PROGRAM",
        "PUBLICATION",
        "QUOTE",
        "RANGE",
        "READ",
        "REASSIGN",
        "RECURSIVE",
        "REF",
        "REFERENCES",
        "REFERENCING",
        "REFRESH",
        "REINDEX",
        "RELATIVE",
        "RELEASE",
        "RENAME",
        "REPEATABLE",
        "REPLACE",
        "REPLICA",
        "RESET",
        "RESTART",
        "RESTRICT",
        "RETURNS",
        "REVOKE",
        "RIGHT",
        "ROLE",
        "ROLLBACK",
        "ROLLUP",
        "ROUTINE",
        "ROW",
        "ROWS",
        "RULE",
        "SAVEPOINT",
        "SCHEMA",
        "SCROLL",
        "SEARCH",
        "SECURITY",
        "SELF",
        "SEQUENCE",
        "SEQUENCES",
        "SERIALIZABLE",
        "SERVER",
        "SESSION",
        "SESSION_USER",
        "SHARE",
        "SHOW",
        "SIMILAR",
        "SIMPLE",
        "SKIP",
        "SNAPSHOT",
        "SOME",
        "STABLE",
        "STANDALONE",
        "START",
        "STATEMENT",
        "STATISTICS",
        "STORAGE",
        "STRICT",
        "SUBSCRIPTION",
        "SYMMETRIC",
        "SYSTEM",
        "TABLE",
        "TABLES",
        "TABLESAMPLE",
        "TABLESPACE",
        "TEMP",
        "TEMPLATE",
        "TEMPORARY",
        "THEN",
        "TO",
        "TRAILING",
        "TRANSACTION",
        "TRIGGER",
        "TRUE",
        "TRUNCATE",
        "TRUSTED",
        "TYPE",
        "TYPES",
        "UNBOUNDED",
        "UNCOMMITTED",
        "UNENCRYPTED",
        "UNIQUE",
        "UNKNOWN",
        "UNLISTEN",
        "UNLOGGED",
        "UNTIL",
        "USER",
        "USING",
        "VACUUM",
        "VALID",
        "VALIDATE",
        "VARIADIC",
        "VERBOSE",
        "VERSION",
        "VIEW",
        "VOLATILE",
        "WITH",
        "WITHIN",
        "WITHOUT",
        "WORK",
        "WRAPPER",
        "WRITE",
        "ZONE",
    ],
    string_styles: &[QuoteStyle::Single, QuoteStyle::Dollar],
    string_prefixes: &['E', 'N', 'B', 'X'],
    ident_styles: &[QuoteStyle::Double],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: true,
    indexed_placeholders: &['?'],
    numbered_placeholders: &['$'],
    named_placeholders: &[':'],
    quoted_placeholders: &[':'],
    extra_operators: &[
        "!!", "!~*", "!~~*", "!~~", "!~", "#>>", "#>", "#-", "&&", "->>", "->", "<->", "<<",
        "<@", "=>", ">>", "?&", "?|", "@>", "@@", "||/", "||", "|/", "~*", "~~*", "~~", "::",
        ":=",
    ],
    word_chars: &[],
    token_override: None,
};
