//! Transact-SQL: bracketed identifiers, `@` variables (bare or quoted),
//! `N'...'` strings, compound assignment operators.

use crate::dialect::{DialectSpec, QuoteStyle};

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
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &["EXCEPT", "INTERSECT", "UNION ALL", "UNION"],
    reserved_newline: &[
        "AND",
        "CROSS APPLY",
        "CROSS JOIN",
        "ELSE",
        "FULL JOIN",
        "FULL OUTER JOIN",
        "INNER JOIN",
        "JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "OR",
        "OUTER APPLY",
        "OUTER JOIN",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "WHEN",
    ],
    reserved_plain: &[
        "ALL",
        "ANY",
        "AS",
        "ASC",
        "AUTHORIZATION",
        "BACKUP",
        "BEGIN",
        "BETWEEN",
        "BREAK",
        "BROWSE",
        "BULK",
        "BY",
        "CASCADE",
        "CASE",
        "CHECK",
        "CHECKPOINT",
        "CLOSE",
        "CLUSTERED",
        "COALESCE",
        "COLLATE",
        "COLUMN",
        "COMMIT",
        "COMPUTE",
        "CONSTRAINT",
        "CONTAINS",
        "CONTAINSTABLE",
        "CONTINUE",
        "CONVERT",
        "CREATE",
        "CROSS",
        "CURRENT",
        "CURRENT_DATE",
        "CURRENT_TIME",
        "CURRENT_TIMESTAMP",
        "CURRENT_USER",
        "CURSOR",
        "DATABASE",
        "DBCC",
        "DEALLOCATE",
        "DECLARE",
        "DEFAULT",
        "DELETE",
        "DENY",
        "DESC",
        "DISK",
        "DISTINCT",
        "DISTRIBUTED",
        "DOUBLE",
        "DROP",
        "DUMP",
        "END",
        "ERRLVL",
        "ESCAPE",
        "EXEC",
        "EXECUTE",
        "EXISTS",
        "EXIT",
        "EXTERNAL",
        "FETCH",
        "FILE",
        "FILLFACTOR",
        "FOR",
        "FOREIGN",
        "FREETEXT",
        "FREETEXTTABLE",
        "FULL",
        "FUNCTION",
        "GOTO",
        "GRANT",
        "GROUP",
        "HOLDLOCK",
        "IDENTITY",
        "IDENTITYCOL",
        "IDENTITY_INSERT",
        "IF",
        "IN",
        "INDEX",
        "INNER",
        "INTO",
        "IS",
        "KEY",
        "KILL",
        "LEFT",
        "LIKE",
        "LINENO",
        "LOAD",
        "MERGE",
        "NATIONAL",
        "NOCHECK",
        "NONCLUSTERED",
        "NOT",
        "NULL",
        "NULLIF",
        "OF",
        "OFF",
        "OFFSETS",
        "ON",
        "OPEN",
        "OPENDATASOURCE",
        "OPENQUERY",
        "OPENROWSET",
        "OPENXML",
        "OPTION",
        "OUTER",
        "OVER",
        "PERCENT",
        "PIVOT",
        "PLAN",
        "PRECISION",
        "PRIMARY",
        "PRINT",
        "PROC",
        "PROCEDURE",
        "PUBLIC",
        "RAISERROR",
        "READ",
        "READTEXT",
        "RECONFIGURE",
        "REFERENCES",
        "REPLICATION",
        "RESTORE",
        "RESTRICT",
        "RETURN",
        "REVERT",
        "REVOKE",
        "RIGHT",
        "ROLLBACK",
        "ROWCOUNT",
        "ROWGUIDCOL",
        "RULE",
        "SAVE",
        "SCHEMA",
        "SECURITYAUDIT",
        "SEMANTICKEYPHRASETABLE",
        "SEMANTICSIMILARITYDETAILSTABLE",
        "SEMANTICSIMILARITYTABLE",
        "SESSION_USER",
        "SETUSER",
        "SHUTDOWN",
        "SOME",
        "STATISTICS",
        "SYSTEM_USER",
        "TABLE",
        "TABLESAMPLE",
        "TEXTSIZE",
        "THEN",
        "TO",
        "TOP",
        "TRAN",
        "TRANSACTION",
        "TRIGGER",
        "TRUNCATE",
        "TRY_CONVERT",
        "TSEQUAL",
        "UNIQUE",
        "UNPIVOT",
        "UPDATETEXT",
        "USE",
        "USER",
        "WAITFOR",
        "WHILE",
        "WITH",
        "WITHIN GROUP",
        "WRITETEXT",
    ],
    string_styles: &[QuoteStyle::Single],
    string_prefixes: &['N'],
    ident_styles: &[QuoteStyle::Double, QuoteStyle::Bracket],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: false,
    indexed_placeholders: &[],
    numbered_placeholders: &[],
    named_placeholders: &['@'],
    quoted_placeholders: &['@'],
    extra_operators: &["!<", "!>", "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "::"],
    word_chars: &['#'],
    token_override: None,
};
