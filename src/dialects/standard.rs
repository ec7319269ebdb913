//! Default dialect: broad coverage of common SQL without vendor extensions.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "ALTER COLUMN",
        "ALTER TABLE",
        "DELETE FROM",
        "FETCH FIRST",
        "FROM",
        "GROUP BY",
        "GO",
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
        "CROSS APPLY",
        "CROSS JOIN",
        "ELSE",
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
        "ACCESSIBLE",
        "ACTION",
        "AGAINST",
        "AGGREGATE",
        "ALGORITHM",
        "ALL",
        "ALTER",
        "ANALYSE",
        "ANALYZE",
        "AS",
        "ASC",
        "AUTOCOMMIT",
        "AUTO_INCREMENT",
        "BEGIN",
        "BETWEEN",
        "BINLOG",
        "BOTH",
        "CASCADE",
        "CASE",
        "CHANGE",
        "CHANGED",
        "CHARACTER SET",
        "CHARSET",
        "CHECK",
        "CHECKSUM",
        "COLLATE",
        "COLLATION",
        "COLUMN",
        "COLUMNS",
        "COMMENT",
        "COMMIT",
        "COMMITTED",
        "COMPRESSED",
        "CONCURRENT",
        "CONSTRAINT",
        "CONTAINS",
        "CONVERT",
        "CREATE",
        "CROSS",
        "CURRENT_TIMESTAMP",
        "DATABASE",
        "DATABASES",
        "DAY",
        "DAY_HOUR",
        "DAY_MINUTE",
        "DAY_SECOND",
        "DEFAULT",
        "DEFINER",
        "DELAYED",
        "DELETE",
        "DESC",
        "DESCRIBE",
        "DETERMINISTIC",
        "DISTINCT",
        "DISTINCTROW",
        "DIV",
        "DO",
        "DROP",
        "DUMPFILE",
        "DUPLICATE",
        "DYNAMIC",
        "ENCLOSED",
        "END",
        "ENGINE",
        "ENGINES",
        "ESCAPE",
        "ESCAPED",
        "EVENTS",
        "EXEC",
        "EXECUTE",
        "EXISTS",
        "EXPLAIN",
        "EXTENDED",
        "FAST",
        "FETCH",
        "FIELDS",
        "FILE",
        "FIRST",
        "FIXED",
        "FLUSH",
        "FOR",
        "FORCE",
        "FOREIGN",
        "FULL",
        "FULLTEXT",
        "FUNCTION",
        "GLOBAL",
        "GRANT",
        "GRANTS",
        "GROUP_CONCAT",
        "HEAP",
        "HIGH_PRIORITY",
        "HOSTS",
        "HOUR",
        "HOUR_MINUTE",
        "HOUR_SECOND",
        "IDENTIFIED",
        "IF",
        "IFNULL",
        "IGNORE",
        "IN",
        "INDEX",
        "INDEXES",
        "INFILE",
        "INTERVAL",
        "INTO",
        "INVOKER",
        "IS",
        "ISOLATION",
        "KEY",
        "KEYS",
        "KILL",
        "LAST_INSERT_ID",
        "LEADING",
        "LEVEL",
        "LIKE",
        "LINEAR",
        "LINES",
        "LOAD",
        "LOCAL",
        "LOCK",
        "LOCKS",
        "LOGS",
        "LOW_PRIORITY",
        "MASTER",
        "MATCH",
        "MAX_ROWS",
        "MEDIUM",
        "MERGE",
        "MINUTE",
        "MINUTE_SECOND",
        "MIN_ROWS",
        "MODE",
        "MONTH",
        "NAMES",
        "NATURAL",
        "NOT",
        "NULL",
        "OFFSET",
        "ON DELETE",
        "ON UPDATE",
        "ON",
        "ONLY",
        "OPEN",
        "OPTIMIZE",
        "OPTION",
        "OPTIONALLY",
        "OUTFILE",
        "PAGE",
        "PARTIAL",
        "PARTITION",
        "PARTITIONS",
        "PASSWORD",
        "PRIMARY",
        "PRIVILEGES",
        "PROCEDURE",
        "PROCESS",
        "PROCESSLIST",
        "PURGE",
        "QUICK",
        "RANGE",
        "READ",
        "READ_ONLY",
        "READ_WRITE",
        "REFERENCES",
        "REGEXP",
        "RELOAD",
        "RENAME",
        "REPAIR",
        "REPEATABLE",
        "REPLACE",
        "REPLICATION",
        "RESET",
        "RESTORE",
        "RESTRICT",
        "RETURN",
        "RETURNS",
        "REVOKE",
        "RLIKE",
        "ROLLBACK",
        "ROW",
        "ROWS",
        "ROW_FORMAT",
        "SECOND",
        "SECURITY",
        "SEPARATOR",
        "SERIALIZABLE",
        "SESSION",
        "SHARE",
        "SHOW",
        "SHUTDOWN",
        "SLAVE",
        "SONAME",
        "SOUNDS",
        "SQL",
        "SQL_CACHE",
        "SQL_CALC_FOUND_ROWS",
        "SQL_NO_CACHE",
        "START",
        "STARTING",
        "STATUS",
        "STOP",
        "STORAGE",
        "STRAIGHT_JOIN",
        "STRING",
        "TABLE",
        "TABLES",
        "TEMPORARY",
        "TERMINATED",
        "THEN",
        "TO",
        "TRAILING",
        "TRANSACTIONAL",
        "TRUE",
        "TRUNCATE",
        "TYPE",
        "TYPES",
        "UNCOMMITTED",
        "UNIQUE",
        "UNLOCK",
        "UNSIGNED",
        "USAGE",
        "USE",
        "USING",
        "VARIABLES",
        "VIEW",
        "WITH",
        "WORK",
        "WRITE",
        "YEAR_MONTH",
    ],
    string_styles: &[QuoteStyle::Single],
    string_prefixes: &['N', 'X'],
    ident_styles: &[QuoteStyle::Double, QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--", "#"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &[':'],
    quoted_placeholders: &[],
    extra_operators: &["||", "::"],
    word_chars: &[],
    token_override: Some(set_after_by),
};
