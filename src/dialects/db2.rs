//! IBM Db2.

use crate::dialect::{set_after_by, DialectSpec, QuoteStyle};

pub static SPEC: DialectSpec = DialectSpec {
    reserved_top_level: &[
        "ADD",
        "AFTER",
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
        "MERGE INTO",
        "ORDER BY",
        "SELECT",
        "SET CURRENT SCHEMA",
        "SET SCHEMA",
        "SET",
        "UPDATE",
        "VALUES",
        "WHERE",
    ],
    reserved_top_level_no_indent: &["EXCEPT ALL", "EXCEPT", "INTERSECT", "UNION ALL", "UNION"],
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
    ],
    reserved_plain: &[
        "ACTIVATE",
        "ALIAS",
        "ALL",
        "ALLOCATE",
        "ALLOW",
        "ANY",
        "AS",
        "ASC",
        "ASENSITIVE",
        "ASSOCIATE",
        "AT",
        "ATTRIBUTES",
        "AUTHORIZATION",
        "BEGIN",
        "BETWEEN",
        "BINARY",
        "BUFFERPOOL",
        "BY",
        "CACHE",
        "CALL",
        "CALLED",
        "CAPTURE",
        "CARDINALITY",
        "CASCADED",
        "CASE",
        "CAST",
        "CHECK",
        "CLONE",
        "CLOSE",
        "CLUSTER",
        "COLLECTION",
        "COLLID",
        "COLUMN",
        "COMMENT",
        "COMMIT",
        "CONCAT",
        "CONDITION",
        "CONNECT",
        "CONNECTION",
        "CONSTRAINT",
        "CONTAINS",
        "CONTINUE",
        "COUNT",
        "COUNT_BIG",
        "CREATE",
        "CURRENT",
        "CURRENT_DATE",
        "CURRENT_SCHEMA",
        "CURRENT_TIME",
        "CURRENT_TIMESTAMP",
        "CURRENT_USER",
        "CURSOR",
        "CYCLE",
        "DATA",
        "DATABASE",
        "DAY",
        "DAYS",
        "DBINFO",
        "DECLARE",
        "DEFAULT",
        "DEFAULTS",
        "DEFINITION",
        "DESC",
        "DESCRIPTOR",
        "DETERMINISTIC",
        "DISABLE",
        "DISALLOW",
        "DISCONNECT",
        "DISTINCT",
        "DO",
        "DOCUMENT",
        "DOUBLE",
        "DROP",
        "DSSIZE",
        "DYNAMIC",
        "EACH",
        "EDITPROC",
        "ELSEIF",
        "ENABLE",
        "ENCODING",
        "ENCRYPTION",
        "END",
        "ENDING",
        "ERASE",
        "ESCAPE",
        "EXCEPTION",
        "EXCLUDING",
        "EXCLUSIVE",
        "EXECUTE",
        "EXISTS",
        "EXIT",
        "EXPLAIN",
        "EXTERNAL",
        "EXTRACT",
        "FENCED",
        "FETCH",
        "FIELDPROC",
        "FILE",
        "FINAL",
        "FIRST",
        "FOR",
        "FOREIGN",
        "FREE",
        "FULL",
        "FUNCTION",
        "GENERAL",
        "GENERATED",
        "GET",
        "GLOBAL",
        "GOTO",
        "GRANT",
        "GRAPHIC",
        "GROUP",
        "HANDLER",
        "HASH",
        "HASHED_VALUE",
        "HINT",
        "HOLD",
        "HOUR",
        "HOURS",
        "IDENTITY",
        "IF",
        "IMMEDIATE",
        "IN",
        "INCLUDING",
        "INCLUSIVE",
        "INCREMENT",
        "INDEX",
        "INDICATOR",
        "INHERIT",
        "INNER",
        "INOUT",
        "INSENSITIVE",
        "INTEGRITY",
        "INTO",
        "IS",
        "ISOBID",
        "ISOLATION",
        "ITERATE",
        "JAR",
        "KEEP",
        "KEY",
        "LABEL",
        "LANGUAGE",
        "LAST",
        "LATERAL",
        "LEAVE",
        "LEFT",
        "LIKE",
        "LINKTYPE",
        "LOCAL",
        "LOCALE",
        "LOCATOR",
        "LOCK",
        "LOCKMAX",
        "LOCKSIZE",
        "LONG",
        "LOOP",
        "MAINTAINED",
        "MATERIALIZED",
        "MAXVALUE",
        "MICROSECOND",
        "MICROSECONDS",
        "MINUTE",
        "MINUTES",
        "MINVALUE",
        "MODE",
        "MODIFIES",
        "MONTH",
        "MONTHS",
        "NEW",
        "NEW_TABLE",
        "NEXTVAL",
        "NO",
        "NOCACHE",
        "NOCYCLE",
        "NODENAME",
        "NODENUMBER",
        "NOMAXVALUE",
        "NOMINVALUE",
        "NOORDER",
        "NORMALIZED",
        "NOT",
        "NULL",
        "NULLS",
        "NUMPARTS",
        "OBID",
        "OF",
        "OLD",
        "OLD_TABLE",
        "ON DELETE",
        "ON UPDATE",
        "ON",
        "OPEN",
        "OPTIMIZATION",
        "OPTIMIZE",
        "OPTION",
        "ORGANIZE",
        "OUT",
        "OUTER",
        "OVER",
        "OVERRIDING",
        "PACKAGE",
        "PADDED",
        "PAGESIZE",
        "PARAMETER",
        "PART",
        "PARTITION",
        "PARTITIONED",
        "PARTITIONING",
        "PASSWORD",
        "PATH",
        "PIECESIZE",
        "PLAN",
        "POSITION",
        "PRECISION",
        "PREPARE",
        "PREVVAL",
        "PRIMARY",
        "PRIQTY",
        "PRIVILEGES",
        "PROCEDURE",
        "PROGRAM",
        "PSID",
        "PUBLIC",
        "QUERY",
        "QUERYNO",
        "RANGE",
        "READ",
        "READS",
        "RECOVERY",
        "REFERENCES",
        "REFERENCING",
        "REFRESH",
        "RELEASE",
        "RENAME",
        "REPEAT",
        "RESET",
        "RESIGNAL",
        "RESTART",
        "RESTRICT",
        "RESULT",
        "RETURN",
        "RETURNS",
        "REVOKE",
        "RIGHT",
        "ROLE",
        "ROLLBACK",
        "ROUND_CEILING",
        "ROUND_DOWN",
        "ROUND_FLOOR",
        "ROUND_HALF_DOWN",
        "ROUND_HALF_EVEN",
        "ROUND_HALF_UP",
        "ROUND_UP",
        "ROUTINE",
        "ROW",
        "ROWNUMBER",
        "ROWS",
        "ROWSET",
        "RRN",
        "RUN",
        "SAVEPOINT",
        "SCHEMA",
        "SCRATCHPAD",
        "SCROLL",
        "SEARCH",
        "SECOND",
        "SECONDS",
        "SECQTY",
        "SECURITY",
        "SENSITIVE",
        "SEQUENCE",
        "SESSION",
        "SESSION_USER",
        "SIGNAL",
        "SIMPLE",
        "SOME",
        "SOURCE",
        "SPECIFIC",
        "SQL",
        "SQLID",
        "STACKED",
        "STANDARD",
        "START",
        "STARTING",
        "STATEMENT",
        "STATIC",
        "STATMENT",
        "STAY",
        "STOGROUP",
        "STORES",
        "STYLE",
        "SUBSTRING",
        "SUMMARY",
        "SYNONYM",
        "SYSTEM",
        "TABLE",
        "TABLESPACE",
        "THEN",
        "TO",
        "TRANSACTION",
        "TRIGGER",
        "TRIM",
        "TRUNCATE",
        "TYPE",
        "UNDO",
        "UNIQUE",
        "UNTIL",
        "USAGE",
        "USER",
        "USING",
        "VALIDPROC",
        "VARIABLE",
        "VARIANT",
        "VCAT",
        "VERSION",
        "VIEW",
        "VOLATILE",
        "VOLUMES",
        "WHENEVER",
        "WHILE",
        "WITH",
        "WITHOUT",
        "WLM",
        "XMLEXISTS",
        "XMLNAMESPACES",
        "YEAR",
        "YEARS",
    ],
    string_styles: &[QuoteStyle::Single],
    string_prefixes: &['N', 'X', 'G'],
    ident_styles: &[QuoteStyle::Double, QuoteStyle::Backtick],
    open_paren_words: &["CASE"],
    close_paren_words: &["END"],
    line_comments: &["--"],
    nested_block_comments: false,
    indexed_placeholders: &['?'],
    numbered_placeholders: &[],
    named_placeholders: &[':'],
    quoted_placeholders: &[],
    extra_operators: &["**", "!>", "!<", "||"],
    word_chars: &['#', '@'],
    token_override: Some(set_after_by),
};
