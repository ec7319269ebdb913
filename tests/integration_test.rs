//! End-to-end tests for the public format API: the documented rendering
//! scenarios, the universal output properties, and each option's effect.

use std::collections::HashMap;

use sqlpretty::options::{CommaPosition, FormatOptions, NewlineMode, ParenOptions};
use sqlpretty::{format, FormatError, FormatParams};

fn fmt(sql: &str) -> String {
    format(sql, &FormatOptions::default()).unwrap()
}

fn fmt_with(sql: &str, options: &FormatOptions) -> String {
    format(sql, options).unwrap()
}

// ─── Documented rendering scenarios ───

#[test]
fn test_select_from() {
    assert_eq!(fmt("SELECT a FROM b"), "SELECT\n  a\nFROM\n  b");
}

#[test]
fn test_select_list_where_and() {
    assert_eq!(
        fmt("SELECT a,b FROM t WHERE x=1 AND y=2"),
        "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x = 1\n  AND y = 2"
    );
}

#[test]
fn test_short_function_call_stays_inline() {
    assert_eq!(
        fmt("SELECT count(*) FROM t"),
        "SELECT\n  count(*)\nFROM\n  t"
    );
}

#[test]
fn test_between_and_stays_inline() {
    let out = fmt("SELECT a FROM t WHERE x BETWEEN 1 AND 2");
    assert!(out.contains("x BETWEEN 1 AND 2"), "{out}");
}

#[test]
fn test_lines_between_queries() {
    let options = FormatOptions {
        lines_between_queries: 2,
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT * FROM a; SELECT * FROM b", &options);
    assert!(out.contains(";\n\nSELECT"), "{out}");
    assert!(!out.contains(";\n\n\nSELECT"), "{out}");
}

#[test]
fn test_named_param_substitution() {
    let mut params = HashMap::new();
    params.insert("name".to_string(), "'alice'".to_string());
    let options = FormatOptions {
        params: Some(FormatParams::Named(params)),
        ..FormatOptions::default()
    };
    assert_eq!(fmt_with("SELECT :name", &options), "SELECT\n  'alice'");
}

#[test]
fn test_limit_comma_stays_inline() {
    let out = fmt("SELECT a FROM t LIMIT 10, 20");
    assert!(out.contains("LIMIT\n  10, 20"), "{out}");
}

// ─── Universal properties ───

const PROPERTY_QUERIES: &[&str] = &[
    "SELECT a, b, c FROM my_table WHERE x = 1 AND y > 2 ORDER BY a",
    "SELECT count(*), max(id) FROM t GROUP BY kind HAVING count(*) > 10",
    "SELECT * FROM a JOIN b ON a.id = b.a_id LEFT JOIN c ON c.x = a.x",
    "INSERT INTO t (a, b) VALUES (1, 'two'); SELECT * FROM t",
    "SELECT CASE WHEN x = 1 THEN 'one' ELSE 'other' END FROM t",
    "SELECT * FROM (SELECT a FROM b WHERE c = 1) sub WHERE sub.a IS NOT NULL",
    "-- leading comment\nSELECT a /* inline */ FROM t",
    "SELECT 'quoted ''string''', \"ident\", 1.5e3 FROM t",
];

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_content_preservation() {
    // With re-casing off, formatting only moves whitespace around.
    let options = FormatOptions {
        uppercase: false,
        ..FormatOptions::default()
    };
    for query in PROPERTY_QUERIES {
        let out = fmt_with(query, &options);
        assert_eq!(
            strip_whitespace(&out),
            strip_whitespace(query),
            "content changed for {query:?}"
        );
    }
}

#[test]
fn test_idempotence() {
    let configs = [
        FormatOptions::default(),
        FormatOptions {
            uppercase: false,
            ..FormatOptions::default()
        },
        FormatOptions {
            comma_position: CommaPosition::Before,
            ..FormatOptions::default()
        },
        FormatOptions {
            dense_operators: true,
            ..FormatOptions::default()
        },
        FormatOptions {
            newline: NewlineMode::Never,
            ..FormatOptions::default()
        },
        FormatOptions {
            indent: "    ".to_string(),
            ..FormatOptions::default()
        },
    ];
    for options in &configs {
        for query in PROPERTY_QUERIES {
            let once = fmt_with(query, options);
            let twice = fmt_with(&once, options);
            assert_eq!(once, twice, "not idempotent for {query:?}");
        }
    }
}

#[test]
fn test_determinism() {
    let first = fmt(PROPERTY_QUERIES[0]);
    for _ in 0..3 {
        assert_eq!(fmt(PROPERTY_QUERIES[0]), first);
    }
}

#[test]
fn test_output_is_trimmed() {
    for query in PROPERTY_QUERIES {
        let out = fmt(query);
        assert_eq!(out, out.trim(), "untrimmed output for {query:?}");
    }
}

#[test]
fn test_indent_discipline() {
    let options = FormatOptions::default();
    for query in PROPERTY_QUERIES {
        let out = fmt_with(query, &options);
        for line in out.lines() {
            let leading = line.len() - line.trim_start_matches(' ').len();
            assert_eq!(
                leading % options.indent.len(),
                0,
                "odd indent in line {line:?} of {query:?}"
            );
        }
    }
}

#[test]
fn test_inline_groups_respect_line_width() {
    let options = FormatOptions {
        line_width: 10,
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT coalesce(aaaa, bbbb, cccc) FROM t", &options);
    // Too wide for a 10-column budget, so the group must break.
    assert!(out.contains("coalesce(\n"), "{out}");

    let wide = FormatOptions::default();
    let inline = fmt_with("SELECT coalesce(aaaa, bbbb, cccc) FROM t", &wide);
    assert!(inline.contains("coalesce(aaaa, bbbb, cccc)"), "{inline}");
}

// ─── Boundary behaviors ───

#[test]
fn test_empty_input() {
    assert_eq!(fmt(""), "");
    assert_eq!(fmt("  \n\t "), "");
}

#[test]
fn test_comment_only_input() {
    assert_eq!(fmt("-- just a comment"), "-- just a comment");
    assert_eq!(fmt("/* block */"), "/* block */");
}

#[test]
fn test_unknown_tokens_pass_through() {
    let out = fmt("SELECT a ~!@ b FROM t");
    assert!(strip_whitespace(&out).contains("~!@"), "{out}");
}

// ─── Option behaviors ───

#[test]
fn test_newline_never_keeps_items_inline() {
    let options = FormatOptions {
        newline: NewlineMode::Never,
        ..FormatOptions::default()
    };
    assert_eq!(
        fmt_with("SELECT a, b, c FROM t", &options),
        "SELECT\n  a, b, c\nFROM\n  t"
    );
}

#[test]
fn test_newline_item_count() {
    let options = FormatOptions {
        newline: NewlineMode::ItemCount(3),
        ..FormatOptions::default()
    };
    let few = fmt_with("SELECT a, b FROM t", &options);
    assert!(few.contains("a, b"), "{few}");

    let many = fmt_with("SELECT a, b, c, d FROM t", &options);
    assert!(many.contains("a,\n"), "{many}");
}

#[test]
fn test_newline_line_width() {
    let options = FormatOptions {
        newline: NewlineMode::LineWidth,
        ..FormatOptions::default()
    };
    let short = fmt_with("SELECT a, b FROM t", &options);
    assert!(short.contains("a, b"), "{short}");

    let long = fmt_with(
        "SELECT column_one, column_two, column_three, column_four FROM t",
        &options,
    );
    assert!(long.contains("column_one,\n"), "{long}");
}

#[test]
fn test_comma_before() {
    let options = FormatOptions {
        comma_position: CommaPosition::Before,
        ..FormatOptions::default()
    };
    assert_eq!(
        fmt_with("SELECT a, b FROM t", &options),
        "SELECT\n  a\n  , b\nFROM\n  t"
    );
}

#[test]
fn test_dense_operators() {
    let options = FormatOptions {
        dense_operators: true,
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT a FROM t WHERE x = 1", &options);
    assert!(out.contains("x=1"), "{out}");
}

#[test]
fn test_semicolon_newline() {
    let options = FormatOptions {
        semicolon_newline: true,
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT a FROM t;", &options);
    assert!(out.ends_with("\n;"), "{out}");
}

#[test]
fn test_boolean_operator_trails_line_when_asked() {
    let options = FormatOptions {
        break_before_boolean_operator: false,
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT a FROM t WHERE x = 1 AND y = 2", &options);
    assert!(out.contains("x = 1 AND\n"), "{out}");
}

#[test]
fn test_close_paren_newline_suppressed() {
    let options = FormatOptions {
        paren_options: ParenOptions {
            open_paren_newline: true,
            close_paren_newline: false,
        },
        ..FormatOptions::default()
    };
    let out = fmt_with("SELECT * FROM (SELECT a FROM b) t", &options);
    assert!(out.contains("b) t"), "{out}");
}

#[test]
fn test_open_paren_newline_suppressed() {
    let options = FormatOptions {
        paren_options: ParenOptions {
            open_paren_newline: false,
            close_paren_newline: true,
        },
        ..FormatOptions::default()
    };
    let out = fmt_with(
        "SELECT func(aaaaaaaaaaaa, bbbbbbbbbbbb, cccccccccccc, dddddddddddd) FROM t",
        &options,
    );
    assert!(out.contains("func(aaaaaaaaaaaa,"), "{out}");
}

#[test]
fn test_custom_indent() {
    let options = FormatOptions {
        indent: "    ".to_string(),
        ..FormatOptions::default()
    };
    assert_eq!(fmt_with("SELECT a FROM b", &options), "SELECT\n    a\nFROM\n    b");
}

#[test]
fn test_positional_params() {
    let options = FormatOptions {
        params: Some(FormatParams::Positional(vec![
            "1".to_string(),
            "'two'".to_string(),
        ])),
        ..FormatOptions::default()
    };
    assert_eq!(
        fmt_with("SELECT ?, ?", &options),
        "SELECT\n  1,\n  'two'"
    );
}

#[test]
fn test_placeholder_passthrough_without_params() {
    assert_eq!(fmt("SELECT ?"), "SELECT\n  ?");
    assert_eq!(fmt("SELECT :name"), "SELECT\n  :name");
}

#[test]
fn test_missing_positional_param_fails() {
    let options = FormatOptions {
        params: Some(FormatParams::Positional(vec!["1".to_string()])),
        ..FormatOptions::default()
    };
    let err = format("SELECT ?, ?", &options).unwrap_err();
    assert!(matches!(err, FormatError::MissingParameter(ref k) if k == "1"));
}

#[test]
fn test_missing_named_param_fails() {
    let options = FormatOptions {
        params: Some(FormatParams::Named(HashMap::new())),
        ..FormatOptions::default()
    };
    let err = format("SELECT :nope", &options).unwrap_err();
    assert!(matches!(err, FormatError::MissingParameter(ref k) if k == "nope"));
}

#[test]
fn test_unsupported_dialect_name() {
    assert!(matches!(
        "crunchbase".parse::<sqlpretty::Dialect>(),
        Err(FormatError::UnsupportedDialect(_))
    ));
}

#[test]
fn test_invalid_newline_rejected() {
    assert!(matches!(
        "-3".parse::<NewlineMode>(),
        Err(FormatError::InvalidNewline(-3))
    ));
}

// ─── Larger structures ───

#[test]
fn test_subquery_indentation() {
    assert_eq!(
        fmt("SELECT * FROM (SELECT a FROM b) t"),
        "SELECT\n  *\nFROM\n  (\n    SELECT\n      a\n    FROM\n      b\n  ) t"
    );
}

#[test]
fn test_union_layout() {
    let out = fmt("SELECT a FROM t UNION ALL SELECT b FROM u");
    assert_eq!(
        out,
        "SELECT\n  a\nFROM\n  t\nUNION ALL\nSELECT\n  b\nFROM\n  u"
    );
}

#[test]
fn test_line_comment_keeps_its_line() {
    let out = fmt("SELECT a -- pick a\nFROM t");
    assert!(out.contains("a -- pick a\n"), "{out}");
}

#[test]
fn test_block_comment_gets_its_own_lines() {
    let out = fmt("SELECT a FROM t /* trailing note */");
    assert!(out.ends_with("/* trailing note */"), "{out}");
}
