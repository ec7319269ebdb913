use std::sync::OnceLock;

use memchr::memchr;
use regex::{Regex, RegexBuilder};

use crate::dialect::{Dialect, DialectSpec, QuoteStyle, DIALECT_COUNT};
use crate::error::{FormatError, Result};
use crate::token::{Token, TokenType};

/// Splits raw SQL into classified tokens for one dialect.
///
/// Candidate lexers run in a fixed priority order; the first match wins.
/// Keyword, word, number, operator and placeholder matching goes through
/// regexes compiled once per dialect per process; strings, quoted
/// identifiers and comments are scanned by hand so escape sequences never
/// terminate a literal early.
pub struct Tokenizer {
    spec: &'static DialectSpec,
    matchers: &'static Matchers,
}

/// Precompiled per-dialect patterns, anchored at the scan position.
struct Matchers {
    reserved_top_level: Regex,
    reserved_top_level_no_indent: Regex,
    reserved_newline: Regex,
    reserved_plain: Regex,
    open_paren: Regex,
    close_paren: Regex,
    number: Regex,
    word: Regex,
    operator: Regex,
    named_placeholder: Option<Regex>,
    numbered_placeholder: Option<Regex>,
}

static MATCHERS: [OnceLock<Matchers>; DIALECT_COUNT] = [const { OnceLock::new() }; DIALECT_COUNT];

/// Multi-character operators every dialect understands.
const BASE_OPERATORS: &[&str] = &["<>", "<=", ">=", "!=", "=="];

impl Matchers {
    fn compile(spec: &DialectSpec) -> Self {
        Self {
            reserved_top_level: keyword_regex(spec.reserved_top_level),
            reserved_top_level_no_indent: keyword_regex(spec.reserved_top_level_no_indent),
            reserved_newline: keyword_regex(spec.reserved_newline),
            reserved_plain: keyword_regex(spec.reserved_plain),
            open_paren: paren_regex("\\(", spec.open_paren_words),
            close_paren: paren_regex("\\)", spec.close_paren_words),
            number: compile(
                r"^(?:0x[0-9a-fA-F]+|0b[01]+|(?:-\s*)?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][-+]?\d+)?)\b",
            ),
            word: compile(&format!("^[\\w{}]+", class_chars(spec.word_chars))),
            operator: operator_regex(spec.extra_operators),
            named_placeholder: placeholder_regex(spec.named_placeholders, r"[\w.$]+"),
            numbered_placeholder: placeholder_regex(spec.numbered_placeholders, r"\d+"),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid tokenizer pattern {pattern:?}: {e}"))
}

/// Escape characters for use inside a regex character class.
fn class_chars(chars: &[char]) -> String {
    let mut out = String::new();
    for &c in chars {
        out.push_str(&regex::escape(&c.to_string()));
    }
    out
}

/// Alternation over a keyword set: case-insensitive, longest first,
/// whole-word, with internal spaces matching any whitespace run.
fn keyword_regex(keywords: &'static [&'static str]) -> Regex {
    if keywords.is_empty() {
        // Never matches; keeps the lexer list uniform.
        return compile(r"^[^\s\S]");
    }
    let mut sorted: Vec<&str> = keywords.to_vec();
    sorted.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = sorted
        .iter()
        .map(|k| regex::escape(k).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!("^(?:{alternation})\\b"))
}

fn paren_regex(symbol: &str, words: &'static [&'static str]) -> Regex {
    let mut alternation = symbol.to_string();
    for word in words {
        alternation.push('|');
        alternation.push_str(&regex::escape(word));
        alternation.push_str("\\b");
    }
    compile(&format!("^(?:{alternation})"))
}

fn operator_regex(extra: &'static [&'static str]) -> Regex {
    let mut ops: Vec<&str> = BASE_OPERATORS.to_vec();
    ops.extend_from_slice(extra);
    ops.sort_by_key(|op| std::cmp::Reverse(op.len()));
    ops.dedup();
    let mut alternation = ops
        .iter()
        .map(|op| regex::escape(op))
        .collect::<Vec<_>>()
        .join("|");
    // Single-character operators close out the alternation.
    alternation.push_str("|[-+*/%<>=!~^&|?]");
    compile(&format!("^(?:{alternation})"))
}

fn placeholder_regex(prefixes: &[char], key_pattern: &str) -> Option<Regex> {
    if prefixes.is_empty() {
        return None;
    }
    Some(compile(&format!(
        "^[{}]({})",
        class_chars(prefixes),
        key_pattern
    )))
}

impl Tokenizer {
    pub fn new(dialect: Dialect) -> Self {
        let spec = dialect.spec();
        let matchers = MATCHERS[dialect.index()].get_or_init(|| Matchers::compile(spec));
        Self { spec, matchers }
    }

    /// Tokenize `input` completely. Whitespace is absorbed into each
    /// token's `whitespace_before`; every other byte of the input lands in
    /// exactly one token value, in source order.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::with_capacity(input.len() / 4);
        let mut pos = 0;

        while pos < input.len() {
            let ws_len = leading_whitespace(&input[pos..]);
            let whitespace = &input[pos..pos + ws_len];
            pos += ws_len;
            if pos >= input.len() {
                break;
            }

            let rest = &input[pos..];
            let after_dot = tokens.last().is_some_and(|t| t.value == ".");
            let token = self.next_token(rest, whitespace, pos, after_dot)?;
            if token.value.is_empty() {
                return Err(FormatError::TokenizerStuck { offset: pos });
            }
            pos += token.value.len();
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Try each lexer in priority order; first match wins.
    fn next_token(
        &self,
        rest: &str,
        whitespace: &str,
        pos: usize,
        after_dot: bool,
    ) -> Result<Token> {
        if let Some(len) = self.match_line_comment(rest) {
            return Ok(Token::new(TokenType::LineComment, &rest[..len], whitespace, pos));
        }
        if let Some(len) = self.match_block_comment(rest) {
            return Ok(Token::new(TokenType::BlockComment, &rest[..len], whitespace, pos));
        }
        if let Some(len) = self.match_string(rest) {
            return Ok(Token::new(TokenType::String, &rest[..len], whitespace, pos));
        }
        if let Some(len) = self.match_quoted_ident(rest) {
            return Ok(Token::new(TokenType::Word, &rest[..len], whitespace, pos));
        }
        if let Some(m) = self.matchers.open_paren.find(rest) {
            return Ok(Token::new(TokenType::OpenParen, m.as_str(), whitespace, pos));
        }
        if let Some(m) = self.matchers.close_paren.find(rest) {
            return Ok(Token::new(TokenType::CloseParen, m.as_str(), whitespace, pos));
        }
        if let Some(token) = self.match_placeholder(rest, whitespace, pos) {
            return Ok(token);
        }
        if let Some(m) = self.matchers.number.find(rest) {
            return Ok(Token::new(TokenType::Number, m.as_str(), whitespace, pos));
        }
        // A reserved word directly after `.` is a qualified name part
        // (`db.select`), never a keyword.
        if !after_dot {
            if let Some(m) = self.matchers.reserved_top_level.find(rest) {
                return Ok(Token::new(
                    TokenType::ReservedTopLevel,
                    m.as_str(),
                    whitespace,
                    pos,
                ));
            }
            if let Some(m) = self.matchers.reserved_top_level_no_indent.find(rest) {
                return Ok(Token::new(
                    TokenType::ReservedTopLevelNoIndent,
                    m.as_str(),
                    whitespace,
                    pos,
                ));
            }
            if let Some(m) = self.matchers.reserved_newline.find(rest) {
                return Ok(Token::new(
                    TokenType::ReservedNewline,
                    m.as_str(),
                    whitespace,
                    pos,
                ));
            }
            if let Some(m) = self.matchers.reserved_plain.find(rest) {
                return Ok(Token::new(TokenType::Reserved, m.as_str(), whitespace, pos));
            }
        }
        if let Some(m) = self.matchers.word.find(rest) {
            return Ok(Token::new(TokenType::Word, m.as_str(), whitespace, pos));
        }
        if let Some(m) = self.matchers.operator.find(rest) {
            return Ok(Token::new(TokenType::Operator, m.as_str(), whitespace, pos));
        }
        // Catch-all: a single character of punctuation.
        let ch = rest
            .chars()
            .next()
            .ok_or(FormatError::TokenizerStuck { offset: pos })?;
        Ok(Token::new(
            TokenType::Punctuation,
            &rest[..ch.len_utf8()],
            whitespace,
            pos,
        ))
    }

    fn match_line_comment(&self, rest: &str) -> Option<usize> {
        if !self.spec.line_comments.iter().any(|m| rest.starts_with(m)) {
            return None;
        }
        Some(memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len()))
    }

    fn match_block_comment(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        if !bytes.starts_with(b"/*") {
            return None;
        }
        let mut depth = 1usize;
        let mut i = 2;
        while i + 1 < bytes.len() {
            if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Some(i);
                }
            } else if self.spec.nested_block_comments && bytes[i] == b'/' && bytes[i + 1] == b'*' {
                depth += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        // Unterminated comment swallows the rest of the input.
        Some(rest.len())
    }

    fn match_string(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;

        // Prefixed single-quoted literal: N'...', E'...', X'...'.
        if self.spec.string_styles.contains(&QuoteStyle::Single)
            && bytes.len() >= 2
            && bytes[1] == b'\''
            && self
                .spec
                .string_prefixes
                .iter()
                .any(|p| first.eq_ignore_ascii_case(&(*p as u8)))
        {
            return Some(1 + scan_quoted(&bytes[1..], b'\'', true, true));
        }

        for style in self.spec.string_styles {
            match style {
                QuoteStyle::Single if first == b'\'' => {
                    return Some(scan_quoted(bytes, b'\'', true, true));
                }
                QuoteStyle::Double if first == b'"' => {
                    return Some(scan_quoted(bytes, b'"', true, true));
                }
                QuoteStyle::Backtick if first == b'`' => {
                    return Some(scan_quoted(bytes, b'`', true, false));
                }
                QuoteStyle::Bracket if first == b'[' => {
                    return Some(scan_bracketed(bytes));
                }
                QuoteStyle::Dollar if first == b'$' => {
                    if let Some(len) = scan_dollar_quoted(bytes) {
                        return Some(len);
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn match_quoted_ident(&self, rest: &str) -> Option<usize> {
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;
        for style in self.spec.ident_styles {
            match style {
                QuoteStyle::Double if first == b'"' => {
                    return Some(scan_quoted(bytes, b'"', true, true));
                }
                QuoteStyle::Backtick if first == b'`' => {
                    return Some(scan_quoted(bytes, b'`', true, false));
                }
                QuoteStyle::Bracket if first == b'[' => {
                    return Some(scan_bracketed(bytes));
                }
                _ => {}
            }
        }
        None
    }

    fn match_placeholder(&self, rest: &str, whitespace: &str, pos: usize) -> Option<Token> {
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;

        // Quoted named placeholder: @'name', :"name"...
        if bytes.len() >= 2
            && self.spec.quoted_placeholders.contains(&(first as char))
            && matches!(bytes[1], b'\'' | b'"' | b'`')
        {
            let quote = bytes[1];
            let quoted_len = scan_quoted(&bytes[1..], quote, true, true);
            let len = 1 + quoted_len;
            let value = &rest[..len];
            // Key is the quoted body without its delimiters.
            let inner_end = if quoted_len >= 2 { len - 1 } else { len };
            let key = &rest[2..inner_end];
            return Some(Token::placeholder(value, Some(key), whitespace, pos));
        }

        for re in [&self.matchers.numbered_placeholder, &self.matchers.named_placeholder] {
            if let Some(caps) = re.as_ref().and_then(|re| re.captures(rest)) {
                let value = caps.get(0)?.as_str();
                let key = caps.get(1)?.as_str();
                return Some(Token::placeholder(value, Some(key), whitespace, pos));
            }
        }
        if self.spec.indexed_placeholders.contains(&(first as char)) {
            return Some(Token::placeholder(&rest[..1], None, whitespace, pos));
        }
        None
    }
}

fn leading_whitespace(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(rest.len())
}

/// Scan a quoted span starting at `bytes[0]` (the opening quote).
/// Returns the length including delimiters; unterminated spans run to the
/// end of the input. `doubled` treats a doubled quote as an escape,
/// `backslash` treats `\x` as an escape.
fn scan_quoted(bytes: &[u8], quote: u8, doubled: bool, backslash: bool) -> usize {
    let mut i = 1;
    while i < bytes.len() {
        let b = bytes[i];
        if backslash && b == b'\\' && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if b == quote {
            if doubled && i + 1 < bytes.len() && bytes[i + 1] == quote {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Scan `[...]` with `]]` as the escape for a literal bracket.
fn scan_bracketed(bytes: &[u8]) -> usize {
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b']' {
            if i + 1 < bytes.len() && bytes[i + 1] == b']' {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Scan a dollar-quoted string ($$...$$ or $tag$...$tag$). `bytes` starts
/// at the first `$`. Tags start with a letter or underscore.
fn scan_dollar_quoted(bytes: &[u8]) -> Option<usize> {
    let mut tag_end = 1;
    if tag_end < bytes.len() && (bytes[tag_end].is_ascii_alphabetic() || bytes[tag_end] == b'_') {
        tag_end += 1;
        while tag_end < bytes.len()
            && (bytes[tag_end].is_ascii_alphanumeric() || bytes[tag_end] == b'_')
        {
            tag_end += 1;
        }
    }
    if tag_end >= bytes.len() || bytes[tag_end] != b'$' {
        return None;
    }
    let tag = &bytes[..tag_end + 1];

    let mut i = tag.len();
    while i + tag.len() <= bytes.len() {
        if bytes[i] == b'$' && bytes[i..].starts_with(tag) {
            return Some(i + tag.len());
        }
        i += 1;
    }
    Some(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(sql: &str) -> Vec<Token> {
        Tokenizer::new(Dialect::Sql).tokenize(sql).unwrap()
    }

    fn types(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_simple_select() {
        let tokens = tokenize("SELECT a FROM b");
        assert_eq!(
            types(&tokens),
            vec![
                TokenType::ReservedTopLevel,
                TokenType::Word,
                TokenType::ReservedTopLevel,
                TokenType::Word,
            ]
        );
        assert_eq!(tokens[0].value, "SELECT");
        assert_eq!(tokens[2].whitespace_before, " ");
    }

    #[test]
    fn test_case_preserved() {
        let tokens = tokenize("select A fRoM b");
        assert_eq!(tokens[0].value, "select");
        assert_eq!(tokens[1].value, "A");
        assert_eq!(tokens[2].value, "fRoM");
    }

    #[test]
    fn test_multi_word_keyword_spans_whitespace() {
        let tokens = tokenize("a GROUP\n   BY b");
        assert_eq!(tokens[1].token_type, TokenType::ReservedTopLevel);
        assert_eq!(tokens[1].value, "GROUP\n   BY");
    }

    #[test]
    fn test_reserved_needs_word_boundary() {
        let tokens = tokenize("SELECTED");
        assert_eq!(types(&tokens), vec![TokenType::Word]);
        assert_eq!(tokens[0].value, "SELECTED");
    }

    #[test]
    fn test_reserved_after_dot_is_a_name() {
        let tokens = tokenize("db.select");
        assert_eq!(tokens[2].token_type, TokenType::Word);
        assert_eq!(tokens[2].value, "select");
    }

    #[test]
    fn test_string_with_escapes() {
        let tokens = tokenize(r"'it''s \' fine'");
        assert_eq!(types(&tokens), vec![TokenType::String]);
        assert_eq!(tokens[0].value, r"'it''s \' fine'");
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = tokenize("'oops");
        assert_eq!(types(&tokens), vec![TokenType::String]);
        assert_eq!(tokens[0].value, "'oops");
    }

    #[test]
    fn test_line_and_block_comments() {
        let tokens = tokenize("SELECT 1 -- trailing\n/* block */");
        assert_eq!(tokens[2].token_type, TokenType::LineComment);
        assert_eq!(tokens[2].value, "-- trailing");
        assert_eq!(tokens[3].token_type, TokenType::BlockComment);
        assert_eq!(tokens[3].value, "/* block */");
    }

    #[test]
    fn test_nested_block_comments_postgres_only() {
        let pg = Tokenizer::new(Dialect::PostgreSql)
            .tokenize("/* a /* b */ c */")
            .unwrap();
        assert_eq!(pg.len(), 1);
        assert_eq!(pg[0].value, "/* a /* b */ c */");

        let std = tokenize("/* a /* b */ c */");
        assert_eq!(std[0].value, "/* a /* b */");
    }

    #[test]
    fn test_case_end_are_parens() {
        let tokens = tokenize("CASE WHEN a THEN b END");
        assert_eq!(tokens[0].token_type, TokenType::OpenParen);
        assert_eq!(tokens.last().unwrap().token_type, TokenType::CloseParen);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("12 1.5 .5 1e10 0xFF 0b01");
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Number));
    }

    #[test]
    fn test_indexed_placeholder() {
        let tokens = tokenize("WHERE a = ?");
        let ph = tokens.last().unwrap();
        assert_eq!(ph.token_type, TokenType::Placeholder);
        assert_eq!(ph.value, "?");
        assert_eq!(ph.key, None);
    }

    #[test]
    fn test_named_and_numbered_placeholders() {
        let tokens = Tokenizer::new(Dialect::PostgreSql)
            .tokenize("SELECT $1, :name")
            .unwrap();
        assert_eq!(tokens[1].token_type, TokenType::Placeholder);
        assert_eq!(tokens[1].key.as_deref(), Some("1"));
        assert_eq!(tokens[3].token_type, TokenType::Placeholder);
        assert_eq!(tokens[3].key.as_deref(), Some("name"));
    }

    #[test]
    fn test_quoted_placeholder() {
        let tokens = Tokenizer::new(Dialect::Tsql)
            .tokenize("SELECT @'var name'")
            .unwrap();
        assert_eq!(tokens[1].token_type, TokenType::Placeholder);
        assert_eq!(tokens[1].value, "@'var name'");
        assert_eq!(tokens[1].key.as_deref(), Some("var name"));
    }

    #[test]
    fn test_dollar_quoted_string() {
        let tokens = Tokenizer::new(Dialect::PostgreSql)
            .tokenize("$tag$ body 'x' $tag$")
            .unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::String);
    }

    #[test]
    fn test_bracket_identifier_tsql() {
        let tokens = Tokenizer::new(Dialect::Tsql)
            .tokenize("SELECT [my col] FROM t")
            .unwrap();
        assert_eq!(tokens[1].token_type, TokenType::Word);
        assert_eq!(tokens[1].value, "[my col]");
    }

    #[test]
    fn test_compound_operator() {
        let tokens = tokenize("a <> b");
        assert_eq!(tokens[1].token_type, TokenType::Operator);
        assert_eq!(tokens[1].value, "<>");
    }

    #[test]
    fn test_punctuation_fallback() {
        let tokens = tokenize("a , b ; c");
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
        assert_eq!(tokens[1].value, ",");
        assert_eq!(tokens[3].value, ";");
    }

    #[test]
    fn test_every_lexeme_preserved_in_order() {
        let sql = "SELECT a, 'str' FROM t WHERE x >= 10 -- done";
        let joined: String = tokenize(sql).iter().map(|t| t.value.as_str()).collect();
        let stripped: String = sql.chars().filter(|c| !c.is_whitespace()).collect();
        let joined_stripped: String = joined.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined_stripped, stripped);
    }

    #[test]
    fn test_matchers_are_shared_per_process() {
        let a = Tokenizer::new(Dialect::Sql);
        let b = Tokenizer::new(Dialect::Sql);
        assert!(std::ptr::eq(a.matchers, b.matchers));
    }
}
