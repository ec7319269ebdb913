use crate::dialect::{DialectSpec, OverrideContext};
use crate::error::Result;
use crate::indentation::Indentation;
use crate::inline_block::InlineBlock;
use crate::options::{CommaPosition, FormatOptions, NewlineMode};
use crate::params::ParamCursor;
use crate::token::{Token, TokenType};

/// The formatting engine: a single pass over the token stream, dispatching
/// on token type and driving the indentation stack, the inline-block
/// detector and the parameter cursor. All state lives for one call.
pub(crate) struct SqlFormatter<'a> {
    options: &'a FormatOptions,
    spec: &'static DialectSpec,
    indentation: Indentation,
    inline_block: InlineBlock,
    params: ParamCursor<'a>,
    previous_reserved: Option<Token>,
    /// Comma policy for the current clause, set at each clause keyword.
    break_list_items: bool,
    output: String,
}

impl<'a> SqlFormatter<'a> {
    /// `options` must already be validated.
    pub fn new(options: &'a FormatOptions, spec: &'static DialectSpec) -> Self {
        Self {
            options,
            spec,
            indentation: Indentation::new(&options.indent),
            inline_block: InlineBlock::new(options.line_width),
            params: ParamCursor::new(options.params.as_ref()),
            previous_reserved: None,
            break_list_items: options.newline != NewlineMode::Never,
            output: String::new(),
        }
    }

    pub fn format(mut self, tokens: &[Token]) -> Result<String> {
        for index in 0..tokens.len() {
            let raw = &tokens[index];
            let ctx = OverrideContext {
                previous_reserved: self.previous_reserved.as_ref(),
                next: tokens.get(index + 1),
            };
            let overridden = self.spec.token_override.and_then(|hook| hook(raw, ctx));
            let token = overridden.as_ref().unwrap_or(raw);
            self.dispatch(token, tokens, index)?;
        }
        Ok(self.output.trim().to_string())
    }

    fn dispatch(&mut self, token: &Token, tokens: &[Token], index: usize) -> Result<()> {
        match token.token_type {
            TokenType::LineComment => self.format_line_comment(token),
            TokenType::BlockComment => self.format_block_comment(token),
            TokenType::ReservedTopLevel => {
                self.format_top_level(token, tokens, index);
                self.latch(token);
            }
            TokenType::ReservedTopLevelNoIndent => {
                self.format_top_level_no_indent(token);
                self.latch(token);
            }
            TokenType::ReservedNewline => {
                self.format_newline_reserved(token, tokens, index);
                self.latch(token);
            }
            TokenType::Reserved => {
                let rendered = self.render_keyword(token);
                self.push_spaced(&rendered);
                self.latch(token);
            }
            TokenType::OpenParen => self.format_opening_paren(token, tokens, index),
            TokenType::CloseParen => self.format_closing_paren(token),
            TokenType::Placeholder => {
                let value = self.params.get(token)?;
                self.push_spaced(&value);
            }
            TokenType::Operator if self.options.dense_operators => {
                self.push_dense(&token.value.clone());
            }
            _ => self.format_by_value(token),
        }
        Ok(())
    }

    /// Rules keyed on the token value rather than its type.
    fn format_by_value(&mut self, token: &Token) {
        match token.value.as_str() {
            "," => self.format_comma(),
            ":" => {
                self.trim_spaces();
                self.output.push(':');
                self.output.push(' ');
            }
            "." => {
                self.trim_spaces();
                self.output.push('.');
            }
            ";" => self.format_semicolon(),
            "[" => self.output.push('['),
            "]" => {
                self.trim_spaces();
                self.output.push(']');
                self.output.push(' ');
            }
            _ => {
                let value = token.value.clone();
                self.push_spaced(&value);
            }
        }
    }

    fn format_line_comment(&mut self, token: &Token) {
        self.output.push_str(&token.value);
        self.add_newline();
    }

    /// Block comments land on their own lines; each inner line is
    /// re-anchored at the current indent plus one space so the `*` gutter
    /// of conventional comments keeps lining up.
    fn format_block_comment(&mut self, token: &Token) {
        self.add_newline();
        let reindented = self.reindent_block_comment(&token.value);
        self.output.push_str(&reindented);
        self.add_newline();
    }

    fn reindent_block_comment(&self, value: &str) -> String {
        let indent = self.indentation.get_indent();
        let mut out = String::with_capacity(value.len());
        for (i, line) in value.split('\n').enumerate() {
            if i == 0 {
                out.push_str(line);
            } else {
                out.push('\n');
                out.push_str(&indent);
                out.push(' ');
                out.push_str(line.trim_start_matches([' ', '\t']));
            }
        }
        out
    }

    fn format_top_level(&mut self, token: &Token, tokens: &[Token], index: usize) {
        self.break_list_items = self.clause_breaks_items(tokens, index);
        self.indentation.decrease_top_level();
        self.add_newline();
        self.indentation.increase_top_level();
        let rendered = self.render_keyword(token);
        self.output.push_str(&rendered);
        self.add_newline();
    }

    fn format_top_level_no_indent(&mut self, token: &Token) {
        self.indentation.decrease_top_level();
        self.add_newline();
        let rendered = self.render_keyword(token);
        self.output.push_str(&rendered);
        self.add_newline();
    }

    fn format_newline_reserved(&mut self, token: &Token, tokens: &[Token], index: usize) {
        let rendered = self.render_keyword(token);

        // BETWEEN x AND y: the AND belongs to the BETWEEN, keep it inline.
        if token.is_keyword("AND")
            && index >= 2
            && tokens[index - 2].is_keyword("BETWEEN")
        {
            self.push_spaced(&rendered);
            return;
        }

        let boolean_op =
            token.is_keyword("AND") || token.is_keyword("OR") || token.is_keyword("XOR");
        if boolean_op && !self.options.break_before_boolean_operator {
            // Operator trails its line instead of leading the next one.
            self.push_spaced(&rendered);
            self.add_newline();
            return;
        }

        self.add_newline();
        self.output.push_str(&rendered);
        self.output.push(' ');
    }

    fn format_opening_paren(&mut self, token: &Token, tokens: &[Token], index: usize) {
        // Glue function-call parens to the callee: no whitespace in the
        // source and the previous token is ordinary content.
        if token.whitespace_before.is_empty() {
            let glue = index > 0
                && !matches!(
                    tokens[index - 1].token_type,
                    TokenType::OpenParen | TokenType::LineComment | TokenType::Operator
                );
            if glue {
                self.trim_spaces();
            }
        }

        let rendered = self.render_paren(token);
        self.output.push_str(&rendered);
        if rendered.chars().next().is_some_and(|c| c.is_alphabetic()) {
            // Word parens (CASE) keep a separating space.
            self.output.push(' ');
        }

        self.inline_block.begin_if_possible(tokens, index);
        if !self.inline_block.is_active() {
            self.indentation.increase_block_level();
            if self.options.paren_options.open_paren_newline {
                self.add_newline();
            }
        }
    }

    fn format_closing_paren(&mut self, token: &Token) {
        let rendered = self.render_paren(token);
        if self.inline_block.is_active() {
            self.inline_block.end();
            if rendered == ")" {
                self.trim_spaces();
            } else if !self.output.is_empty() && !self.output.ends_with([' ', '\n']) {
                self.output.push(' ');
            }
        } else {
            self.indentation.decrease_block_level();
            if self.options.paren_options.close_paren_newline {
                self.add_newline();
            } else {
                self.trim_spaces();
            }
        }
        self.output.push_str(&rendered);
        self.output.push(' ');
    }

    fn format_comma(&mut self) {
        let inline = self.inline_block.is_active()
            || self
                .previous_reserved
                .as_ref()
                .is_some_and(|t| t.is_keyword("LIMIT"))
            || !self.break_list_items;

        if inline {
            self.trim_spaces();
            self.output.push(',');
            self.output.push(' ');
            return;
        }

        match self.options.comma_position {
            CommaPosition::After | CommaPosition::Tabular => {
                self.trim_spaces();
                self.output.push(',');
                self.add_newline();
            }
            CommaPosition::Before => {
                self.add_newline();
                self.output.push(',');
                self.output.push(' ');
            }
        }
    }

    fn format_semicolon(&mut self) {
        self.indentation.reset_indentation();
        if self.options.semicolon_newline {
            self.add_newline();
        } else {
            self.trim_spaces();
        }
        self.output.push(';');
        for _ in 0..self.options.lines_between_queries {
            self.output.push('\n');
        }
    }

    /// Decide the comma policy for the clause starting after `index`.
    fn clause_breaks_items(&self, tokens: &[Token], index: usize) -> bool {
        match self.options.newline {
            NewlineMode::Always => true,
            NewlineMode::Never => false,
            NewlineMode::LineWidth => {
                self.clause_inline_length(tokens, index) > self.options.line_width
            }
            NewlineMode::ItemCount(limit) => self.clause_item_count(tokens, index) > limit,
        }
    }

    fn clause_inline_length(&self, tokens: &[Token], index: usize) -> usize {
        let mut length = 0;
        for token in Self::clause_tokens(tokens, index) {
            length += token.value.len() + 1;
        }
        length
    }

    fn clause_item_count(&self, tokens: &[Token], index: usize) -> usize {
        let mut depth = 0usize;
        let mut commas = 0;
        let mut any = false;
        for token in Self::clause_tokens(tokens, index) {
            any = true;
            match token.token_type {
                TokenType::OpenParen => depth += 1,
                TokenType::CloseParen => depth = depth.saturating_sub(1),
                _ if token.value == "," && depth == 0 => commas += 1,
                _ => {}
            }
        }
        if any {
            commas + 1
        } else {
            0
        }
    }

    /// Tokens belonging to the clause body that starts after the keyword
    /// at `index`: everything up to the next clause keyword, `;`, or the
    /// close of the surrounding paren group.
    fn clause_tokens<'t>(
        tokens: &'t [Token],
        index: usize,
    ) -> impl Iterator<Item = &'t Token> {
        let mut depth = 0i32;
        tokens[index + 1..].iter().take_while(move |token| {
            match token.token_type {
                TokenType::ReservedTopLevel | TokenType::ReservedTopLevelNoIndent => {
                    return false;
                }
                TokenType::OpenParen => depth += 1,
                TokenType::CloseParen => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ if token.value == ";" => return false,
                _ => {}
            }
            true
        })
    }

    // ---- Rendering helpers ----

    fn render_keyword(&self, token: &Token) -> String {
        let equalized = equalize_whitespace(&token.value);
        if self.options.uppercase {
            equalized.to_uppercase()
        } else {
            equalized
        }
    }

    fn render_paren(&self, token: &Token) -> String {
        if self.options.uppercase {
            token.value.to_uppercase().to_string()
        } else {
            token.value.to_string()
        }
    }

    fn latch(&mut self, token: &Token) {
        self.previous_reserved = Some(token.clone());
    }

    /// Append value plus a trailing separator space; the leading space is
    /// the previous token's trailing one.
    fn push_spaced(&mut self, value: &str) {
        self.output.push_str(value);
        self.output.push(' ');
    }

    /// Dense operator emission: no space on either side, except at the
    /// start of a line where the indent stays intact.
    fn push_dense(&mut self, value: &str) {
        let trimmed = self.output.trim_end_matches([' ', '\t']).len();
        if !self.output[..trimmed].ends_with('\n') {
            self.output.truncate(trimmed);
        }
        self.output.push_str(value);
    }

    fn trim_spaces(&mut self) {
        let trimmed = self.output.trim_end_matches([' ', '\t']).len();
        self.output.truncate(trimmed);
    }

    /// Trim trailing spaces, then ensure the output ends with a newline
    /// followed by the current indent. Idempotent.
    fn add_newline(&mut self) {
        self.trim_spaces();
        if !self.output.is_empty() && !self.output.ends_with('\n') {
            self.output.push('\n');
        }
        self.output.push_str(&self.indentation.get_indent());
    }
}

fn equalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
