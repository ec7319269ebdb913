use serde::Deserialize;

use crate::dialect::Dialect;
use crate::error::FormatError;
use crate::params::FormatParams;
use crate::report::Reporter;

pub const DEFAULT_INDENT: &str = "  ";
pub const DEFAULT_LINE_WIDTH: usize = 50;
const TEN_SPACES: &str = "          ";

/// All formatting configuration. Every field has a default; deserializing
/// an empty table yields the same options as [`FormatOptions::default`].
#[derive(Debug, Clone, Deserialize)]
pub struct FormatOptions {
    #[serde(default)]
    pub language: Dialect,

    #[serde(default = "default_indent")]
    pub indent: String,

    /// Re-case reserved and paren tokens; identifiers and literals are
    /// never touched.
    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default)]
    pub keyword_position: KeywordPosition,

    #[serde(default)]
    pub newline: NewlineMode,

    #[serde(default = "default_true")]
    pub break_before_boolean_operator: bool,

    /// Accepted for compatibility; not yet wired into rendering.
    #[serde(default)]
    pub alias_as: AliasMode,

    /// Accepted for compatibility; not yet wired into rendering.
    #[serde(default)]
    pub tabulate_alias: bool,

    #[serde(default)]
    pub comma_position: CommaPosition,

    #[serde(default)]
    pub paren_options: ParenOptions,

    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Newlines emitted after each `;`.
    #[serde(default = "default_lines_between_queries")]
    pub lines_between_queries: usize,

    #[serde(default)]
    pub dense_operators: bool,

    #[serde(default)]
    pub semicolon_newline: bool,

    #[serde(default)]
    pub params: Option<FormatParams>,
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}
fn default_true() -> bool {
    true
}
fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}
fn default_lines_between_queries() -> usize {
    1
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            language: Dialect::Sql,
            indent: default_indent(),
            uppercase: true,
            keyword_position: KeywordPosition::Standard,
            newline: NewlineMode::Always,
            break_before_boolean_operator: true,
            alias_as: AliasMode::Select,
            tabulate_alias: false,
            comma_position: CommaPosition::After,
            paren_options: ParenOptions::default(),
            line_width: DEFAULT_LINE_WIDTH,
            lines_between_queries: 1,
            dense_operators: false,
            semicolon_newline: false,
            params: None,
        }
    }
}

impl FormatOptions {
    /// Apply the auto-corrections the engine relies on: a non-positive
    /// `line_width` falls back to the default (with a warning), and the
    /// ten-space keyword positions force a ten-space indent unit.
    pub fn validated(&self, reporter: &dyn Reporter) -> Self {
        let mut options = self.clone();
        if options.line_width == 0 {
            reporter.warning(&format!(
                "line_width must be positive; using the default of {DEFAULT_LINE_WIDTH}"
            ));
            options.line_width = DEFAULT_LINE_WIDTH;
        }
        if options.keyword_position != KeywordPosition::Standard {
            options.indent = TEN_SPACES.to_string();
        }
        options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordPosition {
    #[default]
    Standard,
    TenSpaceLeft,
    TenSpaceRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasMode {
    Always,
    Never,
    #[default]
    Select,
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommaPosition {
    #[default]
    After,
    Before,
    /// Accepted for compatibility; renders as `after`.
    Tabular,
}

/// Newline handling for list items inside a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineMode {
    /// Break after every item.
    #[default]
    Always,
    /// Keep items on one line.
    Never,
    /// Break only when the clause would exceed `line_width`.
    LineWidth,
    /// Break when the clause has more than this many items.
    ItemCount(usize),
}

impl NewlineMode {
    /// Numeric form: zero normalizes to `always`, negatives are rejected.
    pub fn from_count(count: i64) -> Result<Self, FormatError> {
        match count {
            0 => Ok(Self::Always),
            n if n < 0 => Err(FormatError::InvalidNewline(n)),
            n => Ok(Self::ItemCount(n as usize)),
        }
    }
}

impl std::str::FromStr for NewlineMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "line_width" => Ok(Self::LineWidth),
            other => match other.parse::<i64>() {
                Ok(count) => Self::from_count(count),
                Err(_) => Err(FormatError::Config(format!(
                    "unknown newline mode: {other}"
                ))),
            },
        }
    }
}

impl<'de> Deserialize<'de> for NewlineMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(i64),
            Text(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Count(n) => NewlineMode::from_count(n).map_err(serde::de::Error::custom),
            Repr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Parenthesis newline handling; merged one level deep over the defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParenOptions {
    #[serde(default = "default_true")]
    pub open_paren_newline: bool,
    #[serde(default = "default_true")]
    pub close_paren_newline: bool,
}

impl Default for ParenOptions {
    fn default() -> Self {
        Self {
            open_paren_newline: true,
            close_paren_newline: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StderrReporter;

    #[test]
    fn test_defaults() {
        let options = FormatOptions::default();
        assert_eq!(options.language, Dialect::Sql);
        assert_eq!(options.indent, "  ");
        assert!(options.uppercase);
        assert_eq!(options.newline, NewlineMode::Always);
        assert_eq!(options.line_width, 50);
        assert_eq!(options.lines_between_queries, 1);
        assert!(options.paren_options.open_paren_newline);
        assert!(options.paren_options.close_paren_newline);
        assert!(options.params.is_none());
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let options: FormatOptions = toml::from_str("").unwrap();
        assert_eq!(options.indent, "  ");
        assert!(options.uppercase);
        assert_eq!(options.comma_position, CommaPosition::After);
    }

    #[test]
    fn test_paren_options_merge_one_level_deep() {
        let options: FormatOptions =
            toml::from_str("[paren_options]\nclose_paren_newline = false\n").unwrap();
        assert!(options.paren_options.open_paren_newline);
        assert!(!options.paren_options.close_paren_newline);
    }

    #[test]
    fn test_newline_mode_parsing() {
        assert_eq!("always".parse::<NewlineMode>().unwrap(), NewlineMode::Always);
        assert_eq!("never".parse::<NewlineMode>().unwrap(), NewlineMode::Never);
        assert_eq!(
            "line_width".parse::<NewlineMode>().unwrap(),
            NewlineMode::LineWidth
        );
        assert_eq!("3".parse::<NewlineMode>().unwrap(), NewlineMode::ItemCount(3));
        assert_eq!("0".parse::<NewlineMode>().unwrap(), NewlineMode::Always);
        assert!(matches!(
            "-1".parse::<NewlineMode>(),
            Err(FormatError::InvalidNewline(-1))
        ));
    }

    #[test]
    fn test_newline_mode_from_toml_number() {
        let options: FormatOptions = toml::from_str("newline = 5").unwrap();
        assert_eq!(options.newline, NewlineMode::ItemCount(5));
        assert!(toml::from_str::<FormatOptions>("newline = -2").is_err());
    }

    #[test]
    fn test_zero_line_width_resets_with_warning() {
        let mut options = FormatOptions::default();
        options.line_width = 0;
        let validated = options.validated(&StderrReporter);
        assert_eq!(validated.line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_ten_space_positions_force_indent() {
        let mut options = FormatOptions::default();
        options.keyword_position = KeywordPosition::TenSpaceRight;
        let validated = options.validated(&StderrReporter);
        assert_eq!(validated.indent, "          ");
    }

    #[test]
    fn test_language_from_toml() {
        let options: FormatOptions = toml::from_str("language = \"postgresql\"").unwrap();
        assert_eq!(options.language, Dialect::PostgreSql);
        assert!(toml::from_str::<FormatOptions>("language = \"sybase\"").is_err());
    }
}
