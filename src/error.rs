use thiserror::Error;

/// User-facing errors.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("sqlpretty config error: {0}")]
    Config(String),

    #[error("unsupported SQL dialect: {0}")]
    UnsupportedDialect(String),

    #[error("invalid newline option: {0}")]
    InvalidNewline(i64),

    #[error("tokenizer stuck at byte offset {offset}")]
    TokenizerStuck { offset: usize },

    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
