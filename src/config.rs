use std::path::{Path, PathBuf};

use crate::error::{FormatError, Result};
use crate::options::FormatOptions;

/// Configuration loaded from a TOML file for the CLI.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub options: FormatOptions,
    pub exclude: Vec<String>,
}

/// Load configuration from `sqlpretty.toml` or a `[tool.sqlpretty]` table
/// in `pyproject.toml`. Searches the parent directories of the given
/// inputs when no explicit path is provided.
pub fn load_config(files: &[PathBuf], config_path: Option<&Path>) -> Result<LoadedConfig> {
    let config_file = match config_path {
        Some(path) => {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                return Err(FormatError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        None => find_config_file(files),
    };

    match config_file {
        Some(path) => load_config_from_path(&path),
        None => Ok(LoadedConfig::default()),
    }
}

/// Search for a config file in the common parent directories of the given
/// files, nearest first.
fn find_config_file(files: &[PathBuf]) -> Option<PathBuf> {
    for parent in get_common_parents(files) {
        let config = parent.join("sqlpretty.toml");
        if config.exists() {
            return Some(config);
        }
        let config = parent.join("pyproject.toml");
        if config.exists() {
            return Some(config);
        }
    }
    None
}

/// Common parent directories of the given paths, most specific first.
fn get_common_parents(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut parents = Vec::new();

    for file in files {
        let parent = if file.is_dir() {
            file.clone()
        } else {
            file.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        };

        let mut current = Some(parent.as_path());
        while let Some(dir) = current {
            let dir_buf = dir.to_path_buf();
            if !parents.contains(&dir_buf) {
                parents.push(dir_buf);
            }
            current = dir.parent();
        }
    }

    parents
}

const KNOWN_KEYS: &[&str] = &[
    "language",
    "indent",
    "uppercase",
    "keyword_position",
    "newline",
    "break_before_boolean_operator",
    "alias_as",
    "tabulate_alias",
    "comma_position",
    "paren_options",
    "line_width",
    "lines_between_queries",
    "dense_operators",
    "semicolon_newline",
    "params",
    "exclude",
];

fn load_config_from_path(path: &Path) -> Result<LoadedConfig> {
    let content = std::fs::read_to_string(path)?;
    let parsed: toml::Value = content
        .parse()
        .map_err(|e| FormatError::Config(format!("failed to parse {}: {e}", path.display())))?;

    // pyproject.toml nests the table under [tool.sqlpretty];
    // sqlpretty.toml uses top-level keys.
    let section = if path.file_name().is_some_and(|n| n == "pyproject.toml") {
        parsed.get("tool").and_then(|t| t.get("sqlpretty"))
    } else {
        Some(&parsed)
    };

    let Some(toml::Value::Table(table)) = section else {
        return Ok(LoadedConfig::default());
    };

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return Err(FormatError::Config(format!("unknown config option: {key}")));
        }
    }

    let mut table = table.clone();
    let exclude = match table.remove("exclude") {
        Some(value) => value
            .try_into::<Vec<String>>()
            .map_err(|e| FormatError::Config(format!("invalid exclude list: {e}")))?,
        None => Vec::new(),
    };

    let options: FormatOptions = toml::Value::Table(table)
        .try_into()
        .map_err(|e| FormatError::Config(format!("invalid config in {}: {e}", path.display())))?;

    Ok(LoadedConfig { options, exclude })
}
