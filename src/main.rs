use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use sqlpretty::options::{CommaPosition, FormatOptions, KeywordPosition, NewlineMode};
use sqlpretty::{Dialect, RunOptions};

/// sqlpretty - a multi-dialect SQL pretty-printer.
#[derive(Parser, Debug)]
#[command(name = "sqlpretty", version, about)]
struct Cli {
    /// Files or directories to format. Use "-" to read from stdin.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// SQL dialect: bigquery, db2, hive, mariadb, mysql, n1ql, plsql,
    /// postgresql, redshift, spark, sql, tsql.
    #[arg(short = 'd', long)]
    language: Option<String>,

    /// Spaces per indentation level.
    #[arg(long)]
    indent: Option<usize>,

    /// Emit reserved words in their source case instead of uppercase.
    #[arg(long)]
    no_uppercase: bool,

    /// Keyword position: standard, ten_space_left, ten_space_right.
    #[arg(long)]
    keyword_position: Option<String>,

    /// List-item breaking: always, never, line_width, or an item count.
    #[arg(long, allow_hyphen_values = true)]
    newline: Option<String>,

    /// Put boolean operators at the end of the line instead of the start.
    #[arg(long)]
    no_break_before_boolean_operator: bool,

    /// Comma position: after, before, tabular.
    #[arg(long)]
    comma_position: Option<String>,

    /// Maximum width for inline parenthesized groups.
    #[arg(short = 'w', long)]
    line_width: Option<i64>,

    /// Newlines emitted between ;-separated queries.
    #[arg(long)]
    lines_between_queries: Option<usize>,

    /// Emit operators without surrounding spaces.
    #[arg(long)]
    dense_operators: bool,

    /// Put each semicolon on its own line.
    #[arg(long)]
    semicolon_newline: bool,

    /// Check formatting without writing changes.
    #[arg(long)]
    check: bool,

    /// Show formatting diff without writing changes.
    #[arg(long)]
    diff: bool,

    /// Glob patterns to exclude.
    #[arg(long)]
    exclude: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only).
    #[arg(short, long)]
    quiet: bool,

    /// Number of threads for parallel processing (0 = all cores).
    #[arg(short = 't', long, default_value_t = 0)]
    threads: usize,

    /// Disable multi-threaded processing.
    #[arg(long)]
    single_process: bool,

    /// Path to config file (sqlpretty.toml or pyproject.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let is_stdin = cli.files.len() == 1 && cli.files[0].to_string_lossy() == "-";

    let loaded = match sqlpretty::load_config(&cli.files, cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    let options = match apply_cli_options(loaded.options, &cli) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(2);
        }
    };

    let run_options = RunOptions {
        check: cli.check,
        diff: cli.diff,
        exclude: if cli.exclude.is_empty() {
            loaded.exclude
        } else {
            cli.exclude.clone()
        },
        threads: cli.threads,
        single_process: cli.single_process,
    };

    if is_stdin {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            eprintln!("error reading stdin: {e}");
            std::process::exit(2);
        }

        match sqlpretty::format(&source, &options) {
            Ok(formatted) => {
                println!("{formatted}");
            }
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(2);
            }
        }
        return;
    }

    let report = sqlpretty::run(&cli.files, &options, &run_options);

    if cli.verbose {
        for result in &report.results {
            match result.status {
                sqlpretty::FileStatus::Changed => {
                    eprintln!("reformatted {}", result.path.display());
                }
                sqlpretty::FileStatus::Unchanged => {}
                sqlpretty::FileStatus::Error => {}
            }
        }
    }

    if !cli.quiet {
        eprintln!("{}", report.summary());
    }

    report.print_errors();

    if report.has_errors() {
        std::process::exit(2);
    } else if run_options.check && report.has_changes() {
        std::process::exit(1);
    }
}

/// Layer CLI flags over file-loaded options.
fn apply_cli_options(
    mut options: FormatOptions,
    cli: &Cli,
) -> Result<FormatOptions, sqlpretty::FormatError> {
    if let Some(language) = &cli.language {
        options.language = language.parse::<Dialect>()?;
    }
    if let Some(spaces) = cli.indent {
        options.indent = " ".repeat(spaces);
    }
    if cli.no_uppercase {
        options.uppercase = false;
    }
    if let Some(position) = &cli.keyword_position {
        options.keyword_position = match position.as_str() {
            "standard" => KeywordPosition::Standard,
            "ten_space_left" => KeywordPosition::TenSpaceLeft,
            "ten_space_right" => KeywordPosition::TenSpaceRight,
            other => {
                return Err(sqlpretty::FormatError::Config(format!(
                    "unknown keyword position: {other}"
                )))
            }
        };
    }
    if let Some(newline) = &cli.newline {
        options.newline = newline.parse::<NewlineMode>()?;
    }
    if cli.no_break_before_boolean_operator {
        options.break_before_boolean_operator = false;
    }
    if let Some(position) = &cli.comma_position {
        options.comma_position = match position.as_str() {
            "after" => CommaPosition::After,
            "before" => CommaPosition::Before,
            "tabular" => CommaPosition::Tabular,
            other => {
                return Err(sqlpretty::FormatError::Config(format!(
                    "unknown comma position: {other}"
                )))
            }
        };
    }
    if let Some(width) = cli.line_width {
        // Non-positive widths fall back to the default inside format(),
        // with a warning.
        options.line_width = width.max(0) as usize;
    }
    if let Some(lines) = cli.lines_between_queries {
        options.lines_between_queries = lines;
    }
    if cli.dense_operators {
        options.dense_operators = true;
    }
    if cli.semicolon_newline {
        options.semicolon_newline = true;
    }
    Ok(options)
}
