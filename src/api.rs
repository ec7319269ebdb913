use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::formatter::SqlFormatter;
use crate::options::FormatOptions;
use crate::report::{FileResult, FileStatus, Report, Reporter, StderrReporter};
use crate::tokenizer::Tokenizer;

/// Format a SQL string. This is the core API function.
pub fn format(query: &str, options: &FormatOptions) -> Result<String> {
    format_with_reporter(query, options, &StderrReporter)
}

/// Format a SQL string, routing warnings through a caller-supplied
/// reporter.
pub fn format_with_reporter(
    query: &str,
    options: &FormatOptions,
    reporter: &dyn Reporter,
) -> Result<String> {
    let options = options.validated(reporter);

    // Step 1: tokenize
    let tokenizer = Tokenizer::new(options.language);
    let tokens = tokenizer.tokenize(query)?;

    // Step 2: single-pass format
    SqlFormatter::new(&options, options.language.spec()).format(&tokens)
}

/// File-run behavior for the CLI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report drift without writing files.
    pub check: bool,
    /// Print a diff instead of writing files.
    pub diff: bool,
    /// Glob patterns excluded from directory walks.
    pub exclude: Vec<String>,
    /// Worker threads (0 = all cores).
    pub threads: usize,
    pub single_process: bool,
}

/// Run the formatter on a collection of files.
pub fn run(files: &[PathBuf], options: &FormatOptions, run_options: &RunOptions) -> Report {
    let matching_paths = get_matching_paths(files, &run_options.exclude);
    let mut report = Report::new();

    if run_options.single_process || matching_paths.len() <= 1 {
        for path in &matching_paths {
            report.add(format_file(path, options, run_options));
        }
    } else {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(run_options.threads)
            .build()
            .expect("failed to build rayon thread pool");

        let results: Vec<FileResult> = pool.install(|| {
            matching_paths
                .par_iter()
                .map(|path| format_file(path, options, run_options))
                .collect()
        });
        for result in results {
            report.add(result);
        }
    }

    report
}

/// Format a single file in place.
fn format_file(path: &Path, options: &FormatOptions, run_options: &RunOptions) -> FileResult {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            return FileResult {
                path: path.to_path_buf(),
                status: FileStatus::Error,
                error: Some(format!("read error: {e}")),
            };
        }
    };

    let formatted = match format(&source, options) {
        // Files get exactly one trailing newline.
        Ok(f) if f.is_empty() => f,
        Ok(f) => f + "\n",
        Err(e) => {
            return FileResult {
                path: path.to_path_buf(),
                status: FileStatus::Error,
                error: Some(e.to_string()),
            };
        }
    };

    if source == formatted {
        return FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
            error: None,
        };
    }

    if run_options.check || run_options.diff {
        if run_options.diff {
            print_diff(path, &source, &formatted);
        }
        return FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Changed,
            error: None,
        };
    }

    match std::fs::write(path, &formatted) {
        Ok(_) => FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Changed,
            error: None,
        },
        Err(e) => FileResult {
            path: path.to_path_buf(),
            status: FileStatus::Error,
            error: Some(format!("write error: {e}")),
        },
    }
}

/// Get all SQL file paths that match the given inputs, sorted.
pub fn get_matching_paths(paths: &[PathBuf], exclude: &[String]) -> Vec<PathBuf> {
    let mut result = HashSet::new();

    // Pre-compile glob patterns once instead of per-file
    let exclude_patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();

    for path in paths {
        if path.is_file() {
            if is_sql_file(path) {
                result.insert(path.clone());
            }
        } else if path.is_dir() {
            collect_sql_files(path, &exclude_patterns, &mut result);
        }
    }

    let mut sorted: Vec<PathBuf> = result.into_iter().collect();
    sorted.sort();
    sorted
}

const SQL_EXTENSIONS: &[&str] = &[".sql", ".ddl", ".dml"];

fn is_sql_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    SQL_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn collect_sql_files(
    dir: &Path,
    exclude_patterns: &[glob::Pattern],
    result: &mut HashSet<PathBuf>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        // Skip hidden entries and excluded patterns
        if name.starts_with('.') {
            continue;
        }
        if exclude_patterns.iter().any(|p| p.matches(&name)) {
            continue;
        }

        if path.is_dir() {
            collect_sql_files(&path, exclude_patterns, result);
        } else if is_sql_file(&path) {
            result.insert(path);
        }
    }
}

/// Print a line diff between original and formatted content to stderr.
fn print_diff(path: &Path, original: &str, formatted: &str) {
    use similar::{ChangeTag, TextDiff};

    eprintln!("--- {}", path.display());
    eprintln!("+++ {}", path.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        eprint!("{}{}", sign, change);
    }
}
