use std::path::PathBuf;

/// Sink for non-fatal warnings (currently only the line-width
/// auto-correction). Pluggable so embedders can route warnings away from
/// stderr.
pub trait Reporter {
    fn warning(&self, message: &str);
}

/// Default reporter: warnings go to standard error.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn warning(&self, message: &str) {
        eprintln!("sqlpretty: warning: {message}");
    }
}

/// Reporter that swallows warnings.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn warning(&self, _message: &str) {}
}

/// Status of formatting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// File was already formatted correctly.
    Unchanged,
    /// File was reformatted (or would be, in check mode).
    Changed,
    /// An error occurred while processing the file.
    Error,
}

/// Result of formatting a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub status: FileStatus,
    pub error: Option<String>,
}

/// Aggregated report over a file run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    fn count(&self, status: FileStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn unchanged(&self) -> usize {
        self.count(FileStatus::Unchanged)
    }

    pub fn changed(&self) -> usize {
        self.count(FileStatus::Changed)
    }

    pub fn errors(&self) -> usize {
        self.count(FileStatus::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors() > 0
    }

    pub fn has_changes(&self) -> bool {
        self.changed() > 0
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} file(s) processed", self.total())];
        if self.changed() > 0 {
            parts.push(format!("{} reformatted", self.changed()));
        }
        if self.unchanged() > 0 {
            parts.push(format!("{} unchanged", self.unchanged()));
        }
        if self.errors() > 0 {
            parts.push(format!("{} error(s)", self.errors()));
        }
        parts.join(", ")
    }

    pub fn print_errors(&self) {
        for result in &self.results {
            if let Some(ref error) = result.error {
                eprintln!("error: {}: {}", result.path.display(), error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_and_summary() {
        let mut report = Report::new();
        report.add(FileResult {
            path: PathBuf::from("a.sql"),
            status: FileStatus::Changed,
            error: None,
        });
        report.add(FileResult {
            path: PathBuf::from("b.sql"),
            status: FileStatus::Unchanged,
            error: None,
        });
        report.add(FileResult {
            path: PathBuf::from("c.sql"),
            status: FileStatus::Error,
            error: Some("tokenizer stuck".to_string()),
        });

        assert_eq!(report.total(), 3);
        assert_eq!(report.changed(), 1);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.errors(), 1);
        assert!(report.has_errors());
        assert!(report.has_changes());
        assert!(report.summary().contains("3 file(s) processed"));
        assert!(report.summary().contains("1 reformatted"));
    }

    #[test]
    fn test_silent_reporter_is_silent() {
        SilentReporter.warning("nothing to see");
    }
}
