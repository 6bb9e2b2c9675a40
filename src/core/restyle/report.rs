use std::io::{self, Write};
use std::path::Path;

use super::run::RestyleReport;

/// Receives progress events while targets are processed.
pub trait Reporter {
    fn updating(&mut self, path: &Path);
    fn updated(&mut self, path: &Path, replacements: usize);
    fn not_found(&mut self, path: &Path);
    /// Called once after every target was handled.
    fn finished(&mut self, report: &RestyleReport);
}

/// Human-readable progress lines written to `W`.
///
/// Lines are informational: a failed write never stops the run.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                crate::log_status!("restyle", "failed to write progress: {}", e);
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn updating(&mut self, path: &Path) {
        self.emit(format_args!("Updating {}...", path.display()));
    }

    fn updated(&mut self, path: &Path, replacements: usize) {
        crate::log_status!(
            "restyle",
            "{} replacement(s) in {}",
            replacements,
            path.display()
        );
        self.emit(format_args!("✅ {} updated!", path.display()));
    }

    fn not_found(&mut self, path: &Path) {
        self.emit(format_args!("❌ File not found: {}", path.display()));
    }

    fn finished(&mut self, _report: &RestyleReport) {
        self.emit(format_args!("🎉 Focus styles updated successfully!"));
    }
}

/// Discards all events.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn updating(&mut self, _path: &Path) {}
    fn updated(&mut self, _path: &Path, _replacements: usize) {}
    fn not_found(&mut self, _path: &Path) {}
    fn finished(&mut self, _report: &RestyleReport) {}
}
