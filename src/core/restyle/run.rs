use serde::Serialize;
use std::path::{Path, PathBuf};

use super::report::Reporter;
use super::rule::{replace_literal, ReplacementRule};
use crate::defaults::RestyleConfig;
use crate::error::Result;
use crate::utils::io;

// ============================================================================
// Types
// ============================================================================

/// A file loaded for rewriting. Content lives only until `save`.
#[derive(Debug)]
pub struct TargetFile {
    path: PathBuf,
    content: String,
}

impl TargetFile {
    /// Read `path` in full. Callers check existence first.
    pub fn read(path: &Path) -> Result<Self> {
        let content = io::read_text(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Rewrite the in-memory content, returning the replacement count.
    pub fn apply(&mut self, rule: &ReplacementRule) -> usize {
        let (updated, count) = replace_literal(&self.content, rule);
        self.content = updated;
        count
    }

    /// Overwrite the file on disk with the current content.
    pub fn save(&self) -> Result<()> {
        io::write_text(&self.path, &self.content)
    }

    #[cfg(test)]
    pub(crate) fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Updated,
    NotFound,
}

/// Result of processing one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: String,
    pub status: FileStatus,
    pub replacements: usize,
}

/// Summary of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RestyleReport {
    pub rule: ReplacementRule,
    pub files: Vec<FileOutcome>,
    pub updated: usize,
    pub not_found: usize,
    pub total_replacements: usize,
}

// ============================================================================
// Operations
// ============================================================================

/// Restyle a single file: load, replace, and write back.
///
/// The file is written even when nothing matched, leaving its bytes unchanged.
/// A missing file yields `FileStatus::NotFound` and is never created.
pub fn restyle_file(path: &Path, rule: &ReplacementRule) -> Result<FileOutcome> {
    let display = path.display().to_string();

    if !path.exists() {
        return Ok(FileOutcome {
            path: display,
            status: FileStatus::NotFound,
            replacements: 0,
        });
    }

    Ok(FileOutcome {
        path: display,
        status: FileStatus::Updated,
        replacements: rewrite(path, rule)?,
    })
}

/// Read, replace, and write back a file known to exist.
fn rewrite(path: &Path, rule: &ReplacementRule) -> Result<usize> {
    let mut target = TargetFile::read(path)?;
    let replacements = target.apply(rule);
    target.save()?;
    Ok(replacements)
}

/// Process every configured target under `root`, in order.
///
/// The first read or write failure aborts the run; `finished` is only
/// reported when all targets were handled.
pub fn run(
    root: &Path,
    config: &RestyleConfig,
    reporter: &mut dyn Reporter,
) -> Result<RestyleReport> {
    let mut files = Vec::with_capacity(config.targets.len());

    for target in &config.targets {
        let path = root.join(target);

        if !path.exists() {
            reporter.not_found(target);
            files.push(FileOutcome {
                path: target.display().to_string(),
                status: FileStatus::NotFound,
                replacements: 0,
            });
            continue;
        }

        reporter.updating(target);
        let replacements = rewrite(&path, &config.rule)?;
        reporter.updated(target, replacements);
        files.push(FileOutcome {
            path: target.display().to_string(),
            status: FileStatus::Updated,
            replacements,
        });
    }

    let updated = files
        .iter()
        .filter(|f| f.status == FileStatus::Updated)
        .count();
    let report = RestyleReport {
        rule: config.rule.clone(),
        not_found: files.len() - updated,
        updated,
        total_replacements: files.iter().map(|f| f.replacements).sum(),
        files,
    };

    reporter.finished(&report);
    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
