//! Literal class-string replacement across a fixed list of files.
//!
//! Each target is checked for existence, read in full, every occurrence of the
//! rule's old text is replaced with the new text, and the file is written back.
//! Missing targets are reported and skipped.

mod report;
mod rule;
mod run;

pub use report::{ConsoleReporter, Reporter, SilentReporter};
pub use rule::{find_literal_matches, replace_literal, ReplacementRule};
pub use run::{restyle_file, run, FileOutcome, FileStatus, RestyleReport, TargetFile};
