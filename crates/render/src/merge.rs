//! Merging single-page PDFs with Ghostscript.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Result of a merge attempt. Only `Merged` produced a file; the failure
/// variants carry the command to run by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Nothing to merge.
    Skipped,

    Merged(PathBuf),

    /// The `gs` executable could not be found.
    ToolMissing { manual_command: String },

    /// Ghostscript ran but did not succeed.
    Failed { message: String, manual_command: String },
}

/// Ghostscript invocation.
#[derive(Debug, Clone)]
pub struct Ghostscript {
    program: String,
}

impl Default for Ghostscript {
    fn default() -> Self {
        Self::new()
    }
}

impl Ghostscript {
    /// Use `gs` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: "gs".into(),
        }
    }

    /// Use a specific executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments after the program name.
    pub fn arguments(&self, inputs: &[PathBuf], output: &Path) -> Vec<String> {
        let mut args = vec![
            "-dBATCH".to_string(),
            "-dNOPAUSE".to_string(),
            "-q".to_string(),
            "-sDEVICE=pdfwrite".to_string(),
            format!("-sOutputFile={}", output.display()),
        ];
        args.extend(inputs.iter().map(|p| p.display().to_string()));
        args
    }

    /// The merge command as a shell line, for manual recovery.
    pub fn manual_command(&self, inputs: &[PathBuf], output: &Path) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.arguments(inputs, output));
        parts.join(" ")
    }

    /// Merge `inputs` (in order) into `output`.
    ///
    /// Never fails the caller: a missing tool or a failed run is reported
    /// through the outcome and logged as a warning.
    pub fn merge(&self, inputs: &[PathBuf], output: &Path) -> MergeOutcome {
        if inputs.is_empty() {
            log::info!("No PDFs to merge");
            return MergeOutcome::Skipped;
        }

        let manual_command = self.manual_command(inputs, output);
        log::info!("Merging {} PDFs into {}", inputs.len(), output.display());

        match Command::new(&self.program)
            .args(self.arguments(inputs, output))
            .status()
        {
            Ok(status) if status.success() => {
                log::info!("Created merged PDF {}", output.display());
                MergeOutcome::Merged(output.to_path_buf())
            }
            Ok(status) => {
                log::warn!("Ghostscript exited with {}", status);
                MergeOutcome::Failed {
                    message: format!("{} exited with {}", self.program, status),
                    manual_command,
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("Ghostscript ({}) not found", self.program);
                MergeOutcome::ToolMissing { manual_command }
            }
            Err(e) => {
                log::warn!("Failed to run Ghostscript: {}", e);
                MergeOutcome::Failed {
                    message: e.to_string(),
                    manual_command,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<PathBuf> {
        vec![PathBuf::from("out/page1.pdf"), PathBuf::from("out/page2.pdf")]
    }

    #[test]
    fn test_manual_command() {
        let gs = Ghostscript::new();
        assert_eq!(
            gs.manual_command(&pages(), Path::new("out/deck.pdf")),
            "gs -dBATCH -dNOPAUSE -q -sDEVICE=pdfwrite -sOutputFile=out/deck.pdf out/page1.pdf out/page2.pdf"
        );
    }

    #[test]
    fn test_nothing_to_merge() {
        let outcome = Ghostscript::new().merge(&[], Path::new("deck.pdf"));
        assert_eq!(outcome, MergeOutcome::Skipped);
    }

    #[test]
    fn test_missing_tool_is_not_fatal() {
        let gs = Ghostscript::new().with_program("slides-export-no-such-ghostscript");
        let outcome = gs.merge(&pages(), Path::new("deck.pdf"));

        match outcome {
            MergeOutcome::ToolMissing { manual_command } => {
                assert!(manual_command.starts_with("slides-export-no-such-ghostscript -dBATCH"));
            }
            other => panic!("expected ToolMissing, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_run() {
        let outcome = Ghostscript::new()
            .with_program("false")
            .merge(&pages(), Path::new("deck.pdf"));
        assert!(matches!(outcome, MergeOutcome::Failed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run() {
        let outcome = Ghostscript::new()
            .with_program("true")
            .merge(&pages(), Path::new("deck.pdf"));
        assert_eq!(outcome, MergeOutcome::Merged(PathBuf::from("deck.pdf")));
    }
}
