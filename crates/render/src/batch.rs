//! Per-slide export with failure isolation.

use crate::png::png_dimensions;
use crate::{RenderError, Result, SlideRenderer};
use std::path::{Path, PathBuf};

/// Output file type of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
        }
    }
}

/// A slide that could not be exported.
#[derive(Debug)]
pub struct BatchFailure {
    pub input: PathBuf,
    pub error: RenderError,
}

/// Outcome of a batch: what was written and what was skipped.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written files, in input order.
    pub produced: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failures caused by the ready marker timing out.
    pub fn timeouts(&self) -> usize {
        self.failures.iter().filter(|f| f.error.is_timeout()).count()
    }
}

/// Export every input to `<out_dir>/<stem>.<ext>`.
///
/// Only a failure to create `out_dir` is returned as an error. Anything that
/// goes wrong with a single slide is logged, recorded in the report and the
/// batch moves on to the next slide.
pub fn export_batch<R>(
    renderer: &mut R,
    inputs: &[PathBuf],
    out_dir: &Path,
    format: OutputFormat,
) -> Result<BatchReport>
where
    R: SlideRenderer + ?Sized,
{
    std::fs::create_dir_all(out_dir)?;
    let mut report = BatchReport::default();

    for input in inputs {
        match export_one(renderer, input, out_dir, format) {
            Ok(output) => report.produced.push(output),
            Err(error) => {
                if error.is_timeout() {
                    log::warn!("Timeout loading {}", input.display());
                } else {
                    log::warn!("Error exporting {}: {}", input.display(), error);
                }
                report.failures.push(BatchFailure {
                    input: input.clone(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Exported {} of {} slides to {}",
        report.produced.len(),
        inputs.len(),
        out_dir.display()
    );
    Ok(report)
}

fn export_one<R>(
    renderer: &mut R,
    input: &Path,
    out_dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf>
where
    R: SlideRenderer + ?Sized,
{
    let bytes = match format {
        OutputFormat::Pdf => renderer.render_pdf(input)?,
        OutputFormat::Png => renderer.render_png(input)?,
    };

    // A corrupt capture must not be written as if it were a slide.
    let size = match format {
        OutputFormat::Png => Some(png_dimensions(&bytes).map_err(|e| RenderError::Render {
            path: input.to_path_buf(),
            message: format!("Invalid PNG capture: {}", e),
        })?),
        OutputFormat::Pdf => None,
    };

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("slide");
    let output = out_dir.join(format!("{}.{}", stem, format.extension()));
    std::fs::write(&output, &bytes)?;

    match size {
        Some((width, height)) => log::info!("Saved {} [{}x{}]", output.display(), width, height),
        None => log::info!("Generated {}", output.display()),
    }

    Ok(output)
}
