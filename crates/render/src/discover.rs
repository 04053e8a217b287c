//! Finding slide documents on disk.

use crate::{RenderError, Result};
use std::path::{Path, PathBuf};

/// Pages that live next to the slides but are not slides themselves.
pub const DEFAULT_EXCLUDED: &[&str] = &["index.html", "projects.html", "alaris-project.html"];

/// `.html` files directly inside `dir`, minus `excluded` names, sorted by
/// file name.
pub fn discover_slides(dir: &Path, excluded: &[String]) -> Result<Vec<PathBuf>> {
    let mut slides: Vec<PathBuf> = html_files(dir)?
        .into_iter()
        .filter(|path| {
            let name = file_name(path);
            let keep = !excluded.iter().any(|ex| ex == name);
            if !keep {
                log::debug!("Skipping excluded page {}", name);
            }
            keep
        })
        .collect();

    slides.sort_by(|a, b| file_name(a).cmp(file_name(b)));
    log::debug!("Found {} slides in {}", slides.len(), dir.display());
    Ok(slides)
}

/// `<prefix><N>.html` files directly inside `dir`, sorted by `N`
/// numerically (`page2` before `page10`). Files whose suffix is not a
/// number are ignored.
pub fn discover_numbered_pages(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let mut pages: Vec<(u32, PathBuf)> = html_files(dir)?
        .into_iter()
        .filter_map(|path| {
            let number = page_number(&path, prefix)?;
            Some((number, path))
        })
        .collect();

    pages.sort_by_key(|(number, _)| *number);
    log::debug!("Found {} numbered pages in {}", pages.len(), dir.display());
    Ok(pages.into_iter().map(|(_, path)| path).collect())
}

/// Non-recursive listing of `.html` files.
fn html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RenderError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_html = path.extension().and_then(|e| e.to_str()) == Some("html");
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Extract `N` from `<prefix><N>.html`.
fn page_number(path: &Path, prefix: &str) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    match stem.strip_prefix(prefix)?.parse() {
        Ok(number) => Some(number),
        Err(_) => {
            log::debug!("Ignoring {}: no page number", stem);
            None
        }
    }
}
