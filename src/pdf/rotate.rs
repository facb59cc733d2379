//! Even-page rotation for duplex printing using lopdf
//!
//! Printers that flip sheets on the short edge print every back side upside
//! down. Turning the even pages by 180 degrees before printing compensates.

use std::path::{Path, PathBuf};

use log::{debug, info};
use lopdf::{Document, Object};

use crate::error::{Error, Result};
use crate::pdf::metadata::page_rotation;
use crate::pdf::save::save_document;

/// Options for rotating the even pages of a PDF
#[derive(Debug, Clone)]
pub struct RotateOptions {
    /// Source PDF, never modified
    pub input_path: PathBuf,
    /// Where the rotated copy is written
    pub output_path: PathBuf,
}

impl RotateOptions {
    /// Build options, deriving the output path from the input when not given
    pub fn new(input_path: impl Into<PathBuf>, output_path: Option<PathBuf>) -> Self {
        let input_path = input_path.into();
        let output_path = output_path.unwrap_or_else(|| default_output_path(&input_path));
        Self { input_path, output_path }
    }
}

/// Result of a rotation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotateSummary {
    /// Pages in the document
    pub page_count: usize,
    /// 1-based numbers of the pages that were turned
    pub rotated_pages: Vec<u32>,
}

/// Default output path: the input with `_rotated` before a `.pdf` extension
///
/// ```
/// use pdf_booklet::pdf::default_output_path;
/// use std::path::Path;
///
/// assert_eq!(default_output_path(Path::new("scan.pdf")), Path::new("scan_rotated.pdf"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push("_rotated.pdf");
    input.with_file_name(name)
}

/// Rotate every even-numbered page by 180 degrees
///
/// The rotation is added to each even page's current (possibly inherited)
/// rotation. Odd pages are left exactly as they are. The result is written to
/// `options.output_path`; the input file is only read.
///
/// # Example
///
/// ```no_run
/// use pdf_booklet::pdf::{rotate_even_pages, RotateOptions};
///
/// let options = RotateOptions::new("scan.pdf", None);
/// let summary = rotate_even_pages(&options).expect("Failed to rotate");
/// println!("Rotated {} pages", summary.rotated_pages.len());
/// ```
pub fn rotate_even_pages(options: &RotateOptions) -> Result<RotateSummary> {
    let input = &options.input_path;
    if !input.exists() {
        return Err(Error::FileNotFound(input.clone()));
    }
    if same_file(input, &options.output_path) {
        return Err(Error::OutputOverwritesInput(options.output_path.clone()));
    }

    let mut doc = Document::load(input)?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(Error::EmptyPdf(input.clone()));
    }

    let mut rotated_pages = Vec::new();
    for (&page_number, &page_id) in pages.iter().filter(|(number, _)| *number % 2 == 0) {
        let current = page_rotation(&doc, page_id)?;
        let rotation = (current + 180).rem_euclid(360);

        doc.get_dictionary_mut(page_id)?
            .set("Rotate", Object::Integer(rotation));

        debug!("Page {}: rotation {} -> {}", page_number, current, rotation);
        rotated_pages.push(page_number);
    }

    save_document(&mut doc, &options.output_path)?;

    info!(
        "Rotated {} of {} pages from {} into {}",
        rotated_pages.len(),
        pages.len(),
        input.display(),
        options.output_path.display()
    );

    Ok(RotateSummary {
        page_count: pages.len(),
        rotated_pages,
    })
}

/// Whether two paths name the same file (the output may not exist yet)
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(Path::new("scan.pdf")), Path::new("scan_rotated.pdf"));
        assert_eq!(
            default_output_path(Path::new("docs/print job.pdf")),
            Path::new("docs/print job_rotated.pdf")
        );
        assert_eq!(default_output_path(Path::new("notes")), Path::new("notes_rotated.pdf"));
        assert_eq!(
            default_output_path(Path::new("archive.v2.pdf")),
            Path::new("archive.v2_rotated.pdf")
        );
    }

    #[test]
    fn test_options_default_output() {
        let options = RotateOptions::new("in.pdf", None);
        assert_eq!(options.output_path, PathBuf::from("in_rotated.pdf"));

        let options = RotateOptions::new("in.pdf", Some(PathBuf::from("out.pdf")));
        assert_eq!(options.output_path, PathBuf::from("out.pdf"));
    }

    #[test]
    fn test_rotate_nonexistent_file() {
        let options = RotateOptions::new("nonexistent.pdf", None);
        let result = rotate_even_pages(&options);
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_same_file_without_output() {
        assert!(same_file(Path::new("a.pdf"), Path::new("a.pdf")));
        assert!(!same_file(Path::new("a.pdf"), Path::new("b.pdf")));
    }
}
