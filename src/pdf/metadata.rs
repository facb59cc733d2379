//! PDF page inspection

use std::path::Path;
use lopdf::{Document, Object, ObjectId};
use crate::error::{Error, Result};

/// Page-tree nesting beyond this is treated as a reference cycle
const MAX_TREE_DEPTH: usize = 64;

/// Count pages by reading the Count field from the root Pages dictionary
///
/// Only the root node is read, so the count is available without walking
/// the page tree.
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog = doc.catalog()
        .map_err(|_| Error::General("No catalog in trailer".to_string()))?;

    let pages_id = catalog.get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("Pages is missing or not a reference".to_string()))?;

    let pages_dict = doc.get_dictionary(pages_id)?;

    match pages_dict.get(b"Count") {
        Ok(Object::Integer(n)) if *n >= 0 => Ok(*n as usize),
        Ok(_) => Err(Error::General("Count is not a non-negative integer".to_string())),
        Err(_) => Err(Error::General("No Count in Pages".to_string())),
    }
}

/// Count the number of pages in a PDF file
///
/// This is a quick operation that reads the Count field from the Pages dictionary.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}

/// Effective /Rotate of a page in degrees
///
/// A page without its own /Rotate inherits the value of the nearest ancestor
/// in the page tree that has one. Pages with no rotation anywhere report 0.
pub fn page_rotation(doc: &Document, page_id: ObjectId) -> Result<i64> {
    let mut node_id = page_id;

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(node_id)?;

        if let Ok(value) = node.get(b"Rotate") {
            let value = match value {
                Object::Reference(id) => doc.get_object(*id)?,
                direct => direct,
            };
            return match value {
                Object::Integer(degrees) => Ok(*degrees),
                Object::Real(degrees) => Ok(*degrees as i64),
                _ => Err(Error::General(format!(
                    "Rotate on object {} {} is not a number",
                    node_id.0, node_id.1
                ))),
            };
        }

        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node_id = parent_id,
            Err(_) => return Ok(0),
        }
    }

    Err(Error::General(format!(
        "Page tree above object {} {} is too deep",
        page_id.0, page_id.1
    )))
}

/// Effective rotation of every page in a PDF file, in page order
pub fn page_rotations(path: &Path) -> Result<Vec<i64>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    doc.get_pages()
        .values()
        .map(|&page_id| page_rotation(&doc, page_id))
        .collect()
}
