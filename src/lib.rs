//! PDF Booklet Library
//!
//! Helpers for printing booklets on a duplex printer. This library provides
//! functionality to:
//! - Work out which pages go on each side of each sheet (imposition)
//! - Draw a printable layout guide for folding the sheets
//! - Rotate the even pages of a PDF by 180 degrees
//!
//! # Example
//!
//! ```
//! use pdf_booklet::imposition::{compute_page_order, PagePair};
//!
//! let order = compute_page_order(8).expect("Failed to plan booklet");
//! assert_eq!(order[0], PagePair::new(8, 1));
//! assert_eq!(order.len(), 4);
//! ```

pub mod error;
pub mod imposition;
pub mod layout;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
pub use imposition::{compute_padded_count, compute_page_order, ImpositionPlan, PagePair};
