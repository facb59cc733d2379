//! PDF generation and manipulation module

pub mod guide;
pub mod metadata;
pub mod rotate;
pub mod save;

// Re-export commonly used items
pub use guide::{create_layout_guide, guide_pages, GuideOptions, GuidePage, GuideSummary, SlotLabel};
pub use metadata::{count_pages, page_rotation, page_rotations};
pub use rotate::{default_output_path, rotate_even_pages, RotateOptions, RotateSummary};
pub use save::save_document;
