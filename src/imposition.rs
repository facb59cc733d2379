//! Booklet imposition planning
//!
//! A booklet is printed on double-sided sheets, each side holding two pages.
//! After printing, the stack of sheets is folded down the middle so that the
//! pages read in order. This module works out which page number goes into
//! which slot of which sheet side.
//!
//! For an 8-page booklet the two sheets are laid out as:
//!
//! ```text
//! Sheet 1 front:  left 1 | right 8
//! Sheet 1 back:   left 7 | right 2
//! Sheet 2 front:  left 3 | right 6
//! Sheet 2 back:   left 5 | right 4
//! ```

use std::fmt;

use log::debug;

use crate::error::{Error, Result};

/// Pages carried by one sheet (two per side)
pub const PAGES_PER_SHEET: u32 = 4;

/// Largest content page count accepted for a booklet
///
/// Guides are built in memory with one PDF page per sheet side. No
/// saddle-stitched booklet comes close to this many pages.
pub const MAX_CONTENT_PAGES: i64 = 10_000;

/// The two pages printed on one side of a sheet
///
/// The ordering convention is `(right, left)`: the first element of the pair
/// is the page in the right-hand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PagePair {
    /// Page number in the right-hand slot
    pub right: u32,
    /// Page number in the left-hand slot
    pub left: u32,
}

impl PagePair {
    /// Create a pair from the right-slot page and the left-slot page
    pub fn new(right: u32, left: u32) -> Self {
        Self { right, left }
    }

    /// Both page numbers, right slot first
    pub fn pages(&self) -> [u32; 2] {
        [self.right, self.left]
    }
}

impl From<PagePair> for (u32, u32) {
    fn from(pair: PagePair) -> Self {
        (pair.right, pair.left)
    }
}

impl From<(u32, u32)> for PagePair {
    fn from((right, left): (u32, u32)) -> Self {
        Self::new(right, left)
    }
}

/// Which side of a sheet a page pair is printed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    Front,
    Back,
}

impl SheetSide {
    /// Side for the pair at `index` in a page-order sequence
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            SheetSide::Front
        } else {
            SheetSide::Back
        }
    }
}

impl fmt::Display for SheetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSide::Front => f.write_str("Front"),
            SheetSide::Back => f.write_str("Back"),
        }
    }
}

/// How page labels treat the blank filler pages at the end of a booklet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Filler pages are labelled "Blank", content pages "Content N"
    #[default]
    MarkBlank,
    /// Every page is labelled "Content N", filler included
    ContentOnly,
}

/// Round a content page count up to the next multiple of four
///
/// Counts outside `1..=MAX_CONTENT_PAGES` fail with
/// [`Error::InvalidPageCount`].
///
/// # Example
///
/// ```
/// use pdf_booklet::imposition::compute_padded_count;
///
/// assert_eq!(compute_padded_count(8).unwrap(), 8);
/// assert_eq!(compute_padded_count(5).unwrap(), 8);
/// assert!(compute_padded_count(0).is_err());
/// ```
pub fn compute_padded_count(content_pages: i64) -> Result<u32> {
    if !(1..=MAX_CONTENT_PAGES).contains(&content_pages) {
        return Err(Error::InvalidPageCount(content_pages));
    }

    Ok((content_pages as u32).next_multiple_of(PAGES_PER_SHEET))
}

/// Number of physical sheets needed for a booklet of `content_pages`
pub fn sheet_count(content_pages: i64) -> Result<u32> {
    Ok(compute_padded_count(content_pages)? / PAGES_PER_SHEET)
}

/// Compute the print order of page pairs for a booklet
///
/// Each sheet contributes two pairs, front side first. Sheets come out in
/// stacking order, so the first pair is the outer cover fold and always holds
/// the highest padded page on the right and page 1 on the left.
///
/// # Example
///
/// ```
/// use pdf_booklet::imposition::{compute_page_order, PagePair};
///
/// let order = compute_page_order(4).unwrap();
/// assert_eq!(order, vec![PagePair::new(4, 1), PagePair::new(2, 3)]);
/// ```
pub fn compute_page_order(content_pages: i64) -> Result<Vec<PagePair>> {
    let padded = compute_padded_count(content_pages)?;
    let sheets = padded / PAGES_PER_SHEET;

    let mut order = Vec::with_capacity(2 * sheets as usize);
    let mut low = 1;
    let mut high = padded;

    for _ in 0..sheets {
        order.push(PagePair::new(high, low));
        order.push(PagePair::new(low + 1, high - 1));
        low += 2;
        high -= 2;
    }

    Ok(order)
}

/// A computed booklet layout together with the counts it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    content_pages: u32,
    padded_pages: u32,
    page_order: Vec<PagePair>,
}

impl ImpositionPlan {
    /// Plan a booklet of `content_pages` pages
    pub fn new(content_pages: i64) -> Result<Self> {
        let padded_pages = compute_padded_count(content_pages)?;
        let page_order = compute_page_order(content_pages)?;

        debug!(
            "Planned {} content pages as {} padded pages on {} sheets",
            content_pages,
            padded_pages,
            padded_pages / PAGES_PER_SHEET
        );

        Ok(Self {
            // compute_padded_count has already checked the range
            content_pages: content_pages as u32,
            padded_pages,
            page_order,
        })
    }

    pub fn content_pages(&self) -> u32 {
        self.content_pages
    }

    pub fn padded_pages(&self) -> u32 {
        self.padded_pages
    }

    pub fn sheet_count(&self) -> u32 {
        self.padded_pages / PAGES_PER_SHEET
    }

    /// Number of blank filler pages appended after the content
    pub fn blank_pages(&self) -> u32 {
        self.padded_pages - self.content_pages
    }

    pub fn page_order(&self) -> &[PagePair] {
        &self.page_order
    }

    /// Whether `page` is filler beyond the last content page
    pub fn is_blank(&self, page: u32) -> bool {
        page > self.content_pages
    }

    /// Every sheet side in print order as `(sheet_number, side, pair)`
    ///
    /// Sheet numbers are 1-based.
    pub fn sides(&self) -> impl Iterator<Item = (u32, SheetSide, PagePair)> + '_ {
        self.page_order
            .iter()
            .enumerate()
            .map(|(i, pair)| ((i / 2) as u32 + 1, SheetSide::for_index(i), *pair))
    }

    /// Display label for a page number
    pub fn label(&self, page: u32, style: LabelStyle) -> String {
        match style {
            LabelStyle::MarkBlank if self.is_blank(page) => "Blank".to_string(),
            _ => format!("Content {}", page),
        }
    }
}
