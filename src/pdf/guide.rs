//! Booklet layout guide rendering using lopdf
//!
//! The guide has one landscape page per sheet side. Each page shows the sheet
//! outline, a dashed fold line down the middle, which page belongs in each
//! half, and printing or folding instructions.

use std::path::PathBuf;

use chrono::Local;
use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::Result;
use crate::imposition::{ImpositionPlan, LabelStyle, SheetSide};
use crate::layout::{GuideLayout, PageDimensions};
use crate::pdf::save::save_document;

const FRONT_INSTRUCTIONS: [&str; 3] = [
    "1. Print all front sides first",
    "2. Reinsert the printed pages to print the back sides",
    "3. Make sure to maintain the same orientation",
];

const BACK_INSTRUCTIONS: [&str; 3] = [
    "1. After printing both sides",
    "2. Fold along the dotted line",
    "3. Stack sheets in order (Sheet 1 outermost)",
];

/// Options for creating a layout guide
#[derive(Debug, Clone)]
pub struct GuideOptions {
    /// Number of content pages in the booklet
    pub content_pages: i64,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Size of each guide page (one printed sheet)
    pub page: PageDimensions,
    /// How blank filler pages are labelled
    pub label_style: LabelStyle,
}

impl Default for GuideOptions {
    fn default() -> Self {
        Self {
            content_pages: 4,
            output_path: PathBuf::from("booklet.pdf"),
            page: PageDimensions::default(),
            label_style: LabelStyle::default(),
        }
    }
}

/// Counts describing a generated guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSummary {
    pub content_pages: u32,
    pub padded_pages: u32,
    pub sheet_count: u32,
    /// Pages in the guide PDF (two per sheet)
    pub page_count: usize,
}

/// One half of a sheet side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLabel {
    pub page: u32,
    pub label: String,
    pub blank: bool,
}

/// Everything drawn on one guide page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidePage {
    /// 1-based sheet number
    pub sheet: u32,
    pub total_sheets: u32,
    pub side: SheetSide,
    pub left: SlotLabel,
    pub right: SlotLabel,
    pub instructions: [&'static str; 3],
}

impl GuidePage {
    /// Header line, e.g. "Sheet 1 of 2 - Front"
    pub fn title(&self) -> String {
        format!("Sheet {} of {} - {}", self.sheet, self.total_sheets, self.side)
    }
}

/// Describe every guide page for a plan, in print order
pub fn guide_pages(plan: &ImpositionPlan, label_style: LabelStyle) -> Vec<GuidePage> {
    let slot = |page: u32| SlotLabel {
        page,
        label: plan.label(page, label_style),
        blank: plan.is_blank(page),
    };

    plan.sides()
        .map(|(sheet, side, pair)| GuidePage {
            sheet,
            total_sheets: plan.sheet_count(),
            side,
            left: slot(pair.left),
            right: slot(pair.right),
            instructions: match side {
                SheetSide::Front => FRONT_INSTRUCTIONS,
                SheetSide::Back => BACK_INSTRUCTIONS,
            },
        })
        .collect()
}

/// Create the booklet layout guide PDF
///
/// # Example
///
/// ```no_run
/// use pdf_booklet::pdf::{create_layout_guide, GuideOptions};
///
/// let options = GuideOptions {
///     content_pages: 10,
///     ..Default::default()
/// };
///
/// let summary = create_layout_guide(&options).expect("Failed to create guide");
/// assert_eq!(summary.sheet_count, 3);
/// ```
pub fn create_layout_guide(options: &GuideOptions) -> Result<GuideSummary> {
    let plan = ImpositionPlan::new(options.content_pages)?;
    let pages = guide_pages(&plan, options.label_style);
    let layout = GuideLayout::for_page(&options.page);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = use_helvetica_font(&mut doc);

    let mut kids = Vec::with_capacity(pages.len());
    for page in &pages {
        debug!(
            "{}: left page {} ({}), right page {} ({})",
            page.title(),
            page.left.page,
            page.left.label,
            page.right.page,
            page.right.label
        );

        let content = generate_guide_content(page, &layout);
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = add_page(&mut doc, pages_id, content_id, font_id, &layout);
        kids.push(Object::Reference(page_id));
    }

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(kids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_object));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let info_id = add_info(&mut doc, &plan);
    doc.trailer.set("Info", Object::Reference(info_id));

    doc.compress();
    save_document(&mut doc, &options.output_path)?;

    info!(
        "Wrote {} guide pages for {} sheets to {}",
        pages.len(),
        plan.sheet_count(),
        options.output_path.display()
    );

    Ok(GuideSummary {
        content_pages: plan.content_pages(),
        padded_pages: plan.padded_pages(),
        sheet_count: plan.sheet_count(),
        page_count: pages.len(),
    })
}

/// Use Helvetica (one of the 14 standard PDF fonts, nothing to embed)
fn use_helvetica_font(doc: &mut Document) -> ObjectId {
    let mut font = Dictionary::new();
    font.set("Type", Object::Name(b"Font".to_vec()));
    font.set("Subtype", Object::Name(b"Type1".to_vec()));
    font.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));

    doc.add_object(Object::Dictionary(font))
}

fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    content_id: ObjectId,
    font_id: ObjectId,
    layout: &GuideLayout,
) -> ObjectId {
    let mut fonts = Dictionary::new();
    fonts.set("F1", Object::Reference(font_id));
    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(fonts));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_id));
    page.set("MediaBox", Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(layout.width as f32),
        Object::Real(layout.height as f32),
    ]));
    page.set("Resources", Object::Dictionary(resources));
    page.set("Contents", Object::Reference(content_id));

    doc.add_object(Object::Dictionary(page))
}

fn add_info(doc: &mut Document, plan: &ImpositionPlan) -> ObjectId {
    let title = format!("Booklet layout guide ({} pages)", plan.content_pages());
    let created = Local::now().format("D:%Y%m%d%H%M%S").to_string();

    let mut info = Dictionary::new();
    info.set("Title", Object::String(title.into_bytes(), StringFormat::Literal));
    info.set(
        "Producer",
        Object::String(
            concat!("pdf-booklet ", env!("CARGO_PKG_VERSION")).as_bytes().to_vec(),
            StringFormat::Literal,
        ),
    );
    info.set("CreationDate", Object::String(created.into_bytes(), StringFormat::Literal));

    doc.add_object(Object::Dictionary(info))
}

/// Generate PDF content stream operators for one guide page
fn generate_guide_content(page: &GuidePage, layout: &GuideLayout) -> String {
    let mut content = String::new();

    content.push_str("0 G\n0 g\n1 w\n");

    // Sheet outline
    let (x, y, w, h) = layout.outline;
    content.push_str(&format!("{:.2} {:.2} {:.2} {:.2} re S\n", x, y, w, h));

    // Fold line
    let (on, off) = GuideLayout::FOLD_DASH;
    let (bottom, top) = layout.fold_line;
    content.push_str(&format!("[{} {}] 0 d\n", on, off));
    content.push_str(&format!(
        "{:.2} {:.2} m {:.2} {:.2} l S\n",
        bottom.x, bottom.y, top.x, top.y
    ));
    content.push_str("[] 0 d\n");

    push_text(
        &mut content,
        GuideLayout::HEADER_FONT_SIZE,
        layout.header.x,
        layout.header.y,
        &page.title(),
    );

    for (slot, anchor) in [(&page.left, layout.left_label), (&page.right, layout.right_label)] {
        push_text(&mut content, GuideLayout::LABEL_FONT_SIZE, anchor.x, anchor.y, &slot.label);
        push_text(
            &mut content,
            GuideLayout::DETAIL_FONT_SIZE,
            anchor.x,
            anchor.y - layout.page_number_drop,
            &format!("(Page {})", slot.page),
        );
    }

    for (i, line) in page.instructions.iter().enumerate() {
        let y = layout.instructions.y + i as f64 * layout.instruction_spacing;
        push_text(&mut content, GuideLayout::DETAIL_FONT_SIZE, layout.instructions.x, y, line);
    }

    content
}

fn push_text(content: &mut String, font_size: f64, x: f64, y: f64, text: &str) {
    content.push_str("BT\n");
    content.push_str(&format!("/F1 {} Tf\n", font_size));
    content.push_str(&format!("1 0 0 1 {:.2} {:.2} Tm\n", x, y));
    content.push_str(&format!("({}) Tj\n", escape_pdf_string(text)));
    content.push_str("ET\n");
}

/// Escape special characters in PDF strings
fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
        .replace('\r', "\\r")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GuideLayout {
        GuideLayout::for_page(&PageDimensions::default())
    }

    #[test]
    fn test_guide_pages_for_eight() {
        let plan = ImpositionPlan::new(8).unwrap();
        let pages = guide_pages(&plan, LabelStyle::MarkBlank);

        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].title(), "Sheet 1 of 2 - Front");
        assert_eq!(pages[0].left.page, 1);
        assert_eq!(pages[0].right.page, 8);
        assert_eq!(pages[1].title(), "Sheet 1 of 2 - Back");
        assert_eq!(pages[1].left.page, 7);
        assert_eq!(pages[1].right.page, 2);
        assert_eq!(pages[3].title(), "Sheet 2 of 2 - Back");
    }

    #[test]
    fn test_instructions_alternate() {
        let plan = ImpositionPlan::new(8).unwrap();
        let pages = guide_pages(&plan, LabelStyle::MarkBlank);

        for page in &pages {
            match page.side {
                SheetSide::Front => assert_eq!(page.instructions, FRONT_INSTRUCTIONS),
                SheetSide::Back => assert_eq!(page.instructions, BACK_INSTRUCTIONS),
            }
        }
        assert!(pages[1].instructions[1].contains("Fold along the dotted line"));
    }

    #[test]
    fn test_filler_pages_marked_blank() {
        let plan = ImpositionPlan::new(5).unwrap();
        let pages = guide_pages(&plan, LabelStyle::MarkBlank);

        // Sheet 1 front: left 1, right 8
        assert_eq!(pages[0].left.label, "Content 1");
        assert!(!pages[0].left.blank);
        assert_eq!(pages[0].right.label, "Blank");
        assert!(pages[0].right.blank);

        let blank: Vec<u32> = pages
            .iter()
            .flat_map(|p| [&p.left, &p.right])
            .filter(|slot| slot.blank)
            .map(|slot| slot.page)
            .collect();
        assert_eq!(blank.len(), 3);
        assert!(blank.iter().all(|&p| p > 5));
    }

    #[test]
    fn test_content_only_labels_everything() {
        let plan = ImpositionPlan::new(5).unwrap();
        let pages = guide_pages(&plan, LabelStyle::ContentOnly);

        assert_eq!(pages[0].right.label, "Content 8");
        assert!(pages[0].right.blank);
    }

    #[test]
    fn test_generated_content() {
        let plan = ImpositionPlan::new(5).unwrap();
        let pages = guide_pages(&plan, LabelStyle::MarkBlank);
        let content = generate_guide_content(&pages[0], &layout());

        assert!(content.contains("re S"));
        assert!(content.contains("[6 3] 0 d"));
        assert!(content.contains("[] 0 d"));
        assert!(content.contains("(Sheet 1 of 2 - Front) Tj"));
        assert!(content.contains("(Content 1) Tj"));
        assert!(content.contains("(Blank) Tj"));
        assert!(content.contains("(\\(Page 8\\)) Tj"));
        assert!(content.contains("(1. Print all front sides first) Tj"));
        assert_eq!(content.matches("BT\n").count(), content.matches("ET\n").count());
    }

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(escape_pdf_string("(Page 1)"), "\\(Page 1\\)");
        assert_eq!(escape_pdf_string("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_default_options() {
        let options = GuideOptions::default();
        assert_eq!(options.output_path, PathBuf::from("booklet.pdf"));
        assert_eq!(options.page, PageDimensions::a4().landscape());
        assert_eq!(options.label_style, LabelStyle::MarkBlank);
    }
}
