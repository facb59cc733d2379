//! Guide page geometry
//!
//! All positions are in PDF points with the origin at the bottom-left corner
//! of the page.

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Length(cm * 10.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }

    /// Swap width and height
    pub fn landscape(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl Default for PageDimensions {
    /// A4 landscape, one sheet folded into two A5 pages
    fn default() -> Self {
        Self::a4().landscape()
    }
}

/// A point on the page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Positions of everything drawn on a guide page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLayout {
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
    /// Sheet outline as (x, y, width, height)
    pub outline: (f64, f64, f64, f64),
    /// Fold line start (bottom) and end (top)
    pub fold_line: (Point, Point),
    /// Baseline of the "Sheet N of M" header
    pub header: Point,
    /// Baseline of the left slot label
    pub left_label: Point,
    /// Baseline of the right slot label
    pub right_label: Point,
    /// Gap between a slot label and its "(Page N)" line
    pub page_number_drop: f64,
    /// Baseline of the first instruction line
    pub instructions: Point,
    /// Vertical step between instruction lines
    pub instruction_spacing: f64,
}

impl GuideLayout {
    pub const HEADER_FONT_SIZE: f64 = 16.0;
    pub const LABEL_FONT_SIZE: f64 = 24.0;
    pub const DETAIL_FONT_SIZE: f64 = 12.0;
    /// Dash pattern for the fold line (on, off)
    pub const FOLD_DASH: (f64, f64) = (6.0, 3.0);

    /// Compute the layout for a page
    pub fn for_page(page: &PageDimensions) -> Self {
        let width = page.width.pt();
        let height = page.height.pt();
        let cm = |v: f64| Length::from_cm(v).pt();

        let margin = cm(1.0);
        let label_y = height / 2.0 - cm(0.5);

        Self {
            width,
            height,
            outline: (margin, margin, width - 2.0 * margin, height - 2.0 * margin),
            fold_line: (
                Point { x: width / 2.0, y: margin },
                Point { x: width / 2.0, y: height - margin },
            ),
            header: Point { x: cm(2.0), y: height - cm(1.5) },
            left_label: Point { x: width / 4.0 - cm(3.0), y: label_y },
            right_label: Point { x: 3.0 * width / 4.0 - cm(3.0), y: label_y },
            page_number_drop: cm(1.0),
            instructions: Point { x: cm(2.0), y: cm(2.0) },
            instruction_spacing: cm(0.6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_cm(2.54);
        assert!((len.mm() - 25.4).abs() < 0.01);
        assert!((len.pt() - 72.0).abs() < 0.01);
    }

    #[test]
    fn test_a4_landscape() {
        let page = PageDimensions::default();
        assert!((page.width.pt() - 841.89).abs() < 0.01);
        assert!((page.height.pt() - 595.28).abs() < 0.01);
    }

    #[test]
    fn test_fold_line_centered() {
        let layout = GuideLayout::for_page(&PageDimensions::default());
        let (bottom, top) = layout.fold_line;

        assert!((bottom.x - layout.width / 2.0).abs() < 1e-9);
        assert_eq!(bottom.x, top.x);
        assert!((bottom.y - 28.3465).abs() < 0.01);
        assert!((top.y - (layout.height - 28.3465)).abs() < 0.01);
    }

    #[test]
    fn test_labels_on_either_side_of_fold() {
        let layout = GuideLayout::for_page(&PageDimensions::default());
        let fold_x = layout.fold_line.0.x;

        assert!(layout.left_label.x < fold_x);
        assert!(layout.right_label.x > fold_x);
        assert_eq!(layout.left_label.y, layout.right_label.y);
    }

    #[test]
    fn test_outline_inside_page() {
        let layout = GuideLayout::for_page(&PageDimensions::default());
        let (x, y, w, h) = layout.outline;

        assert!(x > 0.0 && y > 0.0);
        assert!((x + w - (layout.width - x)).abs() < 1e-9);
        assert!((y + h - (layout.height - y)).abs() < 1e-9);
    }
}
