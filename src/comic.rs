//! Comic book panel frames.
//!
//! A page is described by one template line per row. Digits are relative panel widths and
//! the characters `/ | \ > <` separate panels, giving the shape of the gutter between
//! them. `"1/2"` is a narrow panel and a wide panel split by a forward slanted gutter.

use crate::constants::{
    COMIC_INNER_MARGIN, COMIC_OUTER_MARGIN, COMIC_STROKE_WIDTH, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::error::PageError;
use crate::page::PageGenerator;
use crate::svg::{Element, PathData, SvgDocument};
use log::debug;
use nalgebra::Point2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Panel widths a random row may have
const ROW_WIDTHS: [&[u32]; 5] = [&[1], &[1, 1], &[1, 2], &[2, 1], &[1, 1, 1]];

/// Shape of the edge between two panels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderType {
    /// `|`
    Straight,
    /// `/`
    ForwardDiagonal,
    /// `\`
    BackwardDiagonal,
    /// `>`, pointing right
    RightAngle,
    /// `<`, pointing left
    LeftAngle,
}

impl BorderType {
    /// Get a list of all border types
    pub fn get_all() -> [Self; 5] {
        [
            Self::ForwardDiagonal,
            Self::Straight,
            Self::BackwardDiagonal,
            Self::RightAngle,
            Self::LeftAngle,
        ]
    }

    /// The template character for this border
    pub fn as_char(&self) -> char {
        match self {
            Self::Straight => '|',
            Self::ForwardDiagonal => '/',
            Self::BackwardDiagonal => '\\',
            Self::RightAngle => '>',
            Self::LeftAngle => '<',
        }
    }

    /// The border for a template character, if it is one
    pub fn from_char(c: char) -> Option<Self> {
        Self::get_all().into_iter().find(|b| b.as_char() == c)
    }

    /// Points of this edge at `x`, from the top of the row to the bottom
    fn points(&self, x: f64, top: f64, bottom: f64, gutter: f64) -> Vec<Point2<f64>> {
        let middle = (bottom - top) / 2.0 + top;
        match self {
            Self::Straight => vec![Point2::new(x, top), Point2::new(x, bottom)],
            Self::ForwardDiagonal => {
                vec![Point2::new(x + gutter, top), Point2::new(x - gutter, bottom)]
            }
            Self::BackwardDiagonal => {
                vec![Point2::new(x - gutter, top), Point2::new(x + gutter, bottom)]
            }
            Self::RightAngle => vec![
                Point2::new(x - gutter / 2.0, top),
                Point2::new(x + gutter / 2.0, middle),
                Point2::new(x - gutter / 2.0, bottom),
            ],
            Self::LeftAngle => vec![
                Point2::new(x + gutter / 2.0, top),
                Point2::new(x - gutter / 2.0, middle),
                Point2::new(x + gutter / 2.0, bottom),
            ],
        }
    }
}

/// One panel in a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    /// Width relative to the other panels in the row
    pub width: u32,
    /// Edge shared with the previous panel, or the page side
    pub left: BorderType,
    /// Edge shared with the next panel, or the page side
    pub right: BorderType,
}

/// One row of panels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRow {
    /// Panels from left to right
    pub panels: Vec<Panel>,
}

impl PageRow {
    /// Sum of the relative panel widths
    pub fn total_width(&self) -> u32 {
        self.panels.iter().map(|p| p.width).sum()
    }
}

/// Parse a single row template.
///
/// The row implicitly starts and ends with a straight edge and whitespace is ignored.
///
/// ```
/// use printable_pages::comic::{parse_row, BorderType, Panel};
///
/// let row = parse_row("1 > 2").unwrap();
/// assert_eq!(
///     row.panels,
///     vec![
///         Panel { width: 1, left: BorderType::Straight, right: BorderType::RightAngle },
///         Panel { width: 2, left: BorderType::RightAngle, right: BorderType::Straight },
///     ]
/// );
/// ```
pub fn parse_row(template: &str) -> Result<PageRow, PageError> {
    let mut panels = vec![];
    let mut left = BorderType::Straight;
    let mut width = None;

    for c in template.chars().chain(['|']) {
        if c.is_whitespace() {
            continue;
        }
        if let Some(digit) = c.to_digit(10) {
            if digit == 0 {
                return Err(PageError::InvalidTemplate(format!(
                    "zero width panel in {template:?}"
                )));
            }
            width = Some(digit);
        } else if let Some(border) = BorderType::from_char(c) {
            let width = width.take().ok_or_else(|| {
                PageError::InvalidTemplate(format!("panel without a width in {template:?}"))
            })?;
            panels.push(Panel {
                width,
                left,
                right: border,
            });
            left = border;
        } else {
            return Err(PageError::InvalidTemplate(format!(
                "unexpected {c:?} in {template:?}"
            )));
        }
    }

    Ok(PageRow { panels })
}

/// Parse a page template, one row per line
pub fn parse_template(template: &str) -> Result<Vec<PageRow>, PageError> {
    template.lines().map(parse_row).collect()
}

/// A random row template such as `"1"` or `"2\1"`
pub fn random_row<R: Rng + ?Sized>(rng: &mut R) -> String {
    // ROW_WIDTHS is never empty
    let widths = ROW_WIDTHS.choose(rng).copied().unwrap_or(&[1]);
    let mut row = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let border = BorderType::get_all()
                .choose(rng)
                .copied()
                .unwrap_or(BorderType::Straight);
            row.push(border.as_char());
        }
        row.push_str(&width.to_string());
    }
    row
}

/// Page geometry shared by all frames
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComicLayout {
    /// Page width
    pub page_width: f64,
    /// Page height
    pub page_height: f64,
    /// Gutter between panels
    pub inner_margin: f64,
    /// Space between the panels and the page edge
    pub outer_margin: f64,
}

impl Default for ComicLayout {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            inner_margin: COMIC_INNER_MARGIN * PAGE_WIDTH,
            outer_margin: COMIC_OUTER_MARGIN * PAGE_WIDTH,
        }
    }
}

/// Closed outlines of every panel, row by row
pub fn page_to_frames(rows: &[PageRow], layout: &ComicLayout) -> Vec<Vec<Point2<f64>>> {
    if rows.is_empty() {
        return vec![];
    }
    let gutter = layout.inner_margin;
    let row_count = rows.len() as f64;
    let panel_height = (layout.page_height
        - 2.0 * layout.outer_margin
        - (row_count - 1.0) * gutter)
        / row_count;

    let mut frames = vec![];
    for (i, row) in rows.iter().enumerate() {
        let top = layout.outer_margin + i as f64 * (panel_height + gutter);
        let bottom = top + panel_height;
        let available_width = layout.page_width
            - 2.0 * layout.outer_margin
            - (row.panels.len() as f64 - 1.0) * gutter;
        let total_width = row.total_width() as f64;

        let mut x = layout.outer_margin;
        for panel in &row.panels {
            let panel_width = available_width / total_width * panel.width as f64;
            let mut frame = panel.left.points(x, top, bottom, gutter);
            frame.extend(
                panel
                    .right
                    .points(x + panel_width, top, bottom, gutter)
                    .into_iter()
                    .rev(),
            );
            frames.push(frame);
            x += panel_width + gutter;
        }
    }
    frames
}

/// Options for a comic page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComicSettings {
    /// Rows of panels
    pub rows: usize,
}

impl Default for ComicSettings {
    fn default() -> Self {
        Self { rows: 3 }
    }
}

/// Render parsed rows as a page
pub fn render_rows(rows: &[PageRow], layout: &ComicLayout) -> SvgDocument {
    let mut d = PathData::default();
    for frame in page_to_frames(rows, layout) {
        d.polygon(&frame);
    }

    let mut page = SvgDocument::new(layout.page_width, layout.page_height);
    page.push(Element::Path {
        d,
        stroke_width: COMIC_STROKE_WIDTH * layout.page_width,
        line_cap: None,
        line_join: Some("miter"),
    });
    page
}

impl PageGenerator for ComicSettings {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SvgDocument, PageError> {
        if self.rows < 1 {
            return Err(PageError::InvalidParameter(
                "a comic page needs at least one row".to_string(),
            ));
        }
        let template = (0..self.rows)
            .map(|_| random_row(rng))
            .collect::<Vec<_>>()
            .join("\n");
        debug!("Comic template {template:?}");

        let rows = parse_template(&template)?;
        Ok(render_rows(&rows, &ComicLayout::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_close(a: Point2<f64>, b: Point2<f64>) {
        assert!((a - b).norm() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn parse_all_borders() {
        let row = parse_row("1/1|1\\1>1<1").unwrap();
        let borders: Vec<_> = row.panels.iter().map(|p| p.right).collect();
        assert_eq!(
            borders,
            vec![
                BorderType::ForwardDiagonal,
                BorderType::Straight,
                BorderType::BackwardDiagonal,
                BorderType::RightAngle,
                BorderType::LeftAngle,
                BorderType::Straight,
            ]
        );
        assert_eq!(row.panels[0].left, BorderType::Straight);
        assert_eq!(row.panels[3].left, BorderType::BackwardDiagonal);
        assert_eq!(row.total_width(), 6);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_row(""), Err(PageError::InvalidTemplate(_))));
        assert!(matches!(parse_row("1||2"), Err(PageError::InvalidTemplate(_))));
        assert!(matches!(parse_row("1x2"), Err(PageError::InvalidTemplate(_))));
        assert!(matches!(parse_row("0"), Err(PageError::InvalidTemplate(_))));
    }

    #[test]
    fn parse_multiline() {
        let rows = parse_template("1\n1/2\n1|1|1").unwrap();
        assert_eq!(
            rows.iter().map(|r| r.panels.len()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn random_rows_parse() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..100 {
            let template = random_row(&mut rng);
            let row = parse_row(&template).unwrap();
            assert!((1..=3).contains(&row.panels.len()));
        }
    }

    #[test]
    fn first_choice_row() {
        assert_eq!(random_row(&mut StepRng::new(0, 0)), "1");
    }

    #[test]
    fn single_panel_frame() {
        let layout = ComicLayout::default();
        let frames = page_to_frames(&parse_template("1").unwrap(), &layout);
        assert_eq!(frames.len(), 1);
        let m = layout.outer_margin;
        let expected = [
            Point2::new(m, m),
            Point2::new(m, 792.0 - m),
            Point2::new(612.0 - m, 792.0 - m),
            Point2::new(612.0 - m, m),
        ];
        assert_eq!(frames[0].len(), 4);
        for (a, b) in frames[0].iter().zip(expected) {
            assert_close(*a, b);
        }
    }

    #[test]
    fn slanted_gutter_frames() {
        let layout = ComicLayout {
            page_width: 100.0,
            page_height: 100.0,
            inner_margin: 10.0,
            outer_margin: 10.0,
        };
        let frames = page_to_frames(&parse_template("1/1").unwrap(), &layout);
        // 70 units of panel width split evenly
        assert_close(frames[0][2], Point2::new(35.0, 90.0));
        assert_close(frames[0][3], Point2::new(55.0, 10.0));
        assert_close(frames[1][0], Point2::new(65.0, 10.0));
        assert_close(frames[1][1], Point2::new(45.0, 90.0));
    }

    #[test]
    fn angled_gutter_has_midpoint() {
        let layout = ComicLayout {
            page_width: 100.0,
            page_height: 100.0,
            inner_margin: 10.0,
            outer_margin: 10.0,
        };
        let frames = page_to_frames(&parse_template("1>1").unwrap(), &layout);
        assert_eq!(frames[0].len(), 5);
        assert_close(frames[0][3], Point2::new(50.0, 50.0));
        assert_eq!(frames[1].len(), 5);
        assert_close(frames[1][1], Point2::new(60.0, 50.0));
    }

    #[test]
    fn rows_stack_with_gutters() {
        let layout = ComicLayout {
            page_width: 100.0,
            page_height: 130.0,
            inner_margin: 10.0,
            outer_margin: 10.0,
        };
        let frames = page_to_frames(&parse_template("1\n1").unwrap(), &layout);
        // (130 - 20 - 10) / 2 = 50 per row
        assert_close(frames[0][1], Point2::new(10.0, 60.0));
        assert_close(frames[1][0], Point2::new(10.0, 70.0));
        assert_close(frames[1][1], Point2::new(10.0, 120.0));
    }

    #[test]
    fn page_has_one_closed_subpath_per_panel() {
        let settings = ComicSettings { rows: 4 };
        let page = settings.generate(&mut StdRng::seed_from_u64(2)).unwrap();
        let Element::Path { d, line_join, .. } = &page.elements()[0] else {
            panic!("expected a path");
        };
        assert_eq!(*line_join, Some("miter"));
        assert_eq!(d.as_str().matches('M').count(), d.as_str().matches('Z').count());
    }

    #[test]
    fn zero_rows() {
        let settings = ComicSettings { rows: 0 };
        assert!(matches!(
            settings.generate(&mut StepRng::new(0, 0)),
            Err(PageError::InvalidParameter(_))
        ));
    }
}
