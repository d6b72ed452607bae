//! SVG path data and page documents.

use nalgebra::{Point2, Vector2};
use std::fmt::{self, Display, Formatter};

/// Formats a coordinate with the shortest decimal that round-trips, with `-0` printed as `0`
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A straight line between two page-space points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Where the pen goes down
    pub start: Point2<f64>,
    /// Where the pen comes up
    pub end: Point2<f64>,
}

impl Segment {
    /// Create a segment from raw coordinates
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }
}

/// The `d` attribute of an SVG `<path>`.
///
/// Commands are separated by single spaces and coordinates are written as `x,y`.
///
/// # Examples
///
/// ```
/// use printable_pages::svg::{PathData, Segment};
///
/// let mut path = PathData::default();
/// path.segment(&Segment::new(0.0, -1.5, 0.0, 11.5));
/// path.segment(&Segment::new(2.0, 0.0, 4.0, 0.0));
///
/// assert_eq!(path.as_str(), "M 0,-1.5 L 0,11.5 M 2,0 L 4,0");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathData {
    d: String,
}

impl PathData {
    /// Collect independent segments into one path, each as its own subpath
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> Self {
        let mut path = Self::default();
        for segment in segments {
            path.segment(segment);
        }
        path
    }

    fn command(&mut self, command: char, p: Option<Point2<f64>>) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(command);
        if let Some(p) = p {
            self.d.push_str(&format!(" {},{}", Num(p.x), Num(p.y)));
        }
    }

    /// Start a new subpath at `p`
    pub fn move_to(&mut self, p: Point2<f64>) -> &mut Self {
        self.command('M', Some(p));
        self
    }

    /// Draw a line from the current point to `p`
    pub fn line_to(&mut self, p: Point2<f64>) -> &mut Self {
        self.command('L', Some(p));
        self
    }

    /// Close the current subpath
    pub fn close(&mut self) -> &mut Self {
        self.command('Z', None);
        self
    }

    /// Add a disconnected, open subpath for one segment
    pub fn segment(&mut self, segment: &Segment) -> &mut Self {
        self.move_to(segment.start).line_to(segment.end)
    }

    /// Add a closed subpath through all points; does nothing for an empty slice
    pub fn polygon(&mut self, points: &[Point2<f64>]) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
            self.close();
        }
        self
    }

    /// Whether no commands have been added
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// The serialized path data
    pub fn as_str(&self) -> &str {
        &self.d
    }
}

impl Display for PathData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.d)
    }
}

/// Horizontal anchoring of a `<text>` element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at x
    Start,
    /// Text is centred on x
    Middle,
    /// Text ends at x
    End,
}

impl TextAnchor {
    fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A `<text>` element
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    /// Anchor point; y is the baseline
    pub position: Point2<f64>,
    /// The characters to draw
    pub content: String,
    /// Font size in page units
    pub font_size: f64,
    /// CSS font family list
    pub font_family: &'static str,
    /// Horizontal anchoring, or the SVG default when `None`
    pub anchor: Option<TextAnchor>,
    /// Draw in bold
    pub bold: bool,
}

/// Something that can be drawn on a page
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// An unfilled black path
    Path {
        /// Path geometry
        d: PathData,
        /// Stroke width in page units
        stroke_width: f64,
        /// `stroke-linecap`, if set
        line_cap: Option<&'static str>,
        /// `stroke-linejoin`, if set
        line_join: Option<&'static str>,
    },
    /// Text
    Text(Text),
    /// An unfilled black rectangle
    Rect {
        /// Top left corner
        top_left: Point2<f64>,
        /// Width and height
        size: Vector2<f64>,
        /// Stroke width in page units
        stroke_width: f64,
    },
    /// A single black line
    Line {
        /// Line geometry
        segment: Segment,
        /// Stroke width in page units
        stroke_width: f64,
    },
    /// Children drawn with an offset
    Group {
        /// Offset applied to all children
        translate: Vector2<f64>,
        /// The grouped elements
        children: Vec<Element>,
    },
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Element {
    fn write(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Element::Path {
                d,
                stroke_width,
                line_cap,
                line_join,
            } => {
                write!(
                    f,
                    r#"{indent}<path d="{d}" fill="none" stroke="black" stroke-width="{}""#,
                    Num(*stroke_width)
                )?;
                if let Some(cap) = line_cap {
                    write!(f, r#" stroke-linecap="{cap}""#)?;
                }
                if let Some(join) = line_join {
                    write!(f, r#" stroke-linejoin="{join}""#)?;
                }
                writeln!(f, "/>")
            }
            Element::Text(text) => {
                write!(
                    f,
                    r#"{indent}<text x="{}" y="{}""#,
                    Num(text.position.x),
                    Num(text.position.y)
                )?;
                if let Some(anchor) = text.anchor {
                    write!(f, r#" text-anchor="{}""#, anchor.as_str())?;
                }
                write!(
                    f,
                    r#" font-size="{}" font-family="{}""#,
                    Num(text.font_size),
                    text.font_family
                )?;
                if text.bold {
                    write!(f, r#" font-weight="bold""#)?;
                }
                writeln!(f, ">{}</text>", escape(&text.content))
            }
            Element::Rect {
                top_left,
                size,
                stroke_width,
            } => writeln!(
                f,
                r#"{indent}<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="{}"/>"#,
                Num(top_left.x),
                Num(top_left.y),
                Num(size.x),
                Num(size.y),
                Num(*stroke_width)
            ),
            Element::Line {
                segment,
                stroke_width,
            } => writeln!(
                f,
                r#"{indent}<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
                Num(segment.start.x),
                Num(segment.start.y),
                Num(segment.end.x),
                Num(segment.end.y),
                Num(*stroke_width)
            ),
            Element::Group {
                translate,
                children,
            } => {
                writeln!(
                    f,
                    r#"{indent}<g transform="translate({}, {})">"#,
                    Num(translate.x),
                    Num(translate.y)
                )?;
                for child in children {
                    child.write(f, depth + 1)?;
                }
                writeln!(f, "{indent}</g>")
            }
        }
    }
}

/// A complete page.
///
/// # Examples
///
/// ```
/// use printable_pages::svg::{Element, PathData, Segment, SvgDocument};
///
/// let mut page = SvgDocument::new(100.0, 50.0);
/// page.push(Element::Path {
///     d: PathData::from_segments(&[Segment::new(0.0, 0.0, 10.0, 0.0)]),
///     stroke_width: 2.0,
///     line_cap: Some("butt"),
///     line_join: None,
/// });
///
/// let svg = page.to_string();
/// assert!(svg.starts_with(r#"<svg viewBox="0 0 100 50""#));
/// assert!(svg.contains(r#"d="M 0,0 L 10,0""#));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    elements: Vec<Element>,
}

impl SvgDocument {
    /// An empty page of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: vec![],
        }
    }

    /// Page width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Top level elements, in drawing order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Draw an element above everything already on the page
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

impl Display for SvgDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            Num(self.width),
            Num(self.height)
        )?;
        for element in &self.elements {
            element.write(f, 1)?;
        }
        writeln!(f, "</svg>")
    }
}
