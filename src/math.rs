//! Arithmetic worksheets

use crate::constants::{
    PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, WORKSHEET_COLUMNS, WORKSHEET_FONT_SIZE,
    WORKSHEET_LINE_HEIGHT,
};
use crate::error::PageError;
use crate::page::PageGenerator;
use crate::svg::{Element, Segment, SvgDocument, Text, TextAnchor};
use log::debug;
use nalgebra::{Point2, Vector2};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SANS: &str = "Arial, sans-serif";
const MONO: &str = "Courier, monospace";
const RULE_WIDTH: f64 = 1.5;

/// What the student does with the two numbers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `a + b`, both in 1..=10
    Add,
    /// `a - b` with `1 <= b <= a <= 10`
    Subtract,
    /// `a × b` with a product under 30
    Multiply,
    /// Fill in `<`, `=` or `>` between two numbers up to 10,000
    Compare,
}

impl Operation {
    /// Glyph printed next to the second operand; comparisons leave a box instead
    pub fn symbol(&self) -> Option<char> {
        match self {
            Self::Add => Some('+'),
            Self::Subtract => Some('-'),
            Self::Multiply => Some('×'),
            Self::Compare => None,
        }
    }

    /// Worksheet columns the problem occupies
    pub fn columns(&self) -> usize {
        match self {
            Self::Compare => 2,
            _ => 1,
        }
    }
}

/// A single worksheet problem
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Top (or left) number
    pub first: u32,
    /// Bottom (or right) number
    pub second: u32,
    /// What to do with them
    pub operation: Operation,
}

impl Problem {
    /// A random problem for an operation
    pub fn random<R: Rng + ?Sized>(operation: Operation, rng: &mut R) -> Self {
        let (first, second) = match operation {
            Operation::Add => (rng.gen_range(1..=10), rng.gen_range(1..=10)),
            Operation::Subtract => {
                let first = rng.gen_range(1..=10);
                (first, rng.gen_range(1..=first))
            }
            Operation::Multiply => {
                let first = rng.gen_range(1..=5);
                let max_factor = (29 / first).min(12);
                (first, rng.gen_range(1..=max_factor))
            }
            Operation::Compare => (rng.gen_range(0..=10_000), rng.gen_range(0..=10_000)),
        };
        Self {
            first,
            second,
            operation,
        }
    }

    /// The expected answer for arithmetic problems
    pub fn answer(&self) -> Option<u32> {
        match self.operation {
            Operation::Add => Some(self.first + self.second),
            Operation::Subtract => Some(self.first - self.second),
            Operation::Multiply => Some(self.first * self.second),
            Operation::Compare => None,
        }
    }
}

/// Options for a worksheet page; each field is a number of problems
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathSettings {
    /// Addition problems
    pub addition: usize,
    /// Subtraction problems
    pub subtraction: usize,
    /// Multiplication problems
    pub multiplication: usize,
    /// Comparison problems
    pub comparison: usize,
}

impl Default for MathSettings {
    fn default() -> Self {
        Self {
            addition: 10,
            subtraction: 10,
            multiplication: 0,
            comparison: 0,
        }
    }
}

impl MathSettings {
    /// All requested problems in random order
    pub fn problems<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Problem> {
        let mut problems = vec![];
        for (operation, count) in [
            (Operation::Add, self.addition),
            (Operation::Subtract, self.subtraction),
            (Operation::Multiply, self.multiplication),
            (Operation::Compare, self.comparison),
        ] {
            problems.extend((0..count).map(|_| Problem::random(operation, rng)));
        }
        problems.shuffle(rng);
        problems
    }
}

/// Column and row of each problem, wrapping when a problem doesn't fit in the current row
pub fn place(problems: &[Problem]) -> Vec<(usize, usize)> {
    let (mut col, mut row) = (0, 0);
    problems
        .iter()
        .map(|problem| {
            let needed = problem.operation.columns();
            if col + needed > WORKSHEET_COLUMNS {
                col = 0;
                row += 1;
            }
            let slot = (col, row);
            col += needed;
            slot
        })
        .collect()
}

fn text(x: f64, y: f64, content: String, family: &'static str, anchor: TextAnchor) -> Element {
    Element::Text(Text {
        position: Point2::new(x, y),
        content,
        font_size: WORKSHEET_FONT_SIZE,
        font_family: family,
        anchor: Some(anchor),
        bold: false,
    })
}

/// Elements for one problem whose slot starts at `left` with its baseline at `baseline`
fn draw_problem(problem: &Problem, left: f64, baseline: f64, column_width: f64) -> Vec<Element> {
    let first = problem.first.to_string();
    let second = problem.second.to_string();

    match problem.operation.symbol() {
        None => {
            let available = column_width * 2.0;
            let box_size = 24.0;
            let first_width = first.len() as f64 * 13.0;
            let second_width = second.len() as f64 * 13.0;
            let total = first_width + box_size + second_width + 16.0;
            let start = left + (available - total) / 2.0;
            vec![
                text(start + first_width, baseline, first, SANS, TextAnchor::End),
                Element::Rect {
                    top_left: Point2::new(start + first_width + 4.0, baseline - box_size + 4.0),
                    size: Vector2::new(box_size, box_size),
                    stroke_width: RULE_WIDTH,
                },
                text(
                    start + first_width + box_size + 8.0,
                    baseline,
                    second,
                    SANS,
                    TextAnchor::Start,
                ),
            ]
        }
        Some(symbol) => {
            let digit_width = 14.0;
            let max_digits = first.len().max(second.len()) as f64;
            let width = (max_digits + 1.0) * digit_width + 10.0;
            let start = left + (column_width - width) / 2.0;
            let right = start + width;
            vec![
                text(right, baseline - 26.0, first, MONO, TextAnchor::End),
                text(
                    start + 2.0,
                    baseline,
                    symbol.to_string(),
                    SANS,
                    TextAnchor::Start,
                ),
                text(right, baseline, second, MONO, TextAnchor::End),
                Element::Line {
                    segment: Segment::new(start, baseline + 3.0, right, baseline + 3.0),
                    stroke_width: RULE_WIDTH,
                },
            ]
        }
    }
}

/// Lay problems out on a page
pub fn render_problems(problems: &[Problem]) -> SvgDocument {
    let column_width = (PAGE_WIDTH - 2.0 * PAGE_MARGIN) / WORKSHEET_COLUMNS as f64;
    let mut page = SvgDocument::new(PAGE_WIDTH, PAGE_HEIGHT);
    for (problem, (col, row)) in problems.iter().zip(place(problems)) {
        let left = PAGE_MARGIN + col as f64 * column_width;
        let baseline = PAGE_MARGIN + row as f64 * WORKSHEET_LINE_HEIGHT + 55.0;
        for element in draw_problem(problem, left, baseline, column_width) {
            page.push(element);
        }
    }
    page
}

impl PageGenerator for MathSettings {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SvgDocument, PageError> {
        let problems = self.problems(rng);
        debug!("Worksheet with {} problems", problems.len());
        Ok(render_problems(&problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn problem(operation: Operation) -> Problem {
        Problem {
            first: 1,
            second: 1,
            operation,
        }
    }

    #[test]
    fn problem_ranges() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..500 {
            let add = Problem::random(Operation::Add, &mut rng);
            assert!((1..=10).contains(&add.first) && (1..=10).contains(&add.second));

            let sub = Problem::random(Operation::Subtract, &mut rng);
            assert!(sub.second >= 1 && sub.second <= sub.first && sub.first <= 10);

            let mul = Problem::random(Operation::Multiply, &mut rng);
            assert!((1..=5).contains(&mul.first) && mul.second >= 1 && mul.second <= 12);
            assert!(mul.answer().unwrap() < 30);

            let cmp = Problem::random(Operation::Compare, &mut rng);
            assert!(cmp.first <= 10_000 && cmp.second <= 10_000);
            assert_eq!(cmp.answer(), None);
        }
    }

    #[test]
    fn problem_counts() {
        let settings = MathSettings {
            addition: 3,
            subtraction: 2,
            multiplication: 4,
            comparison: 1,
        };
        let problems = settings.problems(&mut StdRng::seed_from_u64(1));
        let count = |op| problems.iter().filter(|p| p.operation == op).count();
        assert_eq!(count(Operation::Add), 3);
        assert_eq!(count(Operation::Subtract), 2);
        assert_eq!(count(Operation::Multiply), 4);
        assert_eq!(count(Operation::Compare), 1);
    }

    #[test]
    fn comparisons_take_two_columns() {
        let problems = [
            problem(Operation::Add),
            problem(Operation::Compare),
            problem(Operation::Add),
            problem(Operation::Compare),
            problem(Operation::Add),
        ];
        assert_eq!(
            place(&problems),
            vec![(0, 0), (1, 0), (3, 0), (0, 1), (2, 1)]
        );
    }

    #[test]
    fn wraps_after_five_columns() {
        let problems = [problem(Operation::Subtract); 7];
        let slots = place(&problems);
        assert_eq!(slots[4], (4, 0));
        assert_eq!(slots[5], (0, 1));
        assert_eq!(slots[6], (1, 1));
    }

    #[test]
    fn stacked_layout() {
        let page = render_problems(&[Problem {
            first: 7,
            second: 12,
            operation: Operation::Add,
        }]);
        // 2 digits + operator at 14 each, plus padding: 52 wide, centred in a 100.8 column
        let svg = page.to_string();
        assert!(svg.contains(
            r#"<text x="130.4" y="83" text-anchor="end" font-size="22" font-family="Courier, monospace">7</text>"#
        ));
        assert!(svg.contains(r#">+</text>"#));
        assert!(svg.contains(r#"<line x1="78.4" y1="112" x2="130.4" y2="112""#));
    }

    #[test]
    fn comparison_box() {
        let page = render_problems(&[Problem {
            first: 5,
            second: 300,
            operation: Operation::Compare,
        }]);
        assert_eq!(page.elements().len(), 3);
        assert!(matches!(page.elements()[1], Element::Rect { .. }));
    }

    #[test]
    fn empty_worksheet() {
        let settings = MathSettings {
            addition: 0,
            subtraction: 0,
            multiplication: 0,
            comparison: 0,
        };
        let page = settings.generate(&mut StdRng::seed_from_u64(0)).unwrap();
        assert!(page.elements().is_empty());
    }
}
