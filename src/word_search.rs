//! Word search puzzles

use crate::constants::{
    PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, WORD_DENSITY, WORD_LIST_FONT_SIZE,
    WORD_PLACEMENT_ATTEMPTS,
};
use crate::error::PageError;
use crate::page::PageGenerator;
use crate::svg::{Element, SvgDocument, Text, TextAnchor};
use log::debug;
use nalgebra::Point2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

const FOOD_WORDS: &[&str] = &[
    "apple", "banana", "bread", "butter", "carrot", "cheese", "cherry", "cookie", "grape",
    "honey", "lemon", "mango", "melon", "noodle", "olive", "orange", "pasta", "peach", "pear",
    "pepper", "pickle", "pizza", "potato", "rice", "salad", "soup", "taco", "toast", "tomato",
    "waffle",
];

const THANKSGIVING_WORDS: &[&str] = &[
    "acorn", "cider", "autumn", "cornbread", "cornucopia", "cranberry", "family",
    "feast", "football", "gather", "gravy", "grateful", "harvest", "leaves", "maize",
    "mayflower", "november", "parade", "pie", "pilgrim", "pumpkin", "squash", "stuffing",
    "thankful", "turkey", "yams",
];

const CHRISTMAS_WORDS: &[&str] = &[
    "angel", "bells", "bethlehem", "candle", "sugarplum", "carol", "chimney", "cookies",
    "december", "elf", "garland", "gift", "gingerbread", "holly", "manger", "mistletoe",
    "nativity", "ornament", "presents", "reindeer", "ribbon", "sleigh", "snowman", "star",
    "stocking", "tinsel", "tree", "wreath",
];

const WINGFEATHER_WORDS: &[&str] = &[
    "anniera", "artham", "bonifer", "dang", "fangs", "gnag", "glipwood", "igiby", "janner",
    "jewels", "kalmar", "leeli", "maraly", "nia", "oskar", "ouster", "peet", "podo",
    "sara", "skree", "stranders", "throne", "tink", "kimera", "whistleharp",
];

const WINTER_WORDS: &[&str] = &[
    "blanket", "blizzard", "boots", "cocoa", "cold", "fireplace", "flurry", "freeze",
    "frost", "glacier", "hibernate", "icicle", "igloo", "january", "mittens", "parka",
    "penguin", "polar", "scarf", "skate", "ski", "sled", "snowball", "snowflake",
    "sweater", "winter",
];

/// Built-in word lists
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordTheme {
    /// Things to eat
    #[default]
    Food,
    /// Autumn harvest and the holiday meal
    Thanksgiving,
    /// Christmas
    Christmas,
    /// Characters and places from the Wingfeather Saga
    Wingfeather,
    /// Snow and cold weather
    Winter,
}

impl WordTheme {
    /// Get a list of all themes
    pub fn get_all() -> [Self; 5] {
        [
            Self::Food,
            Self::Thanksgiving,
            Self::Christmas,
            Self::Wingfeather,
            Self::Winter,
        ]
    }

    /// Short machine-friendly identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Thanksgiving => "thanksgiving",
            Self::Christmas => "christmas",
            Self::Wingfeather => "wingfeather",
            Self::Winter => "winter",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Thanksgiving => "Thanksgiving",
            Self::Christmas => "Christmas",
            Self::Wingfeather => "Wingfeather",
            Self::Winter => "Winter",
        }
    }

    /// The words in this theme, in lower case
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Self::Food => FOOD_WORDS,
            Self::Thanksgiving => THANKSGIVING_WORDS,
            Self::Christmas => CHRISTMAS_WORDS,
            Self::Wingfeather => WINGFEATHER_WORDS,
            Self::Winter => WINTER_WORDS,
        }
    }
}

impl FromStr for WordTheme {
    type Err = PageError;

    /// Look a theme up by its [`id`](WordTheme::id)
    ///
    /// ```
    /// use printable_pages::word_search::WordTheme;
    ///
    /// assert_eq!("winter".parse::<WordTheme>(), Ok(WordTheme::Winter));
    /// assert!("summer".parse::<WordTheme>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, PageError> {
        Self::get_all()
            .into_iter()
            .find(|theme| theme.id() == s)
            .ok_or_else(|| PageError::InvalidParameter(format!("unknown word theme {s:?}")))
    }
}

/// The eight ways a word can run through the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordDirection {
    /// Left to right
    Right,
    /// Top to bottom
    Down,
    /// Diagonally down and right
    DownRight,
    /// Diagonally up and right
    UpRight,
    /// Right to left
    Left,
    /// Bottom to top
    Up,
    /// Diagonally up and left
    UpLeft,
    /// Diagonally down and left
    DownLeft,
}

impl WordDirection {
    /// Get a list of all directions
    pub fn get_all() -> [Self; 8] {
        [
            Self::Right,
            Self::Down,
            Self::DownRight,
            Self::UpRight,
            Self::Left,
            Self::Up,
            Self::UpLeft,
            Self::DownLeft,
        ]
    }

    /// Step in x and y between consecutive letters
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::DownRight => (1, 1),
            Self::UpRight => (1, -1),
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::UpLeft => (-1, -1),
            Self::DownLeft => (-1, 1),
        }
    }
}

/// Where a word was hidden
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The upper-case word
    pub word: String,
    /// Column and row of the first letter
    pub start: (usize, usize),
    /// Direction the word runs in
    pub direction: WordDirection,
}

/// A square grid of letters, some of which may still be blank
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    /// A blank grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at a column and row
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[x + y * self.size]
    }

    /// Coordinates of each letter of a word of `len` letters, or `None` if it leaves the grid
    fn cells_for(
        &self,
        len: usize,
        start: (usize, usize),
        direction: WordDirection,
    ) -> Option<Vec<(usize, usize)>> {
        let (dx, dy) = direction.delta();
        (0..len as isize)
            .map(|i| {
                let x = start.0.checked_add_signed(i * dx)?;
                let y = start.1.checked_add_signed(i * dy)?;
                (x < self.size && y < self.size).then_some((x, y))
            })
            .collect()
    }

    /// Whether `word` fits, sharing cells only where the letters agree
    pub fn can_place(&self, word: &str, start: (usize, usize), direction: WordDirection) -> bool {
        let letters: Vec<char> = word.chars().collect();
        self.cells_for(letters.len(), start, direction)
            .is_some_and(|cells| {
                cells
                    .iter()
                    .zip(&letters)
                    .all(|(&(x, y), &c)| self.get(x, y).map_or(true, |existing| existing == c))
            })
    }

    /// Write `word` into the grid if it fits
    pub fn place(&mut self, word: &str, start: (usize, usize), direction: WordDirection) -> bool {
        if !self.can_place(word, start, direction) {
            return false;
        }
        let letters: Vec<char> = word.chars().collect();
        if let Some(cells) = self.cells_for(letters.len(), start, direction) {
            for ((x, y), c) in cells.into_iter().zip(letters) {
                self.cells[x + y * self.size] = Some(c);
            }
        }
        true
    }

    /// Fill every blank cell with a random capital letter
    pub fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(char::from(b'A' + rng.gen_range(0..26u8)));
        }
    }
}

/// A finished puzzle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    /// Letters, with no blanks left
    pub grid: LetterGrid,
    /// Words that made it into the grid
    pub placements: Vec<Placement>,
}

/// Split a word file into words, one per line
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}

/// A word search generator for a grid size and candidate words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSearch {
    grid_size: usize,
    words: Vec<String>,
}

impl WordSearch {
    /// Build from any candidate words; they are cleaned up when the puzzle is made
    pub fn new(grid_size: usize, words: &[String]) -> Self {
        Self {
            grid_size,
            words: words.to_vec(),
        }
    }

    /// Build with one of the built-in word lists
    pub fn with_theme(grid_size: usize, theme: WordTheme) -> Self {
        Self {
            grid_size,
            words: theme.words().iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Trimmed, upper-cased words that fit in the grid
    pub fn candidates(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| !w.is_empty() && w.chars().count() <= self.grid_size)
            .collect()
    }

    /// How many words a puzzle of this size tries to hide
    pub fn word_count(&self) -> usize {
        (self.grid_size as f64 * WORD_DENSITY).floor() as usize
    }

    /// Hide a random selection of words, then fill the rest of the grid.
    ///
    /// Each word gets a bounded number of random placement attempts; words that never
    /// fit are left out of the puzzle.
    ///
    /// ```
    /// use printable_pages::word_search::WordSearch;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let search = WordSearch::new(10, &["cat".to_string(), "dog".to_string()]);
    /// let puzzle = search.puzzle(&mut StdRng::seed_from_u64(4)).unwrap();
    /// assert_eq!(puzzle.placements.len(), 2);
    /// ```
    pub fn puzzle<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Puzzle, PageError> {
        if self.grid_size < 1 {
            return Err(PageError::InvalidParameter(
                "word search grid size must be at least 1".to_string(),
            ));
        }
        let mut words = self.candidates();
        if words.is_empty() {
            return Err(PageError::EmptyWordList);
        }
        words.shuffle(rng);
        words.truncate(self.word_count());

        let mut grid = LetterGrid::new(self.grid_size);
        let mut placements = vec![];
        for word in words {
            for _ in 0..WORD_PLACEMENT_ATTEMPTS {
                let start = (
                    rng.gen_range(0..self.grid_size),
                    rng.gen_range(0..self.grid_size),
                );
                let direction = *WordDirection::get_all()
                    .choose(rng)
                    .unwrap_or(&WordDirection::Right);
                if grid.place(&word, start, direction) {
                    placements.push(Placement {
                        word,
                        start,
                        direction,
                    });
                    break;
                }
            }
        }
        debug!(
            "Placed {} words in a {}x{} grid",
            placements.len(),
            self.grid_size,
            self.grid_size
        );

        grid.fill(rng);
        Ok(Puzzle { grid, placements })
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Draw the letter grid with the word list underneath
pub fn render_puzzle(puzzle: &Puzzle) -> SvgDocument {
    let size = puzzle.grid.size() as f64;
    let available_width = PAGE_WIDTH - 2.0 * PAGE_MARGIN;
    let available_height = PAGE_HEIGHT - 2.0 * PAGE_MARGIN;
    // the bottom 30% of the content area holds the word list
    let grid_area_height = available_height * 0.7;

    let cell_size = (available_width / size).min(grid_area_height / size);
    let grid_extent = cell_size * size;
    let grid_left = PAGE_MARGIN + (available_width - grid_extent) / 2.0;
    let grid_top = PAGE_MARGIN;
    let font_size = cell_size * 0.6;

    let mut page = SvgDocument::new(PAGE_WIDTH, PAGE_HEIGHT);
    for y in 0..puzzle.grid.size() {
        for x in 0..puzzle.grid.size() {
            let letter = puzzle.grid.get(x, y).unwrap_or(' ');
            page.push(Element::Text(Text {
                position: Point2::new(
                    grid_left + x as f64 * cell_size + cell_size / 2.0,
                    grid_top + y as f64 * cell_size + cell_size / 2.0 + font_size * 0.35,
                ),
                content: letter.to_string(),
                font_size,
                font_family: "Arial, sans-serif",
                anchor: Some(TextAnchor::Middle),
                bold: true,
            }));
        }
    }

    let mut words: Vec<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();
    words.sort_unstable();
    let list_top = grid_top + grid_extent + 30.0;
    let per_column = words.len().div_ceil(3).max(1);
    let column_width = available_width / 3.0;
    for (i, word) in words.iter().enumerate() {
        let (column, row) = (i / per_column, i % per_column);
        page.push(Element::Text(Text {
            position: Point2::new(
                PAGE_MARGIN + column as f64 * column_width,
                list_top + row as f64 * WORD_LIST_FONT_SIZE * 1.5,
            ),
            content: title_case(word),
            font_size: WORD_LIST_FONT_SIZE,
            font_family: "Arial, sans-serif",
            anchor: None,
            bold: false,
        }));
    }
    page
}

/// Options for a word search page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordSearchSettings {
    /// Letters per side
    pub grid_size: usize,
    /// Built-in list used when no word file is set
    pub theme: WordTheme,
    /// File with one word per line; overrides the theme
    pub word_list: Option<PathBuf>,
}

impl Default for WordSearchSettings {
    fn default() -> Self {
        Self {
            grid_size: 15,
            theme: WordTheme::default(),
            word_list: None,
        }
    }
}

impl PageGenerator for WordSearch {
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SvgDocument, PageError> {
        Ok(render_puzzle(&self.puzzle(rng)?))
    }
}
