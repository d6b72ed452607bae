//! The available page generators

use crate::error::PageError;
use crate::settings::PageSettings;
use crate::svg::SvgDocument;
use crate::word_search::WordSearch;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that draws a page from a random source
pub trait PageGenerator {
    /// Build the page; the same random stream always produces the same page
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SvgDocument, PageError>;
}

/// Every kind of page the crate can produce
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PageKind {
    /// A rectangular perfect maze
    Maze,
    /// Randomized comic book panel frames
    Comic,
    /// Arithmetic and comparison problems
    Math,
    /// Hidden words in a letter grid
    WordSearch,
}

impl PageKind {
    /// Get a list of all available page kinds
    pub fn get_all() -> [Self; 4] {
        [Self::Maze, Self::Comic, Self::Math, Self::WordSearch]
    }

    /// Short machine-friendly identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Maze => "maze",
            Self::Comic => "comic",
            Self::Math => "math",
            Self::WordSearch => "wordsearch",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Maze => "Maze",
            Self::Comic => "Comic Book Frames",
            Self::Math => "Math Worksheet",
            Self::WordSearch => "Word Search",
        }
    }
}

/// A [`StdRng`] for the given seed, or for a fresh random seed.
///
/// The seed actually used is returned so a run can be repeated.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (StdRng::seed_from_u64(seed), seed)
}

/// Generate one page of the given kind.
///
/// `words` feeds the word search; the configured theme is used when it is `None`.
///
/// # Examples
///
/// ```
/// use printable_pages::page::{generate_page, seeded_rng, PageKind};
/// use printable_pages::settings::PageSettings;
///
/// let settings = PageSettings::default();
/// let (mut rng, _) = seeded_rng(Some(42));
/// let page = generate_page(PageKind::Maze, &settings, None, &mut rng).unwrap();
///
/// assert_eq!(page.width(), 612.0);
/// ```
pub fn generate_page<R: Rng + ?Sized>(
    kind: PageKind,
    settings: &PageSettings,
    words: Option<&[String]>,
    rng: &mut R,
) -> Result<SvgDocument, PageError> {
    match kind {
        PageKind::Maze => settings.maze.generate(rng),
        PageKind::Comic => settings.comic.generate(rng),
        PageKind::Math => settings.math.generate(rng),
        PageKind::WordSearch => {
            let search = match words {
                Some(words) => WordSearch::new(settings.word_search.grid_size, words),
                None => WordSearch::with_theme(
                    settings.word_search.grid_size,
                    settings.word_search.theme,
                ),
            };
            search.generate(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = PageKind::get_all().iter().map(|k| k.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn kind_primitive() {
        assert_eq!(u8::from(PageKind::WordSearch), 3);
        assert_eq!(PageKind::try_from(1u8).ok(), Some(PageKind::Comic));
    }

    #[test]
    fn seed_is_reported() {
        let (mut a, seed) = seeded_rng(None);
        let (mut b, _) = seeded_rng(Some(seed));
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn every_kind_generates() {
        let settings = PageSettings::default();
        for kind in PageKind::get_all() {
            let (mut rng, _) = seeded_rng(Some(5));
            let page = generate_page(kind, &settings, None, &mut rng).unwrap();
            assert!(!page.elements().is_empty(), "{} page is empty", kind.name());
        }
    }

    #[test]
    fn same_seed_same_page() {
        let settings = PageSettings::default();
        for kind in PageKind::get_all() {
            let a = generate_page(kind, &settings, None, &mut seeded_rng(Some(77)).0).unwrap();
            let b = generate_page(kind, &settings, None, &mut seeded_rng(Some(77)).0).unwrap();
            assert_eq!(a.to_string(), b.to_string());
        }
    }
}
