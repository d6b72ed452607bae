//! Options for every page kind, loadable from a JSON file

use crate::comic::ComicSettings;
use crate::math::MathSettings;
use crate::maze::MazeSettings;
use crate::word_search::WordSearchSettings;
use anyhow::{Context, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rarely changed options for the page generators.
///
/// Missing fields take their defaults, so a settings file only needs the values it changes.
///
/// ```
/// use printable_pages::settings::PageSettings;
///
/// let settings = PageSettings::from_json(r#"{ "seed": 3, "maze": { "height": 40 } }"#).unwrap();
/// assert_eq!(settings.seed, Some(3));
/// assert_eq!(settings.maze.height, 40);
/// assert_eq!(settings.comic.rows, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Seed for reproducible pages; a fresh one is picked when unset
    pub seed: Option<u64>,
    /// Maze options
    pub maze: MazeSettings,
    /// Comic panel options
    pub comic: ComicSettings,
    /// Worksheet options
    pub math: MathSettings,
    /// Word search options
    pub word_search: WordSearchSettings,
}

impl PageSettings {
    /// Parse settings from JSON text
    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).context("Failed to parse page settings")
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_search::WordTheme;

    #[test]
    fn defaults() {
        let settings = PageSettings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.maze.height, 25);
        assert_eq!(settings.comic.rows, 3);
        assert_eq!(settings.math.addition, 10);
        assert_eq!(settings.math.subtraction, 10);
        assert_eq!(settings.math.multiplication, 0);
        assert_eq!(settings.math.comparison, 0);
        assert_eq!(settings.word_search.grid_size, 15);
        assert_eq!(settings.word_search.theme, WordTheme::Food);
        assert_eq!(settings.word_search.word_list, None);
    }

    #[test]
    fn theme_by_name() {
        let settings = PageSettings::from_json(r#"{ "word_search": { "theme": "christmas" } }"#)
            .unwrap();
        assert_eq!(settings.word_search.theme, WordTheme::Christmas);
        assert!(PageSettings::from_json(r#"{ "word_search": { "theme": "summer" } }"#).is_err());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageSettings::from_json("{}").unwrap(), PageSettings::default());
    }

    #[test]
    fn partial_nested_settings() {
        let settings =
            PageSettings::from_json(r#"{ "math": { "comparison": 4 }, "word_search": { "word_list": "words.txt" } }"#)
                .unwrap();
        assert_eq!(settings.math.comparison, 4);
        assert_eq!(settings.math.addition, 10);
        assert_eq!(
            settings.word_search.word_list.as_deref(),
            Some(Path::new("words.txt"))
        );
    }

    #[test]
    fn json_round_trip() {
        let mut settings = PageSettings::default();
        settings.seed = Some(99);
        settings.comic.rows = 5;
        let json = settings.to_json().unwrap();
        assert_eq!(PageSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn bad_json() {
        let err = PageSettings::from_json(r#"{ "maze": { "height": "tall" } }"#).unwrap_err();
        assert_eq!(format!("{err}"), "Failed to parse page settings");
    }

    #[test]
    fn missing_file() {
        let err = PageSettings::load(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(format!("{err}").starts_with("Failed to read settings from"));
    }
}
