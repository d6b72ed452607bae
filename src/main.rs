use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use log::info;
use printable_pages::page::{generate_page, seeded_rng, PageKind};
use printable_pages::settings::PageSettings;
use printable_pages::word_search::{parse_word_list, WordTheme};
use std::path::PathBuf;

/// Generate printable activity pages as SVG
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for a reproducible page
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// JSON settings file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Where to write the SVG; stdout when omitted
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// A perfect maze filling the page
    Maze {
        /// Rows of cells
        #[arg(long)]
        height: Option<usize>,
    },
    /// Comic book panel frames
    Comic {
        /// Rows of panels
        #[arg(long)]
        rows: Option<usize>,
    },
    /// A worksheet of arithmetic and comparison problems
    Math {
        /// Addition problems
        #[arg(long)]
        addition: Option<usize>,
        /// Subtraction problems
        #[arg(long)]
        subtraction: Option<usize>,
        /// Multiplication problems
        #[arg(long)]
        multiplication: Option<usize>,
        /// Comparison problems
        #[arg(long)]
        comparison: Option<usize>,
    },
    /// A word search puzzle
    WordSearch {
        /// Letters per side
        #[arg(long)]
        grid_size: Option<usize>,
        /// Built-in word list: food, thanksgiving, christmas, wingfeather or winter
        #[arg(long)]
        theme: Option<WordTheme>,
        /// File with one word per line; overrides the theme
        #[arg(long)]
        words: Option<PathBuf>,
    },
    /// List the available page kinds and word themes
    List,
}

/// Apply command line overrides and return the page kind to draw, or `None` for `list`
fn apply(command: Command, settings: &mut PageSettings) -> Option<PageKind> {
    match command {
        Command::Maze { height } => {
            if let Some(height) = height {
                settings.maze.height = height;
            }
            Some(PageKind::Maze)
        }
        Command::Comic { rows } => {
            if let Some(rows) = rows {
                settings.comic.rows = rows;
            }
            Some(PageKind::Comic)
        }
        Command::Math {
            addition,
            subtraction,
            multiplication,
            comparison,
        } => {
            let math = &mut settings.math;
            math.addition = addition.unwrap_or(math.addition);
            math.subtraction = subtraction.unwrap_or(math.subtraction);
            math.multiplication = multiplication.unwrap_or(math.multiplication);
            math.comparison = comparison.unwrap_or(math.comparison);
            Some(PageKind::Math)
        }
        Command::WordSearch {
            grid_size,
            theme,
            words,
        } => {
            if let Some(grid_size) = grid_size {
                settings.word_search.grid_size = grid_size;
            }
            if let Some(theme) = theme {
                settings.word_search.theme = theme;
            }
            if words.is_some() {
                settings.word_search.word_list = words;
            }
            Some(PageKind::WordSearch)
        }
        Command::List => None,
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => PageSettings::load(path)?,
        None => PageSettings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    let Some(kind) = apply(cli.command, &mut settings) else {
        for kind in PageKind::get_all() {
            println!("{}\t{}", kind.id(), kind.name());
        }
        for theme in WordTheme::get_all() {
            println!("theme {}\t{}", theme.id(), theme.name());
        }
        return Ok(());
    };

    let words = match (&settings.word_search.word_list, kind) {
        (Some(path), PageKind::WordSearch) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            Some(parse_word_list(&text))
        }
        _ => None,
    };

    let (mut rng, seed) = seeded_rng(settings.seed);
    info!("Generating {} page with seed {seed}", kind.name());
    let page = generate_page(kind, &settings, words.as_deref(), &mut rng)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, page.to_string())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{page}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from(["printable-pages", "math", "--comparison", "3", "--seed", "8"]);
        assert_eq!(cli.seed, Some(8));
        let mut settings = PageSettings::default();
        assert_eq!(apply(cli.command, &mut settings), Some(PageKind::Math));
        assert_eq!(settings.math.comparison, 3);
        assert_eq!(settings.math.addition, 10);
    }

    #[test]
    fn word_search_flags() {
        let cli = Cli::parse_from([
            "printable-pages",
            "word-search",
            "--grid-size",
            "12",
            "--theme",
            "wingfeather",
            "--words",
            "food.txt",
        ]);
        let mut settings = PageSettings::default();
        assert_eq!(apply(cli.command, &mut settings), Some(PageKind::WordSearch));
        assert_eq!(settings.word_search.grid_size, 12);
        assert_eq!(settings.word_search.theme, WordTheme::Wingfeather);
        assert_eq!(settings.word_search.word_list, Some(PathBuf::from("food.txt")));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["printable-pages", "word-search", "--theme", "summer"]).is_err());
    }

    #[test]
    fn list_has_no_page() {
        let cli = Cli::parse_from(["printable-pages", "list"]);
        assert_eq!(apply(cli.command, &mut PageSettings::default()), None);
    }
}
