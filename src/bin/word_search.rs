use anyhow::Context;
use maze_pathfinding::word_search::{parse_words, LetterGrid};
use std::fs;

const GRID_FILE: &str = "question.text";
const WORDS_FILE: &str = "products.text";

/// Prints every occurrence of the listed words as `word row col direction`.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let grid_text =
        fs::read_to_string(GRID_FILE).with_context(|| format!("failed to read {}", GRID_FILE))?;
    let words_text =
        fs::read_to_string(WORDS_FILE).with_context(|| format!("failed to read {}", WORDS_FILE))?;
    let grid = LetterGrid::parse(&grid_text);
    let words = parse_words(&words_text);
    log::debug!("Searching {} words", words.len());
    for word in &words {
        for m in grid.find(word) {
            println!("{} {} {} {}", word, m.row, m.col, m.direction);
        }
    }
    Ok(())
}
