
/// Row and column steps indexed by direction. Index 4 stands still and is never searched.
pub const DIRECTIONS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const STILL: usize = 4;

/// A word found at `row`, `col` reading in direction `direction`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMatch {
    pub row: usize,
    pub col: usize,
    pub direction: usize,
}

/// A grid of letters. Rows may differ in length.
#[derive(Clone, Debug, Default)]
pub struct LetterGrid {
    rows: Vec<Vec<char>>,
}

impl LetterGrid {
    /// One row per non-empty line.
    pub fn parse(text: &str) -> LetterGrid {
        LetterGrid {
            rows: text
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| l.chars().collect())
                .collect(),
        }
    }
    fn get(&self, row: i32, col: i32) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }
    fn reads(&self, word: &[char], row: usize, col: usize, direction: usize) -> bool {
        let (dr, dc) = DIRECTIONS[direction];
        word.iter().enumerate().all(|(i, &c)| {
            let i = i as i32;
            self.get(row as i32 + dr * i, col as i32 + dc * i) == Some(c)
        })
    }
    /// Every occurrence of `word` in row-major order of its first letter, then by direction.
    pub fn find(&self, word: &str) -> Vec<WordMatch> {
        let word = word.chars().collect::<Vec<_>>();
        let mut matches = vec![];
        if word.is_empty() {
            return matches;
        }
        for (row, letters) in self.rows.iter().enumerate() {
            for col in 0..letters.len() {
                for direction in (0..DIRECTIONS.len()).filter(|d| *d != STILL) {
                    if self.reads(&word, row, col, direction) {
                        matches.push(WordMatch {
                            row,
                            col,
                            direction,
                        });
                    }
                }
            }
        }
        matches
    }
}

/// Words listed one per line, blank lines skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}
