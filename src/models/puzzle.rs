use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Orientation of a crossword word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

/// One of the eight compass directions a word-search word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassDirection {
    East,
    South,
    SouthEast,
    NorthEast,
    West,
    North,
    NorthWest,
    SouthWest,
}

impl CompassDirection {
    /// (column delta, row delta) of one step along this direction.
    /// Rows grow downward, so South is a positive row delta.
    pub fn step(self) -> (i32, i32) {
        match self {
            CompassDirection::East => (1, 0),
            CompassDirection::South => (0, 1),
            CompassDirection::SouthEast => (1, 1),
            CompassDirection::NorthEast => (1, -1),
            CompassDirection::West => (-1, 0),
            CompassDirection::North => (0, -1),
            CompassDirection::NorthWest => (-1, -1),
            CompassDirection::SouthWest => (-1, 1),
        }
    }
}

/// Word-search difficulty tier. Controls grid padding and which directions
/// words may run in. Serialized with the Spanish labels the clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR")]
pub enum Difficulty {
    #[serde(rename = "Fácil")]
    #[sqlx(rename = "Fácil")]
    Facil,
    #[serde(rename = "Media")]
    #[sqlx(rename = "Media")]
    Media,
    #[serde(rename = "Difícil")]
    #[sqlx(rename = "Difícil")]
    Dificil,
}

impl Difficulty {
    /// Extra grid padding on top of the base size.
    pub fn extra_padding(self) -> usize {
        match self {
            Difficulty::Facil => 0,
            Difficulty::Media => 3,
            Difficulty::Dificil => 5,
        }
    }

    /// Directions words may be placed in at this tier. Harder tiers extend
    /// the easier ones, up to all eight compass directions.
    pub fn directions(self) -> &'static [CompassDirection] {
        use CompassDirection::*;
        match self {
            Difficulty::Facil => &[East, South, SouthEast],
            Difficulty::Media => &[East, South, SouthEast, NorthEast],
            Difficulty::Dificil => &[
                East, South, SouthEast, NorthEast, West, North, NorthWest, SouthWest,
            ],
        }
    }
}

/// A word paired with its clue, as entered by the teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
}

/// A word written into the crossword grid. `row`/`col` locate its first
/// letter; immutable once created by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub clue: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

/// A placed word plus the clue number rendered next to its first cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosswordClue {
    pub number: u32,
    pub word: String,
    pub clue: String,
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

/// A single cell of the final crossword grid. `letter` is `None` for
/// blocked cells; `number` is set on cells that start a clue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub letter: Option<char>,
    pub number: Option<u32>,
}

/// Output of the crossword assembler, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosswordLayout {
    pub grid: Vec<Vec<GridCell>>,
    pub across: Vec<CrosswordClue>,
    pub down: Vec<CrosswordClue>,
    /// Words that could not be connected to the puzzle.
    pub dropped: Vec<String>,
}

/// A word written into the word-search grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearchPlacement {
    pub word: String,
    pub direction: CompassDirection,
    pub row: usize,
    pub col: usize,
}

/// Output of the word-search assembler, before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearchLayout {
    /// One string per grid row, gaps filled with random letters.
    pub grid: Vec<String>,
    /// The placed words, sorted alphabetically for the search list.
    pub words: Vec<String>,
    pub placements: Vec<WordSearchPlacement>,
    /// Words that did not fit within the attempt budget.
    pub dropped: Vec<String>,
}

/// A stored crossword document, reconstructed from its flattened row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosswordDocument {
    pub id: Uuid,
    pub tema: String,
    pub creator_id: String,
    pub creator_name: String,
    pub grid: Vec<Vec<GridCell>>,
    pub across: Vec<CrosswordClue>,
    pub down: Vec<CrosswordClue>,
    pub created_at: DateTime<Utc>,
}

/// A stored word-search document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordSearchDocument {
    pub id: Uuid,
    pub tema: String,
    pub creator_id: String,
    pub creator_name: String,
    pub difficulty: Difficulty,
    pub grid: Vec<String>,
    pub words: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_direction_sets_grow() {
        assert_eq!(Difficulty::Facil.directions().len(), 3);
        assert_eq!(Difficulty::Media.directions().len(), 4);
        assert_eq!(Difficulty::Dificil.directions().len(), 8);

        // Every easier tier is a prefix of the next one
        let media = Difficulty::Media.directions();
        let dificil = Difficulty::Dificil.directions();
        assert_eq!(&media[..3], Difficulty::Facil.directions());
        assert_eq!(&dificil[..4], media);
    }

    #[test]
    fn test_difficulty_spanish_labels_round_trip() {
        for (difficulty, label) in [
            (Difficulty::Facil, "\"Fácil\""),
            (Difficulty::Media, "\"Media\""),
            (Difficulty::Dificil, "\"Difícil\""),
        ] {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, label);
            let back: Difficulty = serde_json::from_str(&json).unwrap();
            assert_eq!(back, difficulty);
        }
    }

    #[test]
    fn test_compass_steps_are_unit_length() {
        use CompassDirection::*;
        for dir in [East, South, SouthEast, NorthEast, West, North, NorthWest, SouthWest] {
            let (dx, dy) = dir.step();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!(dx != 0 || dy != 0);
        }
    }

    #[test]
    fn test_compass_opposites_cancel() {
        use CompassDirection::*;
        for (a, b) in [(East, West), (South, North), (SouthEast, NorthWest), (NorthEast, SouthWest)] {
            let (ax, ay) = a.step();
            let (bx, by) = b.step();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }
}
