use super::grid::Grid;
use crate::models::{Direction, PlacedWord};

/// A validated position for a word, scored by how many already-filled cells
/// it coincides with.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: usize,
}

/// Search every letter pairing between `word` and the already placed words
/// for the best legal position crossing exactly one of them.
///
/// Scan order is placed words in placement order, then the letter index in
/// the anchor, then the letter index in `word`; ties on score keep the
/// first candidate found. Returns `None` when the word cannot be connected.
pub fn find_best_placement(grid: &Grid, placed: &[PlacedWord], word: &[char]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for anchor in placed {
        let anchor_chars: Vec<char> = anchor.word.chars().collect();
        for (i, &anchor_letter) in anchor_chars.iter().enumerate() {
            for (j, &letter) in word.iter().enumerate() {
                if anchor_letter != letter {
                    continue;
                }

                // Origin that lines the shared letter up with the anchor's
                // i-th cell, perpendicular to the anchor. May be transiently
                // out of bounds; validation rejects those.
                let (direction, row, col) = match anchor.direction {
                    Direction::Across => (
                        Direction::Down,
                        anchor.row as i32 - j as i32,
                        anchor.col as i32 + i as i32,
                    ),
                    Direction::Down => (
                        Direction::Across,
                        anchor.row as i32 + i as i32,
                        anchor.col as i32 - j as i32,
                    ),
                };

                let crossing = anchor_cell(anchor, i);
                if let Some(score) = validate(grid, word, row, col, direction, crossing) {
                    if best.map_or(true, |b| score > b.score) {
                        best = Some(Candidate {
                            row: row as usize,
                            col: col as usize,
                            direction,
                            score,
                        });
                    }
                }
            }
        }
    }

    best
}

/// Cell occupied by the anchor word's `index`-th letter.
fn anchor_cell(anchor: &PlacedWord, index: usize) -> (i32, i32) {
    match anchor.direction {
        Direction::Across => (anchor.row as i32, anchor.col as i32 + index as i32),
        Direction::Down => (anchor.row as i32 + index as i32, anchor.col as i32),
    }
}

/// Check a candidate position. Every cell must be in bounds; the only
/// occupied cell the word may touch is the designated crossing cell, and it
/// must already hold the matching letter; perpendicular neighbors of every
/// other letter must be empty so no unintended parallel word forms.
/// Returns the overlap score of a legal candidate.
fn validate(
    grid: &Grid,
    word: &[char],
    row: i32,
    col: i32,
    direction: Direction,
    crossing: (i32, i32),
) -> Option<usize> {
    let size = grid.size() as i32;
    let mut score = 0;

    for (k, &letter) in word.iter().enumerate() {
        let (r, c) = match direction {
            Direction::Across => (row, col + k as i32),
            Direction::Down => (row + k as i32, col),
        };
        if !grid.contains(r, c) {
            return None;
        }

        let cell = grid.get(r as usize, c as usize);
        let is_crossing = (r, c) == crossing;

        if let Some(existing) = cell {
            if !is_crossing || existing != letter {
                return None;
            }
        }

        if !is_crossing {
            let blocked = match direction {
                Direction::Across => {
                    (r > 0 && grid.get(r as usize - 1, c as usize).is_some())
                        || (r < size - 1 && grid.get(r as usize + 1, c as usize).is_some())
                }
                Direction::Down => {
                    (c > 0 && grid.get(r as usize, c as usize - 1).is_some())
                        || (c < size - 1 && grid.get(r as usize, c as usize + 1).is_some())
                }
            };
            if blocked {
                return None;
            }
        }

        if cell.is_some() {
            score += 1;
        }
    }

    Some(score)
}

/// Write a word into the grid along its direction. Coordinates must already
/// be validated.
pub fn write_word(grid: &mut Grid, word: &[char], row: usize, col: usize, direction: Direction) {
    for (k, &letter) in word.iter().enumerate() {
        match direction {
            Direction::Across => grid.set(row, col + k, letter),
            Direction::Down => grid.set(row + k, col, letter),
        }
    }
}
