use std::collections::HashMap;

use super::{grid::Grid, placement};
use crate::error::GenerateError;
use crate::models::{CrosswordClue, CrosswordLayout, Direction, GridCell, PlacedWord, WordEntry};
use crate::utils::letters::normalize_word;

/// Empty cells kept around the cropped layout.
const CROP_MARGIN: usize = 1;

/// Build a crossword from raw word/clue entries.
///
/// Words are normalized, sorted longest-first and connected one at a time
/// through the placement engine; the longest word anchors the layout at the
/// center of an oversized working grid. The result is cropped to the
/// bounding box of placed letters plus a margin, and clue numbers are
/// assigned scanning start cells top-to-bottom, left-to-right. Words that
/// cannot be connected are reported in `dropped`, not an error.
pub fn generate(entries: &[WordEntry]) -> Result<CrosswordLayout, GenerateError> {
    let mut entries: Vec<WordEntry> = entries
        .iter()
        .map(|e| WordEntry {
            word: normalize_word(&e.word),
            clue: e.clue.clone(),
        })
        .filter(|e| !e.word.is_empty())
        .collect();
    if entries.is_empty() {
        return Err(GenerateError::NoValidWords);
    }

    // Stable sort keeps input order between words of equal length
    entries.sort_by(|a, b| b.word.chars().count().cmp(&a.word.chars().count()));

    let longest = entries[0].word.chars().count();
    let grid_size = longest.max(entries.len()) * 2;
    let mut grid = Grid::new(grid_size);
    let mut placed: Vec<PlacedWord> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();

    // The longest word goes to the center unconditionally, across
    let first = &entries[0];
    let first_chars: Vec<char> = first.word.chars().collect();
    let row = grid_size / 2;
    let col = (grid_size - first_chars.len()) / 2;
    placement::write_word(&mut grid, &first_chars, row, col, Direction::Across);
    placed.push(PlacedWord {
        word: first.word.clone(),
        clue: first.clue.clone(),
        direction: Direction::Across,
        row,
        col,
    });

    for entry in &entries[1..] {
        let chars: Vec<char> = entry.word.chars().collect();
        match placement::find_best_placement(&grid, &placed, &chars) {
            Some(candidate) => {
                placement::write_word(&mut grid, &chars, candidate.row, candidate.col, candidate.direction);
                placed.push(PlacedWord {
                    word: entry.word.clone(),
                    clue: entry.clue.clone(),
                    direction: candidate.direction,
                    row: candidate.row,
                    col: candidate.col,
                });
            }
            None => {
                tracing::warn!(word = %entry.word, "word cannot be connected to the crossword, dropping it");
                dropped.push(entry.word.clone());
            }
        }
    }

    Ok(finalize(&grid, placed, dropped))
}

/// Crop the working grid to the placed letters plus the margin, translate
/// placement coordinates, and assign clue numbers.
fn finalize(grid: &Grid, mut placed: Vec<PlacedWord>, dropped: Vec<String>) -> CrosswordLayout {
    let grid_size = grid.size();

    let mut min_row = grid_size;
    let mut max_row = 0;
    let mut min_col = grid_size;
    let mut max_col = 0;
    for word in &placed {
        let len = word.word.chars().count();
        let (end_row, end_col) = match word.direction {
            Direction::Across => (word.row, word.col + len - 1),
            Direction::Down => (word.row + len - 1, word.col),
        };
        min_row = min_row.min(word.row);
        max_row = max_row.max(end_row);
        min_col = min_col.min(word.col);
        max_col = max_col.max(end_col);
    }

    let start_row = min_row.saturating_sub(CROP_MARGIN);
    let end_row = (max_row + 1 + CROP_MARGIN).min(grid_size);
    let start_col = min_col.saturating_sub(CROP_MARGIN);
    let end_col = (max_col + 1 + CROP_MARGIN).min(grid_size);

    let mut cells: Vec<Vec<GridCell>> = (start_row..end_row)
        .map(|r| {
            (start_col..end_col)
                .map(|c| GridCell {
                    letter: grid.get(r, c),
                    number: None,
                })
                .collect()
        })
        .collect();

    // Number start cells by first occurrence in (row, col) order; a cell
    // starting both an across and a down word shares one number
    placed.sort_by(|a, b| (a.row, a.col).cmp(&(b.row, b.col)));

    let mut starts: HashMap<(usize, usize), u32> = HashMap::new();
    let mut next_number = 1u32;
    let mut across = Vec::new();
    let mut down = Vec::new();

    for word in &placed {
        let row = word.row - start_row;
        let col = word.col - start_col;
        let number = *starts.entry((row, col)).or_insert_with(|| {
            let n = next_number;
            next_number += 1;
            n
        });
        cells[row][col].number = Some(number);

        let clue = CrosswordClue {
            number,
            word: word.word.clone(),
            clue: word.clue.clone(),
            direction: word.direction,
            row,
            col,
        };
        match word.direction {
            Direction::Across => across.push(clue),
            Direction::Down => down.push(clue),
        }
    }

    across.sort_by_key(|c| c.number);
    down.sort_by_key(|c| c.number);

    CrosswordLayout {
        grid: cells,
        across,
        down,
        dropped,
    }
}
