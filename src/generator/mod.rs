// Puzzle generation core. Pure and synchronous: no I/O, no shared state,
// each call builds its own grid.

pub mod crossword;
pub mod grid;
pub mod placement;
pub mod wordsearch;
