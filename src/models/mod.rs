pub mod puzzle;

pub use puzzle::{
    // Stored documents
    CrosswordDocument, WordSearchDocument,
    // Generator output
    CrosswordClue, CrosswordLayout, GridCell, PlacedWord, WordSearchLayout, WordSearchPlacement,
    // Shared vocabulary
    CompassDirection, Difficulty, Direction, WordEntry,
};
