//! # Song Module
//!
//! Chord-sheet text in, structured song out.
//!
//! ## Sub-modules
//! - `types` - ProcessedSong (chord arena), SongLine, SongChordPlacement
//! - `parser` - Line classification, tokenizing and chord/lyric pairing
//! - `metadata` - YAML front matter (title, artist, key, capo, transpose, tempo)
//! - `transpose` - Whole-song transposition
//! - `render` - Plain-text layout of a parsed song
//!
//! ## Input Format
//! ```text
//! ---
//! title: Example
//! ---
//! [Verse]  C        G/B      Am
//!          Somewhere over the rainbow
//! Chorus:  F  (G-G7)  C  N.C.
//! ```
//!
//! Every chord of the song lives once in `ProcessedSong::all_chords`; line
//! placements refer to it by [`ChordIndex`].

mod metadata;
mod parser;
mod render;
mod transpose;
mod types;

pub use metadata::{parse_metadata, split_front_matter, SongMetadata};
pub use parser::{is_chord_line, parse_song};
pub use render::render_text;
pub use transpose::transpose_song;
pub use types::{ChordIndex, PlacementKind, ProcessedSong, SongChordPlacement, SongLine};
