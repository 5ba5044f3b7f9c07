//! # chordsheet
//!
//! Chord-sheet parsing and chord theory.
//!
//! ## Pipeline
//! 1. [`parse_song`] splits text into chord lines and lyric lines and parses every chord
//! 2. Consumers look at chords on demand:
//!    - [`resolve_tones`] - absolute pitches (pressed tones, bass, layout set)
//!    - [`format_chord`] - short or long display name
//!    - [`transpose`] - pitch names moved by semitones
//!    - [`keyboard::keyboard_range`] - keyboard window for a set of pitches
//!
//! Nothing here keeps state between calls. The current transposition offset and
//! any edits to a song belong to the caller.
//!
//! ## Example
//! ```rust
//! use chordsheet::{format_chord, parse_song, resolve_tones, NameStyle};
//!
//! let song = parse_song("Am      F\nHello darkness");
//! let first = &song.all_chords[0];
//!
//! assert_eq!(format_chord(first, NameStyle::Short, 3), "Cm");
//! assert_eq!(resolve_tones(first, 0).pressed, vec![45, 48, 52]);
//! ```

pub mod chord;
pub mod error;
pub mod keyboard;
pub mod pitch;
pub mod song;
pub mod transpose;

pub use chord::{
    format_chord, parse_chord, resolve_tones, Alteration, ChordSymbol, ChordTones, Degree,
    NameStyle, Quality,
};
pub use error::ChordSheetError;
pub use keyboard::KeyRange;
pub use song::{parse_song, transpose_song, ProcessedSong, SongChordPlacement, SongLine};
pub use transpose::transpose;

/// Resolve a chord and size a keyboard around it with the default window settings.
///
/// # Example
/// ```rust
/// use chordsheet::{chord_on_keyboard, parse_chord};
///
/// let (tones, range) = chord_on_keyboard(&parse_chord("G/B").unwrap(), 0);
/// assert_eq!(tones.bass, Some(35));
/// assert!(range.contains(35) && range.contains(50));
/// ```
pub fn chord_on_keyboard(chord: &ChordSymbol, transposition: i32) -> (ChordTones, KeyRange) {
    let tones = resolve_tones(chord, transposition);
    let range = keyboard::keyboard_range(
        &tones.layout,
        keyboard::DEFAULT_MIN_WHITE_KEYS,
        keyboard::DEFAULT_PADDING,
    );
    (tones, range)
}
