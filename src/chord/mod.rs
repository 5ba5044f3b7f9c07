//! # Chord Module
//!
//! Everything that works on a single chord symbol.
//!
//! ## Sub-modules
//! - `types` - ChordSymbol, Alteration, Degree, ChordTones
//! - `quality` - Closed quality tables (intervals, accepted suffixes, display names)
//! - `parser` - Token → ChordSymbol
//! - `tones` - ChordSymbol → absolute pitches (pressed tones, bass, layout set)
//! - `format` - ChordSymbol → short or long display name
//!
//! ## Example
//! ```rust
//! use chordsheet::chord::{format_chord, parse_chord, resolve_tones, NameStyle};
//!
//! let chord = parse_chord("Am7/G").unwrap();
//! let tones = resolve_tones(&chord, 0);
//!
//! assert_eq!(tones.pressed, vec![45, 48, 52, 55]); // A C E G
//! assert_eq!(tones.bass, Some(43));                // G below the chord
//! assert_eq!(format_chord(&chord, NameStyle::Short, -2), "Gm7/F");
//! ```
//!
//! All functions are pure: they take a chord and return new values, and never
//! fail on odd input (an unknown root simply resolves to nothing).

mod format;
mod parser;
mod quality;
mod tones;
mod types;


pub use format::{format_chord, NameStyle};
pub use parser::parse_chord;
pub use quality::{match_quality, Quality};
pub use tones::resolve_tones;
pub use types::{Alteration, ChordSymbol, ChordTones, Degree};
