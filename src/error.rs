//! # Error Types
//!
//! This module defines the error type used at the edges of the chordsheet engine.
//!
//! The engine operations themselves (chord parsing, tone resolution, naming, song
//! parsing, keyboard ranges) are total: they return `Option` or empty values for
//! input they don't recognize. `ChordSheetError` is only produced where a caller
//! explicitly asks for a strict answer.
//!
//! ## Error Types
//! - `InvalidChord` - A token that is not a chord symbol (`str::parse::<ChordSymbol>()`)
//! - `MetadataError` - Invalid YAML front matter in a song file
//! - `Io` - A song file could not be read (CLI)
//! - `Json` - A parsed song could not be written as JSON (CLI)
//!
//! ## Usage
//! ```rust
//! use chordsheet::{ChordSheetError, ChordSymbol};
//!
//! match "Hmaj7".parse::<ChordSymbol>() {
//!     Ok(chord) => println!("root {}", chord.root),
//!     Err(ChordSheetError::InvalidChord(token)) => eprintln!("not a chord: {}", token),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordSheetError {
    /// The token could not be read as a chord symbol.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::InvalidChord("Xm7".to_string());
    /// assert_eq!(err.to_string(), "Invalid chord symbol: 'Xm7'");
    /// ```
    #[error("Invalid chord symbol: '{0}'")]
    InvalidChord(String),

    /// Invalid metadata error.
    ///
    /// Occurs when the YAML front matter of a song doesn't deserialize or
    /// contains unsupported values.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordSheetError;
    /// let err = ChordSheetError::MetadataError("key must be a pitch name".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: key must be a pitch name");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    #[error("Error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error serializing song: {0}")]
    Json(#[from] serde_json::Error),
}
