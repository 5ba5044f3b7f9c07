//! Chord quality tables
//!
//! Three closed, read-only tables:
//! - quality → interval template (semitones above the root, ascending, starting at 0)
//! - written suffix → quality (what the parser accepts)
//! - quality → short abbreviation and full name (what the formatter writes)
//!
//! The suffix table never contains `-`, which song text reserves as a
//! separator between grouped chords.

use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Power,
    Sixth,
    MinorSixth,
    SixNine,
    Dominant7,
    Major7,
    Minor7,
    MinorMajor7,
    Diminished7,
    HalfDiminished7,
    Augmented7,
    Dominant7Sus4,
    Dominant9,
    Major9,
    Minor9,
    Dominant11,
    Minor11,
    Dominant13,
    Major13,
    Minor13,
}

/// Written suffixes, in table order. Lookup goes longest first; among equal
/// lengths the earlier entry wins.
const SUFFIXES: &[(&str, Quality)] = &[
    ("", Quality::Major),
    ("maj", Quality::Major),
    ("Maj", Quality::Major),
    ("M", Quality::Major),
    ("m", Quality::Minor),
    ("min", Quality::Minor),
    ("dim", Quality::Diminished),
    ("°", Quality::Diminished),
    ("aug", Quality::Augmented),
    ("+", Quality::Augmented),
    ("sus2", Quality::Sus2),
    ("sus4", Quality::Sus4),
    ("sus", Quality::Sus4),
    ("5", Quality::Power),
    ("6", Quality::Sixth),
    ("m6", Quality::MinorSixth),
    ("min6", Quality::MinorSixth),
    ("69", Quality::SixNine),
    ("7", Quality::Dominant7),
    ("dom7", Quality::Dominant7),
    ("maj7", Quality::Major7),
    ("Maj7", Quality::Major7),
    ("M7", Quality::Major7),
    ("Δ", Quality::Major7),
    ("Δ7", Quality::Major7),
    ("m7", Quality::Minor7),
    ("min7", Quality::Minor7),
    ("mmaj7", Quality::MinorMajor7),
    ("mMaj7", Quality::MinorMajor7),
    ("mM7", Quality::MinorMajor7),
    ("minmaj7", Quality::MinorMajor7),
    ("dim7", Quality::Diminished7),
    ("°7", Quality::Diminished7),
    ("m7b5", Quality::HalfDiminished7),
    ("ø", Quality::HalfDiminished7),
    ("ø7", Quality::HalfDiminished7),
    ("aug7", Quality::Augmented7),
    ("+7", Quality::Augmented7),
    ("7sus4", Quality::Dominant7Sus4),
    ("7sus", Quality::Dominant7Sus4),
    ("9", Quality::Dominant9),
    ("maj9", Quality::Major9),
    ("Maj9", Quality::Major9),
    ("M9", Quality::Major9),
    ("m9", Quality::Minor9),
    ("min9", Quality::Minor9),
    ("11", Quality::Dominant11),
    ("m11", Quality::Minor11),
    ("min11", Quality::Minor11),
    ("13", Quality::Dominant13),
    ("maj13", Quality::Major13),
    ("Maj13", Quality::Major13),
    ("M13", Quality::Major13),
    ("m13", Quality::Minor13),
    ("min13", Quality::Minor13),
];

fn suffixes_longest_first() -> &'static [(&'static str, Quality)] {
    static SORTED: OnceLock<Vec<(&'static str, Quality)>> = OnceLock::new();
    SORTED.get_or_init(|| {
        let mut sorted = SUFFIXES.to_vec();
        // sort_by_key is stable, so table order breaks ties
        sorted.sort_by_key(|(suffix, _)| std::cmp::Reverse(suffix.len()));
        sorted
    })
}

/// Match the longest quality suffix that prefixes `suffix`.
///
/// Returns the quality and the unmatched remainder.
pub fn match_quality(suffix: &str) -> Option<(Quality, &str)> {
    suffixes_longest_first()
        .iter()
        .find(|(key, _)| suffix.starts_with(key))
        .map(|(key, quality)| (*quality, &suffix[key.len()..]))
}

impl Quality {
    /// Interval template in semitones above the root
    pub fn intervals(self) -> &'static [i32] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::Diminished => &[0, 3, 6],
            Quality::Augmented => &[0, 4, 8],
            Quality::Sus2 => &[0, 2, 7],
            Quality::Sus4 => &[0, 5, 7],
            Quality::Power => &[0, 7],
            Quality::Sixth => &[0, 4, 7, 9],
            Quality::MinorSixth => &[0, 3, 7, 9],
            Quality::SixNine => &[0, 4, 7, 9, 14],
            Quality::Dominant7 => &[0, 4, 7, 10],
            Quality::Major7 => &[0, 4, 7, 11],
            Quality::Minor7 => &[0, 3, 7, 10],
            Quality::MinorMajor7 => &[0, 3, 7, 11],
            Quality::Diminished7 => &[0, 3, 6, 9],
            Quality::HalfDiminished7 => &[0, 3, 6, 10],
            Quality::Augmented7 => &[0, 4, 8, 10],
            Quality::Dominant7Sus4 => &[0, 5, 7, 10],
            Quality::Dominant9 => &[0, 4, 7, 10, 14],
            Quality::Major9 => &[0, 4, 7, 11, 14],
            Quality::Minor9 => &[0, 3, 7, 10, 14],
            Quality::Dominant11 => &[0, 4, 7, 10, 14, 17],
            Quality::Minor11 => &[0, 3, 7, 10, 14, 17],
            Quality::Dominant13 => &[0, 4, 7, 10, 14, 21],
            Quality::Major13 => &[0, 4, 7, 11, 14, 21],
            Quality::Minor13 => &[0, 3, 7, 10, 14, 21],
        }
    }

    /// Suffix written after the root in short chord names
    pub fn abbreviation(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
            Quality::Power => "5",
            Quality::Sixth => "6",
            Quality::MinorSixth => "m6",
            Quality::SixNine => "69",
            Quality::Dominant7 => "7",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "m7",
            Quality::MinorMajor7 => "m(maj7)",
            Quality::Diminished7 => "dim7",
            Quality::HalfDiminished7 => "m7b5",
            Quality::Augmented7 => "aug7",
            Quality::Dominant7Sus4 => "7sus4",
            Quality::Dominant9 => "9",
            Quality::Major9 => "maj9",
            Quality::Minor9 => "m9",
            Quality::Dominant11 => "11",
            Quality::Minor11 => "m11",
            Quality::Dominant13 => "13",
            Quality::Major13 => "maj13",
            Quality::Minor13 => "m13",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
            Quality::Augmented => "augmented",
            Quality::Sus2 => "suspended 2nd",
            Quality::Sus4 => "suspended 4th",
            Quality::Power => "power chord",
            Quality::Sixth => "major 6th",
            Quality::MinorSixth => "minor 6th",
            Quality::SixNine => "6/9",
            Quality::Dominant7 => "dominant 7th",
            Quality::Major7 => "major 7th",
            Quality::Minor7 => "minor 7th",
            Quality::MinorMajor7 => "minor-major 7th",
            Quality::Diminished7 => "diminished 7th",
            Quality::HalfDiminished7 => "half-diminished 7th",
            Quality::Augmented7 => "augmented 7th",
            Quality::Dominant7Sus4 => "dominant 7th suspended 4th",
            Quality::Dominant9 => "dominant 9th",
            Quality::Major9 => "major 9th",
            Quality::Minor9 => "minor 9th",
            Quality::Dominant11 => "dominant 11th",
            Quality::Minor11 => "minor 11th",
            Quality::Dominant13 => "dominant 13th",
            Quality::Major13 => "major 13th",
            Quality::Minor13 => "minor 13th",
        }
    }

    /// Every quality, in declaration order
    pub fn all() -> impl Iterator<Item = Quality> {
        let mut seen: Vec<Quality> = Vec::new();
        for (_, quality) in SUFFIXES {
            if !seen.contains(quality) {
                seen.push(*quality);
            }
        }
        seen.into_iter()
    }
}
