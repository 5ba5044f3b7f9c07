//! # Pitch Table
//!
//! Static mapping between pitch-class names and chromatic pitch classes.
//!
//! Pitch classes are integers in `0..12`:
//! 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
//!
//! The table knows the 7 natural names, 5 sharp names and 5 flat names. Spellings
//! like `Cb` or `E#` are not table names.

/// Sharp spelling for each pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelling for each pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Absolute pitch offset of the reference octave (octave 3).
///
/// Every absolute pitch produced by the engine is `pitch_class + OCTAVE_BASE + 12 * k`.
pub const OCTAVE_BASE: i32 = 12 * 3;

/// Which accidental a name should be spelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    /// Spelling preference carried by a pitch name: flat if it is longer than one
    /// character and uses a `b` accidental, sharp otherwise.
    pub fn of(name: &str) -> Self {
        let mut chars = name.chars();
        chars.next();
        if chars.next() == Some('b') {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }
}

/// Look up the pitch class (0-11) of a name like `"C"`, `"F#"` or `"Bb"`
pub fn pitch_class(name: &str) -> Option<u8> {
    SHARP_NAMES
        .iter()
        .position(|n| *n == name)
        .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
        .map(|pc| pc as u8)
}

/// Name of a pitch class with the given spelling. Values outside `0..12` wrap.
pub fn pitch_name(pitch_class: i32, spelling: Spelling) -> &'static str {
    let pc = pitch_class.rem_euclid(12) as usize;
    match spelling {
        Spelling::Sharp => SHARP_NAMES[pc],
        Spelling::Flat => FLAT_NAMES[pc],
    }
}

/// Length in bytes of a root-letter pattern `[A-G](#|b)?` at the start of `s`,
/// or `None` if `s` doesn't start with one.
pub(crate) fn root_prefix_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    match chars.next() {
        Some('#') | Some('b') => Some(2),
        _ => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_class_lookup() {
        assert_eq!(pitch_class("C"), Some(0));
        assert_eq!(pitch_class("C#"), Some(1));
        assert_eq!(pitch_class("Db"), Some(1));
        assert_eq!(pitch_class("Bb"), Some(10));
        assert_eq!(pitch_class("B"), Some(11));
        assert_eq!(pitch_class("Cb"), None);
        assert_eq!(pitch_class("E#"), None);
        assert_eq!(pitch_class("H"), None);
        assert_eq!(pitch_class(""), None);
    }

    #[test]
    fn test_every_name_round_trips() {
        for pc in 0..12 {
            assert_eq!(pitch_class(pitch_name(pc, Spelling::Sharp)), Some(pc as u8));
            assert_eq!(pitch_class(pitch_name(pc, Spelling::Flat)), Some(pc as u8));
        }
    }

    #[test]
    fn test_pitch_name_wraps() {
        assert_eq!(pitch_name(-1, Spelling::Sharp), "B");
        assert_eq!(pitch_name(13, Spelling::Flat), "Db");
    }

    #[test]
    fn test_spelling_preference() {
        assert_eq!(Spelling::of("Bb"), Spelling::Flat);
        assert_eq!(Spelling::of("F#"), Spelling::Sharp);
        assert_eq!(Spelling::of("B"), Spelling::Sharp);
        assert_eq!(Spelling::of("b"), Spelling::Sharp);
    }

    #[test]
    fn test_root_prefix() {
        assert_eq!(root_prefix_len("Cmaj7"), Some(1));
        assert_eq!(root_prefix_len("F#m"), Some(2));
        assert_eq!(root_prefix_len("Bb7"), Some(2));
        assert_eq!(root_prefix_len("H7"), None);
        assert_eq!(root_prefix_len("c"), None);
    }
}
