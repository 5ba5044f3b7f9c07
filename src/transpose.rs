use crate::pitch::{pitch_class, pitch_name, Spelling};

/// Transpose a pitch-class name by the given number of semitones.
///
/// The result is `(index(name) + semitones) mod 12`, always normalized to `0..12`.
/// A flat input (`"Bb"`, `"Eb"`, ...) is answered with flat spelling, anything
/// else with sharp spelling. Names outside the pitch table come back unchanged.
///
/// # Examples
/// ```
/// use chordsheet::transpose;
///
/// assert_eq!(transpose("C", 2), "D");
/// assert_eq!(transpose("D", -2), "C");
/// assert_eq!(transpose("Bb", 1), "B");
/// assert_eq!(transpose("Bb", 3), "Db");
/// assert_eq!(transpose("A", 1), "A#");
/// assert_eq!(transpose("H", 5), "H");
/// ```
pub fn transpose(name: &str, semitones: i32) -> String {
    match pitch_class(name) {
        Some(pc) => pitch_name(pc as i32 + semitones, Spelling::of(name)).to_string(),
        None => name.to_string(),
    }
}
