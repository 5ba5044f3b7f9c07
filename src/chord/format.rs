//! Chord naming
//!
//! Renders a [`ChordSymbol`] for display, either as a compact symbol (`Bb7(b9)/D`)
//! or spelled out (`Bb dominant 7th, flat 9th, over D`).

use super::types::ChordSymbol;
use crate::pitch::pitch_class;
use crate::transpose::transpose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    /// Chord-sheet symbol, parseable again by [`parse_chord`](super::parse_chord)
    #[default]
    Short,
    /// Human-readable description
    Long,
}

/// Name a chord at a transposition offset.
///
/// Chords whose root isn't a known pitch name are shown as written.
///
/// # Examples
/// ```
/// use chordsheet::{format_chord, parse_chord, NameStyle};
///
/// let chord = parse_chord("G7(b9)/B").unwrap();
/// assert_eq!(format_chord(&chord, NameStyle::Short, 0), "G7b9/B");
/// assert_eq!(format_chord(&chord, NameStyle::Short, 2), "A7b9/C#");
/// assert_eq!(
///     format_chord(&chord, NameStyle::Long, 0),
///     "G dominant 7th, flat 9th, over B"
/// );
/// ```
pub fn format_chord(chord: &ChordSymbol, style: NameStyle, transposition: i32) -> String {
    let Some(root_pc) = pitch_class(&chord.root) else {
        return chord.raw_text.clone();
    };
    let root = transpose(&chord.root, transposition);
    let bass = chord
        .bass
        .as_deref()
        .filter(|bass| pitch_class(bass).is_some_and(|pc| pc != root_pc))
        .map(|bass| transpose(bass, transposition));

    match style {
        NameStyle::Short => short_name(chord, &root, bass.as_deref()),
        NameStyle::Long => long_name(chord, &root, bass.as_deref()),
    }
}

fn short_name(chord: &ChordSymbol, root: &str, bass: Option<&str>) -> String {
    let abbreviation = chord.quality.abbreviation();
    let mut name = format!("{}{}", root, abbreviation);

    let alterations: String = chord.alterations.iter().map(|a| a.token()).collect();
    if !alterations.is_empty() {
        // `Cb5` would read as a Cb power chord
        if abbreviation.is_empty() {
            name.push('(');
            name.push_str(&alterations);
            name.push(')');
        } else {
            name.push_str(&alterations);
        }
    }
    for degree in &chord.additions {
        name.push_str(&format!("add{}", degree.number()));
    }
    if let Some(bass) = bass {
        name.push('/');
        name.push_str(bass);
    }
    name
}

fn long_name(chord: &ChordSymbol, root: &str, bass: Option<&str>) -> String {
    let mut clauses = vec![format!("{} {}", root, chord.quality.full_name())];

    for alteration in &chord.alterations {
        let direction = if alteration.semitone_delta < 0 { "flat" } else { "sharp" };
        clauses.push(format!("{} {}", direction, ordinal(alteration.degree.number() as usize)));
    }
    for degree in &chord.additions {
        clauses.push(format!("added {}", ordinal(degree.number() as usize)));
    }
    if let Some(bass) = bass {
        clauses.push(format!("over {}", bass));
    }
    if chord.inversion > 0 {
        clauses.push(format!("{} inversion", ordinal(chord.inversion)));
    }
    clauses.join(", ")
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
