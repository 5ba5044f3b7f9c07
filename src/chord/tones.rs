//! Chord tone resolution
//!
//! Expands a [`ChordSymbol`] into absolute pitch numbers for keyboard display and
//! playback.
//!
//! # Register
//! The root-position chord is anchored at `pitch_class + 36` (octave 3, so C = 36,
//! A = 45). Every call site shares this anchor, which keeps the keyboard view
//! stable while the user steps through transpositions.
//!
//! # Steps
//! 1. Transpose root and bass names
//! 2. Stack the quality's intervals on the anchor
//! 3. Alter the matching chord tone, or add the altered tone if the degree is missing
//! 4. Add `add` degrees
//! 5. Place the bass strictly below the root-position chord
//! 6. Rotate the pressed tones `inversion` times (lowest tone up an octave)
//!
//! Once the pressed tones fit inside one octave a rotation is a plain queue step,
//! so every `len` rotations lift the whole chord by an octave. Inversion is
//! applied in closed form from that point and any value stays cheap.

use std::collections::BTreeSet;

use super::types::{ChordSymbol, ChordTones};
use crate::pitch::{pitch_class, OCTAVE_BASE};
use crate::transpose::transpose;

/// Resolve the pitches of a chord at a transposition offset.
///
/// Returns an empty [`ChordTones`] if the root isn't a known pitch name.
///
/// # Examples
/// ```
/// use chordsheet::{parse_chord, resolve_tones};
///
/// let c = parse_chord("C").unwrap();
/// let tones = resolve_tones(&c, 0);
/// assert_eq!(tones.pressed, vec![36, 40, 43]); // C E G
/// assert_eq!(tones.bass, Some(24));
///
/// // Same chord a whole step up
/// assert_eq!(resolve_tones(&c, 2).pressed, vec![38, 42, 45]);
/// ```
pub fn resolve_tones(chord: &ChordSymbol, transposition: i32) -> ChordTones {
    let Some(root_pc) = pitch_class(&transpose(&chord.root, transposition)) else {
        return ChordTones::default();
    };
    let bass_pc = chord
        .bass
        .as_deref()
        .and_then(|bass| pitch_class(&transpose(bass, transposition)))
        .unwrap_or(root_pc);

    let anchor = root_pc as i32 + OCTAVE_BASE;
    let mut tones: Vec<i32> = chord
        .quality
        .intervals()
        .iter()
        .map(|interval| anchor + interval)
        .collect();

    for alteration in &chord.alterations {
        let target = alteration.degree.interval();
        let delta = alteration.semitone_delta as i32;
        match tones
            .iter_mut()
            .find(|tone| (**tone - anchor).rem_euclid(12) == target.rem_euclid(12))
        {
            Some(tone) => *tone += delta,
            None => tones.push(anchor + target + delta),
        }
    }

    for degree in &chord.additions {
        tones.push(anchor + degree.interval());
    }

    tones.sort_unstable();
    tones.dedup();

    let bass = tones.first().map(|&lowest| bass_below(bass_pc as i32, lowest));

    invert(&mut tones, chord.inversion);
    tones.dedup();

    let layout: BTreeSet<i32> = tones.iter().copied().chain(bass).collect();

    ChordTones {
        pressed: tones,
        bass,
        layout: layout.into_iter().collect(),
    }
}

/// Rotate sorted tones `inversion` times, moving the lowest up an octave each time
fn invert(tones: &mut Vec<i32>, inversion: usize) {
    if tones.is_empty() {
        return;
    }
    let mut remaining = inversion;

    // Wide voicings (9ths and up) narrow with every rotation until they fit an octave
    while remaining > 0 && span(tones) > 12 {
        rotate_lowest(tones);
        remaining -= 1;
    }

    for _ in 0..remaining % tones.len() {
        rotate_lowest(tones);
    }
    let octaves = i32::try_from(remaining / tones.len()).unwrap_or(i32::MAX);
    let lift = octaves.saturating_mul(12);
    for tone in tones.iter_mut() {
        *tone = tone.saturating_add(lift);
    }
}

fn rotate_lowest(tones: &mut Vec<i32>) {
    let lowest = tones.remove(0);
    tones.push(lowest.saturating_add(12));
    tones.sort_unstable();
}

fn span(tones: &[i32]) -> i32 {
    match (tones.first(), tones.last()) {
        (Some(low), Some(high)) => high - low,
        _ => 0,
    }
}

/// Highest pitch of class `pitch_class` that is strictly below `lowest`
fn bass_below(pitch_class: i32, lowest: i32) -> i32 {
    let candidate = lowest - (lowest - pitch_class).rem_euclid(12);
    if candidate >= lowest {
        candidate - 12
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{parse_chord, Quality};

    fn tones(symbol: &str) -> ChordTones {
        resolve_tones(&parse_chord(symbol).unwrap(), 0)
    }

    #[test]
    fn test_major_triad_at_anchor() {
        let c = ChordSymbol::new("C", Quality::Major);
        let result = resolve_tones(&c, 0);
        assert_eq!(result.pressed, vec![36, 40, 43]);
        assert_eq!(result.bass, Some(24));
        assert_eq!(result.layout, vec![24, 36, 40, 43]);
    }

    #[test]
    fn test_sevenths() {
        assert_eq!(tones("G7").pressed, vec![43, 47, 50, 53]); // G B D F
        assert_eq!(tones("Am7").pressed, vec![45, 48, 52, 55]); // A C E G
        assert_eq!(tones("Bm7b5").pressed, vec![47, 50, 53, 57]); // B D F A
    }

    #[test]
    fn test_transposition_moves_anchor() {
        assert_eq!(resolve_tones(&parse_chord("A").unwrap(), 3).pressed, vec![36, 40, 43]);
        assert_eq!(resolve_tones(&parse_chord("C").unwrap(), -1).pressed, vec![47, 51, 54]);
    }

    #[test]
    fn test_alteration_replaces_existing_tone() {
        // C7b5: the fifth G(43) drops to Gb(42)
        assert_eq!(tones("C7b5").pressed, vec![36, 40, 42, 46]);
        // C9#9... the ninth D(50) rises to D#(51)
        assert_eq!(tones("C9#9").pressed, vec![36, 40, 43, 46, 51]);
    }

    #[test]
    fn test_alteration_synthesizes_missing_degree() {
        // C7b9: no ninth in C7, so Db is added above the octave
        assert_eq!(tones("C7b9").pressed, vec![36, 40, 43, 46, 49]);
        assert_eq!(tones("C7#11").pressed, vec![36, 40, 43, 46, 54]);
    }

    #[test]
    fn test_additions_append() {
        assert_eq!(tones("Cadd9").pressed, vec![36, 40, 43, 50]);
        assert_eq!(tones("Cmadd11").pressed, vec![36, 39, 43, 53]);
        // add9 on a ninth chord collapses onto the existing tone
        assert_eq!(tones("C9add9").pressed, vec![36, 40, 43, 46, 50]);
    }

    #[test]
    fn test_slash_bass_sits_below_chord() {
        let result = tones("G/B");
        assert_eq!(result.pressed, vec![43, 47, 50]);
        assert_eq!(result.bass, Some(35));

        let result = tones("C/E");
        assert_eq!(result.bass, Some(28));

        // Bass a half step below the root
        let result = tones("C/B");
        assert_eq!(result.bass, Some(35));
    }

    #[test]
    fn test_bass_equal_to_root_drops_an_octave() {
        assert_eq!(tones("E").bass, Some(28));
        assert_eq!(tones("Bb").bass, Some(34));
    }

    #[test]
    fn test_inversions_rotate_pressed_tones() {
        let c = ChordSymbol::new("C", Quality::Major);
        assert_eq!(resolve_tones(&c.clone().with_inversion(1), 0).pressed, vec![40, 43, 48]);
        assert_eq!(resolve_tones(&c.clone().with_inversion(2), 0).pressed, vec![43, 48, 52]);
        // Rotation keeps wrapping past the number of chord tones
        assert_eq!(resolve_tones(&c.clone().with_inversion(3), 0).pressed, vec![48, 52, 55]);
    }

    #[test]
    fn test_wide_chord_inversions_match_step_by_step_rotation() {
        let chord = ChordSymbol::new("C", Quality::Dominant13);
        let mut expected = resolve_tones(&chord, 0).pressed;
        for k in 1..=20 {
            let lowest = expected.remove(0);
            expected.push(lowest + 12);
            expected.sort_unstable();
            let mut stepped = expected.clone();
            stepped.dedup();
            assert_eq!(resolve_tones(&chord.clone().with_inversion(k), 0).pressed, stepped, "inversion {}", k);
        }
    }

    #[test]
    fn test_large_inversions_stay_bounded() {
        let c = ChordSymbol::new("C", Quality::Major);
        // 1000 full rotations and one more
        let result = resolve_tones(&c.clone().with_inversion(3001), 0);
        assert_eq!(result.pressed, vec![12040, 12043, 12048]);
        assert_eq!(result.bass, Some(24));

        let result = resolve_tones(&c.with_inversion(700_000_000), 0);
        assert!(!result.pressed.is_empty());
        assert_eq!(result.bass, Some(24));
    }

    #[test]
    fn test_inversion_keeps_bass_anchor() {
        let c = ChordSymbol::new("C", Quality::Major).with_inversion(2);
        let result = resolve_tones(&c, 0);
        assert_eq!(result.bass, Some(24));
        assert_eq!(result.layout, vec![24, 43, 48, 52]);
    }

    #[test]
    fn test_unknown_root_resolves_to_nothing() {
        let chord = ChordSymbol::new("H", Quality::Major);
        let result = resolve_tones(&chord, 0);
        assert!(result.is_empty());
        assert!(result.layout.is_empty());
    }
}
