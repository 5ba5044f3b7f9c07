use super::types::ProcessedSong;
use crate::chord::{format_chord, NameStyle};
use crate::transpose::transpose;

/// Transpose every chord of a song, returning a new song.
///
/// Roots and basses are re-spelled by [`transpose`], and each chord's raw text is
/// rewritten as its short name so the song reads correctly on its own.
/// Annotations, lyrics, columns and ids are untouched.
///
/// # Example
/// ```
/// use chordsheet::{parse_song, transpose_song};
///
/// let song = parse_song("C G/B Am\nla la la");
/// let up = transpose_song(&song, 2);
/// let names: Vec<&str> = up.all_chords.iter().map(|c| c.raw_text.as_str()).collect();
/// assert_eq!(names, vec!["D", "A/C#", "Bm"]);
/// ```
pub fn transpose_song(song: &ProcessedSong, semitones: i32) -> ProcessedSong {
    let mut transposed = song.clone();
    if semitones.rem_euclid(12) == 0 {
        return transposed;
    }

    for chord in &mut transposed.all_chords {
        chord.root = transpose(&chord.root, semitones);
        chord.bass = chord.bass.as_deref().map(|bass| transpose(bass, semitones));
        chord.raw_text = format_chord(chord, NameStyle::Short, 0);
    }
    transposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::parse_song;

    #[test]
    fn test_transpose_song_keeps_layout() {
        let song = parse_song("[Intro] C  N.C.  Bb\nla la");
        let down = transpose_song(&song, -2);
        assert_eq!(down.lines, song.lines);
        let roots: Vec<_> = down.all_chords.iter().map(|c| c.root.as_str()).collect();
        assert_eq!(roots, vec!["A#", "Ab"]);
        assert_eq!(down.all_chords[1].raw_text, "Ab");
    }

    #[test]
    fn test_transpose_by_octave_is_identity() {
        let song = parse_song("C G\nla");
        assert_eq!(transpose_song(&song, 0), song);
        assert_eq!(transpose_song(&song, 12), song);
    }

    #[test]
    fn test_transpose_song_keeps_ids() {
        let mut song = parse_song("Em7 A7\nla");
        song.assign_ids(1);
        let up = transpose_song(&song, 5);
        assert_eq!(up.all_chords[0].id, Some(1));
        assert_eq!(up.all_chords[0].raw_text, "Am7");
        assert_eq!(up.all_chords[1].raw_text, "D7");
        // The source song is not touched
        assert_eq!(song.all_chords[0].root, "E");
    }
}
