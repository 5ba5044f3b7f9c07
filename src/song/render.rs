use super::types::{PlacementKind, ProcessedSong};
use crate::chord::{format_chord, NameStyle};

/// Lay a song out as plain text: each chord row above its lyric row.
///
/// Chords are named at `transposition`. A name that would run into the previous
/// one is pushed right by one space.
pub fn render_text(song: &ProcessedSong, transposition: i32) -> String {
    let mut out = String::new();
    for line in &song.lines {
        if line.has_chords() {
            let mut row = String::new();
            let mut width = 0;
            for placement in &line.placements {
                let text = match &placement.kind {
                    PlacementKind::Chord(index) => match song.chord(*index) {
                        Some(chord) => format_chord(chord, NameStyle::Short, transposition),
                        None => continue,
                    },
                    PlacementKind::Annotation(text) => text.clone(),
                };
                let column = if width == 0 { placement.column } else { placement.column.max(width + 1) };
                row.push_str(&" ".repeat(column - width));
                row.push_str(&text);
                width = column + text.chars().count();
            }
            out.push_str(&row);
            out.push('\n');
            if line.is_instrumental {
                continue;
            }
        }
        out.push_str(&line.lyric_text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::parse_song;

    #[test]
    fn test_render_round_trips_layout() {
        let text = "C       G\nHello world\nla la";
        let song = parse_song(text);
        assert_eq!(render_text(&song, 0), "C       G\nHello world\nla la\n");
    }

    #[test]
    fn test_render_transposed_pushes_long_names() {
        let song = parse_song("C G\nla la");
        assert_eq!(render_text(&song, 1), "C# G#\nla la\n");
        let song = parse_song("Bb Eb\nla la");
        assert_eq!(render_text(&song, 1), "B E\nla la\n");
    }

    #[test]
    fn test_render_instrumental_and_labels() {
        let song = parse_song("[Intro] Am  G\nAm G\nsing");
        assert_eq!(render_text(&song, 0), "[Intro] Am  G\nAm G\nsing\n");
    }
}
