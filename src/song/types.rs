//! Song model
//!
//! ```text
//! ProcessedSong
//!   ├── metadata: SongMetadata (YAML front matter)
//!   ├── all_chords: Vec<ChordSymbol>          (arena, document order)
//!   └── lines: Vec<SongLine>
//!         ├── lyric_text: String
//!         ├── is_instrumental: bool
//!         └── placements: Vec<SongChordPlacement> (ordered by column)
//!               ├── column: usize
//!               └── kind: Chord(ChordIndex) | Annotation(String)
//! ```
//!
//! Chord placements don't own their chord: they hold a [`ChordIndex`] into
//! `all_chords`, so an edit made through the song is seen from both the line view
//! and the flat chord list. The mutation helpers below keep the two in sync.

use serde::Serialize;

use super::metadata::SongMetadata;
use crate::chord::ChordSymbol;

/// Index of a chord in [`ProcessedSong::all_chords`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChordIndex(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum PlacementKind {
    /// A resolvable chord in the song's arena
    Chord(ChordIndex),
    /// Text kept verbatim: section labels, `N.C.`, `x`, playing hints
    Annotation(String),
}

/// Something written on a chord line, at a character column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongChordPlacement {
    pub column: usize,
    pub kind: PlacementKind,
}

impl SongChordPlacement {
    pub fn chord(column: usize, index: ChordIndex) -> Self {
        SongChordPlacement { column, kind: PlacementKind::Chord(index) }
    }

    pub fn annotation(column: usize, text: &str) -> Self {
        SongChordPlacement { column, kind: PlacementKind::Annotation(text.to_string()) }
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self.kind, PlacementKind::Annotation(_))
    }

    pub fn chord_index(&self) -> Option<ChordIndex> {
        match self.kind {
            PlacementKind::Chord(index) => Some(index),
            PlacementKind::Annotation(_) => None,
        }
    }
}

/// One displayed line: optional chords above optional lyrics
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongLine {
    pub lyric_text: String,
    pub placements: Vec<SongChordPlacement>,
    /// A chord line with no lyric line under it
    pub is_instrumental: bool,
}

impl SongLine {
    pub fn lyrics(text: &str) -> Self {
        SongLine { lyric_text: text.to_string(), ..Default::default() }
    }

    pub fn has_chords(&self) -> bool {
        !self.placements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedSong {
    pub metadata: SongMetadata,
    pub lines: Vec<SongLine>,
    pub all_chords: Vec<ChordSymbol>,
}

impl ProcessedSong {
    pub fn chord(&self, index: ChordIndex) -> Option<&ChordSymbol> {
        self.all_chords.get(index.0)
    }

    /// Chords of one line with their columns, annotations skipped
    pub fn placed_chords(&self, line: usize) -> impl Iterator<Item = (usize, &ChordSymbol)> + '_ {
        self.lines
            .get(line)
            .into_iter()
            .flat_map(|line| line.placements.iter())
            .filter_map(move |placement| {
                let index = placement.chord_index()?;
                Some((placement.column, self.chord(index)?))
            })
    }

    /// Give every chord a stable id, counting up from `first_id` in document order.
    ///
    /// Chords that already carry an id keep it.
    pub fn assign_ids(&mut self, first_id: u32) {
        let mut next = self
            .all_chords
            .iter()
            .filter_map(|chord| chord.id)
            .max()
            .map_or(first_id, |max| max.saturating_add(1).max(first_id));
        for chord in &mut self.all_chords {
            if chord.id.is_none() {
                chord.id = Some(next);
                next = next.saturating_add(1);
            }
        }
    }

    pub fn find_by_id(&self, id: u32) -> Option<ChordIndex> {
        self.all_chords.iter().position(|chord| chord.id == Some(id)).map(ChordIndex)
    }

    /// Replace the chord with this id. The replacement inherits the id and the
    /// column of the chord it replaces.
    pub fn update_chord(&mut self, id: u32, mut chord: ChordSymbol) -> bool {
        let Some(index) = self.find_by_id(id) else {
            return false;
        };
        let slot = &mut self.all_chords[index.0];
        chord.id = Some(id);
        chord.position_in_line = slot.position_in_line;
        *slot = chord;
        true
    }

    /// Remove the chord with this id along with its placement.
    pub fn remove_chord(&mut self, id: u32) -> Option<ChordSymbol> {
        let index = self.find_by_id(id)?;
        for line in &mut self.lines {
            line.placements.retain(|p| p.chord_index() != Some(index));
            for placement in &mut line.placements {
                if let PlacementKind::Chord(ChordIndex(i)) = &mut placement.kind {
                    if *i > index.0 {
                        *i -= 1;
                    }
                }
            }
        }
        Some(self.all_chords.remove(index.0))
    }

    /// Place a new chord on a line at a column.
    ///
    /// The arena entry is inserted in document order (after every chord of earlier
    /// lines and earlier columns). Returns `None` if the line doesn't exist.
    pub fn insert_chord(&mut self, line: usize, column: usize, mut chord: ChordSymbol) -> Option<ChordIndex> {
        if line >= self.lines.len() {
            return None;
        }

        let chords_before = |song: &ProcessedSong| -> usize {
            let earlier_lines: usize = song.lines[..line]
                .iter()
                .map(|l| l.placements.iter().filter(|p| !p.is_annotation()).count())
                .sum();
            let same_line = song.lines[line]
                .placements
                .iter()
                .filter(|p| !p.is_annotation() && p.column <= column)
                .count();
            earlier_lines + same_line
        };
        let index = chords_before(self);

        for placement in self.lines.iter_mut().flat_map(|l| l.placements.iter_mut()) {
            if let PlacementKind::Chord(ChordIndex(i)) = &mut placement.kind {
                if *i >= index {
                    *i += 1;
                }
            }
        }

        chord.position_in_line = Some(column);
        self.all_chords.insert(index, chord);

        let placements = &mut self.lines[line].placements;
        let at = placements.iter().take_while(|p| p.column <= column).count();
        placements.insert(at, SongChordPlacement::chord(column, ChordIndex(index)));
        Some(ChordIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{parse_chord, Quality};
    use crate::song::parse_song;

    fn indices(song: &ProcessedSong) -> Vec<usize> {
        song.lines
            .iter()
            .flat_map(|l| l.placements.iter())
            .filter_map(|p| p.chord_index())
            .map(|i| i.0)
            .collect()
    }

    #[test]
    fn test_assign_ids_in_document_order() {
        let mut song = parse_song("C G\nla la\nAm F\nla la");
        assert!(song.all_chords.iter().all(|c| c.id.is_none()));
        song.assign_ids(10);
        let ids: Vec<_> = song.all_chords.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(10), Some(11), Some(12), Some(13)]);

        // Already-assigned ids are kept
        song.insert_chord(0, 6, parse_chord("D").unwrap());
        song.assign_ids(10);
        assert_eq!(song.all_chords[2].id, Some(14));
    }

    #[test]
    fn test_update_is_seen_from_lines() {
        let mut song = parse_song("C G\nla la");
        song.assign_ids(1);
        assert!(song.update_chord(2, parse_chord("Em").unwrap()));
        let on_line: Vec<_> = song.placed_chords(0).map(|(col, c)| (col, c.quality)).collect();
        assert_eq!(on_line, vec![(0, Quality::Major), (2, Quality::Minor)]);
        assert_eq!(song.all_chords[1].id, Some(2));
        assert_eq!(song.all_chords[1].position_in_line, Some(2));
        assert!(!song.update_chord(99, parse_chord("Em").unwrap()));
    }

    #[test]
    fn test_remove_keeps_indices_consistent() {
        let mut song = parse_song("C G\nla la\nAm F\nla la");
        song.assign_ids(1);
        let removed = song.remove_chord(2).unwrap();
        assert_eq!(removed.root, "G");
        assert_eq!(song.all_chords.len(), 3);
        assert_eq!(indices(&song), vec![0, 1, 2]);
        let roots: Vec<_> = song.placed_chords(1).map(|(_, c)| c.root.as_str()).collect();
        assert_eq!(roots, vec!["A", "F"]);
        assert!(song.remove_chord(2).is_none());
    }

    #[test]
    fn test_insert_in_document_order() {
        let mut song = parse_song("C G\nla la\nAm F\nla la");
        let index = song.insert_chord(0, 1, parse_chord("D").unwrap()).unwrap();
        assert_eq!(index, ChordIndex(1));
        assert_eq!(indices(&song), vec![0, 1, 2, 3, 4]);
        let roots: Vec<_> = song.all_chords.iter().map(|c| c.root.as_str()).collect();
        assert_eq!(roots, vec!["C", "D", "G", "A", "F"]);
        assert_eq!(song.all_chords[1].position_in_line, Some(1));

        assert!(song.insert_chord(9, 0, parse_chord("D").unwrap()).is_none());
    }
}
