//! Song text parsing
//!
//! Turns free-form chord-sheet text into a [`ProcessedSong`].
//!
//! ## Line classification
//! Each line is split into whitespace tokens (a `(...)` group stays one token) and
//! every token into sub-tokens on `-`, `–` and `|` only, so `(let ring)` is a
//! single sub-token. Sub-tokens are counted as
//! chords, annotations (`N.C.`, `x`, anything inside parentheses) or words.
//! A line is a chord line when it has no words and at least half of its
//! sub-tokens are chords.
//!
//! A leading `[Section]` or `Label:` is set aside before counting and comes back
//! as an annotation at column 0.
//!
//! ## Pairing
//! A chord line takes the next line as its lyrics unless that line is itself a
//! chord line, in which case the chord line stands alone as instrumental.
//!
//! ## Columns
//! Placement columns are `char` offsets into the line after tabs are expanded to
//! four spaces, so they line up with the lyric text printed under them.

use log::{debug, trace, warn};

use super::metadata::{parse_metadata, split_front_matter, SongMetadata};
use super::types::{ChordIndex, ProcessedSong, SongChordPlacement, SongLine};
use crate::chord::parse_chord;

const GROUP_SEPARATORS: [char; 3] = ['-', '–', '|'];

/// Parse song text into lines and chords.
///
/// Never fails: text that isn't recognized stays as lyrics, and invalid front
/// matter is logged and ignored.
///
/// # Examples
/// ```
/// use chordsheet::parse_song;
///
/// let song = parse_song("C G\nHello world");
/// assert_eq!(song.lines.len(), 1);
/// assert_eq!(song.lines[0].lyric_text, "Hello world");
///
/// let columns: Vec<usize> = song.lines[0].placements.iter().map(|p| p.column).collect();
/// assert_eq!(columns, vec![0, 2]);
/// assert_eq!(song.all_chords.len(), 2);
/// ```
pub fn parse_song(text: &str) -> ProcessedSong {
    let (front_matter, body) = split_front_matter(text);
    let metadata = match front_matter {
        Some(content) => parse_metadata(&content).unwrap_or_else(|e| {
            warn!("ignoring song front matter: {}", e);
            SongMetadata::default()
        }),
        None => SongMetadata::default(),
    };

    let lines: Vec<String> = body.lines().map(expand_tabs).collect();
    let mut song = ProcessedSong { metadata, ..Default::default() };

    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if !is_chord_line(line) {
            song.lines.push(SongLine::lyrics(line));
            i += 1;
            continue;
        }

        let placements = chord_line_placements(line, &mut song);
        let mut song_line = SongLine { placements, ..Default::default() };
        match lines.get(i + 1).filter(|next| !is_chord_line(next)) {
            Some(lyrics) => {
                song_line.lyric_text = lyrics.clone();
                i += 2;
            }
            None => {
                song_line.is_instrumental = true;
                i += 1;
            }
        }
        song.lines.push(song_line);
    }

    debug!(
        "parsed song: {} lines, {} chords",
        song.lines.len(),
        song.all_chords.len()
    );
    song
}

/// Whether a line reads as a line of chords rather than lyrics
pub fn is_chord_line(line: &str) -> bool {
    let line = expand_tabs(line);
    let (_, label_end) = split_label(&line);
    let rest = line[label_end..].trim();
    if rest.is_empty() || rest.ends_with(':') {
        return false;
    }

    let mut counts = TokenCounts::default();
    for token in tokenize(rest) {
        counts.add_token(&token);
    }
    let is_chords = counts.total() > 0 && counts.words == 0 && counts.chords * 2 >= counts.total();
    trace!(
        "line {:?}: {} chords, {} annotations, {} words -> {}",
        line,
        counts.chords,
        counts.annotations,
        counts.words,
        if is_chords { "chords" } else { "lyrics" }
    );
    is_chords
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', "    ")
}

/// Find a leading `[Label]` or `Label:` prefix.
///
/// Returns the trimmed label and the byte offset where the rest of the line starts.
fn split_label(line: &str) -> (Option<&str>, usize) {
    let body = line.trim_start();
    let lead = line.len() - body.len();

    if body.starts_with('[') {
        if let Some(close) = body.find(']') {
            let end = lead + close + 1;
            return (Some(&line[lead..end]), end);
        }
    }

    if let Some(colon) = body.find(':') {
        let prefix = &body[..colon];
        let has_chord = prefix.split_whitespace().any(|word| parse_chord(word).is_some());
        if !prefix.trim().is_empty() && !has_chord {
            let end = lead + colon + 1;
            return (Some(&line[lead..end]), end);
        }
    }

    (None, 0)
}

/// A whitespace-delimited run or a parenthesized group
#[derive(Debug, PartialEq)]
struct Token<'a> {
    text: &'a str,
    /// Byte offset in the tokenized string
    start: usize,
    group: bool,
}

impl<'a> Token<'a> {
    /// Text between the parentheses of a group and its byte offset within the token
    fn inner(&self) -> (&'a str, usize) {
        if self.group {
            let inner = &self.text[1..];
            (inner.strip_suffix(')').unwrap_or(inner), 1)
        } else {
            (self.text, 0)
        }
    }
}

fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some(c) = s[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }
        let end = if c == '(' {
            s[pos..].find(')').map_or(s.len(), |close| pos + close + 1)
        } else {
            s[pos..].find(char::is_whitespace).map_or(s.len(), |ws| pos + ws)
        };
        tokens.push(Token { text: &s[pos..end], start: pos, group: c == '(' });
        pos = end;
    }
    tokens
}

/// Split on grouping separators, keeping the byte offset of each trimmed piece
fn sub_tokens(s: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for piece in s.split(GROUP_SEPARATORS) {
        let trimmed = piece.trim_start();
        let offset = start + piece.len() - trimmed.len();
        let trimmed = trimmed.trim_end();
        if !trimmed.is_empty() {
            pieces.push((offset, trimmed));
        }
        start += piece.len();
        start += s[start..].chars().next().map_or(0, char::len_utf8);
    }
    pieces
}

fn is_annotation_word(s: &str) -> bool {
    s.eq_ignore_ascii_case("n.c.") || s.eq_ignore_ascii_case("x")
}

#[derive(Debug, Default)]
struct TokenCounts {
    chords: usize,
    annotations: usize,
    words: usize,
}

impl TokenCounts {
    fn total(&self) -> usize {
        self.chords + self.annotations + self.words
    }

    fn add_token(&mut self, token: &Token) {
        let (inner, _) = token.inner();
        let pieces = sub_tokens(inner);
        if token.group && pieces.is_empty() {
            self.annotations += 1;
        }
        for (_, piece) in pieces {
            if parse_chord(piece).is_some() {
                self.chords += 1;
            } else if token.group || is_annotation_word(piece) {
                self.annotations += 1;
            } else {
                self.words += 1;
            }
        }
    }
}

/// Build the placements of a chord line, adding its chords to the song's arena
fn chord_line_placements(line: &str, song: &mut ProcessedSong) -> Vec<SongChordPlacement> {
    let column_of = |byte: usize| line[..byte].chars().count();
    let mut placements = Vec::new();

    let (label, label_end) = split_label(line);
    if let Some(label) = label {
        placements.push(SongChordPlacement::annotation(0, label));
    }

    let rest = &line[label_end..];
    for token in tokenize(rest) {
        let token_start = label_end + token.start;
        let (inner, inner_offset) = token.inner();

        let mut token_placements = Vec::new();
        let mut parsed_any = false;
        for (offset, piece) in sub_tokens(inner) {
            let column = column_of(token_start + inner_offset + offset);
            match parse_chord(piece) {
                Some(mut chord) => {
                    chord.position_in_line = Some(column);
                    song.all_chords.push(chord);
                    let index = ChordIndex(song.all_chords.len() - 1);
                    token_placements.push(SongChordPlacement::chord(column, index));
                    parsed_any = true;
                }
                None => token_placements.push(SongChordPlacement::annotation(column, piece)),
            }
        }

        if token.group && !parsed_any {
            placements.push(SongChordPlacement::annotation(column_of(token_start), token.text));
        } else {
            placements.extend(token_placements);
        }
    }
    placements
}
