//! Chord symbol parsing
//!
//! Reads one token such as `C`, `F#m7`, `Bb7(b9)`, `Dsus4/A` or `Cm(add9)` into a
//! [`ChordSymbol`]. Anything the grammar doesn't fully account for is rejected
//! rather than guessed at.
//!
//! ## Grammar
//! ```text
//! chord    = root suffix? ("/" root)?
//! root     = [A-G] ("#" | "b")?
//! suffix   = quality modifier*          (parentheses ignored)
//! modifier = ("#" | "b") number | "add" number
//! ```

use log::debug;
use std::str::FromStr;

use super::quality::match_quality;
use super::types::{Alteration, ChordSymbol, Degree};
use crate::error::ChordSheetError;
use crate::pitch::{pitch_class, root_prefix_len};

/// Parse a chord token.
///
/// Returns `None` for anything that isn't a complete chord symbol.
///
/// # Examples
/// ```
/// use chordsheet::{parse_chord, Quality};
///
/// let chord = parse_chord("Cmaj7").unwrap();
/// assert_eq!(chord.root, "C");
/// assert_eq!(chord.quality, Quality::Major7);
///
/// let slash = parse_chord("G/B").unwrap();
/// assert_eq!(slash.quality, Quality::Major);
/// assert_eq!(slash.bass.as_deref(), Some("B"));
///
/// assert!(parse_chord("Hello").is_none());
/// assert!(parse_chord("(C)").is_none());
/// ```
pub fn parse_chord(token: &str) -> Option<ChordSymbol> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Parenthesized groups are split by the caller
    if trimmed.starts_with('(') && trimmed.ends_with(')') {
        return None;
    }
    if trimmed.contains(char::is_whitespace) {
        debug!("rejecting chord token '{}': inner whitespace", token);
        return None;
    }

    let (body, bass) = split_bass(trimmed);
    if let Some(bass) = bass {
        pitch_class(bass)?;
    }

    let root_len = root_prefix_len(body)?;
    let root = &body[..root_len];
    pitch_class(root)?;

    let suffix: String = body[root_len..]
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();
    let (quality, remainder) = match_quality(&suffix)?;

    let (alterations, additions, leftover) = extract_modifiers(remainder);
    if !leftover.is_empty() {
        debug!("rejecting chord token '{}': unread suffix '{}'", token, leftover);
        return None;
    }

    Some(ChordSymbol {
        root: root.to_string(),
        quality,
        bass: bass.map(str::to_string),
        alterations,
        additions,
        inversion: 0,
        raw_text: token.to_string(),
        id: None,
        position_in_line: None,
    })
}

/// Split a trailing `/<root>` bass marker off the token
fn split_bass(token: &str) -> (&str, Option<&str>) {
    if let Some(slash) = token.rfind('/') {
        let tail = &token[slash + 1..];
        if !tail.is_empty() && root_prefix_len(tail) == Some(tail.len()) {
            return (&token[..slash], Some(tail));
        }
    }
    (token, None)
}

/// Pull `#n`, `bn` and `addn` modifiers off the front of `rest` until something
/// else shows up. Returns what was read and the unread tail.
fn extract_modifiers(mut rest: &str) -> (Vec<Alteration>, Vec<Degree>, &str) {
    let mut alterations = Vec::new();
    let mut additions = Vec::new();

    loop {
        if let Some(after_add) = rest.strip_prefix("add") {
            let Some((number, tail)) = leading_number(after_add) else { break };
            match Degree::from_number(number).filter(|d| d.is_addable()) {
                Some(degree) => {
                    if !additions.contains(&degree) {
                        additions.push(degree);
                    }
                    rest = tail;
                }
                None => break,
            }
            continue;
        }

        let delta = match rest.chars().next() {
            Some('#') => 1,
            Some('b') => -1,
            _ => break,
        };
        let Some((number, tail)) = leading_number(&rest[1..]) else { break };
        match Degree::from_number(number).and_then(|d| Alteration::new(d, delta)) {
            Some(alteration) => {
                if !alterations.contains(&alteration) {
                    alterations.push(alteration);
                }
                rest = tail;
            }
            None => break,
        }
    }

    (alterations, additions, rest)
}

/// Read the decimal number at the start of `s`
fn leading_number(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number = s[..digits].parse().ok()?;
    Some((number, &s[digits..]))
}

impl FromStr for ChordSymbol {
    type Err = ChordSheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s).ok_or_else(|| ChordSheetError::InvalidChord(s.to_string()))
    }
}
