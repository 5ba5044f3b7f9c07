//! Song front matter
//!
//! A song may open with a YAML block between `---` lines:
//!
//! ```text
//! ---
//! title: Let It Be
//! artist: The Beatles
//! key: C
//! capo: 0
//! transpose: 2
//! ---
//! C         G
//! When I find myself in times of trouble
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChordSheetError;
use crate::pitch::pitch_class;

/// Validated song metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Written key, a pitch name optionally followed by `m`
    pub key: Option<String>,
    pub capo: Option<u8>,
    /// Default transposition offset for consumers, in semitones
    pub transpose: i32,
    pub tempo: Option<u16>,
}

impl SongMetadata {
    /// Pitch class of the key's tonic
    pub fn key_pitch_class(&self) -> Option<u8> {
        self.key.as_deref().and_then(|key| pitch_class(key.strip_suffix('m').unwrap_or(key)))
    }

    pub fn is_minor_key(&self) -> bool {
        self.key.as_deref().is_some_and(|key| key.len() > 1 && key.ends_with('m'))
    }
}

/// Raw metadata for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMetadata {
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
    capo: Option<u8>,
    transpose: Option<i32>,
    tempo: Option<u16>,
}

/// Parse the YAML content of a front-matter block.
///
/// # Errors
/// [`ChordSheetError::MetadataError`] if the YAML doesn't deserialize or the key
/// isn't a pitch name.
pub fn parse_metadata(content: &str) -> Result<SongMetadata, ChordSheetError> {
    if content.trim().is_empty() {
        return Ok(SongMetadata::default());
    }
    let raw: RawMetadata =
        serde_yaml::from_str(content).map_err(|e| ChordSheetError::MetadataError(e.to_string()))?;

    let key = match raw.key {
        Some(key) => {
            let key = key.trim().to_string();
            let tonic = key.strip_suffix('m').unwrap_or(&key);
            if pitch_class(tonic).is_none() {
                return Err(ChordSheetError::MetadataError(format!("Invalid key: {}", key)));
            }
            Some(key)
        }
        None => None,
    };

    Ok(SongMetadata {
        title: raw.title,
        artist: raw.artist,
        key,
        capo: raw.capo,
        transpose: raw.transpose.unwrap_or(0),
        tempo: raw.tempo,
    })
}

/// Split a leading front-matter block off a song text.
///
/// The first non-blank line must be `---` and a later line must close the block.
/// Returns (block content, remaining text); without a block the text comes back whole.
pub fn split_front_matter(text: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return (None, text.to_string());
    };
    if lines[start].trim() != "---" {
        return (None, text.to_string());
    }
    let Some(end) = lines[start + 1..].iter().position(|line| line.trim() == "---") else {
        return (None, text.to_string());
    };
    let end = start + 1 + end;

    let content = lines[start + 1..end].join("\n");
    let body = lines[end + 1..].join("\n");
    (Some(content), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let (content, body) = split_front_matter("---\ntitle: Test\n---\nC G\nla la");
        assert_eq!(content.as_deref(), Some("title: Test"));
        assert_eq!(body, "C G\nla la");
    }

    #[test]
    fn test_split_allows_leading_blank_lines() {
        let (content, body) = split_front_matter("\n  \n---\nkey: G\n---\nG");
        assert_eq!(content.as_deref(), Some("key: G"));
        assert_eq!(body, "G");
    }

    #[test]
    fn test_no_front_matter() {
        let (content, body) = split_front_matter("C G\nla la");
        assert!(content.is_none());
        assert_eq!(body, "C G\nla la");

        // Unclosed block is treated as song text
        let (content, body) = split_front_matter("---\ntitle: Test");
        assert!(content.is_none());
        assert_eq!(body, "---\ntitle: Test");

        // A separator further down is not front matter
        let (content, _) = split_front_matter("C\n---\nx\n---");
        assert!(content.is_none());
    }

    #[test]
    fn test_parse_metadata() {
        let metadata = parse_metadata("title: Test Song\nartist: Someone\nkey: Bbm\ncapo: 3\ntranspose: -2\ntempo: 96").unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Test Song"));
        assert_eq!(metadata.artist.as_deref(), Some("Someone"));
        assert_eq!(metadata.key.as_deref(), Some("Bbm"));
        assert_eq!(metadata.key_pitch_class(), Some(10));
        assert!(metadata.is_minor_key());
        assert_eq!(metadata.capo, Some(3));
        assert_eq!(metadata.transpose, -2);
        assert_eq!(metadata.tempo, Some(96));
    }

    #[test]
    fn test_parse_metadata_defaults() {
        let metadata = parse_metadata("").unwrap();
        assert_eq!(metadata, SongMetadata::default());
        let metadata = parse_metadata("title: Only a title").unwrap();
        assert_eq!(metadata.transpose, 0);
        assert!(metadata.key.is_none());
    }

    #[test]
    fn test_parse_metadata_rejects_bad_key() {
        let err = parse_metadata("key: H").unwrap_err();
        assert!(matches!(err, ChordSheetError::MetadataError(_)));
        assert_eq!(err.to_string(), "Invalid metadata: Invalid key: H");
    }

    #[test]
    fn test_parse_metadata_rejects_bad_yaml() {
        assert!(parse_metadata("capo: [1, 2").is_err());
        assert!(parse_metadata("capo: lots").is_err());
    }
}
