//! Chord type definitions
//!
//! This module defines the typed form of a chord symbol and the result of
//! resolving it to absolute pitches.

use serde::Serialize;

use super::quality::Quality;

/// A scale degree that can be altered or added on top of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Fifth,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl Degree {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            5 => Some(Degree::Fifth),
            9 => Some(Degree::Ninth),
            11 => Some(Degree::Eleventh),
            13 => Some(Degree::Thirteenth),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Degree::Fifth => 5,
            Degree::Ninth => 9,
            Degree::Eleventh => 11,
            Degree::Thirteenth => 13,
        }
    }

    /// Unaltered interval above the root in semitones
    pub fn interval(self) -> i32 {
        match self {
            Degree::Fifth => 7,
            Degree::Ninth => 14,
            Degree::Eleventh => 17,
            Degree::Thirteenth => 21,
        }
    }

    /// Degrees that may follow `add`
    pub fn is_addable(self) -> bool {
        !matches!(self, Degree::Fifth)
    }
}

/// A raised or lowered chord degree (`b5`, `#9`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alteration {
    pub degree: Degree,
    /// +1 for sharp, -1 for flat
    pub semitone_delta: i8,
}

impl Alteration {
    pub fn new(degree: Degree, semitone_delta: i8) -> Option<Self> {
        let alteration = Alteration { degree, semitone_delta };
        alteration.is_supported().then_some(alteration)
    }

    /// Only the usual jazz alterations: b5 #5 b9 #9 #11 b13
    pub fn is_supported(&self) -> bool {
        matches!(
            (self.degree, self.semitone_delta),
            (Degree::Fifth, -1)
                | (Degree::Fifth, 1)
                | (Degree::Ninth, -1)
                | (Degree::Ninth, 1)
                | (Degree::Eleventh, 1)
                | (Degree::Thirteenth, -1)
        )
    }

    /// Written form, e.g. `"#11"`
    pub fn token(&self) -> String {
        let sign = if self.semitone_delta < 0 { "b" } else { "#" };
        format!("{}{}", sign, self.degree.number())
    }
}

/// A parsed chord symbol
///
/// `root` and `bass` keep the spelling they were written with (`"Bb"` stays flat),
/// which decides how transposed names are spelled.
///
/// # Fields
/// - `root`: Root pitch name (`"C"`, `"F#"`, `"Bb"`)
/// - `quality`: Entry of the closed quality table
/// - `bass`: Slash bass pitch name, need not be a chord tone
/// - `alterations`: Altered degrees in written order, no duplicates
/// - `additions`: Added degrees in written order, no duplicates
/// - `inversion`: Number of rotations of the pressed tones (0 = root position)
/// - `raw_text`: The token exactly as written
/// - `id`: Stable id assigned by the owner of the song, never by the parser
/// - `position_in_line`: Column of the chord in its chord line, when parsed from a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSymbol {
    pub root: String,
    pub quality: Quality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bass: Option<String>,
    pub alterations: Vec<Alteration>,
    pub additions: Vec<Degree>,
    pub inversion: usize,
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_in_line: Option<usize>,
}

impl ChordSymbol {
    /// A root-position chord without modifiers
    pub fn new(root: &str, quality: Quality) -> Self {
        ChordSymbol {
            root: root.to_string(),
            quality,
            bass: None,
            alterations: Vec::new(),
            additions: Vec::new(),
            inversion: 0,
            raw_text: format!("{}{}", root, quality.abbreviation()),
            id: None,
            position_in_line: None,
        }
    }

    /// Number of tones in the quality's interval template
    pub fn num_chord_tones(&self) -> usize {
        self.quality.intervals().len()
    }

    pub fn with_bass(mut self, bass: &str) -> Self {
        self.bass = Some(bass.to_string());
        self
    }

    pub fn with_inversion(mut self, inversion: usize) -> Self {
        self.inversion = inversion;
        self
    }

    pub fn with_alteration(mut self, alteration: Alteration) -> Self {
        if !self.alterations.contains(&alteration) {
            self.alterations.push(alteration);
        }
        self
    }

    pub fn with_addition(mut self, degree: Degree) -> Self {
        if !self.additions.contains(&degree) {
            self.additions.push(degree);
        }
        self
    }

    /// Same chord content: root, quality, bass, alterations and additions compared
    /// by pitch class and as sets. Spelling, raw text, ids and positions are ignored.
    pub fn is_equivalent(&self, other: &ChordSymbol) -> bool {
        use crate::pitch::pitch_class;

        let same_set = |a: &[Alteration], b: &[Alteration]| {
            a.len() == b.len() && a.iter().all(|x| b.contains(x))
        };
        pitch_class(&self.root) == pitch_class(&other.root)
            && self.quality == other.quality
            && self.bass.as_deref().and_then(pitch_class)
                == other.bass.as_deref().and_then(pitch_class)
            && same_set(&self.alterations, &other.alterations)
            && self.additions.len() == other.additions.len()
            && self.additions.iter().all(|d| other.additions.contains(d))
    }
}

/// Absolute pitches produced by a chord
///
/// Pitches use the engine's fixed register: pitch class + 36 is the root-position
/// anchor (C = 36).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordTones {
    /// Sorted, unique pitches played by the hands
    pub pressed: Vec<i32>,
    /// Bass pitch, strictly below the root-position chord
    pub bass: Option<i32>,
    /// Sorted union of `pressed` and `bass`, for sizing a keyboard view
    pub layout: Vec<i32>,
}

impl ChordTones {
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.bass.is_none()
    }
}
