//! Keyboard viewport sizing
//!
//! Picks the window of an 88-key keyboard (MIDI 21 to 108) that shows a set of
//! pitches with some room around them, never narrower than a given number of
//! white keys.

use serde::Serialize;

/// Lowest key of an 88-key keyboard (A0)
pub const LOWEST_KEY: i32 = 21;
/// Highest key of an 88-key keyboard (C8)
pub const HIGHEST_KEY: i32 = 108;
/// White keys on an 88-key keyboard
pub const WHITE_KEYS: u32 = 52;

pub const DEFAULT_MIN_WHITE_KEYS: u32 = 20;
pub const DEFAULT_PADDING: i32 = 5;

/// Inclusive range of absolute pitches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyRange {
    pub start: i32,
    pub end: i32,
}

/// Window shown when there is nothing to show: three octaves from C at the chord anchor
pub const DEFAULT_RANGE: KeyRange = KeyRange { start: 36, end: 71 };

impl KeyRange {
    pub fn span(&self) -> i32 {
        self.end - self.start
    }

    pub fn contains(&self, pitch: i32) -> bool {
        (self.start..=self.end).contains(&pitch)
    }
}

/// Compute the keyboard window for a set of pitches.
///
/// The pitches are padded by `padding` semitones on each side. If that is
/// narrower than `min_white_keys` white keys (`ceil(min_white_keys * 12 / 7)`
/// semitones), the window is re-centered on the pitches and widened. The result
/// is clamped to the 88-key range, and `min_white_keys` to its 52 white keys.
///
/// # Examples
/// ```
/// use chordsheet::keyboard::{keyboard_range, KeyRange};
///
/// // C major at the anchor: 36 40 43
/// assert_eq!(keyboard_range(&[36, 40, 43], 20, 5), KeyRange { start: 22, end: 57 });
/// ```
pub fn keyboard_range(pitches: &[i32], min_white_keys: u32, padding: i32) -> KeyRange {
    let (Some(&min), Some(&max)) = (pitches.iter().min(), pitches.iter().max()) else {
        return DEFAULT_RANGE;
    };

    let mut start = min.saturating_sub(padding);
    let mut end = max.saturating_add(padding);

    let min_span = (min_white_keys.min(WHITE_KEYS) as i32 * 12 + 6) / 7;
    if (end as i64 - start as i64) < min_span as i64 {
        let middle = (min as i64 + max as i64).div_euclid(2) as i32;
        start = middle.saturating_sub(min_span / 2);
        end = start.saturating_add(min_span);
    }

    KeyRange {
        start: start.clamp(LOWEST_KEY, HIGHEST_KEY),
        end: end.clamp(LOWEST_KEY, HIGHEST_KEY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(pitches: &[i32]) -> KeyRange {
        keyboard_range(pitches, DEFAULT_MIN_WHITE_KEYS, DEFAULT_PADDING)
    }

    #[test]
    fn test_empty_input_uses_default_window() {
        assert_eq!(range(&[]), DEFAULT_RANGE);
        assert_eq!(keyboard_range(&[], 3, 0), DEFAULT_RANGE);
    }

    #[test]
    fn test_narrow_chord_is_widened_around_its_middle() {
        let r = range(&[36, 40, 43]);
        assert_eq!(r, KeyRange { start: 22, end: 57 });
        assert_eq!(r.span(), 35);
        assert!(r.contains(36) && r.contains(43));
    }

    #[test]
    fn test_wide_voicing_keeps_padding() {
        assert_eq!(range(&[28, 36, 40, 43, 74]), KeyRange { start: 23, end: 79 });
    }

    #[test]
    fn test_clamped_to_keyboard() {
        assert_eq!(range(&[21, 108]), KeyRange { start: 21, end: 108 });
        let low = range(&[24, 36, 40, 43]);
        assert_eq!(low, KeyRange { start: 21, end: 51 });
        let high = range(&[105]);
        assert_eq!(high.end, 108);
    }

    #[test]
    fn test_white_key_span_rounds_up() {
        // 7 white keys need 12 semitones, 8 need ceil(96/7) = 14
        assert_eq!(keyboard_range(&[60], 7, 0).span(), 12);
        assert_eq!(keyboard_range(&[60], 8, 0).span(), 14);
    }

    #[test]
    fn test_extreme_arguments_saturate() {
        assert_eq!(keyboard_range(&[60], u32::MAX, 0), keyboard_range(&[60], WHITE_KEYS, 0));
        assert_eq!(keyboard_range(&[60], WHITE_KEYS, 0), KeyRange { start: 21, end: 105 });
        assert_eq!(keyboard_range(&[i32::MAX], 20, 5), KeyRange { start: 108, end: 108 });
        assert_eq!(keyboard_range(&[i32::MIN, i32::MAX], 20, i32::MAX), KeyRange { start: 21, end: 108 });
    }
}
