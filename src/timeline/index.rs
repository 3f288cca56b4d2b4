//! Active subtitle lookup.

use crate::segment::{Language, Segment};

/// Index of the segment to highlight for a position on a language timeline.
///
/// Returns the segment containing the position, or the nearest preceding
/// segment when the position falls in a gap. `None` when the position
/// precedes the first segment or the list is empty. Uses the same
/// per-language accessors as the timeline mapper, so segments without
/// secondary timing are looked up through their primary timing.
pub fn active_index(position: f64, language: Language, segments: &[Segment]) -> Option<usize> {
    for (i, seg) in segments.iter().enumerate() {
        if position >= seg.start_in(language) && position < seg.end_in(language) {
            return Some(i);
        }
    }

    // Between segments: highlight the closest one already spoken.
    for (i, seg) in segments.iter().enumerate() {
        if position < seg.start_in(language) {
            return if i > 0 { Some(i - 1) } else { None };
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(
        start: f64,
        end: f64,
        start_secondary: Option<f64>,
        end_secondary: Option<f64>,
    ) -> Segment {
        Segment {
            start,
            end,
            duration: end - start,
            speaker: "SPEAKER_00".to_string(),
            text_primary: String::new(),
            text_secondary: String::new(),
            start_secondary,
            end_secondary,
            duration_secondary: None,
        }
    }

    fn sample() -> Vec<Segment> {
        vec![
            seg(1.0, 5.0, Some(1.0), Some(8.0)),
            seg(6.0, 10.0, Some(9.0), Some(12.0)),
        ]
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(active_index(0.0, Language::Original, &[]), None);
        assert_eq!(active_index(42.0, Language::Translated, &[]), None);
    }

    #[test]
    fn test_before_first_segment() {
        let segments = sample();
        assert_eq!(active_index(0.5, Language::Original, &segments), None);
    }

    #[test]
    fn test_inside_segments() {
        let segments = sample();
        assert_eq!(active_index(1.0, Language::Original, &segments), Some(0));
        assert_eq!(active_index(4.9, Language::Original, &segments), Some(0));
        assert_eq!(active_index(7.0, Language::Original, &segments), Some(1));
    }

    #[test]
    fn test_end_is_exclusive() {
        let segments = sample();
        // Exactly at a segment end: already in the gap, previous stays lit
        assert_eq!(active_index(5.0, Language::Original, &segments), Some(0));
    }

    #[test]
    fn test_gap_keeps_preceding_segment() {
        let segments = sample();
        assert_eq!(active_index(5.5, Language::Original, &segments), Some(0));
    }

    #[test]
    fn test_past_last_segment() {
        let segments = sample();
        assert_eq!(active_index(11.0, Language::Original, &segments), Some(1));
    }

    #[test]
    fn test_translated_timeline_lookup() {
        let segments = sample();
        // 8.5 is inside segment 1 on the primary axis but still in the gap
        // on the translated one
        assert_eq!(active_index(8.5, Language::Translated, &segments), Some(0));
        assert_eq!(active_index(9.5, Language::Translated, &segments), Some(1));
    }

    #[test]
    fn test_monotonic_over_sweep() {
        let segments = sample();
        let mut last = -1i64;
        let mut t = 0.0;
        while t < 12.0 {
            let index = active_index(t, Language::Original, &segments)
                .map(|i| i as i64)
                .unwrap_or(-1);
            assert!(index >= last, "index regressed at t={}", t);
            last = index;
            t += 0.25;
        }
    }
}
