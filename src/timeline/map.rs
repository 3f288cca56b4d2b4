//! Position mapping between the two language timelines.

use crate::segment::{has_secondary_timeline, Language, Segment};

/// Map a playback position from one language's timeline to the other.
///
/// Inside a segment the position maps proportionally: spoken content is
/// assumed to stretch or compress uniformly. In gaps between segments the
/// boundary pairs are interpolated linearly. Before the first segment the
/// position scales toward the first segment's start; past the last segment
/// the overflow is preserved as a constant offset.
///
/// Total function: when the languages are equal, the segment list is empty,
/// or no segment carries secondary timing, the position is returned
/// unchanged.
pub fn map_position(position: f64, from: Language, to: Language, segments: &[Segment]) -> f64 {
    if from == to || segments.is_empty() {
        return position;
    }
    if !has_secondary_timeline(segments) {
        return position;
    }

    // Inside a segment: proportional remap. Boundary positions return the
    // opposite boundary exactly, without floating-point round trips.
    for seg in segments {
        let from_start = seg.start_in(from);
        let from_end = seg.end_in(from);
        if position >= from_start && position <= from_end {
            if position == from_start {
                return seg.start_in(to);
            }
            if position == from_end {
                return seg.end_in(to);
            }
            let span = from_end - from_start;
            let fraction = if span > 0.0 {
                (position - from_start) / span
            } else {
                0.0
            };
            let to_start = seg.start_in(to);
            return to_start + fraction * (seg.end_in(to) - to_start);
        }
    }

    // Before the first segment: scale proportionally in the leading gap.
    let first = &segments[0];
    let first_from = first.start_in(from);
    if position < first_from {
        if first_from > 0.0 {
            return position / first_from * first.start_in(to);
        }
        return position;
    }

    // Past the last segment: keep the overflow.
    let last = &segments[segments.len() - 1];
    let last_from_end = last.end_in(from);
    if position > last_from_end {
        return last.end_in(to) + (position - last_from_end);
    }

    // In a gap between two segments: interpolate between the boundary pairs.
    for pair in segments.windows(2) {
        let gap_from_start = pair[0].end_in(from);
        let gap_from_end = pair[1].start_in(from);
        if position >= gap_from_start && position <= gap_from_end {
            let span = gap_from_end - gap_from_start;
            let fraction = if span > 0.0 {
                (position - gap_from_start) / span
            } else {
                0.0
            };
            let gap_to_start = pair[0].end_in(to);
            return gap_to_start + fraction * (pair[1].start_in(to) - gap_to_start);
        }
    }

    position
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
            duration_secondary: start_secondary
                .zip(end_secondary)
                .map(|(s, e)| e - s),
        }
    }

    fn sample() -> Vec<Segment> {
        vec![
            seg(0.0, 5.0, Some(0.0), Some(8.0)),
            seg(6.0, 10.0, Some(9.0), Some(12.0)),
        ]
    }

    #[test]
    fn test_identity_same_language() {
        let segments = sample();
        for t in [0.0, 2.5, 5.5, 11.0, 100.0] {
            assert_eq!(
                map_position(t, Language::Original, Language::Original, &segments),
                t
            );
            assert_eq!(
                map_position(t, Language::Translated, Language::Translated, &segments),
                t
            );
        }
    }

    #[test]
    fn test_identity_without_segments() {
        assert_eq!(
            map_position(3.7, Language::Original, Language::Translated, &[]),
            3.7
        );
    }

    #[test]
    fn test_identity_without_secondary_timeline() {
        let segments = vec![seg(0.0, 5.0, None, None), seg(6.0, 10.0, None, None)];
        assert_eq!(
            map_position(2.5, Language::Original, Language::Translated, &segments),
            2.5
        );
    }

    #[test]
    fn test_proportional_within_segment() {
        let segments = sample();
        // Halfway through segment 0: 2.5/5 of 8 seconds
        assert_eq!(
            map_position(2.5, Language::Original, Language::Translated, &segments),
            4.0
        );
        // And back
        assert_eq!(
            map_position(4.0, Language::Translated, Language::Original, &segments),
            2.5
        );
    }

    #[test]
    fn test_gap_interpolation() {
        let segments = sample();
        // Mid-gap between 5..6 maps midway between 8 and 9
        assert_eq!(
            map_position(5.5, Language::Original, Language::Translated, &segments),
            8.5
        );
    }

    #[test]
    fn test_overflow_past_last_segment() {
        let segments = sample();
        // One second past the last primary end carries over past 12
        assert_eq!(
            map_position(11.0, Language::Original, Language::Translated, &segments),
            13.0
        );
    }

    #[test]
    fn test_boundary_exactness() {
        let segments = vec![
            seg(0.1, 5.3, Some(0.2), Some(8.7)),
            seg(6.1, 10.9, Some(9.3), Some(12.1)),
        ];
        for s in &segments {
            assert_eq!(
                map_position(s.start, Language::Original, Language::Translated, &segments),
                s.start_secondary.unwrap()
            );
            assert_eq!(
                map_position(s.end, Language::Original, Language::Translated, &segments),
                s.end_secondary.unwrap()
            );
            assert_eq!(
                map_position(
                    s.start_secondary.unwrap(),
                    Language::Translated,
                    Language::Original,
                    &segments
                ),
                s.start
            );
            assert_eq!(
                map_position(
                    s.end_secondary.unwrap(),
                    Language::Translated,
                    Language::Original,
                    &segments
                ),
                s.end
            );
        }
    }

    #[test]
    fn test_leading_gap_scales() {
        let segments = vec![seg(2.0, 4.0, Some(1.0), Some(5.0))];
        // Halfway to the first segment start maps halfway to its counterpart
        assert_eq!(
            map_position(1.0, Language::Original, Language::Translated, &segments),
            0.5
        );
    }

    #[test]
    fn test_leading_gap_at_zero_start() {
        let segments = vec![seg(0.0, 4.0, Some(0.0), Some(5.0))];
        assert_eq!(
            map_position(-0.5, Language::Original, Language::Translated, &segments),
            -0.5
        );
    }

    #[test]
    fn test_zero_duration_segment() {
        let segments = vec![seg(3.0, 3.0, Some(4.0), Some(6.0))];
        // Zero-length source span pins to the target start
        assert_eq!(
            map_position(3.0, Language::Original, Language::Translated, &segments),
            4.0
        );
    }

    #[test]
    fn test_mixed_secondary_timing_falls_back_per_segment() {
        // Second segment lost its secondary timing; it maps through its
        // primary values while the first still remaps.
        let segments = vec![seg(0.0, 4.0, Some(0.0), Some(8.0)), seg(5.0, 7.0, None, None)];
        assert_eq!(
            map_position(2.0, Language::Original, Language::Translated, &segments),
            4.0
        );
        assert_eq!(
            map_position(6.0, Language::Original, Language::Translated, &segments),
            6.0
        );
    }
}
