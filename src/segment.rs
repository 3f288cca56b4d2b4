//! Bilingual time-aligned segments.
//!
//! A segment is one unit of speech carrying text in both languages and
//! timing on the primary (original) timeline, plus optional timing on the
//! secondary (translated) timeline. Secondary timing may be missing on some
//! or all segments; consumers fall back to primary timing per segment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, Result};

/// Language tag for the two audio tracks and their timelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The source recording and its timeline (primary)
    Original,
    /// The synthesized translation and its timeline (secondary)
    Translated,
}

impl Language {
    /// The opposite language.
    pub fn other(self) -> Self {
        match self {
            Self::Original => Self::Translated,
            Self::Translated => Self::Original,
        }
    }

    /// String form used in logs and resource names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Translated => "translated",
        }
    }
}

/// One speech segment with per-language text and timing, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Start on the primary timeline
    pub start: f64,
    /// End on the primary timeline
    pub end: f64,
    /// Duration on the primary timeline
    pub duration: f64,
    /// Diarized speaker label
    pub speaker: String,
    /// Text in the original language
    pub text_primary: String,
    /// Text in the translated language
    pub text_secondary: String,
    /// Start on the secondary timeline, if the pipeline produced one
    #[serde(default)]
    pub start_secondary: Option<f64>,
    /// End on the secondary timeline
    #[serde(default)]
    pub end_secondary: Option<f64>,
    /// Duration on the secondary timeline
    #[serde(default)]
    pub duration_secondary: Option<f64>,
}

impl Segment {
    /// Whether this segment carries usable secondary-timeline timing.
    pub fn has_secondary_timing(&self) -> bool {
        self.start_secondary.is_some() && self.end_secondary.is_some()
    }

    /// Segment start on the given language's timeline.
    ///
    /// Falls back to primary timing when secondary timing is absent.
    pub fn start_in(&self, language: Language) -> f64 {
        match language {
            Language::Original => self.start,
            Language::Translated => self.start_secondary.unwrap_or(self.start),
        }
    }

    /// Segment end on the given language's timeline.
    pub fn end_in(&self, language: Language) -> f64 {
        match language {
            Language::Original => self.end,
            Language::Translated => self.end_secondary.unwrap_or(self.end),
        }
    }
}

/// Whether any segment carries secondary timing.
///
/// When none does, timeline mapping degrades to identity.
pub fn has_secondary_timeline(segments: &[Segment]) -> bool {
    segments.iter().any(Segment::has_secondary_timing)
}

#[derive(Deserialize)]
struct Manifest {
    segments: Vec<Segment>,
}

/// Decode a segment manifest from JSON.
///
/// Accepts either a bare array of segments or an object with a `segments`
/// field, which is how the backend serves them.
pub fn segments_from_json(json: &str) -> Result<Vec<Segment>> {
    let segments = match serde_json::from_str::<Manifest>(json) {
        Ok(manifest) => manifest.segments,
        Err(_) => serde_json::from_str::<Vec<Segment>>(json)
            .map_err(|e| PlayerError::SegmentManifest(e.to_string()))?,
    };
    warn_on_disorder(&segments);
    Ok(segments)
}

/// Read and decode a segment manifest file.
pub fn segments_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Segment>> {
    let data = std::fs::read_to_string(path)?;
    segments_from_json(&data)
}

/// Log ordering violations without rejecting the manifest.
///
/// Malformed timing degrades mapping quality but is never fatal.
fn warn_on_disorder(segments: &[Segment]) {
    for language in [Language::Original, Language::Translated] {
        let mut previous_end: Option<f64> = None;
        for (i, seg) in segments.iter().enumerate() {
            let start = seg.start_in(language);
            let end = seg.end_in(language);
            if start > end {
                log::warn!(
                    "segment {} has inverted {} timing: {:.3} > {:.3}",
                    i,
                    language.as_str(),
                    start,
                    end
                );
            }
            if let Some(prev) = previous_end {
                if start < prev {
                    log::warn!(
                        "segment {} overlaps its predecessor on the {} timeline",
                        i,
                        language.as_str()
                    );
                }
            }
            previous_end = Some(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {"start": 0.0, "end": 5.0, "duration": 5.0, "speaker": "SPEAKER_00",
             "text_primary": "Hello", "text_secondary": "Hola",
             "start_secondary": 0.0, "end_secondary": 8.0, "duration_secondary": 8.0}
        ]"#;
        let segments = segments_from_json(json).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(segments[0].has_secondary_timing());
        assert_eq!(segments[0].end_in(Language::Translated), 8.0);
    }

    #[test]
    fn test_parse_manifest_object() {
        let json = r#"{"segments": [
            {"start": 1.0, "end": 2.0, "duration": 1.0, "speaker": "SPEAKER_01",
             "text_primary": "Hi", "text_secondary": "Buenas"}
        ]}"#;
        let segments = segments_from_json(json).unwrap();
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].has_secondary_timing());
        // Missing secondary timing falls back to primary
        assert_eq!(segments[0].start_in(Language::Translated), 1.0);
        assert_eq!(segments[0].end_in(Language::Translated), 2.0);
    }

    #[test]
    fn test_invalid_manifest() {
        assert!(segments_from_json("not json").is_err());
        assert!(segments_from_json(r#"{"jobs": []}"#).is_err());
    }

    #[test]
    fn test_secondary_timeline_detection() {
        let mut segments = segments_from_json(
            r#"[{"start": 0.0, "end": 1.0, "duration": 1.0, "speaker": "S",
                 "text_primary": "a", "text_secondary": "b"}]"#,
        )
        .unwrap();
        assert!(!has_secondary_timeline(&segments));

        segments[0].start_secondary = Some(0.0);
        segments[0].end_secondary = Some(1.5);
        assert!(has_secondary_timeline(&segments));
    }
}
