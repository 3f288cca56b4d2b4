//! Two-track ownership and the single-audible-track invariant.

use crate::segment::{Language, Segment};
use crate::timeline::map_position;

use super::MediaTrack;

/// Owns the two language tracks and keeps exactly one of them audible.
///
/// Both tracks run together while playing so a language switch is
/// instantaneous; the inactive track is merely muted, and a periodic drift
/// pass keeps its position close to the mapped position of the active one.
pub struct TrackManager {
    original: Box<dyn MediaTrack>,
    translated: Box<dyn MediaTrack>,
    active: Language,
    volume: f32,
    playing: bool,
}

impl TrackManager {
    /// Bind the two tracks, muting all but the initially active one.
    pub fn new(
        original: Box<dyn MediaTrack>,
        translated: Box<dyn MediaTrack>,
        active: Language,
        volume: f32,
    ) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        let mut manager = Self {
            original,
            translated,
            active,
            volume,
            playing: false,
        };
        manager.track_mut(active).set_volume(volume);
        manager.track_mut(active.other()).set_volume(0.0);
        manager
    }

    fn track(&self, language: Language) -> &dyn MediaTrack {
        match language {
            Language::Original => self.original.as_ref(),
            Language::Translated => self.translated.as_ref(),
        }
    }

    fn track_mut(&mut self, language: Language) -> &mut dyn MediaTrack {
        match language {
            Language::Original => self.original.as_mut(),
            Language::Translated => self.translated.as_mut(),
        }
    }

    /// The currently audible language.
    pub fn active(&self) -> Language {
        self.active
    }

    /// Whether the manager last received `play` rather than `pause`.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position of the active track, which defines the session's
    /// `current_time`.
    pub fn position(&self) -> f64 {
        self.track(self.active).position()
    }

    /// Duration of the given language's track, once its metadata resolved.
    pub fn duration(&self, language: Language) -> Option<f64> {
        self.track(language).duration()
    }

    /// Requested volume of the audible track.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether the active track ran into the end of its resource.
    pub fn is_ended(&self) -> bool {
        self.track(self.active).is_ended()
    }

    /// Start both tracks.
    pub fn play(&mut self) {
        self.original.play();
        self.translated.play();
        self.playing = true;
    }

    /// Stop both tracks.
    pub fn pause(&mut self) {
        self.original.pause();
        self.translated.pause();
        self.playing = false;
    }

    /// Reposition the active track. The inactive track is left alone; the
    /// next drift pass pulls it back in line.
    pub fn seek(&mut self, position: f64) {
        let active = self.active;
        self.track_mut(active).set_position(position);
    }

    /// Apply a volume to the audible track. The inactive track stays muted.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        let active = self.active;
        let v = self.volume;
        self.track_mut(active).set_volume(v);
    }

    /// Make `language` the audible track, positioned at `position` (already
    /// mapped into that language's timeline).
    ///
    /// The target is positioned before any volume changes, so no caller ever
    /// observes two audible tracks or an audible track at a stale position.
    pub fn set_active(&mut self, language: Language, position: f64) {
        if language == self.active {
            return;
        }
        let previous = self.active;
        let volume = self.volume;
        self.track_mut(language).set_position(position);
        self.track_mut(previous).set_volume(0.0);
        self.track_mut(language).set_volume(volume);
        self.active = language;
        if self.playing {
            self.track_mut(language).play();
        }
        log::info!(
            "active track switched {} -> {} at {:.3}s",
            previous.as_str(),
            language.as_str(),
            position
        );
    }

    /// Pull the inactive track back to the mapped position of the active one
    /// when they have drifted apart by more than `threshold` seconds.
    ///
    /// The comparison goes through the timeline map because the two tracks
    /// live on different time axes whenever secondary timing exists.
    pub fn correct_drift(&mut self, segments: &[Segment], threshold: f64) {
        let inactive = self.active.other();
        let expected = map_position(self.position(), self.active, inactive, segments);
        let actual = self.track(inactive).position();
        let drift = (actual - expected).abs();
        if drift > threshold {
            log::debug!(
                "correcting {} track drift of {:.3}s",
                inactive.as_str(),
                drift
            );
            self.track_mut(inactive).set_position(expected);
        }
    }

    /// Stop both tracks for teardown.
    pub fn stop(&mut self) {
        self.pause();
    }
}
