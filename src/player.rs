//! The playback controller: public operations over the two-track manager.

use std::sync::Arc;

use serde::Serialize;

use crate::config::PlayerConfig;
use crate::segment::{Language, Segment};
use crate::timeline::{active_index, map_position};
use crate::track::{MediaTrack, TrackManager};

/// Snapshot of the observable playback state.
///
/// `current_time` is always expressed on the active language's timeline and
/// `duration` is the active track's length. A duration of `0.0` means the
/// active track's metadata has not resolved yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub active_language: Language,
    pub volume: f32,
}

/// Composes the timeline mapper, subtitle indexer and track manager into
/// the play/pause/seek/switch/volume control surface.
///
/// All methods are synchronous: by the time a call returns, the state
/// snapshot and both tracks agree. The periodic work (`poll_tick`,
/// `drift_tick`) is driven externally by the session layer.
pub struct PlaybackController {
    tracks: TrackManager,
    segments: Arc<Vec<Segment>>,
    config: PlayerConfig,
    state: PlaybackState,
}

impl PlaybackController {
    /// Create a controller over the two tracks and the session's segments.
    pub fn new(
        original: Box<dyn MediaTrack>,
        translated: Box<dyn MediaTrack>,
        segments: Vec<Segment>,
        config: PlayerConfig,
    ) -> Self {
        let volume = config.default_volume.clamp(0.0, 1.0);
        let active = config.default_language;
        let tracks = TrackManager::new(original, translated, active, volume);
        let duration = tracks.duration(active).unwrap_or(0.0);
        Self {
            tracks,
            segments: Arc::new(segments),
            config,
            state: PlaybackState {
                is_playing: false,
                current_time: 0.0,
                duration,
                active_language: active,
                volume,
            },
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlaybackState {
        self.state.clone()
    }

    /// The session's segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Start playback.
    pub fn play(&mut self) {
        if self.state.is_playing {
            return;
        }
        self.tracks.play();
        self.state.is_playing = true;
        log::info!("playback started at {:.3}s", self.state.current_time);
    }

    /// Pause playback. Both tracks stop, not just the audible one.
    pub fn pause(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.tracks.pause();
        self.state.is_playing = false;
        log::info!("playback paused at {:.3}s", self.state.current_time);
    }

    /// Flip between playing and paused. Returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        if self.state.is_playing {
            self.pause();
        } else {
            self.play();
        }
        self.state.is_playing
    }

    /// Seek the active track. Out-of-range input clamps to `[0, duration]`;
    /// while the duration is unresolved only the lower bound applies.
    ///
    /// `current_time` updates synchronously so the UI does not wait for the
    /// next poll tick.
    pub fn seek(&mut self, time: f64) {
        let upper = if self.state.duration > 0.0 {
            self.state.duration
        } else {
            f64::INFINITY
        };
        let clamped = time.clamp(0.0, upper);
        self.tracks.seek(clamped);
        self.state.current_time = clamped;
    }

    /// Make `language` the audible track, carrying the playback position
    /// over to its timeline.
    ///
    /// The previous duration is retained while the new track's metadata is
    /// unresolved, so the UI never flashes a zero-length recording.
    pub fn switch_language(&mut self, language: Language) {
        if language == self.state.active_language {
            return;
        }
        let from = self.state.active_language;
        let mapped = map_position(self.tracks.position(), from, language, &self.segments);
        self.tracks.set_active(language, mapped);
        self.state.active_language = language;
        self.state.current_time = mapped;
        if let Some(duration) = self.tracks.duration(language) {
            self.state.duration = duration;
        }
    }

    /// Set the audible track's volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        let clamped = volume.clamp(0.0, 1.0);
        self.tracks.set_volume(clamped);
        self.state.volume = clamped;
    }

    /// One pass of the position-polling loop.
    ///
    /// Republishes the active track's position, picks up a late-resolving
    /// duration, and flips to paused when the active track ends. Does
    /// nothing while paused.
    pub fn poll_tick(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.state.current_time = self.tracks.position();
        // The published duration may still belong to the previous track
        // after a switch, or be the unresolved 0.0; once the active track's
        // metadata is in, its length wins.
        if let Some(duration) = self.tracks.duration(self.state.active_language) {
            self.state.duration = duration;
        }
        if self.tracks.is_ended() {
            log::info!("active track ended");
            self.pause();
        }
    }

    /// One pass of the drift-correction loop. Does nothing while paused.
    pub fn drift_tick(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.tracks.correct_drift(&self.segments, self.config.drift_threshold);
    }

    /// Index of the segment to highlight for the current position, on the
    /// active language's timeline.
    pub fn active_subtitle(&self) -> Option<usize> {
        active_index(
            self.state.current_time,
            self.state.active_language,
            &self.segments,
        )
    }

    /// Seek step configured for the keyboard commands.
    pub(crate) fn seek_step(&self) -> f64 {
        self.config.seek_step
    }

    /// Stop both tracks for teardown.
    pub fn stop(&mut self) {
        self.tracks.stop();
        self.state.is_playing = false;
    }
}
