//! A simulated media track.
//!
//! Stands in for the platform audio element in tests and demos. Time only
//! advances when the owner calls [`SimTrack::advance`], which makes timing
//! behavior fully deterministic. The track is a cheap handle around shared
//! state, so a clone kept outside the engine can drive and inspect the same
//! track the engine controls.

use std::sync::Arc;

use parking_lot::Mutex;

use super::MediaTrack;

#[derive(Debug)]
struct SimTrackState {
    position: f64,
    volume: f32,
    duration: Option<f64>,
    playing: bool,
    ended: bool,
}

/// Deterministic in-memory implementation of [`MediaTrack`].
#[derive(Debug, Clone)]
pub struct SimTrack {
    state: Arc<Mutex<SimTrackState>>,
}

impl SimTrack {
    /// A track whose metadata is already resolved.
    pub fn new(duration: f64) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimTrackState {
                position: 0.0,
                volume: 1.0,
                duration: Some(duration),
                playing: false,
                ended: false,
            })),
        }
    }

    /// A track whose metadata has not loaded (or never will).
    pub fn unresolved() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimTrackState {
                position: 0.0,
                volume: 1.0,
                duration: None,
                playing: false,
                ended: false,
            })),
        }
    }

    /// Resolve the track's metadata after construction.
    pub fn resolve_duration(&self, duration: f64) {
        self.state.lock().duration = Some(duration);
    }

    /// Advance simulated time. Only moves the position while playing, and
    /// stops at the end of the resource once the duration is known.
    pub fn advance(&self, dt: f64) {
        let mut state = self.state.lock();
        if !state.playing {
            return;
        }
        state.position += dt;
        if let Some(duration) = state.duration {
            if state.position >= duration {
                state.position = duration;
                state.playing = false;
                state.ended = true;
            }
        }
    }

    /// Whether the track is currently advancing.
    pub fn is_playing(&self) -> bool {
        self.state.lock().playing
    }
}

impl MediaTrack for SimTrack {
    fn play(&mut self) {
        let mut state = self.state.lock();
        state.playing = true;
        state.ended = false;
    }

    fn pause(&mut self) {
        self.state.lock().playing = false;
    }

    fn position(&self) -> f64 {
        self.state.lock().position
    }

    fn set_position(&mut self, seconds: f64) {
        let mut state = self.state.lock();
        state.position = seconds.max(0.0);
        state.ended = false;
    }

    fn volume(&self) -> f32 {
        self.state.lock().volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.lock().volume = volume.clamp(0.0, 1.0);
    }

    fn duration(&self) -> Option<f64> {
        self.state.lock().duration
    }

    fn is_ended(&self) -> bool {
        self.state.lock().ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_only_while_playing() {
        let mut track = SimTrack::new(10.0);
        track.advance(1.0);
        assert_eq!(track.position(), 0.0);

        track.play();
        track.advance(1.5);
        assert_eq!(track.position(), 1.5);

        track.pause();
        track.advance(1.0);
        assert_eq!(track.position(), 1.5);
    }

    #[test]
    fn test_stops_at_end() {
        let mut track = SimTrack::new(2.0);
        track.play();
        track.advance(5.0);
        assert_eq!(track.position(), 2.0);
        assert!(track.is_ended());
        assert!(!track.is_playing());

        // Seeking back clears the ended flag
        track.set_position(0.5);
        assert!(!track.is_ended());
    }

    #[test]
    fn test_unresolved_metadata() {
        let mut track = SimTrack::unresolved();
        assert_eq!(track.duration(), None);
        track.play();
        track.advance(3.0);
        assert_eq!(track.position(), 3.0);
        assert!(!track.is_ended());

        track.resolve_duration(4.0);
        track.advance(2.0);
        assert!(track.is_ended());
    }

    #[test]
    fn test_handles_share_state() {
        let mut track = SimTrack::new(10.0);
        let handle = track.clone();
        track.set_volume(0.3);
        assert_eq!(handle.volume(), 0.3);
    }
}
