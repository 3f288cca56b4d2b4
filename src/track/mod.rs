//! Audio tracks and the two-track manager.
//!
//! Decoding and transport belong to the host platform; the engine only
//! talks to tracks through the [`MediaTrack`] trait.

pub mod manager;
pub mod sim;

pub use manager::TrackManager;
pub use sim::SimTrack;

/// A playable media resource, as exposed by the platform playback primitive.
///
/// Durations resolve asynchronously: `duration` returns `None` until the
/// resource's metadata has loaded, and stays `None` forever if the resource
/// failed to load. Implementations must tolerate every operation in that
/// state by doing nothing; the engine never retries a failed resource.
pub trait MediaTrack: Send {
    /// Start or resume playback.
    fn play(&mut self);

    /// Pause playback, keeping the position.
    fn pause(&mut self);

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Move the playback position, in seconds.
    fn set_position(&mut self, seconds: f64);

    /// Current volume (0.0 - 1.0).
    fn volume(&self) -> f32;

    /// Set the volume (0.0 - 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Total duration in seconds, once metadata has resolved.
    fn duration(&self) -> Option<f64>;

    /// Whether playback ran into the end of the resource.
    fn is_ended(&self) -> bool {
        false
    }
}
