//! dubplay: playback synchronization engine for bilingual spoken-word audio.
//!
//! A translated recording exists as two tracks, an original-language one and
//! a translated one, whose speech segments differ in duration. This library
//! keeps one coherent playback position across the two diverging timelines
//! and exposes a small control surface over it: play/pause, seek, language
//! switching and volume, plus an active-subtitle index for highlighting.
//!
//! Audio decoding and transport stay with the host platform behind the
//! [`MediaTrack`] trait; the engine consumes two tracks and a list of
//! time-aligned [`Segment`]s and owns everything in between.

pub mod config;
pub mod error;
pub mod keys;
pub mod observer;
pub mod player;
pub mod segment;
pub mod session;
pub mod timeline;
pub mod track;

pub use config::PlayerConfig;
pub use error::{PlayerError, Result};
pub use keys::{command_for_code, KeyCommand};
pub use observer::{PlaybackObserver, StateReporter};
pub use player::{PlaybackController, PlaybackState};
pub use segment::{
    has_secondary_timeline, segments_from_file, segments_from_json, Language, Segment,
};
pub use session::PlayerSession;
pub use timeline::{active_index, map_position};
pub use track::{MediaTrack, SimTrack, TrackManager};
