//! Playback session: timers, shared state and the public control surface.
//!
//! One `PlayerSession` exists per viewing session and exclusively owns the
//! two tracks and the playback state. The periodic work (position polling,
//! drift correction) runs as tokio tasks that are spawned on play and torn
//! down on pause, so nothing ticks while the player is idle. Every task
//! locks the one shared controller, which means callbacks always observe
//! the latest state and a language switch completes before the next poll
//! tick can read a position.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

use crate::config::PlayerConfig;
use crate::keys::KeyCommand;
use crate::observer::{PlaybackObserver, StateReporter};
use crate::player::{PlaybackController, PlaybackState};
use crate::segment::{Language, Segment};
use crate::track::MediaTrack;

/// A running playback session over two language tracks.
pub struct PlayerSession {
    id: Uuid,
    controller: Arc<Mutex<PlaybackController>>,
    reporter: Arc<StateReporter>,
    poll_task: Option<JoinHandle<()>>,
    drift_task: Option<JoinHandle<()>>,
    poll_interval: Duration,
    drift_interval: Duration,
}

impl PlayerSession {
    /// Bind the two tracks and the segment list into a new session.
    pub fn new(
        original: Box<dyn MediaTrack>,
        translated: Box<dyn MediaTrack>,
        segments: Vec<Segment>,
        config: PlayerConfig,
    ) -> Self {
        let id = Uuid::new_v4();
        let poll_interval = Duration::from_millis(config.poll_interval_ms.max(1));
        let drift_interval = Duration::from_millis(config.drift_interval_ms.max(1));
        let controller = PlaybackController::new(original, translated, segments, config);
        log::info!("playback session {} created", id);
        Self {
            id,
            controller: Arc::new(Mutex::new(controller)),
            reporter: Arc::new(StateReporter::new()),
            poll_task: None,
            drift_task: None,
            poll_interval,
            drift_interval,
        }
    }

    /// Session identifier, for logs and host bookkeeping.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlaybackState {
        self.controller.lock().state()
    }

    /// Index of the segment to highlight right now.
    pub fn active_subtitle(&self) -> Option<usize> {
        self.controller.lock().active_subtitle()
    }

    /// Register an observer for state snapshots.
    pub fn add_observer(&self, observer: Box<dyn PlaybackObserver>) -> usize {
        self.reporter.add_observer(observer)
    }

    /// Remove a previously registered observer.
    pub fn remove_observer(&self, id: usize) {
        self.reporter.remove_observer(id);
    }

    /// Start playback and the periodic tasks.
    pub fn play(&mut self) {
        let state = {
            let mut controller = self.controller.lock();
            controller.play();
            controller.state()
        };
        self.reporter.notify(&state);
        self.stop_timers();
        self.start_timers();
    }

    /// Pause playback and cancel the periodic tasks.
    pub fn pause(&mut self) {
        self.stop_timers();
        let state = {
            let mut controller = self.controller.lock();
            controller.pause();
            controller.state()
        };
        self.reporter.notify(&state);
    }

    /// Flip between playing and paused. Returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        if self.state().is_playing {
            self.pause();
            false
        } else {
            self.play();
            true
        }
    }

    /// Seek the active track, clamped to the valid range.
    pub fn seek(&mut self, time: f64) {
        let state = {
            let mut controller = self.controller.lock();
            controller.seek(time);
            controller.state()
        };
        self.reporter.notify(&state);
    }

    /// Switch the audible language, carrying the position across timelines.
    pub fn switch_language(&mut self, language: Language) {
        let state = {
            let mut controller = self.controller.lock();
            controller.switch_language(language);
            controller.state()
        };
        self.reporter.notify(&state);
    }

    /// Set the audible volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        let state = {
            let mut controller = self.controller.lock();
            controller.set_volume(volume);
            controller.state()
        };
        self.reporter.notify(&state);
    }

    /// Apply a keyboard command.
    pub fn apply_key(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::TogglePlay => {
                self.toggle_play();
            }
            KeyCommand::ToggleLanguage => {
                let next = self.state().active_language.other();
                self.switch_language(next);
            }
            KeyCommand::SeekBack => {
                let (time, step) = {
                    let controller = self.controller.lock();
                    (controller.state().current_time, controller.seek_step())
                };
                self.seek(time - step);
            }
            KeyCommand::SeekForward => {
                let (time, step) = {
                    let controller = self.controller.lock();
                    (controller.state().current_time, controller.seek_step())
                };
                self.seek(time + step);
            }
        }
    }

    /// Tear the session down: cancel timers and stop both tracks.
    pub fn close(&mut self) {
        self.stop_timers();
        let state = {
            let mut controller = self.controller.lock();
            controller.stop();
            controller.state()
        };
        self.reporter.notify(&state);
        log::info!("playback session {} closed", self.id);
    }

    fn start_timers(&mut self) {
        let controller = Arc::clone(&self.controller);
        let reporter = Arc::clone(&self.reporter);
        let period = self.poll_interval;
        self.poll_task = Some(tokio::spawn(async move {
            let mut cadence = tokio::time::interval(period);
            cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                cadence.tick().await;
                let state = {
                    let mut controller = controller.lock();
                    controller.poll_tick();
                    controller.state()
                };
                reporter.notify(&state);
                if !state.is_playing {
                    break;
                }
            }
        }));

        let controller = Arc::clone(&self.controller);
        let period = self.drift_interval;
        self.drift_task = Some(tokio::spawn(async move {
            let mut cadence = tokio::time::interval(period);
            cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                cadence.tick().await;
                let playing = {
                    let mut controller = controller.lock();
                    controller.drift_tick();
                    controller.state().is_playing
                };
                if !playing {
                    break;
                }
            }
        }));
    }

    fn stop_timers(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
        if let Some(task) = self.drift_task.take() {
            task.abort();
        }
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.stop_timers();
        self.controller.lock().stop();
    }
}
