//! Rendering engine adapter
//!
//! Drives [`PlaybackEngine`] instances and owns the playback state
//! snapshot. Translates the engine's asynchronous notices into the
//! session's vocabulary and detects same-item replay vs. item change on
//! each play request.

use crate::engine::{EngineFactory, EngineNotice, PlaybackEngine};
use crate::error::Result;
use crate::types::{ActionSet, PlaybackState, PlaybackStatus, PreparedMedia, TransportAction};
use crossbeam_channel::{Receiver, Sender};
use std::time::Instant;

/// Event produced by the adapter, drained by the session controller
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    /// Playback state changed (includes position re-reports after seek)
    StateChanged(PlaybackState),

    /// The loaded item reached natural end-of-media
    ///
    /// Raised in addition to the accompanying Paused state change.
    Completed {
        /// Identifier of the completed item
        item_id: String,
    },
}

/// Stateful wrapper around the external rendering engine
///
/// Owns the engine instance, the [`PlaybackState`] snapshot, and the
/// played-to-completion flag. Everything else reads state through
/// accessors and never mutates it.
pub struct PlaybackEngineAdapter {
    factory: Box<dyn EngineFactory>,
    engine: Option<Box<dyn PlaybackEngine>>,

    notice_tx: Sender<EngineNotice>,
    notice_rx: Receiver<EngineNotice>,

    state: PlaybackState,
    current: Option<PreparedMedia>,

    /// Forces a reload of the same item after stop or natural completion
    played_to_completion: bool,

    /// Mirrors the last play-when-ready value handed to the engine
    play_when_ready: bool,

    /// Volume applied to each freshly created engine
    default_volume: f32,

    pending: Vec<AdapterEvent>,
}

impl PlaybackEngineAdapter {
    /// Create a new adapter around the given engine factory
    pub fn new(factory: Box<dyn EngineFactory>, default_volume: f32) -> Self {
        let (notice_tx, notice_rx) = crossbeam_channel::unbounded();
        Self {
            factory,
            engine: None,
            notice_tx,
            notice_rx,
            state: PlaybackState::stopped(),
            current: None,
            played_to_completion: false,
            play_when_ready: false,
            default_volume,
            pending: Vec::new(),
        }
    }

    /// Load and play the given media
    ///
    /// If the item identifier is unchanged and the previous load was not
    /// played to completion, this only ensures Playing state without
    /// reloading. Otherwise the existing engine is released and a fresh
    /// instance loads the new source.
    pub fn play_media(&mut self, media: PreparedMedia) -> Result<()> {
        let same_item = self
            .current
            .as_ref()
            .is_some_and(|current| current.id == media.id);
        let mut media_changed = !same_item;
        if self.played_to_completion {
            // The engine for this item is gone even though the id matches;
            // force a reload instead of a resume-in-place.
            media_changed = true;
            self.played_to_completion = false;
        }

        if !media_changed {
            if !self.is_playing() {
                self.play();
            }
            return Ok(());
        }

        self.release_engine();

        let source = media.source.clone();
        self.current = Some(media);

        let mut engine = self.factory.create(self.notice_tx.clone());
        engine.set_volume(self.default_volume);
        if let Err(err) = engine.load(&source) {
            tracing::error!("failed to load {source}: {err}");
            // Report the failure as a stop so downstream consumers can
            // tear down; the controller does not retry.
            self.set_new_state(PlaybackStatus::Stopped);
            return Err(err);
        }
        self.engine = Some(engine);

        self.play();
        Ok(())
    }

    /// Resume rendering of the loaded item
    ///
    /// Legal only when an engine instance exists and is not already
    /// playing; otherwise a no-op.
    pub fn play(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if !self.play_when_ready {
                engine.set_play_when_ready(true);
                self.play_when_ready = true;
                self.set_new_state(PlaybackStatus::Playing);
            }
        }
    }

    /// Pause rendering
    ///
    /// Legal only while playing; otherwise a no-op.
    pub fn pause(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if self.play_when_ready {
                engine.set_play_when_ready(false);
                self.play_when_ready = false;
                self.set_new_state(PlaybackStatus::Paused);
            }
        }
    }

    /// Stop rendering and release the engine
    ///
    /// Always reports a Stopped transition, even when no engine was ever
    /// created, so the lifecycle coordinator can rely on a stop
    /// notification to tear down its presentation.
    pub fn stop(&mut self) {
        self.set_new_state(PlaybackStatus::Stopped);
        self.release_engine();
    }

    /// Reposition within the loaded item
    ///
    /// Re-reports the current state at the new position; does not force
    /// Playing. No-op when no engine instance exists.
    pub fn seek_to(&mut self, position_ms: u64) {
        if let Some(engine) = self.engine.as_mut() {
            engine.seek_to(position_ms);
            self.set_new_state(self.state.status);
        }
    }

    /// Set render volume
    ///
    /// No state-transition side effect. No-op when no engine instance
    /// exists.
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(engine) = self.engine.as_mut() {
            engine.set_volume(volume);
        }
    }

    /// Drain engine notices that arrived since the last call
    ///
    /// Must run on the session's serialized context; this is where
    /// engine-thread callbacks are marshaled into state transitions.
    pub fn pump_notices(&mut self) {
        let notices: Vec<EngineNotice> = self.notice_rx.try_iter().collect();
        for notice in notices {
            match notice {
                EngineNotice::Completed => {
                    // Paused over Stopped: Paused keeps resume and seek
                    // legal, Stopped would not.
                    self.played_to_completion = true;
                    if let Some(media) = self.current.as_ref() {
                        self.pending.push(AdapterEvent::Completed {
                            item_id: media.id.clone(),
                        });
                    }
                    self.set_new_state(PlaybackStatus::Paused);
                }
                EngineNotice::LoadFailed { message } => {
                    tracing::error!("engine reported load failure: {message}");
                    self.set_new_state(PlaybackStatus::Stopped);
                    self.release_engine();
                }
            }
        }
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<AdapterEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Legal transport actions for the current state
    pub fn available_actions(&self) -> ActionSet {
        let base = ActionSet::empty()
            .with(TransportAction::PlayFromId)
            .with(TransportAction::PlayFromSearch)
            .with(TransportAction::SkipNext)
            .with(TransportAction::SkipPrevious);

        match self.state.status {
            PlaybackStatus::Stopped => base
                .with(TransportAction::Play)
                .with(TransportAction::Pause),
            PlaybackStatus::Playing => base
                .with(TransportAction::Stop)
                .with(TransportAction::Pause)
                .with(TransportAction::SeekTo),
            PlaybackStatus::Paused => base
                .with(TransportAction::Play)
                .with(TransportAction::Stop),
        }
    }

    /// Current playback state snapshot
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Metadata of the currently loaded item
    pub fn current_media(&self) -> Option<&PreparedMedia> {
        self.current.as_ref()
    }

    /// Whether the engine is rendering
    pub fn is_playing(&self) -> bool {
        self.engine.is_some() && self.play_when_ready
    }

    fn release_engine(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.release();
        }
        self.play_when_ready = false;
    }

    fn set_new_state(&mut self, status: PlaybackStatus) {
        if status == PlaybackStatus::Stopped {
            self.played_to_completion = true;
        }

        let position_ms = self.engine.as_ref().map_or(0, |engine| engine.position_ms());
        let rate = if status == PlaybackStatus::Playing {
            1.0
        } else {
            0.0
        };

        self.state = PlaybackState {
            status,
            position_ms,
            rate,
            updated_at: Instant::now(),
        };
        self.pending.push(AdapterEvent::StateChanged(self.state));
    }
}
