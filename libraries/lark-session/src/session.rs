//! Playback session controller
//!
//! The transport-command handler. Receives fire-and-forget commands from a
//! control surface, mediates between the queue and the engine adapter, and
//! fans resulting state changes out to observers and the lifecycle
//! coordinator. All session state lives on one serialized context; the
//! host must issue commands and [`pump_engine_events`] from that context.
//!
//! [`pump_engine_events`]: PlaybackSession::pump_engine_events

use crate::adapter::{AdapterEvent, PlaybackEngineAdapter};
use crate::catalog::CatalogLookup;
use crate::engine::EngineFactory;
use crate::error::{Result, SessionError};
use crate::lifecycle::{PresentationSink, ServiceControl, ServiceLifecycleCoordinator};
use crate::observers::{ObserverHandle, ObserverRegistry, SessionObserver};
use crate::queue::SessionQueue;
use crate::types::{ActionSet, PlaybackState, PreparedMedia, QueueItem, SessionConfig};

/// The long-lived controller coordinating one logical playback stream
pub struct PlaybackSession {
    config: SessionConfig,
    queue: SessionQueue,
    adapter: PlaybackEngineAdapter,
    catalog: Box<dyn CatalogLookup>,
    observers: ObserverRegistry,
    lifecycle: ServiceLifecycleCoordinator,

    /// Catalog-resolved metadata for the item at the cursor
    prepared: Option<PreparedMedia>,

    /// True once prepare has set a current item; cleared by stop
    active: bool,
}

impl PlaybackSession {
    /// Create a session around the injected capabilities
    pub fn new(
        config: SessionConfig,
        engine_factory: Box<dyn EngineFactory>,
        catalog: Box<dyn CatalogLookup>,
        presentation: Box<dyn PresentationSink>,
        service: Box<dyn ServiceControl>,
    ) -> Self {
        let adapter = PlaybackEngineAdapter::new(engine_factory, config.volume);
        Self {
            config,
            queue: SessionQueue::new(),
            adapter,
            catalog,
            observers: ObserverRegistry::new(),
            lifecycle: ServiceLifecycleCoordinator::new(presentation, service),
            prepared: None,
            active: false,
        }
    }

    // ===== Transport Commands =====

    /// Resolve metadata for the current queue item and activate the session
    ///
    /// No-op when the queue is empty. On a catalog miss the prepared
    /// metadata stays unset and the active flag unchanged; the session
    /// never partially activates.
    pub fn prepare(&mut self) -> Result<()> {
        let Some(item) = self.queue.current() else {
            // nothing to play
            return Ok(());
        };

        let media = self.catalog.resolve(&item.id)?;
        self.prepared = Some(media.clone());
        self.observers.broadcast_metadata(Some(&media));

        if !self.active {
            self.active = true;
            tracing::debug!("session active");
        }
        Ok(())
    }

    /// Start or resume playback of the current queue item
    ///
    /// Silently ignored when the queue is empty; transport buttons may be
    /// pressed before anything is queued. Prepares on demand.
    pub fn play(&mut self) -> Result<()> {
        if self.queue.is_empty() {
            tracing::debug!("play requested with an empty queue, ignoring");
            return Ok(());
        }

        if self.prepared.is_none() {
            self.prepare()?;
        }
        let Some(media) = self.prepared.clone() else {
            return Ok(());
        };

        let result = self.adapter.play_media(media);
        self.flush_adapter_events();
        result
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.adapter.pause();
        self.flush_adapter_events();
    }

    /// Stop playback and deactivate the session
    pub fn stop(&mut self) {
        self.adapter.stop();
        self.active = false;
        self.flush_adapter_events();
    }

    /// Reposition within the current item
    pub fn seek_to(&mut self, position_ms: u64) {
        self.adapter.seek_to(position_ms);
        self.flush_adapter_events();
    }

    /// Set render volume (0.0-1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.adapter.set_volume(volume);
    }

    /// Skip to the next queue item and keep playing
    ///
    /// No-op when the queue is empty (nothing to skip to).
    pub fn skip_next(&mut self) -> Result<()> {
        match self.queue.advance() {
            Ok(()) => {
                self.prepared = None;
                self.play()
            }
            Err(SessionError::QueueEmpty) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Skip to the previous queue item and keep playing
    ///
    /// No-op when the queue is empty.
    pub fn skip_previous(&mut self) -> Result<()> {
        match self.queue.retreat() {
            Ok(()) => {
                self.prepared = None;
                self.play()
            }
            Err(SessionError::QueueEmpty) => Ok(()),
            Err(err) => Err(err),
        }
    }

    // ===== Queue Commands =====

    /// Append an item to the queue and publish the new contents
    pub fn add_queue_item(&mut self, item: QueueItem) {
        self.queue.add_item(item);
        self.observers.broadcast_queue(self.queue.items());
    }

    /// Remove the first item with the given identifier and publish
    ///
    /// Removing the item the session has prepared also invalidates the
    /// prepared metadata; it no longer corresponds to any queue entry.
    pub fn remove_queue_item(&mut self, item_id: &str) {
        match self.queue.remove_item(item_id) {
            Some(removed) => {
                if self
                    .prepared
                    .as_ref()
                    .is_some_and(|media| media.id == removed.id)
                {
                    self.prepared = None;
                }
                self.observers.broadcast_queue(self.queue.items());
            }
            None => tracing::debug!("remove requested for unknown item {item_id}"),
        }
    }

    // ===== Observers =====

    /// Register an observer; the last known view is replayed to it
    /// synchronously before this returns
    pub fn register_observer(&mut self, observer: Box<dyn SessionObserver>) -> ObserverHandle {
        self.observers.register(observer)
    }

    /// Remove a previously registered observer
    pub fn deregister_observer(&mut self, handle: ObserverHandle) -> bool {
        self.observers.deregister(handle)
    }

    // ===== Engine Notifications =====

    /// Drain asynchronous engine notices and fan out the resulting
    /// transitions
    ///
    /// Engine callbacks arrive on engine-owned threads; the host must call
    /// this from the same serialized context that issues transport
    /// commands.
    pub fn pump_engine_events(&mut self) {
        self.adapter.pump_notices();
        self.flush_adapter_events();
    }

    // ===== Teardown =====

    /// Tear the session down
    ///
    /// Stops the engine and relaxes every observer to a neutral view.
    pub fn shutdown(&mut self) {
        self.adapter.stop();
        self.active = false;
        self.flush_adapter_events();
        self.observers.reset_all();
    }

    // ===== Accessors =====

    /// Current playback state snapshot
    pub fn state(&self) -> PlaybackState {
        self.adapter.state()
    }

    /// Legal transport actions for the current state
    pub fn available_actions(&self) -> ActionSet {
        self.adapter.available_actions()
    }

    /// Whether the session is visible to the outside world
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The queue and its cursor
    pub fn queue(&self) -> &SessionQueue {
        &self.queue
    }

    /// Catalog-resolved metadata for the current item, if prepared
    pub fn prepared_media(&self) -> Option<&PreparedMedia> {
        self.prepared.as_ref()
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn flush_adapter_events(&mut self) {
        for event in self.adapter.drain_events() {
            match event {
                AdapterEvent::StateChanged(state) => {
                    self.observers.broadcast_state(state);
                    self.lifecycle
                        .on_state_changed(self.adapter.current_media(), &state);
                }
                AdapterEvent::Completed { item_id } => {
                    tracing::debug!("item {item_id} played to completion");
                }
            }
        }
    }
}
