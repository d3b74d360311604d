//! Lark Player - Playback Session Management
//!
//! Platform-agnostic playback session management for Lark Player.
//!
//! This crate provides:
//! - An ordered playlist with a current-item cursor
//! - A playback state machine (stopped / playing / paused) layered on an
//!   injected rendering engine
//! - Derivation of the transport actions legal in each state
//! - Fan-out of state/metadata/queue changes to registered observers,
//!   with late-joiner replay
//! - Service lifecycle coordination (foreground/idle) for the hosting
//!   process
//!
//! # Architecture
//!
//! `lark-session` is completely platform-agnostic:
//! - No dependency on any audio backend
//! - No dependency on any UI or notification framework
//! - No dependency on a media database
//!
//! Platform-specific code (decoding/rendering, catalog lookup, foreground
//! presentation, process keep-alive) is provided via traits. All session
//! state lives on one serialized context; engine callbacks are marshaled
//! back onto it through [`PlaybackSession::pump_engine_events`].
//!
//! # Example: Driving a Session
//!
//! ```rust
//! use crossbeam_channel::Sender;
//! use lark_session::{
//!     CatalogLookup, EngineFactory, EngineNotice, PlaybackEngine, PlaybackSession,
//!     PlaybackState, PresentationSink, PreparedMedia, QueueItem, Result, ServiceControl,
//!     SessionConfig,
//! };
//!
//! // Implement the engine capability for your platform
//! struct SilentEngine;
//!
//! impl PlaybackEngine for SilentEngine {
//!     fn load(&mut self, _source: &str) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_play_when_ready(&mut self, _play_when_ready: bool) {}
//!     fn seek_to(&mut self, _position_ms: u64) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn position_ms(&self) -> u64 {
//!         0
//!     }
//!     fn release(&mut self) {}
//! }
//!
//! struct SilentFactory;
//!
//! impl EngineFactory for SilentFactory {
//!     fn create(&mut self, _notices: Sender<EngineNotice>) -> Box<dyn PlaybackEngine> {
//!         Box::new(SilentEngine)
//!     }
//! }
//!
//! struct OneSongCatalog;
//!
//! impl CatalogLookup for OneSongCatalog {
//!     fn resolve(&self, item_id: &str) -> Result<PreparedMedia> {
//!         Ok(PreparedMedia {
//!             id: item_id.to_string(),
//!             title: "My Song".to_string(),
//!             artist: "Artist Name".to_string(),
//!             artwork: None,
//!             source: "file:///music/song.mp3".to_string(),
//!         })
//!     }
//! }
//!
//! struct NoPresentation;
//!
//! impl PresentationSink for NoPresentation {
//!     fn show_foreground(&mut self, _media: Option<&PreparedMedia>, _state: &PlaybackState) {}
//!     fn update_foreground(&mut self, _media: Option<&PreparedMedia>, _state: &PlaybackState) {}
//!     fn dismiss(&mut self) {}
//! }
//!
//! struct NoService;
//!
//! impl ServiceControl for NoService {
//!     fn start(&mut self) {}
//!     fn shutdown(&mut self) {}
//! }
//!
//! let mut session = PlaybackSession::new(
//!     SessionConfig::default(),
//!     Box::new(SilentFactory),
//!     Box::new(OneSongCatalog),
//!     Box::new(NoPresentation),
//!     Box::new(NoService),
//! );
//!
//! session.add_queue_item(QueueItem {
//!     id: "song".to_string(),
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     artwork: None,
//!     source: "file:///music/song.mp3".to_string(),
//! });
//!
//! session.play().unwrap();
//! session.pause();
//! session.stop();
//! ```

mod adapter;
mod catalog;
mod engine;
mod error;
mod lifecycle;
mod observers;
mod queue;
mod session;
pub mod types;

// Public exports
pub use adapter::{AdapterEvent, PlaybackEngineAdapter};
pub use catalog::CatalogLookup;
pub use engine::{EngineFactory, EngineNotice, PlaybackEngine};
pub use error::{Result, SessionError};
pub use lifecycle::{PresentationSink, ServiceControl, ServiceLifecycleCoordinator};
pub use observers::{ObserverHandle, ObserverRegistry, SessionObserver};
pub use queue::SessionQueue;
pub use session::PlaybackSession;
pub use types::{
    ActionSet, PlaybackState, PlaybackStatus, PreparedMedia, QueueItem, SessionConfig,
    TransportAction,
};
