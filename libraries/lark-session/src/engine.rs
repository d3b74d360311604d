//! Platform-agnostic rendering engine traits
//!
//! Abstracts the low-level decoder/renderer for different platforms.
//! One engine instance renders exactly one loaded item; loading a
//! different item means releasing the instance and creating a fresh one.

use crate::error::Result;
use crossbeam_channel::Sender;

/// Asynchronous notification from a rendering engine
///
/// Engines deliver these from their own threads or callback queues via the
/// [`Sender`] handed to [`EngineFactory::create`]. The session drains them
/// on its serialized context; see `PlaybackSession::pump_engine_events`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineNotice {
    /// The loaded item reached natural end-of-media
    Completed,

    /// An asynchronous load or render failure ended playback
    LoadFailed {
        /// Engine-provided failure description
        message: String,
    },
}

/// Platform-agnostic rendering engine instance
///
/// Implementors decode and render a single source. This trait allows the
/// engine adapter to work with different backends (Symphonia/cpal on
/// desktop, a native bridge on mobile, etc.) without knowing any of them.
pub trait PlaybackEngine: Send {
    /// Begin loading the given source
    ///
    /// Returns an error only for failures detectable synchronously; later
    /// failures arrive as [`EngineNotice::LoadFailed`].
    fn load(&mut self, source: &str) -> Result<()>;

    /// Start or suspend rendering once the source is ready
    fn set_play_when_ready(&mut self, play_when_ready: bool);

    /// Reposition within the loaded source
    fn seek_to(&mut self, position_ms: u64);

    /// Set render volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Current render position in milliseconds
    fn position_ms(&self) -> u64;

    /// Release all engine resources
    ///
    /// The instance is never used again after this call.
    fn release(&mut self);
}

/// Creates rendering engine instances
///
/// Called once per loaded item. The factory passes `notices` into the
/// engine so its asynchronous callbacks can reach the session.
pub trait EngineFactory: Send {
    /// Create a fresh engine instance wired to the given notice channel
    fn create(&mut self, notices: Sender<EngineNotice>) -> Box<dyn PlaybackEngine>;
}
