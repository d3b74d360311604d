//! Core types for session management

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A queued playable unit
///
/// Identity is by `id`; two items with the same identifier are the same
/// queue entry for removal purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Opaque item identifier from the catalog
    pub id: String,

    /// Display title
    pub title: String,

    /// Display artist
    pub artist: String,

    /// Artwork reference (optional)
    pub artwork: Option<String>,

    /// Source locator handed to the rendering engine
    pub source: String,
}

/// Catalog-resolved metadata for the item at the queue cursor
///
/// Created lazily on `prepare`, invalidated whenever the cursor moves.
/// The catalog copy is authoritative; it may differ from the descriptor
/// the control surface queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedMedia {
    /// Item identifier this metadata was resolved for
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork reference (optional)
    pub artwork: Option<String>,

    /// Source locator handed to the rendering engine
    pub source: String,
}

/// Coarse playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No engine instance, nothing audible
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-item
    Paused,
}

/// Full playback state snapshot
///
/// Owned exclusively by the engine adapter; everything else only reads it.
/// Carries a monotonic timestamp, so it is deliberately not serializable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Coarse status
    pub status: PlaybackStatus,

    /// Last reported position in milliseconds
    pub position_ms: u64,

    /// Playback rate (1.0 while playing, 0.0 otherwise)
    pub rate: f32,

    /// When this snapshot was computed
    pub updated_at: Instant,
}

impl PlaybackState {
    /// Initial state before any engine activity
    pub fn stopped() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            position_ms: 0,
            rate: 0.0,
            updated_at: Instant::now(),
        }
    }
}

/// A transport action a control surface may issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportAction {
    /// Start or resume playback
    Play,

    /// Pause playback
    Pause,

    /// Stop playback and release the engine
    Stop,

    /// Reposition within the current item
    SeekTo,

    /// Advance to the next queue item
    SkipNext,

    /// Go back to the previous queue item
    SkipPrevious,

    /// Start playback of a specific catalog item
    PlayFromId,

    /// Start playback from a search query
    PlayFromSearch,
}

impl TransportAction {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Compact set of legal transport actions
///
/// A pure function of [`PlaybackState`]; recomputed on every state change
/// and never stored independently of the state it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionSet(u8);

impl ActionSet {
    /// Set containing no actions
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set containing every transport action
    pub const fn all() -> Self {
        Self(0xff)
    }

    /// Return this set with `action` added
    #[must_use]
    pub const fn with(self, action: TransportAction) -> Self {
        Self(self.0 | action.bit())
    }

    /// Check whether `action` is legal
    pub const fn contains(self, action: TransportAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// Check whether the set is empty
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Volume applied to each freshly created engine (0.0-1.0, default: 1.0)
    pub volume: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}
