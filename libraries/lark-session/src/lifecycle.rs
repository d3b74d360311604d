//! Service lifecycle coordination
//!
//! Decides when the hosting process must be in an active/foregrounded
//! mode versus idle, driven purely by playback state transitions. The
//! host's actual process primitives are injected as capabilities, keeping
//! the state machine host-agnostic.

use crate::types::{PlaybackState, PlaybackStatus, PreparedMedia};

/// Receives foreground presentation updates (e.g. an OS media notification)
pub trait PresentationSink: Send {
    /// Present the foreground view for an audibly playing session
    fn show_foreground(&mut self, media: Option<&PreparedMedia>, state: &PlaybackState);

    /// Refresh the presentation without changing foreground status
    fn update_foreground(&mut self, media: Option<&PreparedMedia>, state: &PlaybackState);

    /// Take the presentation down
    fn dismiss(&mut self);
}

/// Controls the hosting process's keep-alive state
pub trait ServiceControl: Send {
    /// Move the hosting process into its started/keep-alive mode
    fn start(&mut self);

    /// Request shutdown of the hosting process
    fn shutdown(&mut self);
}

/// Service status tracked by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceStatus {
    Idle,
    StartedForeground,
}

/// Reacts to broadcast state transitions with service/presentation actions
///
/// Playing demands a started, foregrounded process; Paused keeps the
/// process started but refreshes the presentation; Stopped tears
/// everything down.
pub struct ServiceLifecycleCoordinator {
    sink: Box<dyn PresentationSink>,
    service: Box<dyn ServiceControl>,
    status: ServiceStatus,
}

impl ServiceLifecycleCoordinator {
    /// Create a coordinator around the injected host capabilities
    pub fn new(sink: Box<dyn PresentationSink>, service: Box<dyn ServiceControl>) -> Self {
        Self {
            sink,
            service,
            status: ServiceStatus::Idle,
        }
    }

    /// React to a playback state transition
    pub fn on_state_changed(&mut self, media: Option<&PreparedMedia>, state: &PlaybackState) {
        match state.status {
            PlaybackStatus::Playing => {
                if self.status == ServiceStatus::Idle {
                    tracing::debug!("moving service to started state");
                    self.service.start();
                    self.status = ServiceStatus::StartedForeground;
                }
                // Every re-entry into Playing refreshes the presentation,
                // not just the first.
                self.sink.show_foreground(media, state);
            }
            PlaybackStatus::Paused => {
                if self.status == ServiceStatus::StartedForeground {
                    self.sink.update_foreground(media, state);
                }
            }
            PlaybackStatus::Stopped => {
                // Unconditional: a stop must always be able to tear down a
                // lingering presentation, even from Idle.
                tracing::debug!("moving service out of started state");
                self.sink.dismiss();
                self.service.shutdown();
                self.status = ServiceStatus::Idle;
            }
        }
    }

    /// Whether the service is currently in its started/foreground mode
    pub fn is_started(&self) -> bool {
        self.status == ServiceStatus::StartedForeground
    }
}
