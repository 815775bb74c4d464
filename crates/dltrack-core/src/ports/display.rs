//! Display intent port.
//!
//! The registry emits intents (badge count, progress bar, error dialog,
//! reveal-in-folder) and lets the host decide how to render them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::transfer::WindowId;

/// A request for the host's display layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayIntent {
    /// Show the number of active transfers as the app badge.
    BadgeCount {
        count: usize,
    },

    /// Set the window progress indicator to a fraction in `[0, 1]`.
    Progress {
        window: WindowId,
        fraction: f64,
    },

    /// Remove the window progress indicator.
    ClearProgress {
        window: WindowId,
    },

    /// Show a modal error.
    ErrorDialog {
        title: String,
        message: String,
    },

    /// Highlight a file in the platform file browser.
    RevealInFolder {
        path: PathBuf,
    },
}

impl DisplayIntent {
    /// Get the event name for wire protocols.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::BadgeCount { .. } => "display:badge",
            Self::Progress { .. } | Self::ClearProgress { .. } => "display:progress",
            Self::ErrorDialog { .. } => "display:error",
            Self::RevealInFolder { .. } => "display:reveal",
        }
    }
}

/// Port for emitting display intents.
///
/// Implementations should not block; the registry calls this from the
/// session event loop.
pub trait DisplayEmitterPort: Send + Sync {
    /// Emit a display intent.
    fn emit(&self, intent: DisplayIntent);

    /// Whether this platform can show an app badge.
    ///
    /// Badge intents are skipped when this returns `false`.
    fn supports_badge(&self) -> bool {
        true
    }
}

/// A display emitter that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopDisplayEmitter;

impl NoopDisplayEmitter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DisplayEmitterPort for NoopDisplayEmitter {
    fn emit(&self, _intent: DisplayIntent) {}
}
