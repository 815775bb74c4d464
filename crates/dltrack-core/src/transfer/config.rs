//! Per-invocation transfer configuration.
//!
//! A `TransferConfig` is built once per registration and shared immutably
//! (`Arc<TransferConfig>`) with every transfer that registration claims.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{TransferError, TransferResult};
use super::types::{CompletedDownload, Progress};
use crate::ports::TransferItem;

/// Default title for the modal error signal.
pub const DEFAULT_ERROR_TITLE: &str = "Download Error";

/// Default interruption template. `{filename}` is replaced by the base name
/// of the destination.
pub const DEFAULT_ERROR_MESSAGE: &str = "The download of {filename} was interrupted";

/// Callback receiving the host transfer handle.
pub type ItemCallback = Arc<dyn Fn(&dyn TransferItem) + Send + Sync>;

/// Callback receiving per-transfer or aggregate progress.
pub type ProgressCallback = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Callback receiving the completion summary.
pub type CompletedCallback = Arc<dyn Fn(&CompletedDownload) + Send + Sync>;

/// Options forwarded to the host's save dialog when `save_as` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDialogOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Suggested destination. Filled in by the registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
}

/// Configuration for one listener registration or one-shot download.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone)]
pub struct TransferConfig {
    /// Destination directory. `None` uses the host's downloads directory.
    /// Must be absolute when set.
    pub directory: Option<PathBuf>,
    /// Explicit filename. Wins over everything: no collision check, no dialog.
    pub filename: Option<String>,
    /// Keep the derived path even if a file already exists there.
    pub overwrite: bool,
    /// Let the user pick the destination in a save dialog.
    pub save_as: bool,
    /// Options for the save dialog.
    pub dialog_options: SaveDialogOptions,
    /// Title of the modal shown for interruption errors.
    pub error_title: String,
    /// Interruption message template.
    pub error_message: String,
    /// Show the active-transfer count as an app badge.
    pub show_badge: bool,
    /// Mirror aggregate progress in the window's progress bar.
    pub show_progress_bar: bool,
    /// Reveal the file in the file browser after completion.
    pub open_folder_when_done: bool,
    /// Detach the registration after its first terminal event.
    pub unregister_when_done: bool,
    pub on_started: Option<ItemCallback>,
    pub on_progress: Option<ProgressCallback>,
    pub on_total_progress: Option<ProgressCallback>,
    pub on_cancel: Option<ItemCallback>,
    pub on_completed: Option<CompletedCallback>,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename: None,
            overwrite: false,
            save_as: false,
            dialog_options: SaveDialogOptions::default(),
            error_title: DEFAULT_ERROR_TITLE.to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            show_badge: true,
            show_progress_bar: true,
            open_folder_when_done: false,
            unregister_when_done: false,
            on_started: None,
            on_progress: None,
            on_total_progress: None,
            on_cancel: None,
            on_completed: None,
        }
    }
}

impl fmt::Debug for TransferConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransferConfig")
            .field("directory", &self.directory)
            .field("filename", &self.filename)
            .field("overwrite", &self.overwrite)
            .field("save_as", &self.save_as)
            .field("dialog_options", &self.dialog_options)
            .field("error_title", &self.error_title)
            .field("error_message", &self.error_message)
            .field("show_badge", &self.show_badge)
            .field("show_progress_bar", &self.show_progress_bar)
            .field("open_folder_when_done", &self.open_folder_when_done)
            .field("unregister_when_done", &self.unregister_when_done)
            .field("on_started", &self.on_started.is_some())
            .field("on_progress", &self.on_progress.is_some())
            .field("on_total_progress", &self.on_total_progress.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .field("on_completed", &self.on_completed.is_some())
            .finish()
    }
}

impl TransferConfig {
    /// Create a config with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination directory.
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Set an explicit filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub const fn with_save_as(mut self, save_as: bool) -> Self {
        self.save_as = save_as;
        self
    }

    #[must_use]
    pub fn with_dialog_options(mut self, options: SaveDialogOptions) -> Self {
        self.dialog_options = options;
        self
    }

    #[must_use]
    pub fn with_error_title(mut self, title: impl Into<String>) -> Self {
        self.error_title = title.into();
        self
    }

    /// Set the interruption template; `{filename}` is substituted.
    #[must_use]
    pub fn with_error_message(mut self, template: impl Into<String>) -> Self {
        self.error_message = template.into();
        self
    }

    #[must_use]
    pub const fn with_show_badge(mut self, show: bool) -> Self {
        self.show_badge = show;
        self
    }

    #[must_use]
    pub const fn with_show_progress_bar(mut self, show: bool) -> Self {
        self.show_progress_bar = show;
        self
    }

    #[must_use]
    pub const fn with_open_folder_when_done(mut self, open: bool) -> Self {
        self.open_folder_when_done = open;
        self
    }

    #[must_use]
    pub const fn with_unregister_when_done(mut self, unregister: bool) -> Self {
        self.unregister_when_done = unregister;
        self
    }

    #[must_use]
    pub fn on_started(mut self, f: impl Fn(&dyn TransferItem) + Send + Sync + 'static) -> Self {
        self.on_started = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_progress(mut self, f: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_total_progress(mut self, f: impl Fn(&Progress) + Send + Sync + 'static) -> Self {
        self.on_total_progress = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, f: impl Fn(&dyn TransferItem) + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn on_completed(
        mut self,
        f: impl Fn(&CompletedDownload) + Send + Sync + 'static,
    ) -> Self {
        self.on_completed = Some(Arc::new(f));
        self
    }

    /// Reject configurations that must never reach a transfer.
    pub fn validate(&self) -> TransferResult<()> {
        if let Some(directory) = &self.directory {
            if !directory.is_absolute() {
                return Err(TransferError::invalid_directory(
                    directory.display().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// The directory transfers land in, falling back to `default`.
    #[must_use]
    pub fn resolve_directory(&self, default: &Path) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| default.to_path_buf())
    }

    /// Format the interruption template for `filename`.
    #[must_use]
    pub fn interrupted_message(&self, filename: &str) -> String {
        self.error_message.replace("{filename}", filename)
    }
}
