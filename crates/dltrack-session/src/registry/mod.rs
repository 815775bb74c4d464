//! Transfer registry and per-transfer state machine.
//!
//! The registry owns the active set and the batch counters. Each transfer
//! moves `Active -> {Completed | Cancelled | Interrupted}` exactly once and
//! is dropped from the active set on that transition.
//!
//! All methods take `&mut self`: the session listener calls them from a
//! single task, in the order the host delivered the events, so no locking
//! happens here.

mod aggregate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use dltrack_core::{
    CompletedDownload, DisplayEmitterPort, DisplayIntent, PathProbe, Progress, Transfer,
    TransferConfig, TransferError, TransferId, TransferItem, TransferOutcome, TransferResult,
    WindowId, derive_filename, unique_path,
};

pub use aggregate::AggregateCounters;

/// What `on_progress` reported to callbacks and the display layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    pub transfer: Progress,
    pub total: Progress,
}

/// Resolution of a transfer that reached a terminal state.
pub struct TerminalReport {
    pub id: TransferId,
    pub outcome: TransferOutcome,
    /// Completed transfers resolve to their handle; everything else to the
    /// error the registration's result channel should see.
    pub result: TransferResult<Arc<dyn TransferItem>>,
    /// Whether this event emptied the active set.
    pub batch_finished: bool,
}

/// A transfer the registry is tracking.
struct ActiveTransfer {
    record: Transfer,
    item: Arc<dyn TransferItem>,
    config: Arc<TransferConfig>,
}

/// Session-scoped registry of in-flight transfers.
///
/// INVARIANT: `active` holds exactly the transfers whose state is `Active`.
/// Terminal paths MUST remove the entry.
pub struct Registry {
    active: IndexMap<TransferId, ActiveTransfer>,
    counters: AggregateCounters,
    display: Arc<dyn DisplayEmitterPort>,
    probe: Arc<dyn PathProbe>,
}

impl Registry {
    pub fn new(display: Arc<dyn DisplayEmitterPort>, probe: Arc<dyn PathProbe>) -> Self {
        Self {
            active: IndexMap::new(),
            counters: AggregateCounters::new(),
            display,
            probe,
        }
    }

    /// Number of active transfers.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: TransferId) -> bool {
        self.active.contains_key(&id)
    }

    /// The tracked record for an active transfer.
    pub fn get(&self, id: TransferId) -> Option<&Transfer> {
        self.active.get(&id).map(|entry| &entry.record)
    }

    pub const fn counters(&self) -> AggregateCounters {
        self.counters
    }

    /// Aggregate progress of the current batch.
    pub fn aggregate_progress(&self) -> Progress {
        self.counters.progress(self.active_received())
    }

    fn active_received(&self) -> u64 {
        self.active
            .values()
            .map(|entry| entry.record.received_bytes)
            .fold(0, u64::saturating_add)
    }

    /// Start tracking a transfer and decide where it is saved.
    ///
    /// Fails without touching any state when the configuration is invalid.
    pub fn register(
        &mut self,
        item: Arc<dyn TransferItem>,
        window: WindowId,
        config: Arc<TransferConfig>,
        default_dir: &Path,
    ) -> TransferResult<TransferId> {
        config.validate()?;

        let id = item.id();
        if self.active.contains_key(&id) {
            tracing::debug!(target: "dltrack.registry", %id, "Transfer already registered");
            return Ok(id);
        }

        let mut record = Transfer::new(
            id,
            window,
            item.url(),
            item.filename(),
            item.mime_type(),
            item.total_bytes(),
        );
        self.counters.add_expected(record.total_bytes);

        let destination = self.resolve_destination(&config, &record, default_dir);
        if config.save_as && config.filename.is_none() {
            let mut options = config.dialog_options.clone();
            options.default_path = Some(destination.clone());
            item.set_save_dialog_options(&options);
        } else {
            item.set_save_path(&destination);
            record.destination = Some(destination);
        }

        tracing::info!(
            target: "dltrack.registry",
            %id,
            url = %record.url,
            total_bytes = record.total_bytes,
            destination = ?record.destination,
            "Transfer registered"
        );

        self.active.insert(
            id,
            ActiveTransfer {
                record,
                item: Arc::clone(&item),
                config: Arc::clone(&config),
            },
        );

        if let Some(on_started) = &config.on_started {
            on_started(item.as_ref());
        }

        Ok(id)
    }

    /// Pick the destination path for a new transfer.
    fn resolve_destination(
        &self,
        config: &TransferConfig,
        record: &Transfer,
        default_dir: &Path,
    ) -> PathBuf {
        let directory = config.resolve_directory(default_dir);

        if let Some(filename) = &config.filename {
            return directory.join(filename);
        }

        let name = derive_filename(&record.filename, &record.mime_type);
        let path = directory.join(name);
        if config.overwrite {
            path
        } else {
            unique_path(self.probe.as_ref(), &path)
        }
    }

    /// Record new byte progress for an active transfer.
    ///
    /// Returns `None` for transfers that are not active.
    pub fn on_progress(&mut self, id: TransferId, received_bytes: u64) -> Option<ProgressReport> {
        let Some(entry) = self.active.get_mut(&id) else {
            tracing::debug!(
                target: "dltrack.registry",
                %id,
                "Progress for untracked transfer ignored"
            );
            return None;
        };

        entry.record.apply_progress(received_bytes);
        let transfer = entry.record.progress();
        let window = entry.record.window;
        let config = Arc::clone(&entry.config);

        let total = self.aggregate_progress();

        if let Some(on_progress) = &config.on_progress {
            on_progress(&transfer);
        }
        if let Some(on_total_progress) = &config.on_total_progress {
            on_total_progress(&total);
        }

        self.emit_badge(&config);
        if config.show_progress_bar {
            self.display.emit(DisplayIntent::Progress {
                window,
                fraction: total.percent,
            });
        }

        Some(ProgressReport { transfer, total })
    }

    /// Move an active transfer to its terminal state.
    ///
    /// Returns `None` for transfers that are not active, so repeated
    /// terminal events are no-ops.
    pub fn on_terminal(
        &mut self,
        id: TransferId,
        outcome: TransferOutcome,
    ) -> Option<TerminalReport> {
        let Some(ActiveTransfer {
            mut record,
            item,
            config,
        }) = self.active.shift_remove(&id)
        else {
            tracing::debug!(
                target: "dltrack.registry",
                %id,
                ?outcome,
                "Terminal event for untracked transfer ignored"
            );
            return None;
        };
        record.state = outcome.into();

        if outcome == TransferOutcome::Completed {
            self.counters.add_completed(record.total_bytes);
        }

        self.emit_badge(&config);
        let batch_finished = self.active.is_empty();
        if batch_finished {
            self.counters.reset();
            self.display.emit(DisplayIntent::ClearProgress {
                window: record.window,
            });
        }

        let save_path = item.save_path().or_else(|| record.destination.clone());
        let filename = save_path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| item.filename(), |name| name.to_string_lossy().into_owned());

        let result = match outcome {
            TransferOutcome::Completed => {
                let path = save_path.unwrap_or_else(|| PathBuf::from(&filename));
                let summary = CompletedDownload {
                    filename,
                    path: path.clone(),
                    file_size: item.received_bytes(),
                    mime_type: record.mime_type.clone(),
                    url: record.url.clone(),
                };
                tracing::info!(
                    target: "dltrack.registry",
                    %id,
                    path = %summary.path.display(),
                    file_size = summary.file_size,
                    elapsed_ms = record.elapsed_ms(),
                    "Transfer completed"
                );
                if let Some(on_completed) = &config.on_completed {
                    on_completed(&summary);
                }
                if config.open_folder_when_done {
                    self.display.emit(DisplayIntent::RevealInFolder { path });
                }
                Ok(item)
            }
            TransferOutcome::Cancelled => {
                tracing::info!(target: "dltrack.registry", %id, "Transfer cancelled");
                if let Some(on_cancel) = &config.on_cancel {
                    on_cancel(item.as_ref());
                }
                Err(TransferError::Cancelled)
            }
            TransferOutcome::Interrupted => {
                let message = config.interrupted_message(&filename);
                tracing::warn!(target: "dltrack.registry", %id, %message, "Transfer interrupted");
                Err(TransferError::interrupted(message))
            }
        };

        Some(TerminalReport {
            id,
            outcome,
            result,
            batch_finished,
        })
    }

    fn emit_badge(&self, config: &TransferConfig) {
        if config.show_badge && self.display.supports_badge() {
            self.display.emit(DisplayIntent::BadgeCount {
                count: self.active.len(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use dltrack_core::FsPathProbe;
    use dltrack_core::ports::testing::{FakeTransferItem, RecordingDisplayEmitter};
    use tempfile::tempdir;

    const WINDOW: WindowId = WindowId::new(1);

    fn new_registry(display: &RecordingDisplayEmitter) -> Registry {
        Registry::new(Arc::new(display.clone()), Arc::new(FsPathProbe::new()))
    }

    fn item(id: u64, filename: &str, mime: &str, total: u64) -> Arc<FakeTransferItem> {
        Arc::new(FakeTransferItem::new(
            id,
            format!("https://example.com/{filename}"),
            filename,
            mime,
            total,
        ))
    }

    fn config_in(dir: &Path) -> Arc<TransferConfig> {
        Arc::new(TransferConfig::new().with_directory(dir))
    }

    #[test]
    fn test_register_derives_extension_and_avoids_collisions() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("photo.png"), b"old").unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        let photo = item(1, "photo", "image/png", 10);
        registry
            .register(photo.clone(), WINDOW, config_in(dir.path()), dir.path())
            .unwrap();

        assert_eq!(photo.save_path(), Some(dir.path().join("photo (1).png")));
        assert_eq!(registry.active_count(), 1);
        assert_eq!(registry.counters().total_bytes(), 10);
    }

    #[test]
    fn test_explicit_filename_skips_collision_check() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("fixed.bin"), b"old").unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .with_filename("fixed.bin")
            .with_save_as(true);
        let file = item(1, "served.dat", "application/octet-stream", 10);
        registry
            .register(file.clone(), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        assert_eq!(file.save_path(), Some(dir.path().join("fixed.bin")));
        assert!(file.dialog_options().is_none());
    }

    #[test]
    fn test_overwrite_keeps_existing_path() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("report.pdf"), b"old").unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .with_overwrite(true);
        let report = item(1, "report.pdf", "application/pdf", 10);
        registry
            .register(report.clone(), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        assert_eq!(report.save_path(), Some(dir.path().join("report.pdf")));
    }

    #[test]
    fn test_save_as_suggests_path_to_dialog() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .with_save_as(true)
            .with_dialog_options(dltrack_core::SaveDialogOptions {
                title: Some("Save model".to_string()),
                ..Default::default()
            });
        let model = item(1, "model", "model/gltf-binary", 10);
        registry
            .register(model.clone(), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        assert!(model.save_path().is_none());
        let options = model.dialog_options().unwrap();
        assert_eq!(options.title.as_deref(), Some("Save model"));
        assert_eq!(options.default_path, Some(dir.path().join("model.glb")));
        assert!(registry.get(model.id()).unwrap().destination.is_none());
    }

    #[test]
    fn test_default_directory_used_when_unset() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        let file = item(1, "a.txt", "text/plain", 1);
        registry
            .register(file.clone(), WINDOW, Arc::new(TransferConfig::new()), dir.path())
            .unwrap();

        assert_eq!(file.save_path(), Some(dir.path().join("a.txt")));
    }

    #[test]
    fn test_relative_directory_rejected_before_any_state_change() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let started = Arc::new(Mutex::new(0));
        let started_in_cb = Arc::clone(&started);

        let config = TransferConfig::new()
            .with_directory("downloads")
            .on_started(move |_| *started_in_cb.lock().unwrap() += 1);
        let file = item(1, "a.txt", "text/plain", 100);
        let err = registry
            .register(file.clone(), WINDOW, Arc::new(config), dir.path())
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(file.save_path().is_none());
        assert_eq!(registry.active_count(), 0);
        assert_eq!(registry.counters(), AggregateCounters::default());
        assert_eq!(*started.lock().unwrap(), 0);
    }

    #[test]
    fn test_on_started_receives_handle() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = Arc::clone(&seen);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .on_started(move |item| seen_in_cb.lock().unwrap().push(item.id()));
        registry
            .register(item(7, "a.txt", "text/plain", 1), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![TransferId::new(7)]);
    }

    #[test]
    fn test_progress_reports_transfer_and_aggregate() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let totals = Arc::new(Mutex::new(Vec::new()));
        let totals_in_cb = Arc::clone(&totals);

        let config = Arc::new(
            TransferConfig::new()
                .with_directory(dir.path())
                .on_total_progress(move |p| totals_in_cb.lock().unwrap().push(*p)),
        );
        registry
            .register(item(1, "a.bin", "", 100), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry
            .register(item(2, "b.bin", "", 300), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();

        let report = registry.on_progress(TransferId::new(1), 50).unwrap();
        assert!((report.transfer.percent - 0.5).abs() < 1e-9);
        assert_eq!(report.total.transferred_bytes, 50);
        assert_eq!(report.total.total_bytes, 400);

        let report = registry.on_progress(TransferId::new(2), 150).unwrap();
        assert_eq!(report.total.transferred_bytes, 200);
        assert!((report.total.percent - 0.5).abs() < 1e-9);
        assert_eq!(totals.lock().unwrap().len(), 2);

        assert_eq!(display.badge_counts(), vec![2, 2]);
        assert!(display.intents().contains(&DisplayIntent::Progress {
            window: WINDOW,
            fraction: 0.5,
        }));
    }

    #[test]
    fn test_progress_never_goes_backwards() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        registry
            .register(item(1, "a.bin", "", 100), WINDOW, config_in(dir.path()), dir.path())
            .unwrap();

        let mut last = 0;
        for bytes in [10, 40, 30, 90, 200] {
            let report = registry.on_progress(TransferId::new(1), bytes).unwrap();
            assert!(report.transfer.transferred_bytes >= last);
            assert!(report.transfer.transferred_bytes <= 100);
            last = report.transfer.transferred_bytes;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_unknown_total_reports_zero_percent() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        registry
            .register(item(1, "stream", "", 0), WINDOW, config_in(dir.path()), dir.path())
            .unwrap();

        let report = registry.on_progress(TransferId::new(1), 4096).unwrap();
        assert!(report.transfer.percent.abs() < f64::EPSILON);
        assert!(report.total.percent.abs() < f64::EPSILON);
        assert_eq!(report.total.transferred_bytes, 4096);
    }

    #[test]
    fn test_progress_for_untracked_transfer_is_ignored() {
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        assert!(registry.on_progress(TransferId::new(9), 10).is_none());
        assert!(display.intents().is_empty());
    }

    #[test]
    fn test_batch_completion_then_reset() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let config = config_in(dir.path());

        registry
            .register(item(1, "a.bin", "", 100), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry
            .register(item(2, "b.bin", "", 300), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry.on_progress(TransferId::new(1), 100);

        let first = registry
            .on_terminal(TransferId::new(1), TransferOutcome::Completed)
            .unwrap();
        assert!(!first.batch_finished);
        assert_eq!(registry.counters().completed_bytes(), 100);

        let report = registry.on_progress(TransferId::new(2), 300).unwrap();
        assert_eq!(report.total.transferred_bytes, 400);
        assert_eq!(report.total.total_bytes, 400);
        assert!((report.total.percent - 1.0).abs() < 1e-9);

        let last = registry
            .on_terminal(TransferId::new(2), TransferOutcome::Completed)
            .unwrap();
        assert!(last.batch_finished);
        assert_eq!(registry.active_count(), 0);
        assert_eq!(registry.counters(), AggregateCounters::default());
        assert_eq!(registry.aggregate_progress().total_bytes, 0);
        assert!(
            display
                .intents()
                .contains(&DisplayIntent::ClearProgress { window: WINDOW })
        );
    }

    #[test]
    fn test_new_transfer_joins_running_batch() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let config = config_in(dir.path());

        registry
            .register(item(1, "a.bin", "", 100), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry
            .register(item(2, "b.bin", "", 100), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry.on_terminal(TransferId::new(1), TransferOutcome::Completed);
        registry
            .register(item(3, "c.bin", "", 200), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();

        let progress = registry.aggregate_progress();
        assert_eq!(progress.total_bytes, 400);
        assert_eq!(progress.transferred_bytes, 100);
    }

    #[test]
    fn test_completed_summary_and_reveal() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let summaries = Arc::new(Mutex::new(Vec::new()));
        let summaries_in_cb = Arc::clone(&summaries);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .with_open_folder_when_done(true)
            .on_completed(move |s| summaries_in_cb.lock().unwrap().push(s.clone()));
        let archive = item(1, "data", "application/zip", 64);
        registry
            .register(archive.clone(), WINDOW, Arc::new(config), dir.path())
            .unwrap();
        archive.set_received(64);

        let report = registry
            .on_terminal(archive.id(), TransferOutcome::Completed)
            .unwrap();
        assert!(report.result.is_ok());

        let summaries = summaries.lock().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].filename, "data.zip");
        assert_eq!(summaries[0].path, dir.path().join("data.zip"));
        assert_eq!(summaries[0].file_size, 64);
        assert_eq!(summaries[0].mime_type, "application/zip");
        assert_eq!(summaries[0].url, "https://example.com/data");
        assert!(display.intents().contains(&DisplayIntent::RevealInFolder {
            path: dir.path().join("data.zip"),
        }));
    }

    #[test]
    fn test_cancelled_is_distinguished() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        let cancelled_in_cb = Arc::clone(&cancelled);
        let completed = Arc::new(Mutex::new(0));
        let completed_in_cb = Arc::clone(&completed);

        let config = TransferConfig::new()
            .with_directory(dir.path())
            .on_cancel(move |item| cancelled_in_cb.lock().unwrap().push(item.id()))
            .on_completed(move |_| *completed_in_cb.lock().unwrap() += 1);
        registry
            .register(item(3, "a.bin", "", 10), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        let report = registry
            .on_terminal(TransferId::new(3), TransferOutcome::Cancelled)
            .unwrap();
        assert_eq!(report.result.err(), Some(TransferError::Cancelled));
        assert_eq!(*cancelled.lock().unwrap(), vec![TransferId::new(3)]);
        assert_eq!(*completed.lock().unwrap(), 0);
    }

    #[test]
    fn test_interrupted_formats_template_with_base_name() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("report.pdf"), b"old").unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);

        registry
            .register(
                item(1, "report.pdf", "application/pdf", 10),
                WINDOW,
                config_in(dir.path()),
                dir.path(),
            )
            .unwrap();
        let config = TransferConfig::new()
            .with_directory(dir.path())
            .with_error_message("Could not fetch {filename}");
        registry
            .register(item(2, "notes", "text/plain", 10), WINDOW, Arc::new(config), dir.path())
            .unwrap();

        let first = registry
            .on_terminal(TransferId::new(1), TransferOutcome::Interrupted)
            .unwrap();
        assert_eq!(
            first.result.err(),
            Some(TransferError::interrupted(
                "The download of report (1).pdf was interrupted"
            ))
        );

        let second = registry
            .on_terminal(TransferId::new(2), TransferOutcome::Interrupted)
            .unwrap();
        assert_eq!(
            second.result.err(),
            Some(TransferError::interrupted("Could not fetch notes.txt"))
        );
    }

    #[test]
    fn test_terminal_transition_happens_once() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        registry
            .register(item(1, "a.bin", "", 10), WINDOW, config_in(dir.path()), dir.path())
            .unwrap();

        assert!(
            registry
                .on_terminal(TransferId::new(1), TransferOutcome::Completed)
                .is_some()
        );
        assert!(
            registry
                .on_terminal(TransferId::new(1), TransferOutcome::Interrupted)
                .is_none()
        );
        assert!(registry.on_progress(TransferId::new(1), 5).is_none());
    }

    #[test]
    fn test_badge_respects_toggle_and_platform() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let config = Arc::new(
            TransferConfig::new()
                .with_directory(dir.path())
                .with_show_badge(false)
                .with_show_progress_bar(false),
        );
        registry
            .register(item(1, "a.bin", "", 10), WINDOW, config, dir.path())
            .unwrap();
        registry.on_progress(TransferId::new(1), 5);
        assert!(display.intents().is_empty());

        let unsupported = RecordingDisplayEmitter::without_badge();
        let mut registry = new_registry(&unsupported);
        registry
            .register(item(2, "b.bin", "", 10), WINDOW, config_in(dir.path()), dir.path())
            .unwrap();
        registry.on_progress(TransferId::new(2), 5);
        assert!(unsupported.badge_counts().is_empty());
        assert_eq!(unsupported.intents().len(), 1);
    }

    #[test]
    fn test_terminal_refreshes_badge() {
        let dir = tempdir().unwrap();
        let display = RecordingDisplayEmitter::new();
        let mut registry = new_registry(&display);
        let config = config_in(dir.path());
        registry
            .register(item(1, "a.bin", "", 10), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();
        registry
            .register(item(2, "b.bin", "", 10), WINDOW, Arc::clone(&config), dir.path())
            .unwrap();

        registry.on_terminal(TransferId::new(1), TransferOutcome::Cancelled);
        registry.on_terminal(TransferId::new(2), TransferOutcome::Completed);
        assert_eq!(display.badge_counts(), vec![1, 0]);
    }
}
