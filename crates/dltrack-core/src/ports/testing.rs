//! In-memory fakes for the host ports.
//!
//! Enabled for this crate's tests and for downstream crates through the
//! `test-utils` feature.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

use super::display::{DisplayEmitterPort, DisplayIntent};
use super::host::{HostEvent, HostSessionPort, TransferItem};
use crate::transfer::{
    SaveDialogOptions, TransferError, TransferId, TransferOutcome, TransferResult, WindowId,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A transfer handle whose state is set by the test.
#[derive(Debug)]
pub struct FakeTransferItem {
    id: TransferId,
    url: String,
    filename: String,
    mime_type: String,
    total_bytes: u64,
    received_bytes: AtomicU64,
    save_path: Mutex<Option<PathBuf>>,
    dialog_options: Mutex<Option<SaveDialogOptions>>,
}

impl FakeTransferItem {
    pub fn new(
        id: u64,
        url: impl Into<String>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        total_bytes: u64,
    ) -> Self {
        Self {
            id: TransferId::new(id),
            url: url.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
            total_bytes,
            received_bytes: AtomicU64::new(0),
            save_path: Mutex::new(None),
            dialog_options: Mutex::new(None),
        }
    }

    pub fn set_received(&self, bytes: u64) {
        self.received_bytes.store(bytes, Ordering::SeqCst);
    }

    /// Options passed to `set_save_dialog_options`, if any.
    pub fn dialog_options(&self) -> Option<SaveDialogOptions> {
        lock(&self.dialog_options).clone()
    }
}

impl TransferItem for FakeTransferItem {
    fn id(&self) -> TransferId {
        self.id
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn filename(&self) -> String {
        self.filename.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    fn received_bytes(&self) -> u64 {
        self.received_bytes.load(Ordering::SeqCst)
    }

    fn save_path(&self) -> Option<PathBuf> {
        lock(&self.save_path).clone()
    }

    fn set_save_path(&self, path: &Path) {
        *lock(&self.save_path) = Some(path.to_path_buf());
    }

    fn set_save_dialog_options(&self, options: &SaveDialogOptions) {
        *lock(&self.dialog_options) = Some(options.clone());
    }
}

/// Display emitter that records every intent.
#[derive(Debug, Clone)]
pub struct RecordingDisplayEmitter {
    intents: Arc<Mutex<Vec<DisplayIntent>>>,
    supports_badge: bool,
}

impl Default for RecordingDisplayEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDisplayEmitter {
    pub fn new() -> Self {
        Self {
            intents: Arc::new(Mutex::new(Vec::new())),
            supports_badge: true,
        }
    }

    /// An emitter for a platform without app badges.
    pub fn without_badge() -> Self {
        Self {
            supports_badge: false,
            ..Self::new()
        }
    }

    pub fn intents(&self) -> Vec<DisplayIntent> {
        lock(&self.intents).clone()
    }

    pub fn badge_counts(&self) -> Vec<usize> {
        lock(&self.intents)
            .iter()
            .filter_map(|intent| match intent {
                DisplayIntent::BadgeCount { count } => Some(*count),
                _ => None,
            })
            .collect()
    }
}

impl DisplayEmitterPort for RecordingDisplayEmitter {
    fn emit(&self, intent: DisplayIntent) {
        lock(&self.intents).push(intent);
    }

    fn supports_badge(&self) -> bool {
        self.supports_badge
    }
}

/// What a `FakeHostSession` does when asked to start a download.
#[derive(Debug, Clone)]
pub struct FakeDownloadPlan {
    pub filename: String,
    pub mime_type: String,
    pub total_bytes: u64,
    /// Received-byte counts reported in order.
    pub progress: Vec<u64>,
    pub outcome: TransferOutcome,
    /// Whether `window_for` can resolve the new transfer.
    pub resolve_window: bool,
}

impl FakeDownloadPlan {
    /// A transfer that reports `total_bytes` in two steps and completes.
    pub fn completed(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        total_bytes: u64,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            total_bytes,
            progress: vec![total_bytes / 2, total_bytes],
            outcome: TransferOutcome::Completed,
            resolve_window: true,
        }
    }

    #[must_use]
    pub const fn with_outcome(mut self, outcome: TransferOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Vec<u64>) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn without_window(mut self) -> Self {
        self.resolve_window = false;
        self
    }
}

/// Host session that plays scripted downloads into an event channel.
pub struct FakeHostSession {
    downloads_dir: PathBuf,
    events: mpsc::UnboundedSender<HostEvent>,
    windows: Mutex<HashMap<TransferId, WindowId>>,
    plans: Mutex<VecDeque<FakeDownloadPlan>>,
    items: Mutex<Vec<Arc<FakeTransferItem>>>,
    started: Mutex<Vec<(WindowId, String)>>,
    /// Per-transfer event batches buffered while holding.
    held: Mutex<Option<Vec<Vec<HostEvent>>>>,
    next_id: AtomicU64,
}

impl FakeHostSession {
    /// Create a host and the event receiver the session listener reads.
    pub fn new(downloads_dir: impl Into<PathBuf>) -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let host = Self {
            downloads_dir: downloads_dir.into(),
            events,
            windows: Mutex::new(HashMap::new()),
            plans: Mutex::new(VecDeque::new()),
            items: Mutex::new(Vec::new()),
            started: Mutex::new(Vec::new()),
            held: Mutex::new(None),
            next_id: AtomicU64::new(1),
        };
        (host, rx)
    }

    /// Queue the behaviour of the next `start_download` call.
    pub fn push_plan(&self, plan: FakeDownloadPlan) {
        lock(&self.plans).push_back(plan);
    }

    /// Associate a transfer with a window for `window_for`.
    pub fn attach_window(&self, id: TransferId, window: WindowId) {
        lock(&self.windows).insert(id, window);
    }

    /// Send a raw event, bypassing `start_download`.
    pub fn send(&self, event: HostEvent) {
        let _ = self.events.send(event);
    }

    /// Buffer the events of later `start_download` calls instead of
    /// sending them.
    pub fn hold_events(&self) {
        *lock(&self.held) = Some(Vec::new());
    }

    /// Send every buffered transfer, most recently started first, and stop
    /// holding.
    pub fn release_newest_first(&self) {
        let batches = lock(&self.held).take().unwrap_or_default();
        for event in batches.into_iter().rev().flatten() {
            let _ = self.events.send(event);
        }
    }

    /// Every item created by `start_download`, in order.
    pub fn items(&self) -> Vec<Arc<FakeTransferItem>> {
        lock(&self.items).clone()
    }

    /// Every `(window, url)` passed to `start_download`, in order.
    pub fn started(&self) -> Vec<(WindowId, String)> {
        lock(&self.started).clone()
    }
}

impl HostSessionPort for FakeHostSession {
    fn downloads_dir(&self) -> PathBuf {
        self.downloads_dir.clone()
    }

    fn window_for(&self, item: &dyn TransferItem) -> Option<WindowId> {
        lock(&self.windows).get(&item.id()).copied()
    }

    fn start_download(&self, window: WindowId, url: &str) -> TransferResult<()> {
        let plan = lock(&self.plans).pop_front().ok_or_else(|| {
            TransferError::start_failed(format!("no scripted download for {url}"))
        })?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = Arc::new(FakeTransferItem::new(
            id,
            url,
            plan.filename,
            plan.mime_type,
            plan.total_bytes,
        ));
        if plan.resolve_window {
            self.attach_window(item.id(), window);
        }
        lock(&self.started).push((window, url.to_string()));
        lock(&self.items).push(Arc::clone(&item));

        let created: Arc<dyn TransferItem> = item.clone();
        let mut batch = vec![HostEvent::Created { item: created }];
        for received_bytes in plan.progress {
            item.set_received(received_bytes);
            batch.push(HostEvent::Updated {
                id: item.id(),
                received_bytes,
            });
        }
        batch.push(HostEvent::Done {
            id: item.id(),
            outcome: plan.outcome,
        });

        if let Some(held) = lock(&self.held).as_mut() {
            held.push(batch);
            return Ok(());
        }
        for event in batch {
            self.events
                .send(event)
                .map_err(|_| TransferError::start_failed("session event channel closed"))?;
        }
        Ok(())
    }
}
