//! Session listener.
//!
//! Binds the host's stream of transfer notifications to a `Registry`.
//! Every new transfer is claimed by one registration, whose configuration
//! drives the transfer's state machine and whose result sink receives the
//! terminal outcome.
//!
//! # Routing
//!
//! - A one-shot registration takes the first new transfer whose URL is the
//!   one it started; among several waiting for the same URL the oldest wins.
//! - Otherwise the oldest persistent registration takes it.
//! - With no registrations the transfer is left to the host.
//! - A repeated `Created` for an active transfer changes nothing.
//!
//! # Concurrency Model
//!
//! `run` drives host events and control commands on a single task. Commands
//! are polled first so a one-shot registration is always in place before
//! the transfer it started shows up.

mod handle;
mod registration;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;

use dltrack_core::{
    DisplayEmitterPort, DisplayIntent, FsPathProbe, HostEvent, HostSessionPort, PathProbe,
    RegistrationId, TransferConfig, TransferError, TransferId, TransferItem, TransferOutcome,
    TransferResult, TransferSource,
};

use crate::registry::Registry;

pub use handle::SessionHandle;
pub(crate) use registration::{Command, Registration, ResultSink};
pub use registration::{ResultCallback, TransferOutcomeResult};

/// Event loop state for one host session.
pub struct SessionListener {
    registry: Registry,
    host: Arc<dyn HostSessionPort>,
    display: Arc<dyn DisplayEmitterPort>,
    /// Registrations in attach order.
    registrations: Vec<Registration>,
    /// Which registration owns each active transfer.
    owners: HashMap<TransferId, RegistrationId>,
    ids: Arc<AtomicU64>,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl SessionListener {
    /// Create a listener and the handle used to control it.
    pub fn new(
        host: Arc<dyn HostSessionPort>,
        display: Arc<dyn DisplayEmitterPort>,
        probe: Arc<dyn PathProbe>,
    ) -> (Self, SessionHandle) {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let ids = Arc::new(AtomicU64::new(1));

        let listener = Self {
            registry: Registry::new(Arc::clone(&display), probe),
            host: Arc::clone(&host),
            display,
            registrations: Vec::new(),
            owners: HashMap::new(),
            ids: Arc::clone(&ids),
            commands,
        };
        let handle = SessionHandle::new(commands_tx, host, ids);

        (listener, handle)
    }

    /// Create a listener that probes the local filesystem.
    pub fn with_local_fs(
        host: Arc<dyn HostSessionPort>,
        display: Arc<dyn DisplayEmitterPort>,
    ) -> (Self, SessionHandle) {
        Self::new(host, display, Arc::new(FsPathProbe::new()))
    }

    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.len()
    }

    /// Attach a persistent registration.
    ///
    /// Without a callback, non-cancellation errors are surfaced as
    /// `DisplayIntent::ErrorDialog` using the config's `error_title`.
    pub fn register(
        &mut self,
        config: TransferConfig,
        callback: Option<ResultCallback>,
    ) -> TransferResult<RegistrationId> {
        config.validate()?;
        let id = RegistrationId::new(self.ids.fetch_add(1, Ordering::Relaxed));
        let sink = callback.map_or(ResultSink::ErrorDialog, ResultSink::Callback);
        self.attach(Registration::new(id, config, sink));
        Ok(id)
    }

    /// Detach a registration. Transfers it already owns keep running but
    /// their outcomes are dropped.
    pub fn unregister(&mut self, id: RegistrationId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|registration| registration.id != id);
        let removed = self.registrations.len() != before;
        if removed {
            tracing::debug!(target: "dltrack.session", registration = %id, "Registration detached");
        }
        removed
    }

    fn attach(&mut self, registration: Registration) {
        tracing::debug!(
            target: "dltrack.session",
            registration = %registration.id,
            one_shot = registration.is_one_shot(),
            "Registration attached"
        );
        self.registrations.push(registration);
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Register(registration) => self.attach(registration),
            Command::Unregister(id) => {
                self.unregister(id);
            }
        }
    }

    /// Drive the listener until the host stops sending events.
    pub async fn run<S>(mut self, mut source: S)
    where
        S: TransferSource,
    {
        tracing::info!(target: "dltrack.session", "Session listener started");
        loop {
            tokio::select! {
                biased;
                Some(command) = self.commands.recv() => self.apply(command),
                event = source.next_event() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
            }
        }
        tracing::info!(
            target: "dltrack.session",
            active = self.registry.active_count(),
            "Transfer source closed, session listener stopped"
        );
    }

    /// Apply one host event.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Created { item } => self.on_created(item),
            HostEvent::Updated { id, received_bytes } => {
                self.registry.on_progress(id, received_bytes);
            }
            HostEvent::Done { id, outcome } => self.on_done(id, outcome),
        }
    }

    fn claim(&mut self, url: &str) -> Option<usize> {
        let index = self
            .registrations
            .iter()
            .position(|r| r.waits_for(url))
            .or_else(|| self.registrations.iter().position(|r| !r.is_one_shot()))?;
        self.registrations[index].claimed = true;
        Some(index)
    }

    fn on_created(&mut self, item: Arc<dyn TransferItem>) {
        let id = item.id();
        if self.registry.is_active(id) {
            tracing::debug!(target: "dltrack.session", %id, "Transfer already claimed");
            return;
        }
        let Some(index) = self.claim(&item.url()) else {
            tracing::warn!(target: "dltrack.session", %id, "No registration to claim transfer");
            return;
        };
        let registration_id = self.registrations[index].id;
        let config = Arc::clone(&self.registrations[index].config);

        let registered = match self.host.window_for(item.as_ref()) {
            Some(window) => {
                let default_dir = self.host.downloads_dir();
                self.registry.register(item, window, config, &default_dir)
            }
            None => Err(TransferError::window_not_found(id)),
        };

        match registered {
            Ok(id) => {
                self.owners.insert(id, registration_id);
            }
            Err(err) => {
                tracing::error!(
                    target: "dltrack.session",
                    %id,
                    registration = %registration_id,
                    error = %err,
                    "Transfer could not be registered"
                );
                self.resolve(registration_id, Err(err));
            }
        }
    }

    fn on_done(&mut self, id: TransferId, outcome: TransferOutcome) {
        let Some(report) = self.registry.on_terminal(id, outcome) else {
            return;
        };
        let Some(registration_id) = self.owners.remove(&id) else {
            tracing::debug!(target: "dltrack.session", %id, "Finished transfer had no owner");
            return;
        };
        self.resolve(registration_id, report.result);
    }

    /// Deliver a terminal outcome to its registration, detaching it when
    /// the registration only wanted one.
    fn resolve(&mut self, registration_id: RegistrationId, result: TransferOutcomeResult) {
        let Some(index) = self
            .registrations
            .iter()
            .position(|r| r.id == registration_id)
        else {
            tracing::debug!(
                target: "dltrack.session",
                registration = %registration_id,
                "Outcome for detached registration dropped"
            );
            return;
        };

        let registration = &mut self.registrations[index];
        match &mut registration.sink {
            ResultSink::ErrorDialog => {
                if let Err(err) = &result {
                    if !err.is_cancelled() {
                        self.display.emit(DisplayIntent::ErrorDialog {
                            title: registration.config.error_title.clone(),
                            message: err.user_message(),
                        });
                    }
                }
            }
            ResultSink::Callback(callback) => callback(result),
            ResultSink::Once(sender) => {
                if let Some(sender) = sender.take() {
                    if sender.send(result).is_err() {
                        tracing::debug!(
                            target: "dltrack.session",
                            registration = %registration_id,
                            "One-shot waiter went away"
                        );
                    }
                }
            }
        }

        if registration.config.unregister_when_done {
            self.registrations.remove(index);
            tracing::debug!(
                target: "dltrack.session",
                registration = %registration_id,
                "Registration detached after first outcome"
            );
        }
    }
}
