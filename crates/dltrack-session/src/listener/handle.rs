//! Control handle for a running session listener.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, oneshot};

use dltrack_core::{
    HostSessionPort, RegistrationId, TransferConfig, TransferError, TransferItem, TransferResult,
    WindowId,
};

use super::registration::{
    Command, Registration, ResultCallback, ResultSink, TransferOutcomeResult,
};

/// Cloneable handle for attaching registrations to a running listener.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    host: Arc<dyn HostSessionPort>,
    ids: Arc<AtomicU64>,
}

impl SessionHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        host: Arc<dyn HostSessionPort>,
        ids: Arc<AtomicU64>,
    ) -> Self {
        Self {
            commands,
            host,
            ids,
        }
    }

    pub(crate) fn host(&self) -> &Arc<dyn HostSessionPort> {
        &self.host
    }

    fn next_id(&self) -> RegistrationId {
        RegistrationId::new(self.ids.fetch_add(1, Ordering::Relaxed))
    }

    fn send(&self, command: Command) -> TransferResult<()> {
        self.commands
            .send(command)
            .map_err(|_| TransferError::SessionClosed)
    }

    /// Attach a persistent registration to the listener.
    ///
    /// See `SessionListener::register` for the callback semantics.
    pub fn register(
        &self,
        config: TransferConfig,
        callback: Option<ResultCallback>,
    ) -> TransferResult<RegistrationId> {
        config.validate()?;
        let id = self.next_id();
        let sink = callback.map_or(ResultSink::ErrorDialog, ResultSink::Callback);
        self.send(Command::Register(Registration::new(id, config, sink)))?;
        Ok(id)
    }

    /// Attach a registration that resolves `sender` with the outcome of
    /// the transfer for `url` and then detaches.
    pub(crate) fn register_once(
        &self,
        config: TransferConfig,
        url: &str,
        sender: oneshot::Sender<TransferOutcomeResult>,
    ) -> TransferResult<RegistrationId> {
        let id = self.next_id();
        self.send(Command::Register(Registration::once(id, config, url, sender)))?;
        Ok(id)
    }

    pub fn unregister(&self, id: RegistrationId) -> TransferResult<()> {
        self.send(Command::Unregister(id))
    }

    /// Download a single URL and wait for its outcome.
    ///
    /// See [`crate::download`].
    pub async fn download(
        &self,
        window: WindowId,
        url: &str,
        config: TransferConfig,
    ) -> TransferResult<Arc<dyn TransferItem>> {
        crate::download::download(self, window, url, config).await
    }
}
