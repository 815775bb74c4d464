//! Listener registrations and the control commands that manage them.

use std::sync::Arc;

use tokio::sync::oneshot;

use dltrack_core::{RegistrationId, TransferConfig, TransferItem, TransferResult};

/// Outcome delivered to a registration when one of its transfers finishes.
pub type TransferOutcomeResult = TransferResult<Arc<dyn TransferItem>>;

/// Caller-supplied handler for terminal outcomes.
pub type ResultCallback = Arc<dyn Fn(TransferOutcomeResult) + Send + Sync>;

/// Where a registration's terminal outcomes go.
pub(crate) enum ResultSink {
    /// Surface errors (except cancellation) as a modal error intent.
    ErrorDialog,
    /// Hand every outcome to the caller.
    Callback(ResultCallback),
    /// Resolve a single waiter; the sender is consumed on first use.
    Once(Option<oneshot::Sender<TransferOutcomeResult>>),
}

/// One listener attached to the session.
pub(crate) struct Registration {
    pub(crate) id: RegistrationId,
    pub(crate) config: Arc<TransferConfig>,
    pub(crate) sink: ResultSink,
    /// URL a one-shot registration is waiting for.
    pub(crate) url: Option<String>,
    /// Whether a one-shot registration already owns a transfer.
    pub(crate) claimed: bool,
}

impl Registration {
    pub(crate) fn new(id: RegistrationId, config: TransferConfig, sink: ResultSink) -> Self {
        Self {
            id,
            config: Arc::new(config),
            sink,
            url: None,
            claimed: false,
        }
    }

    /// A registration that resolves `sender` with the outcome of the
    /// transfer for `url`, then detaches.
    pub(crate) fn once(
        id: RegistrationId,
        config: TransferConfig,
        url: impl Into<String>,
        sender: oneshot::Sender<TransferOutcomeResult>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(
                id,
                config.with_unregister_when_done(true),
                ResultSink::Once(Some(sender)),
            )
        }
    }

    /// Whether this registration should take a new transfer for `url`.
    pub(crate) fn waits_for(&self, url: &str) -> bool {
        self.is_one_shot() && !self.claimed && self.url.as_deref() == Some(url)
    }

    pub(crate) const fn is_one_shot(&self) -> bool {
        matches!(self.sink, ResultSink::Once(_))
    }
}

/// Control messages from `SessionHandle` to the running listener.
pub(crate) enum Command {
    Register(Registration),
    Unregister(RegistrationId),
}
