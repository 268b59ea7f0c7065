//! Periodic and on-demand refresh of health and models

use super::fetcher::ResourceFetcher;
use crate::consts::cli_consts::REFRESH_QUEUE_SIZE;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Which resources a refresh covers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RefreshTarget {
    Health,
    Models,
    All,
}

/// Cheap handle for asking the worker to refresh now.
#[derive(Debug, Clone)]
pub struct RefreshRequester {
    sender: mpsc::Sender<RefreshTarget>,
}

impl RefreshRequester {
    pub(crate) fn from_sender(sender: mpsc::Sender<RefreshTarget>) -> Self {
        Self { sender }
    }

    /// Queue a manual refresh. Returns false if it could not be queued.
    pub fn request(&self, target: RefreshTarget) -> bool {
        match self.sender.try_send(target) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::debug!("Refresh queue full, dropping {:?} request", target);
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

/// Owns the running refresh worker.
///
/// Created once when the dashboard starts. `shutdown` disarms the timer and waits for
/// the worker loop to exit; dropping the handle without calling it still disarms the
/// timer. Fetches already in flight are not cancelled, their results are discarded
/// once the event receiver is gone.
#[derive(Debug)]
pub struct RefreshHandle {
    cancel: CancellationToken,
    requester: RefreshRequester,
    join_handle: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    pub fn requester(&self) -> RefreshRequester {
        self.requester.clone()
    }

    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Fetches both resources immediately, then again every `interval`, and serves
/// manual refresh requests in between.
pub struct RefreshWorker {
    fetcher: ResourceFetcher,
    interval: Duration,
}

impl RefreshWorker {
    pub fn new(fetcher: ResourceFetcher, interval: Duration) -> Self {
        Self { fetcher, interval }
    }

    /// Start the worker
    pub fn start(self) -> RefreshHandle {
        let cancel = CancellationToken::new();
        let (sender, requests) = mpsc::channel(REFRESH_QUEUE_SIZE);
        let join_handle = tokio::spawn(self.run(cancel.clone(), requests));

        RefreshHandle {
            cancel,
            requester: RefreshRequester::from_sender(sender),
            join_handle: Some(join_handle),
        }
    }

    async fn run(self, cancel: CancellationToken, mut requests: mpsc::Receiver<RefreshTarget>) {
        // The first tick completes immediately, which is the initial fetch.
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!(
            "Refresh worker started, interval {}s",
            self.interval.as_secs()
        );

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = interval.tick() => self.dispatch(RefreshTarget::All),
                Some(target) = requests.recv() => self.dispatch(target),
            }
        }

        log::info!("Refresh worker stopped");
    }

    /// Each fetch runs on its own task so a manual refresh can overlap a timed one.
    fn dispatch(&self, target: RefreshTarget) {
        if matches!(target, RefreshTarget::Health | RefreshTarget::All) {
            let fetcher = self.fetcher.clone();
            tokio::spawn(async move {
                let _ = fetcher.fetch_health().await;
            });
        }
        if matches!(target, RefreshTarget::Models | RefreshTarget::All) {
            let fetcher = self.fetcher.clone();
            tokio::spawn(async move {
                let _ = fetcher.fetch_models().await;
            });
        }
    }
}
