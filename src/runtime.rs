//! Wiring for the refresh worker and its event channel

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::proxy::ProxyApi;
use crate::workers::core::EventSender;
use crate::workers::fetcher::ResourceFetcher;
use crate::workers::refresher::{RefreshHandle, RefreshWorker};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Start the refresh worker against `proxy`.
///
/// Returns the receiving end of the event channel and the handle that owns the
/// refresh timer.
pub fn start_refresh_worker(
    proxy: Arc<dyn ProxyApi>,
    refresh_interval: Duration,
) -> (mpsc::Receiver<Event>, RefreshHandle) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);

    let fetcher = ResourceFetcher::new(proxy, EventSender::new(event_sender));
    let handle = RefreshWorker::new(fetcher, refresh_interval).start();

    (event_receiver, handle)
}
