//! The repeating fetch behind a block feed view, as an owned, cancellable task.

use std::future::Future;
use std::time::Duration;

use api::BlockRecord;
use api::FeedConfig;
use api::FeedSource;
use api::FetchError;
use dioxus_logger::tracing::debug;
use futures::future::AbortHandle;
use futures::future::Abortable;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

use crate::compat::interval::Interval;

pub type PollOutcome = Result<Vec<BlockRecord>, FetchError>;

/// Handle to a running poll loop.
///
/// Cancelling stops the timer and drops any fetch still in flight, so no
/// outcome is delivered afterwards. Dropping the handle cancels as well.
#[derive(Debug)]
pub struct PollTask {
    abort: AbortHandle,
}

impl PollTask {
    /// Builds the poll loop and the handle that controls it.
    ///
    /// The returned future must be spawned on the host executor. It polls
    /// `source` once right away when `config.initial_fetch` is set, then once
    /// per `config.poll_interval()`, and hands every outcome to `on_outcome`
    /// in the order the fetches complete.
    pub fn new<S, F>(
        source: S,
        config: &FeedConfig,
        on_outcome: F,
    ) -> (Self, impl Future<Output = ()> + 'static)
    where
        S: FeedSource + 'static,
        F: FnMut(PollOutcome) + 'static,
    {
        let (abort, registration) = AbortHandle::new_pair();
        let poll_loop = Abortable::new(
            run(source, config.poll_interval(), config.initial_fetch, on_outcome),
            registration,
        );

        let task = async move {
            // Err(Aborted) is the normal way out.
            let _ = poll_loop.await;
        };
        (Self { abort }, task)
    }

    pub fn cancel(&self) {
        if !self.abort.is_aborted() {
            debug!("cancelling block feed poll task");
            self.abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

impl Drop for PollTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run<S, F>(source: S, period: Duration, initial_fetch: bool, mut on_outcome: F)
where
    S: FeedSource,
    F: FnMut(PollOutcome),
{
    let mut ticker = Interval::new(period);
    // ticks never wait on earlier fetches, so several may be in flight.
    let mut in_flight = FuturesUnordered::new();

    if initial_fetch {
        in_flight.push(source.fetch());
    }

    loop {
        tokio::select! {
            biased;
            Some(outcome) = in_flight.next(), if !in_flight.is_empty() => on_outcome(outcome),
            _ = ticker.tick() => in_flight.push(source.fetch()),
        }
    }
}
