use std::rc::Rc;

use api::FeedConfig;
use api::HttpFeedSource;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::block_feed::FeedState;
use crate::poll_task::PollOutcome;
use crate::poll_task::PollTask;

#[derive(Clone, Copy)]
pub struct UseBlockFeed {
    state: Signal<FeedState>,
}

impl UseBlockFeed {
    /// Subscribes the caller to the stored records and the latest failure.
    pub fn state(&self) -> Signal<FeedState> {
        self.state
    }
}

/// Starts polling the collaborator when the calling component mounts and
/// stops when it unmounts.
pub fn use_block_feed(config: FeedConfig) -> UseBlockFeed {
    let mut state = use_signal(FeedState::default);

    let task = use_hook(move || {
        for warning in config.warnings() {
            warn!("block feed config: {}", warning);
        }
        info!(
            "polling {} every {} ms (policy: {:?}, columns: {})",
            config.url,
            config.poll_interval_ms,
            config.policy(),
            config.columns
        );

        let policy = config.policy();
        let on_outcome = move |outcome: PollOutcome| {
            let next = state.peek().absorb(policy, outcome);
            if let Some(next) = next {
                state.set(next);
            }
        };

        let (task, poll_loop) = PollTask::new(HttpFeedSource::new(&config), &config, on_outcome);
        spawn(poll_loop);
        Rc::new(task)
    });

    use_drop(move || task.cancel());

    UseBlockFeed { state }
}
