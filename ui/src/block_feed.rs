use std::ops::Deref;
use std::sync::Arc;

use api::BlockRecord;
use api::FeedPolicy;
use dioxus_logger::tracing::error;

use crate::poll_task::PollOutcome;

/// The ordered records a view has collected so far.
///
/// Cheap to clone. Updates never touch the shared vector; they build a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockFeed(Arc<Vec<BlockRecord>>);

impl Deref for BlockFeed {
    type Target = [BlockRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl BlockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds freshly polled records into a copy of this feed, one at a time in
    /// the order given.
    ///
    /// Returns `None` when the policy discarded everything, so callers can skip
    /// a pointless re-render.
    pub fn updated(&self, policy: FeedPolicy, incoming: Vec<BlockRecord>) -> Option<Self> {
        let mut records = self.0.as_ref().clone();
        let before = records.len();

        for record in incoming {
            match policy {
                FeedPolicy::AppendAlways => records.push(record),
                // only the newest record is compared; older repeats get through.
                FeedPolicy::DedupPrepend => {
                    if records.first() != Some(&record) {
                        records.insert(0, record);
                    }
                }
            }
        }

        (records.len() != before).then(|| Self(Arc::new(records)))
    }
}

/// Everything a block feed view shows: the records and the latest failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub records: BlockFeed,
    /// The most recent poll failure, cleared by the next success.
    pub last_error: Option<String>,
}

impl FeedState {
    /// Applies one poll outcome. Failures are logged and kept; the records
    /// survive them untouched.
    ///
    /// Returns `None` when nothing visible changed.
    pub fn absorb(&self, policy: FeedPolicy, outcome: PollOutcome) -> Option<Self> {
        match outcome {
            Ok(incoming) => {
                let records = self.records.updated(policy, incoming);
                if records.is_none() && self.last_error.is_none() {
                    return None;
                }
                Some(Self {
                    records: records.unwrap_or_else(|| self.records.clone()),
                    last_error: None,
                })
            }
            Err(e) => {
                error!("block feed poll failed: {}", e);
                let message = e.to_string();
                (self.last_error.as_deref() != Some(message.as_str())).then(|| Self {
                    records: self.records.clone(),
                    last_error: Some(message),
                })
            }
        }
    }
}
