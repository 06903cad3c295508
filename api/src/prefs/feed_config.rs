use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Where the collaborator serves its latest block.
pub const DEFAULT_URL: &str = "http://localhost:3001/latest-block-number";

/// The period the view has always polled at.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 36_000;

/// The period the polling code claims to use ("every 10 seconds"). It does
/// not match [`DEFAULT_POLL_INTERVAL_MS`]; the mismatch is reported, not fixed.
pub const COMMENTED_POLL_INTERVAL_MS: u64 = 10_000;

/// Array key holding the rows in dynamic-column responses.
pub const DEFAULT_ROWS_KEY: &str = "users";

/// How table columns are chosen.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ColumnMode {
    /// Serial Number, Block Number, Block Hash, Time.
    #[default]
    Fixed,
    /// Whatever keys the first stored record carries.
    DynamicFromKeys,
}

/// How a freshly polled record joins the stored sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs)]
pub enum FeedPolicy {
    /// Append every record to the end; oldest first.
    AppendAlways,
    /// Prepend a record unless it equals the current head; newest first.
    DedupPrepend,
}

/// Settings of one block feed view.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct FeedConfig {
    pub url: String,
    pub poll_interval_ms: u64,
    pub dedupe: bool,
    pub initial_fetch: bool,
    pub columns: ColumnMode,
    pub rows_key: String,
}

/// Something suspicious about a config that is nonetheless honored as is.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConfigWarning {
    IntervalDiffersFromComment { literal_ms: u64, commented_ms: u64 },
    BlankUrl,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntervalDiffersFromComment {
                literal_ms,
                commented_ms,
            } => write!(
                f,
                "poll interval is {literal_ms} ms but is documented as {commented_ms} ms; keeping {literal_ms} ms"
            ),
            Self::BlankUrl => write!(f, "collaborator url is blank; every poll will fail"),
        }
    }
}

impl FeedConfig {
    /// Creates a FeedConfig from environment variables, falling back to the
    /// in-code defaults for anything unset or unparseable.
    ///
    /// # Environment Variables
    /// - `BLOCK_FEED_URL`: collaborator url.
    /// - `BLOCK_FEED_POLL_INTERVAL_MS`: poll period, must be > 0.
    /// - `BLOCK_FEED_DEDUPE`: "true" or "1" to drop repeats of the newest record.
    /// - `BLOCK_FEED_INITIAL_FETCH`: "false" or "0" to wait one period before polling.
    /// - `BLOCK_FEED_COLUMNS`: "fixed" or "dynamic-from-keys".
    /// - `BLOCK_FEED_ROWS_KEY`: array key read in dynamic-column mode.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("BLOCK_FEED_URL").unwrap_or_else(|| DEFAULT_URL.to_string());

        let poll_interval_ms = lookup("BLOCK_FEED_POLL_INTERVAL_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        let dedupe = lookup("BLOCK_FEED_DEDUPE")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(false);

        let initial_fetch = lookup("BLOCK_FEED_INITIAL_FETCH")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(true);

        let columns = lookup("BLOCK_FEED_COLUMNS")
            .and_then(|s| ColumnMode::from_str(s.trim()).ok())
            .unwrap_or_default();

        let rows_key = lookup("BLOCK_FEED_ROWS_KEY")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ROWS_KEY.to_string());

        Self {
            url,
            poll_interval_ms,
            dedupe,
            initial_fetch,
            columns,
            rows_key,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn policy(&self) -> FeedPolicy {
        if self.dedupe {
            FeedPolicy::DedupPrepend
        } else {
            FeedPolicy::AppendAlways
        }
    }

    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = vec![];
        if self.poll_interval_ms == DEFAULT_POLL_INTERVAL_MS {
            warnings.push(ConfigWarning::IntervalDiffersFromComment {
                literal_ms: DEFAULT_POLL_INTERVAL_MS,
                commented_ms: COMMENTED_POLL_INTERVAL_MS,
            });
        }
        if self.url.trim().is_empty() {
            warnings.push(ConfigWarning::BlankUrl);
        }
        warnings
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}
