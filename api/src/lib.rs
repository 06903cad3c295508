//! This crate contains everything that talks to the block collaborator:
//! the record type it serves, the feed settings, and the http source.

pub mod block_record;
pub mod feed_source;
pub mod prefs;

pub use block_record::BlockRecord;
pub use feed_source::FeedSource;
pub use feed_source::FetchError;
pub use feed_source::HttpFeedSource;
pub use prefs::feed_config::ColumnMode;
pub use prefs::feed_config::FeedConfig;
pub use prefs::feed_config::FeedPolicy;
