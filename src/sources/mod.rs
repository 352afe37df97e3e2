pub mod record_feed;

pub use record_feed::{RecordFeed, RecordFeedConfig, RecordFeedConfigBuilder};
