//! Deferred wiring: the record flows through a stream pipeline,
//! tap -> project -> tap, driven by the engine on one thread.
//!
//! Run with:
//! ```bash
//! cargo run --example chained
//! ```

use anyhow::Result;
use fieldtap::sources::record_feed::{RecordFeed, RecordFeedConfigBuilder};
use fieldtap::{EngineBuilder, Projector, Record};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let input = Record::from_value(json!({
        "first": "John",
        "middle": "M",
        "last": "Doe",
    }))?;

    let feed = RecordFeed::new(RecordFeedConfigBuilder::new().with_record(input).build());

    let picked = feed
        .source()
        .to_stream()
        .tap(|record| println!("{record}"))
        .map(Projector::new(["first", "last"]).into_fn())
        .tap(|record| println!("{record}"));

    EngineBuilder::new()
        .add_stream(picked)
        .add_source_owned("names", feed)
        .build()
        .run()
        .await?;

    Ok(())
}
