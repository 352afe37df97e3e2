//! End-to-end pipeline behavior: a record flows tap -> project -> tap
//! through the stream, driven by the engine, and both taps land on the
//! observation channel in stage order.

use anyhow::Result;
use fieldtap::sources::record_feed::{RecordFeed, RecordFeedConfigBuilder};
use fieldtap::{tap_into, EngineBuilder, FieldValue, MemorySink, Projector, Record};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

fn reference_record() -> Record {
    Record::from_value(json!({
        "first": "John",
        "middle": "M",
        "last": "Doe",
    }))
    .expect("object literal")
}

async fn run_pipeline(input: Record, fields: Vec<String>) -> Result<(Vec<String>, Record)> {
    let observed = MemorySink::new();
    let result = Rc::new(RefCell::new(None));

    let feed = RecordFeed::new(RecordFeedConfigBuilder::new().with_record(input).build());

    let observed_in = observed.clone();
    let observed_out = observed.clone();
    let result_slot = result.clone();
    let picked = feed
        .source()
        .to_stream()
        .tap(move |record| {
            tap_into(&observed_in, record);
        })
        .map(Projector::new(fields).into_fn())
        .tap(move |record| {
            tap_into(&observed_out, record);
        });
    picked.sink(move |record| *result_slot.borrow_mut() = Some(record.clone()));

    EngineBuilder::new()
        .add_stream(picked)
        .add_source_owned("names", feed)
        .build()
        .run()
        .await?;

    let record = result
        .borrow_mut()
        .take()
        .expect("pipeline produced a record");
    Ok((observed.lines(), record))
}

#[tokio::test]
async fn logs_full_record_first_then_projection() -> Result<()> {
    let fields = vec!["first".to_string(), "last".to_string()];
    let (lines, picked) = run_pipeline(reference_record(), fields).await?;

    assert_eq!(
        lines,
        [
            r#"{first: "John", middle: "M", last: "Doe"}"#,
            r#"{first: "John", last: "Doe"}"#,
        ]
    );
    assert_eq!(picked, Record::from_iter([("first", "John"), ("last", "Doe")]));
    Ok(())
}

#[tokio::test]
async fn empty_field_list_projects_to_empty_record() -> Result<()> {
    let (lines, picked) = run_pipeline(reference_record(), Vec::new()).await?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "{}");
    assert!(picked.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_field_carries_the_missing_marker() -> Result<()> {
    let fields = vec!["first".to_string(), "zzz".to_string()];
    let (lines, picked) = run_pipeline(reference_record(), fields).await?;

    assert_eq!(lines[1], r#"{first: "John", zzz: missing}"#);
    assert_eq!(picked.get("zzz"), Some(&FieldValue::Missing));
    assert_eq!(picked.len(), 2);
    Ok(())
}

#[tokio::test]
async fn every_fed_record_flows_through_the_stages() -> Result<()> {
    let observed = MemorySink::new();
    let feed = RecordFeed::new(
        RecordFeedConfigBuilder::new()
            .with_record(Record::from_iter([("first", "John"), ("last", "Doe")]))
            .with_record(Record::from_iter([("first", "Jane")]))
            .build(),
    );

    let observed_in = observed.clone();
    let observed_out = observed.clone();
    let picked = feed
        .source()
        .to_stream()
        .tap(move |record| {
            tap_into(&observed_in, record);
        })
        .map(Projector::new(["first"]).into_fn())
        .tap(move |record| {
            tap_into(&observed_out, record);
        });

    EngineBuilder::new()
        .add_stream(picked)
        .add_source_owned("names", feed)
        .build()
        .run()
        .await?;

    assert_eq!(
        observed.lines(),
        [
            r#"{first: "John", last: "Doe"}"#,
            r#"{first: "John"}"#,
            r#"{first: "Jane"}"#,
            r#"{first: "Jane"}"#,
        ]
    );
    Ok(())
}
