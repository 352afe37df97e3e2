use crate::record::Record;
use crate::Source;
use anyhow::Result;
use std::time::Duration;
use tracing::trace;

#[derive(Clone, Debug)]
pub struct RecordFeedConfig {
    pub records: Vec<Record>,
    pub pacing: Option<Duration>,
}

pub struct RecordFeedConfigBuilder {
    records: Vec<Record>,
    pacing: Option<Duration>,
}

impl Default for RecordFeedConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFeedConfigBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            pacing: None,
        }
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_pacing(mut self, period: Duration) -> Self {
        self.pacing = Some(period);
        self
    }

    pub fn build(self) -> RecordFeedConfig {
        RecordFeedConfig {
            records: self.records,
            pacing: self.pacing,
        }
    }
}

/// In-memory input source: emits its configured records in order, optionally
/// spacing emissions by the configured pacing delay.
pub struct RecordFeed {
    config: RecordFeedConfig,
    source: Source<Record>,
}

impl RecordFeed {
    pub fn new(config: RecordFeedConfig) -> Self {
        Self {
            config,
            source: Source::new(),
        }
    }

    pub fn source(&self) -> &Source<Record> {
        &self.source
    }

    pub async fn start(&self) -> Result<()> {
        for record in &self.config.records {
            trace!(fields = record.len(), "emitting record");
            self.source.emit(record.clone());
            if let Some(period) = self.config.pacing {
                tokio::time::sleep(period).await;
            }
        }
        Ok(())
    }
}
