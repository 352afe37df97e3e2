use crate::sources::record_feed::RecordFeed;
use crate::Stream;
use anyhow::{anyhow, Result};
use futures_util::stream::FuturesUnordered;
use futures_util::StreamExt;
use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info};

pub trait EngineSource: 'static {
    fn run<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>>;
}

pub struct EngineBuilder {
    streams: Vec<Box<dyn Any>>, // hold onto streams to keep pipelines alive
    sources: Vec<(String, Arc<dyn EngineSource>)>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn add_stream<T>(mut self, stream: Stream<T>) -> Self
    where
        T: 'static,
    {
        self.streams.push(Box::new(stream));
        self
    }

    pub fn add_source<S>(mut self, label: impl Into<String>, source: Arc<S>) -> Self
    where
        S: EngineSource,
    {
        self.sources
            .push((label.into(), source as Arc<dyn EngineSource>));
        self
    }

    pub fn add_source_owned<S>(self, label: impl Into<String>, source: S) -> Self
    where
        S: EngineSource,
    {
        self.add_source(label, Arc::new(source))
    }

    pub fn build(self) -> Engine {
        Engine {
            streams: self.streams,
            sources: self.sources,
        }
    }
}

impl EngineSource for RecordFeed {
    fn run<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
        Box::pin(async move { self.start().await })
    }
}

pub struct Engine {
    #[allow(dead_code)]
    streams: Vec<Box<dyn Any>>,
    sources: Vec<(String, Arc<dyn EngineSource>)>,
}

impl Engine {
    /// Drives every source to completion on the current thread. Fails with
    /// the source's label on the first error; Ctrl+C shuts down cleanly.
    pub async fn run(self) -> Result<()> {
        if self.sources.is_empty() {
            info!("no sources registered; waiting for Ctrl+C to exit");
            tokio::signal::ctrl_c().await?;
            return Ok(());
        }

        let tasks = FuturesUnordered::new();
        for (label, source) in &self.sources {
            let label_clone = label.clone();
            let source_clone = Arc::clone(source);
            tasks.push(async move { source_clone.run().await.map_err(|err| (label_clone, err)) });
        }

        tokio::pin!(tasks);

        loop {
            tokio::select! {
                res = tasks.next() => {
                    match res {
                        Some(Ok(_)) => continue,
                        Some(Err((label, err))) => return Err(anyhow!("{} source error: {}", label, err)),
                        None => {
                            debug!("all sources completed");
                            return Ok(());
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("received interrupt, shutting down engine");
                    return Ok(());
                }
            }
        }
    }
}
