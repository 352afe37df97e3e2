//! Record projection and tap primitives over a minimal single-threaded
//! stream pipeline.

mod engine;
mod project;
mod record;
mod source;
pub mod sources;
mod tap;

pub use engine::{Engine, EngineBuilder, EngineSource};
pub use project::{project, Projector};
pub use record::{FieldValue, Record};
pub use source::{Source, Stream};
pub use tap::{tap, tap_into, MemorySink, ObservationSink, StdoutSink};
