use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Where tapped values get written. One publish per tap invocation.
pub trait ObservationSink {
    fn publish(&self, line: &str);
}

/// The default observation channel: one line per value on standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl ObservationSink for StdoutSink {
    fn publish(&self, line: &str) {
        println!("{line}");
    }
}

/// In-memory observation channel. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl ObservationSink for MemorySink {
    fn publish(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Publishes `value` to standard output and hands it back unchanged.
pub fn tap<T: Display>(value: T) -> T {
    tap_into(&StdoutSink, value)
}

/// Publishes `value` to `sink` and hands it back unchanged.
pub fn tap_into<T, S>(sink: &S, value: T) -> T
where
    T: Display,
    S: ObservationSink + ?Sized,
{
    sink.publish(&value.to_string());
    value
}
