use crate::record::{FieldValue, Record};

/// Builds a new record holding exactly `fields`, in order, with values taken
/// from `record`. Names absent from `record` map to [`FieldValue::Missing`];
/// a repeated name keeps a single entry, last occurrence winning. The input
/// record is never touched.
pub fn project<S: AsRef<str>>(fields: &[S], record: &Record) -> Record {
    fields
        .iter()
        .map(|field| {
            let name = field.as_ref();
            let value = record.get(name).cloned().unwrap_or(FieldValue::Missing);
            (name.to_string(), value)
        })
        .collect()
}

/// A projection with a preconfigured field list, reusable across records.
pub struct Projector {
    fields: Vec<String>,
}

impl Projector {
    pub fn new<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn apply(&self, record: &Record) -> Record {
        project(&self.fields, record)
    }

    /// Consumes the projector, producing a closure for [`crate::Stream::map`].
    pub fn into_fn(self) -> impl Fn(&Record) -> Record {
        move |record| self.apply(record)
    }
}
