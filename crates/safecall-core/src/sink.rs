//! Diagnostic sink for intercepted faults
//!
//! Every fault the wrapper recovers from produces exactly one
//! [`FallbackRecord`]. The sink is an explicit, injectable dependency on
//! [`crate::Config`]; the documented default is [`TracingSink`], which
//! emits one `tracing` event per record at debug severity.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use safecall_fault::FaultKind;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// One recovered fault: the resolved value and what failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackRecord {
    /// Value the invocation resolved to
    pub value: Value,
    /// Kind of the intercepted fault
    pub kind: FaultKind,
    /// The fault's message
    pub message: String,
}

/// Destination for fallback diagnostics
pub trait Sink: Send + Sync + fmt::Debug {
    /// Record one intercepted fault
    fn record(&self, record: &FallbackRecord);
}

/// Default sink: one `tracing::debug!` event per intercepted fault
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn record(&self, record: &FallbackRecord) {
        tracing::debug!(
            kind = %record.kind,
            message = %record.message,
            value = %record.value,
            "fault intercepted, fallback value resolved"
        );
    }
}

/// Sink that keeps records in memory
///
/// Intended for tests and demos that need to observe the diagnostic
/// stream. Shareable across wrappers through an `Arc`.
#[derive(Debug, Default)]
pub struct MemorySink {
    inner: Mutex<Vec<FallbackRecord>>,
}

impl MemorySink {
    /// Empty sink
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    #[must_use]
    pub fn records(&self) -> Vec<FallbackRecord> {
        self.inner.lock().clone()
    }

    /// Number of records so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn record(&self, record: &FallbackRecord) {
        self.inner.lock().push(record.clone());
    }
}

static DEFAULT_SINK: Lazy<Arc<TracingSink>> = Lazy::new(|| Arc::new(TracingSink));

/// The process-wide default sink instance
///
/// A single shared [`TracingSink`], created on first use. New
/// [`crate::Config`] values start with this sink until
/// [`crate::Config::with_sink`] replaces it.
#[must_use]
pub fn default_sink() -> Arc<dyn Sink> {
    DEFAULT_SINK.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecall_fault::Fault;
    use serde_json::json;

    fn record_for(fault: &Fault, value: Value) -> FallbackRecord {
        FallbackRecord {
            value,
            kind: fault.kind().clone(),
            message: fault.message().to_string(),
        }
    }

    #[test]
    fn memory_sink_accumulates_records() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let fault = Fault::missing_key("a");
        sink.record(&record_for(&fault, json!("fallback")));
        sink.record(&record_for(&fault, json!(null)));

        assert_eq!(sink.len(), 2);
        let records = sink.records();
        assert_eq!(records[0].value, json!("fallback"));
        assert_eq!(records[0].kind, FaultKind::MissingKey);
        assert_eq!(records[1].value, Value::Null);
    }

    #[test]
    fn default_sink_is_shared() {
        let a = default_sink();
        let b = default_sink();
        assert_eq!(
            Arc::as_ptr(&a).cast::<()>(),
            Arc::as_ptr(&b).cast::<()>()
        );
    }

    #[test]
    fn record_serializes_with_kind_name() {
        let fault = Fault::index_out_of_range(9, 3);
        let json = serde_json::to_value(record_for(&fault, json!(0))).unwrap();
        assert_eq!(json["kind"], json!("IndexOutOfRange"));
        assert_eq!(json["value"], json!(0));
    }
}
