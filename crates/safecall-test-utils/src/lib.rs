//! Testing utilities for the safecall workspace
//!
//! Shared fixtures: a receiver with observable state, and sample payloads.

#![allow(missing_docs)]

use safecall_core::{CallArgs, Receiver, Value};
use safecall_fault::Fault;
use serde_json::json;
use std::collections::BTreeMap;

/// Receiver fixture with a field store and a handled-fault counter
///
/// Registered handlers:
/// - `handle_fault` — increments the counter, returns `"handled #<n>"`
/// - `fail_loudly` — always fails with a dispatch fault
#[derive(Debug, Default)]
pub struct Fixture {
    pub fields: BTreeMap<String, Value>,
    pub handled: usize,
}

impl Fixture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Receiver for Fixture {
    fn dispatch(&mut self, method: &str, fault: &Fault, _args: &CallArgs) -> Result<Value, Fault> {
        match method {
            "handle_fault" => {
                self.handled += 1;
                Ok(json!(format!("handled #{}", self.handled)))
            }
            "fail_loudly" => Err(Fault::dispatch(format!(
                "fail_loudly refused to recover from: {fault}"
            ))),
            other => Err(Fault::dispatch(format!("no handler named `{other}`"))),
        }
    }

    fn store(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }
}

/// `{"a": 1}` — the mapping used by lookup scenarios
#[must_use]
pub fn sample_map() -> Value {
    json!({"a": 1})
}

/// `[10, 20, 30]` — the sequence used by index scenarios
#[must_use]
pub fn sample_seq() -> Value {
    json!([10, 20, 30])
}
