//! End-to-end tour: free wraps, receiver wraps, overrides, write-back.
//!
//! Run with fallback diagnostics visible:
//! `RUST_LOG=safecall_core=debug cargo run --example basic`

use safecall_core::{ops, telemetry, CallArgs, Callback, Config, Receiver, Value, Wrapper};
use safecall_fault::{Fault, FaultKind, KindSet};
use serde_json::json;
use std::collections::BTreeMap;

/// A session that caches lookups and counts recoveries.
#[derive(Debug, Default)]
struct Session {
    cache: BTreeMap<String, Value>,
    recoveries: usize,
}

impl Receiver for Session {
    fn dispatch(&mut self, method: &str, fault: &Fault, _args: &CallArgs) -> Result<Value, Fault> {
        match method {
            "on_miss" => {
                self.recoveries += 1;
                Ok(json!(format!("recovered after: {fault}")))
            }
            other => Err(Fault::dispatch(format!("no handler named `{other}`"))),
        }
    }

    fn store(&mut self, field: &str, value: Value) {
        self.cache.insert(field.to_string(), value);
    }
}

fn main() {
    telemetry::init();

    let settings = json!({"retries": 3, "theme": "dark"});

    // A free wrap: missing settings fall back to a configured default.
    let get_setting: Wrapper = Config::new()
        .with_default(json!("unset"))
        .with_kinds(KindSet::only([FaultKind::MissingKey]))
        .bind(ops::map_lookup);

    let present = get_setting
        .call(CallArgs::new().with_arg(settings.clone()).with_arg(json!("theme")))
        .expect("matched faults never propagate");
    println!("theme          -> {present}");

    let absent = get_setting
        .call(CallArgs::new().with_arg(settings.clone()).with_arg(json!("volume")))
        .expect("matched faults never propagate");
    println!("volume         -> {absent}");

    // Call-time override: this invocation only.
    let overridden = get_setting
        .call(
            CallArgs::new()
                .with_arg(settings.clone())
                .with_arg(json!("volume"))
                .with_named("default", json!(11)),
        )
        .expect("matched faults never propagate");
    println!("volume (once)  -> {overridden}");

    // A receiver wrap: a named handler recovers, and the resolved value is
    // written back into the session's cache.
    let lookup: Wrapper<Session> = Config::new()
        .with_kinds(KindSet::only([FaultKind::MissingKey]))
        .with_callback(Callback::named("on_miss"))
        .bind_method(|_session: &mut Session, args: &CallArgs| ops::map_lookup(args));

    let mut session = Session::default();
    let recovered = lookup
        .invoke(
            &mut session,
            CallArgs::new()
                .with_arg(settings)
                .with_arg(json!("locale"))
                .with_named("dest", json!("locale")),
        )
        .expect("matched faults never propagate");

    println!("locale         -> {recovered}");
    println!("session cache  -> {:?}", session.cache);
    println!("recoveries     -> {}", session.recoveries);
}
