//! Demonstration operations
//!
//! Two small lookups that make the wrapper's interception visible: one
//! reads from a mapping, one from a sequence. Both report failures as
//! classified [`Fault`]s so a wrapper can match on the kind.

use crate::args::{type_name, CallArgs};
use safecall_fault::Fault;
use serde_json::Value;

/// Look a key up in a mapping
///
/// The mapping is the first positional argument; the key is the second
/// positional argument or the named argument `key`. An absent key is a
/// `missing key` fault; wrong argument shapes are `type mismatch` faults.
pub fn map_lookup(args: &CallArgs) -> Result<Value, Fault> {
    let map = match args.arg(0) {
        Some(Value::Object(map)) => map,
        Some(other) => return Err(Fault::type_mismatch("object", type_name(other))),
        None => return Err(Fault::type_mismatch("object", "nothing")),
    };

    let key = match args.arg(1).or_else(|| args.named("key")) {
        Some(Value::String(key)) => key,
        Some(other) => return Err(Fault::type_mismatch("string key", type_name(other))),
        None => return Err(Fault::type_mismatch("string key", "nothing")),
    };

    map.get(key).cloned().ok_or_else(|| Fault::missing_key(key))
}

/// Index into a sequence
///
/// The sequence is the first positional argument, the index the second.
/// Negative indices count from the end. A miss on either side is an
/// `index out of range` fault.
pub fn seq_index(args: &CallArgs) -> Result<Value, Fault> {
    let seq = match args.arg(0) {
        Some(Value::Array(seq)) => seq,
        Some(other) => return Err(Fault::type_mismatch("array", type_name(other))),
        None => return Err(Fault::type_mismatch("array", "nothing")),
    };

    let index = match args.arg(1) {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(index) => index,
            None => return Err(Fault::type_mismatch("integer index", "number")),
        },
        Some(other) => return Err(Fault::type_mismatch("integer index", type_name(other))),
        None => return Err(Fault::type_mismatch("integer index", "nothing")),
    };

    let len = seq.len();
    let resolved = if index < 0 {
        index + len as i64
    } else {
        index
    };

    usize::try_from(resolved)
        .ok()
        .and_then(|i| seq.get(i))
        .cloned()
        .ok_or_else(|| Fault::index_out_of_range(index, len))
}
