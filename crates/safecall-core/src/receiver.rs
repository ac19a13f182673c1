//! The receiver seam
//!
//! A receiver is the object a method-bound operation works on. Implementing
//! [`Receiver`] gives a type two capabilities: dispatching named recovery
//! handlers, and accepting `dest` write-back of resolved fallback values.

use crate::args::CallArgs;
use safecall_fault::Fault;
use serde_json::Value;

/// Receiver capabilities required by method-bound wrappers
pub trait Receiver {
    /// Dispatch a named recovery handler
    ///
    /// Called when a [`crate::Callback::Named`] callback (configured or
    /// supplied as a call-time `callback` override) becomes effective.
    /// An unknown name should be reported as a dispatch fault; it then
    /// propagates to the invoking caller like any callback failure.
    fn dispatch(&mut self, method: &str, fault: &Fault, args: &CallArgs) -> Result<Value, Fault>;

    /// Store a resolved fallback value into the named field
    ///
    /// Called for `dest` write-back. Receivers decide what a field name
    /// means; a map-backed receiver typically inserts, a struct-backed one
    /// matches on the known names.
    fn store(&mut self, field: &str, value: Value);
}

/// Receiver type for wrappers that never take one
///
/// Uninhabited: no value of this type can exist, so the trait methods are
/// statically unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoReceiver {}

impl Receiver for NoReceiver {
    fn dispatch(&mut self, _method: &str, _fault: &Fault, _args: &CallArgs) -> Result<Value, Fault> {
        match *self {}
    }

    fn store(&mut self, _field: &str, _value: Value) {
        match *self {}
    }
}
