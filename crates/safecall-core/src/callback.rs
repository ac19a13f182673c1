//! Recovery callback variants

use crate::args::CallArgs;
use safecall_fault::Fault;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Free recovery function: no receiver parameter
pub type FreeFn = dyn Fn(&Fault, &CallArgs) -> Result<Value, Fault> + Send + Sync;

/// Recovery function taking the receiver as its first parameter
pub type ReceiverFn<R> = dyn Fn(&mut R, &Fault, &CallArgs) -> Result<Value, Fault> + Send + Sync;

/// A recovery callback, tagged by calling convention
///
/// The variant is chosen explicitly at configuration time; the wrapper
/// never infers the convention from the callback's shape.
pub enum Callback<R> {
    /// Handler dispatched by name through [`crate::Receiver::dispatch`];
    /// requires a receiver at call time
    Named(String),

    /// Free function invoked without a receiver
    Free(Arc<FreeFn>),

    /// Function invoked with the receiver as its first argument; requires
    /// a receiver at call time
    WithReceiver(Arc<ReceiverFn<R>>),
}

impl<R> Callback<R> {
    /// Callback dispatched as a named handler on the receiver
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Callback invoked as a free function
    #[must_use]
    pub fn free<F>(f: F) -> Self
    where
        F: Fn(&Fault, &CallArgs) -> Result<Value, Fault> + Send + Sync + 'static,
    {
        Self::Free(Arc::new(f))
    }

    /// Callback invoked with the receiver as its first argument
    #[must_use]
    pub fn with_receiver<F>(f: F) -> Self
    where
        F: Fn(&mut R, &Fault, &CallArgs) -> Result<Value, Fault> + Send + Sync + 'static,
    {
        Self::WithReceiver(Arc::new(f))
    }
}

impl<R> Clone for Callback<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Named(name) => Self::Named(name.clone()),
            Self::Free(f) => Self::Free(Arc::clone(f)),
            Self::WithReceiver(f) => Self::WithReceiver(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Callback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Free(_) => f.write_str("Free(..)"),
            Self::WithReceiver(_) => f.write_str("WithReceiver(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receiver::NoReceiver;
    use serde_json::json;

    #[test]
    fn free_callback_runs_without_receiver() {
        let cb: Callback<NoReceiver> = Callback::free(|fault, _args| {
            Ok(json!(format!("recovered from {}", fault.kind())))
        });

        let Callback::Free(f) = &cb else {
            panic!("expected free variant");
        };
        let out = f(&Fault::missing_key("k"), &CallArgs::new()).unwrap();
        assert_eq!(out, json!("recovered from missing key"));
    }

    #[test]
    fn clone_preserves_variant() {
        let cb: Callback<NoReceiver> = Callback::named("handle_fault");
        let copy = cb.clone();
        assert!(matches!(copy, Callback::Named(name) if name == "handle_fault"));
    }

    #[test]
    fn debug_elides_closures() {
        let cb: Callback<NoReceiver> = Callback::free(|_, _| Ok(Value::Null));
        assert_eq!(format!("{cb:?}"), "Free(..)");
    }
}
