//! Wrapping configuration and binding

use crate::args::CallArgs;
use crate::callback::Callback;
use crate::receiver::NoReceiver;
use crate::sink::{default_sink, Sink};
use crate::wrapper::Wrapper;
use safecall_fault::{Fault, KindSet};
use serde_json::Value;
use std::sync::Arc;

/// Wrapping configuration: the factory for [`Wrapper`]s
///
/// Captures the fallback default, the set of intercepted fault kinds, an
/// optional recovery callback, and the diagnostic sink. Binding consumes
/// the configuration by value; `Config` is `Clone`, so one configuration
/// can bind any number of operations.
///
/// Defaults: no default value, every fault kind intercepted, no callback,
/// the process-wide [`default_sink`].
pub struct Config<R = NoReceiver> {
    default: Option<Value>,
    kinds: KindSet,
    callback: Option<Callback<R>>,
    sink: Arc<dyn Sink>,
}

impl<R> Config<R> {
    /// Configuration with all defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            default: None,
            kinds: KindSet::All,
            callback: None,
            sink: default_sink(),
        }
    }

    /// Set the configured fallback default
    ///
    /// Any value is honored as-is, including an explicit null.
    #[inline]
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Set the fault kinds this wrapper intercepts
    #[inline]
    #[must_use]
    pub fn with_kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    /// Set the recovery callback
    #[inline]
    #[must_use]
    pub fn with_callback(mut self, callback: Callback<R>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Replace the diagnostic sink
    #[inline]
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    /// Bind a free operation
    ///
    /// The produced wrapper has no receiver: invoke it with
    /// [`Wrapper::call`]. The receiver flag is fixed here, at bind time,
    /// and never re-derived per call.
    #[must_use]
    pub fn bind<F>(self, operation: F) -> Wrapper<R>
    where
        F: Fn(&CallArgs) -> Result<Value, Fault> + Send + Sync + 'static,
    {
        Wrapper::bound_free(self, Arc::new(operation))
    }

    /// Bind an operation that works on a receiver
    ///
    /// The produced wrapper expects a receiver: invoke it with
    /// [`Wrapper::invoke`]. The receiver flag is fixed here, at bind time.
    #[must_use]
    pub fn bind_method<F>(self, operation: F) -> Wrapper<R>
    where
        F: Fn(&mut R, &CallArgs) -> Result<Value, Fault> + Send + Sync + 'static,
    {
        Wrapper::bound_method(self, Arc::new(operation))
    }

    /// The configured fallback default, if any
    #[inline]
    #[must_use]
    pub(crate) fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The configured interception set
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> &KindSet {
        &self.kinds
    }

    /// The configured recovery callback, if any
    #[inline]
    #[must_use]
    pub fn callback(&self) -> Option<&Callback<R>> {
        self.callback.as_ref()
    }

    pub(crate) fn sink(&self) -> &dyn Sink {
        self.sink.as_ref()
    }
}

impl<R> Default for Config<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Config<R> {
    fn clone(&self) -> Self {
        Self {
            default: self.default.clone(),
            kinds: self.kinds.clone(),
            callback: self.callback.clone(),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<R> std::fmt::Debug for Config<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("default", &self.default)
            .field("kinds", &self.kinds)
            .field("callback", &self.callback)
            .field("sink", &self.sink)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecall_fault::FaultKind;
    use serde_json::json;

    #[test]
    fn defaults_intercept_everything_with_no_value() {
        let config: Config = Config::new();
        assert!(config.kinds().is_all());
        assert!(config.default_value().is_none());
        assert!(config.callback().is_none());
    }

    #[test]
    fn builder_captures_settings() {
        let config: Config = Config::new()
            .with_default(json!(0))
            .with_kinds(KindSet::only([FaultKind::MissingKey]))
            .with_callback(Callback::named("handle_fault"));

        assert_eq!(config.default_value(), Some(&json!(0)));
        assert!(config.kinds().contains(&FaultKind::MissingKey));
        assert!(!config.kinds().contains(&FaultKind::Dispatch));
        assert!(matches!(
            config.callback(),
            Some(Callback::Named(name)) if name == "handle_fault"
        ));
    }

    #[test]
    fn explicit_null_default_is_captured() {
        let config: Config = Config::new().with_default(Value::Null);
        assert_eq!(config.default_value(), Some(&Value::Null));
    }

    #[test]
    fn clone_shares_the_sink() {
        let config: Config = Config::new();
        let copy = config.clone();
        let a = (config.sink() as *const dyn Sink).cast::<()>();
        let b = (copy.sink() as *const dyn Sink).cast::<()>();
        assert_eq!(a, b);
    }

    #[test]
    fn one_config_binds_many_operations() {
        let config: Config = Config::new().with_default(json!("x"));
        let first = config.clone().bind(crate::ops::map_lookup);
        let second = config.bind(crate::ops::seq_index);

        assert!(!first.has_receiver());
        assert!(!second.has_receiver());
    }
}
