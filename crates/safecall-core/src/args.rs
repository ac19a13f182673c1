//! Per-invocation call context

use safecall_fault::Fault;
use serde_json::Value;
use std::collections::BTreeMap;

/// Positional and named arguments for one invocation
///
/// The named arguments `default`, `callback`, and `dest` are reserved: the
/// wrapper extracts them before the operation runs, so operations never see
/// them and must not rely on arguments with these names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl CallArgs {
    /// Empty argument list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    #[must_use]
    pub fn with_arg(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Set a named argument
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: Value) -> Self {
        self.named.insert(name.into(), value);
        self
    }

    /// All positional arguments, in call order
    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Positional argument at `index`, if supplied
    #[inline]
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Named argument by name, if supplied
    #[inline]
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Remove and return the reserved override arguments
    ///
    /// Presence is meaningful independently of the value: an explicitly
    /// null `default` is a supplied null, and an explicitly null
    /// `callback` disables the configured callback for this call.
    pub(crate) fn take_overrides(&mut self) -> Result<Overrides, Fault> {
        let default = self.named.remove("default");

        let callback = match self.named.remove("callback") {
            None => CallbackOverride::Inherit,
            Some(Value::Null) => CallbackOverride::Disable,
            Some(Value::String(name)) => CallbackOverride::Named(name),
            Some(other) => {
                return Err(Fault::type_mismatch(
                    "handler name or null for `callback`",
                    type_name(&other),
                ))
            }
        };

        let dest = match self.named.remove("dest") {
            None | Some(Value::Null) => None,
            Some(Value::String(field)) => Some(field),
            Some(other) => {
                return Err(Fault::type_mismatch(
                    "field name or null for `dest`",
                    type_name(&other),
                ))
            }
        };

        Ok(Overrides {
            default,
            callback,
            dest,
        })
    }
}

/// Call-time overrides extracted from the reserved named arguments
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Overrides {
    /// Supplied `default`, possibly an explicit null
    pub(crate) default: Option<Value>,
    /// Callback override state
    pub(crate) callback: CallbackOverride,
    /// Write-back destination field
    pub(crate) dest: Option<String>,
}

/// Three-state `callback` override
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CallbackOverride {
    /// Keyword absent; use the configured callback
    Inherit,
    /// Explicit null; run no callback for this call
    Disable,
    /// Dispatch the named handler on the receiver
    Named(String),
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overrides_are_removed_from_named_args() {
        let mut args = CallArgs::new()
            .with_named("default", json!("d"))
            .with_named("callback", json!("handler"))
            .with_named("dest", json!("field"))
            .with_named("key", json!("kept"));

        let overrides = args.take_overrides().unwrap();

        assert_eq!(overrides.default, Some(json!("d")));
        assert_eq!(
            overrides.callback,
            CallbackOverride::Named("handler".to_string())
        );
        assert_eq!(overrides.dest, Some("field".to_string()));

        // Only the reserved keywords are consumed.
        assert_eq!(args.named("default"), None);
        assert_eq!(args.named("callback"), None);
        assert_eq!(args.named("dest"), None);
        assert_eq!(args.named("key"), Some(&json!("kept")));
    }

    #[test]
    fn absent_overrides_inherit() {
        let mut args = CallArgs::new();
        let overrides = args.take_overrides().unwrap();

        assert_eq!(overrides.default, None);
        assert_eq!(overrides.callback, CallbackOverride::Inherit);
        assert_eq!(overrides.dest, None);
    }

    #[test]
    fn null_default_counts_as_supplied() {
        let mut args = CallArgs::new().with_named("default", Value::Null);
        let overrides = args.take_overrides().unwrap();
        assert_eq!(overrides.default, Some(Value::Null));
    }

    #[test]
    fn null_callback_disables() {
        let mut args = CallArgs::new().with_named("callback", Value::Null);
        let overrides = args.take_overrides().unwrap();
        assert_eq!(overrides.callback, CallbackOverride::Disable);
    }

    #[test]
    fn null_dest_behaves_as_absent() {
        let mut args = CallArgs::new().with_named("dest", Value::Null);
        let overrides = args.take_overrides().unwrap();
        assert_eq!(overrides.dest, None);
    }

    #[test]
    fn non_string_callback_is_a_type_mismatch() {
        let mut args = CallArgs::new().with_named("callback", json!(17));
        let fault = args.take_overrides().unwrap_err();
        assert_eq!(fault.kind(), &safecall_fault::FaultKind::TypeMismatch);
    }

    #[test]
    fn non_string_dest_is_a_type_mismatch() {
        let mut args = CallArgs::new().with_named("dest", json!(["x"]));
        let fault = args.take_overrides().unwrap_err();
        assert_eq!(fault.kind(), &safecall_fault::FaultKind::TypeMismatch);
    }
}
