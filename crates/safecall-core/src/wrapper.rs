//! The bound callable and its invocation state machine

use crate::args::{CallArgs, CallbackOverride};
use crate::callback::Callback;
use crate::config::Config;
use crate::receiver::{NoReceiver, Receiver};
use crate::sink::FallbackRecord;
use safecall_fault::Fault;
use serde_json::Value;
use std::sync::Arc;

type FreeOp = dyn Fn(&CallArgs) -> Result<Value, Fault> + Send + Sync;
type MethodOp<R> = dyn Fn(&mut R, &CallArgs) -> Result<Value, Fault> + Send + Sync;

enum Operation<R> {
    Free(Arc<FreeOp>),
    Method(Arc<MethodOp<R>>),
}

/// A wrapped operation
///
/// Produced by [`Config::bind`] (free form) or [`Config::bind_method`]
/// (receiver form). Each invocation is one pass:
///
/// 1. extract the reserved `default`/`callback`/`dest` overrides from the
///    named arguments (never forwarded to the operation)
/// 2. resolve the receiver (method wrappers only)
/// 3. run the operation; success returns immediately
/// 4. on a fault whose kind is intercepted, resolve the fallback value:
///    configured default, then the effective callback's return value, then
///    a call-time `default` override; emit one diagnostic record
/// 5. write the resolved value into the receiver's `dest` field when both
///    are present
///
/// A call-time `default` wins over the callback's result even though the
/// callback already ran; its side effects survive, its return value is
/// discarded. Faults outside the configured kind set, and faults raised by
/// the callback itself, propagate unchanged.
pub struct Wrapper<R = NoReceiver> {
    config: Config<R>,
    op: Operation<R>,
    has_receiver: bool,
}

impl<R> Wrapper<R> {
    pub(crate) fn bound_free(config: Config<R>, op: Arc<FreeOp>) -> Self {
        Self {
            config,
            op: Operation::Free(op),
            has_receiver: false,
        }
    }

    pub(crate) fn bound_method(config: Config<R>, op: Arc<MethodOp<R>>) -> Self {
        Self {
            config,
            op: Operation::Method(op),
            has_receiver: true,
        }
    }

    /// Whether this wrapper was bound to a receiver-taking operation
    ///
    /// Fixed at bind time, immutable thereafter.
    #[inline]
    #[must_use]
    pub fn has_receiver(&self) -> bool {
        self.has_receiver
    }

    /// The captured configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config<R> {
        &self.config
    }
}

impl<R: Receiver> Wrapper<R> {
    /// Invoke without a receiver
    ///
    /// For method-bound wrappers this fails with a dispatch fault before
    /// the operation runs; that fault is never intercepted.
    pub fn call(&self, args: CallArgs) -> Result<Value, Fault> {
        self.run(None, args)
    }

    /// Invoke on a receiver
    ///
    /// Free-bound wrappers ignore the receiver entirely: named callbacks
    /// and `dest` write-back are receiver features and stay inert.
    pub fn invoke(&self, receiver: &mut R, args: CallArgs) -> Result<Value, Fault> {
        self.run(Some(receiver), args)
    }

    fn run(&self, receiver: Option<&mut R>, mut args: CallArgs) -> Result<Value, Fault> {
        let overrides = args.take_overrides()?;

        // The receiver is live only for method-bound wrappers.
        let mut receiver = if self.has_receiver { receiver } else { None };

        let fault = match &self.op {
            Operation::Free(op) => match op(&args) {
                Ok(value) => return Ok(value),
                Err(fault) => fault,
            },
            Operation::Method(op) => {
                let recv = receiver
                    .as_mut()
                    .map(|r| &mut **r)
                    .ok_or_else(|| Fault::dispatch("method operation invoked without a receiver"))?;
                match op(recv, &args) {
                    Ok(value) => return Ok(value),
                    Err(fault) => fault,
                }
            }
        };

        if !fault.matches(self.config.kinds()) {
            return Err(fault);
        }

        let mut value = self.config.default_value().cloned();

        let effective = match overrides.callback {
            CallbackOverride::Inherit => self.config.callback().cloned(),
            CallbackOverride::Disable => None,
            CallbackOverride::Named(name) => Some(Callback::Named(name)),
        };
        if let Some(callback) = &effective {
            let recv = receiver.as_mut().map(|r| &mut **r);
            value = Some(Self::dispatch_callback(callback, recv, &fault, &args)?);
        }

        // Runs after the callback on purpose: a call-time default discards
        // the callback's return value but not its side effects.
        if let Some(supplied) = overrides.default {
            value = Some(supplied);
        }

        let resolved = value.unwrap_or(Value::Null);
        self.config.sink().record(&FallbackRecord {
            value: resolved.clone(),
            kind: fault.kind().clone(),
            message: fault.message().to_string(),
        });

        if let (Some(field), Some(recv)) = (overrides.dest.as_deref(), receiver.as_mut()) {
            recv.store(field, resolved.clone());
        }

        Ok(resolved)
    }

    fn dispatch_callback(
        callback: &Callback<R>,
        receiver: Option<&mut R>,
        fault: &Fault,
        args: &CallArgs,
    ) -> Result<Value, Fault> {
        match callback {
            Callback::Named(name) => {
                let recv = receiver.ok_or_else(|| {
                    Fault::dispatch(format!("named callback `{name}` requires a receiver"))
                })?;
                recv.dispatch(name, fault, args)
            }
            Callback::WithReceiver(f) => {
                let recv = receiver
                    .ok_or_else(|| Fault::dispatch("receiver callback requires a receiver"))?;
                f(recv, fault, args)
            }
            Callback::Free(f) => f(fault, args),
        }
    }
}

impl<R> std::fmt::Debug for Wrapper<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapper")
            .field("has_receiver", &self.has_receiver)
            .finish_non_exhaustive()
    }
}
