//! Safe-call wrapping with priority-chain fallback resolution
//!
//! Wrap a fallible operation once; every invocation that fails with an
//! intercepted fault kind resolves to a fallback value instead of an error.
//! The fallback is chosen through a fixed priority chain: the configured
//! default, then a recovery callback's return value, then a call-time
//! `default` override. The resolved value can optionally be written back
//! into a named field of the receiving object.
//!
//! # Core Concepts
//!
//! - [`Config`]: captures wrapping configuration and binds it to one
//!   operation, producing a [`Wrapper`]
//! - [`Wrapper`]: the bound callable; [`Wrapper::call`] for free operations,
//!   [`Wrapper::invoke`] for operations that take a receiver
//! - [`Callback`]: tagged recovery-callback variants (named method on the
//!   receiver, free function, or function taking the receiver)
//! - [`Receiver`]: the seam receiver types implement for named-callback
//!   dispatch and `dest` write-back
//! - [`Sink`]: injectable diagnostic destination; one record per
//!   intercepted fault
//!
//! # Example
//!
//! ```rust
//! use safecall_core::{ops, CallArgs, Config, Wrapper};
//! use safecall_fault::{FaultKind, KindSet};
//! use serde_json::json;
//!
//! let lookup: Wrapper = Config::new()
//!     .with_default(json!("fallback"))
//!     .with_kinds(KindSet::only([FaultKind::MissingKey]))
//!     .bind(ops::map_lookup);
//!
//! // The key is present: the wrapper is invisible.
//! let args = CallArgs::new().with_arg(json!({"a": 1})).with_arg(json!("a"));
//! assert_eq!(lookup.call(args).unwrap(), json!(1));
//!
//! // The key is absent: the fault is intercepted and the default returned.
//! let args = CallArgs::new().with_arg(json!({"a": 1})).with_arg(json!("b"));
//! assert_eq!(lookup.call(args).unwrap(), json!("fallback"));
//! ```
//!
//! # Reserved call-time keywords
//!
//! The named arguments `default`, `callback`, and `dest` are consumed by
//! the wrapper before the operation runs and are never forwarded:
//!
//! - `default` — overrides the resolved fallback value for this call, even
//!   when a callback runs (the callback's side effects survive; its return
//!   value is discarded)
//! - `callback` — a handler name dispatched on the receiver, replacing the
//!   configured callback for this call; an explicit null disables it
//! - `dest` — the receiver field the resolved value is stored into

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod args;
mod callback;
mod config;
mod receiver;
mod sink;
mod wrapper;

pub mod ops;
pub mod telemetry;

pub use args::CallArgs;
pub use callback::{Callback, FreeFn, ReceiverFn};
pub use config::Config;
pub use receiver::{NoReceiver, Receiver};
pub use sink::{default_sink, FallbackRecord, MemorySink, Sink, TracingSink};
pub use wrapper::Wrapper;

/// Dynamic value type flowing through wrappers
pub use serde_json::Value;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
