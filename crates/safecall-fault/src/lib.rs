//! Fault classification for safe-call wrappers
//!
//! A wrapper decides whether to intercept a failure by looking at its
//! *kind*, not its concrete type.
//!
//! # Core Concepts
//!
//! - [`FaultKind`]: the classified category of a failure
//! - [`Fault`]: a failure carrying a kind and a message
//! - [`KindSet`]: the set of kinds a wrapper intercepts
//!
//! # Example
//!
//! ```rust
//! use safecall_fault::{Fault, FaultKind, KindSet};
//!
//! let kinds = KindSet::only([FaultKind::MissingKey]);
//! let fault = Fault::missing_key("b");
//!
//! assert!(kinds.contains(fault.kind()));
//! assert!(!kinds.contains(&FaultKind::IndexOutOfRange));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod fault;
mod kind;

pub use fault::Fault;
pub use kind::{FaultKind, KindSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
