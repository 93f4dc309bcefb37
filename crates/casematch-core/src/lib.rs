//! Core case model for the casematch dispatcher builder.
//!
//! This crate provides the building blocks that the `casematch` facade
//! assembles into compiled dispatchers: narrowing guards, value predicates,
//! handlers, type-erased case entries, the error vocabulary, and dispatch
//! configuration. It is re-exported by the `casematch` crate for stable
//! public consumption.
//!
//! # Core types
//!
//! - [`Narrow`] — capability for viewing an input as a narrower type
//! - [`Guard`] — a labelled narrowing check (exact, structural, equality, any)
//! - [`Predicate`] — a boolean test over an already narrowed value
//! - [`Handler`] — the fallible computation run for a matched value
//! - [`Case`] and [`CaseEntry`] — one ordered (guard, predicate, handler) rule
//! - [`NoMatch`], [`DispatchError`], [`BuildError`] — failure signals
//! - [`DispatchConfig`] — build policy and dispatch logging switches
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use std::convert::Infallible;
//!
//! use casematch_core::{Case, CaseEntry, Guard, Handler, Predicate};
//!
//! let entry = CaseEntry::new(
//!     Guard::<dyn Any, i32>::exact(),
//!     Some(Predicate::new(|n: &i32| *n > 0)),
//!     Handler::new(|n: &i32| Ok::<_, Infallible>(n * 2)),
//! );
//! assert!(entry.accepts(&4_i32));
//! assert!(!entry.accepts(&-4_i32));
//! assert!(!entry.accepts(&"four"));
//! ```

mod case;
mod config;
pub mod defaults;
mod error;
mod guard;
mod handler;
mod narrow;
mod predicate;

pub use case::{Case, CaseEntry, MappedCase};
pub use config::{DispatchConfig, UnreachableCasePolicy, UnreachableCasePolicyParseError};
pub use error::{BuildError, ConfigError, DispatchError, NoMatch};
pub use guard::Guard;
pub use handler::Handler;
pub use narrow::Narrow;
pub use predicate::Predicate;

#[cfg(test)]
mod tests;
