//! Casematch: ordered, typed pattern-matching dispatchers.
//!
//! Declare cases one at a time ("if the input is a `T`, and optionally
//! satisfies a predicate, run this handler") on a [`Builder`], then compile
//! them into an immutable [`Dispatcher`]. The dispatcher is a partial
//! function over its input: [`Dispatcher::is_defined_at`] reports whether any
//! case accepts an input, and [`Dispatcher::apply`] runs the first case that
//! does, failing with [`NoMatch`] when none does.
//!
//! Dispatchers are `Send + Sync + Clone` and hold no mutable state, so one
//! instance can serve many message loops at once.
//!
//! # Core types
//!
//! - [`Builder`] — append-only case accumulator
//! - [`Dispatcher`] — the compiled, first-match-wins dispatch function
//! - [`ReceiveBuilder`] and [`Receive`] — aliases for side-effecting handlers
//! - [`Guard`], [`Predicate`], [`Handler`], [`Narrow`] — case building blocks
//! - [`DispatchError`], [`NoMatch`], [`BuildError`] — failure signals
//! - [`DispatchConfig`] — build policy and dispatch logging
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//!
//! use casematch::{Builder, Dispatcher};
//!
//! let dispatcher: Dispatcher<dyn Any, i64> = Builder::<dyn Any, i64>::new()
//!     .match_type(|n: &i32| Ok(i64::from(*n) + 1))
//!     .match_type(|s: &String| Ok(i64::try_from(s.len()).unwrap_or(i64::MAX)))
//!     .match_any(|_| Ok(-1))
//!     .build();
//!
//! assert_eq!(dispatcher.apply(&5_i32).ok(), Some(6));
//! assert_eq!(dispatcher.apply(&String::from("ab")).ok(), Some(2));
//! assert_eq!(dispatcher.apply(&2.5_f64).ok(), Some(-1));
//! assert!(dispatcher.is_defined_at(&()));
//! ```

mod builder;
mod dispatcher;

pub use casematch_core::{
    BuildError, Case, CaseEntry, ConfigError, DispatchConfig, DispatchError, Guard, Handler,
    MappedCase, Narrow, NoMatch, Predicate, UnreachableCasePolicy,
    UnreachableCasePolicyParseError, defaults,
};

pub use builder::{Builder, ReceiveBuilder};
pub use dispatcher::{DISPATCH_TARGET, Dispatcher, Receive};

#[cfg(test)]
mod tests;
