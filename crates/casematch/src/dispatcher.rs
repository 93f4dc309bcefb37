//! Compiled dispatchers.
//!
//! A [`Dispatcher`] is the immutable result of finalizing a
//! [`Builder`](crate::Builder). Matching is a linear scan in declaration
//! order and the first case whose guard and predicate both accept the input
//! wins, exactly like a chain of `if` / `else if` clauses. Cases do not need
//! to be mutually exclusive.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use casematch_core::{Case, DispatchConfig, DispatchError, MappedCase, NoMatch};
use tracing::{debug, trace};

/// Tracing target for dispatch operations.
pub const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Immutable, ordered, reusable dispatch function.
///
/// Cases are shared behind reference counts, so cloning a dispatcher is
/// cheap and clones never diverge. The dispatcher keeps no mutable state and
/// may be invoked from many threads at once.
///
/// # Example
///
/// ```
/// use std::any::Any;
///
/// use casematch::{Builder, Dispatcher};
///
/// let dispatcher: Dispatcher<dyn Any, i64> = Builder::<dyn Any, i64>::new()
///     .match_type(|n: &i32| Ok(i64::from(*n) + 1))
///     .build();
///
/// assert!(!dispatcher.is_defined_at(&"x"));
/// let error = dispatcher.apply(&"x").expect_err("strings are unhandled");
/// assert!(error.is_no_match());
/// ```
///
/// # Boxed messages
///
/// Apply a boxed message through `&*message`. Passing `&message` coerces the
/// `Box` itself to the input trait object, so no exact guard matches it.
///
/// ```
/// use std::any::Any;
///
/// use casematch::{Receive, ReceiveBuilder};
///
/// let receive: Receive<dyn Any + Send> = ReceiveBuilder::<dyn Any + Send>::new()
///     .match_type(|_: &i64| Ok(()))
///     .build();
///
/// let message: Box<dyn Any + Send> = Box::new(5_i64);
/// assert!(receive.is_defined_at(&*message));
/// assert!(!receive.is_defined_at(&message));
/// ```
pub struct Dispatcher<In: ?Sized, Out, E = Infallible> {
    cases: Arc<[Arc<dyn Case<In, Out, E>>]>,
    log_unhandled: bool,
}

/// A dispatcher whose handlers only perform side effects.
pub type Receive<In, E = Infallible> = Dispatcher<In, (), E>;

impl<In, Out, E> Dispatcher<In, Out, E>
where
    In: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    pub(crate) fn from_cases(cases: Vec<Arc<dyn Case<In, Out, E>>>, config: &DispatchConfig) -> Self {
        Self {
            cases: cases.into(),
            log_unhandled: config.log_unhandled(),
        }
    }

    /// Creates a dispatcher with no cases; it is defined nowhere.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_cases(Vec::new(), &DispatchConfig::default())
    }

    /// Reports whether some case accepts `input`.
    ///
    /// Evaluates guards and predicates in declaration order until one case
    /// accepts. Never invokes a handler.
    pub fn is_defined_at(&self, input: &In) -> bool {
        self.cases.iter().any(|case| case.accepts(input))
    }

    /// Runs the first case that accepts `input`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoMatch`] when no case accepts the input, and
    /// [`DispatchError::Handler`] carrying the handler's own error when the
    /// selected handler fails.
    pub fn apply(&self, input: &In) -> Result<Out, DispatchError<E>> {
        self.try_apply(input).map_or_else(
            || Err(DispatchError::NoMatch(self.no_match())),
            |outcome| outcome.map_err(DispatchError::Handler),
        )
    }

    /// Runs the first case that accepts `input`, reporting whether one did.
    ///
    /// Returns `None` when no case matched, otherwise the handler's result
    /// exactly as the handler returned it. Each guard and predicate runs at
    /// most once, so this avoids the double evaluation of calling
    /// [`Self::is_defined_at`] before [`Self::apply`].
    pub fn try_apply(&self, input: &In) -> Option<Result<Out, E>> {
        for (index, case) in self.cases.iter().enumerate() {
            if let Some(outcome) = case.try_apply(input) {
                trace!(
                    target: DISPATCH_TARGET,
                    index,
                    case = case.label(),
                    "case handled input"
                );
                return Some(outcome);
            }
        }
        if self.log_unhandled {
            debug!(
                target: DISPATCH_TARGET,
                cases = self.cases.len(),
                "no case matched input"
            );
        }
        None
    }

    /// Runs the first matching case, or `default` when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever function ran.
    pub fn apply_or_else<F>(&self, input: &In, default: F) -> Result<Out, E>
    where
        F: FnOnce(&In) -> Result<Out, E>,
    {
        self.try_apply(input).unwrap_or_else(|| default(input))
    }

    /// Chains `fallback` behind this dispatcher.
    ///
    /// The result tries every case of `self` first, then every case of
    /// `fallback`. Cases are shared, not rebuilt.
    #[must_use]
    pub fn or_else(self, fallback: Self) -> Self {
        let cases: Vec<_> = self
            .cases
            .iter()
            .chain(fallback.cases.iter())
            .cloned()
            .collect();
        Self {
            cases: cases.into(),
            log_unhandled: self.log_unhandled || fallback.log_unhandled,
        }
    }

    /// Post-composes every handler's successful output with `map`.
    ///
    /// Matching is unchanged; handler errors pass through untouched.
    #[must_use]
    pub fn map<Next, F>(self, map: F) -> Dispatcher<In, Next, E>
    where
        Next: 'static,
        F: Fn(Out) -> Next + Send + Sync + 'static,
    {
        let map: Arc<dyn Fn(Out) -> Next + Send + Sync> = Arc::new(map);
        let cases: Vec<Arc<dyn Case<In, Next, E>>> = self
            .cases
            .iter()
            .map(|case| {
                Arc::new(MappedCase::new(Arc::clone(case), Arc::clone(&map)))
                    as Arc<dyn Case<In, Next, E>>
            })
            .collect();
        Dispatcher {
            cases: cases.into(),
            log_unhandled: self.log_unhandled,
        }
    }

    /// Returns the number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` when the dispatcher has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns the case labels in declaration order.
    pub fn case_labels(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.label())
    }

    fn no_match(&self) -> NoMatch {
        NoMatch::new(self.cases.len())
    }
}

impl<In, Out, E> Default for Dispatcher<In, Out, E>
where
    In: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<In: ?Sized, Out, E> Clone for Dispatcher<In, Out, E> {
    fn clone(&self) -> Self {
        Self {
            cases: Arc::clone(&self.cases),
            log_unhandled: self.log_unhandled,
        }
    }
}

impl<In: ?Sized, Out, E> fmt::Debug for Dispatcher<In, Out, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.cases.iter().map(|case| case.label()).collect();
        formatter
            .debug_struct("Dispatcher")
            .field("cases", &labels)
            .finish_non_exhaustive()
    }
}
