//! Case entries: ordered (guard, predicate, handler) rules.
//!
//! A dispatcher holds cases of many different narrowed types in one ordered
//! list, so every [`CaseEntry`] is erased behind the object-safe [`Case`]
//! trait, which is keyed only on the dispatcher's input, output, and error
//! types.

use std::fmt;
use std::sync::Arc;

use crate::guard::Guard;
use crate::handler::Handler;
use crate::predicate::Predicate;

/// Type-erased view of one case, as seen by a compiled dispatcher.
///
/// Each call evaluates the guard at most once and the predicate at most
/// once. A handler runs only from [`Case::try_apply`], and only on a value
/// both checks accepted.
pub trait Case<In: ?Sized, Out, E>: Send + Sync {
    /// Returns the human-readable description of the case.
    fn label(&self) -> &str;

    /// Returns `true` when the case accepts every input.
    fn is_catch_all(&self) -> bool;

    /// Reports whether the guard and predicate both accept `input`.
    ///
    /// Never invokes the handler.
    fn accepts(&self, input: &In) -> bool;

    /// Runs the handler when the guard and predicate both accept `input`.
    ///
    /// Returns `None` when the case does not match, otherwise the handler's
    /// result exactly as produced.
    fn try_apply(&self, input: &In) -> Option<Result<Out, E>>;
}

/// One rule of a dispatcher: guard, optional predicate, handler.
///
/// The guard narrows the input to `T`; the predicate, when present, tests
/// the narrowed `T`; the handler receives the narrowed `T`.
pub struct CaseEntry<In: ?Sized, T: ?Sized, Out, E> {
    guard: Guard<In, T>,
    predicate: Option<Predicate<T>>,
    handler: Handler<T, Out, E>,
}

impl<In, T, Out, E> CaseEntry<In, T, Out, E>
where
    In: ?Sized + 'static,
    T: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    /// Creates a case entry. A missing predicate always holds.
    #[must_use]
    pub const fn new(
        guard: Guard<In, T>,
        predicate: Option<Predicate<T>>,
        handler: Handler<T, Out, E>,
    ) -> Self {
        Self {
            guard,
            predicate,
            handler,
        }
    }

    /// Returns the entry's guard.
    #[must_use]
    pub const fn guard(&self) -> &Guard<In, T> {
        &self.guard
    }

    /// Returns the entry's predicate, if any.
    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate<T>> {
        self.predicate.as_ref()
    }

    fn select<'a>(&self, input: &'a In) -> Option<&'a T> {
        let narrowed = self.guard.narrow(input)?;
        self.predicate
            .as_ref()
            .is_none_or(|predicate| predicate.test(narrowed))
            .then_some(narrowed)
    }
}

impl<In, T, Out, E> Case<In, Out, E> for CaseEntry<In, T, Out, E>
where
    In: ?Sized + 'static,
    T: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    fn label(&self) -> &str {
        self.guard.label()
    }

    fn is_catch_all(&self) -> bool {
        self.guard.accepts_all() && self.predicate.is_none()
    }

    fn accepts(&self, input: &In) -> bool {
        self.select(input).is_some()
    }

    fn try_apply(&self, input: &In) -> Option<Result<Out, E>> {
        self.select(input).map(|narrowed| self.handler.call(narrowed))
    }
}

impl<In: ?Sized, T: ?Sized, Out, E> fmt::Debug for CaseEntry<In, T, Out, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaseEntry")
            .field("guard", &self.guard)
            .field("has_predicate", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

/// A case whose successful output is passed through a mapping function.
///
/// Matching is delegated to the inner case untouched; only the handler's
/// `Ok` value is transformed. Errors pass through unchanged.
pub struct MappedCase<In: ?Sized, Mid, Out, E> {
    inner: Arc<dyn Case<In, Mid, E>>,
    map: Arc<dyn Fn(Mid) -> Out + Send + Sync>,
}

impl<In, Mid, Out, E> MappedCase<In, Mid, Out, E>
where
    In: ?Sized + 'static,
    Mid: 'static,
    Out: 'static,
    E: 'static,
{
    /// Wraps `inner`, mapping each successful result with `map`.
    #[must_use]
    pub fn new(
        inner: Arc<dyn Case<In, Mid, E>>,
        map: Arc<dyn Fn(Mid) -> Out + Send + Sync>,
    ) -> Self {
        Self { inner, map }
    }
}

impl<In, Mid, Out, E> Case<In, Out, E> for MappedCase<In, Mid, Out, E>
where
    In: ?Sized + 'static,
    Mid: 'static,
    Out: 'static,
    E: 'static,
{
    fn label(&self) -> &str {
        self.inner.label()
    }

    fn is_catch_all(&self) -> bool {
        self.inner.is_catch_all()
    }

    fn accepts(&self, input: &In) -> bool {
        self.inner.accepts(input)
    }

    fn try_apply(&self, input: &In) -> Option<Result<Out, E>> {
        self.inner
            .try_apply(input)
            .map(|outcome| outcome.map(|value| (self.map)(value)))
    }
}
