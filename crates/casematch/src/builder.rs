//! Case accumulation.
//!
//! A [`Builder`] collects cases in declaration order and is consumed by
//! [`Builder::build`] or [`Builder::try_build`]. Cloning a builder snapshots
//! its case list, so appending to one copy never changes a dispatcher
//! compiled from another.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use casematch_core::{
    BuildError, Case, CaseEntry, DispatchConfig, Guard, Handler, Narrow, Predicate,
    UnreachableCasePolicy,
};
use tracing::{debug, warn};

use crate::dispatcher::{DISPATCH_TARGET, Dispatcher};

/// Append-only accumulator of cases for a [`Dispatcher`].
///
/// `In` is the dispatcher's input type (often `dyn Any + Send` or a message
/// enum), `Out` the handlers' output and `E` the handlers' error type.
///
/// # Example
///
/// ```
/// use std::any::Any;
///
/// use casematch::Builder;
///
/// let dispatcher = Builder::<dyn Any, &'static str>::new()
///     .match_equals(0_u8, |_| Ok("zero"))
///     .match_type_if(|n: &u8| n % 2 == 0, |_| Ok("even"))
///     .match_type(|_: &u8| Ok("odd"))
///     .build();
///
/// assert_eq!(dispatcher.apply(&0_u8).ok(), Some("zero"));
/// assert_eq!(dispatcher.apply(&4_u8).ok(), Some("even"));
/// assert_eq!(dispatcher.apply(&7_u8).ok(), Some("odd"));
/// assert!(!dispatcher.is_defined_at(&7_u16));
/// ```
pub struct Builder<In: ?Sized, Out, E = Infallible> {
    cases: Vec<Arc<dyn Case<In, Out, E>>>,
    config: DispatchConfig,
}

/// A builder whose handlers only perform side effects.
pub type ReceiveBuilder<In, E = Infallible> = Builder<In, (), E>;

impl<In, Out, E> Builder<In, Out, E>
where
    In: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cases: Vec::new(),
            config: DispatchConfig::default(),
        }
    }

    /// Replaces the configuration used when compiling.
    #[must_use]
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration used when compiling.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Appends a case built from its three parts.
    #[must_use]
    pub fn add_case<T>(
        mut self,
        guard: Guard<In, T>,
        predicate: Option<Predicate<T>>,
        handler: Handler<T, Out, E>,
    ) -> Self
    where
        T: ?Sized + 'static,
    {
        self.cases
            .push(Arc::new(CaseEntry::new(guard, predicate, handler)));
        self
    }

    /// Appends a case matching inputs that narrow exactly to `T`.
    #[must_use]
    pub fn match_type<T, F>(self, handler: F) -> Self
    where
        In: Narrow<T>,
        T: ?Sized + 'static,
        F: Fn(&T) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(Guard::exact(), None, Handler::new(handler))
    }

    /// Appends a case matching inputs that narrow exactly to `T` and
    /// satisfy `predicate`.
    #[must_use]
    pub fn match_type_if<T, P, F>(self, predicate: P, handler: F) -> Self
    where
        In: Narrow<T>,
        T: ?Sized + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(
            Guard::exact(),
            Some(Predicate::new(predicate)),
            Handler::new(handler),
        )
    }

    /// Appends a case matching inputs equal to `value`.
    ///
    /// The input must narrow to `V` and compare equal with [`PartialEq`].
    #[must_use]
    pub fn match_equals<V, F>(self, value: V, handler: F) -> Self
    where
        In: Narrow<V>,
        V: PartialEq + fmt::Debug + Send + Sync + 'static,
        F: Fn(&V) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(Guard::equals(value), None, Handler::new(handler))
    }

    /// Appends a catch-all case that accepts every input.
    ///
    /// Cases appended after a catch-all can never run; see
    /// [`UnreachableCasePolicy`].
    #[must_use]
    pub fn match_any<F>(self, handler: F) -> Self
    where
        F: Fn(&In) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(Guard::any(), None, Handler::new(handler))
    }

    /// Appends a case using an explicit guard, such as a structural one.
    #[must_use]
    pub fn match_with<T, F>(self, guard: Guard<In, T>, handler: F) -> Self
    where
        T: ?Sized + 'static,
        F: Fn(&T) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(guard, None, Handler::new(handler))
    }

    /// Appends a case using an explicit guard and a predicate.
    #[must_use]
    pub fn match_with_if<T, P, F>(self, guard: Guard<In, T>, predicate: P, handler: F) -> Self
    where
        T: ?Sized + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
        F: Fn(&T) -> Result<Out, E> + Send + Sync + 'static,
    {
        self.add_case(guard, Some(Predicate::new(predicate)), Handler::new(handler))
    }

    /// Returns the number of cases declared so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` when no case has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Compiles the declared cases into a dispatcher.
    ///
    /// Cases declared after a catch-all are kept as dead cases. Unless the
    /// policy is [`UnreachableCasePolicy::Tolerate`], each one is logged as a
    /// warning.
    #[must_use]
    pub fn build(self) -> Dispatcher<In, Out, E> {
        if self.config.unreachable_cases() != UnreachableCasePolicy::Tolerate {
            for error in self.unreachable_cases() {
                warn!(target: DISPATCH_TARGET, %error, "dispatcher contains an unreachable case");
            }
        }
        self.compile()
    }

    /// Compiles the declared cases, enforcing the unreachable case policy.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnreachableCase`] for the first case declared
    /// after a catch-all when the policy is
    /// [`UnreachableCasePolicy::Reject`].
    pub fn try_build(self) -> Result<Dispatcher<In, Out, E>, BuildError> {
        if self.config.unreachable_cases() == UnreachableCasePolicy::Reject {
            if let Some(error) = self.unreachable_cases().into_iter().next() {
                return Err(error);
            }
        }
        Ok(self.build())
    }

    fn compile(self) -> Dispatcher<In, Out, E> {
        debug!(
            target: DISPATCH_TARGET,
            cases = self.cases.len(),
            "compiled dispatcher"
        );
        Dispatcher::from_cases(self.cases, &self.config)
    }

    fn unreachable_cases(&self) -> Vec<BuildError> {
        let Some(catch_all_index) = self.cases.iter().position(|case| case.is_catch_all()) else {
            return Vec::new();
        };
        self.cases
            .iter()
            .enumerate()
            .skip(catch_all_index + 1)
            .map(|(index, case)| BuildError::unreachable_case(index, case.label(), catch_all_index))
            .collect()
    }
}

impl<In, Out, E> Default for Builder<In, Out, E>
where
    In: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<In: ?Sized, Out, E> Clone for Builder<In, Out, E> {
    fn clone(&self) -> Self {
        Self {
            cases: self.cases.clone(),
            config: self.config,
        }
    }
}

impl<In: ?Sized, Out, E> fmt::Debug for Builder<In, Out, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.cases.iter().map(|case| case.label()).collect();
        formatter
            .debug_struct("Builder")
            .field("cases", &labels)
            .field("config", &self.config)
            .finish()
    }
}
