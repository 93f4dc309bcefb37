//! Handlers invoked for matched case values.

use std::fmt;
use std::sync::Arc;

/// Computation run on a value that passed its case's guard and predicate.
///
/// Handlers are shared by every invocation of a compiled dispatcher, possibly
/// from several threads at once, so they are `Fn + Send + Sync`. A handler that
/// needs to mutate state does so through interior mutability.
///
/// Failures are ordinary `Err` values of the caller's error type `E`; the
/// dispatcher returns them exactly as produced.
pub struct Handler<T: ?Sized, Out, E> {
    call: Arc<dyn Fn(&T) -> Result<Out, E> + Send + Sync>,
}

impl<T, Out, E> Handler<T, Out, E>
where
    T: ?Sized + 'static,
    Out: 'static,
    E: 'static,
{
    /// Wraps a fallible closure.
    pub fn new<F>(call: F) -> Self
    where
        F: Fn(&T) -> Result<Out, E> + Send + Sync + 'static,
    {
        Self {
            call: Arc::new(call),
        }
    }

    /// Runs the handler on a narrowed value.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure produces.
    pub fn call(&self, value: &T) -> Result<Out, E> {
        (self.call)(value)
    }
}

impl<T: ?Sized, Out, E> Clone for Handler<T, Out, E> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<T: ?Sized, Out, E> fmt::Debug for Handler<T, Out, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Handler").finish_non_exhaustive()
    }
}
