//! Value predicates evaluated on narrowed case values.

use std::fmt;
use std::sync::Arc;

/// Boolean test over a value that has already passed its case's guard.
///
/// Predicates never see the raw dispatcher input, so they can use the
/// narrowed type's members directly.
pub struct Predicate<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Wraps a boolean-valued closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluates the predicate.
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Combines two predicates; the result holds when both hold.
    ///
    /// `other` is not evaluated when `self` already rejects the value.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Predicate").finish_non_exhaustive()
    }
}
