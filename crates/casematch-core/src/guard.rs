//! Type guards: the first phase of matching a case against an input.
//!
//! A [`Guard`] answers "is this input a `T`?" and, when it is, hands back the
//! input retyped as `&T`. Guards carry a label so compiled dispatchers can
//! describe their cases in logs and `Debug` output.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::narrow::Narrow;

type NarrowFn<In, T> = dyn for<'a> Fn(&'a In) -> Option<&'a T> + Send + Sync;

/// Narrowing check from a dispatcher input `In` to a case type `T`.
///
/// Guards come in five flavours:
///
/// - [`Guard::exact`] defers to [`Narrow`], matching one concrete type or one
///   enum variant exactly;
/// - [`Guard::structural`] runs a caller-supplied narrowing function, which
///   may accept several shapes (for example, every variant that implements a
///   shared trait);
/// - [`Guard::equals`] narrows exactly and then compares with a literal;
/// - [`Guard::any`] accepts every input unchanged;
/// - [`Guard::from_fn`] passes through inputs that satisfy a boolean test.
///
/// # Example
///
/// ```
/// use std::any::Any;
///
/// use casematch_core::Guard;
///
/// let guard = Guard::<dyn Any, String>::exact();
/// let owned = String::from("hello");
/// assert_eq!(guard.narrow(&owned).map(String::len), Some(5));
/// assert!(guard.narrow(&5_u8).is_none());
/// ```
pub struct Guard<In: ?Sized, T: ?Sized> {
    narrow: Arc<NarrowFn<In, T>>,
    label: Cow<'static, str>,
    accepts_all: bool,
}

impl<In, T> Guard<In, T>
where
    In: ?Sized + 'static,
    T: ?Sized + 'static,
{
    /// Creates a guard from an arbitrary narrowing function.
    ///
    /// This is the "is-a" flavour: the function decides which inputs count as
    /// a `T`, so one guard may accept several concrete shapes.
    pub fn structural<F>(label: impl Into<Cow<'static, str>>, narrow: F) -> Self
    where
        F: for<'a> Fn(&'a In) -> Option<&'a T> + Send + Sync + 'static,
    {
        Self {
            narrow: Arc::new(narrow),
            label: label.into(),
            accepts_all: false,
        }
    }

    /// Narrows `input` to `T`, returning `None` when the guard rejects it.
    pub fn narrow<'a>(&self, input: &'a In) -> Option<&'a T> {
        (self.narrow)(input)
    }

    /// Returns the human-readable description of this guard.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` when the guard accepts every input.
    #[must_use]
    pub const fn accepts_all(&self) -> bool {
        self.accepts_all
    }
}

impl<In, T> Guard<In, T>
where
    In: ?Sized + Narrow<T> + 'static,
    T: ?Sized + 'static,
{
    /// Creates a guard that narrows through the input's [`Narrow`] impl.
    ///
    /// The label is the name of `T`.
    #[must_use]
    pub fn exact() -> Self {
        Self {
            narrow: Arc::new(narrow_exact::<In, T>),
            label: Cow::Borrowed(type_name::<T>()),
            accepts_all: false,
        }
    }
}

impl<In, V> Guard<In, V>
where
    In: ?Sized + Narrow<V> + 'static,
    V: PartialEq + fmt::Debug + Send + Sync + 'static,
{
    /// Creates a guard accepting inputs that narrow to `V` and equal
    /// `expected`.
    ///
    /// Equality is [`PartialEq`], so two independently constructed equal
    /// values both match.
    #[must_use]
    pub fn equals(expected: V) -> Self {
        let label = format!("== {expected:?}");
        Self::structural(label, move |input| {
            <In as Narrow<V>>::narrow(input).filter(|candidate| **candidate == expected)
        })
    }
}

impl<In> Guard<In, In>
where
    In: ?Sized + 'static,
{
    /// Creates a catch-all guard that passes every input through unchanged.
    #[must_use]
    pub fn any() -> Self {
        Self {
            narrow: Arc::new(narrow_identity::<In>),
            label: Cow::Borrowed("any"),
            accepts_all: true,
        }
    }

    /// Creates a guard that passes through inputs satisfying `test`.
    ///
    /// Useful for conditions on the whole input that no single narrowed type
    /// expresses. The guard is never treated as a catch-all.
    pub fn from_fn<F>(label: impl Into<Cow<'static, str>>, test: F) -> Self
    where
        F: Fn(&In) -> bool + Send + Sync + 'static,
    {
        Self::structural(label, move |input| test(input).then_some(input))
    }
}

fn narrow_exact<In, T>(input: &In) -> Option<&T>
where
    In: ?Sized + Narrow<T>,
    T: ?Sized,
{
    input.narrow()
}

fn narrow_identity<In: ?Sized>(input: &In) -> Option<&In> {
    Some(input)
}

impl<In: ?Sized, T: ?Sized> Clone for Guard<In, T> {
    fn clone(&self) -> Self {
        Self {
            narrow: Arc::clone(&self.narrow),
            label: self.label.clone(),
            accepts_all: self.accepts_all,
        }
    }
}

impl<In: ?Sized, T: ?Sized> fmt::Debug for Guard<In, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Guard")
            .field("label", &self.label)
            .field("accepts_all", &self.accepts_all)
            .finish_non_exhaustive()
    }
}
