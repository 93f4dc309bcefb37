//! Runtime narrowing of dispatcher inputs.
//!
//! A dispatcher is declared over one input type, usually a trait object such
//! as `dyn Any + Send` or a closed message enum. [`Narrow`] is the capability
//! a guard uses to ask "is this input really a `T`?" without reflection.

use std::any::Any;

/// Views a borrowed input as a narrower type `T`.
///
/// Implementations must be exact: `narrow` returns `Some` only when the input
/// is a `T` (the same concrete type, or the same enum variant), never for a
/// merely similar shape. Structural "is-a" narrowing belongs in
/// [`Guard::structural`](crate::Guard::structural) instead.
///
/// The standard trait objects `dyn Any`, `dyn Any + Send`, and
/// `dyn Any + Send + Sync` narrow to every `'static` type by downcasting.
/// A boxed message must be passed as `&*boxed`: `&boxed` coerces the `Box`
/// itself to `&dyn Any`, and then only narrows to the `Box` type.
///
/// ```
/// use std::any::Any;
///
/// use casematch_core::Narrow;
///
/// let message: Box<dyn Any + Send> = Box::new(5_i64);
/// let inner: Option<&i64> = (*message).narrow();
/// assert_eq!(inner, Some(&5));
///
/// let outer: &dyn Any = &message;
/// let wrapped: Option<&i64> = outer.narrow();
/// assert!(wrapped.is_none());
/// ```
///
/// # Example
///
/// ```
/// use casematch_core::Narrow;
///
/// struct Ping(u32);
///
/// enum Message {
///     Ping(Ping),
///     Stop,
/// }
///
/// impl Narrow<Ping> for Message {
///     fn narrow(&self) -> Option<&Ping> {
///         match self {
///             Self::Ping(ping) => Some(ping),
///             Self::Stop => None,
///         }
///     }
/// }
///
/// let message = Message::Ping(Ping(7));
/// let ping: Option<&Ping> = message.narrow();
/// assert_eq!(ping.map(|p| p.0), Some(7));
/// ```
pub trait Narrow<T: ?Sized> {
    /// Returns the input viewed as `T`, or `None` when it is not a `T`.
    fn narrow(&self) -> Option<&T>;
}

macro_rules! narrow_by_downcast {
    ($($object:ty),+ $(,)?) => {
        $(
            impl<T: Any> Narrow<T> for $object {
                fn narrow(&self) -> Option<&T> {
                    self.downcast_ref::<T>()
                }
            }
        )+
    };
}

narrow_by_downcast!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);
