//! Operations that may fail while producing a value.
//!
//! Failure is the `Err` side of the returned `core::result::Result`. Nothing
//! here swallows it: composed operations hand the first failure straight back
//! to the caller. [`Try`](super::Try) is where failures get captured.

use core::marker::PhantomData;

use crate::errors::{require, InvalidArgument};

/// A one-argument operation that returns `R` or fails with `X`.
///
/// Every `Fn(T) -> Result<R, X>` is an `ExFunction`.
pub trait ExFunction<T, R, X> {
    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Whatever failure the operation itself raises.
    fn apply(&self, t: T) -> Result<R, X>;

    /// Returns an operation that runs `self`, then feeds its output to `after`.
    ///
    /// If `self` fails, `after` is never run.
    ///
    /// # Examples
    ///
    /// ```
    /// use dichotomy::trying::function::ExFunction;
    ///
    /// let ten = |_: ()| Ok::<i32, std::fmt::Error>(10);
    /// let double = |x: i32| Ok(x * 2);
    /// assert_eq!(ten.and_then(double).apply(()), Ok(20));
    /// ```
    fn and_then<V, N>(self, after: N) -> AndThen<Self, N, R>
    where
        Self: Sized,
        N: ExFunction<R, V, X>,
    {
        AndThen {
            first: self,
            after,
            _marker: PhantomData,
        }
    }

    /// [`and_then`](Self::and_then) for a continuation that may be absent.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `after` is `None`.
    fn try_and_then<V, N>(self, after: Option<N>) -> Result<AndThen<Self, N, R>, InvalidArgument>
    where
        Self: Sized,
        N: ExFunction<R, V, X>,
    {
        let after = require(after, "after")?;
        Ok(self.and_then::<V, N>(after))
    }

    /// Returns an operation that runs the plain function `before`, then `self`.
    fn compose<S, B>(self, before: B) -> Compose<B, Self, T>
    where
        Self: Sized,
        B: Fn(S) -> T,
    {
        Compose {
            before,
            then: self,
            _marker: PhantomData,
        }
    }
}

impl<F, T, R, X> ExFunction<T, R, X> for F
where
    F: Fn(T) -> Result<R, X>,
{
    fn apply(&self, t: T) -> Result<R, X> {
        self(t)
    }
}

/// A two-argument operation that returns `R` or fails with `X`.
///
/// Every `Fn(T, U) -> Result<R, X>` is an `ExBiFunction`.
pub trait ExBiFunction<T, U, R, X> {
    /// Runs the operation.
    ///
    /// # Errors
    ///
    /// Whatever failure the operation itself raises.
    fn apply(&self, t: T, u: U) -> Result<R, X>;

    /// Returns an operation that runs `self`, then feeds its output to `after`.
    fn and_then<V, N>(self, after: N) -> BiAndThen<Self, N, R>
    where
        Self: Sized,
        N: ExFunction<R, V, X>,
    {
        BiAndThen {
            first: self,
            after,
            _marker: PhantomData,
        }
    }

    /// [`and_then`](Self::and_then) for a continuation that may be absent.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `after` is `None`.
    fn try_and_then<V, N>(self, after: Option<N>) -> Result<BiAndThen<Self, N, R>, InvalidArgument>
    where
        Self: Sized,
        N: ExFunction<R, V, X>,
    {
        let after = require(after, "after")?;
        Ok(self.and_then::<V, N>(after))
    }
}

impl<F, T, U, R, X> ExBiFunction<T, U, R, X> for F
where
    F: Fn(T, U) -> Result<R, X>,
{
    fn apply(&self, t: T, u: U) -> Result<R, X> {
        self(t, u)
    }
}

/// Sequential composition of two [`ExFunction`]s, see [`ExFunction::and_then`].
///
/// `R` is the intermediate type handed from the first stage to the second.
pub struct AndThen<F, G, R> {
    first: F,
    after: G,
    _marker: PhantomData<fn() -> R>,
}

impl<F, G, T, R, V, X> ExFunction<T, V, X> for AndThen<F, G, R>
where
    F: ExFunction<T, R, X>,
    G: ExFunction<R, V, X>,
{
    fn apply(&self, t: T) -> Result<V, X> {
        self.after.apply(self.first.apply(t)?)
    }
}

/// A plain function followed by an [`ExFunction`], see [`ExFunction::compose`].
pub struct Compose<B, F, T> {
    before: B,
    then: F,
    _marker: PhantomData<fn() -> T>,
}

impl<B, F, S, T, R, X> ExFunction<S, R, X> for Compose<B, F, T>
where
    B: Fn(S) -> T,
    F: ExFunction<T, R, X>,
{
    fn apply(&self, s: S) -> Result<R, X> {
        self.then.apply((self.before)(s))
    }
}

/// An [`ExBiFunction`] followed by an [`ExFunction`], see
/// [`ExBiFunction::and_then`].
pub struct BiAndThen<F, G, R> {
    first: F,
    after: G,
    _marker: PhantomData<fn() -> R>,
}

impl<F, G, T, U, R, V, X> ExBiFunction<T, U, V, X> for BiAndThen<F, G, R>
where
    F: ExBiFunction<T, U, R, X>,
    G: ExFunction<R, V, X>,
{
    fn apply(&self, t: T, u: U) -> Result<V, X> {
        self.after.apply(self.first.apply(t, u)?)
    }
}
