//! Conversions between [`Either`], [`Result`] and [`Try`].
//!
//! Each conversion is a single `fold` of the source. The success side of a
//! `Result` or `Try` always lands on the right of an `Either`, the failure
//! side on the left. `Result` and `Try` map onto each other side for side.
//!
//! # Examples
//!
//! ```
//! use dichotomy::conversion::{to_either, to_result};
//! use dichotomy::either::Either;
//! use dichotomy::result::Result;
//!
//! let right: Either<&str, i32> = Either::of_right(5);
//! assert_eq!(to_result(right), Result::of_ok(5));
//!
//! let left: Either<&str, i32> = Either::of_left("bad");
//! assert_eq!(to_result(left), Result::of_err("bad"));
//! assert_eq!(to_either(to_result(left)), left);
//! ```

use core::result::Result as StdResult;

use crate::either::Either;
use crate::errors::{require, Error, InvalidArgument};
use crate::result::Result;
use crate::trying::Try;

/// Containers that convert losslessly into an [`Either`].
pub trait ToEither<L, R> {
    fn to_either(self) -> Either<L, R>;
}

/// Containers that convert losslessly into a [`Result`].
pub trait ToResult<V, E> {
    fn to_result(self) -> Result<V, E>;
}

/// Containers that convert losslessly into a [`Try`].
///
/// The failure side must already satisfy [`Error`]; this is checked when the
/// conversion is compiled, so there is no runtime failure mode.
pub trait ToTry<V, X: Error> {
    fn to_try(self) -> Try<V, X>;
}

impl<V, E> ToEither<E, V> for Result<V, E> {
    /// `Ok` goes right, `Err` goes left.
    fn to_either(self) -> Either<E, V> {
        self.fold(Either::Right, Either::Left)
    }
}

impl<V, X: Error> ToEither<X, V> for Try<V, X> {
    /// `Ok` goes right, the captured failure goes left.
    fn to_either(self) -> Either<X, V> {
        self.fold(Either::Right, Either::Left)
    }
}

impl<L, R> ToResult<R, L> for Either<L, R> {
    /// Right becomes `Ok`, left becomes `Err`.
    fn to_result(self) -> Result<R, L> {
        self.fold(Result::Err, Result::Ok)
    }
}

impl<V, X: Error> ToResult<V, X> for Try<V, X> {
    fn to_result(self) -> Result<V, X> {
        self.fold(Result::Ok, Result::Err)
    }
}

impl<L: Error, R> ToTry<R, L> for Either<L, R> {
    /// Right becomes `Ok`; the left value is used as the failure as-is.
    fn to_try(self) -> Try<R, L> {
        self.fold(Try::Err, Try::Ok)
    }
}

impl<V, X: Error> ToTry<V, X> for Result<V, X> {
    fn to_try(self) -> Try<V, X> {
        self.fold(Try::Ok, Try::Err)
    }
}

pub fn to_either<L, R, C>(source: C) -> Either<L, R>
where
    C: ToEither<L, R>,
{
    source.to_either()
}

pub fn to_result<V, E, C>(source: C) -> Result<V, E>
where
    C: ToResult<V, E>,
{
    source.to_result()
}

pub fn to_try<V, X, C>(source: C) -> Try<V, X>
where
    X: Error,
    C: ToTry<V, X>,
{
    source.to_try()
}

/// # Errors
///
/// [`InvalidArgument::Absent`] if `source` is `None`.
pub fn try_to_either<L, R, C>(source: Option<C>) -> StdResult<Either<L, R>, InvalidArgument>
where
    C: ToEither<L, R>,
{
    require(source, "source").map(to_either)
}

/// # Errors
///
/// [`InvalidArgument::Absent`] if `source` is `None`.
pub fn try_to_result<V, E, C>(source: Option<C>) -> StdResult<Result<V, E>, InvalidArgument>
where
    C: ToResult<V, E>,
{
    require(source, "source").map(to_result)
}

/// # Errors
///
/// [`InvalidArgument::Absent`] if `source` is `None`.
pub fn try_to_try<V, X, C>(source: Option<C>) -> StdResult<Try<V, X>, InvalidArgument>
where
    X: Error,
    C: ToTry<V, X>,
{
    require(source, "source").map(to_try)
}
