use crate::errors::{require, InvalidArgument};

/// A value that is exactly one of `L` or `R`.
///
/// Neither side means success or failure; see [`crate::result::Result`] for
/// that. `Left`/`Right` is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

use Either::{Left, Right};

impl<L, R> Either<L, R> {
    /// Creates a left-holding `Either`.
    #[must_use]
    pub const fn of_left(value: L) -> Self {
        Left(value)
    }

    /// Creates a right-holding `Either`.
    #[must_use]
    pub const fn of_right(value: R) -> Self {
        Right(value)
    }

    /// Creates a left-holding `Either` from a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `value` is `None`.
    pub fn try_left(value: Option<L>) -> Result<Self, InvalidArgument> {
        require(value, "value").map(Left)
    }

    /// Creates a right-holding `Either` from a value that may be absent.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `value` is `None`.
    pub fn try_right(value: Option<R>) -> Result<Self, InvalidArgument> {
        require(value, "value").map(Right)
    }

    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Left(_))
    }

    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Right(_))
    }

    /// The left value, if present.
    #[must_use]
    pub fn left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }

    /// The right value, if present.
    #[must_use]
    pub fn right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    #[must_use]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }

    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Left(l) => Left(l),
            Right(r) => Right(r),
        }
    }

    /// Consumes the `Either`, applying exactly one of the two functions.
    ///
    /// `on_left` runs for a `Left`, `on_right` for a `Right`; the other is
    /// never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use dichotomy::either::Either;
    ///
    /// let e: Either<&str, i32> = Either::of_right(5);
    /// assert_eq!(e.fold(str::len, |n| n as usize * 2), 10);
    /// ```
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Left(l) => on_left(l),
            Right(r) => on_right(r),
        }
    }

    /// Like [`fold`](Self::fold), over borrowed values.
    pub fn fold_ref<'a, T, FL, FR>(&'a self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(&'a L) -> T,
        FR: FnOnce(&'a R) -> T,
    {
        self.as_ref().fold(on_left, on_right)
    }

    /// Runs one of two side-effecting functions against the held value.
    pub fn consume<FL, FR>(&self, on_left: FL, on_right: FR)
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R),
    {
        self.fold_ref(on_left, on_right);
    }

    /// Transforms whichever side is present.
    pub fn map<L2, R2, FL, FR>(self, left_fn: FL, right_fn: FR) -> Either<L2, R2>
    where
        FL: FnOnce(L) -> L2,
        FR: FnOnce(R) -> R2,
    {
        self.fold(|l| Left(left_fn(l)), |r| Right(right_fn(r)))
    }

    /// Transforms a left value; a right value passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dichotomy::either::Either;
    ///
    /// let e: Either<i32, &str> = Either::of_left(2);
    /// assert_eq!(e.map_left(|n| n + 1), Either::of_left(3));
    ///
    /// let e: Either<i32, &str> = Either::of_right("ok");
    /// assert_eq!(e.map_left(|n| n + 1), Either::of_right("ok"));
    /// ```
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        self.map(f, core::convert::identity)
    }

    /// Transforms a right value; a left value passes through untouched.
    pub fn map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        self.map(core::convert::identity, f)
    }

    pub fn flat_map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        self.fold(f, Right)
    }

    pub fn flat_map_right<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.fold(Left, f)
    }

    /// Exchanges the sides: `Left(x)` becomes `Right(x)` and vice versa.
    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Right, Left)
    }

    /// The left value, or `default` if this holds a right value.
    #[must_use]
    pub fn left_or(self, default: L) -> L {
        self.left().unwrap_or(default)
    }

    /// The right value, or `default` if this holds a left value.
    #[must_use]
    pub fn right_or(self, default: R) -> R {
        self.right().unwrap_or(default)
    }

    /// The right value, or one derived from the left value.
    #[must_use]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, core::convert::identity)
    }

    /// `true` if this holds a right value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        self.fold_ref(|_| false, |r| r == value)
    }

    /// `true` if this holds a left value equal to `value`.
    #[must_use]
    pub fn contains_left(&self, value: &L) -> bool
    where
        L: PartialEq,
    {
        self.fold_ref(|l| l == value, |_| false)
    }
}

impl<T> Either<T, T> {
    /// The held value, whichever side it is on.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.fold(core::convert::identity, core::convert::identity)
    }
}
