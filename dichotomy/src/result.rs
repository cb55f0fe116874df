use core::result::Result as StdResult;

use crate::errors::{require, InvalidArgument};

/// The outcome of an operation: a success value `V` or an error value `E`.
///
/// Structurally the same as [`crate::either::Either`], but `Ok` is the happy
/// path. Unlike [`crate::trying::Try`], `E` may be any type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<V, E> {
    Ok(V),
    Err(E),
}

impl<V, E> Result<V, E> {
    #[must_use]
    pub const fn of_ok(value: V) -> Self {
        Self::Ok(value)
    }

    #[must_use]
    pub const fn of_err(error: E) -> Self {
        Self::Err(error)
    }

    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `value` is `None`.
    pub fn try_ok(value: Option<V>) -> StdResult<Self, InvalidArgument> {
        require(value, "value").map(Self::Ok)
    }

    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `error` is `None`.
    pub fn try_err(error: Option<E>) -> StdResult<Self, InvalidArgument> {
        require(error, "error").map(Self::Err)
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    #[must_use]
    pub fn ok(self) -> Option<V> {
        self.fold(Some, |_| None)
    }

    #[must_use]
    pub fn err(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    #[must_use]
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Ok(v) => Result::Ok(v),
            Self::Err(e) => Result::Err(e),
        }
    }

    /// Consumes the result, applying `on_ok` to a success or `on_err` to an
    /// error. Exactly one of the two is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use dichotomy::result::Result;
    ///
    /// let r: Result<i32, &str> = Result::of_err("bad");
    /// assert_eq!(r.fold(|v| v.to_string(), |e| format!("error: {e}")), "error: bad");
    /// ```
    pub fn fold<T, FO, FE>(self, on_ok: FO, on_err: FE) -> T
    where
        FO: FnOnce(V) -> T,
        FE: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(e) => on_err(e),
        }
    }

    pub fn map<V2, F>(self, f: F) -> Result<V2, E>
    where
        F: FnOnce(V) -> V2,
    {
        self.fold(|v| Result::Ok(f(v)), Result::Err)
    }

    pub fn map_err<E2, F>(self, f: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.fold(Result::Ok, |e| Result::Err(f(e)))
    }

    /// Chains a further fallible step onto a success; errors pass through.
    pub fn and_then<V2, F>(self, f: F) -> Result<V2, E>
    where
        F: FnOnce(V) -> Result<V2, E>,
    {
        self.fold(f, Result::Err)
    }

    /// Attempts recovery from an error; successes pass through.
    pub fn or_else<E2, F>(self, f: F) -> Result<V, E2>
    where
        F: FnOnce(E) -> Result<V, E2>,
    {
        self.fold(Result::Ok, f)
    }

    /// Exchanges success and error.
    #[must_use]
    pub fn swap(self) -> Result<E, V> {
        self.fold(Result::Err, Result::Ok)
    }

    /// The success value, or `default`.
    #[must_use]
    pub fn get_or_else(self, default: V) -> V {
        self.ok().unwrap_or(default)
    }

    /// The success value, or one computed from the error.
    #[must_use]
    pub fn get_or_else_get<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        self.fold(core::convert::identity, f)
    }

    /// Runs `f` against the success value, if any.
    pub fn match_ok<F>(&self, f: F)
    where
        F: FnOnce(&V),
    {
        if let Self::Ok(v) = self {
            f(v);
        }
    }

    /// Runs `f` against the error value, if any.
    pub fn match_err<F>(&self, f: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Err(e) = self {
            f(e);
        }
    }
}

impl<V, E> From<StdResult<V, E>> for Result<V, E> {
    fn from(value: StdResult<V, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<V, E> From<Result<V, E>> for StdResult<V, E> {
    fn from(value: Result<V, E>) -> Self {
        value.fold(Ok, Err)
    }
}
