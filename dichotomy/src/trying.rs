use core::result::Result as StdResult;

use function::{ExBiFunction, ExFunction};

use crate::errors::{require, Error, InvalidArgument};

pub mod function;

/// The outcome of running an [`ExFunction`]: the value it produced, or the
/// failure it raised.
///
/// Construct one with [`Try::of`] or [`Try::of_bi`]; the operation runs
/// immediately and a failure becomes the `Err` payload instead of being
/// returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Try<V, X: Error> {
    Ok(V),
    Err(X),
}

impl<V, X: Error> Try<V, X> {
    /// Runs `op` on `arg`, capturing a failure as `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dichotomy::trying::Try;
    ///
    /// let parsed = Try::of(&|s: &str| s.parse::<i32>(), "12");
    /// assert_eq!(parsed, Try::Ok(12));
    ///
    /// let failed = Try::of(&|s: &str| s.parse::<i32>(), "twelve");
    /// assert!(failed.is_err());
    /// ```
    pub fn of<T, F>(op: &F, arg: T) -> Self
    where
        F: ExFunction<T, V, X> + ?Sized,
    {
        match op.apply(arg) {
            Ok(value) => Self::Ok(value),
            Err(exception) => Self::Err(exception),
        }
    }

    /// Runs the two-argument `op` on `(t, u)`, capturing a failure as `Err`.
    pub fn of_bi<T, U, F>(op: &F, t: T, u: U) -> Self
    where
        F: ExBiFunction<T, U, V, X> + ?Sized,
    {
        match op.apply(t, u) {
            Ok(value) => Self::Ok(value),
            Err(exception) => Self::Err(exception),
        }
    }

    /// [`Try::of`] for an operation that may be absent.
    ///
    /// Only a failure raised by `op` is captured; a missing `op` is reported
    /// to the caller.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `op` is `None`.
    pub fn try_of<T, F>(op: Option<F>, arg: T) -> StdResult<Self, InvalidArgument>
    where
        F: ExFunction<T, V, X>,
    {
        let op = require(op, "op")?;
        Ok(Self::of(&op, arg))
    }

    /// [`Try::of_bi`] for an operation that may be absent.
    ///
    /// # Errors
    ///
    /// [`InvalidArgument::Absent`] if `op` is `None`.
    pub fn try_of_bi<T, U, F>(op: Option<F>, t: T, u: U) -> StdResult<Self, InvalidArgument>
    where
        F: ExBiFunction<T, U, V, X>,
    {
        let op = require(op, "op")?;
        Ok(Self::of_bi(&op, t, u))
    }

    #[must_use]
    pub const fn of_ok(value: V) -> Self {
        Self::Ok(value)
    }

    #[must_use]
    pub const fn of_err(exception: X) -> Self {
        Self::Err(exception)
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// The produced value, if the operation succeeded.
    #[must_use]
    pub fn value(self) -> Option<V> {
        self.fold(Some, |_| None)
    }

    /// The captured failure, if the operation failed.
    #[must_use]
    pub fn exception(self) -> Option<X> {
        self.fold(|_| None, Some)
    }

    /// Consumes the `Try`, applying `on_ok` to a value or `on_err` to a
    /// captured failure. Exactly one of the two is called.
    pub fn fold<T, FO, FE>(self, on_ok: FO, on_err: FE) -> T
    where
        FO: FnOnce(V) -> T,
        FE: FnOnce(X) -> T,
    {
        match self {
            Self::Ok(v) => on_ok(v),
            Self::Err(x) => on_err(x),
        }
    }

    /// Applies a fallible mapper to the value.
    ///
    /// A failure from `f` is captured in the returned `Try`; an existing
    /// failure passes through and `f` is not run.
    pub fn map<V2, F>(self, f: F) -> Try<V2, X>
    where
        F: ExFunction<V, V2, X>,
    {
        self.fold(|v| Try::of(&f, v), Try::Err)
    }

    /// Chains another capturing step onto the value.
    pub fn and_then<V2, F>(self, f: F) -> Try<V2, X>
    where
        F: FnOnce(V) -> Try<V2, X>,
    {
        self.fold(f, Try::Err)
    }

    /// Turns a captured failure back into a value through `f`.
    ///
    /// If `f` fails too, its failure is what gets captured.
    #[must_use]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: ExFunction<X, V, X>,
    {
        self.fold(Self::Ok, |x| Self::of(&f, x))
    }

    /// The value, or `default` if the operation failed.
    #[must_use]
    pub fn get_or_else(self, default: V) -> V {
        self.value().unwrap_or(default)
    }

    /// Hands the outcome back as a plain `Result` so the failure can be
    /// re-raised with `?`.
    ///
    /// # Errors
    ///
    /// The captured failure, if there is one.
    pub fn get_or_throw(self) -> StdResult<V, X> {
        self.fold(Ok, Err)
    }
}

impl<V, X: Error> From<StdResult<V, X>> for Try<V, X> {
    fn from(value: StdResult<V, X>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(x) => Self::Err(x),
        }
    }
}

impl<V, X: Error> From<Try<V, X>> for StdResult<V, X> {
    fn from(value: Try<V, X>) -> Self {
        value.get_or_throw()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;
    use core::num::ParseIntError;

    use alloc::string::{String, ToString};

    use super::Try;
    use crate::errors::InvalidArgument;

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("lookup failed: {0}")]
    struct LookupFailed(String);

    fn parse(s: &str) -> Result<i32, ParseIntError> {
        s.trim().parse()
    }

    fn parse_failure(s: &str) -> ParseIntError {
        s.parse::<i32>().unwrap_err()
    }

    #[test]
    fn test_of_captures_value() {
        assert_eq!(Try::of(&parse, " 12 "), Try::Ok(12));
    }

    #[test]
    fn test_of_captures_failure_as_payload() {
        let captured = Try::of(&parse, "nope");
        assert_eq!(captured, Try::Err(parse_failure("nope")));

        let branch = Cell::new("");
        let out = captured.fold(
            |_| {
                branch.set("ok");
                String::new()
            },
            |x| {
                branch.set("err");
                x.to_string()
            },
        );
        assert_eq!(branch.get(), "err");
        assert_eq!(out, parse_failure("nope").to_string());
    }

    #[test]
    fn test_of_bi() {
        let lookup = |key: &str, fallback: bool| {
            if key == "known" || fallback {
                Ok(1)
            } else {
                Err(LookupFailed(key.to_string()))
            }
        };
        assert_eq!(Try::of_bi(&lookup, "known", false), Try::Ok(1));
        assert_eq!(
            Try::of_bi(&lookup, "other", false),
            Try::Err(LookupFailed("other".to_string()))
        );
    }

    #[test]
    fn test_try_of_rejects_absent_op() {
        let missing: Option<fn(&str) -> Result<i32, ParseIntError>> = None;
        assert_eq!(Try::try_of(missing, "1"), Err(InvalidArgument::Absent("op")));
        assert_eq!(Try::try_of(Some(parse), "1"), Ok(Try::Ok(1)));
    }

    #[test]
    fn test_try_of_bi_rejects_absent_op() {
        let missing: Option<fn(i32, i32) -> Result<i32, LookupFailed>> = None;
        assert_eq!(Try::try_of_bi(missing, 1, 2), Err(InvalidArgument::Absent("op")));

        let add = |a: i32, b: i32| Ok::<i32, LookupFailed>(a + b);
        assert_eq!(Try::try_of_bi(Some(add), 1, 2), Ok(Try::Ok(3)));
    }

    #[test]
    fn test_map_captures_mapper_failure() {
        let ok: Try<&str, ParseIntError> = Try::of_ok("21");
        assert_eq!(ok.map(parse).map(|n: i32| Ok(n * 2)), Try::Ok(42));

        let bad: Try<&str, ParseIntError> = Try::of_ok("x");
        assert!(bad.map(parse).is_err());
    }

    #[test]
    fn test_map_skips_existing_failure() {
        let called = Cell::new(false);
        let failed: Try<i32, ParseIntError> = Try::of_err(parse_failure("x"));
        let mapped = failed.map(|n: i32| {
            called.set(true);
            Ok(n)
        });
        assert!(mapped.is_err());
        assert!(!called.get());
    }

    #[test]
    fn test_and_then() {
        let ok: Try<&str, ParseIntError> = Try::of_ok("5");
        assert_eq!(ok.and_then(|s| Try::of(&parse, s)), Try::Ok(5));
    }

    #[test]
    fn test_recover() {
        let failed: Try<i32, LookupFailed> = Try::of_err(LookupFailed("a".to_string()));
        assert_eq!(failed.clone().recover(|_: LookupFailed| Ok(0)), Try::Ok(0));
        assert_eq!(
            failed.recover(|x: LookupFailed| Err(LookupFailed(x.0 + "b"))),
            Try::Err(LookupFailed("ab".to_string()))
        );

        let ok: Try<i32, LookupFailed> = Try::of_ok(3);
        assert_eq!(ok.recover(|_: LookupFailed| Ok(0)), Try::Ok(3));
    }

    #[test]
    fn test_get_or_throw_reraises() {
        fn run(input: &str) -> Result<i32, ParseIntError> {
            let n = Try::of(&parse, input).get_or_throw()?;
            Ok(n + 1)
        }
        assert_eq!(run("1"), Ok(2));
        assert_eq!(run("x"), Err(parse_failure("x")));
    }

    #[test]
    fn test_accessors() {
        let failed = Try::of(&parse, "x");
        assert_eq!(failed.clone().value(), None);
        assert_eq!(failed.clone().exception(), Some(parse_failure("x")));
        assert_eq!(failed.get_or_else(9), 9);
    }

    #[test]
    fn test_std_result_conversion() {
        let std_err: Result<i32, ParseIntError> = Err(parse_failure("x"));
        let captured = Try::from(std_err.clone());
        assert!(captured.is_err());
        assert_eq!(Result::from(captured), std_err);
    }
}
