/// Capability required of a value stored as a captured failure.
///
/// Anything implementing [`core::error::Error`] qualifies.
pub trait Error: core::error::Error {}

impl<T: core::error::Error + ?Sized> Error for T {}

/// A caller handed in an absent value where one is required.
///
/// This is a contract violation, not a modeled outcome: it is returned to the
/// caller and never stored inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidArgument {
    #[error("`{0}` must not be absent")]
    Absent(&'static str),
}

/// Unwraps `value`, or reports which argument was missing.
///
/// # Errors
///
/// Returns [`InvalidArgument::Absent`] naming `what` when `value` is `None`.
///
/// # Examples
///
/// ```
/// use dichotomy::errors::{require, InvalidArgument};
///
/// assert_eq!(require(Some(3), "value"), Ok(3));
/// assert_eq!(require::<i32>(None, "value"), Err(InvalidArgument::Absent("value")));
/// ```
pub fn require<T>(value: Option<T>, what: &'static str) -> Result<T, InvalidArgument> {
    value.ok_or(InvalidArgument::Absent(what))
}

#[cfg(test)]
mod tests {
    use super::{require, Error, InvalidArgument};
    use alloc::string::ToString;

    #[derive(Debug, thiserror::Error)]
    #[error("boom")]
    struct Boom;

    fn assert_error<X: Error + ?Sized>(_: &X) {}

    #[test]
    fn test_require_present() {
        assert_eq!(require(Some("x"), "value"), Ok("x"));
    }

    #[test]
    fn test_require_absent() {
        let err = require::<u8>(None, "either").unwrap_err();
        assert_eq!(err, InvalidArgument::Absent("either"));
        assert_eq!(err.to_string(), "`either` must not be absent");
    }

    #[test]
    fn test_error_capability_is_blanket() {
        assert_error(&Boom);
        assert_error(&InvalidArgument::Absent("x"));
        let boxed: alloc::boxed::Box<dyn core::error::Error> = alloc::boxed::Box::new(Boom);
        assert_error(&*boxed);
    }
}
