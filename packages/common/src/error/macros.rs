//! Shorthand for building and returning storefront errors
//!
//! The first argument names an [`ErrorKind`](crate::ErrorKind) variant; any
//! remaining arguments are `format!` arguments for the context message.

/// Build an [`Error`](crate::Error) of the named kind
///
/// ```
/// use storefront_common::{ErrorKind, err};
///
/// let total = 0;
/// let error = err!(Validation, "total_pages must be at least 1, got {total}");
/// assert_eq!(error.kind(), &ErrorKind::Validation);
/// assert_eq!(error.get_context(), Some("total_pages must be at least 1, got 0"));
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::Error::new($crate::ErrorKind::$kind)
    };
    ($kind:ident, $($fmt:tt)+) => {
        $crate::Error::new($crate::ErrorKind::$kind).context(format!($($fmt)+))
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return Err($crate::err!($($arg)+).into())
    };
}

/// Return early unless `cond` holds.
///
/// Without a message the failed condition itself becomes the context.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident) => {
        if !($cond) {
            $crate::bail!($kind, "condition failed: {}", stringify!($cond));
        }
    };
    ($cond:expr, $kind:ident, $($fmt:tt)+) => {
        if !($cond) {
            $crate::bail!($kind, $($fmt)+);
        }
    };
}
