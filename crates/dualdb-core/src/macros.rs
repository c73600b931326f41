/// Returns early with an ad-hoc [`Error`](crate::Error) built from format args.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`](crate::Error) from format args.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// Builds a [`Condition`](crate::stmt::Condition) from its text and positional parameters.
///
/// ```
/// # use dualdb_core::condition;
/// let cond = condition!("age > ? AND name = ?", 30, "Ann");
/// assert_eq!(cond.placeholder_count(), 2);
/// ```
#[macro_export]
macro_rules! condition {
    ($text:expr $(, $param:expr)* $(,)?) => {
        $crate::stmt::Condition::new($text)
            $( .param($param) )*
    };
}
