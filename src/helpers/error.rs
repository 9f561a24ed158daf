//! Helpers to render errors as text.

/// Renders an [`Error`] along with its whole chain of [`source`]s.
///
/// The first line is the error's own [`Display`] output; each following line starts with
/// `caused by: ` and describes the next error in the chain. If backtrace support is available
/// (see [`backtrace_message`]) and the error carries a [`Backtrace`](std::backtrace::Backtrace),
/// it is appended at the end.
///
/// [`Error`]: std::error::Error
/// [`source`]: std::error::Error::source
/// [`Display`]: std::fmt::Display
#[cfg(not(tarpaulin_include))]
pub fn recursive_error_message<E>(error: &E) -> String
where
    E: std::error::Error,
{
    let causes = std::iter::successors(error.source(), |current| current.source());

    let mut message = error.to_string();
    for cause in causes {
        message.push_str("\ncaused by: ");
        message.push_str(&cause.to_string());
    }

    if let Some(backtrace_msg) = backtrace_message(error) {
        message.push_str("\n\nBacktrace: ");
        message.push_str(&backtrace_msg);
    }

    message
}

/// Attempts to get backtrace information for an [`Error`].
///
/// Only available on Nightly (see the `backtrace_support` config set by the build script).
///
/// [`Error`]: std::error::Error
#[cfg(not(tarpaulin_include))]
#[cfg(backtrace_support)]
pub fn backtrace_message<E>(error: &E) -> Option<String>
where
    E: std::error::Error,
{
    std::error::request_ref::<std::backtrace::Backtrace>(error)
        .map(|backtrace| format!("{:#}", backtrace))
}

#[cfg(not(tarpaulin_include))]
#[cfg(not(backtrace_support))]
#[doc(hidden)]
pub fn backtrace_message<E>(_error: &E) -> Option<String>
where
    E: std::error::Error,
{
    None
}
