//! Control-flow outcome of a prompt or handler step.

/// Either a resolved value or a control signal asking the caller to stop.
///
/// Signals are values, not errors: they are returned inside `Ok` and the caller
/// decides what to do with them. [`resolved!`](crate::resolved) unwraps the value or
/// returns the signal early from the enclosing function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The step completed with a value.
    Resolved(T),
    /// Abort the current step and go back to the main menu, printing the message if any.
    SoftExit(Option<String>),
    /// Leave the supervisor loop and terminate, printing the message if any.
    HardExit(Option<String>),
}

impl<T> Outcome<T> {
    pub fn soft_exit(message: impl Into<String>) -> Self {
        Outcome::SoftExit(Some(message.into()))
    }

    pub fn hard_exit(message: impl Into<String>) -> Self {
        Outcome::HardExit(Some(message.into()))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Resolved(value) => Outcome::Resolved(f(value)),
            Outcome::SoftExit(message) => Outcome::SoftExit(message),
            Outcome::HardExit(message) => Outcome::HardExit(message),
        }
    }

    /// Splits into the resolved value or the signal re-typed for any other payload.
    pub fn into_signal<U>(self) -> std::result::Result<T, Outcome<U>> {
        match self {
            Outcome::Resolved(value) => Ok(value),
            Outcome::SoftExit(message) => Err(Outcome::SoftExit(message)),
            Outcome::HardExit(message) => Err(Outcome::HardExit(message)),
        }
    }
}

/// Evaluates a `Result<Outcome<T>>`, propagating errors with `?` and signals with an
/// early `return Ok(signal)`; yields the resolved `T` otherwise.
///
/// ```ignore
/// let key = resolved!(prompter.select(&menu).await);
/// ```
#[macro_export]
macro_rules! resolved {
    ($outcome:expr) => {
        match $crate::prompt::Outcome::into_signal($outcome?) {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(signal) => return ::std::result::Result::Ok(signal),
        }
    };
}
