//! Extension traits for failures that are logged rather than propagated.

use core::fmt::Display;

use tracing::{debug, error, warn};

/// Log the error then panic. Reserved for failures the host cannot continue after.
pub fn log_and_panic<Err: Display>(error: Err, message: &str) -> ! {
    error!("{message}: {error}");

    panic!("{message}: {error}");
}

/// Log the error as a warning.
pub fn report<Err: Display>(error: Err, message: &str) {
    warn!("{message}: {error}");
}

/// Handle a failed value by logging it.
pub trait Failure<T> {
    /// Unwrap the value, logging and panicking on failure.
    fn log_and_panic(self, message: &str) -> T;

    /// Convert to an option, logging a warning on failure.
    fn report(self, message: &str) -> Option<T>;
}

/// Discard a result whose failure needs no handling.
pub trait Ignore {
    /// Discard the value, noting the call site at debug level on failure.
    fn ignore(self);
}

impl<T, E: Display> Failure<T> for Result<T, E> {
    fn log_and_panic(self, message: &str) -> T {
        match self {
            Ok(value) => value,
            Err(error) => log_and_panic(error, message),
        }
    }

    fn report(self, message: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                report(error, message);
                None
            }
        }
    }
}

impl<T, E> Ignore for Result<T, E> {
    #[track_caller]
    fn ignore(self) {
        if self.is_err() {
            debug!("Ignoring error ({})", core::panic::Location::caller());
        }
    }
}

impl<T> Failure<T> for Option<T> {
    fn log_and_panic(self, message: &str) -> T {
        match self {
            Some(value) => value,
            None => log_and_panic("Was None", message),
        }
    }

    fn report(self, message: &str) -> Self {
        if self.is_none() {
            report("Was None", message);
        }
        self
    }
}
