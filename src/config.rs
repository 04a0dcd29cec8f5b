//! Opt-in diagnostics for errors.

use super::{Result};

/// The environment variable read by [`Config::from_env()`].
pub const SHOW_ERROR_DETAILS_VAR: &str = "DENSEMAT_SHOW_ERROR_DETAILS";

/// Controls whether errors are reported through the [`log`] facade.
///
/// Nothing in this crate reads a global flag. Pass a `Config` to
/// [`Report::report()`] wherever you want a failure to leave a trace.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log every reported error at `error` level. Off by default.
    pub show_error_details: bool,
}

impl Config {
    /// A `Config` that logs reported errors.
    pub fn verbose() -> Self { Self {show_error_details: true} }

    /// Reads [`SHOW_ERROR_DETAILS_VAR`]. `1`, `true`, `yes` and `on` (in any
    /// case) enable the flag; anything else, or an unset variable, leaves it
    /// off.
    pub fn from_env() -> Self {
        let show_error_details = std::env::var(SHOW_ERROR_DETAILS_VAR)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);
        Self {show_error_details}
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

// ----------------------------------------------------------------------------

/// Implemented by [`Result`] to log its error according to a [`Config`].
///
/// ```
/// use densemat::{matrix, Config, Report, determinant};
/// let config = Config::default();
/// let m = matrix![[1, 2, 3]];
/// assert!(determinant(&m).report(&config).is_err());
/// ```
pub trait Report: Sized {
    /// Returns `self` unchanged, having logged the error if there is one and
    /// `config.show_error_details` is set.
    fn report(self, config: &Config) -> Self;
}

impl<T> Report for Result<T> {
    fn report(self, config: &Config) -> Self {
        if let Err(e) = &self {
            if config.show_error_details {
                log::error!("densemat: {}", e);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArithmeticError, Error};

    #[test]
    fn default_is_quiet() {
        assert!(!Config::default().show_error_details);
        assert!(Config::verbose().show_error_details);
    }

    #[test]
    fn flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("Yes"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn report_passes_through() {
        let _ = env_logger::builder().is_test(true).try_init();
        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.report(&Config::verbose()), Ok(3));
        let err: Result<u8> = Err(Error::Arithmetic(ArithmeticError::TooManySlices));
        assert_eq!(err.clone().report(&Config::verbose()), err);
    }
}
